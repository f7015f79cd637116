use crate::error::{Result, SteelSalesError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Structural profiles offered for market-price analysis.
pub const STRUCTURAL_PROFILES: [&str; 6] = [
    "Viga W",
    "Viga I",
    "Cantoneira L",
    "Barra Chata",
    "Perfil U",
    "Tubo Quadrado",
];

/// Trapezoidal roofing sheets offered for market-price analysis.
pub const ROOFING_SHEETS: [&str; 3] = [
    "Telha Trapézio 25 (TR-25)",
    "Telha Trapézio 40 (TR-40)",
    "Telha Trapézio 100 (TR-100)",
];

/// Full product catalog used by the sales generator.
pub const SALE_PRODUCTS: [&str; 7] = [
    "Viga W",
    "Viga I",
    "Cantoneira L",
    "Barra Chata",
    "Tubo Quadrado",
    "Tubo Redondo",
    "Perfil U",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Unique key within the store; duplicates are rejected on insert.
    pub name: String,
    pub city: String,
    /// `None` when the location is unknown. A raw `0.0` coming from user
    /// input is treated as unknown too (legacy sentinel).
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Formatted CNPJ, fictitious for demo data.
    pub tax_id: String,
    pub is_taxpayer: bool,
}

impl Client {
    /// Usable map coordinates, or `None` when either part is missing,
    /// non-finite, or the 0.0 "absent" sentinel.
    pub fn coords(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon))
                if lat.is_finite() && lon.is_finite() && lat != 0.0 && lon != 0.0 =>
            {
                Some((lat, lon))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: u32,
    pub sale_date: NaiveDate,
    pub product: String,
    /// Weak reference to [`Client::name`]; no foreign key is enforced.
    pub client_name: String,
    pub quantity_tons: f64,
    pub value: f64,
    pub invoice_date: Option<NaiveDate>,
    /// Only meaningful when `invoice_date` is present: goods ship after
    /// billing.
    pub shipment_date: Option<NaiveDate>,
}

impl SaleRecord {
    pub fn is_invoiced(&self) -> bool {
        self.invoice_date.is_some()
    }

    pub fn is_shipped(&self) -> bool {
        self.shipment_date.is_some()
    }
}

/// A candidate client discovered through LLM-assisted search. The whole set
/// is replaced on each successful search, never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prospect {
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ProductCategory {
    StructuralProfiles,
    MetalRoofing,
}

impl ProductCategory {
    pub fn products(&self) -> &'static [&'static str] {
        match self {
            Self::StructuralProfiles => &STRUCTURAL_PROFILES,
            Self::MetalRoofing => &ROOFING_SHEETS,
        }
    }

    /// Valid thickness interval in millimetres for items of this category.
    pub fn thickness_range_mm(&self) -> (f64, f64) {
        match self {
            Self::StructuralProfiles => (2.0, 25.4),
            Self::MetalRoofing => (0.35, 0.95),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum CuttingMaterial {
    CarbonSteelA36,
    StainlessSteel304,
    NavalAluminum5052,
}

impl CuttingMaterial {
    pub fn label(&self) -> &'static str {
        match self {
            Self::CarbonSteelA36 => "Aço Carbono A36",
            Self::StainlessSteel304 => "Aço Inoxidável 304",
            Self::NavalAluminum5052 => "Alumínio Naval 5052",
        }
    }
}

/// Parameters for a market-price analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRequest {
    pub category: ProductCategory,
    pub product: String,
    pub thickness_mm: f64,
    pub region: String,
}

impl PricingRequest {
    pub fn new(
        category: ProductCategory,
        product: impl Into<String>,
        thickness_mm: f64,
        region: impl Into<String>,
    ) -> Result<Self> {
        let product = product.into();
        let region = region.into();

        if !category.products().contains(&product.as_str()) {
            return Err(SteelSalesError::validation(
                "product",
                format!("'{}' is not in the {:?} catalog", product, category),
            ));
        }

        let (min, max) = category.thickness_range_mm();
        if !(min..=max).contains(&thickness_mm) {
            return Err(SteelSalesError::validation(
                "thickness_mm",
                format!(
                    "{:.2} mm is outside the valid range {:.2}-{:.2} mm",
                    thickness_mm, min, max
                ),
            ));
        }

        if region.trim().is_empty() {
            return Err(SteelSalesError::validation("region", "must not be empty"));
        }

        Ok(Self {
            category,
            product,
            thickness_mm,
            region,
        })
    }
}

/// Parameters for a plasma/laser/oxyfuel cutting quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuttingRequest {
    pub material: CuttingMaterial,
    pub thickness_mm: f64,
    pub cut_length_mm: u32,
    pub pierce_count: u32,
    pub quantity: u32,
}

impl CuttingRequest {
    pub const THICKNESS_RANGE_MM: (f64, f64) = (0.5, 50.8);
    pub const MIN_CUT_LENGTH_MM: u32 = 100;

    pub fn new(
        material: CuttingMaterial,
        thickness_mm: f64,
        cut_length_mm: u32,
        pierce_count: u32,
        quantity: u32,
    ) -> Result<Self> {
        let (min, max) = Self::THICKNESS_RANGE_MM;
        if !(min..=max).contains(&thickness_mm) {
            return Err(SteelSalesError::validation(
                "thickness_mm",
                format!(
                    "{:.2} mm is outside the valid range {:.2}-{:.2} mm",
                    thickness_mm, min, max
                ),
            ));
        }
        if cut_length_mm < Self::MIN_CUT_LENGTH_MM {
            return Err(SteelSalesError::validation(
                "cut_length_mm",
                format!("must be at least {} mm", Self::MIN_CUT_LENGTH_MM),
            ));
        }
        if pierce_count == 0 {
            return Err(SteelSalesError::validation(
                "pierce_count",
                "must be at least 1",
            ));
        }
        if quantity == 0 {
            return Err(SteelSalesError::validation("quantity", "must be at least 1"));
        }

        Ok(Self {
            material,
            thickness_mm,
            cut_length_mm,
            pierce_count,
            quantity,
        })
    }
}

/// Result of a cutting-quote interaction: the unit price extracted from the
/// LLM reply and the order total. Displayed once, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuttingQuote {
    pub request: CuttingRequest,
    pub unit_price: f64,
    pub total: f64,
}

impl CuttingQuote {
    pub fn from_unit_price(request: CuttingRequest, unit_price: f64) -> Self {
        let total = unit_price * f64::from(request.quantity);
        Self {
            request,
            unit_price,
            total,
        }
    }
}
