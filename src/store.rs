//! Owned application state for a dashboard session.
//!
//! All collections live for the lifetime of the process and are mutated by a
//! single active interaction at a time. Handlers receive the state by
//! reference; there is no framework-managed global.

use crate::error::{Result, SteelSalesError};
use crate::schema::{Client, Prospect, SaleRecord, SALE_PRODUCTS};
use chrono::{Duration, Local, NaiveDate};
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub clients: Vec<Client>,
    pub sales: Vec<SaleRecord>,
    pub prospects: Vec<Prospect>,
}

/// Seed clients for the demo dataset: name, city, latitude, longitude,
/// taxpayer flag.
const SEED_CLIENTS: [(&str, &str, f64, f64, bool); 5] = [
    ("Construtora Alfa", "São Paulo", -23.5505, -46.6333, true),
    ("Metalúrgica Beta", "Rio de Janeiro", -22.9068, -43.1729, true),
    ("Serralheria Gama", "Belo Horizonte", -19.9167, -43.9345, false),
    ("Engenharia Delta", "Curitiba", -25.4284, -49.2733, true),
    ("Estruturas Épsilon", "Porto Alegre", -30.0346, -51.2177, true),
];

const DEMO_SALE_COUNT: usize = 200;

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state populated with synthetic clients and sales, mirroring
    /// a realistic billing pipeline: most sales get invoiced a few days
    /// after closing, and most invoiced sales ship within ten days.
    pub fn with_demo_data() -> Self {
        let mut rng = rand::thread_rng();

        let clients: Vec<Client> = SEED_CLIENTS
            .iter()
            .map(|&(name, city, lat, lon, taxpayer)| Client {
                name: name.to_string(),
                city: city.to_string(),
                latitude: Some(lat),
                longitude: Some(lon),
                tax_id: random_cnpj(&mut rng),
                is_taxpayer: taxpayer,
            })
            .collect();

        let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
        let end = Local::now().date_naive() - Duration::days(15);
        let span_days = (end - start).num_days().max(0);

        let mut sales = Vec::with_capacity(DEMO_SALE_COUNT);
        for i in 0..DEMO_SALE_COUNT {
            let sale_date = start + Duration::days(rng.gen_range(0..=span_days));

            let mut invoice_date = None;
            let mut shipment_date = None;
            if rng.gen_bool(0.9) {
                let invoiced = sale_date + Duration::days(rng.gen_range(1..=5));
                invoice_date = Some(invoiced);
                if rng.gen_bool(0.8) {
                    shipment_date = Some(invoiced + Duration::days(rng.gen_range(1..=10)));
                }
            }

            sales.push(SaleRecord {
                id: 1000 + i as u32,
                sale_date,
                product: SALE_PRODUCTS.choose(&mut rng).expect("non-empty").to_string(),
                client_name: clients
                    .choose(&mut rng)
                    .expect("non-empty")
                    .name
                    .clone(),
                quantity_tons: round2(rng.gen_range(1.0..15.0)),
                value: round2(rng.gen_range(5_000.0..75_000.0)),
                invoice_date,
                shipment_date,
            });
        }

        info!(
            "Generated demo dataset: {} clients, {} sales",
            clients.len(),
            sales.len()
        );

        Self {
            clients,
            sales,
            prospects: Vec::new(),
        }
    }

    /// Appends a new client. The name is the unique key: blank or duplicate
    /// names are rejected and nothing is stored.
    pub fn add_client(&mut self, client: Client) -> Result<()> {
        if client.name.trim().is_empty() {
            return Err(SteelSalesError::validation(
                "name",
                "company name is required",
            ));
        }
        if self.clients.iter().any(|c| c.name == client.name) {
            return Err(SteelSalesError::validation(
                "name",
                format!("a client named '{}' already exists", client.name),
            ));
        }

        info!("Adding client '{}'", client.name);
        self.clients.push(client);
        Ok(())
    }

    /// Replaces the whole prospect set at once. A reader never observes a
    /// partially updated list.
    pub fn replace_prospects(&mut self, prospects: Vec<Prospect>) {
        debug!(
            "Replacing {} prospects with {}",
            self.prospects.len(),
            prospects.len()
        );
        self.prospects = prospects;
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Formats a fictitious CNPJ like `12.345.678/0001-99`.
pub fn random_cnpj<R: Rng>(rng: &mut R) -> String {
    format!(
        "{:02}.{:03}.{:03}/0001-{:02}",
        rng.gen_range(10..100),
        rng.gen_range(100..1000),
        rng.gen_range(100..1000),
        rng.gen_range(10..100)
    )
}
