//! Filtering and aggregation over sales records.
//!
//! Every function here is pure: it borrows its input, allocates its output
//! and keeps no hidden state, so identical inputs always produce identical
//! results. Empty inputs yield zeros or empty collections, never errors.

use crate::schema::{Client, SaleRecord};
use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, HashSet};

/// Calendar month names as offered by the period filter; index 0 is the
/// "all months" choice, indices 1..=12 map to month numbers.
pub const MONTH_NAMES: [&str; 13] = [
    "Todos",
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Maps a month name from [`MONTH_NAMES`] to its 1-based number. Returns
/// `None` for "Todos" (no month filter) and for unknown names.
pub fn month_number(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|&m| m == name)
        .filter(|&idx| idx > 0)
        .map(|idx| idx as u32)
}

/// Optional year/month restriction on `sale_date`. `None` means "all".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodFilter {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

impl PeriodFilter {
    pub fn all() -> Self {
        Self::default()
    }

    fn matches(&self, date: NaiveDate) -> bool {
        self.year.map_or(true, |y| date.year() == y)
            && self.month.map_or(true, |m| date.month() == m)
    }
}

pub fn filter_by_period(sales: &[SaleRecord], filter: &PeriodFilter) -> Vec<SaleRecord> {
    sales
        .iter()
        .filter(|s| filter.matches(s.sale_date))
        .cloned()
        .collect()
}

pub fn filter_by_clients(sales: &[SaleRecord], selected: &HashSet<String>) -> Vec<SaleRecord> {
    sales
        .iter()
        .filter(|s| selected.contains(&s.client_name))
        .cloned()
        .collect()
}

/// Distinct sale years, newest first (the year choices offered alongside
/// "Todos").
pub fn available_years(sales: &[SaleRecord]) -> Vec<i32> {
    let mut years: Vec<i32> = sales
        .iter()
        .map(|s| s.sale_date.year())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years
}

/// Distinct client names in first-seen order; the valid choices for a
/// client filter over this slice.
pub fn client_names(sales: &[SaleRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for sale in sales {
        if seen.insert(sale.client_name.as_str()) {
            names.push(sale.client_name.clone());
        }
    }
    names
}

/// Sum of `value` over invoiced records.
pub fn total_invoiced(sales: &[SaleRecord]) -> f64 {
    sales
        .iter()
        .filter(|s| s.is_invoiced())
        .map(|s| s.value)
        .sum()
}

/// Sum of `value` over shipped records.
pub fn total_shipped(sales: &[SaleRecord]) -> f64 {
    sales
        .iter()
        .filter(|s| s.is_shipped())
        .map(|s| s.value)
        .sum()
}

/// Sum of `quantity_tons` over invoiced records.
pub fn tons_invoiced(sales: &[SaleRecord]) -> f64 {
    sales
        .iter()
        .filter(|s| s.is_invoiced())
        .map(|s| s.quantity_tons)
        .sum()
}

/// Invoiced value grouped by the calendar month of `invoice_date`, keyed
/// "YYYY-MM" and ordered by key. Records without an invoice date do not
/// produce a group.
pub fn monthly_invoiced(sales: &[SaleRecord]) -> Vec<(String, f64)> {
    let mut groups: BTreeMap<String, f64> = BTreeMap::new();
    for sale in sales {
        if let Some(invoiced) = sale.invoice_date {
            *groups
                .entry(invoiced.format("%Y-%m").to_string())
                .or_insert(0.0) += sale.value;
        }
    }
    groups.into_iter().collect()
}

/// Tonnage shipped per product, restricted to shipped records.
pub fn shipped_tons_by_product(sales: &[SaleRecord]) -> BTreeMap<String, f64> {
    let mut groups: BTreeMap<String, f64> = BTreeMap::new();
    for sale in sales {
        if sale.is_shipped() {
            *groups.entry(sale.product.clone()).or_insert(0.0) += sale.quantity_tons;
        }
    }
    groups
}

/// The `n` most recently invoiced sales, newest first. The sort is stable,
/// so records sharing an invoice date keep their insertion order.
pub fn latest_invoiced(sales: &[SaleRecord], n: usize) -> Vec<SaleRecord> {
    let mut invoiced: Vec<SaleRecord> = sales.iter().filter(|s| s.is_invoiced()).cloned().collect();
    invoiced.sort_by(|a, b| b.invoice_date.cmp(&a.invoice_date));
    invoiced.truncate(n);
    invoiced
}

/// One row of the client management table.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSummaryRow {
    pub client: Client,
    /// Total invoiced value; 0.0 when the client has no invoiced sales.
    pub total_value: f64,
    /// Date and value of the most recent invoiced sale, if any.
    pub last_sale: Option<(NaiveDate, f64)>,
}

/// Left join of clients against their invoiced sales: every client appears,
/// with zero totals and no last sale when nothing was invoiced.
pub fn client_summary(clients: &[Client], sales: &[SaleRecord]) -> Vec<ClientSummaryRow> {
    clients
        .iter()
        .map(|client| {
            let mut total_value = 0.0;
            let mut last_sale: Option<(NaiveDate, f64)> = None;
            for sale in sales {
                if sale.client_name != client.name {
                    continue;
                }
                if let Some(invoiced) = sale.invoice_date {
                    total_value += sale.value;
                    if last_sale.map_or(true, |(date, _)| invoiced > date) {
                        last_sale = Some((invoiced, sale.value));
                    }
                }
            }
            ClientSummaryRow {
                client: client.clone(),
                total_value,
                last_sale,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sale(
        id: u32,
        sale_date: NaiveDate,
        client: &str,
        product: &str,
        tons: f64,
        value: f64,
        invoice_date: Option<NaiveDate>,
        shipment_date: Option<NaiveDate>,
    ) -> SaleRecord {
        SaleRecord {
            id,
            sale_date,
            product: product.to_string(),
            client_name: client.to_string(),
            quantity_tons: tons,
            value,
            invoice_date,
            shipment_date,
        }
    }

    fn fixture() -> Vec<SaleRecord> {
        vec![
            // Invoiced and shipped.
            sale(
                1,
                date(2024, 1, 10),
                "Construtora Alfa",
                "Viga W",
                5.0,
                10_000.0,
                Some(date(2024, 1, 12)),
                Some(date(2024, 1, 20)),
            ),
            // Invoiced only.
            sale(
                2,
                date(2024, 2, 5),
                "Metalúrgica Beta",
                "Perfil U",
                3.0,
                7_500.0,
                Some(date(2024, 2, 8)),
                None,
            ),
            // Neither invoiced nor shipped.
            sale(
                3,
                date(2024, 2, 20),
                "Construtora Alfa",
                "Viga W",
                2.0,
                4_000.0,
                None,
                None,
            ),
            // Same invoice date as #2, later insertion.
            sale(
                4,
                date(2024, 2, 6),
                "Serralheria Gama",
                "Barra Chata",
                1.5,
                3_000.0,
                Some(date(2024, 2, 8)),
                Some(date(2024, 2, 15)),
            ),
            sale(
                5,
                date(2023, 11, 2),
                "Metalúrgica Beta",
                "Tubo Quadrado",
                4.0,
                9_000.0,
                Some(date(2023, 11, 4)),
                Some(date(2023, 11, 10)),
            ),
        ]
    }

    #[test]
    fn test_month_number_mapping() {
        assert_eq!(month_number("Todos"), None);
        assert_eq!(month_number("Janeiro"), Some(1));
        assert_eq!(month_number("Dezembro"), Some(12));
        assert_eq!(month_number("Brumário"), None);
    }

    #[test]
    fn test_filter_by_period_composes() {
        let sales = fixture();

        let all = filter_by_period(&sales, &PeriodFilter::all());
        assert_eq!(all.len(), sales.len());

        let year_only = filter_by_period(
            &sales,
            &PeriodFilter {
                year: Some(2024),
                month: None,
            },
        );
        assert_eq!(year_only.len(), 4);

        let feb_2024 = filter_by_period(
            &sales,
            &PeriodFilter {
                year: Some(2024),
                month: Some(2),
            },
        );
        assert_eq!(feb_2024.len(), 3);

        // Month without year matches that month in every year.
        let november = filter_by_period(
            &sales,
            &PeriodFilter {
                year: None,
                month: Some(11),
            },
        );
        assert_eq!(november.len(), 1);
    }

    #[test]
    fn test_filter_by_full_client_set_is_noop() {
        let sales = fixture();
        let all_names: HashSet<String> = client_names(&sales).into_iter().collect();
        let filtered = filter_by_clients(&sales, &all_names);
        assert_eq!(total_invoiced(&filtered), total_invoiced(&sales));
        assert_eq!(filtered.len(), sales.len());
    }

    #[test]
    fn test_totals_gate_on_date_presence() {
        let sales = fixture();
        assert_eq!(total_invoiced(&sales), 10_000.0 + 7_500.0 + 3_000.0 + 9_000.0);
        assert_eq!(total_shipped(&sales), 10_000.0 + 3_000.0 + 9_000.0);
        assert_eq!(tons_invoiced(&sales), 5.0 + 3.0 + 1.5 + 4.0);

        // Every shipped record in the fixture carries an invoice date, so
        // nothing un-invoiced can leak into shipped aggregates.
        for sale in sales.iter().filter(|s| s.is_shipped()) {
            assert!(sale.is_invoiced());
        }
    }

    #[test]
    fn test_empty_input_yields_zeros() {
        let empty: Vec<SaleRecord> = Vec::new();
        assert_eq!(total_invoiced(&empty), 0.0);
        assert_eq!(total_shipped(&empty), 0.0);
        assert_eq!(tons_invoiced(&empty), 0.0);
        assert!(monthly_invoiced(&empty).is_empty());
        assert!(shipped_tons_by_product(&empty).is_empty());
        assert!(latest_invoiced(&empty, 5).is_empty());
        assert!(available_years(&empty).is_empty());
    }

    #[test]
    fn test_monthly_invoiced_excludes_missing_dates() {
        let sales = fixture();
        let monthly = monthly_invoiced(&sales);
        assert_eq!(
            monthly,
            vec![
                ("2023-11".to_string(), 9_000.0),
                ("2024-01".to_string(), 10_000.0),
                ("2024-02".to_string(), 10_500.0),
            ]
        );
        // The un-invoiced R$ 4 000 sale produced no group at all.
        let grouped_total: f64 = monthly.iter().map(|(_, v)| v).sum();
        assert_eq!(grouped_total, total_invoiced(&sales));
    }

    #[test]
    fn test_shipped_tons_by_product() {
        let sales = fixture();
        let by_product = shipped_tons_by_product(&sales);
        assert_eq!(by_product.get("Viga W"), Some(&5.0));
        assert_eq!(by_product.get("Barra Chata"), Some(&1.5));
        assert_eq!(by_product.get("Tubo Quadrado"), Some(&4.0));
        // Invoiced-but-unshipped products are absent.
        assert_eq!(by_product.get("Perfil U"), None);
    }

    #[test]
    fn test_latest_invoiced_stable_ties() {
        let sales = fixture();
        let latest = latest_invoiced(&sales, 3);
        assert_eq!(latest.len(), 3);
        // Two records share 2024-02-08; insertion order breaks the tie.
        assert_eq!(latest[0].id, 2);
        assert_eq!(latest[1].id, 4);
        assert_eq!(latest[2].id, 1);
    }

    #[test]
    fn test_available_years_newest_first() {
        let sales = fixture();
        assert_eq!(available_years(&sales), vec![2024, 2023]);
    }

    #[test]
    fn test_client_summary_left_join() {
        let sales = fixture();
        let clients = vec![
            Client {
                name: "Construtora Alfa".to_string(),
                city: "São Paulo".to_string(),
                latitude: Some(-23.5505),
                longitude: Some(-46.6333),
                tax_id: "00.000.000/0001-00".to_string(),
                is_taxpayer: true,
            },
            Client {
                name: "Engenharia Delta".to_string(),
                city: "Curitiba".to_string(),
                latitude: Some(-25.4284),
                longitude: Some(-49.2733),
                tax_id: "00.000.000/0001-01".to_string(),
                is_taxpayer: true,
            },
        ];

        let summary = client_summary(&clients, &sales);
        assert_eq!(summary.len(), 2);

        let alfa = &summary[0];
        assert_eq!(alfa.total_value, 10_000.0);
        assert_eq!(alfa.last_sale, Some((date(2024, 1, 12), 10_000.0)));

        // No sales at all: still present, zeroed out.
        let delta = &summary[1];
        assert_eq!(delta.total_value, 0.0);
        assert_eq!(delta.last_sale, None);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let sales = fixture();
        let filter = PeriodFilter {
            year: Some(2024),
            month: None,
        };
        let first = filter_by_period(&sales, &filter);
        let second = filter_by_period(&sales, &filter);
        assert_eq!(first, second);
        assert_eq!(monthly_invoiced(&first), monthly_invoiced(&second));
        assert_eq!(total_invoiced(&first), total_invoiced(&second));
    }
}
