//! # Steel Sales Analytics
//!
//! Core library behind a sales dashboard for a structural-steel
//! distributor: in-memory client/sales records, period and client
//! filtering, revenue and tonnage aggregation, map centering, and
//! LLM-assisted prospect discovery and price/cutting quotes where the
//! model's free-text reply is parsed into structured values.
//!
//! The presentation layer (tabs, tables, charts, map tiles) is external:
//! everything here is pure values in, pure values out, plus one optional
//! HTTP boundary to the LLM behind the `groq` feature.
//!
//! ## Example
//!
//! ```rust
//! use steel_sales_analytics::*;
//! use std::collections::HashSet;
//!
//! let state = DashboardState::with_demo_data();
//!
//! let filter = PeriodFilter { year: Some(2024), month: None };
//! let in_period = filter_by_period(&state.sales, &filter);
//!
//! let names: HashSet<String> = client_names(&in_period).into_iter().collect();
//! let visible = filter_by_clients(&in_period, &names);
//!
//! let revenue = total_invoiced(&visible);
//! let view = map_view(&collect_coords(&state.clients, &state.prospects));
//! assert!(revenue >= 0.0);
//! assert!(view.zoom > 0);
//! ```

pub mod analytics;
pub mod error;
pub mod geo;
pub mod parser;
pub mod prompts;
pub mod schema;
pub mod store;

#[cfg(feature = "groq")]
pub mod llm;

pub use analytics::{
    available_years, client_names, client_summary, filter_by_clients, filter_by_period,
    latest_invoiced, monthly_invoiced, month_number, shipped_tons_by_product, tons_invoiced,
    total_invoiced, total_shipped, ClientSummaryRow, PeriodFilter, MONTH_NAMES,
};
pub use error::{Result, SteelSalesError};
pub use geo::{collect_coords, map_view, MapView, FALLBACK_CENTER, FALLBACK_ZOOM, REGIONAL_ZOOM};
pub use parser::{parse_prospects, parse_unit_price, quote_from_response};
pub use prompts::{cutting_prompt, pricing_prompt, prospect_search_prompt};
pub use schema::*;
pub use store::{random_cnpj, DashboardState};
