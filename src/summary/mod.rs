//! Dashboard module
//!
//! Sums the trips within a date range per expense category and breaks a
//! single category down per vehicle.

mod aggregation;
mod cards;
mod category;
mod handlers;
mod metrics;
mod query;
mod range;

pub use handlers::{get_category_breakdown, get_dashboard_page, get_dashboard_summary};
pub use metrics::{SummaryMetrics, SummaryMode};
