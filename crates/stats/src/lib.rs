//! `salesboard-stats`: seller performance statistics engine.
//!
//! Pure engine crate: receives a pre-loaded dataset, returns per-seller
//! revenue, profit, sales count, top products and rank bonus.
//! No CLI or IO dependencies.

pub mod aggregate;
pub mod bonus;
pub mod config;
pub mod engine;
pub mod error;
pub mod index;
pub mod load;
pub mod model;
pub mod rank;
pub mod report;
pub mod revenue;

pub use bonus::{BonusByProfit, BonusFn};
pub use config::SalesConfig;
pub use engine::{analyze, run, AnalyzeOptions};
pub use error::StatsError;
pub use model::{Dataset, ReportRow};
pub use report::SalesReport;
pub use revenue::{RevenueFn, SimpleRevenue};
