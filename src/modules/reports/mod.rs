pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{ChartResult, PieResult, ReportResult, ViewOutcome};
pub use repositories::{InMemoryPerformanceRepository, MySqlPerformanceRepository, PerformanceRepository};
pub use services::{PerformanceQuery, PerformanceService};
