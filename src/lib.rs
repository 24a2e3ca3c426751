//! Consultant Performance Service Library
//!
//! Computes per-consultant monthly net revenue, fixed cost, commission and
//! profit from invoice and salary records, plus whole-period chart and
//! revenue-share views over the same data.

pub mod config;
pub mod core;
pub mod modules;
pub mod telemetry;

// Re-export commonly used types
pub use modules::consultants;
pub use modules::invoices;
pub use modules::reports;
