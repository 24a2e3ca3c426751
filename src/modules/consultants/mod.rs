pub mod models;
pub mod services;

pub use models::{Consultant, ConsultantId, SalaryRecord};
pub use services::FixedCostResolver;
