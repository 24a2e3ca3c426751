pub mod memory_repository;
pub mod report_repository;

pub use memory_repository::InMemoryPerformanceRepository;
pub use report_repository::{MySqlPerformanceRepository, PerformanceRepository};
