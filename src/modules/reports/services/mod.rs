pub mod chart_aggregator;
pub mod performance_service;
pub mod pie_aggregator;
pub mod report_assembler;

pub use chart_aggregator::ChartAggregator;
pub use performance_service::{PerformanceQuery, PerformanceService};
pub use pie_aggregator::PieAggregator;
pub use report_assembler::ReportAssembler;
