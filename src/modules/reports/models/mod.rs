mod chart;
mod monthly_report;
mod outcome;
mod pie;
mod snapshot;

pub use chart::{ChartResult, ChartSeriesPoint};
pub use monthly_report::{MonthTotals, MonthlyMetric, ReportResult};
pub use outcome::{ValidationKind, ValidationMessage, ViewOutcome};
pub use pie::{PieResult, PieSlice};
pub use snapshot::ConsultantSnapshot;
