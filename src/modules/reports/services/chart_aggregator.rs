use rust_decimal::Decimal;

use crate::modules::invoices::services::InvoiceAggregator;
use crate::modules::reports::models::{ChartResult, ChartSeriesPoint, ConsultantSnapshot};

/// Whole-period net revenue per consultant against the average fixed cost
pub struct ChartAggregator;

impl ChartAggregator {
    pub fn aggregate(snapshots: &[ConsultantSnapshot]) -> ChartResult {
        let series = snapshots
            .iter()
            .map(|snapshot| ChartSeriesPoint {
                consultant_name: snapshot.consultant.display_name.clone(),
                net_revenue: InvoiceAggregator::period_net_revenue(&snapshot.invoices),
            })
            .collect();

        ChartResult {
            series,
            average_fixed_cost: Self::average_fixed_cost(snapshots),
        }
    }

    /// Arithmetic mean over the selected consultants, zero for an empty selection
    pub fn average_fixed_cost(snapshots: &[ConsultantSnapshot]) -> Decimal {
        if snapshots.is_empty() {
            return Decimal::ZERO;
        }

        let sum: Decimal = snapshots.iter().map(|snapshot| snapshot.fixed_cost).sum();
        sum / Decimal::from(snapshots.len())
    }
}
