use std::collections::BTreeMap;

use crate::core::MonthRange;
use crate::modules::invoices::services::InvoiceAggregator;
use crate::modules::reports::models::{ConsultantSnapshot, MonthTotals, MonthlyMetric, ReportResult};

/// Builds the zero-filled consultant × month report
pub struct ReportAssembler;

impl ReportAssembler {
    /// One row per consultant per month of `range`, in snapshot order then
    /// chronological order. Months without invoices carry zero revenue and
    /// commission but still the consultant's fixed cost.
    pub fn assemble(snapshots: &[ConsultantSnapshot], range: &MonthRange) -> ReportResult {
        let months = range.months();
        let mut rows = Vec::with_capacity(snapshots.len() * months.len());

        for snapshot in snapshots {
            let sums = InvoiceAggregator::monthly(&snapshot.invoices, range);

            for &month in &months {
                let sums = sums.get(&month).copied().unwrap_or_default();
                rows.push(MonthlyMetric {
                    consultant_id: snapshot.consultant.id.clone(),
                    consultant_name: snapshot.consultant.display_name.clone(),
                    month,
                    net_revenue: sums.net_revenue,
                    fixed_cost: snapshot.fixed_cost,
                    commission: sums.commission,
                });
            }
        }

        let mut totals: BTreeMap<_, MonthTotals> = BTreeMap::new();
        for row in &rows {
            totals.entry(row.month).or_default().add(row);
        }

        ReportResult { rows, totals }
    }
}
