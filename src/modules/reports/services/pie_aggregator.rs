use rust_decimal::Decimal;

use crate::modules::invoices::services::InvoiceAggregator;
use crate::modules::reports::models::{ConsultantSnapshot, PieResult, PieSlice};

/// Each consultant's share of the group's whole-period net revenue
pub struct PieAggregator;

impl PieAggregator {
    pub fn aggregate(snapshots: &[ConsultantSnapshot]) -> PieResult {
        Self::from_net_revenue(snapshots.iter().map(|snapshot| {
            (
                snapshot.consultant.display_name.clone(),
                InvoiceAggregator::period_net_revenue(&snapshot.invoices),
            )
        }))
    }

    /// Build slices from `(consultant name, net revenue)` pairs
    ///
    /// A non-positive total yields zero percent everywhere and `has_data = false`.
    pub fn from_net_revenue(entries: impl IntoIterator<Item = (String, Decimal)>) -> PieResult {
        let entries: Vec<(String, Decimal)> = entries.into_iter().collect();
        let total: Decimal = entries.iter().map(|(_, net)| *net).sum();
        let has_data = total > Decimal::ZERO;

        let series = entries
            .into_iter()
            .map(|(consultant_name, net_revenue)| {
                let percent = if has_data {
                    net_revenue * Decimal::ONE_HUNDRED / total
                } else {
                    Decimal::ZERO
                };
                PieSlice {
                    consultant_name,
                    net_revenue,
                    percent,
                }
            })
            .collect();

        PieResult {
            series,
            total,
            has_data,
        }
    }
}
