use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{MonthKey, MonthRange};
use crate::modules::invoices::models::Invoice;

/// Net revenue and commission accumulated for one month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyInvoiceSums {
    pub net_revenue: Decimal,
    pub commission: Decimal,
}

/// Buckets a consultant's invoices by calendar month
pub struct InvoiceAggregator;

impl InvoiceAggregator {
    /// Monthly sums for months with at least one invoice inside `range`
    ///
    /// Invoices whose issue month falls outside `range` are dropped.
    pub fn monthly(invoices: &[Invoice], range: &MonthRange) -> BTreeMap<MonthKey, MonthlyInvoiceSums> {
        let mut buckets: BTreeMap<MonthKey, MonthlyInvoiceSums> = BTreeMap::new();

        for invoice in invoices {
            let month = invoice.month();
            if !range.contains(month) {
                debug!(
                    consultant = %invoice.consultant_id,
                    issue_date = %invoice.issue_date,
                    "Skipping invoice outside requested months"
                );
                continue;
            }

            let bucket = buckets.entry(month).or_default();
            bucket.net_revenue += invoice.net_revenue();
            bucket.commission += invoice.commission();
        }

        buckets
    }

    /// Net revenue over every invoice given, without monthly granularity
    pub fn period_net_revenue(invoices: &[Invoice]) -> Decimal {
        invoices.iter().map(Invoice::net_revenue).sum()
    }
}
