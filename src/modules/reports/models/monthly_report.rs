use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::MonthKey;
use crate::modules::consultants::models::ConsultantId;

/// One consultant's figures for one month of the requested range
///
/// Profit is never stored; it is derived from the other three figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyMetric {
    pub consultant_id: ConsultantId,
    pub consultant_name: String,
    pub month: MonthKey,
    pub net_revenue: Decimal,
    pub fixed_cost: Decimal,
    pub commission: Decimal,
}

impl MonthlyMetric {
    /// net revenue − (fixed cost + commission)
    pub fn profit(&self) -> Decimal {
        self.net_revenue - (self.fixed_cost + self.commission)
    }
}

/// Figures for one month summed across every selected consultant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthTotals {
    pub net_revenue: Decimal,
    pub fixed_cost: Decimal,
    pub commission: Decimal,
}

impl MonthTotals {
    pub fn profit(&self) -> Decimal {
        self.net_revenue - (self.fixed_cost + self.commission)
    }

    pub fn add(&mut self, metric: &MonthlyMetric) {
        self.net_revenue += metric.net_revenue;
        self.fixed_cost += metric.fixed_cost;
        self.commission += metric.commission;
    }
}

/// Monthly performance rows plus per-month totals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportResult {
    /// Ordered by consultant selection, then chronologically
    pub rows: Vec<MonthlyMetric>,
    pub totals: BTreeMap<MonthKey, MonthTotals>,
}

impl ReportResult {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows_for<'a>(
        &'a self,
        consultant_id: &'a ConsultantId,
    ) -> impl Iterator<Item = &'a MonthlyMetric> + 'a {
        self.rows
            .iter()
            .filter(move |row| &row.consultant_id == consultant_id)
    }
}
