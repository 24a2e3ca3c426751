// Invoice issued against one of a consultant's service orders.
//
// Tax and commission rates are stored as percentages (23 means 23%) and may be
// absent. They are converted to ratios here and nowhere else.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::percent_to_ratio;
use crate::core::MonthKey;
use crate::modules::consultants::models::ConsultantId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub consultant_id: ConsultantId,
    pub issue_date: NaiveDate,
    pub gross_amount: Decimal,
    /// Taxes included in the gross amount, as a percentage
    pub tax_rate_percent: Option<Decimal>,
    /// Consultant commission on net revenue, as a percentage
    pub commission_rate_percent: Option<Decimal>,
}

impl Invoice {
    pub fn new(
        consultant_id: impl Into<ConsultantId>,
        issue_date: NaiveDate,
        gross_amount: Decimal,
        tax_rate_percent: Option<Decimal>,
        commission_rate_percent: Option<Decimal>,
    ) -> Self {
        Self {
            consultant_id: consultant_id.into(),
            issue_date,
            gross_amount,
            tax_rate_percent,
            commission_rate_percent,
        }
    }

    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(self.issue_date)
    }

    /// gross × (1 − tax ratio)
    pub fn net_revenue(&self) -> Decimal {
        self.gross_amount * (Decimal::ONE - percent_to_ratio(self.tax_rate_percent))
    }

    /// net revenue × commission ratio
    pub fn commission(&self) -> Decimal {
        self.net_revenue() * percent_to_ratio(self.commission_rate_percent)
    }
}
