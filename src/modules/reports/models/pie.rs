use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A consultant's share of the group's net revenue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieSlice {
    pub consultant_name: String,
    pub net_revenue: Decimal,
    /// 0-100, zero for every slice when the period has no revenue
    pub percent: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieResult {
    pub series: Vec<PieSlice>,
    pub total: Decimal,
    /// False when total net revenue is not positive and shares are undefined
    pub has_data: bool,
}

impl PieResult {
    pub fn percent_sum(&self) -> Decimal {
        self.series.iter().map(|slice| slice.percent).sum()
    }
}
