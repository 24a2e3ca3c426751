use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One bar: a consultant's net revenue over the whole period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeriesPoint {
    pub consultant_name: String,
    pub net_revenue: Decimal,
}

/// Bar series plus the flat average fixed cost reference line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartResult {
    pub series: Vec<ChartSeriesPoint>,
    pub average_fixed_cost: Decimal,
}
