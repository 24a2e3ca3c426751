use rust_decimal::Decimal;

use crate::modules::consultants::models::SalaryRecord;

/// Resolves a consultant's fixed cost from their salary history
///
/// Fixed cost is the gross salary of the record with the latest effective date.
/// It is applied unchanged to every month of a report.
pub struct FixedCostResolver;

impl FixedCostResolver {
    /// Latest gross salary, or zero when the consultant has no salary record
    pub fn resolve(records: &[SalaryRecord]) -> Decimal {
        records
            .iter()
            .max_by_key(|record| record.effective_date)
            .map(|record| record.gross_salary)
            .unwrap_or(Decimal::ZERO)
    }
}
