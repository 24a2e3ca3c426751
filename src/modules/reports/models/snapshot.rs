use rust_decimal::Decimal;

use crate::modules::consultants::models::Consultant;
use crate::modules::invoices::models::Invoice;

/// Everything fetched for one selected consultant over the request window
#[derive(Debug, Clone, PartialEq)]
pub struct ConsultantSnapshot {
    pub consultant: Consultant,
    pub fixed_cost: Decimal,
    pub invoices: Vec<Invoice>,
}

impl ConsultantSnapshot {
    pub fn new(consultant: Consultant, fixed_cost: Decimal, invoices: Vec<Invoice>) -> Self {
        Self {
            consultant,
            fixed_cost,
            invoices,
        }
    }
}
