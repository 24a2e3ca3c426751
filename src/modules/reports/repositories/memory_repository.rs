use std::collections::HashSet;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::core::{AppError, Result};
use crate::modules::consultants::models::{Consultant, ConsultantId, SalaryRecord};
use crate::modules::consultants::services::FixedCostResolver;
use crate::modules::invoices::models::Invoice;

use super::report_repository::PerformanceRepository;

/// Repository backed by in-process records, for fixtures and local runs
#[derive(Debug, Clone, Default)]
pub struct InMemoryPerformanceRepository {
    consultants: Vec<Consultant>,
    salaries: Vec<SalaryRecord>,
    invoices: Vec<Invoice>,
    failing: HashSet<ConsultantId>,
}

impl InMemoryPerformanceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_consultant(mut self, id: impl Into<ConsultantId>, name: impl Into<String>) -> Self {
        self.consultants.push(Consultant::new(id, name));
        self
    }

    pub fn with_salary(mut self, record: SalaryRecord) -> Self {
        self.salaries.push(record);
        self
    }

    pub fn with_invoice(mut self, invoice: Invoice) -> Self {
        self.invoices.push(invoice);
        self
    }

    /// Make every lookup for this consultant fail with a data access error
    pub fn failing_for(mut self, id: impl Into<ConsultantId>) -> Self {
        self.failing.insert(id.into());
        self
    }

    fn check_available(&self, consultant_id: &ConsultantId) -> Result<()> {
        if self.failing.contains(consultant_id) {
            return Err(AppError::data_access(format!(
                "Records unavailable for consultant {}",
                consultant_id
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl PerformanceRepository for InMemoryPerformanceRepository {
    async fn list_active_consultants(&self) -> Result<Vec<Consultant>> {
        let mut consultants = self.consultants.clone();
        consultants.sort_by(|a, b| a.display_name.cmp(&b.display_name));
        Ok(consultants)
    }

    async fn current_fixed_cost(&self, consultant_id: &ConsultantId) -> Result<Decimal> {
        self.check_available(consultant_id)?;

        let records: Vec<SalaryRecord> = self
            .salaries
            .iter()
            .filter(|record| &record.consultant_id == consultant_id)
            .cloned()
            .collect();

        Ok(FixedCostResolver::resolve(&records))
    }

    async fn invoices_in_window(
        &self,
        consultant_id: &ConsultantId,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<Vec<Invoice>> {
        self.check_available(consultant_id)?;

        Ok(self
            .invoices
            .iter()
            .filter(|invoice| &invoice.consultant_id == consultant_id)
            .filter(|invoice| invoice.issue_date >= date_from && invoice.issue_date <= date_to)
            .cloned()
            .collect())
    }
}
