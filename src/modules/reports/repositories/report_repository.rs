use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, MySqlPool};
use tracing::debug;

use crate::core::{AppError, Result};
use crate::modules::consultants::models::{Consultant, ConsultantId, SalaryRecord};
use crate::modules::consultants::services::FixedCostResolver;
use crate::modules::invoices::models::Invoice;

/// Read-only access to consultant, salary and invoice records
///
/// Implementations convert raw rows into domain records once, here, so the
/// aggregation code never deals with loosely typed data.
#[async_trait]
pub trait PerformanceRepository: Send + Sync {
    /// Consultants with an active commercial profile, ordered by name
    async fn list_active_consultants(&self) -> Result<Vec<Consultant>>;

    /// Gross salary of the latest salary record, zero when there is none
    async fn current_fixed_cost(&self, consultant_id: &ConsultantId) -> Result<Decimal>;

    /// Invoices on the consultant's service orders issued within `[date_from, date_to]`
    async fn invoices_in_window(
        &self,
        consultant_id: &ConsultantId,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<Vec<Invoice>>;
}

/// MySQL repository over the legacy commercial schema
/// (CAO_USUARIO, PERMISSAO_SISTEMA, CAO_SALARIO, CAO_OS, CAO_FATURA)
pub struct MySqlPerformanceRepository {
    pool: MySqlPool,
}

impl MySqlPerformanceRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ConsultantRow {
    co_usuario: String,
    no_usuario: Option<String>,
}

impl From<ConsultantRow> for Consultant {
    fn from(row: ConsultantRow) -> Self {
        match row.no_usuario.filter(|name| !name.trim().is_empty()) {
            Some(name) => Consultant::new(row.co_usuario, name),
            None => Consultant::unnamed(ConsultantId::new(row.co_usuario)),
        }
    }
}

#[derive(Debug, FromRow)]
struct SalaryRow {
    brut_salario: Option<Decimal>,
    dt_alteracao: Option<NaiveDate>,
}

impl SalaryRow {
    fn into_record(self, consultant_id: &ConsultantId) -> Result<SalaryRecord> {
        let gross_salary = self.brut_salario.ok_or_else(|| {
            AppError::data_access(format!("Salary without amount for consultant {}", consultant_id))
        })?;
        let effective_date = self.dt_alteracao.ok_or_else(|| {
            AppError::data_access(format!("Salary without date for consultant {}", consultant_id))
        })?;

        Ok(SalaryRecord::new(consultant_id.clone(), gross_salary, effective_date))
    }
}

#[derive(Debug, FromRow)]
struct InvoiceRow {
    data_emissao: Option<NaiveDate>,
    valor: Option<Decimal>,
    total_imp_inc: Option<Decimal>,
    comissao_cn: Option<Decimal>,
}

impl InvoiceRow {
    fn into_invoice(self, consultant_id: &ConsultantId) -> Result<Invoice> {
        let issue_date = self.data_emissao.ok_or_else(|| {
            AppError::data_access(format!("Invoice without issue date for consultant {}", consultant_id))
        })?;
        let gross_amount = self.valor.ok_or_else(|| {
            AppError::data_access(format!("Invoice without amount for consultant {}", consultant_id))
        })?;

        Ok(Invoice::new(
            consultant_id.clone(),
            issue_date,
            gross_amount,
            self.total_imp_inc,
            self.comissao_cn,
        ))
    }
}

#[async_trait]
impl PerformanceRepository for MySqlPerformanceRepository {
    async fn list_active_consultants(&self) -> Result<Vec<Consultant>> {
        let rows = sqlx::query_as::<_, ConsultantRow>(
            r#"
            SELECT DISTINCT U.CO_USUARIO AS co_usuario, U.NO_USUARIO AS no_usuario
            FROM CAO_USUARIO U
            JOIN PERMISSAO_SISTEMA P ON P.CO_USUARIO = U.CO_USUARIO
            WHERE P.CO_SISTEMA = 1
              AND P.IN_ATIVO = 'S'
              AND P.CO_TIPO_USUARIO IN (0, 1, 2)
            ORDER BY U.NO_USUARIO
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Loaded active consultants");

        Ok(rows.into_iter().map(Consultant::from).collect())
    }

    async fn current_fixed_cost(&self, consultant_id: &ConsultantId) -> Result<Decimal> {
        let rows = sqlx::query_as::<_, SalaryRow>(
            r#"
            SELECT
                CAST(BRUT_SALARIO AS DECIMAL(20, 6)) AS brut_salario,
                DT_ALTERACAO AS dt_alteracao
            FROM CAO_SALARIO
            WHERE CO_USUARIO = ?
            "#,
        )
        .bind(consultant_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        let records = rows
            .into_iter()
            .map(|row| row.into_record(consultant_id))
            .collect::<Result<Vec<_>>>()?;

        Ok(FixedCostResolver::resolve(&records))
    }

    async fn invoices_in_window(
        &self,
        consultant_id: &ConsultantId,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<Vec<Invoice>> {
        let rows = sqlx::query_as::<_, InvoiceRow>(
            r#"
            SELECT
                F.DATA_EMISSAO AS data_emissao,
                CAST(F.VALOR AS DECIMAL(20, 6)) AS valor,
                CAST(F.TOTAL_IMP_INC AS DECIMAL(20, 6)) AS total_imp_inc,
                CAST(F.COMISSAO_CN AS DECIMAL(20, 6)) AS comissao_cn
            FROM CAO_FATURA F
            JOIN CAO_OS O ON O.CO_OS = F.CO_OS
            WHERE O.CO_USUARIO = ?
              AND F.DATA_EMISSAO BETWEEN ? AND ?
            "#,
        )
        .bind(consultant_id.as_str())
        .bind(date_from)
        .bind(date_to)
        .fetch_all(&self.pool)
        .await?;

        debug!(
            consultant = %consultant_id,
            %date_from,
            %date_to,
            count = rows.len(),
            "Loaded invoices"
        );

        rows.into_iter()
            .map(|row| row.into_invoice(consultant_id))
            .collect()
    }
}
