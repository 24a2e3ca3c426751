// Consultant and salary records as read from the commercial database.
//
// Consultants are identified by their login code (CO_USUARIO). A consultant
// may have several salary records; only the most recent one is in effect.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque consultant identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConsultantId(String);

impl ConsultantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConsultantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConsultantId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ConsultantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A consultant available for selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consultant {
    pub id: ConsultantId,
    pub display_name: String,
}

impl Consultant {
    pub fn new(id: impl Into<ConsultantId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }

    /// Consultant known only by id; the id doubles as the display name
    pub fn unnamed(id: ConsultantId) -> Self {
        let display_name = id.to_string();
        Self { id, display_name }
    }
}

/// Gross salary in effect from `effective_date`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRecord {
    pub consultant_id: ConsultantId,
    pub gross_salary: Decimal,
    pub effective_date: NaiveDate,
}

impl SalaryRecord {
    pub fn new(
        consultant_id: impl Into<ConsultantId>,
        gross_salary: Decimal,
        effective_date: NaiveDate,
    ) -> Self {
        Self {
            consultant_id: consultant_id.into(),
            gross_salary,
            effective_date,
        }
    }
}
