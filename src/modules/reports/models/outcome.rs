use serde::{Deserialize, Serialize};

/// Why a performance view could not be computed from the caller's selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
    EmptySelection,
    MissingMonthRange,
}

/// User-correctable problem returned in place of a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationMessage {
    pub kind: ValidationKind,
    pub message: String,
}

impl ValidationMessage {
    pub fn empty_selection() -> Self {
        Self {
            kind: ValidationKind::EmptySelection,
            message: "Select at least one consultant.".to_string(),
        }
    }

    pub fn missing_month_range() -> Self {
        Self {
            kind: ValidationKind::MissingMonthRange,
            message: "Select a start and end month.".to_string(),
        }
    }
}

/// Result of a performance view: either computed data or a validation message
#[derive(Debug, Clone, PartialEq)]
pub enum ViewOutcome<T> {
    Ready(T),
    Validation(ValidationMessage),
}

impl<T> ViewOutcome<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, ViewOutcome::Ready(_))
    }

    pub fn ready(self) -> Option<T> {
        match self {
            ViewOutcome::Ready(value) => Some(value),
            ViewOutcome::Validation(_) => None,
        }
    }

    pub fn validation(&self) -> Option<&ValidationMessage> {
        match self {
            ViewOutcome::Ready(_) => None,
            ViewOutcome::Validation(message) => Some(message),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ViewOutcome<U> {
        match self {
            ViewOutcome::Ready(value) => ViewOutcome::Ready(f(value)),
            ViewOutcome::Validation(message) => ViewOutcome::Validation(message),
        }
    }
}
