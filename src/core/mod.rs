pub mod error;
pub mod money;
pub mod month;

pub use error::{AppError, Result};
pub use month::{MonthKey, MonthRange};
