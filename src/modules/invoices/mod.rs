// Invoices module

pub mod models;
pub mod services;

pub use models::Invoice;
pub use services::{InvoiceAggregator, MonthlyInvoiceSums};
