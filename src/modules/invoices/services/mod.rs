pub mod invoice_aggregator;

pub use invoice_aggregator::{InvoiceAggregator, MonthlyInvoiceSums};
