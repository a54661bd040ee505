//! Invoicing domain module.
//!
//! Standard invoices and purchase-order invoices share one contract,
//! [`InvoiceDocument`]. Everything that differs between them is either an
//! explicit value (their [`PaymentTerms`]) or a typed [`InvoiceError`] the
//! contract already declares, so client code written against the contract
//! never meets a surprise when handed the other kind.

pub mod document;
pub mod invoice;
pub mod service;
pub mod terms;

pub use document::{InvoiceDocument, InvoiceError, InvoiceState};
pub use invoice::{PurchaseOrderInvoice, StandardInvoice};
pub use service::{BatchOutcome, InvoiceService};
pub use terms::{PaymentTerms, format_amount};
