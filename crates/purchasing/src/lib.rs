//! Purchasing domain module (purchase orders).
//!
//! Purchase orders are pre-approved spending authorizations created by the
//! purchasing department. Invoices raised against them are checked for an
//! exact amount match before approval.

pub mod order;

pub use order::PurchaseOrder;
