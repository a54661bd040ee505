//! Client code written purely against [`InvoiceDocument`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::document::{InvoiceDocument, InvoiceError};

/// Result of approving a batch of invoices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOutcome {
    /// Numbers of approved invoices, in input order.
    pub successful: Vec<String>,
    /// `"<number>: <CODE> - <message>"` per refused invoice, in input order.
    pub failed: Vec<String>,
}

impl BatchOutcome {
    pub fn total(&self) -> usize {
        self.successful.len() + self.failed.len()
    }
}

/// Approval and payment helpers that work for every invoice kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvoiceService;

impl InvoiceService {
    pub fn new() -> Self {
        Self
    }

    /// Submit, then approve. Stops at the first refusal.
    pub fn approve(&self, invoice: &mut dyn InvoiceDocument) -> Result<(), InvoiceError> {
        invoice.submit_for_approval()?;
        invoice.approve()
    }

    /// Approve every invoice; a refusal is recorded and the batch continues.
    pub fn approve_batch(&self, invoices: &mut [Box<dyn InvoiceDocument>]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        for invoice in invoices.iter_mut() {
            let invoice: &mut dyn InvoiceDocument = &mut **invoice;
            match self.approve(&mut *invoice) {
                Ok(()) => {
                    tracing::debug!(invoice = %invoice.number(), "invoice approved");
                    outcome.successful.push(invoice.number().to_string());
                }
                Err(err) => {
                    tracing::warn!(
                        invoice = %invoice.number(),
                        code = err.code(),
                        error = %err,
                        "invoice not approved"
                    );
                    outcome
                        .failed
                        .push(format!("{}: {} - {}", invoice.number(), err.code(), err));
                }
            }
        }

        tracing::info!(
            approved = outcome.successful.len(),
            failed = outcome.failed.len(),
            "invoice batch processed"
        );
        outcome
    }

    /// Days past the due date on `today`. Negative means not yet due.
    pub fn days_overdue(&self, invoice: &dyn InvoiceDocument, today: NaiveDate) -> i64 {
        (today - invoice.payment_terms().due_date()).num_days()
    }

    /// Reminders for invoices whose discount deadline falls within the next
    /// `window_days` days (inclusive of today).
    pub fn discount_reminders(
        &self,
        invoices: &[&dyn InvoiceDocument],
        today: NaiveDate,
        window_days: i64,
    ) -> Vec<String> {
        invoices
            .iter()
            .filter_map(|invoice| {
                let terms = invoice.payment_terms();
                let days_left = (terms.discount_date() - today).num_days();
                (0..=window_days).contains(&days_left).then(|| {
                    format!(
                        "{}: {}% discount expires in {} days",
                        invoice.number(),
                        terms.discount_percent(),
                        days_left
                    )
                })
            })
            .collect()
    }
}
