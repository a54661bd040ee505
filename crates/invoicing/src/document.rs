use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use liskov_core::{InvoiceNumber, PurchaseOrderNumber};

use crate::terms::{PaymentTerms, format_amount};

/// Invoice workflow states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceState {
    Draft,
    ReadyForApproval,
    Approved,
    Rejected,
}

impl InvoiceState {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceState::Draft => "draft",
            InvoiceState::ReadyForApproval => "ready_for_approval",
            InvoiceState::Approved => "approved",
            InvoiceState::Rejected => "rejected",
        }
    }
}

impl core::fmt::Display for InvoiceState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every way an invoice operation may refuse to proceed.
///
/// All invoice kinds report failures through this one type; none of them
/// panics or adds failure modes of its own.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvoiceError {
    #[error("invoice amount must be greater than zero")]
    InvalidAmount,

    #[error("cannot {action} invoice in {state} state")]
    InvalidState {
        action: &'static str,
        state: InvoiceState,
    },

    #[error(
        "invoice amount {} does not match PO {po_number} total {}",
        amount_text(.invoice_amount),
        amount_text(.po_total)
    )]
    PurchaseOrderMismatch {
        po_number: PurchaseOrderNumber,
        vendor: String,
        po_total: u64,
        invoice_amount: u64,
    },
}

fn amount_text(cents: &u64) -> String {
    format_amount(*cents)
}

impl InvoiceError {
    /// Stable, machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            InvoiceError::InvalidAmount => "INVALID_AMOUNT",
            InvoiceError::InvalidState { .. } => "INVALID_STATE",
            InvoiceError::PurchaseOrderMismatch { .. } => "PO_AMOUNT_MISMATCH",
        }
    }

    pub(crate) fn invalid_state(action: &'static str, state: InvoiceState) -> Self {
        Self::InvalidState { action, state }
    }
}

/// Contract shared by every invoice kind.
///
/// - `submit_for_approval` moves `Draft -> ReadyForApproval`; it requires a
///   positive amount.
/// - `approve` moves `ReadyForApproval -> Approved`. An implementation may
///   decline with an [`InvoiceError`] and must then leave the state unchanged.
/// - `reject` moves `ReadyForApproval -> Rejected`.
/// - `update_amount` is only allowed while in `Draft`.
/// - `payment_terms` states due and discount dates explicitly; callers must
///   not assume they are counted from the invoice date.
pub trait InvoiceDocument: core::fmt::Debug {
    fn number(&self) -> &InvoiceNumber;

    /// Amount in smallest currency unit.
    fn amount(&self) -> u64;

    fn issued_on(&self) -> NaiveDate;

    fn state(&self) -> InvoiceState;

    fn update_amount(&mut self, amount: u64) -> Result<(), InvoiceError>;

    fn submit_for_approval(&mut self) -> Result<(), InvoiceError>;

    fn approve(&mut self) -> Result<(), InvoiceError>;

    fn reject(&mut self) -> Result<(), InvoiceError>;

    fn payment_terms(&self) -> PaymentTerms;

    /// Amount owed when paid on `payment_date`, per [`Self::payment_terms`].
    fn discounted_amount(&self, payment_date: NaiveDate) -> u64 {
        self.payment_terms().discounted_amount(self.amount(), payment_date)
    }
}

/// Number, amount, date and workflow state common to all invoice kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct InvoiceHeader {
    pub(crate) number: InvoiceNumber,
    pub(crate) amount: u64,
    pub(crate) issued_on: NaiveDate,
    pub(crate) state: InvoiceState,
}

impl InvoiceHeader {
    pub(crate) fn new(number: InvoiceNumber, amount: u64, issued_on: NaiveDate) -> Self {
        Self {
            number,
            amount,
            issued_on,
            state: InvoiceState::Draft,
        }
    }

    pub(crate) fn update_amount(&mut self, amount: u64) -> Result<(), InvoiceError> {
        if self.state != InvoiceState::Draft {
            return Err(InvoiceError::invalid_state("update", self.state));
        }
        self.amount = amount;
        Ok(())
    }

    pub(crate) fn submit(&mut self) -> Result<(), InvoiceError> {
        if self.amount == 0 {
            return Err(InvoiceError::InvalidAmount);
        }
        if self.state != InvoiceState::Draft {
            return Err(InvoiceError::invalid_state("submit", self.state));
        }
        self.state = InvoiceState::ReadyForApproval;
        Ok(())
    }

    pub(crate) fn ensure_ready(&self, action: &'static str) -> Result<(), InvoiceError> {
        if self.state != InvoiceState::ReadyForApproval {
            return Err(InvoiceError::invalid_state(action, self.state));
        }
        Ok(())
    }

    pub(crate) fn approve(&mut self) -> Result<(), InvoiceError> {
        self.ensure_ready("approve")?;
        self.state = InvoiceState::Approved;
        Ok(())
    }

    pub(crate) fn reject(&mut self) -> Result<(), InvoiceError> {
        self.ensure_ready("reject")?;
        self.state = InvoiceState::Rejected;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(amount: u64) -> InvoiceHeader {
        InvoiceHeader::new(
            InvoiceNumber::new("INV-001").unwrap(),
            amount,
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        )
    }

    #[test]
    fn walks_draft_to_approved() {
        let mut h = header(100_000);
        assert_eq!(h.state, InvoiceState::Draft);
        h.submit().unwrap();
        assert_eq!(h.state, InvoiceState::ReadyForApproval);
        h.approve().unwrap();
        assert_eq!(h.state, InvoiceState::Approved);
    }

    #[test]
    fn zero_amount_cannot_be_submitted() {
        let mut h = header(0);
        assert_eq!(h.submit(), Err(InvoiceError::InvalidAmount));
        assert_eq!(h.state, InvoiceState::Draft);
    }

    #[test]
    fn approve_requires_ready_state() {
        let mut h = header(100);
        let err = h.approve().unwrap_err();
        assert_eq!(err.code(), "INVALID_STATE");
        assert_eq!(err.to_string(), "cannot approve invoice in draft state");
    }

    #[test]
    fn submit_twice_is_invalid_state() {
        let mut h = header(100);
        h.submit().unwrap();
        assert_eq!(
            h.submit(),
            Err(InvoiceError::InvalidState {
                action: "submit",
                state: InvoiceState::ReadyForApproval
            })
        );
    }

    #[test]
    fn rejected_invoice_cannot_be_approved() {
        let mut h = header(100);
        h.submit().unwrap();
        h.reject().unwrap();
        assert_eq!(h.state, InvoiceState::Rejected);
        assert!(h.approve().is_err());
    }

    #[test]
    fn amount_is_locked_after_submission() {
        let mut h = header(100);
        h.update_amount(250).unwrap();
        assert_eq!(h.amount, 250);
        h.submit().unwrap();
        assert_eq!(h.update_amount(300).unwrap_err().code(), "INVALID_STATE");
        assert_eq!(h.amount, 250);
    }

    #[test]
    fn mismatch_message_names_po_and_both_amounts() {
        let err = InvoiceError::PurchaseOrderMismatch {
            po_number: PurchaseOrderNumber::new("PO-12345").unwrap(),
            vendor: "Acme Corp".to_string(),
            po_total: 1_000_000,
            invoice_amount: 1_500_000,
        };
        assert_eq!(err.code(), "PO_AMOUNT_MISMATCH");
        assert_eq!(
            err.to_string(),
            "invoice amount 15000.00 does not match PO PO-12345 total 10000.00"
        );
    }

    #[test]
    fn state_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&InvoiceState::ReadyForApproval).unwrap(),
            "\"ready_for_approval\""
        );
    }
}
