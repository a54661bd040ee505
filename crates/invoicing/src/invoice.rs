use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use liskov_core::{DomainError, DomainResult, Entity, InvoiceNumber};
use liskov_purchasing::PurchaseOrder;

use crate::document::{InvoiceDocument, InvoiceError, InvoiceHeader, InvoiceState};
use crate::terms::PaymentTerms;

/// Invoice on standard terms (2/10 net 14 from the invoice date).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StandardInvoiceRecord", into = "StandardInvoiceRecord")]
pub struct StandardInvoice {
    #[serde(flatten)]
    header: InvoiceHeader,
    terms: PaymentTerms,
}

impl StandardInvoice {
    pub fn new(number: impl Into<String>, amount: u64, issued_on: NaiveDate) -> DomainResult<Self> {
        let number = InvoiceNumber::new(number)?;
        let terms = PaymentTerms::standard(issued_on)?;
        Ok(Self {
            header: InvoiceHeader::new(number, amount, issued_on),
            terms,
        })
    }
}

impl Entity for StandardInvoice {
    type Id = InvoiceNumber;

    fn id(&self) -> &Self::Id {
        &self.header.number
    }
}

impl InvoiceDocument for StandardInvoice {
    fn number(&self) -> &InvoiceNumber {
        &self.header.number
    }

    fn amount(&self) -> u64 {
        self.header.amount
    }

    fn issued_on(&self) -> NaiveDate {
        self.header.issued_on
    }

    fn state(&self) -> InvoiceState {
        self.header.state
    }

    fn update_amount(&mut self, amount: u64) -> Result<(), InvoiceError> {
        self.header.update_amount(amount)
    }

    fn submit_for_approval(&mut self) -> Result<(), InvoiceError> {
        self.header.submit()
    }

    fn approve(&mut self) -> Result<(), InvoiceError> {
        self.header.approve()
    }

    fn reject(&mut self) -> Result<(), InvoiceError> {
        self.header.reject()
    }

    fn payment_terms(&self) -> PaymentTerms {
        self.terms
    }
}

/// Invoice raised against an approved purchase order.
///
/// Approval additionally requires the invoice to bill exactly the PO total.
/// Payment terms are the PO's pre-negotiated 3/15 net 60, counted from the
/// PO approval date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PurchaseOrderInvoiceRecord", into = "PurchaseOrderInvoiceRecord")]
pub struct PurchaseOrderInvoice {
    #[serde(flatten)]
    header: InvoiceHeader,
    purchase_order: PurchaseOrder,
    terms: PaymentTerms,
}

impl PurchaseOrderInvoice {
    pub fn new(
        number: impl Into<String>,
        amount: u64,
        issued_on: NaiveDate,
        purchase_order: PurchaseOrder,
    ) -> DomainResult<Self> {
        let number = InvoiceNumber::new(number)?;
        let terms = PaymentTerms::purchase_order(purchase_order.approved_on())?;
        Ok(Self {
            header: InvoiceHeader::new(number, amount, issued_on),
            purchase_order,
            terms,
        })
    }

    pub fn purchase_order(&self) -> &PurchaseOrder {
        &self.purchase_order
    }
}

impl Entity for PurchaseOrderInvoice {
    type Id = InvoiceNumber;

    fn id(&self) -> &Self::Id {
        &self.header.number
    }
}

impl InvoiceDocument for PurchaseOrderInvoice {
    fn number(&self) -> &InvoiceNumber {
        &self.header.number
    }

    fn amount(&self) -> u64 {
        self.header.amount
    }

    fn issued_on(&self) -> NaiveDate {
        self.header.issued_on
    }

    fn state(&self) -> InvoiceState {
        self.header.state
    }

    fn update_amount(&mut self, amount: u64) -> Result<(), InvoiceError> {
        self.header.update_amount(amount)
    }

    fn submit_for_approval(&mut self) -> Result<(), InvoiceError> {
        self.header.submit()
    }

    fn approve(&mut self) -> Result<(), InvoiceError> {
        self.header.ensure_ready("approve")?;

        let po = &self.purchase_order;
        if !po.matches_amount(self.header.amount) {
            return Err(InvoiceError::PurchaseOrderMismatch {
                po_number: po.number().clone(),
                vendor: po.vendor().to_string(),
                po_total: po.total_amount(),
                invoice_amount: self.header.amount,
            });
        }

        self.header.approve()
    }

    fn reject(&mut self) -> Result<(), InvoiceError> {
        self.header.reject()
    }

    fn payment_terms(&self) -> PaymentTerms {
        self.terms
    }
}

/// Stored terms must be the ones the invoice kind would compute itself.
fn ensure_terms(stored: PaymentTerms, expected: PaymentTerms) -> DomainResult<()> {
    if stored != expected {
        return Err(DomainError::invariant("payment terms do not match the invoice's own terms"));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StandardInvoiceRecord {
    #[serde(flatten)]
    header: InvoiceHeader,
    terms: PaymentTerms,
}

impl TryFrom<StandardInvoiceRecord> for StandardInvoice {
    type Error = DomainError;

    fn try_from(record: StandardInvoiceRecord) -> Result<Self, Self::Error> {
        let InvoiceHeader {
            number,
            amount,
            issued_on,
            state,
        } = record.header;

        let mut invoice = Self::new(number, amount, issued_on)?;
        ensure_terms(record.terms, invoice.terms)?;
        invoice.header.state = state;
        Ok(invoice)
    }
}

impl From<StandardInvoice> for StandardInvoiceRecord {
    fn from(invoice: StandardInvoice) -> Self {
        Self {
            header: invoice.header,
            terms: invoice.terms,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PurchaseOrderInvoiceRecord {
    #[serde(flatten)]
    header: InvoiceHeader,
    purchase_order: PurchaseOrder,
    terms: PaymentTerms,
}

impl TryFrom<PurchaseOrderInvoiceRecord> for PurchaseOrderInvoice {
    type Error = DomainError;

    fn try_from(record: PurchaseOrderInvoiceRecord) -> Result<Self, Self::Error> {
        let InvoiceHeader {
            number,
            amount,
            issued_on,
            state,
        } = record.header;

        if state == InvoiceState::Approved && !record.purchase_order.matches_amount(amount) {
            return Err(DomainError::invariant(
                "approved invoice amount must match the purchase order total",
            ));
        }

        let mut invoice = Self::new(number, amount, issued_on, record.purchase_order)?;
        ensure_terms(record.terms, invoice.terms)?;
        invoice.header.state = state;
        Ok(invoice)
    }
}

impl From<PurchaseOrderInvoice> for PurchaseOrderInvoiceRecord {
    fn from(invoice: PurchaseOrderInvoice) -> Self {
        Self {
            header: invoice.header,
            purchase_order: invoice.purchase_order,
            terms: invoice.terms,
        }
    }
}
