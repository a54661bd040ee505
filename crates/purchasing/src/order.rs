use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use liskov_core::{DomainError, DomainResult, PurchaseOrderNumber, ValueObject};

/// Approved purchase order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PurchaseOrderRecord", into = "PurchaseOrderRecord")]
pub struct PurchaseOrder {
    number: PurchaseOrderNumber,
    /// Total in smallest currency unit (e.g., cents).
    total_amount: u64,
    vendor: String,
    approved_on: NaiveDate,
}

impl PurchaseOrder {
    pub fn new(
        number: impl Into<String>,
        total_amount: u64,
        vendor: impl Into<String>,
        approved_on: NaiveDate,
    ) -> DomainResult<Self> {
        let number = PurchaseOrderNumber::new(number)?;
        let vendor = vendor.into();
        if vendor.trim().is_empty() {
            return Err(DomainError::validation("purchase order vendor must be provided"));
        }

        Ok(Self {
            number,
            total_amount,
            vendor,
            approved_on,
        })
    }

    pub fn number(&self) -> &PurchaseOrderNumber {
        &self.number
    }

    pub fn total_amount(&self) -> u64 {
        self.total_amount
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn approved_on(&self) -> NaiveDate {
        self.approved_on
    }

    /// Invariant checked at approval time: an invoice must bill exactly the
    /// PO total.
    pub fn matches_amount(&self, amount: u64) -> bool {
        self.total_amount == amount
    }
}

impl ValueObject for PurchaseOrder {}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PurchaseOrderRecord {
    number: String,
    total_amount: u64,
    vendor: String,
    approved_on: NaiveDate,
}

impl TryFrom<PurchaseOrderRecord> for PurchaseOrder {
    type Error = DomainError;

    fn try_from(record: PurchaseOrderRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.number,
            record.total_amount,
            record.vendor,
            record.approved_on,
        )
    }
}

impl From<PurchaseOrder> for PurchaseOrderRecord {
    fn from(po: PurchaseOrder) -> Self {
        Self {
            number: po.number.into(),
            total_amount: po.total_amount,
            vendor: po.vendor,
            approved_on: po.approved_on,
        }
    }
}
