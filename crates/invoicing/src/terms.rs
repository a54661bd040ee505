//! Payment terms ("2/10 net 14": 2% off within 10 days, due in 14).

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use liskov_core::{DomainError, DomainResult, ValueObject};

/// Explicit payment terms of an invoice.
///
/// Only built through [`PaymentTerms::from_base_date`], deserialization
/// included, so the percent and period checks always hold.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PaymentTermsRecord", into = "PaymentTermsRecord")]
pub struct PaymentTerms {
    base_date: NaiveDate,
    due_date: NaiveDate,
    discount_date: NaiveDate,
    discount_percent: u8,
    net_days: u32,
    discount_days: u32,
}

/// Wire shape of [`PaymentTerms`]. The dates are derived, so they are
/// written out for readers but ignored on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PaymentTermsRecord {
    base_date: NaiveDate,
    net_days: u32,
    discount_days: u32,
    discount_percent: u8,
    #[serde(default, skip_deserializing)]
    due_date: Option<NaiveDate>,
    #[serde(default, skip_deserializing)]
    discount_date: Option<NaiveDate>,
}

impl TryFrom<PaymentTermsRecord> for PaymentTerms {
    type Error = DomainError;

    fn try_from(record: PaymentTermsRecord) -> Result<Self, Self::Error> {
        Self::from_base_date(
            record.base_date,
            record.net_days,
            record.discount_days,
            record.discount_percent,
        )
    }
}

impl From<PaymentTerms> for PaymentTermsRecord {
    fn from(terms: PaymentTerms) -> Self {
        Self {
            base_date: terms.base_date,
            net_days: terms.net_days,
            discount_days: terms.discount_days,
            discount_percent: terms.discount_percent,
            due_date: Some(terms.due_date),
            discount_date: Some(terms.discount_date),
        }
    }
}

impl PaymentTerms {
    /// Terms counted from `base_date`.
    pub fn from_base_date(
        base_date: NaiveDate,
        net_days: u32,
        discount_days: u32,
        discount_percent: u8,
    ) -> DomainResult<Self> {
        if discount_percent > 100 {
            return Err(DomainError::validation("discount percent must not exceed 100"));
        }
        if discount_days > net_days {
            return Err(DomainError::validation("discount period must not outlast the net period"));
        }

        let add = |days: u32| {
            base_date
                .checked_add_days(Days::new(u64::from(days)))
                .ok_or_else(|| DomainError::invariant("payment terms date out of range"))
        };

        Ok(Self {
            base_date,
            due_date: add(net_days)?,
            discount_date: add(discount_days)?,
            discount_percent,
            net_days,
            discount_days,
        })
    }

    /// 2/10 net 14 from the invoice date.
    pub fn standard(invoice_date: NaiveDate) -> DomainResult<Self> {
        Self::from_base_date(invoice_date, 14, 10, 2)
    }

    /// 3/15 net 60 from the purchase order's approval date.
    pub fn purchase_order(po_approved_on: NaiveDate) -> DomainResult<Self> {
        Self::from_base_date(po_approved_on, 60, 15, 3)
    }

    /// Date the periods are counted from.
    pub fn base_date(&self) -> NaiveDate {
        self.base_date
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn discount_date(&self) -> NaiveDate {
        self.discount_date
    }

    /// Early-payment discount, whole percent.
    pub fn discount_percent(&self) -> u8 {
        self.discount_percent
    }

    pub fn net_days(&self) -> u32 {
        self.net_days
    }

    pub fn discount_days(&self) -> u32 {
        self.discount_days
    }

    pub fn is_discount_available(&self, payment_date: NaiveDate) -> bool {
        payment_date <= self.discount_date
    }

    /// Amount owed when paying on `payment_date`, rounded half-up to the
    /// smallest currency unit.
    pub fn discounted_amount(&self, amount: u64, payment_date: NaiveDate) -> u64 {
        if !self.is_discount_available(payment_date) {
            return amount;
        }
        let keep = u128::from(100u8.saturating_sub(self.discount_percent));
        // amount * keep <= u64::MAX * 100, so the result fits back into u64.
        ((u128::from(amount) * keep + 50) / 100) as u64
    }
}

impl ValueObject for PaymentTerms {}

/// Render an amount in cents as `units.cc`.
pub fn format_amount(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn standard_terms_count_from_invoice_date() {
        let terms = PaymentTerms::standard(date(2025, 1, 15)).unwrap();
        assert_eq!(terms.base_date(), date(2025, 1, 15));
        assert_eq!(terms.due_date(), date(2025, 1, 29));
        assert_eq!(terms.discount_date(), date(2025, 1, 25));
        assert_eq!(terms.discount_percent(), 2);
        assert_eq!((terms.net_days(), terms.discount_days()), (14, 10));
    }

    #[test]
    fn purchase_order_terms_count_from_approval_date() {
        let terms = PaymentTerms::purchase_order(date(2025, 1, 1)).unwrap();
        assert_eq!(terms.due_date(), date(2025, 3, 2));
        assert_eq!(terms.discount_date(), date(2025, 1, 16));
        assert_eq!(terms.discount_percent(), 3);
    }

    #[test]
    fn discount_applies_up_to_and_including_discount_date() {
        let terms = PaymentTerms::standard(date(2025, 1, 15)).unwrap();
        assert_eq!(terms.discounted_amount(500_000, date(2025, 1, 16)), 490_000);
        assert_eq!(terms.discounted_amount(500_000, date(2025, 1, 25)), 490_000);
        assert_eq!(terms.discounted_amount(500_000, date(2025, 1, 26)), 500_000);
    }

    #[test]
    fn discount_rounds_half_up() {
        let terms = PaymentTerms::from_base_date(date(2025, 1, 1), 30, 10, 3).unwrap();
        // 150 * 0.97 = 145.5
        assert_eq!(terms.discounted_amount(150, date(2025, 1, 1)), 146);
    }

    #[test]
    fn rejects_inconsistent_terms() {
        assert!(matches!(
            PaymentTerms::from_base_date(date(2025, 1, 1), 14, 10, 101),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            PaymentTerms::from_base_date(date(2025, 1, 1), 10, 14, 2),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            PaymentTerms::standard(NaiveDate::MAX),
            Err(DomainError::InvariantViolation(_))
        ));
    }

    #[test]
    fn deserialize_rejects_discount_over_100_percent() {
        let json = r#"{"base_date":"2025-01-15","net_days":14,"discount_days":10,"discount_percent":150}"#;
        let err = serde_json::from_str::<PaymentTerms>(json).unwrap_err();
        assert!(err.to_string().contains("discount percent must not exceed 100"));
    }

    #[test]
    fn deserialize_rejects_discount_period_longer_than_net() {
        let json = r#"{"base_date":"2025-01-15","net_days":10,"discount_days":14,"discount_percent":2}"#;
        assert!(serde_json::from_str::<PaymentTerms>(json).is_err());
    }

    #[test]
    fn deserialize_recomputes_dates_from_base_date() {
        let json = r#"{
            "base_date": "2025-01-15",
            "net_days": 14,
            "discount_days": 10,
            "discount_percent": 2,
            "due_date": "2030-01-01",
            "discount_date": "2030-01-01"
        }"#;
        let terms: PaymentTerms = serde_json::from_str(json).unwrap();
        assert_eq!(terms, PaymentTerms::standard(date(2025, 1, 15)).unwrap());
        assert_eq!(terms.due_date(), date(2025, 1, 29));
    }

    #[test]
    fn serializes_derived_dates_for_readers() {
        let terms = PaymentTerms::standard(date(2025, 1, 15)).unwrap();
        let json = serde_json::to_value(terms).unwrap();
        assert_eq!(json["base_date"], "2025-01-15");
        assert_eq!(json["due_date"], "2025-01-29");
        assert_eq!(json["discount_date"], "2025-01-25");
        assert_eq!(json["discount_percent"], 2);

        let back: PaymentTerms = serde_json::from_value(json).unwrap();
        assert_eq!(back, terms);
    }

    #[test]
    fn full_discount_owes_nothing() {
        let terms = PaymentTerms::from_base_date(date(2025, 1, 1), 30, 10, 100).unwrap();
        assert_eq!(terms.discounted_amount(u64::MAX, date(2025, 1, 1)), 0);
    }

    #[test]
    fn formats_cents() {
        assert_eq!(format_amount(1_500_000), "15000.00");
        assert_eq!(format_amount(5), "0.05");
        assert_eq!(format_amount(1234), "12.34");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: a discount never increases what is owed, and never goes
        /// below the discounted floor.
        #[test]
        fn discount_is_bounded(amount in any::<u64>(), percent in 0u8..=100) {
            let terms = PaymentTerms::from_base_date(date(2025, 1, 1), 30, 10, percent).unwrap();
            let paid = terms.discounted_amount(amount, date(2025, 1, 2));
            prop_assert!(paid <= amount);
            let exact = u128::from(amount) * u128::from(100 - percent);
            prop_assert!(u128::from(paid) * 100 + 50 >= exact);
            prop_assert_eq!(terms.discounted_amount(amount, date(2025, 2, 1)), amount);
        }
    }
}
