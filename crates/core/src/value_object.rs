//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; two values built from the same
//! attributes are interchangeable. Every sample type that is substituted for
//! another (arguments, shapes, payment terms) is a value object.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one (`Rectangle::with_width` returns a new rectangle rather
/// than mutating in place).
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (`PaymentTerms` with equal fields are equal)
/// - **Entity**: has identity (an invoice is the same invoice after approval)
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Argument {
///     value: String,
/// }
///
/// impl ValueObject for Argument {}
///
/// let a = Argument { value: "x".to_string() };
/// let b = Argument { value: "x".to_string() };
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
