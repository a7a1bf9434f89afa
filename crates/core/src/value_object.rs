//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values
/// (a currency code, an exchange rate, a filter set). Entities such as
/// `Product` carry an identity instead.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct ExchangeRate(f64);
///
/// impl ValueObject for ExchangeRate {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
