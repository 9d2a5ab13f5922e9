//! Prices

use rust_decimal::Decimal;
use thiserror::Error;

use crate::items::LineItem;

/// Errors that can occur while calculating a price.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// The result does not fit in the decimal range.
    #[error("price arithmetic overflowed")]
    Overflow,
}

/// Calculates the undiscounted subtotal of a list of items.
///
/// An empty list has a subtotal of zero.
///
/// # Errors
///
/// - [`PricingError::Overflow`]: the sum exceeds the decimal range.
pub fn subtotal(items: &[LineItem]) -> Result<Decimal, PricingError> {
    items.iter().try_fold(Decimal::ZERO, |acc, item| {
        acc.checked_add(item.price()).ok_or(PricingError::Overflow)
    })
}
