//! Items

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when validating a line item.
#[derive(Debug, Error, PartialEq)]
pub enum ItemError {
    /// The item has a price below zero.
    #[error("item {name:?} has negative price {price}")]
    NegativePrice {
        /// Item name
        name: String,

        /// Offending price
        price: Decimal,
    },
}

/// A named entry in an order with a unit price
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineItem {
    name: String,
    price: Decimal,
}

impl LineItem {
    /// Creates a new line item with the given name and price.
    ///
    /// The price is not validated; use [`LineItem::checked`] to reject negative prices.
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Creates a new line item, rejecting negative prices.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::NegativePrice`] if `price` is below zero.
    pub fn checked(name: impl Into<String>, price: Decimal) -> Result<Self, ItemError> {
        let name = name.into();

        if price < Decimal::ZERO {
            return Err(ItemError::NegativePrice { name, price });
        }

        Ok(Self { name, price })
    }

    /// Returns the name of the item
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the price of the item
    pub fn price(&self) -> Decimal {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_keeps_name_and_price() {
        let item = LineItem::new("Widget", dec!(2.50));

        assert_eq!(item.name(), "Widget");
        assert_eq!(item.price(), dec!(2.50));
    }

    #[test]
    fn new_does_not_validate_price() {
        let item = LineItem::new("Refund", dec!(-1));

        assert_eq!(item.price(), dec!(-1));
    }

    #[test]
    fn checked_accepts_zero_and_positive_prices() -> TestResult {
        assert_eq!(LineItem::checked("Free", Decimal::ZERO)?.price(), Decimal::ZERO);
        assert_eq!(LineItem::checked("Paid", dec!(3))?.price(), dec!(3));

        Ok(())
    }

    #[test]
    fn checked_rejects_negative_price() {
        let result = LineItem::checked("Refund", dec!(-0.01));

        assert_eq!(
            result,
            Err(ItemError::NegativePrice {
                name: "Refund".to_string(),
                price: dec!(-0.01),
            })
        );
    }
}
