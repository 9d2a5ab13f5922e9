//! Fixtures
//!
//! Named orders stored as YAML under `<base>/orders/<name>.yml`:
//!
//! ```yaml
//! items:
//!   - name: Keyboard
//!     price: "10.00"
//! ```

use std::{fs, path::PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    items::{ItemError, LineItem},
    orders::Order,
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Item failed validation
    #[error(transparent)]
    Item(#[from] ItemError),
}

/// Order fixture file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderFixture {
    /// Items in the order
    #[serde(default)]
    pub items: Vec<ItemFixture>,
}

/// Single item entry in an order fixture
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemFixture {
    /// Item name
    pub name: String,

    /// Price as a decimal string (e.g. "2.99")
    pub price: String,
}

impl TryFrom<ItemFixture> for LineItem {
    type Error = FixtureError;

    fn try_from(fixture: ItemFixture) -> Result<Self, Self::Error> {
        let price = parse_price(&fixture.price)?;

        Ok(LineItem::checked(fixture.name, price)?)
    }
}

impl TryFrom<OrderFixture> for Order {
    type Error = FixtureError;

    fn try_from(fixture: OrderFixture) -> Result<Self, Self::Error> {
        fixture
            .items
            .into_iter()
            .map(LineItem::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Order::new)
    }
}

/// Parse a price string like "2.99"
///
/// # Errors
///
/// Returns an error if the string is not a valid decimal.
pub fn parse_price(s: &str) -> Result<Decimal, FixtureError> {
    s.trim()
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))
}

/// Fixture
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Create a new fixture loader with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new fixture loader with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Parse an order from a YAML string
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or an item is invalid.
    pub fn order_from_str(contents: &str) -> Result<Order, FixtureError> {
        let fixture: OrderFixture = serde_norway::from_str(contents)?;

        Order::try_from(fixture)
    }

    /// Load an order from `orders/<name>.yml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or an item is invalid.
    pub fn load_order(&self, name: &str) -> Result<Order, FixtureError> {
        let file_path = self.base_path.join("orders").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        Self::order_from_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_price_accepts_decimal_strings() -> TestResult {
        assert_eq!(parse_price("2.99")?, dec!(2.99));
        assert_eq!(parse_price(" 10 ")?, dec!(10));

        Ok(())
    }

    #[test]
    fn parse_price_rejects_invalid_format() {
        let result = parse_price("2.99 GBP");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(s)) if s == "2.99 GBP"));
    }

    #[test]
    fn order_from_str_preserves_items() -> TestResult {
        let order = Fixture::order_from_str(
            "items:\n  - name: Pen\n    price: \"1.50\"\n  - name: Pad\n    price: \"3\"\n",
        )?;

        assert_eq!(
            order,
            Order::new([LineItem::new("Pen", dec!(1.50)), LineItem::new("Pad", dec!(3))])
        );

        Ok(())
    }

    #[test]
    fn order_from_str_empty_items() -> TestResult {
        let order = Fixture::order_from_str("items: []\n")?;

        assert!(order.is_empty());

        Ok(())
    }

    #[test]
    fn order_from_str_rejects_negative_price() {
        let result = Fixture::order_from_str("items:\n  - name: Refund\n    price: \"-5\"\n");

        assert!(matches!(
            result,
            Err(FixtureError::Item(ItemError::NegativePrice { .. }))
        ));
    }

    #[test]
    fn load_order_reads_named_file() -> TestResult {
        let order = Fixture::new().load_order("volume")?;

        assert_eq!(order.len(), 4);

        Ok(())
    }

    #[test]
    fn load_order_missing_file_is_io_error() {
        let result = Fixture::new().load_order("does-not-exist");

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }
}
