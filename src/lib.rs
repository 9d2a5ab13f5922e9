//! Tally
//!
//! Tally prices orders of line items. The undiscounted subtotal and the
//! pricing policy are separate pieces, composed by [`pricer::OrderPricer`]:
//!
//! ```
//! use rust_decimal::Decimal;
//! use tally::prelude::*;
//!
//! let order = Order::new([
//!     LineItem::new("Keyboard", Decimal::from(10)),
//!     LineItem::new("Mouse", Decimal::from(20)),
//!     LineItem::new("Monitor stand", Decimal::from(30)),
//!     LineItem::new("Desk lamp", Decimal::from(40)),
//! ]);
//!
//! // More than three items: 10% off.
//! let total = OrderPricer::new(order).compute_total()?;
//! assert_eq!(total, Decimal::from(90));
//! # Ok::<(), PricingError>(())
//! ```

pub mod config;
pub mod discounts;
pub mod fixtures;
pub mod items;
pub mod orders;
pub mod prelude;
pub mod pricer;
pub mod pricing;
pub mod receipt;
