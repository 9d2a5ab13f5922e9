//! Tally prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    config::{ConfigError, PricingConfig},
    discounts::{FullPrice, PricingPolicy, VolumeDiscount},
    fixtures::{Fixture, FixtureError},
    items::{ItemError, LineItem},
    orders::Order,
    pricer::OrderPricer,
    pricing::{PricingError, subtotal},
    receipt::{Receipt, ReceiptError},
};
