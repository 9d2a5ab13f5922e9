//! Order Pricer
//!
//! Composes the undiscounted subtotal with a [`PricingPolicy`]:
//! `total = policy.apply(items, subtotal(items))`.

use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    discounts::{PricingPolicy, VolumeDiscount},
    orders::Order,
    pricing::{PricingError, subtotal},
    receipt::Receipt,
};

/// Prices a single order under a pricing policy.
#[derive(Debug, Clone)]
pub struct OrderPricer<P = VolumeDiscount> {
    order: Order,
    policy: P,
}

impl OrderPricer<VolumeDiscount> {
    /// Create a pricer using the default volume discount (10% off more than three items).
    pub fn new(order: impl Into<Order>) -> Self {
        Self::with_policy(order, VolumeDiscount::default())
    }
}

impl<P: PricingPolicy> OrderPricer<P> {
    /// Create a pricer using the given policy.
    pub fn with_policy(order: impl Into<Order>, policy: P) -> Self {
        Self {
            order: order.into(),
            policy,
        }
    }

    /// The order being priced.
    pub fn order(&self) -> &Order {
        &self.order
    }

    /// The pricing policy.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Undiscounted sum of all item prices.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the sum exceeds the decimal range.
    pub fn subtotal(&self) -> Result<Decimal, PricingError> {
        subtotal(self.order.items())
    }

    /// Compute the total price of the order with the policy applied.
    ///
    /// Repeated calls return the same value.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the subtotal or the adjusted total
    /// exceeds the decimal range.
    pub fn compute_total(&self) -> Result<Decimal, PricingError> {
        self.price().map(|(_subtotal, total)| total)
    }

    /// Price the order and capture the result as a [`Receipt`].
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if any price arithmetic overflows.
    pub fn receipt(&self) -> Result<Receipt, PricingError> {
        let (subtotal, total) = self.price()?;

        Ok(Receipt::new(self.order.len(), subtotal, total))
    }

    /// Subtotal and policy-adjusted total, in that order.
    #[tracing::instrument(level = "debug", skip(self), fields(items = self.order.len()))]
    fn price(&self) -> Result<(Decimal, Decimal), PricingError> {
        let items = self.order.items();
        let subtotal = subtotal(items)?;
        let total = self.policy.apply(items, subtotal)?;

        debug!(%subtotal, %total, discounted = total != subtotal, "computed order total");

        Ok((subtotal, total))
    }
}
