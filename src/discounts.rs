//! Discounts
//!
//! Pricing policies turn an undiscounted subtotal into the final total for an
//! order. The subtotal itself is always computed by [`crate::pricing::subtotal`],
//! so a policy only ever sees the finished sum and the items it was built from.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use tracing::trace;

use crate::{items::LineItem, pricing::PricingError};

/// Default number of items an order must exceed before the volume discount applies.
pub const DEFAULT_VOLUME_THRESHOLD: usize = 3;

/// Transforms a subtotal into a final total.
pub trait PricingPolicy {
    /// Apply the policy to `subtotal`, the undiscounted sum of `items`.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the adjusted total cannot be represented.
    fn apply(&self, items: &[LineItem], subtotal: Decimal) -> Result<Decimal, PricingError>;
}

impl<F> PricingPolicy for F
where
    F: Fn(&[LineItem], Decimal) -> Result<Decimal, PricingError>,
{
    fn apply(&self, items: &[LineItem], subtotal: Decimal) -> Result<Decimal, PricingError> {
        self(items, subtotal)
    }
}

/// Charge the subtotal as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullPrice;

impl PricingPolicy for FullPrice {
    fn apply(&self, _items: &[LineItem], subtotal: Decimal) -> Result<Decimal, PricingError> {
        Ok(subtotal)
    }
}

/// Take a flat percentage off orders with more than `threshold` items.
///
/// An order with exactly `threshold` items pays full price.
#[derive(Debug, Clone, Copy)]
pub struct VolumeDiscount {
    threshold: usize,
    percent: Percentage,
}

impl VolumeDiscount {
    /// Create a volume discount taking `percent` off orders with more than `threshold` items.
    pub fn new(threshold: usize, percent: Percentage) -> Self {
        Self { threshold, percent }
    }

    /// Item count the order must exceed.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Percentage taken off qualifying orders.
    pub fn percent(&self) -> Percentage {
        self.percent
    }

    /// Whether an order of `count` items receives the discount.
    pub fn qualifies(&self, count: usize) -> bool {
        count > self.threshold
    }

    /// Multiplier applied to qualifying subtotals, e.g. `0.9` for 10% off.
    fn multiplier(&self) -> Result<Decimal, PricingError> {
        // decimal_percentage doesn't expose the underlying Decimal
        Decimal::ONE
            .checked_sub(self.percent * Decimal::ONE)
            .ok_or(PricingError::Overflow)
    }
}

impl Default for VolumeDiscount {
    /// 10% off orders with more than three items.
    fn default() -> Self {
        Self::new(
            DEFAULT_VOLUME_THRESHOLD,
            Percentage::from(Decimal::new(1, 1)),
        )
    }
}

impl PricingPolicy for VolumeDiscount {
    fn apply(&self, items: &[LineItem], subtotal: Decimal) -> Result<Decimal, PricingError> {
        if !self.qualifies(items.len()) {
            return Ok(subtotal);
        }

        let total = subtotal
            .checked_mul(self.multiplier()?)
            .ok_or(PricingError::Overflow)?;

        trace!(
            items = items.len(),
            threshold = self.threshold,
            %subtotal,
            %total,
            "volume discount applied"
        );

        Ok(total)
    }
}
