//! Receipt

use std::io;

use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::orders::Order;

/// Errors that can occur while writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Writing to the output failed.
    #[error("failed to write receipt: {0}")]
    Io(#[from] io::Error),
}

/// Final pricing for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    item_count: usize,
    subtotal: Decimal,
    total: Decimal,
}

impl Receipt {
    /// Create a receipt from a priced order.
    pub fn new(item_count: usize, subtotal: Decimal, total: Decimal) -> Self {
        Self {
            item_count,
            subtotal,
            total,
        }
    }

    /// Number of items priced.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Undiscounted sum of the item prices.
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    /// Amount payable.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Difference between subtotal and total.
    ///
    /// Saturates rather than overflowing on pathological inputs.
    pub fn savings(&self) -> Decimal {
        self.subtotal.saturating_sub(self.total)
    }

    /// Write the items of `order` as a table followed by the totals.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if writing to `out` fails.
    pub fn write_to(&self, out: &mut impl io::Write, order: &Order) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["#", "Item", "Price"]);

        for (idx, item) in order.items().iter().enumerate() {
            builder.push_record([
                format!("#{:<3}", idx + 1),
                item.name().to_string(),
                format!("{:.2}", item.price()),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.modify(Columns::new(2..3), Alignment::right());

        writeln!(out, "\n{table}")?;
        writeln!(out, " Subtotal: {:.2}", self.subtotal)?;
        writeln!(out, " Savings:  {:.2}", self.savings())?;
        writeln!(out, " Total:    {:.2}", self.total)?;

        Ok(())
    }
}
