//! Orders

use crate::items::LineItem;

/// An immutable sequence of line items.
///
/// Built once from a caller-supplied list; there are no add or remove operations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Order {
    items: Vec<LineItem>,
}

impl Order {
    /// Create a new order with the given items.
    pub fn new(items: impl Into<Vec<LineItem>>) -> Self {
        Order {
            items: items.into(),
        }
    }

    /// Get the items in the order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get the number of items in the order.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the order is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<LineItem>> for Order {
    fn from(items: Vec<LineItem>) -> Self {
        Order::new(items)
    }
}

impl FromIterator<LineItem> for Order {
    fn from_iter<I: IntoIterator<Item = LineItem>>(iter: I) -> Self {
        Order::new(iter.into_iter().collect::<Vec<_>>())
    }
}
