//! Order totals derived from the current selection.

use crate::types::MenuItem;

/// Totals for the current selection
///
/// Never stored; always recomputed from the items with [`summarize`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OrderSummary {
    /// Sum of all selected counts
    pub item_count: u64,
    /// Sum of `price * count` over all items
    pub total_price: u64,
}

impl OrderSummary {
    /// Whether nothing is selected
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

/// Computes the totals for `items`
///
/// Sums saturate at `u64::MAX` instead of overflowing.
///
/// # Example
///
/// ```
/// use menu_order::{summarize, MenuItem};
///
/// let mut a = MenuItem::new("A", 100);
/// a.count = 2;
/// let mut b = MenuItem::new("B", 250);
/// b.count = 1;
///
/// let summary = summarize(&[a, b]);
/// assert_eq!(summary.item_count, 3);
/// assert_eq!(summary.total_price, 450);
/// ```
#[must_use]
pub fn summarize(items: &[MenuItem]) -> OrderSummary {
    items
        .iter()
        .fold(OrderSummary::default(), |acc, item| OrderSummary {
            item_count: acc.item_count.saturating_add(item.count),
            total_price: acc.total_price.saturating_add(item.line_total()),
        })
}
