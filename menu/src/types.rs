//! Domain types for the menu ordering screen.
//!
//! A menu is a fixed, ordered list of items. The only thing a user can change
//! is how many of each item they have selected.

use crate::catalog::Catalog;
use crate::summary::{summarize, OrderSummary};

/// A single purchasable catalog entry
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MenuItem {
    /// Display name, unique within a catalog
    pub name: String,
    /// Unit price in currency units
    pub price: u64,
    /// Selected quantity
    pub count: u64,
}

impl MenuItem {
    /// Creates an unselected item
    #[must_use]
    pub fn new(name: impl Into<String>, price: u64) -> Self {
        Self {
            name: name.into(),
            price,
            count: 0,
        }
    }

    /// Price of the selected quantity
    #[must_use]
    pub const fn line_total(&self) -> u64 {
        self.price.saturating_mul(self.count)
    }
}

/// Result of a single count change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountChange {
    /// The count moved to the contained value
    Changed(u64),
    /// The count was already at its bound and stayed there
    Clamped,
    /// No item with that name exists
    UnknownItem,
}

/// State of the menu screen
///
/// Holds the catalog items in their original order. Names and prices are
/// fixed for the lifetime of the state; counts change through the reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuState {
    items: Vec<MenuItem>,
}

impl MenuState {
    /// Ordered snapshot of every item
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Looks up an item by name
    #[must_use]
    pub fn item(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Derived totals for the current selection
    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        summarize(&self.items)
    }

    /// Adds or removes one unit of the named item.
    ///
    /// Decrementing at zero and incrementing at `u64::MAX` leave the count
    /// where it is.
    pub(crate) fn change_count(&mut self, name: &str, increase: bool) -> CountChange {
        let Some(item) = self.items.iter_mut().find(|item| item.name == name) else {
            return CountChange::UnknownItem;
        };

        let next = if increase {
            item.count.checked_add(1)
        } else {
            item.count.checked_sub(1)
        };

        match next {
            Some(count) => {
                item.count = count;
                CountChange::Changed(count)
            },
            None => CountChange::Clamped,
        }
    }

    /// Resets every count to zero
    pub(crate) fn clear_all(&mut self) {
        for item in &mut self.items {
            item.count = 0;
        }
    }
}

impl From<Catalog> for MenuState {
    fn from(catalog: Catalog) -> Self {
        Self {
            items: catalog.into_items(),
        }
    }
}

/// Actions accepted by the menu reducer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// Add (`increase = true`) or remove one unit of the named item
    ChangeCount {
        /// Item name
        name: String,
        /// Direction of the change
        increase: bool,
    },

    /// Reset every selection to zero
    ClearAll,

    /// Submit the current selection
    ///
    /// Checkout is not implemented; the reducer only logs the request.
    Order,
}

impl MenuAction {
    /// Shorthand for an increment
    #[must_use]
    pub fn increment(name: impl Into<String>) -> Self {
        Self::ChangeCount {
            name: name.into(),
            increase: true,
        }
    }

    /// Shorthand for a decrement
    #[must_use]
    pub fn decrement(name: impl Into<String>) -> Self {
        Self::ChangeCount {
            name: name.into(),
            increase: false,
        }
    }
}
