//! Validated item catalogs.
//!
//! A screen is built from a [`Catalog`]. Validation happens once, at
//! construction, so the store never holds a menu with blank or repeated names.

use crate::types::MenuItem;
use std::collections::HashSet;
use thiserror::Error;

/// Reasons a catalog is rejected at construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog has no items
    #[error("catalog must contain at least one item")]
    Empty,

    /// An item name is empty or whitespace
    #[error("item at position {index} has a blank name")]
    BlankName {
        /// Zero-based position in the catalog
        index: usize,
    },

    /// Two items share a name
    #[error("item name {name:?} appears more than once")]
    DuplicateName {
        /// The repeated name
        name: String,
    },
}

/// An ordered, non-empty list of items with unique names
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Builds a catalog of unselected items from `(name, price)` pairs
    ///
    /// # Errors
    ///
    /// See [`Catalog::from_items`].
    ///
    /// # Example
    ///
    /// ```
    /// use menu_order::Catalog;
    ///
    /// let catalog = Catalog::new([("A", 100), ("B", 250)])?;
    /// assert_eq!(catalog.len(), 2);
    /// # Ok::<(), menu_order::CatalogError>(())
    /// ```
    pub fn new<I, N>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (N, u64)>,
        N: Into<String>,
    {
        Self::from_items(
            entries
                .into_iter()
                .map(|(name, price)| MenuItem::new(name, price))
                .collect(),
        )
    }

    /// Builds a catalog from complete items, keeping any preset counts
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Empty`] if `items` is empty
    /// - [`CatalogError::BlankName`] if a name is empty or whitespace
    /// - [`CatalogError::DuplicateName`] if two items share a name
    pub fn from_items(items: Vec<MenuItem>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if item.name.trim().is_empty() {
                return Err(CatalogError::BlankName { index });
            }
            if !seen.insert(item.name.as_str()) {
                return Err(CatalogError::DuplicateName {
                    name: item.name.clone(),
                });
            }
        }

        tracing::debug!(items = items.len(), "Catalog validated");
        Ok(Self { items })
    }

    /// Items in catalog order
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items; never true once validated
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn into_items(self) -> Vec<MenuItem> {
        self.items
    }
}

/// The five-item fried-food menu used by the demo binary
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog {
        items: vec![
            MenuItem::new("튀김1", 100),
            MenuItem::new("튀김2", 200),
            MenuItem::new("튀김3", 300),
            MenuItem::new("튀김4", 400),
            MenuItem::new("튀김5", 500),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_builds_unselected_items_in_order() {
        let catalog = Catalog::new([("A", 100), ("B", 250)]);

        let Ok(catalog) = catalog else {
            unreachable!("valid catalog rejected");
        };
        let names: Vec<_> = catalog.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert!(catalog.items().iter().all(|i| i.count == 0));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let result = Catalog::new(Vec::<(String, u64)>::new());
        assert_eq!(result, Err(CatalogError::Empty));
    }

    #[test]
    fn blank_name_is_rejected() {
        let result = Catalog::new([("A", 1), ("  ", 2)]);
        assert_eq!(result, Err(CatalogError::BlankName { index: 1 }));
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let result = Catalog::new([("A", 1), ("B", 2), ("A", 3)]);
        assert_eq!(
            result,
            Err(CatalogError::DuplicateName {
                name: "A".to_string()
            })
        );
    }

    #[test]
    fn from_items_keeps_preset_counts() {
        let mut item = MenuItem::new("A", 10);
        item.count = 3;

        let catalog = Catalog::from_items(vec![item]);

        assert_eq!(catalog.map(|c| c.items()[0].count), Ok(3));
    }

    #[test]
    fn sample_catalog_is_valid() {
        let sample = sample_catalog();
        assert_eq!(sample.len(), 5);
        assert!(Catalog::from_items(sample.items().to_vec()).is_ok());
    }

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(
            CatalogError::DuplicateName {
                name: "A".to_string()
            }
            .to_string(),
            "item name \"A\" appears more than once"
        );
        assert_eq!(
            CatalogError::BlankName { index: 2 }.to_string(),
            "item at position 2 has a blank name"
        );
    }
}
