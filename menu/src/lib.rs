//! Menu ordering screen built on the menu order store.
//!
//! A fixed catalog of items, each with a user-adjustable quantity. The screen
//! keeps two labels in sync with the selection: the number of items selected
//! and the total price.
//!
//! - [`Catalog`]: validated, ordered item list
//! - [`MenuReducer`]: count changes, clear, order
//! - [`summarize`]: derived totals
//! - [`MenuScreen`]: store-to-view binding and input routing
//!
//! # Quick Start
//!
//! ```no_run
//! use menu_order::{sample_catalog, MenuRow, MenuScreen, MenuView};
//!
//! struct Silent;
//!
//! impl MenuView for Silent {
//!     fn render_rows(&self, _rows: &[MenuRow]) {}
//!     fn render_item_count(&self, _text: &str) {}
//!     fn render_total_price(&self, _text: &str) {}
//! }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let screen = MenuScreen::new(sample_catalog(), Silent);
//!
//! screen.tap_increment(0).await?;
//! screen.tap_increment(1).await?;
//!
//! let summary = screen.summary().await;
//! assert_eq!(summary.item_count, 2);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod format;
pub mod reducer;
pub mod screen;
pub mod summary;
pub mod types;

// Re-export commonly used types
pub use catalog::{sample_catalog, Catalog, CatalogError};
pub use format::CurrencyFormat;
pub use reducer::{MenuEnvironment, MenuReducer};
pub use screen::{project, MenuProjection, MenuRow, MenuScreen, MenuStore, MenuView, ScreenConfig};
pub use summary::{summarize, OrderSummary};
pub use types::{CountChange, MenuAction, MenuItem, MenuState};
