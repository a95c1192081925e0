//! Binding between the menu store and a view.
//!
//! A [`MenuScreen`] owns its store and a single subscription. Every reduced
//! action re-projects the whole state onto the view: the row list plus the
//! item-count and total-price labels. View input is routed back as actions.
//!
//! ```text
//! tap ─▶ MenuScreen ─▶ Store::send ─▶ MenuReducer
//!                                          │
//! MenuView ◀── project(state) ◀── listener ┘
//! ```

use crate::catalog::Catalog;
use crate::format::CurrencyFormat;
use crate::reducer::{MenuEnvironment, MenuReducer};
use crate::summary::OrderSummary;
use crate::types::{MenuAction, MenuItem, MenuState};
use menu_order_runtime::{Store, StoreConfig, StoreError, Subscription};
use std::sync::Arc;

/// Store type driving a menu screen
pub type MenuStore = Store<MenuState, MenuAction, MenuEnvironment, MenuReducer>;

/// One rendered row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuRow {
    /// Item name
    pub name: String,
    /// Unit price
    pub price: u64,
    /// Unit price formatted for display
    pub price_label: String,
    /// Selected quantity
    pub count: u64,
}

/// Everything a view shows for one state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuProjection {
    /// One row per item, in catalog order
    pub rows: Vec<MenuRow>,
    /// Text of the item-count label
    pub item_count: String,
    /// Text of the total-price label
    pub total_price: String,
}

/// Projects a state onto display values
#[must_use]
pub fn project(state: &MenuState, format: &CurrencyFormat) -> MenuProjection {
    let OrderSummary {
        item_count,
        total_price,
    } = state.summary();

    MenuProjection {
        rows: state
            .items()
            .iter()
            .map(|item| MenuRow {
                name: item.name.clone(),
                price: item.price,
                price_label: format.format(item.price),
                count: item.count,
            })
            .collect(),
        item_count: item_count.to_string(),
        total_price: format.format(total_price),
    }
}

/// Presentation surface for a menu screen
///
/// Calls arrive synchronously from inside the store's notification cycle, so
/// implementations must not block on the screen.
pub trait MenuView: Send + Sync + 'static {
    /// Replace the row list
    fn render_rows(&self, rows: &[MenuRow]);

    /// Replace the item-count label
    fn render_item_count(&self, text: &str);

    /// Replace the total-price label
    fn render_total_price(&self, text: &str);
}

impl<V: MenuView> MenuView for Arc<V> {
    fn render_rows(&self, rows: &[MenuRow]) {
        (**self).render_rows(rows);
    }

    fn render_item_count(&self, text: &str) {
        (**self).render_item_count(text);
    }

    fn render_total_price(&self, text: &str) {
        (**self).render_total_price(text);
    }
}

fn render<V: MenuView + ?Sized>(view: &V, projection: &MenuProjection) {
    view.render_rows(&projection.rows);
    view.render_item_count(&projection.item_count);
    view.render_total_price(&projection.total_price);
}

/// Configuration for a [`MenuScreen`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScreenConfig {
    /// Price label formatting
    pub currency: CurrencyFormat,
    /// Store runtime settings
    pub store: StoreConfig,
}

impl ScreenConfig {
    /// Set the price label formatting
    #[must_use]
    pub fn with_currency(mut self, currency: CurrencyFormat) -> Self {
        self.currency = currency;
        self
    }

    /// Set the store runtime settings
    #[must_use]
    pub fn with_store(mut self, store: StoreConfig) -> Self {
        self.store = store;
        self
    }
}

/// A menu ordering screen
///
/// Dropping the screen releases its subscription and discards the store;
/// nothing outlives it.
///
/// # Example
///
/// ```ignore
/// let screen = MenuScreen::new(sample_catalog(), my_view);
/// screen.tap_increment(0).await?;
/// screen.tap_clear().await?;
/// ```
pub struct MenuScreen<V: MenuView> {
    store: MenuStore,
    view: Arc<V>,
    subscription: Subscription,
}

impl<V: MenuView> MenuScreen<V> {
    /// Builds a screen with [`ScreenConfig::default`] and renders it once
    #[must_use]
    pub fn new(catalog: Catalog, view: V) -> Self {
        Self::with_config(catalog, view, ScreenConfig::default())
    }

    /// Builds a screen and renders the initial state
    #[must_use]
    pub fn with_config(catalog: Catalog, view: V, config: ScreenConfig) -> Self {
        let ScreenConfig { currency, store } = config;
        let state = MenuState::from(catalog);
        let view = Arc::new(view);

        render(&*view, &project(&state, &currency));

        let store = Store::with_config(state, MenuReducer::new(), MenuEnvironment, store);

        let listener_view = Arc::clone(&view);
        let subscription = store.subscribe(move |state: &MenuState| {
            render(&*listener_view, &project(state, &currency));
        });

        tracing::debug!(subscription = %subscription.id(), "Menu screen bound");

        Self {
            store,
            view,
            subscription,
        }
    }

    /// The view this screen renders into
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Whether the screen is still receiving store notifications
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.subscription.is_active()
    }

    /// Current items in catalog order
    pub async fn items(&self) -> Vec<MenuItem> {
        self.store.state(|s| s.items().to_vec()).await
    }

    /// Current totals
    pub async fn summary(&self) -> OrderSummary {
        self.store.state(MenuState::summary).await
    }

    /// Plus button on `row`; out-of-range rows are ignored
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`] from the store. [`MenuReducer`] never
    /// dispatches follow-up actions, so with it this is always `Ok`.
    pub async fn tap_increment(&self, row: usize) -> Result<(), StoreError> {
        self.change_row(row, true).await
    }

    /// Minus button on `row`; out-of-range rows are ignored
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`] from the store. [`MenuReducer`] never
    /// dispatches follow-up actions, so with it this is always `Ok`.
    pub async fn tap_decrement(&self, row: usize) -> Result<(), StoreError> {
        self.change_row(row, false).await
    }

    /// Clear button
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`] from the store. [`MenuReducer`] never
    /// dispatches follow-up actions, so with it this is always `Ok`.
    pub async fn tap_clear(&self) -> Result<(), StoreError> {
        self.store.send(MenuAction::ClearAll).await
    }

    /// Order button
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError`] from the store. [`MenuReducer`] never
    /// dispatches follow-up actions, so with it this is always `Ok`.
    pub async fn tap_order(&self) -> Result<(), StoreError> {
        self.store.send(MenuAction::Order).await
    }

    async fn change_row(&self, row: usize, increase: bool) -> Result<(), StoreError> {
        let name = self
            .store
            .state(|s| s.items().get(row).map(|item| item.name.clone()))
            .await;

        match name {
            Some(name) => {
                self.store
                    .send(MenuAction::ChangeCount { name, increase })
                    .await
            },
            None => {
                tracing::debug!(row, "Ignoring tap on missing row");
                Ok(())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> MenuState {
        let catalog = Catalog::new([("A", 100), ("B", 2_500)]);
        let Ok(catalog) = catalog else {
            unreachable!("valid catalog rejected");
        };
        MenuState::from(catalog)
    }

    #[test]
    fn project_initial_state() {
        let projection = project(&state(), &CurrencyFormat::won());

        assert_eq!(projection.item_count, "0");
        assert_eq!(projection.total_price, "0원");
        assert_eq!(
            projection.rows[1],
            MenuRow {
                name: "B".to_string(),
                price: 2_500,
                price_label: "2,500원".to_string(),
                count: 0,
            }
        );
    }

    #[test]
    fn project_reflects_counts() {
        let mut state = state();
        state.change_count("B", true);
        state.change_count("B", true);
        state.change_count("A", true);

        let projection = project(&state, &CurrencyFormat::default());

        assert_eq!(projection.item_count, "3");
        assert_eq!(projection.total_price, "5,100");
        let counts: Vec<_> = projection.rows.iter().map(|r| r.count).collect();
        assert_eq!(counts, vec![1, 2]);
    }

    #[test]
    fn config_builders() {
        let config = ScreenConfig::default()
            .with_currency(CurrencyFormat::won())
            .with_store(StoreConfig::new(4));

        assert_eq!(config.currency, CurrencyFormat::won());
        assert_eq!(config.store.max_dispatch_depth, 4);
    }
}
