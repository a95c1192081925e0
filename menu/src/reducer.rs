//! Reducer logic for the menu screen.
//!
//! Every action is total: unknown items and decrements at zero are silent
//! no-ops, so the reducer never produces follow-up work.

use crate::types::{CountChange, MenuAction, MenuState};
use menu_order_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};

/// Environment dependencies for the menu reducer
///
/// The menu is a pure state machine and needs nothing injected.
#[derive(Clone, Copy, Debug, Default)]
pub struct MenuEnvironment;

/// Reducer for the menu screen
#[derive(Clone, Copy, Debug, Default)]
pub struct MenuReducer;

impl MenuReducer {
    /// Creates a new `MenuReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for MenuReducer {
    type State = MenuState;
    type Action = MenuAction;
    type Environment = MenuEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            MenuAction::ChangeCount { name, increase } => {
                match state.change_count(&name, increase) {
                    CountChange::Changed(count) => {
                        tracing::debug!(item = %name, count, "Count changed");
                    },
                    CountChange::Clamped => {
                        tracing::debug!(item = %name, increase, "Count already at bound");
                    },
                    CountChange::UnknownItem => {
                        tracing::debug!(item = %name, "Ignoring change for unknown item");
                    },
                }
            },
            MenuAction::ClearAll => {
                state.clear_all();
                tracing::debug!("Selections cleared");
            },
            MenuAction::Order => {
                let summary = state.summary();
                tracing::info!(
                    item_count = summary.item_count,
                    total_price = summary.total_price,
                    "Order requested; checkout is not available"
                );
            },
        }

        smallvec![Effect::None]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::summary::OrderSummary;
    use menu_order_testing::{assertions, ReducerTest};

    fn state() -> MenuState {
        let catalog = Catalog::new([("A", 100), ("B", 250)]);
        let Ok(catalog) = catalog else {
            unreachable!("valid catalog rejected");
        };
        MenuState::from(catalog)
    }

    #[test]
    fn increments_accumulate() {
        ReducerTest::new(MenuReducer::new())
            .with_env(MenuEnvironment)
            .given_state(state())
            .when_action(MenuAction::increment("A"))
            .when_action(MenuAction::increment("A"))
            .when_action(MenuAction::increment("B"))
            .then_state(|state| {
                assert_eq!(
                    state.summary(),
                    OrderSummary {
                        item_count: 3,
                        total_price: 450
                    }
                );
            })
            .then_effects(|effects| {
                assertions::assert_no_effects(effects);
            })
            .run();
    }

    #[test]
    fn decrement_at_zero_is_unchanged() {
        let before = state();
        ReducerTest::new(MenuReducer::new())
            .with_env(MenuEnvironment)
            .given_state(state())
            .when_action(MenuAction::decrement("A"))
            .then_state(move |state| {
                assert_eq!(state, &before);
                assert_eq!(state.summary(), OrderSummary::default());
            })
            .run();
    }

    #[test]
    fn unknown_item_leaves_store_unchanged() {
        let before = state();
        ReducerTest::new(MenuReducer::new())
            .with_env(MenuEnvironment)
            .given_state(state())
            .when_action(MenuAction::increment("A"))
            .when_action(MenuAction::increment("Z"))
            .when_action(MenuAction::decrement("Z"))
            .then_state(move |state| {
                assert_eq!(state.item("A").map(|i| i.count), Some(1));
                assert_eq!(state.item("B"), before.item("B"));
                assert!(state.item("Z").is_none());
            })
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_no_effects(effects);
            })
            .run();
    }

    #[test]
    fn clear_all_zeroes_summary() {
        ReducerTest::new(MenuReducer::new())
            .with_env(MenuEnvironment)
            .given_state(state())
            .when_action(MenuAction::increment("A"))
            .when_action(MenuAction::increment("B"))
            .when_action(MenuAction::ClearAll)
            .then_state(|state| {
                assert_eq!(state.summary(), OrderSummary::default());
            })
            .run();
    }

    #[test]
    fn clear_all_is_idempotent() {
        let mut once = state();
        let mut twice = state();
        let env = MenuEnvironment;
        let reducer = MenuReducer::new();

        for s in [&mut once, &mut twice] {
            reducer.reduce(s, MenuAction::increment("B"), &env);
        }
        reducer.reduce(&mut once, MenuAction::ClearAll, &env);
        reducer.reduce(&mut twice, MenuAction::ClearAll, &env);
        reducer.reduce(&mut twice, MenuAction::ClearAll, &env);

        assert_eq!(once, twice);
    }

    #[test]
    fn order_does_not_touch_state() {
        let mut expected = state();
        MenuReducer::new().reduce(&mut expected, MenuAction::increment("B"), &MenuEnvironment);
        let given = expected.clone();

        ReducerTest::new(MenuReducer::new())
            .with_env(MenuEnvironment)
            .given_state(given)
            .when_action(MenuAction::Order)
            .then_state(move |state| {
                assert_eq!(state, &expected);
            })
            .then_effects(|effects| {
                assertions::assert_no_effects(effects);
            })
            .run();
    }
}
