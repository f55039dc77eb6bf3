//! Model selection.
//!
//! [`ModelSelector`] scores the non-seasonal candidates and keeps the best;
//! [`SeasonalGate`] puts additive Holt-Winters in front of it for series long
//! enough to carry a seasonal pattern.

mod seasonal;
mod selector;

pub use seasonal::SeasonalGate;
pub use selector::{non_seasonal_registry, select_best_model, ModelSelector, Selection};
