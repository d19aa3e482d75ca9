//! SkillSwap - client core for the SkillSwap skill-matching app
//!
//! Swipe/match session tracking over a candidate deck, plus the match list,
//! chat, session book and profile setup controllers. All data comes from a
//! time-delayed mock backend serving fixtures.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Notifier, SwipeTracker, SwipeView, UndoWindow};
pub use crate::models::{SwipeAction, SwipeFilters, SwipeProfile, SwipeRequest, SwipeResponse};
pub use crate::services::{BackendError, MockBackend, SkillSwapApi};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let action: SwipeAction = "superlike".parse().unwrap();
        assert_eq!(action, SwipeAction::Superlike);
        assert!(SwipeFilters::default().is_empty());
    }
}
