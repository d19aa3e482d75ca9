// Client controller exports
pub mod chat;
pub mod filters;
pub mod matches;
pub mod notice;
pub mod profile;
pub mod sessions;
pub mod tracker;
pub mod undo;

pub use chat::ChatThread;
pub use filters::{matches_swipe_filters, matches_search, matches_tab, is_upcoming, is_past, MatchTab};
pub use matches::MatchList;
pub use notice::{Notice, NoticeVariant, Notifier};
pub use profile::{load_dashboard, load_user_profile, SetupStep, SetupWizard};
pub use sessions::SessionBook;
pub use tracker::{DecisionOutcome, SwipeError, SwipeTracker, SwipeView};
pub use undo::UndoWindow;
