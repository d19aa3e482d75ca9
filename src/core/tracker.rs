use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::core::notice::Notifier;
use crate::core::undo::UndoWindow;
use crate::models::{SwipeAction, SwipeFilters, SwipeProfile, SwipeRequest};
use crate::services::{BackendError, SkillSwapApi};

/// Errors from a swipe decision
#[derive(Debug, Error)]
pub enum SwipeError {
    #[error("No profile left to decide on")]
    NoCurrentProfile,

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// What the swipe page should render
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeView<'a> {
    /// First fetch has not completed yet
    Loading,
    Card(&'a SwipeProfile),
    /// Every profile has been decided on
    Exhausted,
}

/// Result of one decision
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionOutcome {
    pub profile_id: String,
    pub action: SwipeAction,
    pub is_match: bool,
    pub match_id: Option<String>,
    /// True when the decision exposed a profile for the match celebration
    pub celebrate: bool,
}

/// Swipe/match session state for one browsing session
///
/// Walks a cursor over the fetched deck. The cursor only moves forward on
/// decisions, back by one on a successful undo, and to zero on reload.
pub struct SwipeTracker {
    api: Arc<dyn SkillSwapApi>,
    notifier: Notifier,
    undo_length: Duration,
    filters: SwipeFilters,
    profiles: Vec<SwipeProfile>,
    cursor: usize,
    loaded: bool,
    matched: Option<SwipeProfile>,
    undo: Option<UndoWindow>,
}

impl SwipeTracker {
    pub fn new(api: Arc<dyn SkillSwapApi>, notifier: Notifier, undo_length: Duration) -> Self {
        Self {
            api,
            notifier,
            undo_length,
            filters: SwipeFilters::default(),
            profiles: Vec::new(),
            cursor: 0,
            loaded: false,
            matched: None,
            undo: None,
        }
    }

    /// Fetch a fresh deck and reset the cursor
    ///
    /// On failure an error notice is raised and the previous deck and cursor
    /// are kept. There is no retry.
    pub async fn load_profiles(&mut self) -> Result<usize, BackendError> {
        tracing::info!("Fetching swipe profiles");

        let result = self.api.swipe_profiles(&self.filters).await;
        self.loaded = true;

        match result {
            Ok(response) => {
                self.profiles = response.profiles;
                self.cursor = 0;
                self.undo = None;
                tracing::debug!("Loaded {} swipe profiles", self.profiles.len());
                Ok(self.profiles.len())
            }
            Err(e) => {
                tracing::error!("Error fetching profiles: {}", e);
                self.notifier.error("Failed to load profiles");
                Err(e)
            }
        }
    }

    /// Replace the deck filters and reload
    pub async fn apply_filters(&mut self, filters: SwipeFilters) -> Result<usize, BackendError> {
        self.filters = filters;
        self.load_profiles().await
    }

    /// Decide on the current profile
    ///
    /// The cursor advances by exactly one on success whatever the match
    /// outcome. Only a matched `like` exposes the profile for celebration.
    pub async fn decide(&mut self, action: SwipeAction) -> Result<DecisionOutcome, SwipeError> {
        let profile = self.current().cloned().ok_or(SwipeError::NoCurrentProfile)?;

        tracing::info!("Swiping {} on profile {}", action, profile.id);

        let request = SwipeRequest {
            profile_id: profile.id.clone(),
            action,
        };

        let response = match self.api.swipe(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Error swiping profile {}: {}", profile.id, e);
                self.notifier.error("Failed to process swipe");
                return Err(e.into());
            }
        };

        let celebrate = response.is_match && action == SwipeAction::Like;
        let outcome = DecisionOutcome {
            profile_id: profile.id.clone(),
            action,
            is_match: response.is_match,
            match_id: response.match_id,
            celebrate,
        };

        if celebrate {
            self.matched = Some(profile);
        }

        self.cursor += 1;
        // A newer decision replaces any window still open
        self.undo = Some(UndoWindow::open(self.undo_length));

        if outcome.is_match {
            self.notifier
                .info("It's a Match! 🎉", "You both want to learn from each other!");
        }

        Ok(outcome)
    }

    /// Step back over the last decision
    ///
    /// Works once per decision, only while the undo window is open. Returns
    /// whether the cursor moved.
    pub fn undo(&mut self) -> bool {
        match self.undo.take() {
            Some(window) if window.is_open() && self.cursor > 0 => {
                self.cursor -= 1;
                tracing::debug!("Undid last swipe, cursor back to {}", self.cursor);
                true
            }
            _ => false,
        }
    }

    /// Close the undo window early
    pub fn cancel_undo(&mut self) {
        self.undo = None;
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0 && self.undo.is_some_and(|w| w.is_open())
    }

    /// The open undo window, if any; await `expired()` on it to hide the control
    pub fn undo_window(&self) -> Option<UndoWindow> {
        self.undo.filter(|w| w.is_open())
    }

    pub fn view(&self) -> SwipeView<'_> {
        if !self.loaded {
            return SwipeView::Loading;
        }
        match self.current() {
            Some(profile) => SwipeView::Card(profile),
            None => SwipeView::Exhausted,
        }
    }

    pub fn current(&self) -> Option<&SwipeProfile> {
        self.profiles.get(self.cursor)
    }

    pub fn is_exhausted(&self) -> bool {
        self.loaded && self.cursor >= self.profiles.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.profiles.len().saturating_sub(self.cursor)
    }

    pub fn profiles(&self) -> &[SwipeProfile] {
        &self.profiles
    }

    pub fn filters(&self) -> &SwipeFilters {
        &self.filters
    }

    /// Profile to show in the match celebration overlay
    pub fn matched_profile(&self) -> Option<&SwipeProfile> {
        self.matched.as_ref()
    }

    /// Close the match celebration overlay
    pub fn dismiss_match(&mut self) -> Option<SwipeProfile> {
        self.matched.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LatencySettings, MockSettings};
    use crate::core::notice::NoticeVariant;
    use crate::models::{
        AckResponse, ChatResponse, DashboardStats, MatchesResponse, Message, ProfilesResponse,
        RescheduleRequest, SendMessageRequest, SessionsResponse, SwipeResponse,
        UpdateProfileRequest, UserProfile,
    };
    use crate::services::{Endpoint, MockBackend};
    use async_trait::async_trait;

    /// Backend that reports a match for every decision, superlikes included
    struct AlwaysMatch(MockBackend);

    #[async_trait]
    impl SkillSwapApi for AlwaysMatch {
        async fn swipe_profiles(&self, filters: &SwipeFilters) -> Result<ProfilesResponse, BackendError> {
            self.0.swipe_profiles(filters).await
        }

        async fn swipe(&self, request: SwipeRequest) -> Result<SwipeResponse, BackendError> {
            Ok(SwipeResponse {
                is_match: true,
                match_id: Some(format!("match_{}", request.profile_id)),
            })
        }

        async fn matches(&self) -> Result<MatchesResponse, BackendError> {
            self.0.matches().await
        }

        async fn chat_messages(&self, match_id: &str) -> Result<ChatResponse, BackendError> {
            self.0.chat_messages(match_id).await
        }

        async fn send_message(&self, request: SendMessageRequest) -> Result<Message, BackendError> {
            self.0.send_message(request).await
        }

        async fn sessions(&self) -> Result<SessionsResponse, BackendError> {
            self.0.sessions().await
        }

        async fn reschedule_session(&self, request: RescheduleRequest) -> Result<AckResponse, BackendError> {
            self.0.reschedule_session(request).await
        }

        async fn cancel_session(&self, session_id: &str) -> Result<AckResponse, BackendError> {
            self.0.cancel_session(session_id).await
        }

        async fn user_profile(&self) -> Result<UserProfile, BackendError> {
            self.0.user_profile().await
        }

        async fn update_profile(&self, request: UpdateProfileRequest) -> Result<AckResponse, BackendError> {
            self.0.update_profile(request).await
        }

        async fn dashboard_stats(&self) -> Result<DashboardStats, BackendError> {
            self.0.dashboard_stats().await
        }
    }

    fn tracker_with(backend: MockBackend) -> (SwipeTracker, Arc<MockBackend>, Notifier) {
        let backend = Arc::new(backend);
        let notifier = Notifier::new();
        let tracker = SwipeTracker::new(backend.clone(), notifier.clone(), Duration::from_secs(5));
        (tracker, backend, notifier)
    }

    fn backend(match_probability: f64) -> MockBackend {
        MockBackend::new(&MockSettings {
            latency: LatencySettings::instant(),
            seed: Some(1),
            ..MockSettings::default()
        })
        .with_match_probability(match_probability)
    }

    #[tokio::test]
    async fn test_loading_until_first_fetch() {
        let (mut tracker, _, _) = tracker_with(backend(0.0));
        assert_eq!(tracker.view(), SwipeView::Loading);

        tracker.load_profiles().await.unwrap();
        assert_eq!(tracker.cursor(), 0);
        assert!(matches!(tracker.view(), SwipeView::Card(p) if p.id == "1"));
    }

    #[tokio::test]
    async fn test_decide_advances_by_one_without_match() {
        let (mut tracker, _, notifier) = tracker_with(backend(0.0));
        tracker.load_profiles().await.unwrap();

        let outcome = tracker.decide(SwipeAction::Like).await.unwrap();
        assert!(!outcome.is_match);
        assert!(!outcome.celebrate);
        assert_eq!(tracker.cursor(), 1);
        assert!(tracker.matched_profile().is_none());
        assert_eq!(notifier.pending(), 0);
    }

    #[tokio::test]
    async fn test_matched_like_exposes_profile_and_notifies() {
        let (mut tracker, _, notifier) = tracker_with(backend(1.0));
        tracker.load_profiles().await.unwrap();

        let outcome = tracker.decide(SwipeAction::Like).await.unwrap();
        assert!(outcome.celebrate);
        assert!(outcome.match_id.is_some());
        assert_eq!(tracker.matched_profile().map(|p| p.id.as_str()), Some("1"));

        let notice = notifier.last().unwrap();
        assert_eq!(notice.title, "It's a Match! 🎉");
        assert_eq!(notice.variant, NoticeVariant::Default);

        assert_eq!(tracker.dismiss_match().map(|p| p.id), Some("1".to_string()));
        assert!(tracker.matched_profile().is_none());
    }

    #[tokio::test]
    async fn test_matched_superlike_notifies_without_celebrating() {
        let notifier = Notifier::new();
        let mut tracker = SwipeTracker::new(
            Arc::new(AlwaysMatch(backend(0.0))),
            notifier.clone(),
            Duration::from_secs(5),
        );
        tracker.load_profiles().await.unwrap();

        let outcome = tracker.decide(SwipeAction::Superlike).await.unwrap();
        assert!(outcome.is_match);
        assert_eq!(outcome.match_id.as_deref(), Some("match_1"));
        assert!(!outcome.celebrate);
        assert!(tracker.matched_profile().is_none());
        assert_eq!(tracker.cursor(), 1);

        let notice = notifier.last().unwrap();
        assert_eq!(notice.title, "It's a Match! 🎉");
        assert_eq!(notice.variant, NoticeVariant::Default);

        // A matched like on the next card still celebrates
        let outcome = tracker.decide(SwipeAction::Like).await.unwrap();
        assert!(outcome.celebrate);
        assert_eq!(tracker.matched_profile().map(|p| p.id.as_str()), Some("2"));
        assert_eq!(tracker.cursor(), 2);
        assert_eq!(notifier.pending(), 2);
    }

    #[tokio::test]
    async fn test_failed_swipe_keeps_cursor() {
        let (mut tracker, backend, notifier) = tracker_with(backend(0.0));
        tracker.load_profiles().await.unwrap();
        backend.fail(Endpoint::Swipe);

        let result = tracker.decide(SwipeAction::Pass).await;
        assert!(matches!(result, Err(SwipeError::Backend(_))));
        assert_eq!(tracker.cursor(), 0);
        assert!(!tracker.can_undo());
        assert_eq!(notifier.last().unwrap().description, "Failed to process swipe");
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_deck() {
        let (mut tracker, backend, notifier) = tracker_with(backend(0.0));
        tracker.load_profiles().await.unwrap();
        tracker.decide(SwipeAction::Pass).await.unwrap();

        backend.fail(Endpoint::SwipeProfiles);
        assert!(tracker.load_profiles().await.is_err());
        assert_eq!(tracker.cursor(), 1);
        assert_eq!(tracker.len(), 3);
        assert_eq!(notifier.last().unwrap().description, "Failed to load profiles");
    }

    #[tokio::test]
    async fn test_first_load_failure_shows_empty_state() {
        let (mut tracker, backend, _) = tracker_with(backend(0.0));
        backend.fail(Endpoint::SwipeProfiles);

        assert!(tracker.load_profiles().await.is_err());
        assert_eq!(tracker.view(), SwipeView::Exhausted);
    }

    #[tokio::test]
    async fn test_deciding_when_exhausted_is_rejected() {
        let (mut tracker, _, _) =
            tracker_with(backend(0.0).with_profiles(crate::services::fixtures::swipe_profiles()[..1].to_vec()));
        tracker.load_profiles().await.unwrap();
        tracker.decide(SwipeAction::Pass).await.unwrap();

        assert!(tracker.is_exhausted());
        assert!(matches!(
            tracker.decide(SwipeAction::Pass).await,
            Err(SwipeError::NoCurrentProfile)
        ));
        assert_eq!(tracker.cursor(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_undo_once_within_window() {
        let (mut tracker, _, _) = tracker_with(backend(0.0));
        tracker.load_profiles().await.unwrap();
        tracker.decide(SwipeAction::Pass).await.unwrap();
        tracker.decide(SwipeAction::Pass).await.unwrap();

        tokio::time::advance(Duration::from_secs(4)).await;
        assert!(tracker.can_undo());
        assert!(tracker.undo());
        assert_eq!(tracker.cursor(), 1);

        assert!(!tracker.undo());
        assert_eq!(tracker.cursor(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_undo_after_expiry_does_nothing() {
        let (mut tracker, _, _) = tracker_with(backend(0.0));
        tracker.load_profiles().await.unwrap();
        tracker.decide(SwipeAction::Pass).await.unwrap();

        tokio::time::advance(Duration::from_secs(5)).await;
        assert!(!tracker.can_undo());
        assert!(tracker.undo_window().is_none());
        assert!(!tracker.undo());
        assert_eq!(tracker.cursor(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_decision_restarts_window() {
        let (mut tracker, _, _) = tracker_with(backend(0.0));
        tracker.load_profiles().await.unwrap();
        tracker.decide(SwipeAction::Pass).await.unwrap();

        tokio::time::advance(Duration::from_secs(4)).await;
        tracker.decide(SwipeAction::Pass).await.unwrap();

        // The first window would have closed here
        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(tracker.undo());
        assert_eq!(tracker.cursor(), 1);
    }

    #[tokio::test]
    async fn test_reload_and_cancel_close_window() {
        let (mut tracker, _, _) = tracker_with(backend(0.0));
        tracker.load_profiles().await.unwrap();
        tracker.decide(SwipeAction::Pass).await.unwrap();
        tracker.cancel_undo();
        assert!(!tracker.undo());

        tracker.decide(SwipeAction::Pass).await.unwrap();
        tracker.load_profiles().await.unwrap();
        assert_eq!(tracker.cursor(), 0);
        assert!(!tracker.can_undo());
        assert!(!tracker.undo());
    }

    #[tokio::test]
    async fn test_filters_are_forwarded_on_reload() {
        let (mut tracker, _, _) = tracker_with(backend(0.0));
        let filters = SwipeFilters {
            skills: vec!["figma".to_string()],
            ..SwipeFilters::default()
        };

        assert_eq!(tracker.apply_filters(filters).await.unwrap(), 1);
        assert_eq!(tracker.current().map(|p| p.name.as_str()), Some("Emily Chen"));
        assert_eq!(tracker.filters().skills, vec!["figma".to_string()]);
    }
}
