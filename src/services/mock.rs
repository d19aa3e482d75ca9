use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::time::Duration;
use validator::Validate;

use crate::config::{LatencySettings, MockSettings};
use crate::core::filters::matches_swipe_filters;
use crate::models::{
    AckResponse, ChatResponse, DashboardStats, MatchesResponse, Message, ProfilesResponse,
    RescheduleRequest, SendMessageRequest, SessionsResponse, SwipeAction, SwipeFilters,
    SwipeProfile, SwipeRequest, SwipeResponse, UpdateProfileRequest, UserProfile,
};
use crate::services::api::{BackendError, SkillSwapApi};
use crate::services::fixtures::{self, CURRENT_USER_ID};

/// Mock endpoints, used to inject outages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    SwipeProfiles,
    Swipe,
    Matches,
    ChatMessages,
    SendMessage,
    Sessions,
    RescheduleSession,
    CancelSession,
    UserProfile,
    UpdateProfile,
    DashboardStats,
}

/// In-memory stand-in for the SkillSwap backend
///
/// Every call sleeps for a fixed per-endpoint delay and then answers from
/// hard-coded fixtures. Nothing is stored: mutations are acknowledged and
/// forgotten.
pub struct MockBackend {
    latency: LatencySettings,
    match_probability: f64,
    rng: Mutex<StdRng>,
    outages: Mutex<HashSet<Endpoint>>,
    deck: Vec<SwipeProfile>,
}

impl MockBackend {
    /// Create a mock backend from settings
    pub fn new(settings: &MockSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            latency: settings.latency,
            match_probability: sanitize_probability(settings.match_probability),
            rng: Mutex::new(rng),
            outages: Mutex::new(HashSet::new()),
            deck: fixtures::swipe_profiles(),
        }
    }

    /// Replace the swipe deck fixture
    pub fn with_profiles(mut self, profiles: Vec<SwipeProfile>) -> Self {
        self.deck = profiles;
        self
    }

    /// Override the match probability for `like` decisions
    pub fn with_match_probability(mut self, probability: f64) -> Self {
        self.match_probability = sanitize_probability(probability);
        self
    }

    /// Make every following call to `endpoint` fail
    pub fn fail(&self, endpoint: Endpoint) {
        tracing::debug!("Injecting outage on {:?}", endpoint);
        self.outages.lock().insert(endpoint);
    }

    /// Clear an injected outage
    pub fn restore(&self, endpoint: Endpoint) {
        self.outages.lock().remove(&endpoint);
    }

    async fn respond(&self, endpoint: Endpoint, delay_ms: u64) -> Result<(), BackendError> {
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }

        if self.outages.lock().contains(&endpoint) {
            tracing::warn!("Mock endpoint {:?} is unavailable", endpoint);
            return Err(BackendError::Unavailable(format!("{:?} endpoint unreachable", endpoint)));
        }

        Ok(())
    }

    fn roll_match(&self, action: SwipeAction) -> bool {
        // Only plain likes can match
        action == SwipeAction::Like && self.rng.lock().gen_bool(self.match_probability)
    }
}

/// NaN never matches; everything else is clamped to [0, 1]
fn sanitize_probability(probability: f64) -> f64 {
    if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new(&MockSettings::default())
    }
}

#[async_trait]
impl SkillSwapApi for MockBackend {
    async fn swipe_profiles(&self, filters: &SwipeFilters) -> Result<ProfilesResponse, BackendError> {
        self.respond(Endpoint::SwipeProfiles, self.latency.profiles_ms).await?;

        let profiles: Vec<SwipeProfile> = self
            .deck
            .iter()
            .filter(|p| matches_swipe_filters(p, filters))
            .cloned()
            .collect();

        tracing::debug!("Serving {} of {} swipe profiles", profiles.len(), self.deck.len());
        Ok(ProfilesResponse { profiles })
    }

    async fn swipe(&self, request: SwipeRequest) -> Result<SwipeResponse, BackendError> {
        request.validate()?;
        self.respond(Endpoint::Swipe, self.latency.swipe_ms).await?;

        let is_match = self.roll_match(request.action);
        let match_id = is_match.then(|| format!("match_{}", uuid::Uuid::new_v4().simple()));

        tracing::debug!(
            "Swipe {} on {} -> match: {}",
            request.action,
            request.profile_id,
            is_match
        );

        Ok(SwipeResponse { is_match, match_id })
    }

    async fn matches(&self) -> Result<MatchesResponse, BackendError> {
        self.respond(Endpoint::Matches, self.latency.matches_ms).await?;
        Ok(MatchesResponse { matches: fixtures::matches() })
    }

    async fn chat_messages(&self, match_id: &str) -> Result<ChatResponse, BackendError> {
        if match_id.trim().is_empty() {
            return Err(BackendError::InvalidRequest("matchId is required".to_string()));
        }
        self.respond(Endpoint::ChatMessages, self.latency.messages_ms).await?;
        Ok(fixtures::chat())
    }

    async fn send_message(&self, request: SendMessageRequest) -> Result<Message, BackendError> {
        request.validate()?;
        self.respond(Endpoint::SendMessage, self.latency.send_ms).await?;

        Ok(Message {
            id: format!("msg_{}", uuid::Uuid::new_v4().simple()),
            content: request.content,
            sender_id: CURRENT_USER_ID.to_string(),
            timestamp: Utc::now(),
            is_read: false,
            kind: request.kind,
        })
    }

    async fn sessions(&self) -> Result<SessionsResponse, BackendError> {
        self.respond(Endpoint::Sessions, self.latency.sessions_ms).await?;
        Ok(SessionsResponse { sessions: fixtures::sessions() })
    }

    async fn reschedule_session(&self, request: RescheduleRequest) -> Result<AckResponse, BackendError> {
        request.validate()?;
        self.respond(Endpoint::RescheduleSession, self.latency.session_update_ms).await?;
        ensure_session_exists(&request.session_id)?;
        Ok(AckResponse::ok("Session rescheduled successfully"))
    }

    async fn cancel_session(&self, session_id: &str) -> Result<AckResponse, BackendError> {
        self.respond(Endpoint::CancelSession, self.latency.session_update_ms).await?;
        ensure_session_exists(session_id)?;
        Ok(AckResponse::ok("Session cancelled successfully"))
    }

    async fn user_profile(&self) -> Result<UserProfile, BackendError> {
        self.respond(Endpoint::UserProfile, self.latency.profile_ms).await?;
        Ok(fixtures::user_profile())
    }

    async fn update_profile(&self, request: UpdateProfileRequest) -> Result<AckResponse, BackendError> {
        request.validate()?;
        self.respond(Endpoint::UpdateProfile, self.latency.profile_update_ms).await?;
        Ok(AckResponse::ok("Profile updated successfully"))
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, BackendError> {
        self.respond(Endpoint::DashboardStats, self.latency.dashboard_ms).await?;
        Ok(fixtures::dashboard_stats())
    }
}

fn ensure_session_exists(session_id: &str) -> Result<(), BackendError> {
    if fixtures::sessions().iter().any(|s| s.id == session_id) {
        Ok(())
    } else {
        Err(BackendError::NotFound(format!("Session {} not found", session_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageType;

    fn instant_backend() -> MockBackend {
        let settings = MockSettings {
            latency: LatencySettings::instant(),
            seed: Some(42),
            ..MockSettings::default()
        };
        MockBackend::new(&settings)
    }

    fn swipe(action: SwipeAction) -> SwipeRequest {
        SwipeRequest { profile_id: "1".to_string(), action }
    }

    #[tokio::test]
    async fn test_nan_probability_never_matches() {
        let backend = instant_backend().with_match_probability(f64::NAN);
        for _ in 0..10 {
            let response = backend.swipe(swipe(SwipeAction::Like)).await.unwrap();
            assert!(!response.is_match);
        }

        let from_settings = MockBackend::new(&MockSettings {
            latency: LatencySettings::instant(),
            match_probability: f64::NAN,
            ..MockSettings::default()
        });
        assert!(!from_settings.swipe(swipe(SwipeAction::Like)).await.unwrap().is_match);
    }

    #[tokio::test]
    async fn test_serves_fixture_deck() {
        let backend = instant_backend();
        let response = backend.swipe_profiles(&SwipeFilters::default()).await.unwrap();
        assert_eq!(response.profiles.len(), 3);
        assert_eq!(response.profiles[0].name, "Sarah Johnson");
    }

    #[tokio::test]
    async fn test_filters_deck_by_distance() {
        let backend = instant_backend();
        let filters = SwipeFilters { max_distance_km: Some(10), ..SwipeFilters::default() };
        let response = backend.swipe_profiles(&filters).await.unwrap();
        let ids: Vec<&str> = response.profiles.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[tokio::test]
    async fn test_pass_and_superlike_never_match() {
        let backend = instant_backend().with_match_probability(1.0);
        for action in [SwipeAction::Pass, SwipeAction::Superlike] {
            let response = backend.swipe(swipe(action)).await.unwrap();
            assert!(!response.is_match);
            assert!(response.match_id.is_none());
        }
    }

    #[tokio::test]
    async fn test_certain_like_matches_with_id() {
        let backend = instant_backend().with_match_probability(1.0);
        let response = backend.swipe(swipe(SwipeAction::Like)).await.unwrap();
        assert!(response.is_match);
        assert!(response.match_id.unwrap().starts_with("match_"));
    }

    #[tokio::test]
    async fn test_like_match_rate_is_roughly_thirty_percent() {
        let backend = instant_backend();
        let mut hits = 0;
        for _ in 0..1000 {
            if backend.swipe(swipe(SwipeAction::Like)).await.unwrap().is_match {
                hits += 1;
            }
        }
        assert!((200..400).contains(&hits), "unexpected match count {}", hits);
    }

    #[tokio::test]
    async fn test_injected_outage_and_restore() {
        let backend = instant_backend();
        backend.fail(Endpoint::Matches);
        assert!(matches!(backend.matches().await, Err(BackendError::Unavailable(_))));
        backend.restore(Endpoint::Matches);
        assert_eq!(backend.matches().await.unwrap().matches.len(), 3);
    }

    #[tokio::test]
    async fn test_rejects_invalid_requests() {
        let backend = instant_backend();
        let empty_swipe = SwipeRequest { profile_id: String::new(), action: SwipeAction::Like };
        assert!(matches!(backend.swipe(empty_swipe).await, Err(BackendError::Validation(_))));

        let empty_message = SendMessageRequest {
            match_id: "1".to_string(),
            content: String::new(),
            kind: MessageType::Text,
        };
        assert!(matches!(backend.send_message(empty_message).await, Err(BackendError::Validation(_))));

        assert!(matches!(backend.cancel_session("99").await, Err(BackendError::NotFound(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_latency_is_applied() {
        let backend = MockBackend::default();
        let started = tokio::time::Instant::now();
        backend.swipe(swipe(SwipeAction::Pass)).await.unwrap();
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(500) && elapsed < Duration::from_millis(600));
    }
}
