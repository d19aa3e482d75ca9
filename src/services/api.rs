use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    AckResponse, ChatResponse, DashboardStats, MatchesResponse, Message, ProfilesResponse,
    RescheduleRequest, SendMessageRequest, SessionsResponse, SwipeFilters, SwipeRequest,
    SwipeResponse, UpdateProfileRequest, UserProfile,
};

/// Errors returned by a SkillSwap data source
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Data source used by every client controller
///
/// The endpoints mirror the client's REST contract:
/// - `GET /api/swipe/profiles`, `POST /api/swipe`
/// - `GET /api/matches`
/// - `GET|POST /api/chat/:matchId/messages`
/// - `GET /api/sessions`, `PUT /api/sessions/:id/reschedule`, `DELETE /api/sessions/:id`
/// - `GET|PUT /api/profile`
/// - `GET /api/dashboard/stats`
#[async_trait]
pub trait SkillSwapApi: Send + Sync {
    async fn swipe_profiles(&self, filters: &SwipeFilters) -> Result<ProfilesResponse, BackendError>;

    async fn swipe(&self, request: SwipeRequest) -> Result<SwipeResponse, BackendError>;

    async fn matches(&self) -> Result<MatchesResponse, BackendError>;

    async fn chat_messages(&self, match_id: &str) -> Result<ChatResponse, BackendError>;

    async fn send_message(&self, request: SendMessageRequest) -> Result<Message, BackendError>;

    async fn sessions(&self) -> Result<SessionsResponse, BackendError>;

    async fn reschedule_session(&self, request: RescheduleRequest) -> Result<AckResponse, BackendError>;

    async fn cancel_session(&self, session_id: &str) -> Result<AckResponse, BackendError>;

    async fn user_profile(&self) -> Result<UserProfile, BackendError>;

    async fn update_profile(&self, request: UpdateProfileRequest) -> Result<AckResponse, BackendError>;

    async fn dashboard_stats(&self) -> Result<DashboardStats, BackendError>;
}
