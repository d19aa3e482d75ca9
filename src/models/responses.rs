use serde::{Deserialize, Serialize};
use crate::models::domain::{ChatUser, MatchSummary, Message, Session, SwipeProfile};

/// Swipe deck response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilesResponse {
    pub profiles: Vec<SwipeProfile>,
}

/// Swipe outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwipeResponse {
    #[serde(rename = "isMatch")]
    pub is_match: bool,
    #[serde(rename = "matchId", default, skip_serializing_if = "Option::is_none")]
    pub match_id: Option<String>,
}

/// Matches list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchesResponse {
    pub matches: Vec<MatchSummary>,
}

/// Chat history response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub messages: Vec<Message>,
    pub user: ChatUser,
}

/// Sessions list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionsResponse {
    pub sessions: Vec<Session>,
}

/// Generic acknowledgement for mutations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AckResponse {
    pub success: bool,
    pub message: String,
}

impl AckResponse {
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}
