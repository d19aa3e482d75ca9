use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{MessageType, SwipeAction};

/// Swipe submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SwipeRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "profile_id", rename = "profileId")]
    pub profile_id: String,
    pub action: SwipeAction,
}

/// Chat message submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "match_id", rename = "matchId")]
    pub match_id: String,
    #[validate(length(min = 1, max = 2000))]
    pub content: String,
    #[serde(rename = "type")]
    pub kind: MessageType,
}

/// Session reschedule request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RescheduleRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "session_id", rename = "sessionId")]
    pub session_id: String,
    #[serde(alias = "new_date_time", rename = "newDateTime", default)]
    pub new_date_time: Option<DateTime<Utc>>,
}

/// Profile setup / edit submission
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 500))]
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "teachingSkills", default)]
    pub teaching_skills: Vec<String>,
    #[serde(rename = "learningSkills", default)]
    pub learning_skills: Vec<String>,
    #[serde(default)]
    pub availability: Vec<String>,
}
