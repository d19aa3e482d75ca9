use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A skill offered or wanted on a swipe card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: String,
}

impl Skill {
    pub fn new(name: &str, level: &str) -> Self {
        Self {
            name: name.to_string(),
            level: level.to_string(),
        }
    }
}

/// Candidate profile shown on a swipe card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwipeProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub age: u8,
    pub location: String,
    /// Distance from the current user in kilometers
    pub distance: u16,
    pub bio: String,
    #[serde(rename = "profileImage")]
    pub profile_image: String,
    #[serde(rename = "teachingSkills", default)]
    pub teaching_skills: Vec<Skill>,
    #[serde(rename = "learningSkills", default)]
    pub learning_skills: Vec<Skill>,
    pub availability: String,
    pub rating: f32,
    #[serde(rename = "isOnline", default)]
    pub is_online: bool,
}

impl SwipeProfile {
    /// True if any teaching skill name contains `needle` (case-insensitive)
    pub fn teaches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.teaching_skills
            .iter()
            .any(|s| s.name.to_lowercase().contains(&needle))
    }
}

/// Swipe decision on a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeAction {
    Like,
    Pass,
    Superlike,
}

impl SwipeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeAction::Like => "like",
            SwipeAction::Pass => "pass",
            SwipeAction::Superlike => "superlike",
        }
    }
}

impl std::fmt::Display for SwipeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SwipeAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "like" => Ok(SwipeAction::Like),
            "pass" => Ok(SwipeAction::Pass),
            "superlike" => Ok(SwipeAction::Superlike),
            other => Err(format!("unknown swipe action: {}", other)),
        }
    }
}

/// Short partner description used by matches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchPartner {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "profileImage")]
    pub profile_image: String,
    pub location: String,
    #[serde(rename = "isOnline", default)]
    pub is_online: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastMessage {
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "isRead")]
    pub is_read: bool,
}

/// An established match as listed on the matches page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: MatchPartner,
    #[serde(rename = "matchedAt")]
    pub matched_at: DateTime<Utc>,
    #[serde(rename = "lastMessage", default)]
    pub last_message: Option<LastMessage>,
    #[serde(rename = "unreadCount", default)]
    pub unread_count: u32,
    #[serde(rename = "commonSkills", default)]
    pub common_skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Text,
    Image,
    File,
}

/// Chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: String,
    #[serde(rename = "senderId")]
    pub sender_id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "isRead")]
    pub is_read: bool,
    #[serde(rename = "type")]
    pub kind: MessageType,
}

/// Chat partner header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "profileImage")]
    pub profile_image: String,
    #[serde(rename = "isOnline")]
    pub is_online: bool,
    #[serde(rename = "lastSeen")]
    pub last_seen: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPartner {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "profileImage")]
    pub profile_image: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Teaching,
    Learning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Scheduled,
    Completed,
    Cancelled,
}

/// A scheduled or past learning session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "_id")]
    pub id: String,
    pub partner: SessionPartner,
    pub skill: String,
    #[serde(rename = "type")]
    pub kind: SessionType,
    #[serde(rename = "scheduledAt")]
    pub scheduled_at: DateTime<Utc>,
    /// Duration in minutes
    pub duration: u32,
    pub status: SessionStatus,
    pub platform: String,
    #[serde(rename = "meetingLink", default)]
    pub meeting_link: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeachingSkill {
    pub name: String,
    pub level: String,
    pub endorsements: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningSkill {
    pub name: String,
    /// Percent complete, 0-100
    pub progress: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    #[serde(rename = "unlockedAt")]
    pub unlocked_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reviewer {
    pub name: String,
    #[serde(rename = "profileImage")]
    pub profile_image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: String,
    pub reviewer: Reviewer,
    pub rating: u8,
    pub comment: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// The signed-in user's own profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub bio: String,
    pub location: String,
    #[serde(rename = "profileImage")]
    pub profile_image: String,
    pub rating: f32,
    #[serde(rename = "totalSessions")]
    pub total_sessions: u32,
    #[serde(rename = "totalMatches")]
    pub total_matches: u32,
    #[serde(rename = "joinedAt")]
    pub joined_at: DateTime<Utc>,
    #[serde(rename = "teachingSkills", default)]
    pub teaching_skills: Vec<TeachingSkill>,
    #[serde(rename = "learningSkills", default)]
    pub learning_skills: Vec<LearningSkill>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Match,
    Session,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

/// Home page statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(rename = "totalMatches")]
    pub total_matches: u32,
    #[serde(rename = "activeChats")]
    pub active_chats: u32,
    #[serde(rename = "upcomingSessions")]
    pub upcoming_sessions: u32,
    #[serde(rename = "skillsLearned")]
    pub skills_learned: u32,
    #[serde(rename = "skillsTaught")]
    pub skills_taught: u32,
    pub rating: f32,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(rename = "recentActivity", default)]
    pub recent_activity: Vec<Activity>,
}

/// Swipe deck filters
///
/// Empty lists and `None` mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwipeFilters {
    #[serde(rename = "maxDistanceKm", default)]
    pub max_distance_km: Option<u16>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub availability: Vec<String>,
}

impl SwipeFilters {
    pub fn is_empty(&self) -> bool {
        self.max_distance_km.is_none() && self.skills.is_empty() && self.availability.is_empty()
    }
}
