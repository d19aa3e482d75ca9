// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Achievement, Activity, ActivityKind, ChatUser, DashboardStats, LastMessage, LearningSkill,
    MatchPartner, MatchSummary, Message, MessageType, Review, Reviewer, Session, SessionPartner,
    SessionStatus, SessionType, Skill, SwipeAction, SwipeFilters, SwipeProfile, TeachingSkill,
    UserProfile,
};
pub use requests::{RescheduleRequest, SendMessageRequest, SwipeRequest, UpdateProfileRequest};
pub use responses::{
    AckResponse, ChatResponse, MatchesResponse, ProfilesResponse, SessionsResponse, SwipeResponse,
};
