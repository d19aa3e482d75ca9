//! Hard-coded data served by the mock backend

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{
    Achievement, Activity, ActivityKind, ChatResponse, ChatUser, DashboardStats, LastMessage,
    LearningSkill, MatchPartner, MatchSummary, Message, MessageType, Review, Reviewer, Session,
    SessionPartner, SessionStatus, SessionType, Skill, SwipeProfile, TeachingSkill, UserProfile,
};

/// Sender id used for messages written by the signed-in user
pub const CURRENT_USER_ID: &str = "current-user";

const SARAH_IMAGE: &str = "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=400&h=400&fit=crop&crop=face";
const CARLOS_IMAGE: &str = "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop&crop=face";
const EMILY_IMAGE: &str = "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400&h=400&fit=crop&crop=face";
const MIKE_IMAGE: &str = "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400&h=400&fit=crop&crop=face";
const JOHN_IMAGE: &str = "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&h=400&fit=crop&crop=face";

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

pub fn swipe_profiles() -> Vec<SwipeProfile> {
    vec![
        SwipeProfile {
            id: "1".to_string(),
            name: "Sarah Johnson".to_string(),
            age: 28,
            location: "San Francisco, CA".to_string(),
            distance: 5,
            bio: "Passionate about web development and teaching others. Love to share knowledge and learn new technologies!".to_string(),
            profile_image: SARAH_IMAGE.to_string(),
            teaching_skills: vec![
                Skill::new("React", "Expert"),
                Skill::new("JavaScript", "Advanced"),
                Skill::new("CSS", "Intermediate"),
            ],
            learning_skills: vec![
                Skill::new("Python", "Beginner"),
                Skill::new("Machine Learning", "Beginner"),
            ],
            availability: "Weekday evenings".to_string(),
            rating: 4.9,
            is_online: true,
        },
        SwipeProfile {
            id: "2".to_string(),
            name: "Carlos Rodriguez".to_string(),
            age: 32,
            location: "Austin, TX".to_string(),
            distance: 12,
            bio: "Native Spanish speaker and language enthusiast. I help people become fluent in Spanish through conversation practice.".to_string(),
            profile_image: CARLOS_IMAGE.to_string(),
            teaching_skills: vec![
                Skill::new("Spanish", "Native"),
                Skill::new("Guitar", "Advanced"),
            ],
            learning_skills: vec![
                Skill::new("Photography", "Intermediate"),
                Skill::new("Digital Marketing", "Beginner"),
            ],
            availability: "Flexible schedule".to_string(),
            rating: 4.7,
            is_online: false,
        },
        SwipeProfile {
            id: "3".to_string(),
            name: "Emily Chen".to_string(),
            age: 25,
            location: "Seattle, WA".to_string(),
            distance: 8,
            bio: "UX designer with a passion for creating beautiful and functional interfaces. Always excited to share design knowledge!".to_string(),
            profile_image: EMILY_IMAGE.to_string(),
            teaching_skills: vec![
                Skill::new("UI/UX Design", "Expert"),
                Skill::new("Figma", "Advanced"),
                Skill::new("Adobe Creative Suite", "Advanced"),
            ],
            learning_skills: vec![
                Skill::new("Frontend Development", "Intermediate"),
                Skill::new("Animation", "Beginner"),
            ],
            availability: "Weekend mornings".to_string(),
            rating: 4.8,
            is_online: true,
        },
    ]
}

pub fn matches() -> Vec<MatchSummary> {
    vec![
        MatchSummary {
            id: "1".to_string(),
            user: MatchPartner {
                id: "user1".to_string(),
                name: "Sarah Johnson".to_string(),
                profile_image: SARAH_IMAGE.to_string(),
                location: "San Francisco, CA".to_string(),
                is_online: true,
            },
            matched_at: at(2024, 1, 28, 10, 0),
            last_message: Some(LastMessage {
                content: "Hi! I'd love to help you learn React. When would be a good time for our first session?".to_string(),
                timestamp: at(2024, 1, 28, 15, 30),
                is_read: false,
            }),
            unread_count: 2,
            common_skills: vec!["React".into(), "JavaScript".into(), "Web Development".into()],
        },
        MatchSummary {
            id: "2".to_string(),
            user: MatchPartner {
                id: "user2".to_string(),
                name: "Carlos Rodriguez".to_string(),
                profile_image: CARLOS_IMAGE.to_string(),
                location: "Austin, TX".to_string(),
                is_online: false,
            },
            matched_at: at(2024, 1, 27, 14, 20),
            last_message: Some(LastMessage {
                content: "¡Hola! Ready for your Spanish lesson?".to_string(),
                timestamp: at(2024, 1, 27, 16, 45),
                is_read: true,
            }),
            unread_count: 0,
            common_skills: vec!["Spanish".into(), "Language Learning".into()],
        },
        MatchSummary {
            id: "3".to_string(),
            user: MatchPartner {
                id: "user3".to_string(),
                name: "Emily Chen".to_string(),
                profile_image: EMILY_IMAGE.to_string(),
                location: "Seattle, WA".to_string(),
                is_online: true,
            },
            matched_at: at(2024, 1, 26, 9, 15),
            last_message: Some(LastMessage {
                content: "Thanks for the great design feedback! Looking forward to our next session.".to_string(),
                timestamp: at(2024, 1, 26, 18, 20),
                is_read: true,
            }),
            unread_count: 1,
            common_skills: vec!["UI/UX Design".into(), "Figma".into(), "Design Systems".into()],
        },
    ]
}

fn message(id: &str, content: &str, sender_id: &str, timestamp: DateTime<Utc>, is_read: bool) -> Message {
    Message {
        id: id.to_string(),
        content: content.to_string(),
        sender_id: sender_id.to_string(),
        timestamp,
        is_read,
        kind: MessageType::Text,
    }
}

pub fn chat() -> ChatResponse {
    ChatResponse {
        messages: vec![
            message("1", "Hi! I saw we matched for React development. I'm excited to help you learn!", "other-user", at(2024, 1, 28, 10, 0), true),
            message("2", "That's awesome! I've been wanting to learn React for a while now. When would be a good time for our first session?", CURRENT_USER_ID, at(2024, 1, 28, 10, 5), true),
            message("3", "How about this weekend? I'm free Saturday morning or Sunday afternoon.", "other-user", at(2024, 1, 28, 10, 10), true),
            message("4", "Saturday morning works perfect for me! Should we do a video call?", CURRENT_USER_ID, at(2024, 1, 28, 10, 15), true),
            message("5", "Yes! I'll send you a Zoom link. Looking forward to it! 🚀", "other-user", at(2024, 1, 28, 15, 30), false),
        ],
        user: ChatUser {
            id: "user1".to_string(),
            name: "Sarah Johnson".to_string(),
            profile_image: SARAH_IMAGE.to_string(),
            is_online: true,
            last_seen: at(2024, 1, 28, 15, 30),
        },
    }
}

fn partner(id: &str, name: &str, image: &str) -> SessionPartner {
    SessionPartner {
        id: id.to_string(),
        name: name.to_string(),
        profile_image: image.to_string(),
    }
}

pub fn sessions() -> Vec<Session> {
    vec![
        Session {
            id: "1".to_string(),
            partner: partner("user1", "Sarah Johnson", SARAH_IMAGE),
            skill: "React Development".to_string(),
            kind: SessionType::Learning,
            scheduled_at: at(2024, 2, 1, 14, 0),
            duration: 60,
            status: SessionStatus::Scheduled,
            platform: "Zoom".to_string(),
            meeting_link: Some("https://zoom.us/j/123456789".to_string()),
            notes: Some("Focus on React hooks and state management".to_string()),
            rating: None,
            feedback: None,
        },
        Session {
            id: "2".to_string(),
            partner: partner("user2", "Carlos Rodriguez", CARLOS_IMAGE),
            skill: "Spanish Conversation".to_string(),
            kind: SessionType::Learning,
            scheduled_at: at(2024, 2, 3, 16, 0),
            duration: 45,
            status: SessionStatus::Scheduled,
            platform: "Google Meet".to_string(),
            meeting_link: Some("https://meet.google.com/abc-defg-hij".to_string()),
            notes: None,
            rating: None,
            feedback: None,
        },
        Session {
            id: "3".to_string(),
            partner: partner("user3", "Mike Thompson", MIKE_IMAGE),
            skill: "JavaScript Fundamentals".to_string(),
            kind: SessionType::Teaching,
            scheduled_at: at(2024, 1, 25, 10, 0),
            duration: 60,
            status: SessionStatus::Completed,
            platform: "Zoom".to_string(),
            meeting_link: None,
            notes: None,
            rating: Some(5),
            feedback: Some("Great session! John explained everything clearly and was very patient.".to_string()),
        },
        Session {
            id: "4".to_string(),
            partner: partner("user4", "Lisa Wang", EMILY_IMAGE),
            skill: "Python Basics".to_string(),
            kind: SessionType::Teaching,
            scheduled_at: at(2024, 1, 20, 15, 30),
            duration: 90,
            status: SessionStatus::Completed,
            platform: "Google Meet".to_string(),
            meeting_link: None,
            notes: None,
            rating: Some(4),
            feedback: Some("Very helpful session. Looking forward to the next one!".to_string()),
        },
    ]
}

fn achievements(unlocked: [DateTime<Utc>; 3], sessions_completed: u32) -> Vec<Achievement> {
    vec![
        Achievement {
            id: "1".to_string(),
            name: "First Match".to_string(),
            description: "Made your first skill match".to_string(),
            icon: "heart".to_string(),
            unlocked_at: unlocked[0],
        },
        Achievement {
            id: "2".to_string(),
            name: "Great Teacher".to_string(),
            description: "Received 5-star rating from 10 students".to_string(),
            icon: "star".to_string(),
            unlocked_at: unlocked[1],
        },
        Achievement {
            id: "3".to_string(),
            name: "Knowledge Seeker".to_string(),
            description: format!("Completed {} learning sessions", sessions_completed),
            icon: "book".to_string(),
            unlocked_at: unlocked[2],
        },
    ]
}

pub fn user_profile() -> UserProfile {
    UserProfile {
        id: CURRENT_USER_ID.to_string(),
        name: "John Doe".to_string(),
        bio: "Passionate developer and lifelong learner. I love sharing knowledge and helping others grow in their tech journey.".to_string(),
        location: "New York, NY".to_string(),
        profile_image: JOHN_IMAGE.to_string(),
        rating: 4.8,
        total_sessions: 47,
        total_matches: 24,
        joined_at: at(2023, 6, 15, 10, 0),
        teaching_skills: vec![
            TeachingSkill { name: "JavaScript".into(), level: "Expert".into(), endorsements: 15 },
            TeachingSkill { name: "React".into(), level: "Advanced".into(), endorsements: 12 },
            TeachingSkill { name: "Node.js".into(), level: "Advanced".into(), endorsements: 8 },
            TeachingSkill { name: "Python".into(), level: "Intermediate".into(), endorsements: 5 },
        ],
        learning_skills: vec![
            LearningSkill { name: "Machine Learning".into(), progress: 65 },
            LearningSkill { name: "DevOps".into(), progress: 40 },
            LearningSkill { name: "Mobile Development".into(), progress: 25 },
        ],
        achievements: achievements(
            [at(2023, 6, 20, 10, 0), at(2023, 8, 15, 14, 30), at(2023, 12, 1, 9, 15)],
            25,
        ),
        reviews: vec![
            Review {
                id: "1".to_string(),
                reviewer: Reviewer { name: "Sarah Johnson".into(), profile_image: SARAH_IMAGE.into() },
                rating: 5,
                comment: "John is an excellent teacher! He explained React concepts clearly and was very patient with my questions.".to_string(),
                created_at: at(2024, 1, 20, 15, 30),
            },
            Review {
                id: "2".to_string(),
                reviewer: Reviewer { name: "Mike Chen".into(), profile_image: CARLOS_IMAGE.into() },
                rating: 5,
                comment: "Great session on JavaScript fundamentals. John made complex topics easy to understand.".to_string(),
                created_at: at(2024, 1, 15, 10, 45),
            },
        ],
    }
}

pub fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        total_matches: 24,
        active_chats: 8,
        upcoming_sessions: 3,
        skills_learned: 12,
        skills_taught: 18,
        rating: 4.8,
        achievements: achievements(
            [at(2024, 1, 15, 10, 0), at(2024, 1, 20, 14, 30), at(2024, 1, 25, 9, 15)],
            5,
        ),
        recent_activity: vec![
            Activity {
                id: "1".to_string(),
                kind: ActivityKind::Match,
                description: "New match with Sarah for React Development".to_string(),
                timestamp: at(2024, 1, 28, 16, 45),
            },
            Activity {
                id: "2".to_string(),
                kind: ActivityKind::Session,
                description: "Completed Spanish lesson with Carlos".to_string(),
                timestamp: at(2024, 1, 28, 14, 0),
            },
        ],
    }
}
