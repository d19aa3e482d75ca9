use chrono::{DateTime, Duration, Utc};
use crate::models::{MatchSummary, Session, SessionStatus, SwipeFilters, SwipeProfile};

/// Check if a swipe candidate passes the deck filters
#[inline]
pub fn matches_swipe_filters(profile: &SwipeProfile, filters: &SwipeFilters) -> bool {
    // Distance cap
    if let Some(max) = filters.max_distance_km {
        if profile.distance > max {
            return false;
        }
    }

    // Must teach at least one of the requested skills
    if !filters.skills.is_empty() && !filters.skills.iter().any(|s| profile.teaches(s)) {
        return false;
    }

    // Availability keywords, e.g. "evening" or "weekend"
    if !filters.availability.is_empty() {
        let availability = profile.availability.to_lowercase();
        if !filters
            .availability
            .iter()
            .any(|slot| availability.contains(&slot.to_lowercase()))
        {
            return false;
        }
    }

    true
}

/// Tabs on the matches page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchTab {
    #[default]
    All,
    /// Matched within the recent window
    Recent,
    Unread,
    /// No favorites store exists yet, so this behaves like `All`
    Favorites,
}

/// Case-insensitive search over partner name and common skills
#[inline]
pub fn matches_search(summary: &MatchSummary, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    summary.user.name.to_lowercase().contains(&query)
        || summary
            .common_skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(&query))
}

#[inline]
pub fn matches_tab(summary: &MatchSummary, tab: MatchTab, now: DateTime<Utc>, recent_days: i64) -> bool {
    match tab {
        MatchTab::All | MatchTab::Favorites => true,
        MatchTab::Recent => summary.matched_at > now - Duration::days(recent_days),
        MatchTab::Unread => summary.unread_count > 0,
    }
}

/// Scheduled and still ahead of `now`
#[inline]
pub fn is_upcoming(session: &Session, now: DateTime<Utc>) -> bool {
    session.status == SessionStatus::Scheduled && session.scheduled_at > now
}

/// Completed, or scheduled but already behind `now`
///
/// Cancelled sessions are neither upcoming nor past.
#[inline]
pub fn is_past(session: &Session, now: DateTime<Utc>) -> bool {
    match session.status {
        SessionStatus::Completed => true,
        SessionStatus::Scheduled => session.scheduled_at < now,
        SessionStatus::Cancelled => false,
    }
}
