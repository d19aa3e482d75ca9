use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::core::filters::{matches_search, matches_tab, MatchTab};
use crate::core::notice::Notifier;
use crate::models::MatchSummary;
use crate::services::{BackendError, SkillSwapApi};

/// Matches page state
pub struct MatchList {
    api: Arc<dyn SkillSwapApi>,
    notifier: Notifier,
    recent_days: i64,
    matches: Vec<MatchSummary>,
}

impl MatchList {
    pub fn new(api: Arc<dyn SkillSwapApi>, notifier: Notifier, recent_days: i64) -> Self {
        Self {
            api,
            notifier,
            recent_days,
            matches: Vec::new(),
        }
    }

    pub async fn refresh(&mut self) -> Result<usize, BackendError> {
        tracing::info!("Fetching matches");
        match self.api.matches().await {
            Ok(response) => {
                self.matches = response.matches;
                Ok(self.matches.len())
            }
            Err(e) => {
                tracing::error!("Error fetching matches: {}", e);
                self.notifier.error("Failed to load matches");
                Err(e)
            }
        }
    }

    pub fn all(&self) -> &[MatchSummary] {
        &self.matches
    }

    /// Matches passing both the search box and the selected tab
    pub fn filtered(&self, query: &str, tab: MatchTab, now: DateTime<Utc>) -> Vec<&MatchSummary> {
        self.matches
            .iter()
            .filter(|m| matches_search(m, query))
            .filter(|m| matches_tab(m, tab, now, self.recent_days))
            .collect()
    }

    pub fn total_unread(&self) -> u32 {
        self.matches.iter().map(|m| m.unread_count).sum()
    }

    pub fn get(&self, match_id: &str) -> Option<&MatchSummary> {
        self.matches.iter().find(|m| m.id == match_id)
    }
}
