use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::core::filters::{is_past, is_upcoming};
use crate::core::notice::Notifier;
use crate::models::{RescheduleRequest, Session};
use crate::services::{BackendError, SkillSwapApi};

/// Sessions page state
pub struct SessionBook {
    api: Arc<dyn SkillSwapApi>,
    notifier: Notifier,
    sessions: Vec<Session>,
}

impl SessionBook {
    pub fn new(api: Arc<dyn SkillSwapApi>, notifier: Notifier) -> Self {
        Self {
            api,
            notifier,
            sessions: Vec::new(),
        }
    }

    pub async fn refresh(&mut self) -> Result<usize, BackendError> {
        tracing::info!("Fetching sessions");
        match self.api.sessions().await {
            Ok(response) => {
                self.sessions = response.sessions;
                Ok(self.sessions.len())
            }
            Err(e) => {
                tracing::error!("Error fetching sessions: {}", e);
                self.notifier.error("Failed to load sessions");
                Err(e)
            }
        }
    }

    /// Move a session, then refetch the list
    pub async fn reschedule(
        &mut self,
        session_id: &str,
        new_date_time: Option<DateTime<Utc>>,
    ) -> Result<(), BackendError> {
        tracing::info!("Rescheduling session {}", session_id);
        let request = RescheduleRequest {
            session_id: session_id.to_string(),
            new_date_time,
        };

        match self.api.reschedule_session(request).await {
            Ok(_) => {
                self.notifier.info(
                    "Session Rescheduled",
                    "Your session has been rescheduled successfully.",
                );
                self.refetch_after_change().await;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error rescheduling session: {}", e);
                self.notifier.error("Failed to reschedule session");
                Err(e)
            }
        }
    }

    /// Cancel a session, then refetch the list
    pub async fn cancel(&mut self, session_id: &str) -> Result<(), BackendError> {
        tracing::info!("Cancelling session {}", session_id);
        match self.api.cancel_session(session_id).await {
            Ok(_) => {
                self.notifier
                    .info("Session Cancelled", "Your session has been cancelled.");
                self.refetch_after_change().await;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error cancelling session: {}", e);
                self.notifier.error("Failed to cancel session");
                Err(e)
            }
        }
    }

    // The change already went through; a failed refetch raises its own notice
    async fn refetch_after_change(&mut self) {
        if let Err(e) = self.refresh().await {
            tracing::warn!("Sessions not refreshed after change: {}", e);
        }
    }

    pub fn all(&self) -> &[Session] {
        &self.sessions
    }

    pub fn upcoming(&self, now: DateTime<Utc>) -> Vec<&Session> {
        self.sessions.iter().filter(|s| is_upcoming(s, now)).collect()
    }

    pub fn past(&self, now: DateTime<Utc>) -> Vec<&Session> {
        self.sessions.iter().filter(|s| is_past(s, now)).collect()
    }
}
