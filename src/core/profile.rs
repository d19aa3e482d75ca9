use std::sync::Arc;

use crate::core::notice::Notifier;
use crate::models::{DashboardStats, UpdateProfileRequest, UserProfile};
use crate::services::{BackendError, SkillSwapApi};

/// Steps of the profile setup form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    PersonalInfo = 1,
    Skills = 2,
    Availability = 3,
}

impl SetupStep {
    pub const COUNT: u8 = 3;

    fn from_index(index: u8) -> Self {
        match index {
            0 | 1 => SetupStep::PersonalInfo,
            2 => SetupStep::Skills,
            _ => SetupStep::Availability,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Three-step profile setup form
pub struct SetupWizard {
    api: Arc<dyn SkillSwapApi>,
    notifier: Notifier,
    step: SetupStep,
    pub draft: UpdateProfileRequest,
}

impl SetupWizard {
    pub fn new(api: Arc<dyn SkillSwapApi>, notifier: Notifier) -> Self {
        Self {
            api,
            notifier,
            step: SetupStep::PersonalInfo,
            draft: UpdateProfileRequest::default(),
        }
    }

    pub fn step(&self) -> SetupStep {
        self.step
    }

    /// Advance one step, staying on the last
    pub fn next(&mut self) -> SetupStep {
        self.step = SetupStep::from_index(self.step.index().saturating_add(1).min(SetupStep::COUNT));
        self.step
    }

    /// Go back one step, staying on the first
    pub fn prev(&mut self) -> SetupStep {
        self.step = SetupStep::from_index(self.step.index().saturating_sub(1).max(1));
        self.step
    }

    pub fn is_last(&self) -> bool {
        self.step == SetupStep::Availability
    }

    /// Completion percentage shown on the progress bar
    pub fn progress(&self) -> f64 {
        f64::from(self.step.index()) / f64::from(SetupStep::COUNT) * 100.0
    }

    pub async fn submit(&self) -> Result<(), BackendError> {
        tracing::info!("Submitting profile setup");
        match self.api.update_profile(self.draft.clone()).await {
            Ok(ack) => {
                self.notifier.info("Profile Updated", &ack.message);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error updating profile: {}", e);
                self.notifier.error("Failed to update profile");
                Err(e)
            }
        }
    }
}

/// Fetch the signed-in user's profile, surfacing failures as a notice
pub async fn load_user_profile(
    api: &dyn SkillSwapApi,
    notifier: &Notifier,
) -> Result<UserProfile, BackendError> {
    tracing::info!("Fetching user profile");
    api.user_profile().await.map_err(|e| {
        tracing::error!("Error fetching profile: {}", e);
        notifier.error("Failed to load profile");
        e
    })
}

/// Fetch home page statistics, surfacing failures as a notice
pub async fn load_dashboard(
    api: &dyn SkillSwapApi,
    notifier: &Notifier,
) -> Result<DashboardStats, BackendError> {
    tracing::info!("Fetching dashboard stats");
    api.dashboard_stats().await.map_err(|e| {
        tracing::error!("Error fetching dashboard data: {}", e);
        notifier.error("Failed to load dashboard data");
        e
    })
}
