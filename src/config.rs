use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub mock: MockSettings,
    #[serde(default)]
    pub swipe: SwipeSettings,
    #[serde(default)]
    pub matches: MatchesSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Mock backend behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockSettings {
    #[serde(default = "default_match_probability")]
    pub match_probability: f64,
    /// Fixed RNG seed for reproducible match outcomes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default)]
    pub latency: LatencySettings,
}

impl Default for MockSettings {
    fn default() -> Self {
        Self {
            match_probability: default_match_probability(),
            seed: None,
            latency: LatencySettings::default(),
        }
    }
}

fn default_match_probability() -> f64 { 0.3 }

/// Artificial per-endpoint delays in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencySettings {
    #[serde(default = "default_profiles_ms")]
    pub profiles_ms: u64,
    #[serde(default = "default_swipe_ms")]
    pub swipe_ms: u64,
    #[serde(default = "default_matches_ms")]
    pub matches_ms: u64,
    #[serde(default = "default_messages_ms")]
    pub messages_ms: u64,
    #[serde(default = "default_send_ms")]
    pub send_ms: u64,
    #[serde(default = "default_sessions_ms")]
    pub sessions_ms: u64,
    #[serde(default = "default_session_update_ms")]
    pub session_update_ms: u64,
    #[serde(default = "default_profile_ms")]
    pub profile_ms: u64,
    #[serde(default = "default_profile_update_ms")]
    pub profile_update_ms: u64,
    #[serde(default = "default_dashboard_ms")]
    pub dashboard_ms: u64,
}

impl LatencySettings {
    /// All delays set to zero
    pub fn instant() -> Self {
        Self {
            profiles_ms: 0,
            swipe_ms: 0,
            matches_ms: 0,
            messages_ms: 0,
            send_ms: 0,
            sessions_ms: 0,
            session_update_ms: 0,
            profile_ms: 0,
            profile_update_ms: 0,
            dashboard_ms: 0,
        }
    }
}

impl Default for LatencySettings {
    fn default() -> Self {
        Self {
            profiles_ms: default_profiles_ms(),
            swipe_ms: default_swipe_ms(),
            matches_ms: default_matches_ms(),
            messages_ms: default_messages_ms(),
            send_ms: default_send_ms(),
            sessions_ms: default_sessions_ms(),
            session_update_ms: default_session_update_ms(),
            profile_ms: default_profile_ms(),
            profile_update_ms: default_profile_update_ms(),
            dashboard_ms: default_dashboard_ms(),
        }
    }
}

fn default_profiles_ms() -> u64 { 1000 }
fn default_swipe_ms() -> u64 { 500 }
fn default_matches_ms() -> u64 { 600 }
fn default_messages_ms() -> u64 { 800 }
fn default_send_ms() -> u64 { 300 }
fn default_sessions_ms() -> u64 { 600 }
fn default_session_update_ms() -> u64 { 500 }
fn default_profile_ms() -> u64 { 700 }
fn default_profile_update_ms() -> u64 { 1000 }
fn default_dashboard_ms() -> u64 { 800 }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeSettings {
    #[serde(default = "default_undo_window_secs")]
    pub undo_window_secs: u64,
}

impl SwipeSettings {
    pub fn undo_window(&self) -> Duration {
        Duration::from_secs(self.undo_window_secs)
    }
}

impl Default for SwipeSettings {
    fn default() -> Self {
        Self { undo_window_secs: default_undo_window_secs() }
    }
}

fn default_undo_window_secs() -> u64 { 5 }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchesSettings {
    /// How far back the "recent" tab looks
    #[serde(default = "default_recent_days")]
    pub recent_days: i64,
}

impl Default for MatchesSettings {
    fn default() -> Self {
        Self { recent_days: default_recent_days() }
    }
}

fn default_recent_days() -> i64 { 3 }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

fn env_source() -> Environment {
    // e.g., SKILLSWAP__SWIPE__UNDO_WINDOW_SECS -> swipe.undo_window_secs
    Environment::with_prefix("SKILLSWAP")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SKILLSWAP__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(env_source())
            .build()?
            .try_deserialize::<Settings>()?
            .validated()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize::<Settings>()?
            .validated()
    }

    /// Parse settings from an in-memory TOML document
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?
            .validated()
    }

    /// Render the effective settings as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Message(e.to_string()))
    }

    fn validated(self) -> Result<Self, ConfigError> {
        let p = self.mock.match_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::Message(format!(
                "mock.match_probability must be within [0, 1], got {}",
                p
            )));
        }
        if self.matches.recent_days < 0 {
            return Err(ConfigError::Message(format!(
                "matches.recent_days must not be negative, got {}",
                self.matches.recent_days
            )));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_latencies() {
        let latency = LatencySettings::default();
        assert_eq!(latency.profiles_ms, 1000);
        assert_eq!(latency.swipe_ms, 500);
        assert_eq!(latency.send_ms, 300);
        assert_eq!(latency.profile_update_ms, 1000);
    }

    #[test]
    fn test_default_swipe_and_logging() {
        let settings = Settings::default();
        assert_eq!(settings.swipe.undo_window(), Duration::from_secs(5));
        assert_eq!(settings.mock.match_probability, 0.3);
        assert_eq!(settings.matches.recent_days, 3);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = Settings::from_toml_str(
            r#"
            [mock]
            match_probability = 1.0
            seed = 7

            [mock.latency]
            swipe_ms = 10
            "#,
        )
        .unwrap();

        assert_eq!(settings.mock.match_probability, 1.0);
        assert_eq!(settings.mock.seed, Some(7));
        assert_eq!(settings.mock.latency.swipe_ms, 10);
        assert_eq!(settings.mock.latency.profiles_ms, 1000);
        assert_eq!(settings.swipe.undo_window_secs, 5);
    }

    #[test]
    fn test_rejects_out_of_range_probability() {
        let result = Settings::from_toml_str("[mock]\nmatch_probability = 1.5\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_toml_output_reloads() {
        let rendered = Settings::default().to_toml().unwrap();
        let reloaded = Settings::from_toml_str(&rendered).unwrap();
        assert_eq!(reloaded.mock.latency, LatencySettings::default());
    }
}
