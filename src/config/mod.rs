// src/config/mod.rs
// All values load from the environment (.env supported); defaults match the
// original deployment.

use once_cell::sync::Lazy;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AniMindConfig {
    // ── Backend Configuration
    pub api_base_url: String,
    pub request_timeout_secs: u64,

    // ── Readiness Polling
    pub poll_interval_secs: u64,
    pub startup_timeout_secs: u64,

    // ── Avatar Mood
    pub mood_reset_timeout_ms: u64,

    // ── Client Defaults
    pub default_character: String,
    pub voice_enabled: bool,
    pub sound_enabled: bool,
    pub volume: f32,

    // ── Preferences Storage
    pub prefs_path: Option<String>,

    // ── Logging Configuration
    pub log_level: String,
    pub log_format: String,
}

// Handles values with trailing comments and extra whitespace.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        // Missing variable is not an error, just use the default.
        Err(_) => default,
    }
}

impl AniMindConfig {
    pub fn from_env() -> Self {
        // Load from .env file first if it exists.
        let _ = dotenvy::dotenv();

        Self {
            api_base_url: env_var_or("ANIMIND_API_URL", "http://127.0.0.1:8000".to_string()),
            request_timeout_secs: env_var_or("ANIMIND_REQUEST_TIMEOUT", 60),
            poll_interval_secs: env_var_or("ANIMIND_POLL_INTERVAL", 3),
            startup_timeout_secs: env_var_or("ANIMIND_STARTUP_TIMEOUT", 150),
            mood_reset_timeout_ms: env_var_or("ANIMIND_MOOD_RESET_TIMEOUT_MS", 5000),
            default_character: env_var_or("ANIMIND_DEFAULT_CHARACTER", "goku".to_string()),
            voice_enabled: env_var_or("ANIMIND_VOICE_ENABLED", true),
            sound_enabled: env_var_or("ANIMIND_SOUND_ENABLED", true),
            volume: env_var_or("ANIMIND_VOLUME", 1.0),
            prefs_path: std::env::var("ANIMIND_PREFS_PATH").ok(),
            log_level: env_var_or("ANIMIND_LOG_LEVEL", "info".to_string()),
            log_format: env_var_or("ANIMIND_LOG_FORMAT", "pretty".to_string()),
        }
    }

    // --- Convenience Methods ---

    /// Full URL for a backend endpoint, e.g. `chat_url()` → `{base}/chat`.
    pub fn chat_url(&self) -> String {
        format!("{}/chat", self.api_base_url.trim_end_matches('/'))
    }

    /// Health-check URL (the backend's root route).
    pub fn health_url(&self) -> String {
        format!("{}/", self.api_base_url.trim_end_matches('/'))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn startup_timeout(&self) -> Duration {
        Duration::from_secs(self.startup_timeout_secs)
    }

    pub fn mood_reset_timeout(&self) -> Duration {
        Duration::from_millis(self.mood_reset_timeout_ms)
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<AniMindConfig> = Lazy::new(AniMindConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AniMindConfig::from_env();

        assert_eq!(config.poll_interval_secs, 3);
        assert_eq!(config.startup_timeout_secs, 150);
        assert_eq!(config.mood_reset_timeout_ms, 5000);
    }

    #[test]
    fn test_url_construction() {
        let mut config = AniMindConfig::from_env();
        config.api_base_url = "http://localhost:8000/".to_string();

        assert_eq!(config.chat_url(), "http://localhost:8000/chat");
        assert_eq!(config.health_url(), "http://localhost:8000/");
    }

    #[test]
    fn test_duration_conversions() {
        let config = AniMindConfig::from_env();
        assert_eq!(config.mood_reset_timeout(), Duration::from_millis(5000));
        assert_eq!(config.poll_interval(), Duration::from_secs(3));
    }
}
