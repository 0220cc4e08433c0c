use std::env;
use std::fmt;
use std::time::Duration;

const DEFAULT_TIMER_REFRESH_SECS: u64 = 30;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub assessment: AssessmentConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let refresh_secs = env::var("QUIZ_TIMER_REFRESH_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMER_REFRESH_SECS.to_string())
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or(ConfigError::InvalidRefreshInterval)?;

        let deduplicate_suggestions = match env::var("QUIZ_DEDUPE_SUGGESTIONS") {
            Ok(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidFlag {
                name: "QUIZ_DEDUPE_SUGGESTIONS",
                value: raw,
            })?,
            Err(_) => false,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            assessment: AssessmentConfig {
                timer_refresh: Duration::from_secs(refresh_secs),
                deduplicate_suggestions,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Settings for a quiz attempt.
#[derive(Debug, Clone)]
pub struct AssessmentConfig {
    /// How often the advisory time-remaining display refreshes.
    pub timer_refresh: Duration,
    /// Collapse suggestions that share a topic before presenting them.
    pub deduplicate_suggestions: bool,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            timer_refresh: Duration::from_secs(DEFAULT_TIMER_REFRESH_SECS),
            deduplicate_suggestions: false,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidRefreshInterval,
    InvalidFlag { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRefreshInterval => {
                write!(f, "QUIZ_TIMER_REFRESH_SECS must be a positive number of seconds")
            }
            ConfigError::InvalidFlag { name, value } => {
                write!(f, "{name} must be true or false (found '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("QUIZ_TIMER_REFRESH_SECS");
        env::remove_var("QUIZ_DEDUPE_SUGGESTIONS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.assessment.timer_refresh, Duration::from_secs(30));
        assert!(!config.assessment.deduplicate_suggestions);
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn reads_overrides_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "ci");
        env::set_var("QUIZ_TIMER_REFRESH_SECS", "5");
        env::set_var("QUIZ_DEDUPE_SUGGESTIONS", "Yes");
        let config = AppConfig::load().expect("config loads");
        reset_env();
        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(config.assessment.timer_refresh, Duration::from_secs(5));
        assert!(config.assessment.deduplicate_suggestions);
    }

    #[test]
    fn rejects_zero_refresh_interval() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("QUIZ_TIMER_REFRESH_SECS", "0");
        let result = AppConfig::load();
        reset_env();
        assert!(matches!(result, Err(ConfigError::InvalidRefreshInterval)));
    }

    #[test]
    fn rejects_unrecognized_flag_values() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("QUIZ_DEDUPE_SUGGESTIONS", "sometimes");
        let result = AppConfig::load();
        reset_env();
        match result {
            Err(ConfigError::InvalidFlag { name, value }) => {
                assert_eq!(name, "QUIZ_DEDUPE_SUGGESTIONS");
                assert_eq!(value, "sometimes");
            }
            other => panic!("expected invalid flag error, got {other:?}"),
        }
    }
}
