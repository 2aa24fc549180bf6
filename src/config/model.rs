//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::ripple::RipplePolicy;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Reject values that would make a timer fire immediately or never.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let durations = [
            ("ui.splash_ms", self.ui.splash_ms),
            ("ui.ripple_ms", self.ui.ripple_ms),
            ("ui.tick_ms", self.ui.tick_ms),
            ("ui.toast_ms", self.ui.toast_ms),
        ];
        for (field, value) in durations {
            if value == 0 {
                return Err(ConfigError::ZeroDuration(field));
            }
        }
        if self.ui.timestamp_format.trim().is_empty() {
            return Err(ConfigError::EmptyTimestampFormat);
        }
        // A bad specifier only surfaces when formatting, which panics in `to_string`.
        if StrftimeItems::new(&self.ui.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidTimestampFormat(
                self.ui.timestamp_format.clone(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
    #[error("ui.timestamp_format must not be empty")]
    EmptyTimestampFormat,
    #[error("ui.timestamp_format {0:?} is not a valid strftime format")]
    InvalidTimestampFormat(String),
}

/// Timing and presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long the splash screen stays up before the boot timer fires.
    #[serde(default = "default_splash_ms")]
    pub splash_ms: u64,
    /// Lifetime of a batch of ripples on one surface.
    #[serde(default = "default_ripple_ms")]
    pub ripple_ms: u64,
    #[serde(default)]
    pub ripple_policy: RipplePolicy,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            splash_ms: default_splash_ms(),
            ripple_ms: default_ripple_ms(),
            ripple_policy: RipplePolicy::default(),
            tick_ms: default_tick_ms(),
            toast_ms: default_toast_ms(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

/// The signed-in (mock) student shown in the drawer and on the profile screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_profile_name")]
    pub name: String,
    #[serde(default = "default_profile_email")]
    pub email: String,
    #[serde(default = "default_profile_department")]
    pub department: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_profile_name(),
            email: default_profile_email(),
            department: default_profile_department(),
        }
    }
}

/// Diagnostic logging settings. The terminal belongs to the UI, so logs only
/// ever go to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    /// An `EnvFilter` directive such as `"info"` or `"studycircle=debug"`.
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_file")]
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

fn default_splash_ms() -> u64 {
    2500
}
fn default_ripple_ms() -> u64 {
    600
}
fn default_tick_ms() -> u64 {
    50
}
fn default_toast_ms() -> u64 {
    3000
}
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%I:%M %p";

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}
fn default_profile_name() -> String {
    "Alex Student".to_string()
}
fn default_profile_email() -> String {
    "alex@university.edu".to_string()
}
fn default_profile_department() -> String {
    "Computer Science Dept.".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_file() -> String {
    "~/.local/share/studycircle/studycircle.log".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.ui.splash_ms, 2500);
        assert_eq!(cfg.ui.ripple_ms, 600);
        assert_eq!(cfg.ui.ripple_policy, RipplePolicy::Batch);
        assert_eq!(cfg.profile.name, "Alex Student");
        assert!(!cfg.logging.enabled);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [ui]
            ripple_policy = "restart"
            splash_ms = 1000

            [logging]
            enabled = true
            level = "studycircle=debug"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.ui.ripple_policy, RipplePolicy::Restart);
        assert_eq!(cfg.ui.splash_ms, 1000);
        assert_eq!(cfg.ui.tick_ms, 50);
        assert_eq!(cfg.logging.level, "studycircle=debug");
        assert_eq!(cfg.profile.email, "alex@university.edu");
    }

    #[test]
    fn unknown_policy_is_a_parse_error() {
        let parsed: Result<AppConfig, _> = toml::from_str("[ui]\nripple_policy = \"forever\"\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn zero_durations_are_rejected() {
        let mut cfg = AppConfig::default();
        cfg.ui.ripple_ms = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroDuration("ui.ripple_ms")));

        let mut cfg = AppConfig::default();
        cfg.ui.timestamp_format = "  ".into();
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyTimestampFormat));
    }

    #[test]
    fn unknown_strftime_specifiers_are_rejected() {
        let mut cfg = AppConfig::default();
        cfg.ui.timestamp_format = "%Q".into();
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidTimestampFormat("%Q".into()))
        );

        cfg.ui.timestamp_format = "%H:%M".into();
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn round_trips_through_toml() {
        let cfg = AppConfig::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.ui.timestamp_format, cfg.ui.timestamp_format);
        assert_eq!(back.ui.ripple_policy, cfg.ui.ripple_policy);
    }
}
