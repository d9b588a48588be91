use std::time::Duration;

use serde::Deserialize;
use vanta_nav::SectionId;

use super::errors::ConfigError;
use crate::app::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
const DEFAULT_TOAST_DURATION_MS: u64 = 4000;

/// Read-only application configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    start_section: Option<String>,
    window_width: f32,
    window_height: f32,
    toast_duration_ms: u64,
}

impl AppConfig {
    /// Startup fragment used when none is given on the command line.
    pub(crate) fn start_section(&self) -> Option<&str> {
        self.start_section.as_deref()
    }

    pub(crate) fn window_width(&self) -> f32 {
        self.window_width
    }

    pub(crate) fn window_height(&self) -> f32 {
        self.window_height
    }

    pub(crate) fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Check field values. Window sizes are clamped in place; a bad start
    /// section is reported, since silently routing to home would hide the
    /// typo from the user.
    pub(crate) fn validate(&mut self) -> Result<(), ConfigError> {
        self.window_width = clamp_dimension(
            self.window_width,
            MIN_WINDOW_WIDTH,
            DEFAULT_WINDOW_WIDTH,
        );
        self.window_height = clamp_dimension(
            self.window_height,
            MIN_WINDOW_HEIGHT,
            DEFAULT_WINDOW_HEIGHT,
        );

        if let Some(raw) = self.start_section.as_deref() {
            if let Err(err) = raw.parse::<SectionId>() {
                return Err(ConfigError::Validation {
                    message: format!("start_section: {err}"),
                });
            }
        }

        Ok(())
    }

    /// Drop the start section after it failed validation.
    pub(crate) fn clear_start_section(&mut self) {
        self.start_section = None;
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_section: None,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

fn clamp_dimension(value: f32, min: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.max(min)
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::AppConfig;
    use crate::app::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
    use crate::config::errors::ConfigError;

    #[test]
    fn given_tiny_window_when_validated_then_clamps_to_minimum() {
        let mut config = AppConfig {
            window_width: 10.0,
            window_height: -5.0,
            ..AppConfig::default()
        };

        config.validate().expect("sizes alone never fail validation");

        assert_eq!(config.window_width(), MIN_WINDOW_WIDTH);
        assert_eq!(config.window_height(), MIN_WINDOW_HEIGHT);
    }

    #[test]
    fn given_unknown_start_section_when_validated_then_reports_validation_error()
    {
        let mut config = AppConfig {
            start_section: Some(String::from("dashboard")),
            ..AppConfig::default()
        };

        let err = config.validate().unwrap_err();

        assert!(matches!(err, ConfigError::Validation { .. }));
        assert!(err.to_string().contains("dashboard"));
    }

    #[test]
    fn given_hash_prefixed_start_section_when_validated_then_accepts_it() {
        let mut config = AppConfig {
            start_section: Some(String::from("#analytics")),
            ..AppConfig::default()
        };

        assert!(config.validate().is_ok());
        assert_eq!(config.start_section(), Some("#analytics"));
    }
}
