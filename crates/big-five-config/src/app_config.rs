//! Application configuration
//!
//! Configuration loaded from `.big-five-lander.toml` (CWD) or `config.toml` in the
//! config directory.

use crate::error::ConfigError;
use anyhow::{Context, Result};
use big_five_reveal::{big_five_targets, TargetItem};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// How long the splash screen covers the dashboard
    #[serde(default = "default_splash_duration_ms")]
    pub splash_duration_ms: u64,

    /// Delay between two timeline targets being revealed
    #[serde(default = "default_reveal_interval_ms")]
    pub reveal_interval_ms: u64,

    /// Animation tick rate (spinner, particles, header)
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Number of particles drifting behind the dashboard
    #[serde(default = "default_particle_count")]
    pub particle_count: usize,

    /// Organization name shown in the header and footer
    #[serde(default = "default_organization_name")]
    pub organization_name: String,

    /// Footer tagline
    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// Strategic targets, in reveal order
    #[serde(default = "big_five_targets")]
    pub targets: Vec<TargetItem>,
}

fn default_splash_duration_ms() -> u64 {
    2500
}

fn default_reveal_interval_ms() -> u64 {
    800
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_particle_count() -> usize {
    60
}

fn default_organization_name() -> String {
    "Casa Grande PropCare".to_string()
}

fn default_tagline() -> String {
    "Facilities Managed. Peace Delivered.".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            splash_duration_ms: default_splash_duration_ms(),
            reveal_interval_ms: default_reveal_interval_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            particle_count: default_particle_count(),
            organization_name: default_organization_name(),
            tagline: default_tagline(),
            targets: big_five_targets(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then the config directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::from_toml(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {:#}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Parse a config from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid config TOML")
    }

    /// Check that all timings are usable and every target is titled
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.splash_duration_ms == 0 {
            return Err(ConfigError::ZeroDuration("splash_duration_ms"));
        }
        if self.reveal_interval_ms == 0 {
            return Err(ConfigError::ZeroDuration("reveal_interval_ms"));
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::ZeroDuration("tick_rate_ms"));
        }
        if let Some(index) = self.targets.iter().position(|t| t.title.trim().is_empty()) {
            return Err(ConfigError::UntitledTarget(index + 1));
        }
        Ok(())
    }

    pub fn splash_duration(&self) -> Duration {
        Duration::from_millis(self.splash_duration_ms)
    }

    pub fn reveal_interval(&self) -> Duration {
        Duration::from_millis(self.reveal_interval_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use big_five_reveal::{ColorToken, Icon};

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.splash_duration(), Duration::from_millis(2500));
        assert_eq!(config.reveal_interval(), Duration::from_millis(800));
        assert_eq!(config.targets.len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            splash_duration_ms = 1000
            reveal_interval_ms = 700
        "#;
        let config = AppConfig::from_toml(toml).unwrap();
        assert_eq!(config.splash_duration_ms, 1000);
        assert_eq!(config.reveal_interval_ms, 700);
        // Other fields should use defaults
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.organization_name, "Casa Grande PropCare");
        assert_eq!(config.targets, big_five_targets());
    }

    #[test]
    fn test_config_custom_targets() {
        let toml = r#"
            [[targets]]
            title = "Uptime"
            value = "99.9%"
            target = "99.95%"
            color = "green"
            icon = "trending-up"

            [[targets]]
            title = "Tickets"
            value = "1.2K"
            target = "1K"
        "#;
        let config = AppConfig::from_toml(toml).unwrap();
        assert_eq!(config.targets.len(), 2);
        assert_eq!(config.targets[0].color, ColorToken::Green);
        assert_eq!(config.targets[0].icon, Icon::TrendingUp);
        assert_eq!(config.targets[1].color, ColorToken::default());
    }

    #[test]
    fn test_empty_targets_are_allowed() {
        let config = AppConfig::from_toml("targets = []").unwrap();
        assert!(config.targets.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(AppConfig::from_toml("splash_duration_ms = \"soon\"").is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timings() {
        let config = AppConfig {
            reveal_interval_ms: 0,
            ..AppConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroDuration("reveal_interval_ms"))
        );
        assert_eq!(
            config.validate().unwrap_err().to_string(),
            "reveal_interval_ms must be greater than zero"
        );
    }

    #[test]
    fn test_validate_rejects_untitled_target() {
        let mut config = AppConfig::default();
        config.targets[2].title = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigError::UntitledTarget(3)));
    }
}
