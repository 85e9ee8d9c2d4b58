//! Configuration and file management for big-five-lander
//!
//! This crate provides:
//! - Config and cache directory paths
//! - Configuration file lookup (TOML)
//! - Application configuration (AppConfig) and its validation

pub mod app_config;
pub mod config_file;
pub mod error;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use error::ConfigError;
pub use paths::{cache_dir, config_dir};
