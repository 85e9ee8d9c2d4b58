//! Configuration validation errors

use thiserror::Error;

/// Reasons a loaded configuration cannot be used
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A timing value that must be positive was zero
    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),

    /// The configured target list has an entry without a title
    #[error("target #{0} has an empty title")]
    UntitledTarget(usize),
}
