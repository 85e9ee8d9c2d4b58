//! Splash screen actions

/// Actions for the splash gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashAction {
    /// Close the gate and start its timer
    Start,
    /// The gate timer fired; main content may mount
    Finished,
}
