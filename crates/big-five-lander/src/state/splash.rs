//! Splash Screen State

/// Splash screen state
#[derive(Debug, Clone)]
pub struct SplashScreenState {
    /// Whether the splash gate is still closed
    pub active: bool,
    /// Current frame of the pulse animation
    pub animation_frame: usize,
}

impl Default for SplashScreenState {
    fn default() -> Self {
        Self {
            active: true,
            animation_frame: 0,
        }
    }
}
