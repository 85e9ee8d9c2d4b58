//! Splash Screen View Model

use crate::state::AppState;
use ratatui::style::Style;

/// Frames of the pulse ring around the logo
const PULSE_FRAMES: [&str; 6] = ["·", "∘", "○", "◯", "◌", " "];

/// View model for splash screen - all presentation data pre-computed
#[derive(Debug, Clone)]
pub struct SplashViewModel {
    pub title: String,
    pub pulse: &'static str,
    /// Pre-formatted progress bar (e.g., "▰▰▰▰▱▱▱")
    pub progress_bar: String,
    pub background: Style,
    pub title_style: Style,
    pub pulse_style: Style,
    pub progress_style: Style,
}

impl SplashViewModel {
    pub fn from_state(state: &AppState, bar_width: usize) -> Self {
        let theme = &state.theme;
        let splash = &state.splash;

        let elapsed_ms = splash.animation_frame as u64 * state.config.tick_rate_ms;
        let total_ms = state.config.splash_duration_ms.max(1);
        let filled = ((bar_width as u64 * elapsed_ms) / total_ms).min(bar_width as u64) as usize;
        let progress_bar = format!(
            "{}{}",
            "▰".repeat(filled),
            "▱".repeat(bar_width.saturating_sub(filled))
        );

        Self {
            title: state.config.organization_name.clone(),
            pulse: PULSE_FRAMES[splash.animation_frame % PULSE_FRAMES.len()],
            progress_bar,
            background: theme.splash_background(),
            title_style: theme.section_title(),
            pulse_style: theme.muted(),
            progress_style: theme.key_hint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_follows_ticks() {
        let mut state = AppState::default();
        state.config.tick_rate_ms = 100;
        state.config.splash_duration_ms = 1000;

        state.splash.animation_frame = 0;
        assert_eq!(SplashViewModel::from_state(&state, 10).progress_bar, "▱".repeat(10));

        state.splash.animation_frame = 5;
        let half = SplashViewModel::from_state(&state, 10).progress_bar;
        assert_eq!(half, format!("{}{}", "▰".repeat(5), "▱".repeat(5)));

        state.splash.animation_frame = 50;
        assert_eq!(SplashViewModel::from_state(&state, 10).progress_bar, "▰".repeat(10));
    }
}
