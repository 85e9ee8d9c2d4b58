//! Header, footer and hint bar view models

use crate::state::AppState;
use chrono::Datelike;
use ratatui::style::Style;

/// Shown under the organization name
const HEADER_SUBTITLE: &str = "Big Five Strategic Dashboard";

/// View model for the animated header
#[derive(Debug, Clone)]
pub struct HeaderViewModel {
    /// The part of the organization name typed out so far
    pub name: String,
    /// Whether the typing cursor is still shown
    pub typing: bool,
    pub subtitle: &'static str,
    pub name_style: Style,
    pub subtitle_style: Style,
    pub border_style: Style,
}

impl HeaderViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let full = &state.config.organization_name;
        let name: String = full.chars().take(state.header.shown_chars).collect();
        let typing = state.header.shown_chars < full.chars().count();

        Self {
            name,
            typing,
            subtitle: HEADER_SUBTITLE,
            name_style: state.theme.section_title(),
            subtitle_style: state.theme.muted(),
            border_style: state.theme.section_title(),
        }
    }
}

/// View model for the page footer
#[derive(Debug, Clone)]
pub struct FooterViewModel {
    pub copyright: String,
    pub tagline: String,
    pub copyright_style: Style,
    pub tagline_style: Style,
}

impl FooterViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let year = chrono::Local::now().year();
        Self {
            copyright: format!("© {} {}", year, state.config.organization_name),
            tagline: state.config.tagline.clone(),
            copyright_style: state.theme.muted(),
            tagline_style: state.theme.section_title(),
        }
    }
}

/// View model for the key hint bar
#[derive(Debug, Clone)]
pub struct HintBarViewModel {
    pub hints: Vec<(&'static str, &'static str)>,
    /// e.g. "3/5 revealed"
    pub progress: String,
    pub key_style: Style,
    pub description_style: Style,
    pub background: Style,
}

impl HintBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            hints: vec![
                ("j/k", "scroll"),
                ("g/G", "top/bottom"),
                ("r", "replay"),
                ("q", "quit"),
            ],
            progress: if state.timeline.is_complete() {
                format!("all {} revealed", state.timeline.total)
            } else {
                format!(
                    "{}/{} revealed",
                    state.timeline.revealed, state.timeline.total
                )
            },
            key_style: state.theme.key_hint(),
            description_style: state.theme.text_secondary(),
            background: state.theme.panel_background(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_types_name() {
        let mut state = AppState::default();
        state.config.organization_name = "Acme".to_string();

        state.header.shown_chars = 2;
        let vm = HeaderViewModel::from_state(&state);
        assert_eq!(vm.name, "Ac");
        assert!(vm.typing);

        state.header.shown_chars = 4;
        let vm = HeaderViewModel::from_state(&state);
        assert_eq!(vm.name, "Acme");
        assert!(!vm.typing);
    }

    #[test]
    fn test_footer_names_organization() {
        let state = AppState::default();
        let vm = FooterViewModel::from_state(&state);
        assert!(vm.copyright.ends_with("Casa Grande PropCare"));
        assert_eq!(vm.tagline, "Facilities Managed. Peace Delivered.");
    }

    #[test]
    fn test_hint_bar_progress() {
        let mut state = AppState::default();
        state.timeline.revealed = 3;
        assert_eq!(HintBarViewModel::from_state(&state).progress, "3/5 revealed");

        state.timeline.revealed = 5;
        assert_eq!(HintBarViewModel::from_state(&state).progress, "all 5 revealed");
    }
}
