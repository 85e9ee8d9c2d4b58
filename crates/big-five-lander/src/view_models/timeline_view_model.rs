//! Strategic Targets Timeline View Model
//!
//! Every target gets a row so the layout is stable, but only the revealed ones carry a
//! card. Row sides come from [`big_five_reveal::stage`].

use crate::state::AppState;
use big_five_reveal::{stage, Placement};
use ratatui::style::Style;

/// Marker for a revealed target
const DOT_FILLED: &str = "●";
/// Marker for a target still waiting to be revealed
const DOT_HOLLOW: &str = "○";

/// Card content for a revealed target
#[derive(Debug, Clone)]
pub struct TargetCardViewModel {
    pub glyph: &'static str,
    pub title: String,
    pub value: String,
    /// Pre-formatted "Target: ..." line
    pub target_line: String,
    pub badge_style: Style,
    pub title_style: Style,
    pub value_style: Style,
    pub target_style: Style,
    pub border_style: Style,
}

/// One timeline row
#[derive(Debug, Clone)]
pub struct TimelineRowViewModel {
    pub index: usize,
    pub placement: Placement,
    /// None while the target is hidden
    pub card: Option<TargetCardViewModel>,
    pub dot: &'static str,
    pub dot_style: Style,
}

impl TimelineRowViewModel {
    pub fn is_revealed(&self) -> bool {
        self.card.is_some()
    }
}

/// View model for the timeline section
#[derive(Debug, Clone)]
pub struct TimelineViewModel {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub rows: Vec<TimelineRowViewModel>,
    pub title_style: Style,
    pub subtitle_style: Style,
    pub rail_style: Style,
}

impl TimelineViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let staged = stage(&state.targets, state.timeline.revealed);

        let rows = state
            .targets
            .iter()
            .enumerate()
            .map(|(index, target)| match staged.get(index) {
                Some(shown) => TimelineRowViewModel {
                    index,
                    placement: shown.placement,
                    card: Some(TargetCardViewModel {
                        glyph: shown.item.icon.glyph(),
                        title: shown.item.title.clone(),
                        value: shown.item.value.clone(),
                        target_line: format!("Target: {}", shown.item.target),
                        badge_style: theme.badge(shown.item.color),
                        title_style: theme.text(),
                        value_style: theme.metric_value(),
                        target_style: theme.muted(),
                        border_style: Style::default().fg(theme.token(shown.item.color)),
                    }),
                    dot: DOT_FILLED,
                    dot_style: Style::default().fg(theme.token(target.color)),
                },
                None => TimelineRowViewModel {
                    index,
                    placement: Placement::for_index(index),
                    card: None,
                    dot: DOT_HOLLOW,
                    dot_style: Style::default().fg(theme.timeline_rail),
                },
            })
            .collect();

        Self {
            title: "Strategic Targets 2025",
            subtitle: "Big Five Performance Timeline",
            rows,
            title_style: theme.section_title(),
            subtitle_style: theme.muted(),
            rail_style: Style::default().fg(theme.timeline_rail),
        }
    }

    /// Number of rows that carry a card
    pub fn revealed(&self) -> usize {
        self.rows.iter().filter(|row| row.is_revealed()).count()
    }
}
