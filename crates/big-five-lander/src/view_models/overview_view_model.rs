//! Organization Overview View Model

use crate::state::AppState;
use ratatui::style::Style;

#[derive(Debug, Clone)]
pub struct OverviewCardViewModel {
    pub glyph: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

/// View model for the organization overview section
#[derive(Debug, Clone)]
pub struct OverviewViewModel {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cards: Vec<OverviewCardViewModel>,
    pub title_style: Style,
    pub subtitle_style: Style,
    pub label_style: Style,
    pub value_style: Style,
    pub description_style: Style,
    pub border_style: Style,
}

impl OverviewViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let cards = state
            .overview
            .iter()
            .map(|stat| OverviewCardViewModel {
                glyph: stat.icon.glyph(),
                label: stat.label,
                value: stat.value,
                description: stat.description,
            })
            .collect();

        Self {
            title: "Organization Overview",
            subtitle: "Strategic Business Performance Analytics",
            cards,
            title_style: theme.section_title(),
            subtitle_style: theme.muted(),
            label_style: theme.text_secondary(),
            value_style: theme.metric_value(),
            description_style: theme.muted(),
            border_style: theme.card_border(),
        }
    }
}
