use crate::actions::{Action, ScrollAction};
use crate::state::ScrollState;

/// Reducer for the dashboard scroll position
pub fn reduce(mut state: ScrollState, action: &Action, content_height: u16) -> ScrollState {
    let Action::Scroll(scroll) = action else {
        return state;
    };

    let page = i32::from(state.viewport_height.saturating_sub(1).max(1));
    match scroll {
        ScrollAction::LineUp => state.scroll_by(-1, content_height),
        ScrollAction::LineDown => state.scroll_by(1, content_height),
        ScrollAction::PageUp => state.scroll_by(-page, content_height),
        ScrollAction::PageDown => state.scroll_by(page, content_height),
        ScrollAction::Top => state.offset = 0,
        ScrollAction::Bottom => state.offset = state.max_offset(content_height),
    }

    state
}
