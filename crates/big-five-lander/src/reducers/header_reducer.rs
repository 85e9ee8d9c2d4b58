use crate::actions::{Action, GlobalAction};
use crate::state::HeaderState;

/// Reducer for the animated header
///
/// Types out one more character of the organization name per tick, once the splash
/// screen is gone.
pub fn reduce(
    mut state: HeaderState,
    action: &Action,
    splash_active: bool,
    name_len: usize,
) -> HeaderState {
    if let Action::Global(GlobalAction::Tick) = action {
        if !splash_active && state.shown_chars < name_len {
            state.shown_chars += 1;
        }
    }

    state
}
