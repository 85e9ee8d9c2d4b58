use crate::actions::{Action, GlobalAction, SplashAction};
use crate::state::SplashScreenState;

/// Reducer for splash screen state
pub fn reduce(mut state: SplashScreenState, action: &Action) -> SplashScreenState {
    match action {
        Action::Splash(SplashAction::Finished) => {
            state.active = false;
        }
        Action::Global(GlobalAction::Tick) if state.active => {
            state.animation_frame = state.animation_frame.wrapping_add(1);
        }
        _ => {
            // Unhandled actions - no state change
        }
    }

    state
}
