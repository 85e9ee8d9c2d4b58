use crate::actions::{Action, GlobalAction};
use crate::state::ParticleField;

/// Reducer for the particle background
pub fn reduce(mut state: ParticleField, action: &Action) -> ParticleField {
    if let Action::Global(GlobalAction::Tick) = action {
        state.step();
    }
    state
}
