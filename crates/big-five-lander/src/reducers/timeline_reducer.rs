use crate::actions::{Action, RevealAction};
use crate::state::TimelineState;

/// Reducer for timeline reveal progress
pub fn reduce(mut state: TimelineState, action: &Action) -> TimelineState {
    if let Action::Reveal(RevealAction::Progress { count, max }) = action {
        state.total = *max;
        state.revealed = (*count).min(*max);
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_mirrored() {
        let state = reduce(
            TimelineState::default(),
            &Action::Reveal(RevealAction::Progress { count: 3, max: 5 }),
        );
        assert_eq!(
            state,
            TimelineState {
                revealed: 3,
                total: 5
            }
        );
        assert!(!state.is_complete());
    }

    #[test]
    fn test_count_never_exceeds_total() {
        let state = reduce(
            TimelineState::default(),
            &Action::Reveal(RevealAction::Progress { count: 9, max: 5 }),
        );
        assert_eq!(state.revealed, 5);
        assert!(state.is_complete());
    }

    #[test]
    fn test_replay_request_does_not_touch_state() {
        let before = TimelineState {
            revealed: 5,
            total: 5,
        };
        assert_eq!(reduce(before, &Action::Reveal(RevealAction::Replay)), before);
    }
}
