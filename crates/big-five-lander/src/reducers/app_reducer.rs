use crate::actions::{Action, GlobalAction};
use crate::reducers::{
    header_reducer, particles_reducer, scroll_reducer, splash_reducer, timeline_reducer,
};
use crate::state::AppState;
use crate::views::layout;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    // Handle global actions first
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
            return state;
        }
        Action::Global(GlobalAction::ReplaceView(new_view)) => {
            log::debug!("Replacing view stack with: {:?}", new_view.view_id());
            state.view_stack.clear();
            state.view_stack.push(new_view.clone());
        }
        Action::Global(GlobalAction::Resize { height, .. }) => {
            state.scroll.viewport_height = layout::viewport_height(*height);
        }
        _ => {}
    }

    let content_height = layout::content_height(state.targets.len());
    let name_len = state.config.organization_name.chars().count();

    // Run sub-reducers for component-specific actions
    state.splash = splash_reducer::reduce(state.splash, action);
    state.header = header_reducer::reduce(state.header, action, state.splash.active, name_len);
    state.timeline = timeline_reducer::reduce(state.timeline, action);
    state.scroll = scroll_reducer::reduce(state.scroll, action, content_height);
    state.scroll.clamp(content_height);
    state.particles = particles_reducer::reduce(state.particles, action);

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{RevealAction, ScrollAction, SplashAction};
    use crate::views::{DashboardView, ViewId};

    #[test]
    fn test_quit_stops_running() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }

    #[test]
    fn test_starts_on_splash_view() {
        let state = AppState::default();
        assert_eq!(state.active_view().map(|v| v.view_id()), Some(ViewId::Splash));
    }

    #[test]
    fn test_replace_view() {
        let state = reduce(
            AppState::default(),
            &Action::Global(GlobalAction::ReplaceView(Box::new(DashboardView::new()))),
        );
        assert_eq!(state.view_stack.len(), 1);
        assert_eq!(state.active_view().map(|v| v.view_id()), Some(ViewId::Dashboard));
    }

    #[test]
    fn test_splash_finish_then_progress() {
        let mut state = AppState::default();
        state = reduce(state, &Action::Splash(SplashAction::Finished));
        state = reduce(
            state,
            &Action::Reveal(RevealAction::Progress { count: 2, max: 5 }),
        );

        assert!(!state.splash.active);
        assert_eq!(state.timeline.revealed, 2);
    }

    #[test]
    fn test_resize_clamps_scroll() {
        let mut state = AppState::default();
        state = reduce(
            state,
            &Action::Global(GlobalAction::Resize {
                width: 120,
                height: 20,
            }),
        );
        state = reduce(state, &Action::Scroll(ScrollAction::Bottom));
        let bottom = state.scroll.offset;
        assert!(bottom > 0);

        state = reduce(
            state,
            &Action::Global(GlobalAction::Resize {
                width: 120,
                height: 200,
            }),
        );
        assert_eq!(state.scroll.offset, 0);
    }
}
