//! KeyboardMiddleware - translates raw key events into actions
//!
//! Quit keys work everywhere. Everything else is ignored while the splash screen is
//! up, since there is nothing to scroll or replay yet.

use crate::actions::{Action, GlobalAction, RevealAction, ScrollAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Map a key to an action, or None if the key is not bound
    fn translate(key: KeyEvent, splash_active: bool) -> Option<Action> {
        let quit = matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
            || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'));
        if quit {
            return Some(Action::Global(GlobalAction::Quit));
        }

        if splash_active {
            return None;
        }

        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::Scroll(ScrollAction::LineDown),
            KeyCode::Char('k') | KeyCode::Up => Action::Scroll(ScrollAction::LineUp),
            KeyCode::PageDown | KeyCode::Char(' ') => Action::Scroll(ScrollAction::PageDown),
            KeyCode::PageUp => Action::Scroll(ScrollAction::PageUp),
            KeyCode::Char('g') | KeyCode::Home => Action::Scroll(ScrollAction::Top),
            KeyCode::Char('G') | KeyCode::End => Action::Scroll(ScrollAction::Bottom),
            KeyCode::Char('r') => Action::Reveal(RevealAction::Replay),
            _ => return None,
        };
        Some(action)
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Global(GlobalAction::KeyPressed(key)) = action else {
            return true;
        };

        match Self::translate(*key, state.splash.active) {
            Some(translated) => {
                log::debug!("KeyboardMiddleware: {:?} -> {:?}", key.code, translated);
                dispatcher.dispatch(translated);
            }
            None => log::trace!("KeyboardMiddleware: unbound key {:?}", key.code),
        }

        // Raw keys never reach the reducer
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn press(code: KeyCode) -> Action {
        Action::Global(GlobalAction::KeyPressed(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn run(action: Action, splash_active: bool) -> (bool, Vec<Action>) {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut state = AppState::default();
        state.splash.active = splash_active;

        let continued = KeyboardMiddleware::new().handle(&action, &state, &dispatcher);
        (continued, rx.try_iter().collect())
    }

    #[test]
    fn test_quit_works_during_splash() {
        let (continued, dispatched) = run(press(KeyCode::Char('q')), true);
        assert!(!continued);
        assert!(matches!(
            dispatched.as_slice(),
            [Action::Global(GlobalAction::Quit)]
        ));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let ctrl_c = Action::Global(GlobalAction::KeyPressed(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        let (_, dispatched) = run(ctrl_c, false);
        assert!(matches!(
            dispatched.as_slice(),
            [Action::Global(GlobalAction::Quit)]
        ));
    }

    #[test]
    fn test_replay_ignored_during_splash() {
        let (continued, dispatched) = run(press(KeyCode::Char('r')), true);
        assert!(!continued);
        assert!(dispatched.is_empty());
    }

    #[test]
    fn test_dashboard_keys() {
        let (_, dispatched) = run(press(KeyCode::Char('r')), false);
        assert!(matches!(
            dispatched.as_slice(),
            [Action::Reveal(RevealAction::Replay)]
        ));

        let (_, dispatched) = run(press(KeyCode::Down), false);
        assert!(matches!(
            dispatched.as_slice(),
            [Action::Scroll(ScrollAction::LineDown)]
        ));
    }

    #[test]
    fn test_other_actions_pass_through() {
        let (continued, dispatched) = run(Action::Global(GlobalAction::Tick), false);
        assert!(continued);
        assert!(dispatched.is_empty());
    }
}
