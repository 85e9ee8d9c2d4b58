//! SplashMiddleware - owns the splash gate
//!
//! - `Splash::Start` closes the gate and schedules its timer on the tokio runtime
//! - When the timer fires the gate dispatches `Splash::Finished`
//! - `Splash::Finished` swaps the splash view for the dashboard
//!
//! Dropping the middleware (app shutdown) cancels a pending gate timer.

use crate::actions::{Action, GlobalAction, SplashAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::views::DashboardView;
use big_five_reveal::SplashGate;
use std::time::Duration;
use tokio::runtime::Handle;

pub struct SplashMiddleware {
    runtime: Handle,
    duration: Duration,
    gate: SplashGate,
}

impl SplashMiddleware {
    pub fn new(runtime: Handle, duration: Duration) -> Self {
        Self {
            runtime,
            duration,
            gate: SplashGate::new(),
        }
    }
}

impl Middleware for SplashMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Splash(SplashAction::Start) => {
                let _guard = self.runtime.enter();
                let dispatcher = dispatcher.clone();
                let scheduled = self.gate.activate(self.duration, move || {
                    dispatcher.dispatch(Action::Splash(SplashAction::Finished));
                });
                if !scheduled {
                    log::warn!("SplashMiddleware: splash already started or finished");
                }
                true
            }

            Action::Splash(SplashAction::Finished) => {
                log::info!("SplashMiddleware: splash finished, showing dashboard");
                dispatcher.dispatch(Action::Global(GlobalAction::ReplaceView(Box::new(
                    DashboardView::new(),
                ))));
                true
            }

            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::ViewId;
    use std::sync::mpsc;

    fn setup(duration_ms: u64) -> (SplashMiddleware, Dispatcher, mpsc::Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        let middleware =
            SplashMiddleware::new(Handle::current(), Duration::from_millis(duration_ms));
        (middleware, Dispatcher::new(tx), rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_finishes_after_duration() {
        let (mut middleware, dispatcher, rx) = setup(2500);
        let state = AppState::default();

        middleware.handle(&Action::Splash(SplashAction::Start), &state, &dispatcher);

        tokio::time::sleep(Duration::from_millis(2400)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(200)).await;
        let finished: Vec<Action> = rx.try_iter().collect();
        assert!(matches!(
            finished.as_slice(),
            [Action::Splash(SplashAction::Finished)]
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_twice_finishes_once() {
        let (mut middleware, dispatcher, rx) = setup(100);
        let state = AppState::default();

        middleware.handle(&Action::Splash(SplashAction::Start), &state, &dispatcher);
        middleware.handle(&Action::Splash(SplashAction::Start), &state, &dispatcher);
        tokio::time::sleep(Duration::from_secs(1)).await;
        middleware.handle(&Action::Splash(SplashAction::Start), &state, &dispatcher);
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(rx.try_iter().count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_during_splash_cancels_timer() {
        let (mut middleware, dispatcher, rx) = setup(2500);
        let state = AppState::default();

        middleware.handle(&Action::Splash(SplashAction::Start), &state, &dispatcher);
        tokio::time::sleep(Duration::from_millis(1000)).await;
        drop(middleware);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_finished_switches_to_dashboard() {
        let (mut middleware, dispatcher, rx) = setup(2500);
        let state = AppState::default();

        let continued =
            middleware.handle(&Action::Splash(SplashAction::Finished), &state, &dispatcher);
        assert!(continued);

        match rx.try_recv() {
            Ok(Action::Global(GlobalAction::ReplaceView(view))) => {
                assert_eq!(view.view_id(), ViewId::Dashboard);
            }
            other => panic!("expected ReplaceView, got {:?}", other),
        }
    }
}
