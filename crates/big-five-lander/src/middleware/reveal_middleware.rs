//! RevealMiddleware - owns the timeline reveal sequencer
//!
//! - `Splash::Finished` starts the first reveal cycle
//! - `Reveal::Replay` starts a new cycle from zero (ignored while the splash is up)
//! - Every sequencer change is forwarded as `Reveal::Progress` for the reducer
//!
//! Dropping the middleware closes the forwarder's outlet before aborting it, so no
//! progress is dispatched once the drop returns.

use crate::actions::{Action, RevealAction, SplashAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use big_five_reveal::{RevealSequencer, RevealState};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

pub struct RevealMiddleware {
    runtime: Handle,
    sequencer: RevealSequencer,
    forwarder: Option<JoinHandle<()>>,
    /// Where the forwarder sends progress; emptied on drop
    outlet: Arc<Mutex<Option<Dispatcher>>>,
}

impl RevealMiddleware {
    pub fn new(runtime: Handle, item_count: usize, interval: Duration) -> Self {
        Self {
            runtime,
            sequencer: RevealSequencer::new(item_count, interval),
            forwarder: None,
            outlet: Arc::new(Mutex::new(None)),
        }
    }

    /// Forward sequencer changes to the store, once
    ///
    /// Subscribes before the first cycle starts so the reset to zero is forwarded too.
    fn ensure_forwarder(&mut self, dispatcher: &Dispatcher) {
        if self.forwarder.is_some() {
            return;
        }

        *self.outlet.lock().unwrap_or_else(PoisonError::into_inner) = Some(dispatcher.clone());

        let mut rx = self.sequencer.subscribe();
        let outlet = Arc::clone(&self.outlet);
        self.forwarder = Some(self.runtime.spawn(async move {
            while rx.changed().await.is_ok() {
                let state = *rx.borrow_and_update();
                if !forward(&outlet, state) {
                    break;
                }
            }
            log::debug!("RevealMiddleware: forwarder stopped");
        }));
    }

    fn start_cycle(&mut self, dispatcher: &Dispatcher) {
        self.ensure_forwarder(dispatcher);
        let _guard = self.runtime.enter();
        self.sequencer.start();
    }
}

impl Middleware for RevealMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Splash(SplashAction::Finished) => {
                log::info!("RevealMiddleware: splash finished, starting reveal");
                self.start_cycle(dispatcher);
                true
            }

            Action::Reveal(RevealAction::Replay) => {
                if state.splash.active {
                    log::debug!("RevealMiddleware: replay ignored while splash is active");
                    return false;
                }
                log::info!("RevealMiddleware: replaying reveal");
                self.start_cycle(dispatcher);
                true
            }

            _ => true,
        }
    }
}

/// Dispatch one progress update, unless the outlet has been closed
///
/// Dispatches under the outlet lock, so closing the outlet waits for an in-flight
/// update to finish.
fn forward(outlet: &Mutex<Option<Dispatcher>>, state: RevealState) -> bool {
    let outlet = outlet.lock().unwrap_or_else(PoisonError::into_inner);
    let Some(dispatcher) = outlet.as_ref() else {
        return false;
    };
    dispatcher.dispatch(Action::Reveal(RevealAction::Progress {
        count: state.count(),
        max: state.max(),
    }));
    true
}

impl Drop for RevealMiddleware {
    fn drop(&mut self) {
        self.outlet
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(forwarder) = self.forwarder.take() {
            forwarder.abort();
        }
    }
}
