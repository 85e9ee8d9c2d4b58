//! Dispatcher for middleware action dispatch
//!
//! Middleware and timer tasks use the Dispatcher to queue actions. Queued actions are
//! drained by the main loop and re-enter the full middleware chain, enabling flows like
//! `Splash::Finished` -> `Reveal` sequencer start.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher feeding the main loop's action channel
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action for the next loop iteration
    ///
    /// Safe to call from tokio tasks. A closed channel means the app is shutting down,
    /// so the action is dropped with an error log.
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
