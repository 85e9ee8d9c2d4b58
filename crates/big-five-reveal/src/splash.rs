//! Splash gate
//!
//! Keeps the main content hidden until a one-shot timer fires. The gate opens exactly
//! once and can never close again.

use crate::timer::OneShot;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Observable splash state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashState {
    /// Whether the splash screen is still covering the page
    pub active: bool,
}

impl Default for SplashState {
    fn default() -> Self {
        Self { active: true }
    }
}

/// Splash gate controller
///
/// Owns the [`SplashState`] and the timer that ends it. Dropping the gate cancels a
/// pending timer, so the completion callback never runs against a torn down owner.
#[derive(Debug)]
pub struct SplashGate {
    state: Arc<watch::Sender<SplashState>>,
    timer: Option<OneShot>,
}

impl SplashGate {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SplashState::default());
        Self {
            state: Arc::new(tx),
            timer: None,
        }
    }

    /// Current splash state
    pub fn state(&self) -> SplashState {
        *self.state.borrow()
    }

    pub fn is_active(&self) -> bool {
        self.state().active
    }

    /// Subscribe to splash state changes
    pub fn subscribe(&self) -> watch::Receiver<SplashState> {
        self.state.subscribe()
    }

    /// Whether the gate timer is scheduled and has not fired yet
    pub fn is_scheduled(&self) -> bool {
        self.timer.as_ref().is_some_and(OneShot::is_pending)
    }

    /// Start the splash timer
    ///
    /// After `duration` the gate opens and `on_finish` runs once. Returns `false` without
    /// scheduling anything when the gate is already open or a timer is already pending.
    /// Must be called from within a tokio runtime context.
    pub fn activate<F>(&mut self, duration: Duration, on_finish: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        if !self.is_active() {
            log::debug!("SplashGate: already open, ignoring activation");
            return false;
        }
        if self.is_scheduled() {
            log::debug!("SplashGate: timer already pending, ignoring activation");
            return false;
        }

        log::info!("SplashGate: closing for {}ms", duration.as_millis());
        let state = Arc::clone(&self.state);
        self.timer = Some(OneShot::schedule(duration, move || {
            if open(&state) {
                log::info!("SplashGate: opened");
                on_finish();
            }
        }));
        true
    }

    /// Cancel a pending timer without opening the gate
    ///
    /// Returns `true` if a pending timer was cancelled.
    pub fn cancel(&mut self) -> bool {
        self.timer.take().is_some_and(|timer| timer.cancel())
    }
}

impl Default for SplashGate {
    fn default() -> Self {
        Self::new()
    }
}

/// The only mutation of the splash state: active -> inactive, once
fn open(state: &watch::Sender<SplashState>) -> bool {
    state.send_if_modified(|splash| {
        if splash.active {
            splash.active = false;
            true
        } else {
            false
        }
    })
}
