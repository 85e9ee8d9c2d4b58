//! Reveal sequencer
//!
//! Counts from zero up to the number of items at a fixed cadence. Each call to
//! [`RevealSequencer::start`] begins a new cycle: the in-flight ticker is aborted, the
//! count resets to zero and a fresh ticker is spawned. Ticks carry the cycle they were
//! spawned for, so a tick from a superseded cycle never touches the state.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Shortest cadence the ticker accepts (tokio intervals reject a zero period)
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Observable reveal progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    count: usize,
    max: usize,
    cycle: u64,
}

/// Result of applying one tick to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tick {
    /// Count went up by one; `complete` once it reached `max`
    Advanced { complete: bool },
    /// Already at `max`
    Complete,
    /// The tick belongs to a superseded cycle
    Stale,
}

impl RevealState {
    fn new(max: usize) -> Self {
        Self {
            count: 0,
            max,
            cycle: 0,
        }
    }

    /// Number of items currently revealed
    pub fn count(&self) -> usize {
        self.count
    }

    /// Total number of items
    pub fn max(&self) -> usize {
        self.max
    }

    /// Whether every item has been revealed
    pub fn is_complete(&self) -> bool {
        self.count >= self.max
    }

    /// Change the item count, restarting the count so it never exceeds `max`
    fn resize(&mut self, max: usize) {
        self.max = max;
        self.count = 0;
    }

    fn tick(&mut self, cycle: u64) -> Tick {
        if self.cycle != cycle {
            return Tick::Stale;
        }
        if self.is_complete() {
            return Tick::Complete;
        }
        self.count += 1;
        Tick::Advanced {
            complete: self.is_complete(),
        }
    }
}

/// Reveal sequencer controller
///
/// Owns the [`RevealState`] and at most one ticker task. Dropping the sequencer aborts
/// the ticker.
#[derive(Debug)]
pub struct RevealSequencer {
    state: Arc<watch::Sender<RevealState>>,
    interval: Duration,
    ticker: Option<JoinHandle<()>>,
}

impl RevealSequencer {
    /// Create an idle sequencer for `item_count` items ticking every `interval`
    pub fn new(item_count: usize, interval: Duration) -> Self {
        let (tx, _rx) = watch::channel(RevealState::new(item_count));
        Self {
            state: Arc::new(tx),
            interval: interval.max(MIN_INTERVAL),
            ticker: None,
        }
    }

    pub fn state(&self) -> RevealState {
        *self.state.borrow()
    }

    pub fn count(&self) -> usize {
        self.state().count
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Subscribe to reveal progress
    pub fn subscribe(&self) -> watch::Receiver<RevealState> {
        self.state.subscribe()
    }

    /// Whether a ticker is currently running
    pub fn is_running(&self) -> bool {
        self.ticker.as_ref().is_some_and(|ticker| !ticker.is_finished())
    }

    /// Begin a new reveal cycle from zero
    ///
    /// Any running ticker is cancelled first. With zero items the sequencer is complete
    /// immediately and no ticker is spawned. Must be called from within a tokio runtime
    /// context.
    pub fn start(&mut self) {
        self.stop();

        let mut cycle = 0;
        self.state.send_modify(|state| {
            state.count = 0;
            cycle = state.cycle;
        });

        let max = self.state().max;
        if max == 0 {
            log::debug!("RevealSequencer: nothing to reveal");
            return;
        }

        log::debug!(
            "RevealSequencer: cycle {} revealing {} items every {}ms",
            cycle,
            max,
            self.interval.as_millis()
        );
        self.ticker = Some(tokio::spawn(run_ticker(
            Arc::clone(&self.state),
            cycle,
            self.interval,
        )));
    }

    /// Replace the item count and restart the reveal from zero
    pub fn set_item_count(&mut self, item_count: usize) {
        self.stop();
        self.state.send_modify(|state| state.resize(item_count));
        self.start();
    }

    /// Cancel the running ticker, leaving the count where it is
    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
        // Invalidate ticks already in flight for the old cycle
        self.state.send_if_modified(|state| {
            state.cycle = state.cycle.wrapping_add(1);
            false
        });
    }
}

impl Drop for RevealSequencer {
    fn drop(&mut self) {
        // A ticker already past its await still needs the cycle bump to become stale
        self.stop();
    }
}

async fn run_ticker(state: Arc<watch::Sender<RevealState>>, cycle: u64, period: Duration) {
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        let mut outcome = Tick::Stale;
        state.send_if_modified(|state| {
            outcome = state.tick(cycle);
            matches!(outcome, Tick::Advanced { .. })
        });

        match outcome {
            Tick::Advanced { complete: false } => {}
            Tick::Advanced { complete: true } | Tick::Complete => {
                log::debug!("RevealSequencer: cycle {} complete", cycle);
                break;
            }
            Tick::Stale => {
                log::trace!("RevealSequencer: stale tick for cycle {}", cycle);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const INTERVAL: Duration = Duration::from_millis(800);

    async fn sleep_ms(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveals_five_items_every_800ms() {
        let mut sequencer = RevealSequencer::new(5, INTERVAL);
        sequencer.start();
        assert_eq!(sequencer.count(), 0);

        sleep_ms(810).await;
        assert_eq!(sequencer.count(), 1);

        sleep_ms(4010 - 810).await;
        assert_eq!(sequencer.count(), 5);
        assert!(sequencer.state().is_complete());
        assert!(!sequencer.is_running());

        sleep_ms(10_000 - 4010).await;
        assert_eq!(sequencer.count(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_value_observed_once_then_quiet() {
        for item_count in 0..=7 {
            let mut sequencer = RevealSequencer::new(item_count, INTERVAL);
            sequencer.start();

            let mut rx = sequencer.subscribe();
            let mut seen = vec![rx.borrow_and_update().count()];
            while !rx.borrow().is_complete() {
                rx.changed().await.expect("sequencer dropped");
                seen.push(rx.borrow_and_update().count());
            }

            let expected: Vec<usize> = (0..=item_count).collect();
            assert_eq!(seen, expected, "item_count = {}", item_count);

            sleep_ms(10_000).await;
            assert!(!rx.has_changed().expect("sequencer dropped"));
            assert_eq!(sequencer.count(), item_count);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_items_is_complete_without_ticker() {
        let mut sequencer = RevealSequencer::new(0, INTERVAL);
        sequencer.start();

        assert!(sequencer.state().is_complete());
        assert!(!sequencer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_resets_to_zero() {
        let mut sequencer = RevealSequencer::new(5, INTERVAL);
        sequencer.start();
        sleep_ms(5000).await;
        assert_eq!(sequencer.count(), 5);

        sequencer.start();
        assert_eq!(sequencer.count(), 0);
        assert!(sequencer.is_running());

        sleep_ms(810).await;
        assert_eq!(sequencer.count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_mid_cycle_cancels_previous_ticker() {
        let mut sequencer = RevealSequencer::new(5, INTERVAL);
        sequencer.start();
        sleep_ms(1000).await;
        assert_eq!(sequencer.count(), 1);

        sequencer.start();
        // The old ticker would have fired at 1600ms
        sleep_ms(700).await;
        assert_eq!(sequencer.count(), 0);

        sleep_ms(110).await;
        assert_eq!(sequencer.count(), 1);
        sleep_ms(800).await;
        assert_eq!(sequencer.count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_ticking() {
        let mut sequencer = RevealSequencer::new(5, INTERVAL);
        let rx = sequencer.subscribe();
        sequencer.start();
        sleep_ms(1000).await;

        drop(sequencer);
        sleep_ms(10_000).await;
        assert_eq!(rx.borrow().count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_invalidates_in_flight_ticks() {
        let mut sequencer = RevealSequencer::new(5, INTERVAL);
        sequencer.start();
        sleep_ms(1000).await;

        let state = Arc::clone(&sequencer.state);
        let cycle = state.borrow().cycle;
        drop(sequencer);

        // A tick that was already running when the sequencer dropped
        let mut outcome = Tick::Complete;
        let modified = state.send_if_modified(|s| {
            outcome = s.tick(cycle);
            matches!(outcome, Tick::Advanced { .. })
        });

        assert_eq!(outcome, Tick::Stale);
        assert!(!modified);
        assert_eq!(state.borrow().count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_freezes_count() {
        let mut sequencer = RevealSequencer::new(5, INTERVAL);
        sequencer.start();
        sleep_ms(1700).await;
        sequencer.stop();

        sleep_ms(10_000).await;
        assert_eq!(sequencer.count(), 2);
        assert!(!sequencer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_item_count_restarts_with_new_max() {
        let mut sequencer = RevealSequencer::new(5, INTERVAL);
        sequencer.start();
        sleep_ms(2500).await;
        assert_eq!(sequencer.count(), 3);

        sequencer.set_item_count(2);
        assert_eq!(sequencer.count(), 0);
        assert_eq!(sequencer.state().max(), 2);

        sleep_ms(5000).await;
        assert_eq!(sequencer.count(), 2);
        assert!(!sequencer.is_running());
    }

    #[test]
    fn test_resize_keeps_count_within_max() {
        let mut state = RevealState::new(5);
        for _ in 0..3 {
            state.tick(0);
        }
        assert_eq!(state.count(), 3);

        state.resize(2);
        assert_eq!(state.max(), 2);
        assert_eq!(state.count(), 0);
        assert!(state.count() <= state.max());
    }

    #[test]
    fn test_stale_tick_is_ignored() {
        let mut state = RevealState::new(3);
        assert_eq!(state.tick(1), Tick::Stale);
        assert_eq!(state.count(), 0);

        assert_eq!(state.tick(0), Tick::Advanced { complete: false });
        assert_eq!(state.tick(0), Tick::Advanced { complete: false });
        assert_eq!(state.tick(0), Tick::Advanced { complete: true });
        assert_eq!(state.tick(0), Tick::Complete);
        assert_eq!(state.count(), 3);
    }
}
