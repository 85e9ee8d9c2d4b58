//! One-shot timer with cancel-on-drop semantics
//!
//! The callback is stored behind a mutex shared with the timer task. Whoever takes it
//! out first wins: the task when the deadline passes, or [`OneShot::cancel`] (also run
//! on drop). The task invokes the callback while holding the lock, so once `cancel`
//! returns the callback has either completed or will never run.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;

type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Guard for a scheduled one-shot callback
///
/// The callback must not drop or cancel its own guard; doing so deadlocks.
pub struct OneShot {
    pending: Arc<Mutex<Option<Callback>>>,
    handle: JoinHandle<()>,
}

impl OneShot {
    /// Schedule `callback` to run once after `delay`
    ///
    /// Must be called from within a tokio runtime context.
    pub fn schedule<F>(delay: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let pending: Arc<Mutex<Option<Callback>>> = Arc::new(Mutex::new(Some(Box::new(callback))));
        let task_pending = Arc::clone(&pending);

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut slot = task_pending.lock().unwrap_or_else(PoisonError::into_inner);
            match slot.take() {
                Some(callback) => callback(),
                None => log::trace!("OneShot: fired after cancellation, ignoring"),
            }
        });

        Self { pending, handle }
    }

    /// Whether the callback is still waiting to run
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Cancel the callback
    ///
    /// Returns `true` if the callback was still pending and will now never run.
    /// Cancelling an already fired or cancelled timer is a no-op.
    pub fn cancel(&self) -> bool {
        let cancelled = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some();
        self.handle.abort();
        cancelled
    }
}

impl Drop for OneShot {
    fn drop(&mut self) {
        if self.cancel() {
            log::debug!("OneShot: dropped before firing, callback cancelled");
        }
    }
}

impl std::fmt::Debug for OneShot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OneShot")
            .field("pending", &self.is_pending())
            .finish()
    }
}
