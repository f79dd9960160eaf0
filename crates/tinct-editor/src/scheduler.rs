// ABOUTME: Save-on-idle scheduler: a cancel-and-reschedule timer for persistence
// ABOUTME: Decouples debounced saving from the synchronous session mutation API

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;

use tinct_logging::debug;

/// Default idle period before a pending save fires.
pub const SAVE_DELAY: Duration = Duration::from_millis(1500);

/// Schedules a save callback after an idle delay.
///
/// Every `schedule` call cancels any pending timer and starts a new one, so
/// at most one save is pending at a time and a stream of edits keeps pushing
/// the save out until the user pauses. The scheduler owns no session state;
/// the persistence collaborator supplies the callback and handles ordering
/// of overlapping responses on its side.
#[derive(Debug)]
pub struct SaveScheduler {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl SaveScheduler {
    pub fn new() -> Self {
        Self::with_delay(SAVE_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Cancel any pending save and schedule `callback` after the idle delay.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            callback();
        }));
        debug!(delay_ms = delay.as_millis() as u64, "Save scheduled");
    }

    /// Cancel any pending save without firing it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether a save timer is currently pending.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }
}

impl Default for SaveScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SaveScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_schedule_fires_after_delay() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut scheduler = SaveScheduler::with_delay(Duration::from_millis(20));

        let counter = fired.clone();
        scheduler.schedule(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(scheduler.is_pending());

        sleep(Duration::from_millis(60)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!scheduler.is_pending());
    }

    #[tokio::test]
    async fn test_reschedule_replaces_pending_save() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut scheduler = SaveScheduler::with_delay(Duration::from_millis(40));

        for _ in 0..5 {
            let counter = fired.clone();
            scheduler.schedule(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
            sleep(Duration::from_millis(5)).await;
        }

        sleep(Duration::from_millis(80)).await;
        // Only the final timer survives; earlier ones were cancelled
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cancel_prevents_firing() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut scheduler = SaveScheduler::with_delay(Duration::from_millis(20));

        let counter = fired.clone();
        scheduler.schedule(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        scheduler.cancel();
        assert!(!scheduler.is_pending());

        sleep(Duration::from_millis(60)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
