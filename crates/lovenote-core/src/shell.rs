//! Page shell: the splash gate and its timer.
//!
//! The page starts in [`LoadPhase::Loading`] and shows the splash. A
//! [`ScopedTimer`] armed on mount flips it to [`LoadPhase::Ready`] once; the
//! splash never comes back. The timer task is aborted when the timer is
//! dropped, so a shell torn down mid-splash leaves nothing running.

use std::time::Duration;

use tokio::task::{AbortHandle, JoinHandle};

/// How long the splash is shown.
pub const SPLASH_DELAY: Duration = Duration::from_millis(2000);

/// Splash-to-content gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
}

impl LoadPhase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadPhase::Loading)
    }

    /// Move to `Ready`. Returns `true` only on the first call.
    pub fn finish(&mut self) -> bool {
        match self {
            LoadPhase::Loading => {
                *self = LoadPhase::Ready;
                tracing::debug!("Splash finished, showing content");
                true
            }
            LoadPhase::Ready => false,
        }
    }
}

/// One-shot timer that is cancelled when dropped.
///
/// Must be started from within a tokio runtime.
#[derive(Debug)]
pub struct ScopedTimer {
    delay: Duration,
    abort: AbortHandle,
    handle: Option<JoinHandle<()>>,
}

impl ScopedTimer {
    /// Arm a timer that fires after `delay`.
    pub fn start(delay: Duration) -> Self {
        let handle = tokio::spawn(tokio::time::sleep(delay));
        Self {
            delay,
            abort: handle.abort_handle(),
            handle: Some(handle),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait for the timer. Returns `false` if it was cancelled instead.
    ///
    /// Only the first call waits; later calls return `false` immediately.
    pub async fn expired(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => handle.await.is_ok(),
            None => false,
        }
    }

    /// Handle that observes (or forces) cancellation of the timer task.
    pub fn abort_handle(&self) -> AbortHandle {
        self.abort.clone()
    }

    /// Cancel the timer without waiting for it.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if !self.abort.is_finished() {
            tracing::trace!("Cancelling timer ({:?})", self.delay);
        }
        self.abort.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_starts_loading() {
        let phase = LoadPhase::new();
        assert!(phase.is_loading());
    }

    #[test]
    fn finish_is_one_shot() {
        let mut phase = LoadPhase::new();
        assert!(phase.finish());
        assert_eq!(phase, LoadPhase::Ready);
        assert!(!phase.finish());
        assert!(!phase.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn timer_fires_after_delay() {
        let start = tokio::time::Instant::now();
        let mut timer = ScopedTimer::start(SPLASH_DELAY);
        assert!(timer.expired().await);
        assert!(start.elapsed() >= SPLASH_DELAY);
        assert!(!timer.expired().await);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_before_expiry_aborts_task() {
        let timer = ScopedTimer::start(Duration::from_secs(60));
        let abort = timer.abort_handle();
        timer.cancel();

        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert!(abort.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_timer_aborts_task() {
        let timer = ScopedTimer::start(SPLASH_DELAY);
        let abort = timer.abort_handle();
        drop(timer);

        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert!(abort.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn aborted_timer_reports_not_expired() {
        let mut timer = ScopedTimer::start(SPLASH_DELAY);
        timer.abort_handle().abort();
        assert!(!timer.expired().await);
    }
}
