use std::time::Duration;
use tokio::time::Instant;

/// Permission to revert the last swipe, valid until a fixed deadline
///
/// The window is a plain value: the tracker holds at most one and drops it to
/// cancel. Deadlines use `tokio::time::Instant` so paused test clocks apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoWindow {
    deadline: Instant,
}

impl UndoWindow {
    /// Open a window lasting `length` from now
    pub fn open(length: Duration) -> Self {
        Self {
            deadline: Instant::now() + length,
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        Instant::now() < self.deadline
    }

    /// Time left before expiry, zero once expired
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Resolve once the window has expired
    pub async fn expired(&self) {
        tokio::time::sleep_until(self.deadline).await;
    }
}
