use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Per-request context carrying cancellation and deadline state.
///
/// Cloning is cheap and all clones share the same cancellation flag, so a
/// caller can hand a context to a workflow and cancel it from outside.
/// Workflows check the context between steps; work already committed before
/// a cancellation is observed is not undone.
#[derive(Debug, Clone, Default)]
pub struct Context {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl Context {
    /// Creates a context without a deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context that expires after the given duration.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: Some(Instant::now() + timeout),
        }
    }

    /// Marks the context as cancelled. Visible to all clones.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Returns true if the context was cancelled or its deadline passed.
    pub fn is_cancelled(&self) -> bool {
        if self.cancelled.load(Ordering::SeqCst) {
            return true;
        }
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Returns the deadline, if one was set.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
