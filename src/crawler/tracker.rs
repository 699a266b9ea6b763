//! Completion tracking for a dynamically growing set of tasks

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Counts outstanding crawl tasks and wakes waiters when the count drops to zero
///
/// New work may be registered while other work is still running, so the
/// tracker can be reused by tasks that spawn further tasks. A parent task must
/// register its children before its own guard is dropped; the count then can
/// only reach zero once the whole task tree has finished.
#[derive(Debug, Default)]
pub struct TaskTracker {
    outstanding: AtomicUsize,
    notify: Notify,
}

/// Registration of one outstanding task, released on drop
///
/// Dropping on unwind counts too, so a panicking task never leaves the
/// tracker waiting forever.
#[derive(Debug)]
pub struct TaskGuard {
    tracker: Arc<TaskTracker>,
}

impl TaskTracker {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Registers one more outstanding task
    pub fn start(self: &Arc<Self>) -> TaskGuard {
        self.outstanding.fetch_add(1, Ordering::AcqRel);
        TaskGuard {
            tracker: Arc::clone(self),
        }
    }

    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::Acquire)
    }

    /// Waits until no task is outstanding
    ///
    /// Returns immediately when nothing was ever registered.
    pub async fn wait_idle(&self) {
        loop {
            // Register before checking so a release between the check and
            // the await is not missed.
            let notified = self.notify.notified();

            if self.outstanding.load(Ordering::Acquire) == 0 {
                return;
            }

            notified.await;
        }
    }
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        if self.tracker.outstanding.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.tracker.notify.notify_waiters();
        }
    }
}
