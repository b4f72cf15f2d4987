//! Delayed-callback scheduling behind a trait, so timing logic can run on the
//! browser's timers in the app and on a hand-driven clock in tests.
//!
//! Cancellation is ownership: every scheduled task returns a handle, and
//! dropping the handle cancels the task if it has not fired yet. This mirrors
//! how `gloo_timers::callback::Timeout` behaves.

use gloo_timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A boxed one-shot task.
pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    /// Cancels the task when dropped.
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Task) -> Self::Handle;
}

/// Browser timers via `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Task) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

/// Deterministic scheduler whose clock only moves when [`advance`] is called.
///
/// Clones share the same clock and queue.
///
/// [`advance`]: ManualScheduler::advance
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<ManualInner>,
}

#[derive(Default)]
struct ManualInner {
    now_ms: Cell<u64>,
    next_seq: Cell<u64>,
    queue: RefCell<Vec<PendingTask>>,
}

struct PendingTask {
    due_ms: u64,
    seq: u64,
    cancelled: Rc<Cell<bool>>,
    task: Task,
}

/// Handle for a task on a [`ManualScheduler`].
#[derive(Debug)]
pub struct ManualHandle {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds elapsed since the scheduler was created.
    pub fn now_ms(&self) -> u64 {
        self.inner.now_ms.get()
    }

    /// Tasks still waiting to fire.
    pub fn pending(&self) -> usize {
        self.inner
            .queue
            .borrow()
            .iter()
            .filter(|t| !t.cancelled.get())
            .count()
    }

    /// Move the clock forward by `ms`, running every live task that comes
    /// due in order. Tasks scheduled by a running task are honored if they
    /// fall inside the window.
    pub fn advance(&self, ms: u64) {
        let target = self.now_ms() + ms;
        loop {
            let next = {
                let mut queue = self.inner.queue.borrow_mut();
                queue.retain(|t| !t.cancelled.get());
                let idx = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due_ms <= target)
                    .min_by_key(|(_, t)| (t.due_ms, t.seq))
                    .map(|(i, _)| i);
                idx.map(|i| queue.remove(i))
            };
            let Some(pending) = next else { break };
            if pending.due_ms > self.now_ms() {
                self.inner.now_ms.set(pending.due_ms);
            }
            // Queue borrow is released here so the task may schedule more work.
            (pending.task)();
        }
        self.inner.now_ms.set(target);
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay_ms: u32, task: Task) -> ManualHandle {
        let seq = self.inner.next_seq.get();
        self.inner.next_seq.set(seq + 1);
        let cancelled = Rc::new(Cell::new(false));
        self.inner.queue.borrow_mut().push(PendingTask {
            due_ms: self.now_ms() + delay_ms as u64,
            seq,
            cancelled: cancelled.clone(),
            task,
        });
        ManualHandle { cancelled }
    }
}
