//! Trailing-edge debouncer: only the last value pushed before a quiet period
//! of `delay_ms` reaches the sink.

use crate::scheduler::Scheduler;
use std::cell::Cell;
use std::rc::Rc;

pub struct Debouncer<T, S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    sink: Rc<dyn Fn(T)>,
    pending: Option<S::Handle>,
    // Per-push flag; the fired task clears it without touching `pending`, so a
    // browser timer is never dropped from inside its own callback.
    armed: Rc<Cell<bool>>,
}

impl<T: 'static, S: Scheduler> Debouncer<T, S> {
    pub fn new(scheduler: S, delay_ms: u32, sink: impl Fn(T) + 'static) -> Self {
        Self {
            scheduler,
            delay_ms,
            sink: Rc::new(sink),
            pending: None,
            armed: Rc::new(Cell::new(false)),
        }
    }

    /// Restart the quiet period with `value` as the candidate to deliver.
    pub fn push(&mut self, value: T) {
        self.cancel();

        let armed = Rc::new(Cell::new(true));
        self.armed = armed.clone();
        let sink = self.sink.clone();
        let handle = self.scheduler.schedule(
            self.delay_ms,
            Box::new(move || {
                armed.set(false);
                sink(value);
            }),
        );
        self.pending = Some(handle);
    }

    /// Drop the pending value, if any.
    pub fn cancel(&mut self) {
        // Dropping the handle cancels the scheduled task.
        self.pending = None;
        self.armed.set(false);
    }

    /// Whether a value is waiting to be delivered.
    pub fn is_pending(&self) -> bool {
        self.armed.get()
    }
}
