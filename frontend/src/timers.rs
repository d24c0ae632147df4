use std::cell::Cell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use shared::stage_timer::{TimerBackend, TimerCallback};

/// Browser `setTimeout` backend for the stage timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTimers;

/// Cancellation sets a flag checked when the timeout fires, so a cancelled
/// callback is dead the moment `cancel` returns.
#[derive(Debug)]
pub struct TimeoutHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TimerBackend for GlooTimers {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay_ms: u32, callback: TimerCallback) -> TimeoutHandle {
        let cancelled = Rc::new(Cell::new(false));
        let flag = cancelled.clone();
        let timeout = Timeout::new(delay_ms, move || {
            if !flag.get() {
                callback();
            }
        });
        timeout.forget();
        TimeoutHandle { cancelled }
    }

    fn cancel(&self, handle: TimeoutHandle) {
        handle.cancelled.set(true);
    }
}
