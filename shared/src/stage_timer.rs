use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

pub type TimerCallback = Box<dyn FnOnce()>;

/// Host facility that runs a callback once after a delay.
pub trait TimerBackend {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: TimerCallback) -> Self::Handle;

    /// Must guarantee the callback never runs afterwards.
    fn cancel(&self, handle: Self::Handle);
}

/// At most one pending timer per key. Scheduling a key again replaces the
/// earlier timer, and dropping the `StageTimer` cancels everything it holds.
pub struct StageTimer<K: Eq + Hash + Copy, B: TimerBackend> {
    backend: B,
    pending: HashMap<K, B::Handle>,
}

impl<K: Eq + Hash + Copy, B: TimerBackend> StageTimer<K, B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            pending: HashMap::new(),
        }
    }

    pub fn schedule(&mut self, key: K, delay_ms: u32, callback: TimerCallback) {
        if let Some(previous) = self.pending.remove(&key) {
            self.backend.cancel(previous);
        }
        let handle = self.backend.schedule(delay_ms, callback);
        self.pending.insert(key, handle);
    }

    /// Returns whether a timer was actually pending.
    pub fn cancel(&mut self, key: K) -> bool {
        match self.pending.remove(&key) {
            Some(handle) => {
                self.backend.cancel(handle);
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.pending.drain() {
            self.backend.cancel(handle);
        }
    }

    /// Called from inside a firing callback. A `false` result means the timer
    /// was cancelled or replaced and the callback is stale.
    pub fn take(&mut self, key: K) -> bool {
        self.pending.remove(&key).is_some()
    }

    pub fn is_pending(&self, key: K) -> bool {
        self.pending.contains_key(&key)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl<K: Eq + Hash + Copy, B: TimerBackend> Drop for StageTimer<K, B> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualHandle(u64);

struct Scheduled {
    id: u64,
    due_ms: u64,
    callback: TimerCallback,
}

#[derive(Default)]
struct ManualClock {
    now_ms: u64,
    next_id: u64,
    queue: Vec<Scheduled>,
}

/// Virtual clock backend. Time only moves through `advance`, which fires due
/// callbacks in deadline order with no borrow held, so callbacks may schedule
/// or cancel further timers.
#[derive(Clone, Default)]
pub struct ManualTimers {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.borrow().now_ms
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().queue.len()
    }

    pub fn advance(&self, ms: u64) {
        let target = self.now_ms() + ms;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let due = clock
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| s.due_ms <= target)
                    .min_by_key(|(_, s)| (s.due_ms, s.id))
                    .map(|(i, _)| i);
                due.map(|i| {
                    let scheduled = clock.queue.remove(i);
                    clock.now_ms = scheduled.due_ms;
                    scheduled.callback
                })
            };
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.clock.borrow_mut().now_ms = target;
    }
}

impl TimerBackend for ManualTimers {
    type Handle = ManualHandle;

    fn schedule(&self, delay_ms: u32, callback: TimerCallback) -> ManualHandle {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due_ms = clock.now_ms + delay_ms as u64;
        clock.queue.push(Scheduled { id, due_ms, callback });
        ManualHandle(id)
    }

    fn cancel(&self, handle: ManualHandle) {
        self.clock.borrow_mut().queue.retain(|s| s.id != handle.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> TimerCallback) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let make = move |name: &'static str| -> TimerCallback {
            let sink = sink.clone();
            Box::new(move || sink.borrow_mut().push(name))
        };
        (log, make)
    }

    #[test]
    fn test_fires_in_deadline_order() {
        let timers = ManualTimers::new();
        let (log, make) = recorder();
        let mut stage: StageTimer<u8, _> = StageTimer::new(timers.clone());
        stage.schedule(1, 500, make("late"));
        stage.schedule(2, 100, make("early"));

        timers.advance(99);
        assert!(log.borrow().is_empty());
        timers.advance(401);
        assert_eq!(*log.borrow(), vec!["early", "late"]);
        assert_eq!(timers.now_ms(), 500);
    }

    #[test]
    fn test_rescheduling_replaces_pending_timer() {
        let timers = ManualTimers::new();
        let (log, make) = recorder();
        let mut stage: StageTimer<u8, _> = StageTimer::new(timers.clone());
        stage.schedule(1, 100, make("first"));
        stage.schedule(1, 200, make("second"));
        assert_eq!(stage.pending_count(), 1);
        assert_eq!(timers.pending(), 1);

        timers.advance(1000);
        assert_eq!(*log.borrow(), vec!["second"]);
    }

    #[test]
    fn test_cancel_and_take() {
        let timers = ManualTimers::new();
        let (log, make) = recorder();
        let mut stage: StageTimer<u8, _> = StageTimer::new(timers.clone());
        stage.schedule(1, 100, make("cancelled"));
        assert!(stage.cancel(1));
        assert!(!stage.cancel(1));
        assert!(!stage.take(1));

        stage.schedule(2, 100, make("kept"));
        assert!(stage.is_pending(2));
        assert!(stage.take(2));
        assert!(!stage.is_pending(2));

        timers.advance(100);
        assert_eq!(*log.borrow(), vec!["kept"]);
    }

    #[test]
    fn test_drop_cancels_everything() {
        let timers = ManualTimers::new();
        let (log, make) = recorder();
        {
            let mut stage: StageTimer<u8, _> = StageTimer::new(timers.clone());
            stage.schedule(1, 100, make("a"));
            stage.schedule(2, 200, make("b"));
        }
        assert_eq!(timers.pending(), 0);
        timers.advance(1000);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_callbacks_may_chain_within_one_advance() {
        let timers = ManualTimers::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let chained = timers.clone();
        let sink = log.clone();
        timers.schedule(
            100,
            Box::new(move || {
                sink.borrow_mut().push(chained.now_ms());
                let sink = sink.clone();
                let inner = chained.clone();
                chained.schedule(50, Box::new(move || sink.borrow_mut().push(inner.now_ms())));
            }),
        );

        timers.advance(200);
        assert_eq!(*log.borrow(), vec![100, 150]);
    }
}
