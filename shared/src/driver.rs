use std::cell::RefCell;
use std::rc::Rc;
use log::{debug, warn};
use crate::constants::{BALANCE_FLAG_KEY, BALANCE_RESET_VALUE};
use crate::flag_store::{parse_balance, FlagStore};
use crate::sequence::*;
use crate::stage_timer::{StageTimer, TimerBackend};
use crate::wheel_geometry::WheelConfig;

/// Callbacks into the page hosting the sequence. Each call is made with no
/// internal borrow held, so a host may call back into the `Sequence`.
pub trait SequenceHost {
    fn stage_changed(&self, _snapshot: &SequenceSnapshot) {}
    /// Expected to scroll the page to the offer.
    fn apply_outcome(&self);
    fn balance_reset(&self) {}
    fn close(&self);
}

struct Inner<B: TimerBackend> {
    machine: RefCell<SequenceMachine>,
    timers: RefCell<StageTimer<Transition, B>>,
    store: RefCell<Box<dyn FlagStore>>,
    host: Box<dyn SequenceHost>,
}

/// Running sequence: owns the machine, its timers, the flag store and the host.
/// Dropping the last handle cancels every pending timer.
pub struct Sequence<B: TimerBackend + 'static> {
    inner: Rc<Inner<B>>,
}

impl<B: TimerBackend + 'static> Clone for Sequence<B> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<B: TimerBackend + 'static> Sequence<B> {
    pub fn new(
        wheel: WheelConfig,
        config: SequenceConfig,
        backend: B,
        store: Box<dyn FlagStore>,
        host: Box<dyn SequenceHost>,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                machine: RefCell::new(SequenceMachine::new(wheel, config)),
                timers: RefCell::new(StageTimer::new(backend)),
                store: RefCell::new(store),
                host,
            }),
        }
    }

    pub fn open(&self) {
        let effects = self.inner.machine.borrow_mut().open();
        Self::run(&self.inner, effects);
    }

    pub fn close(&self) {
        let effects = self.inner.machine.borrow_mut().close();
        Self::run(&self.inner, effects);
    }

    pub fn start(&self) {
        let effects = self.inner.machine.borrow_mut().start();
        Self::run(&self.inner, effects);
    }

    pub fn claim(&self) {
        let effects = self.inner.machine.borrow_mut().claim();
        Self::run(&self.inner, effects);
    }

    pub fn stage(&self) -> Stage {
        self.inner.machine.borrow().stage()
    }

    pub fn snapshot(&self) -> SequenceSnapshot {
        self.inner.machine.borrow().snapshot()
    }

    pub fn pending_timers(&self) -> usize {
        self.inner.timers.borrow().pending_count()
    }

    fn run(inner: &Rc<Inner<B>>, effects: Vec<Effect>) {
        let epoch = inner.machine.borrow().epoch();
        for effect in effects {
            // A host callback earlier in this batch may have closed or reopened us.
            if inner.machine.borrow().epoch() != epoch {
                debug!("Dropping {:?}: sequence {} was reset mid-batch", effect, epoch);
                continue;
            }
            match effect {
                Effect::Arm(transition, delay_ms) => {
                    let weak = Rc::downgrade(inner);
                    inner.timers.borrow_mut().schedule(
                        transition,
                        delay_ms,
                        Box::new(move || {
                            if let Some(inner) = weak.upgrade() {
                                Self::fire(&inner, transition, epoch);
                            }
                        }),
                    );
                }
                Effect::Disarm(transition) => {
                    inner.timers.borrow_mut().cancel(transition);
                }
                Effect::DisarmAll => inner.timers.borrow_mut().cancel_all(),
                Effect::ReadBalance => Self::load_balance(inner),
                Effect::PersistReset => {
                    let result = inner
                        .store
                        .borrow_mut()
                        .write_flag(BALANCE_FLAG_KEY, BALANCE_RESET_VALUE);
                    if let Err(e) = result {
                        warn!("Error updating balance in storage: {}", e);
                    }
                    inner.machine.borrow_mut().set_balance(Some(0.0));
                }
                Effect::BalanceReset => inner.host.balance_reset(),
                Effect::ApplyOutcome => inner.host.apply_outcome(),
                Effect::Close => inner.host.close(),
                Effect::Changed => {
                    let snapshot = inner.machine.borrow().snapshot();
                    inner.host.stage_changed(&snapshot);
                }
            }
        }
    }

    fn load_balance(inner: &Rc<Inner<B>>) {
        let result = inner.store.borrow().read_flag(BALANCE_FLAG_KEY);
        match result {
            Ok(Some(raw)) => {
                let balance = parse_balance(&raw);
                if balance.is_none() {
                    warn!("Ignoring unparseable balance {:?}", raw);
                }
                inner.machine.borrow_mut().set_balance(balance);
            }
            Ok(None) => {}
            Err(e) => warn!("Error loading balance from storage: {}", e),
        }
    }

    fn fire(inner: &Rc<Inner<B>>, transition: Transition, epoch: u64) {
        if inner.machine.borrow().epoch() != epoch {
            warn!("Stale {:?} timer from sequence {} ignored", transition, epoch);
            return;
        }
        if !inner.timers.borrow_mut().take(transition) {
            warn!("Cancelled {:?} timer fired; ignored", transition);
            return;
        }
        let effects = inner.machine.borrow_mut().on_timer(transition);
        Self::run(inner, effects);
    }
}
