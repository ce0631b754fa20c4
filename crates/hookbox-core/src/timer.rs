//! Deferred work and the clock it is measured against.
//!
//! Timers live in a thread-local queue. Nothing fires on its own: the host
//! calls [`fire_due`] when it wants to deliver expired timers, which keeps
//! delivery on the same thread and in the same order as every other event.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};
use web_time::{Duration, Instant};

new_key_type! {
    pub struct TimerId;
}

pub trait Clock: 'static {
    fn now(&self) -> Instant;
}

pub struct SystemClock;
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
#[derive(Clone)]
pub struct ManualClock {
    t: Rc<Cell<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            t: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.t.set(self.t.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.t.get()
    }
}

struct Timer {
    due: Instant,
    seq: u64,
    job: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Timers {
    entries: SlotMap<TimerId, Timer>,
    seq: u64,
}

thread_local! {
    static CLOCK: RefCell<Rc<dyn Clock>> = RefCell::new(Rc::new(SystemClock));
    static TIMERS: RefCell<Timers> = RefCell::new(Timers::default());
}

/// Install the clock timers are measured against on this thread.
pub fn set_clock(clock: Rc<dyn Clock>) {
    CLOCK.with(|c| *c.borrow_mut() = clock);
}

pub fn now() -> Instant {
    CLOCK.with(|c| c.borrow().now())
}

/// Handle to a scheduled timer. Copy it freely; cancelling twice is harmless.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerHandle(TimerId);

impl TimerHandle {
    /// Returns true if the timer was still pending.
    pub fn cancel(self) -> bool {
        TIMERS.with(|t| t.borrow_mut().entries.remove(self.0).is_some())
    }

    pub fn is_pending(self) -> bool {
        TIMERS.with(|t| t.borrow().entries.contains_key(self.0))
    }
}

/// Run `job` once `delay` has elapsed on the installed clock.
pub fn schedule(delay: Duration, job: impl FnOnce() + 'static) -> TimerHandle {
    let due = now() + delay;
    TIMERS.with(|t| {
        let mut t = t.borrow_mut();
        t.seq += 1;
        let seq = t.seq;
        let id = t.entries.insert(Timer {
            due,
            seq,
            job: Box::new(job),
        });
        log::debug!("timer {id:?} scheduled in {delay:?}");
        TimerHandle(id)
    })
}

/// Fire every timer whose deadline has passed, earliest first. Returns how
/// many fired. Timers scheduled by a firing job wait for the next call.
pub fn fire_due() -> usize {
    let now = now();
    let mut due: Vec<(Instant, u64, Box<dyn FnOnce()>)> = TIMERS.with(|t| {
        let mut t = t.borrow_mut();
        let ids: Vec<TimerId> = t
            .entries
            .iter()
            .filter(|(_, timer)| timer.due <= now)
            .map(|(id, _)| id)
            .collect();
        ids.into_iter()
            .filter_map(|id| t.entries.remove(id))
            .map(|timer| (timer.due, timer.seq, timer.job))
            .collect()
    });
    due.sort_by_key(|(at, seq, _)| (*at, *seq));
    let fired = due.len();
    for (_, _, job) in due {
        job();
    }
    fired
}

/// Drop every pending timer without running it. Returns how many were dropped.
pub fn clear_timers() -> usize {
    let dropped = TIMERS.with(|t| std::mem::take(&mut t.borrow_mut().entries));
    if !dropped.is_empty() {
        log::debug!("dropped {} pending timers", dropped.len());
    }
    dropped.len()
}

pub fn pending_timers() -> usize {
    TIMERS.with(|t| t.borrow().entries.len())
}

pub fn next_deadline() -> Option<Instant> {
    TIMERS.with(|t| t.borrow().entries.values().map(|timer| timer.due).min())
}
