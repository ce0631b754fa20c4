use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::View;
use crate::scope::Scope;

thread_local! {
    pub static COMPOSER: RefCell<Composer> = RefCell::new(Composer::default());
    static RECOMPOSE_REQUESTED: Cell<bool> = const { Cell::new(false) };
}

#[derive(Default)]
pub struct Composer {
    pub slots: Vec<Box<dyn Any>>,
    pub cursor: usize,
    pub keyed_slots: HashMap<String, Box<dyn Any>>,
    after_commit: Vec<Box<dyn FnOnce()>>,
}

impl Composer {
    fn reset(&mut self) {
        self.slots.clear();
        self.keyed_slots.clear();
        self.after_commit.clear();
        self.cursor = 0;
    }
}

/// Marks the start of one composition pass. Rewinds the slot cursor.
pub struct ComposeGuard {
    pass: u64,
}

impl ComposeGuard {
    pub fn begin(pass: u64) -> Self {
        COMPOSER.with(|c| c.borrow_mut().cursor = 0);
        // Anything written before this point is picked up by the pass itself.
        RECOMPOSE_REQUESTED.with(|r| r.set(false));
        ComposeGuard { pass }
    }

    pub fn pass(&self) -> u64 {
        self.pass
    }
}

impl Drop for ComposeGuard {
    fn drop(&mut self) {
        COMPOSER.with(|c| {
            let c = c.borrow();
            if self.pass > 0 && c.cursor != c.slots.len() {
                log::warn!(
                    "compose pass {}: visited {} of {} slots; remember() calls must not be conditional",
                    self.pass,
                    c.cursor,
                    c.slots.len()
                );
            }
        });
    }
}

/// Ask the host for another composition pass.
pub fn request_recompose() {
    RECOMPOSE_REQUESTED.with(|r| r.set(true));
}

/// Returns and clears the pending recompose request.
pub fn take_recompose_request() -> bool {
    RECOMPOSE_REQUESTED.with(|r| r.replace(false))
}

pub fn recompose_requested() -> bool {
    RECOMPOSE_REQUESTED.with(|r| r.get())
}

/// Queue work to run once the current pass has been committed.
pub fn after_commit(job: impl FnOnce() + 'static) {
    COMPOSER.with(|c| c.borrow_mut().after_commit.push(Box::new(job)));
}

/// Run every queued post-commit job in queue order. Returns how many ran.
pub fn flush_after_commit() -> usize {
    let mut ran = 0;
    loop {
        let jobs = COMPOSER.with(|c| std::mem::take(&mut c.borrow_mut().after_commit));
        if jobs.is_empty() {
            return ran;
        }
        for job in jobs {
            job();
            ran += 1;
        }
    }
}

/// Slot-based remember (sequential composition only)
pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Rc<T> {
    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let cursor = c.cursor;
        c.cursor += 1;

        if cursor >= c.slots.len() {
            let rc: Rc<T> = Rc::new(init());
            c.slots.push(Box::new(rc.clone()));
            return rc;
        }

        if let Some(rc) = c.slots[cursor].downcast_ref::<Rc<T>>() {
            rc.clone()
        } else {
            log::warn!(
                "remember: slot {} type changed; replacing. \
                 If this is due to conditional composition, prefer remember_with_key.",
                cursor
            );
            let rc: Rc<T> = Rc::new(init());
            c.slots[cursor] = Box::new(rc.clone());
            rc
        }
    })
}

/// Key-based remember
pub fn remember_with_key<T: 'static>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<T> {
    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let key = key.into();

        if let Some(existing) = c.keyed_slots.get(&key) {
            if let Some(rc) = existing.downcast_ref::<Rc<T>>() {
                return rc.clone();
            }
            log::warn!(
                "remember_with_key: key '{}' reused with a different type; replacing.",
                key
            );
        }

        let rc: Rc<T> = Rc::new(init());
        c.keyed_slots.insert(key, Box::new(rc.clone()));
        rc
    })
}

pub fn remember_state<T: 'static>(init: impl FnOnce() -> T) -> Rc<RefCell<T>> {
    remember(|| RefCell::new(init()))
}

/// Owns the root scope of one mounted composition and sequences its passes.
///
/// The composer is thread-local, so only one scheduler may be mounted per
/// thread at a time.
pub struct Scheduler {
    scope: Option<Scope>,
    passes: u64,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        COMPOSER.with(|c| c.borrow_mut().reset());
        Self {
            scope: None,
            passes: 0,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.scope.is_some()
    }

    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Run one composition pass under the root scope, creating it on first use.
    pub fn compose<F>(&mut self, build: F) -> View
    where
        F: FnOnce() -> View,
    {
        let scope = self.scope.get_or_insert_with(Scope::new).clone();
        let guard = ComposeGuard::begin(self.passes);
        let view = scope.run(build);
        drop(guard);
        self.passes += 1;
        log::trace!("compose pass {} done", self.passes);
        view
    }

    /// Run effects queued by the last pass. Call after the tree is committed.
    pub fn flush_effects(&self) -> usize {
        flush_after_commit()
    }

    /// Tear down the composition: run every cleanup once and drop all slots.
    pub fn unmount(&mut self) {
        let Some(scope) = self.scope.take() else {
            return;
        };
        log::debug!("unmounting after {} passes", self.passes);
        scope.dispose();
        COMPOSER.with(|c| c.borrow_mut().reset());
        take_recompose_request();
        self.passes = 0;
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.unmount();
    }
}
