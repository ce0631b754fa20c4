use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::runtime::after_commit;
use crate::scope::current_scope;
use crate::{Dispose, remember};

/// What a host adapter promises to call, and when.
///
/// `on_attach` comes before the first `on_value_changed`; `on_detach` comes
/// after the last one and is delivered exactly once.
pub trait Lifecycle {
    fn on_attach(&self);
    fn on_value_changed(&self);
    fn on_detach(&self);
}

type EffectFn = Box<dyn FnOnce() -> Dispose>;

/// One `use_effect` call site: the last seen key, the effect staged for the
/// next commit, and the cleanup of the one that ran last.
pub struct KeyedEffect<K> {
    key: RefCell<Option<K>>,
    staged: RefCell<Option<EffectFn>>,
    cleanup: RefCell<Option<Dispose>>,
    installed: Cell<bool>,
    attached: Cell<bool>,
    detached: Cell<bool>,
}

impl<K> Default for KeyedEffect<K> {
    fn default() -> Self {
        Self {
            key: RefCell::new(None),
            staged: RefCell::new(None),
            cleanup: RefCell::new(None),
            installed: Cell::new(false),
            attached: Cell::new(false),
            detached: Cell::new(false),
        }
    }
}

impl<K: PartialEq> KeyedEffect<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage `effect` if `key` differs from the last one seen. Returns
    /// whether anything was staged.
    pub fn stage(&self, key: K, effect: impl FnOnce() -> Dispose + 'static) -> bool {
        if self.detached.get() {
            return false;
        }
        let mut last = self.key.borrow_mut();
        if last.as_ref() == Some(&key) {
            return false;
        }
        *last = Some(key);
        *self.staged.borrow_mut() = Some(Box::new(effect));
        true
    }

    /// First call returns true; later calls false.
    fn install(&self) -> bool {
        !self.installed.replace(true)
    }
}

impl<K> KeyedEffect<K> {
    pub fn is_attached(&self) -> bool {
        self.attached.get() && !self.detached.get()
    }

    pub fn is_detached(&self) -> bool {
        self.detached.get()
    }
}

impl<K> Lifecycle for KeyedEffect<K> {
    fn on_attach(&self) {
        if self.detached.get() || self.attached.replace(true) {
            return;
        }
        log::trace!("effect attached");
    }

    fn on_value_changed(&self) {
        if !self.is_attached() {
            return;
        }
        let Some(effect) = self.staged.borrow_mut().take() else {
            return;
        };
        let previous = self.cleanup.borrow_mut().take();
        if let Some(previous) = previous {
            previous.run();
        }
        let next = effect();
        *self.cleanup.borrow_mut() = Some(next);
    }

    fn on_detach(&self) {
        if self.detached.replace(true) {
            return;
        }
        self.staged.borrow_mut().take();
        let last = self.cleanup.borrow_mut().take();
        if let Some(last) = last {
            last.run();
        }
        log::trace!("effect detached");
    }
}

/// Run `effect` after commit on first composition and whenever `key`
/// changes. The previous cleanup runs before each re-run and once more when
/// the enclosing scope is disposed.
pub fn use_effect<K: PartialEq + 'static>(key: K, effect: impl FnOnce() -> Dispose + 'static) {
    let cell: Rc<KeyedEffect<K>> = remember(KeyedEffect::new);

    if cell.install() {
        match current_scope() {
            Some(scope) => {
                let cell = cell.clone();
                scope.add_disposer(move || cell.on_detach());
            }
            None => log::warn!("use_effect outside a scope; cleanup will never run"),
        }
        let cell = cell.clone();
        after_commit(move || cell.on_attach());
    }

    if cell.stage(key, effect) {
        let cell = cell.clone();
        after_commit(move || cell.on_value_changed());
    }
}

/// Effect that runs once after the first commit and cleans up on unmount.
pub fn use_mount_effect(effect: impl FnOnce() -> Dispose + 'static) {
    use_effect((), effect)
}
