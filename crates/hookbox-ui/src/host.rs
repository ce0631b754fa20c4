//! Headless host: mounts a view function, commits each composed tree into
//! the element table, and feeds events back in.
//!
//! Every entry point that can change state ends with a settle loop, so when
//! it returns the committed tree and all effects reflect the latest values.

use std::collections::HashSet;

use hookbox_core::runtime::take_recompose_request;
use hookbox_core::timer::{self, ManualClock};
use hookbox_core::*;
use web_time::Duration;

use crate::outline;

/// Upper bound on recompositions triggered by a single event.
pub const MAX_SETTLE_PASSES: usize = 32;

/// Drives one mounted view function on the current thread.
///
/// The composer, element table and timer queue are thread-local, so a host
/// owns all of them while it exists: `new` discards whatever an earlier host
/// on this thread left behind. Keep at most one host per thread.
pub struct Host<F: FnMut() -> View> {
    build: F,
    scheduler: Scheduler,
    tree: Option<View>,
    bound_refs: Vec<NodeRef>,
}

impl<F: FnMut() -> View> Host<F> {
    pub fn new(build: F) -> Self {
        with_elements(|t| t.clear());
        timer::clear_timers();
        Self {
            build,
            scheduler: Scheduler::new(),
            tree: None,
            bound_refs: Vec::new(),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.tree.is_some()
    }

    /// First composition, commit and effects, then settle.
    pub fn mount(&mut self) -> Result<usize, HostError> {
        if self.is_mounted() {
            return self.settle();
        }
        log::debug!("mounting");
        self.pass();
        self.settle().map(|n| n + 1)
    }

    /// The committed tree.
    pub fn view(&self) -> Option<&View> {
        self.tree.as_ref()
    }

    pub fn dump(&self) -> String {
        self.tree.as_ref().map(outline).unwrap_or_default()
    }

    /// Recompose until no signal asks for another pass.
    pub fn settle(&mut self) -> Result<usize, HostError> {
        if !self.is_mounted() {
            return Err(HostError::NotMounted);
        }
        let mut passes = 0;
        while take_recompose_request() {
            if passes >= MAX_SETTLE_PASSES {
                log::warn!("still dirty after {passes} passes; giving up");
                return Err(HostError::Unsettled(passes));
            }
            self.pass();
            passes += 1;
        }
        Ok(passes)
    }

    fn pass(&mut self) {
        let mut tree = self.scheduler.compose(&mut self.build);
        self.commit(&mut tree);
        self.tree = Some(tree);
        self.scheduler.flush_effects();
    }

    fn commit(&mut self, tree: &mut View) {
        fn walk(view: &mut View, path: String, live: &mut HashSet<String>, refs: &mut Vec<NodeRef>) {
            let key = format!("{path}:{}", view.kind.name());
            view.element = Some(with_elements(|t| t.attach(&key)));
            if let Some(handle) = &view.node_ref {
                handle.bind(view.element);
                refs.push(handle.clone());
            }
            for (i, child) in view.children.iter_mut().enumerate() {
                walk(child, format!("{key}/{i}"), live, refs);
            }
            live.insert(key);
        }

        let mut live = HashSet::new();
        let mut refs = Vec::new();
        walk(tree, "0".to_string(), &mut live, &mut refs);

        let gone = with_elements(|t| t.retain_paths(&live));
        if !gone.is_empty() {
            log::debug!("commit detached {} element(s)", gone.len());
        }
        for old in self.bound_refs.drain(..) {
            if !refs.iter().any(|r| r.ptr_eq(&old)) {
                old.bind(None);
            }
        }
        self.bound_refs = refs;
    }

    fn find_button(&self, query: &str) -> Result<&View, HostError> {
        let tree = self.tree.as_ref().ok_or(HostError::NotMounted)?;
        tree.find(&|v| {
            matches!(v.kind, ViewKind::Button { .. })
                && (v.tag.as_deref() == Some(query) || v.text() == Some(query))
        })
        .ok_or_else(|| HostError::NoSuchButton(query.to_string()))
    }

    /// Click the first button whose tag or label is `query`.
    pub fn click_button(&mut self, query: &str) -> Result<usize, HostError> {
        let element = self
            .find_button(query)?
            .element
            .ok_or(HostError::NotMounted)?;
        self.click_element(element)
    }

    /// Deliver a click to `element`: its own handler first, then any
    /// listeners registered on it. Returns how many handlers ran.
    pub fn click_element(&mut self, element: ElementId) -> Result<usize, HostError> {
        let tree = self.tree.as_ref().ok_or(HostError::NotMounted)?;
        let view = tree
            .find_element(element)
            .ok_or(HostError::NoSuchElement(element))?;

        let mut handlers: Vec<Callback> = Vec::new();
        if let ViewKind::Button {
            on_click: Some(cb), ..
        } = &view.kind
        {
            handlers.push(cb.clone());
        }
        handlers.extend(with_elements(|t| t.click_listeners(element)));

        log::debug!("click {element:?}: {} handler(s)", handlers.len());
        for handler in &handlers {
            handler();
        }
        self.settle()?;
        Ok(handlers.len())
    }

    /// Type `value` into the text field with the given placeholder or tag.
    pub fn input(&mut self, query: &str, value: &str) -> Result<(), HostError> {
        let tree = self.tree.as_ref().ok_or(HostError::NotMounted)?;
        let field = tree
            .find(&|v| match &v.kind {
                ViewKind::TextField { hint, .. } => {
                    hint == query || v.tag.as_deref() == Some(query)
                }
                _ => false,
            })
            .ok_or_else(|| HostError::NoSuchInput(query.to_string()))?;

        if let ViewKind::TextField {
            on_change: Some(cb),
            ..
        } = &field.kind
        {
            let cb = cb.clone();
            cb(ChangeEvent::new(value));
        }
        self.settle()?;
        Ok(())
    }

    /// Deliver expired timers against the installed clock.
    pub fn tick(&mut self) -> Result<usize, HostError> {
        if !self.is_mounted() {
            return Err(HostError::NotMounted);
        }
        let fired = timer::fire_due();
        self.settle()?;
        Ok(fired)
    }

    /// Move `clock` forward and deliver whatever came due.
    pub fn advance(&mut self, clock: &ManualClock, by: Duration) -> Result<usize, HostError> {
        clock.advance(by);
        self.tick()
    }

    /// Tear the view down: cleanups run once, refs and elements are released.
    pub fn unmount(&mut self) {
        if self.tree.take().is_none() {
            return;
        }
        self.scheduler.unmount();
        for r in self.bound_refs.drain(..) {
            r.bind(None);
        }
        with_elements(|t| t.clear());
        log::debug!("unmounted");
    }
}

impl<F: FnMut() -> View> Drop for Host<F> {
    fn drop(&mut self) {
        self.unmount();
    }
}
