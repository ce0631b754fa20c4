//! Registration table for committed elements.
//!
//! Every view in a committed tree gets an [`ElementId`] that stays stable
//! for as long as a view of the same kind sits at the same position. Click
//! listeners are registered against that id, so wiring and unwiring are
//! plain table operations keyed by element identity.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

use crate::view::Callback;

new_key_type! {
    pub struct ElementId;
}

pub type ListenerId = u64;

struct Element {
    path: String,
    listeners: SmallVec<[(ListenerId, Callback); 2]>,
}

#[derive(Default)]
pub struct ElementTable {
    elements: SlotMap<ElementId, Element>,
    by_path: HashMap<String, ElementId>,
    next_listener: ListenerId,
}

thread_local! {
    static ELEMENTS: RefCell<ElementTable> = RefCell::new(ElementTable::default());
}

/// Borrow this thread's element table. Do not call listeners from inside `f`.
pub fn with_elements<R>(f: impl FnOnce(&mut ElementTable) -> R) -> R {
    ELEMENTS.with(|t| f(&mut t.borrow_mut()))
}

impl ElementTable {
    /// Id for the element at `path`, allocating one if it is new.
    pub fn attach(&mut self, path: &str) -> ElementId {
        if let Some(id) = self.by_path.get(path) {
            return *id;
        }
        let id = self.elements.insert(Element {
            path: path.to_string(),
            listeners: SmallVec::new(),
        });
        self.by_path.insert(path.to_string(), id);
        id
    }

    /// Remove one element and every listener registered on it.
    pub fn detach(&mut self, id: ElementId) -> bool {
        match self.elements.remove(id) {
            Some(el) => {
                self.by_path.remove(&el.path);
                if !el.listeners.is_empty() {
                    log::debug!(
                        "element {} detached with {} listener(s)",
                        el.path,
                        el.listeners.len()
                    );
                }
                true
            }
            None => false,
        }
    }

    /// Detach every element whose path is not in `live`. Returns the ids removed.
    pub fn retain_paths(&mut self, live: &HashSet<String>) -> Vec<ElementId> {
        let gone: Vec<ElementId> = self
            .elements
            .iter()
            .filter(|(_, el)| !live.contains(&el.path))
            .map(|(id, _)| id)
            .collect();
        for id in &gone {
            self.detach(*id);
        }
        gone
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn add_click_listener(&mut self, id: ElementId, callback: Callback) -> Option<ListenerId> {
        let el = self.elements.get_mut(id)?;
        self.next_listener += 1;
        let listener = self.next_listener;
        el.listeners.push((listener, callback));
        Some(listener)
    }

    /// Idempotent: removing an unknown listener, or from a gone element, is a no-op.
    pub fn remove_click_listener(&mut self, id: ElementId, listener: ListenerId) -> bool {
        let Some(el) = self.elements.get_mut(id) else {
            return false;
        };
        let before = el.listeners.len();
        el.listeners.retain(|(l, _)| *l != listener);
        el.listeners.len() != before
    }

    pub fn listener_count(&self, id: ElementId) -> usize {
        self.elements.get(id).map_or(0, |el| el.listeners.len())
    }

    /// Snapshot of the listeners on `id`, for calling outside the borrow.
    pub fn click_listeners(&self, id: ElementId) -> Vec<Callback> {
        self.elements
            .get(id)
            .map(|el| el.listeners.iter().map(|(_, cb)| cb.clone()).collect())
            .unwrap_or_default()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
        self.by_path.clear();
    }
}

/// Opaque handle that the host points at an element once it is committed.
#[derive(Clone, Debug, Default)]
pub struct NodeRef(Rc<Cell<Option<ElementId>>>);

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<ElementId> {
        self.0.get()
    }

    /// Called by hosts on commit (`Some`) and when the element goes away (`None`).
    pub fn bind(&self, element: Option<ElementId>) {
        self.0.set(element);
    }

    pub fn ptr_eq(&self, other: &NodeRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
