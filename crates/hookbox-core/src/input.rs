use crate::view::Callback;
use std::rc::Rc;

/// Value change delivered by a text control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeEvent {
    pub value: String,
}

impl ChangeEvent {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Something handed to a click binding: either a callback, or a value that
/// cannot be invoked and is therefore ignored.
#[derive(Clone)]
pub enum ClickHandler {
    Invoke(Callback),
    Inert(String),
}

impl ClickHandler {
    pub fn invoke(f: impl Fn() + 'static) -> Self {
        ClickHandler::Invoke(Rc::new(f))
    }

    pub fn callback(&self) -> Option<&Callback> {
        match self {
            ClickHandler::Invoke(cb) => Some(cb),
            ClickHandler::Inert(_) => None,
        }
    }
}

impl From<&str> for ClickHandler {
    fn from(value: &str) -> Self {
        ClickHandler::Inert(value.to_string())
    }
}

impl From<String> for ClickHandler {
    fn from(value: String) -> Self {
        ClickHandler::Inert(value)
    }
}

impl From<Callback> for ClickHandler {
    fn from(cb: Callback) -> Self {
        ClickHandler::Invoke(cb)
    }
}

impl std::fmt::Debug for ClickHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClickHandler::Invoke(_) => write!(f, "Invoke(<callback>)"),
            ClickHandler::Inert(v) => f.debug_tuple("Inert").field(v).finish(),
        }
    }
}
