use std::rc::Rc;

use crate::{ChangeEvent, ElementId, NodeRef};

pub type Callback = Rc<dyn Fn()>;
pub type ChangeCallback = Rc<dyn Fn(ChangeEvent)>;

#[derive(Clone)]
pub enum ViewKind {
    Column,
    Row,
    Divider,
    Heading {
        level: u8,
        text: String,
    },
    Text {
        text: String,
    },
    Button {
        text: String,
        on_click: Option<Callback>,
    },
    TextField {
        value: String,
        hint: String,
        on_change: Option<ChangeCallback>,
    },
}

impl ViewKind {
    pub fn name(&self) -> &'static str {
        match self {
            ViewKind::Column => "Column",
            ViewKind::Row => "Row",
            ViewKind::Divider => "Divider",
            ViewKind::Heading { .. } => "Heading",
            ViewKind::Text { .. } => "Text",
            ViewKind::Button { .. } => "Button",
            ViewKind::TextField { .. } => "TextField",
        }
    }
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Column => write!(f, "Column"),
            ViewKind::Row => write!(f, "Row"),
            ViewKind::Divider => write!(f, "Divider"),
            ViewKind::Heading { level, text } => f
                .debug_struct("Heading")
                .field("level", level)
                .field("text", text)
                .finish(),
            ViewKind::Text { text } => f.debug_struct("Text").field("text", text).finish(),
            ViewKind::Button { text, on_click } => f
                .debug_struct("Button")
                .field("text", text)
                .field("on_click", &on_click.as_ref().map(|_| "<callback>"))
                .finish(),
            ViewKind::TextField { value, hint, .. } => f
                .debug_struct("TextField")
                .field("value", value)
                .field("hint", hint)
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    /// Assigned on commit; `None` for a freshly composed tree.
    pub element: Option<ElementId>,
    pub kind: ViewKind,
    pub children: Vec<View>,
    pub tag: Option<String>,
    pub node_ref: Option<NodeRef>,
}

impl View {
    pub fn new(kind: ViewKind) -> Self {
        View {
            element: None,
            kind,
            children: vec![],
            tag: None,
            node_ref: None,
        }
    }

    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }

    /// Stable name hosts and tests can look the view up by.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Point `handle` at this view's element once it is committed.
    pub fn node_ref(mut self, handle: &NodeRef) -> Self {
        self.node_ref = Some(handle.clone());
        self
    }

    /// Visible text of leaf views.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            ViewKind::Heading { text, .. }
            | ViewKind::Text { text }
            | ViewKind::Button { text, .. } => Some(text.as_str()),
            ViewKind::TextField { value, .. } => Some(value.as_str()),
            _ => None,
        }
    }

    /// Pre-order search.
    pub fn find(&self, pred: &dyn Fn(&View) -> bool) -> Option<&View> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(pred))
    }

    pub fn find_element(&self, id: ElementId) -> Option<&View> {
        self.find(&|v| v.element == Some(id))
    }
}
