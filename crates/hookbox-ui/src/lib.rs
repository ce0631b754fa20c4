#![allow(non_snake_case)]
//! Widgets, the headless host, and the hook utilities.

pub mod hooks;
pub mod host;

use std::rc::Rc;

use hookbox_core::*;

pub use hooks::*;
pub use host::{Host, MAX_SETTLE_PASSES};

pub fn Column() -> View {
    View::new(ViewKind::Column)
}

pub fn Row() -> View {
    View::new(ViewKind::Row)
}

/// Horizontal rule between regions.
pub fn Divider() -> View {
    View::new(ViewKind::Divider)
}

pub fn Heading(level: u8, text: impl Into<String>) -> View {
    View::new(ViewKind::Heading {
        level: level.clamp(1, 6),
        text: text.into(),
    })
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(ViewKind::Text { text: text.into() })
}

pub fn Button(text: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    View::new(ViewKind::Button {
        text: text.into(),
        on_click: Some(Rc::new(on_click)),
    })
}

/// Text field whose displayed value is owned by the caller.
pub fn TextField(
    hint: impl Into<String>,
    value: impl Into<String>,
    on_change: impl Fn(ChangeEvent) + 'static,
) -> View {
    View::new(ViewKind::TextField {
        value: value.into(),
        hint: hint.into(),
        on_change: Some(Rc::new(on_change)),
    })
}

/// Text field driven by a [`InputBinding`] from `use_input`.
pub fn BoundTextField(hint: impl Into<String>, binding: &InputBinding) -> View {
    let on_change = binding.on_change.clone();
    TextField(hint, binding.value.clone(), move |e| on_change(e))
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);

/// Indented text outline of a tree, one view per line.
pub fn outline(view: &View) -> String {
    fn walk(view: &View, depth: usize, out: &mut Vec<String>) {
        let pad = "  ".repeat(depth);
        let line = match &view.kind {
            ViewKind::Column | ViewKind::Row | ViewKind::Divider => view.kind.name().to_string(),
            ViewKind::Heading { level, text } => format!("Heading({level}) \"{text}\""),
            ViewKind::Text { text } => format!("Text \"{text}\""),
            ViewKind::Button { text, .. } => format!("Button \"{text}\""),
            ViewKind::TextField { value, hint, .. } => format!("TextField [{hint}] \"{value}\""),
        };
        out.push(format!("{pad}{line}"));
        for child in &view.children {
            walk(child, depth + 1, out);
        }
    }

    let mut out = Vec::new();
    walk(view, 0, &mut out);
    out.join("\n")
}
