#![allow(non_snake_case)]
//! The hooks demo: one page, one region per utility.

pub mod config;

use std::rc::Rc;

use hookbox_core::*;
use hookbox_ui::*;

pub use config::AppConfig;

/// Capabilities the page needs from whoever hosts it.
#[derive(Clone)]
pub struct AppEnv {
    pub title: Rc<dyn TitleSink>,
    /// Shows a short acknowledgment to the user.
    pub alert: Rc<dyn Fn(&str)>,
}

impl Default for AppEnv {
    fn default() -> Self {
        Self {
            title: Rc::new(DocumentTitle),
            alert: Rc::new(|msg: &str| log::info!("alert: {msg}")),
        }
    }
}

pub fn sections() -> Vec<TabItem> {
    vec![
        TabItem::new("Section 1", "I'm the content of the Section 1"),
        TabItem::new("Section 2", "I'm the content of the Section 2"),
    ]
}

fn Region(title: &str, body: impl IntoChildren) -> View {
    let mut children = vec![Heading(2, title)];
    children.extend(body.into_children());
    Column().with_children(children)
}

pub fn App(env: &AppEnv, config: &AppConfig) -> View {
    // useState
    let item = remember(|| signal(config.initial_count));

    // useInput
    let name = use_input(
        config.name_default.clone(),
        Some(forbid_char(config.forbidden)),
    );

    // useTabs
    let content = sections();
    let tabs = use_tabs(0, Some(content.as_slice()));

    // useEffect
    let a_number = remember(|| signal(0i32));
    let b_number = remember(|| signal(0i32));
    {
        let alert = env.alert.clone();
        use_effect(a_number.get(), move || {
            alert("Hello");
            Dispose::none()
        });
    }

    // useTitle
    let title_updater = use_title(env.title.clone(), config.initial_title.clone());
    {
        let settled = config.settled_title.clone();
        use_timeout(config.title_delay, move || title_updater.set(settled));
    }

    // useClick
    let say_hi = "123";
    let title = use_click(say_hi);

    let tab_buttons: Vec<View> = content
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let tabs = tabs.clone();
            Button(value.tab.clone(), move || {
                if let Some(tabs) = &tabs {
                    tabs.change_item(index);
                }
            })
        })
        .collect();
    let current_content = tabs
        .as_ref()
        .and_then(|t| t.current_item())
        .map(|i| i.content.clone())
        .unwrap_or_default();

    Column().with_children(vec![
        Heading(1, "Practical Hooks"),
        Divider(),
        Region(
            "useState",
            (
                Heading(3, item.get().to_string()).tag("item"),
                Button("increment", {
                    let item = item.clone();
                    move || item.update(|v| *v += 1)
                })
                .tag("increment"),
                Button("decrement", {
                    let item = item.clone();
                    move || item.update(|v| *v -= 1)
                })
                .tag("decrement"),
            ),
        ),
        Divider(),
        Region("useInput", Heading(3, "").child(BoundTextField("Name", &name))),
        Divider(),
        Region(
            "useTabs",
            (
                Row().child(tab_buttons),
                Text(current_content).tag("tab-content"),
            ),
        ),
        Divider(),
        Region(
            "useEffect",
            (
                Button(a_number.get().to_string(), {
                    let a = a_number.clone();
                    move || a.update(|v| *v += 1)
                })
                .tag("a"),
                Button(b_number.get().to_string(), {
                    let b = b_number.clone();
                    move || b.update(|v| *v += 1)
                })
                .tag("b"),
            ),
        ),
        Divider(),
        Region(
            "useTitle",
            Heading(
                3,
                format!(
                    "Title reads {} and becomes {} after {:?}",
                    config.initial_title, config.settled_title, config.title_delay
                ),
            ),
        ),
        Divider(),
        Region("useClick", Heading(3, "Hi").node_ref(&title).tag("hi")),
    ])
}

#[cfg(test)]
mod tests;
