use std::cell::RefCell;
use std::rc::Rc;

use hookbox_core::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabItem {
    pub tab: String,
    pub content: String,
}

impl TabItem {
    pub fn new(tab: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tab: tab.into(),
            content: content.into(),
        }
    }
}

/// Active index over a fixed list of items.
#[derive(Clone)]
pub struct Tabs {
    index: Signal<usize>,
    items: Rc<[TabItem]>,
}

impl Tabs {
    pub fn current_index(&self) -> usize {
        self.index.get()
    }

    /// The item at the current index. The index is never range-checked on
    /// write, so this is `None` if the caller moved it past the end.
    pub fn current_item(&self) -> Option<&TabItem> {
        self.items.get(self.index.get())
    }

    /// Replace the current index. No bounds check.
    pub fn change_item(&self, index: usize) {
        self.index.set(index);
    }

    /// `change_item` as a standalone callback.
    pub fn changer(&self) -> impl Fn(usize) + 'static {
        let index = self.index.clone();
        move |i| index.set(i)
    }

    pub fn items(&self) -> &[TabItem] {
        &self.items
    }
}

impl std::fmt::Debug for Tabs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tabs")
            .field("index", &self.index.get())
            .field("items", &self.items.len())
            .finish()
    }
}

/// Tab selection store. `None` when there are no items to select from.
///
/// The list seen on the first composition is kept for the life of the
/// instance; later lists are ignored.
pub fn use_tabs(initial: usize, items: Option<&[TabItem]>) -> Option<Tabs> {
    let index = remember(|| signal(initial));
    let captured = remember(|| RefCell::new(None::<Rc<[TabItem]>>));

    let items = items?;
    let items = captured
        .borrow_mut()
        .get_or_insert_with(|| Rc::from(items))
        .clone();

    Some(Tabs {
        index: (*index).clone(),
        items,
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{Button, Column, Host, Row, Text, ViewExt};

    fn sections() -> Vec<TabItem> {
        vec![
            TabItem::new("Section 1", "first"),
            TabItem::new("Section 2", "second"),
            TabItem::new("Section 3", "third"),
        ]
    }

    fn tabs_view(items: Option<Vec<TabItem>>) -> View {
        let tabs = use_tabs(0, items.as_deref());
        let Some(tabs) = tabs else {
            return Text("no tabs");
        };
        let buttons: Vec<View> = tabs
            .items()
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let change = tabs.changer();
                Button(item.tab.clone(), move || change(i))
            })
            .collect();
        let content = tabs
            .current_item()
            .map(|item| item.content.clone())
            .unwrap_or_default();
        Column().child((Row().child(buttons), Text(content).tag("content")))
    }

    fn content(host: &Host<impl FnMut() -> View>) -> String {
        host.view()
            .and_then(|v| v.find(&|c| c.tag.as_deref() == Some("content")))
            .and_then(|v| v.text())
            .unwrap_or_default()
            .to_string()
    }

    #[test]
    fn change_item_selects_every_index() {
        let mut host = Host::new(|| tabs_view(Some(sections())));
        host.mount().unwrap();
        assert_eq!(content(&host), "first");

        for (label, expected) in [
            ("Section 3", "third"),
            ("Section 2", "second"),
            ("Section 2", "second"),
            ("Section 1", "first"),
        ] {
            host.click_button(label).unwrap();
            assert_eq!(content(&host), expected);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        /// Selecting index k always shows item k, however often it is repeated.
        #[test]
        fn change_item_shows_the_selected_item(
            (n, picks) in (1usize..8).prop_flat_map(|n| (Just(n), prop::collection::vec(0..n, 1..12)))
        ) {
            let items: Vec<TabItem> = (0..n)
                .map(|i| TabItem::new(format!("Tab {i}"), format!("content {i}")))
                .collect();
            let mut host = {
                let items = items.clone();
                Host::new(move || tabs_view(Some(items.clone())))
            };
            host.mount().unwrap();

            for k in picks {
                for _ in 0..2 {
                    host.click_button(&items[k].tab).unwrap();
                    prop_assert_eq!(content(&host), items[k].content.clone());
                }
            }
        }
    }

    #[test]
    fn second_item_after_change_item_one() {
        let mut s = Scheduler::new();
        let items = [
            TabItem::new("A", "a"),
            TabItem::new("B", "I'm the content of B"),
        ];
        let mut tabs = None;
        s.compose(|| {
            tabs = use_tabs(0, Some(&items[..]));
            Column()
        });
        let tabs = tabs.unwrap();
        tabs.change_item(1);
        assert_eq!(tabs.current_item().unwrap().content, "I'm the content of B");
        tabs.change_item(1);
        assert_eq!(tabs.current_index(), 1);
        s.unmount();
    }

    #[test]
    fn missing_items_yield_nothing() {
        let mut host = Host::new(|| tabs_view(None));
        host.mount().unwrap();
        assert_eq!(host.dump(), "Text \"no tabs\"");
    }

    #[test]
    fn out_of_range_index_has_no_current_item() {
        let mut s = Scheduler::new();
        let items = [TabItem::new("A", "a")];
        let mut tabs = None;
        s.compose(|| {
            tabs = use_tabs(0, Some(&items[..]));
            Column()
        });
        let tabs = tabs.unwrap();
        tabs.change_item(5);
        assert_eq!(tabs.current_index(), 5);
        assert!(tabs.current_item().is_none());
        s.unmount();
    }

    #[test]
    fn item_list_is_fixed_after_first_composition() {
        let mut s = Scheduler::new();
        let first = [TabItem::new("A", "a")];
        let second = [TabItem::new("B", "b"), TabItem::new("C", "c")];

        let mut seen = None;
        s.compose(|| {
            seen = use_tabs(0, Some(&first[..]));
            Column()
        });
        s.compose(|| {
            seen = use_tabs(0, Some(&second[..]));
            Column()
        });
        assert_eq!(seen.unwrap().items(), &first);
        s.unmount();
    }
}
