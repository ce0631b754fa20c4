use std::rc::Rc;

use hookbox_core::*;

/// Write-only handle to the title owned by `use_title`.
#[derive(Clone)]
pub struct TitleSetter(Signal<String>);

impl TitleSetter {
    pub fn set(&self, title: impl Into<String>) {
        self.0.set(title.into());
    }
}

/// Keep `sink` in step with a title owned by this call site. The sink is
/// written after the first commit and after every commit that changed the
/// title.
pub fn use_title(sink: Rc<dyn TitleSink>, initial: impl Into<String>) -> TitleSetter {
    let title = remember(|| signal(initial.into()));

    let current = title.get();
    use_effect(current.clone(), move || {
        sink.write_title(&current);
        Dispose::none()
    });

    TitleSetter((*title).clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Button, Host};

    #[test]
    fn sink_follows_committed_title() {
        let sink = Rc::new(RecordingTitle::new());
        let mut host = Host::new({
            let sink = sink.clone();
            move || {
                let set_title = use_title(sink.clone(), "Loading...");
                Button("go", move || set_title.set("Home"))
            }
        });

        host.mount().unwrap();
        assert_eq!(sink.history(), vec!["Loading..."]);

        host.click_button("go").unwrap();
        assert_eq!(sink.title(), "Home");

        // Same title again: no extra write.
        host.click_button("go").unwrap();
        assert_eq!(sink.history(), vec!["Loading...", "Home"]);
    }

    #[test]
    fn nothing_written_before_commit() {
        let sink = Rc::new(RecordingTitle::new());
        let mut s = Scheduler::new();
        s.compose(|| {
            use_title(sink.clone(), "draft");
            crate::Column()
        });
        assert!(sink.history().is_empty());
        s.flush_effects();
        assert_eq!(sink.history(), vec!["draft"]);
        s.unmount();
    }
}
