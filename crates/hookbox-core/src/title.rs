use std::cell::RefCell;

use parking_lot::Mutex;

/// Where the displayed document title lives.
///
/// Writers go through this capability instead of touching a global, so a
/// view can be mounted against a recording sink in tests.
pub trait TitleSink {
    fn write_title(&self, title: &str);
    fn title(&self) -> String;
}

static DOCUMENT_TITLE: Mutex<String> = parking_lot::const_mutex(String::new());

/// The process-wide title slot. Last writer wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentTitle;

impl TitleSink for DocumentTitle {
    fn write_title(&self, title: &str) {
        let mut slot = DOCUMENT_TITLE.lock();
        slot.clear();
        slot.push_str(title);
        log::info!("document title: {title}");
    }

    fn title(&self) -> String {
        DOCUMENT_TITLE.lock().clone()
    }
}

/// In-memory sink that keeps every write.
#[derive(Debug, Default)]
pub struct RecordingTitle {
    writes: RefCell<Vec<String>>,
}

impl RecordingTitle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl TitleSink for RecordingTitle {
    fn write_title(&self, title: &str) {
        self.writes.borrow_mut().push(title.to_string());
    }

    fn title(&self) -> String {
        self.writes.borrow().last().cloned().unwrap_or_default()
    }
}
