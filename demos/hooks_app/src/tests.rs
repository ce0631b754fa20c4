use std::cell::RefCell;
use std::rc::Rc;

use hookbox_core::timer;
use hookbox_core::*;
use hookbox_ui::Host;
use proptest::prelude::*;
use web_time::Duration;

use crate::{App, AppConfig, AppEnv};

struct Harness {
    host: Host<Box<dyn FnMut() -> View>>,
    title: Rc<RecordingTitle>,
    alerts: Rc<RefCell<Vec<String>>>,
    clock: ManualClock,
}

impl Harness {
    fn mount() -> Self {
        let clock = ManualClock::new();
        timer::set_clock(Rc::new(clock.clone()));

        let title = Rc::new(RecordingTitle::new());
        let alerts = Rc::new(RefCell::new(Vec::new()));
        let env = AppEnv {
            title: title.clone(),
            alert: {
                let alerts = alerts.clone();
                Rc::new(move |msg: &str| alerts.borrow_mut().push(msg.to_string()))
            },
        };
        let config = AppConfig::default();

        let build: Box<dyn FnMut() -> View> = Box::new(move || App(&env, &config));
        let mut host = Host::new(build);
        host.mount().unwrap();
        Self {
            host,
            title,
            alerts,
            clock,
        }
    }

    fn text(&self, tag: &str) -> String {
        self.host
            .view()
            .and_then(|v| v.find(&|c| c.tag.as_deref() == Some(tag)))
            .and_then(|v| v.text())
            .unwrap_or_default()
            .to_string()
    }

    fn name(&self) -> String {
        self.host
            .view()
            .and_then(|v| v.find(&|c| matches!(c.kind, ViewKind::TextField { .. })))
            .and_then(|v| v.text())
            .unwrap_or_default()
            .to_string()
    }

    fn advance(&mut self, ms: u64) {
        self.host
            .advance(&self.clock, Duration::from_millis(ms))
            .unwrap();
    }
}

#[test]
fn initial_page() {
    let h = Harness::mount();
    insta::assert_snapshot!(h.host.dump(), @r#"
    Column
      Heading(1) "Practical Hooks"
      Divider
      Column
        Heading(2) "useState"
        Heading(3) "1"
        Button "increment"
        Button "decrement"
      Divider
      Column
        Heading(2) "useInput"
        Heading(3) ""
          TextField [Name] "Mr."
      Divider
      Column
        Heading(2) "useTabs"
        Row
          Button "Section 1"
          Button "Section 2"
        Text "I'm the content of the Section 1"
      Divider
      Column
        Heading(2) "useEffect"
        Button "0"
        Button "0"
      Divider
      Column
        Heading(2) "useTitle"
        Heading(3) "Title reads Loading... and becomes Home after 5s"
      Divider
      Column
        Heading(2) "useClick"
        Heading(3) "Hi"
    "#);
}

#[test]
fn counter_round_trip() {
    let mut h = Harness::mount();
    assert_eq!(h.text("item"), "1");
    h.host.click_button("increment").unwrap();
    assert_eq!(h.text("item"), "2");
    h.host.click_button("decrement").unwrap();
    assert_eq!(h.text("item"), "1");
}

#[test]
fn name_rejects_the_at_sign() {
    let mut h = Harness::mount();
    assert_eq!(h.name(), "Mr.");
    h.host.input("Name", "Mr. Kim").unwrap();
    assert_eq!(h.name(), "Mr. Kim");
    h.host.input("Name", "kim@example.com").unwrap();
    assert_eq!(h.name(), "Mr. Kim");
}

#[test]
fn second_section_shows_its_content() {
    let mut h = Harness::mount();
    h.host.click_button("Section 2").unwrap();
    assert_eq!(h.text("tab-content"), "I'm the content of the Section 2");
    h.host.click_button("Section 1").unwrap();
    assert_eq!(h.text("tab-content"), "I'm the content of the Section 1");
}

#[test]
fn counters_are_independent_and_only_a_is_acknowledged() {
    let mut h = Harness::mount();
    assert_eq!(*h.alerts.borrow(), vec!["Hello"]);

    h.host.click_button("b").unwrap();
    h.host.click_button("b").unwrap();
    assert_eq!(h.text("a"), "0");
    assert_eq!(h.text("b"), "2");
    assert_eq!(h.alerts.borrow().len(), 1);

    h.host.click_button("a").unwrap();
    assert_eq!(h.text("a"), "1");
    assert_eq!(h.text("b"), "2");
    assert_eq!(*h.alerts.borrow(), vec!["Hello", "Hello"]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Any interleaving of clicks: each counter counts only its own button,
    /// and only `a` changes are acknowledged.
    #[test]
    fn counters_track_only_their_own_clicks(clicks in prop::collection::vec(any::<bool>(), 0..16)) {
        let mut h = Harness::mount();
        let (mut a, mut b) = (0, 0);
        for is_a in clicks {
            if is_a {
                h.host.click_button("a").unwrap();
                a += 1;
            } else {
                h.host.click_button("b").unwrap();
                b += 1;
            }
            prop_assert_eq!(h.text("a"), a.to_string());
            prop_assert_eq!(h.text("b"), b.to_string());
            prop_assert_eq!(h.alerts.borrow().len(), 1 + a);
        }
    }
}

#[test]
fn title_settles_after_delay() {
    let mut h = Harness::mount();
    assert_eq!(h.title.history(), vec!["Loading..."]);

    h.advance(4_999);
    assert_eq!(h.title.history(), vec!["Loading..."]);

    h.advance(1);
    assert_eq!(h.title.history(), vec!["Loading...", "Home"]);

    // Unrelated updates do not rewrite the title.
    h.host.click_button("increment").unwrap();
    h.advance(10_000);
    assert_eq!(h.title.history(), vec!["Loading...", "Home"]);
}

#[test]
fn unmount_before_delay_cancels_title_change() {
    let mut h = Harness::mount();
    assert_eq!(timer::pending_timers(), 1);
    h.host.unmount();
    assert_eq!(timer::pending_timers(), 0);

    h.clock.advance(Duration::from_secs(10));
    assert_eq!(timer::fire_due(), 0);
    assert_eq!(h.title.history(), vec!["Loading..."]);
    assert!(matches!(h.host.tick(), Err(HostError::NotMounted)));
}

#[test]
fn hi_heading_has_no_click_listener() {
    let mut h = Harness::mount();
    let hi = h
        .host
        .view()
        .and_then(|v| v.find(&|c| c.tag.as_deref() == Some("hi")))
        .and_then(|v| v.element)
        .unwrap();
    assert_eq!(with_elements(|t| t.listener_count(hi)), 0);
    assert_eq!(h.host.click_element(hi).unwrap(), 0);
}

#[test]
fn unknown_button_is_an_error() {
    let mut h = Harness::mount();
    assert!(matches!(
        h.host.click_button("reset"),
        Err(HostError::NoSuchButton(q)) if q == "reset"
    ));
}
