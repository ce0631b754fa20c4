use std::rc::Rc;

use hookbox_core::*;

/// Predicate deciding whether a proposed value may be committed.
pub type Validator = Rc<dyn Fn(&str) -> bool>;

/// Value and change handler for a controlled text field.
#[derive(Clone)]
pub struct InputBinding {
    pub value: String,
    pub on_change: ChangeCallback,
}

impl std::fmt::Debug for InputBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputBinding")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// Controlled value store. Rejected changes are dropped silently, so the
/// field keeps showing the last accepted value.
pub fn use_input(initial: impl Into<String>, validator: Option<Validator>) -> InputBinding {
    let value = remember(|| signal(initial.into()));

    let on_change: ChangeCallback = {
        let value = (*value).clone();
        Rc::new(move |event: ChangeEvent| {
            let accept = validator.as_ref().is_none_or(|v| v(&event.value));
            if accept {
                value.set(event.value);
            } else {
                log::debug!("use_input: rejected {:?}", event.value);
            }
        })
    };

    InputBinding {
        value: value.get(),
        on_change,
    }
}

/// Rejects any value containing `forbidden`.
pub fn forbid_char(forbidden: char) -> Validator {
    Rc::new(move |v: &str| !v.contains(forbidden))
}

/// Rejects values longer than `max` characters.
pub fn max_len(max: usize) -> Validator {
    Rc::new(move |v: &str| v.chars().count() <= max)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{BoundTextField, Host};

    fn mount(validator: Option<Validator>) -> Host<impl FnMut() -> View> {
        let mut host = Host::new(move || {
            let name = use_input("Mr.", validator.clone());
            BoundTextField("Name", &name)
        });
        host.mount().unwrap();
        host
    }

    fn shown(host: &Host<impl FnMut() -> View>) -> String {
        host.view().and_then(|v| v.text()).unwrap_or_default().to_string()
    }

    #[test]
    fn accepts_values_without_the_marker() {
        let mut host = mount(Some(forbid_char('@')));
        assert_eq!(shown(&host), "Mr.");
        for s in ["Mr. Kim", "", "a.b-c", "José"] {
            host.input("Name", s).unwrap();
            assert_eq!(shown(&host), s);
        }
    }

    #[test]
    fn rejects_values_with_the_marker() {
        let mut host = mount(Some(forbid_char('@')));
        host.input("Name", "Mr. Lee").unwrap();
        for s in ["@", "me@example.com", "Mr. Lee@"] {
            host.input("Name", s).unwrap();
            assert_eq!(shown(&host), "Mr. Lee");
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// A value is shown iff it has no '@'; otherwise the field keeps "Mr.".
        #[test]
        fn forbid_char_decides_every_value(
            s in prop_oneof!["\\PC{0,24}", "[a-zA-Z@. ]{0,16}"]
        ) {
            let mut host = mount(Some(forbid_char('@')));
            host.input("Name", &s).unwrap();
            let expected = if s.contains('@') { "Mr." } else { s.as_str() };
            prop_assert_eq!(shown(&host), expected);
        }
    }

    #[test]
    fn no_validator_accepts_everything() {
        let mut host = mount(None);
        host.input("Name", "x@y").unwrap();
        assert_eq!(shown(&host), "x@y");
    }

    #[test]
    fn max_len_counts_chars() {
        let v = max_len(3);
        assert!(v("abc"));
        assert!(v("äöü"));
        assert!(!v("abcd"));
    }

    #[test]
    fn missing_field_is_reported() {
        let mut host = mount(None);
        assert!(matches!(
            host.input("Email", "x"),
            Err(HostError::NoSuchInput(q)) if q == "Email"
        ));
    }
}
