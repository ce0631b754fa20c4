use crate::ElementId;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("no button labelled or tagged '{0}'")]
    NoSuchButton(String),
    #[error("no text field with placeholder or tag '{0}'")]
    NoSuchInput(String),
    #[error("element {0:?} is not part of the committed tree")]
    NoSuchElement(ElementId),
    #[error("host is not mounted")]
    NotMounted,
    #[error("state did not settle after {0} passes")]
    Unsettled(usize),
}
