//! Hook-style state utilities built on `remember`, `Signal` and `use_effect`.
//!
//! Like `remember`, each of these claims composition slots in call order, so
//! they must be called unconditionally and in the same order on every pass.

mod click;
mod input;
mod tabs;
mod timeout;
mod title;

pub use click::use_click;
pub use input::{InputBinding, Validator, forbid_char, max_len, use_input};
pub use tabs::{TabItem, Tabs, use_tabs};
pub use timeout::use_timeout;
pub use title::{TitleSetter, use_title};
