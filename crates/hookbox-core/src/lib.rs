//! # State, Effects, and Lifecycles
//!
//! Hookbox is a small slot-based composition runtime. A view function is
//! re-run ("recomposed") whenever state it owns changes, and the state
//! utilities built on top of it read like hooks:
//!
//! - `Signal<T>`: shared, observable value. Writing it requests a recompose.
//! - `remember*`: storage bound to a call position in the composition.
//! - `use_effect`: keyed side-effect that runs after commit, with cleanup.
//!
//! ## Signals
//!
//! ```rust
//! use hookbox_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! ## Remembered state
//!
//! `remember` is order-based: the Nth call in a composition always refers to
//! the Nth stored value, so calls must not be made conditionally. Use
//! `remember_with_key` when a slot has to survive branches.
//!
//! ```rust
//! use hookbox_core::*;
//!
//! fn counter() -> View {
//!     let count = remember(|| signal(0));
//!     View::new(ViewKind::Text {
//!         text: format!("Count = {}", count.get()),
//!     })
//! }
//! ```
//!
//! ## Effects and lifecycle
//!
//! `use_effect(key, f)` queues `f` to run after the tree has been committed,
//! on the first composition and again whenever `key` changes. The `Dispose`
//! returned by `f` runs before the next run and once more when the owning
//! scope is torn down:
//!
//! ```rust
//! use hookbox_core::*;
//!
//! fn greeter(name: String) -> View {
//!     use_effect(name.clone(), move || {
//!         log::info!("hello {name}");
//!         on_unmount(|| log::info!("bye"))
//!     });
//!     View::new(ViewKind::Column)
//! }
//! ```
//!
//! Hosts drive this through `Scheduler`: compose, commit, `flush_effects`,
//! and `unmount` when the view goes away.

pub mod effects;
pub mod effects_ext;
pub mod elements;
pub mod error;
pub mod input;
pub mod prelude;
pub mod runtime;
pub mod scope;
pub mod signal;
pub mod timer;
pub mod title;
pub mod view;

pub use effects::*;
pub use effects_ext::*;
pub use elements::*;
pub use error::*;
pub use input::*;
pub use prelude::*;
pub use runtime::*;
pub use signal::*;
pub use timer::*;
pub use title::*;
pub use view::*;
