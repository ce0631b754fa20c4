pub use crate::effects::{Dispose, on_unmount};
pub use crate::effects_ext::{Lifecycle, use_effect, use_mount_effect};
pub use crate::elements::{ElementId, NodeRef, with_elements};
pub use crate::error::HostError;
pub use crate::input::{ChangeEvent, ClickHandler};
pub use crate::runtime::{Scheduler, remember, remember_state, remember_with_key};
pub use crate::scope::{Scope, current_scope};
pub use crate::signal::{Signal, signal};
pub use crate::timer::{Clock, ManualClock, SystemClock, TimerHandle};
pub use crate::title::{DocumentTitle, RecordingTitle, TitleSink};
pub use crate::view::{Callback, ChangeCallback, View, ViewKind};
