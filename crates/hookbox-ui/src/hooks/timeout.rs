use hookbox_core::timer;
use hookbox_core::*;
use web_time::Duration;

/// Run `job` once, `delay` after the first commit. Unmounting first cancels it.
pub fn use_timeout(delay: Duration, job: impl FnOnce() + 'static) {
    use_mount_effect(move || {
        let handle = timer::schedule(delay, job);
        on_unmount(move || {
            if handle.cancel() {
                log::debug!("use_timeout: cancelled before it fired");
            }
        })
    });
}
