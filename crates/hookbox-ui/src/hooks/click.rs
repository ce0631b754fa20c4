use hookbox_core::*;

/// Returns a handle to attach to a view with `.node_ref(..)`. After the
/// first commit the handler is registered as a click listener on that
/// element, and it is unregistered exactly once on unmount.
///
/// Wiring happens once per mount: a handler passed on a later pass is not
/// picked up. An inert handler wires nothing.
pub fn use_click(handler: impl Into<ClickHandler>) -> NodeRef {
    let node = remember(NodeRef::new);
    let handler = handler.into();
    let target = (*node).clone();

    use_mount_effect(move || {
        let callback = match handler {
            ClickHandler::Invoke(callback) => callback,
            ClickHandler::Inert(value) => {
                log::debug!("use_click: {value:?} is not invocable; nothing wired");
                return Dispose::none();
            }
        };
        let Some(element) = target.current() else {
            log::debug!("use_click: handle was never attached to a view");
            return Dispose::none();
        };
        let Some(listener) = with_elements(|t| t.add_click_listener(element, callback)) else {
            return Dispose::none();
        };
        on_unmount(move || {
            with_elements(|t| t.remove_click_listener(element, listener));
        })
    });

    (*node).clone()
}
