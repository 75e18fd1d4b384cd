//! Leptos DragDrop Utilities
//!
//! Handler builders for native HTML5 drag-and-drop on list rows.
//! A row becomes `draggable` only after a pointer goes down on it; the
//! browser then fires dragstart/dragenter/dragend, which are turned into
//! `DragSignal`s for the owner of the ordering state.

use wasm_bindgen::JsCast;

/// Drag lifecycle signals for one row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragSignal {
    /// Pointer down on a row: make it draggable
    Arm(u32),
    /// Pointer released without dragging
    Disarm,
    /// Browser started dragging the row
    Start(u32),
    /// Dragged pointer entered another row
    Enter(u32),
    /// Dropped anywhere inside the list
    Drop,
    /// Drag finished or was cancelled
    End,
}

/// Drag effect advertised to the browser
const DRAG_EFFECT: &str = "move";

/// Some browsers refuse to start a drag with an empty data transfer
const DRAG_DATA_FORMAT: &str = "text/plain";

/// Controls inside a row keep their own pointer behavior
fn is_control_target(ev: &web_sys::Event) -> bool {
    match ev.target() {
        Some(target) => {
            target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
        }
        None => false,
    }
}

/// Create mousedown handler: arms the row with the primary button
pub fn make_on_mousedown<F>(
    item_id: u32,
    on_signal: F,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    F: Fn(DragSignal) + Copy + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 && !is_control_target(&ev) {
            on_signal(DragSignal::Arm(item_id));
        }
    }
}

/// Create touchstart handler: arms the row for touch drags
pub fn make_on_touchstart<F>(
    item_id: u32,
    on_signal: F,
) -> impl Fn(web_sys::TouchEvent) + Copy + 'static
where
    F: Fn(DragSignal) + Copy + 'static,
{
    move |ev: web_sys::TouchEvent| {
        if !is_control_target(&ev) {
            on_signal(DragSignal::Arm(item_id));
        }
    }
}

/// Create mouseup handler: a click that never became a drag
pub fn make_on_mouseup<F>(on_signal: F) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    F: Fn(DragSignal) + Copy + 'static,
{
    move |_ev: web_sys::MouseEvent| on_signal(DragSignal::Disarm)
}

/// Create touchend handler: the finger lifted before a drag began
pub fn make_on_touchend<F>(on_signal: F) -> impl Fn(web_sys::TouchEvent) + Copy + 'static
where
    F: Fn(DragSignal) + Copy + 'static,
{
    move |_ev: web_sys::TouchEvent| on_signal(DragSignal::Disarm)
}

/// Create touchcancel handler: the browser took over the gesture (scroll, zoom)
pub fn make_on_touchcancel<F>(on_signal: F) -> impl Fn(web_sys::TouchEvent) + Copy + 'static
where
    F: Fn(DragSignal) + Copy + 'static,
{
    move |_ev: web_sys::TouchEvent| on_signal(DragSignal::Disarm)
}

/// Bind a document-level mouseup that disarms the section.
///
/// Catches buttons released outside the row that was pressed, where the
/// row's own mouseup never fires. Disarm is ignored while a drag is active,
/// so this does not interfere with dragend.
pub fn bind_global_mouseup<F>(on_signal: F)
where
    F: Fn(DragSignal) + Copy + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup =
        Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
            on_signal(DragSignal::Disarm);
        });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc
                .add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();
}

/// Create dragstart handler
pub fn make_on_dragstart<F>(
    item_id: u32,
    on_signal: F,
) -> impl Fn(web_sys::DragEvent) + Copy + 'static
where
    F: Fn(DragSignal) + Copy + 'static,
{
    move |ev: web_sys::DragEvent| {
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_effect_allowed(DRAG_EFFECT);
            let _ = transfer.set_data(DRAG_DATA_FORMAT, &item_id.to_string());
        }
        on_signal(DragSignal::Start(item_id));
    }
}

/// Create dragenter handler for a row
pub fn make_on_dragenter<F>(
    item_id: u32,
    on_signal: F,
) -> impl Fn(web_sys::DragEvent) + Copy + 'static
where
    F: Fn(DragSignal) + Copy + 'static,
{
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        on_signal(DragSignal::Enter(item_id));
    }
}

/// Create dragover handler: cancelling it is what allows a drop
pub fn make_on_dragover() -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_drop_effect(DRAG_EFFECT);
        }
    }
}

/// Create drop handler: suppresses the browser default (e.g. navigating to dropped text)
pub fn make_on_drop<F>(on_signal: F) -> impl Fn(web_sys::DragEvent) + Copy + 'static
where
    F: Fn(DragSignal) + Copy + 'static,
{
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        on_signal(DragSignal::Drop);
    }
}

/// Create dragend handler, fired on drop and on cancel
pub fn make_on_dragend<F>(on_signal: F) -> impl Fn(web_sys::DragEvent) + Copy + 'static
where
    F: Fn(DragSignal) + Copy + 'static,
{
    move |_ev: web_sys::DragEvent| on_signal(DragSignal::End)
}

/// `draggable` attribute value for a row
pub fn draggable_attr(draggable: bool) -> &'static str {
    if draggable {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draggable_attr() {
        assert_eq!(draggable_attr(true), "true");
        assert_eq!(draggable_attr(false), "false");
    }
}
