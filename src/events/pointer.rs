use crate::dom::EventListener;
use crate::input::PointerState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the hovering pointer for the orbit ring. Touch pointers never count
/// as hovering; leaving the page or blurring the window clears the position.
pub fn wire_pointer(pointer: &Rc<RefCell<PointerState>>) -> Vec<EventListener> {
    let Some(window) = web::window() else {
        return Vec::new();
    };
    let mut listeners = Vec::with_capacity(3);

    let p = pointer.clone();
    listeners.push(EventListener::passive(&window, "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        p.borrow_mut()
            .hover(ev.client_x() as f32, ev.client_y() as f32, &ev.pointer_type());
    }));

    // Leaving the page fires `pointerout` with no related target
    let p = pointer.clone();
    listeners.push(EventListener::passive(&window, "pointerout", move |ev| {
        let left_page = ev
            .dyn_ref::<web::PointerEvent>()
            .is_some_and(|ev| ev.related_target().is_none());
        if left_page {
            p.borrow_mut().leave();
        }
    }));

    let p = pointer.clone();
    listeners.push(EventListener::new(&window, "blur", move |_| {
        p.borrow_mut().leave()
    }));

    listeners
}
