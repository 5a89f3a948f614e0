use crate::dom::EventListener;
use crate::modal;
use site_core::ui::modal_key;
use site_core::SiteState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Arrow keys step through the open image set, Escape closes it.
pub fn handle_modal_keydown(
    ev: &web::KeyboardEvent,
    state: &Rc<RefCell<SiteState>>,
    document: &web::Document,
) {
    if state.borrow().image_modal.is_none() {
        return;
    }
    let Some(key) = modal_key(&ev.key()) else {
        return;
    };
    let changed = state.borrow_mut().on_modal_key(key);
    if changed {
        log::debug!("[keys] modal {:?}", key);
        modal::render(document, &state.borrow());
        ev.prevent_default();
    }
}

pub fn wire_modal_keydown(
    document: &web::Document,
    state: &Rc<RefCell<SiteState>>,
) -> Option<EventListener> {
    let window = web::window()?;
    let state = state.clone();
    let document = document.clone();
    Some(EventListener::new(&window, "keydown", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() {
            handle_modal_keydown(ev, &state, &document);
        }
    }))
}
