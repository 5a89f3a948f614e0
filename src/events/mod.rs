mod keyboard;
mod pointer;

pub use keyboard::wire_modal_keydown;
pub use pointer::wire_pointer;

use crate::constants::*;
use crate::dom::{self, on_click_id, EventListener};
use crate::modal;
use site_core::{ImageModal, QualificationTab, SiteState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const MODAL_IMAGE_ATTR: &str = "data-modal-image";

/// The image set an image trigger belongs to, in document order. A trigger
/// without a set forms a set of one.
fn image_set_for(document: &web::Document, trigger: &web::Element) -> Vec<String> {
    let own = trigger.get_attribute(MODAL_IMAGE_ATTR).unwrap_or_default();
    let Some(set) = trigger.get_attribute(IMAGE_SET_ATTR) else {
        return vec![own];
    };
    dom::query_all(document, MODAL_IMAGE_SELECTOR)
        .into_iter()
        .filter(|el| el.get_attribute(IMAGE_SET_ATTR).as_deref() == Some(set.as_str()))
        .filter_map(|el| el.get_attribute(MODAL_IMAGE_ATTR))
        .collect()
}

/// Apply `update` to the shared state and re-render the modal surfaces.
fn with_state(
    document: &web::Document,
    state: &Rc<RefCell<SiteState>>,
    update: impl FnOnce(&mut SiteState),
) {
    update(&mut state.borrow_mut());
    modal::render(document, &state.borrow());
}

/// Click wiring for image triggers, modal buttons, qualification tabs, and
/// the back-to-top button.
pub fn wire_ui_clicks(
    document: &web::Document,
    state: &Rc<RefCell<SiteState>>,
) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    for trigger in dom::query_all(document, MODAL_IMAGE_SELECTOR) {
        let (doc, st) = (document.clone(), state.clone());
        let el = trigger.clone();
        listeners.push(EventListener::new(&trigger, "click", move |_| {
            let Some(src) = el.get_attribute(MODAL_IMAGE_ATTR) else {
                return;
            };
            let set = image_set_for(&doc, &el);
            log::debug!("[modal] open {} ({} in set)", src, set.len());
            with_state(&doc, &st, |s| s.open_image(ImageModal::new(src, set)));
        }));
    }

    let mut on_id = |id: &str, update: fn(&mut SiteState)| {
        let (doc, st) = (document.clone(), state.clone());
        if let Some(l) = on_click_id(document, id, move || with_state(&doc, &st, update)) {
            listeners.push(l);
        }
    };
    on_id(IMAGE_MODAL_CLOSE_ID, SiteState::close_image);
    on_id(IMAGE_MODAL_PREV_ID, |s| {
        s.on_modal_key(site_core::ModalKey::Previous);
    });
    on_id(IMAGE_MODAL_NEXT_ID, |s| {
        s.on_modal_key(site_core::ModalKey::Next);
    });
    on_id(CONTACT_CLOSE_ID, SiteState::close_contact);

    // Clicks on the backdrop itself close; clicks inside the content don't.
    for (id, close) in [
        (IMAGE_MODAL_ID, SiteState::close_image as fn(&mut SiteState)),
        (CONTACT_MODAL_ID, SiteState::close_contact),
    ] {
        let Some(backdrop) = document.get_element_by_id(id) else {
            continue;
        };
        let (doc, st) = (document.clone(), state.clone());
        listeners.push(EventListener::new(&backdrop, "click", move |ev| {
            if ev.target().is_some() && ev.target() == ev.current_target() {
                with_state(&doc, &st, close);
            }
        }));
    }

    for opener in dom::query_all(document, CONTACT_OPEN_SELECTOR) {
        let (doc, st) = (document.clone(), state.clone());
        listeners.push(EventListener::new(&opener, "click", move |_| {
            with_state(&doc, &st, SiteState::open_contact);
        }));
    }

    for tab in dom::query_all(document, &format!("[{}]", TAB_ATTR)) {
        let Some(kind) = tab.get_attribute(TAB_ATTR).and_then(|t| QualificationTab::parse(&t)) else {
            continue;
        };
        let (doc, st) = (document.clone(), state.clone());
        listeners.push(EventListener::new(&tab, "click", move |_| {
            if st.borrow_mut().set_tab(kind) {
                modal::render(&doc, &st.borrow());
            }
        }));
    }

    if let Some(l) = on_click_id(document, BACK_TO_TOP_ID, || {
        if let Some(w) = web::window() {
            w.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }) {
        listeners.push(l);
    }

    log::info!("[ui] {} click listeners", listeners.len());
    listeners
}
