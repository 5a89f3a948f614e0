use crate::constants::*;
use crate::dom::{self, set_hidden};
use site_core::SiteState;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn show(document: &web::Document, id: &str, visible: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        set_hidden(&el, !visible);
        // fallback for environments without the CSS class
        _ = el.set_attribute("style", if visible { "" } else { "display:none" });
    }
}

/// Write every piece of [`SiteState`] into the document.
pub fn render(document: &web::Document, state: &SiteState) {
    render_image_modal(document, state);
    show(document, CONTACT_MODAL_ID, state.contact_open);
    render_tabs(document, state);
    show(document, BACK_TO_TOP_ID, state.back_to_top_visible);
}

fn render_image_modal(document: &web::Document, state: &SiteState) {
    let Some(modal) = &state.image_modal else {
        show(document, IMAGE_MODAL_ID, false);
        return;
    };
    show(document, IMAGE_MODAL_ID, true);
    if let Some(img) = document
        .get_element_by_id(IMAGE_MODAL_IMG_ID)
        .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
    {
        if img.src() != modal.src {
            img.set_src(&modal.src);
        }
    }
    let navigable = modal.can_navigate();
    show(document, IMAGE_MODAL_PREV_ID, navigable);
    show(document, IMAGE_MODAL_NEXT_ID, navigable);
}

fn render_tabs(document: &web::Document, state: &SiteState) {
    let current = state.qualification_tab.as_str();
    for el in dom::query_all(document, &format!("[{}]", TAB_ATTR)) {
        let cl = el.class_list();
        _ = if el.get_attribute(TAB_ATTR).as_deref() == Some(current) {
            cl.add_1(ACTIVE_CLASS)
        } else {
            cl.remove_1(ACTIVE_CLASS)
        };
    }
    for el in dom::query_all(document, &format!("[{}]", TAB_PANEL_ATTR)) {
        set_hidden(&el, el.get_attribute(TAB_PANEL_ATTR).as_deref() != Some(current));
    }
}
