use crate::constants::MAX_DEVICE_PIXEL_RATIO;
use crate::input::effective_dpr;
use site_core::{Bounds, ElementRect, LayoutProbe};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered DOM listener. Dropping it removes the listener again.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }

    /// Same as [`new`](Self::new) but registered as a passive listener.
    pub fn passive(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

#[inline]
pub fn on_window(kind: &'static str, handler: impl FnMut(web::Event) + 'static) -> Option<EventListener> {
    web::window().map(|w| EventListener::new(&w, kind, handler))
}

/// Click listener on the element with `element_id`, if present.
pub fn on_click_id(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> Option<EventListener> {
    let el = document.get_element_by_id(element_id)?;
    Some(EventListener::new(&el, "click", move |_| handler()))
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn viewport_size() -> Bounds {
    let Some(w) = web::window() else {
        return Bounds::default();
    };
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Bounds::new(dim(w.inner_width()), dim(w.inner_height()))
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    let raw = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    effective_dpr(raw, MAX_DEVICE_PIXEL_RATIO)
}

/// Size the backing store to CSS size x DPR and pin the CSS size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, css: Bounds, dpr: f64) {
    let w_px = (css.width as f64 * dpr) as u32;
    let h_px = (css.height as f64 * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", css.width));
    _ = style.set_property("height", &format!("{}px", css.height));
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

pub fn set_hidden(el: &web::Element, hidden: bool) {
    let cl = el.class_list();
    _ = if hidden {
        cl.add_1(crate::constants::HIDDEN_CLASS)
    } else {
        cl.remove_1(crate::constants::HIDDEN_CLASS)
    };
}

/// Viewport-relative geometry read from the live document.
pub struct DomProbe<'a>(pub &'a web::Document);

impl LayoutProbe for DomProbe<'_> {
    fn rect(&self, selector: &str) -> Option<ElementRect> {
        let el = self.0.query_selector(selector).ok().flatten()?;
        let r = el.get_bounding_client_rect();
        Some(ElementRect::new(r.top() as f32, r.height() as f32))
    }
}
