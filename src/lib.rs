#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::dom::EventListener;
use crate::field::{FieldScope, ParticleSurface};
use crate::frame::AnimationLoop;
use crate::input::PointerState;
use crate::orbit::OrbitSurface;
use crate::scroll::{ScrollDriver, ScrollEngine};
use site_core::{OrbitConfig, ParticleFieldConfig, SiteState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod camera;
mod constants;
mod dom;
mod events;
mod field;
mod frame;
mod input;
mod modal;
mod orbit;
mod scroll;
mod style;

/// Everything the page frame keeps alive. Dropping it stops every loop and
/// removes every listener.
#[derive(Default)]
struct Site {
    loops: Vec<AnimationLoop>,
    listeners: Vec<EventListener>,
    scroll: Option<ScrollDriver>,
}

impl Site {
    fn stop(&mut self) {
        let running = self.loops.iter().filter(|l| l.is_running()).count();
        log::info!("[site] stopping {} running loops", running);
        for l in &self.loops {
            l.stop();
        }
        self.loops.clear();
        self.listeners.clear();
        if let Some(mut s) = self.scroll.take() {
            s.stop();
        }
    }
}

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    let canvas = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    if canvas.is_none() {
        log::warn!("[site] #{} missing, layer disabled", id);
    }
    canvas
}

fn mount_particles(
    site: &mut Site,
    document: &web::Document,
    label: &'static str,
    canvas_id: &str,
    config: ParticleFieldConfig,
    scope: FieldScope,
) {
    let Some(canvas) = canvas_by_id(document, canvas_id) else {
        return;
    };
    let surface = Rc::new(RefCell::new(ParticleSurface::new(label, canvas, config, scope)));
    let resized = surface.clone();
    if let Some(l) = dom::on_window("resize", move |_| resized.borrow_mut().resize()) {
        site.listeners.push(l);
    }
    site.loops.push(AnimationLoop::start(label, surface));
}

fn mount_orbit(site: &mut Site, document: &web::Document) {
    let Some(canvas) = canvas_by_id(document, ORBIT_CANVAS_ID) else {
        return;
    };
    let pointer = Rc::new(RefCell::new(PointerState::default()));
    site.listeners.extend(events::wire_pointer(&pointer));
    let surface = Rc::new(RefCell::new(OrbitSurface::new(
        canvas,
        OrbitConfig::portal(),
        pointer,
    )));
    let resized = surface.clone();
    if let Some(l) = dom::on_window("resize", move |_| resized.borrow_mut().resize()) {
        site.listeners.push(l);
    }
    site.loops.push(AnimationLoop::start("orbit", surface));
}

/// Wait for web fonts so the first glyph frame measures the final face.
async fn fonts_ready(document: &web::Document) {
    let Ok(ready) = document.fonts().ready() else {
        return;
    };
    if let Err(e) = JsFuture::from(ready).await {
        log::warn!("[site] fonts not ready: {:?}", e);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if SITE.with(|s| s.borrow().is_some()) {
        log::warn!("[site] already started");
        return Ok(());
    }

    let mut site = Site::default();
    mount_particles(
        &mut site,
        &document,
        "starfield",
        STARFIELD_CANVAS_ID,
        ParticleFieldConfig::starfield(),
        FieldScope::Viewport,
    );
    mount_particles(
        &mut site,
        &document,
        "vortex",
        VORTEX_CANVAS_ID,
        ParticleFieldConfig::vortex(),
        FieldScope::Container,
    );

    let state = Rc::new(RefCell::new(SiteState::default()));
    site.listeners.extend(events::wire_ui_clicks(&document, &state));
    if let Some(l) = events::wire_modal_keydown(&document, &state) {
        site.listeners.push(l);
    }
    modal::render(&document, &state.borrow());
    site.scroll = Some(ScrollDriver::start(ScrollEngine::new(
        document.clone(),
        state.clone(),
    )));

    fonts_ready(&document).await;
    mount_orbit(&mut site, &document);

    log::info!(
        "[site] {} loops, {} listeners",
        site.loops.len(),
        site.listeners.len()
    );
    SITE.with(|s| *s.borrow_mut() = Some(site));
    Ok(())
}

/// Stop every animation loop and remove every listener.
#[wasm_bindgen]
pub fn shutdown() {
    if let Some(mut site) = SITE.with(|s| s.borrow_mut().take()) {
        site.stop();
        log::info!("[site] shut down");
    }
}
