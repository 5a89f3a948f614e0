use crate::constants::*;
use crate::dom::{self, DomProbe, EventListener};
use crate::modal;
use crate::style;
use site_core::effects::{aurora_opacity, pains_panel, section_gradient, underline_segment, underline_visible};
use site_core::sections::in_active_band;
use site_core::{ActiveSection, ProgressTuning, SectionId, SectionTracker, SiteState, TrackSpec};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Which style a tracked entry drives.
#[derive(Clone, Debug, PartialEq)]
enum Effect {
    NavUnderline(SectionId),
    Aurora(SectionId),
    PainsPanel(usize),
}

struct Consumer {
    key: String,
    effect: Effect,
}

fn pains_selector(index: usize) -> String {
    format!("[{}=\"{}\"]", PAINS_INDEX_ATTR, index)
}

/// Samples section geometry, keeps the shared progress map, and writes the
/// derived styles (nav underline, aurora glow, pain-point panels).
pub struct ScrollEngine {
    document: web::Document,
    tracker: SectionTracker,
    consumers: Vec<Consumer>,
    active: ActiveSection,
    pains_tracked: usize,
    state: Rc<RefCell<SiteState>>,
}

impl ScrollEngine {
    pub fn new(document: web::Document, state: Rc<RefCell<SiteState>>) -> Self {
        let mut engine = Self {
            document,
            tracker: SectionTracker::new(),
            consumers: Vec::new(),
            active: ActiveSection::default(),
            pains_tracked: 0,
            state,
        };
        for id in SectionId::NAV {
            engine.track(
                id.as_str().to_string(),
                TrackSpec::for_section(id.as_str()),
                ProgressTuning::for_section(id.as_str()),
                Effect::NavUnderline(id),
            );
        }
        for id in SectionId::ALL {
            let selector = format!("#{}", id.as_str());
            engine.track(
                format!("aurora:{}", id.as_str()),
                TrackSpec::element(&selector),
                ProgressTuning::pass_through(),
                Effect::Aurora(id),
            );
        }
        engine.sync_pains_panels();
        log::info!("[scroll] tracking {} entries", engine.tracker.sections().len());
        engine
    }

    /// Stamp every pain-point panel with its index and track the ones mounted
    /// since the last call.
    fn sync_pains_panels(&mut self) {
        let panels = dom::query_all(&self.document, PAINS_SELECTOR);
        for (i, panel) in panels.iter().enumerate() {
            let index = i.to_string();
            if panel.get_attribute(PAINS_INDEX_ATTR).as_deref() != Some(index.as_str()) {
                _ = panel.set_attribute(PAINS_INDEX_ATTR, &index);
            }
            if i < self.pains_tracked {
                continue;
            }
            self.track(
                format!("pains:{i}"),
                TrackSpec::element(&pains_selector(i)),
                ProgressTuning::pass_through(),
                Effect::PainsPanel(i),
            );
        }
        self.pains_tracked = self.pains_tracked.max(panels.len());
    }

    fn track(&mut self, key: String, spec: TrackSpec, tuning: ProgressTuning, effect: Effect) {
        self.tracker.track(&key, spec, tuning);
        self.consumers.push(Consumer { key, effect });
    }

    /// Returns `true` when a frame must be scheduled for this trigger.
    fn request(&mut self) -> bool {
        self.tracker.coalescer().request()
    }

    /// The coalesced frame. Only this path settles the pending request.
    fn on_frame(&mut self) {
        self.tracker.coalescer().begin();
        self.sample();
    }

    /// One read-derive-write pass. Leaves any scheduled frame pending.
    pub fn sample(&mut self) {
        self.sync_pains_panels();
        let viewport = dom::viewport_size();
        let changed = self.tracker.recompute(viewport.height, &DomProbe(&self.document));
        if changed {
            self.write_styles();
        }
        self.update_active_section(viewport.height);
        let scroll_y = web::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0) as f32;
        if self.state.borrow_mut().on_scroll(scroll_y) {
            modal::render(&self.document, &self.state.borrow());
        }
    }

    fn write_styles(&self) {
        for c in &self.consumers {
            let p = self.tracker.progress(&c.key);
            match &c.effect {
                Effect::NavUnderline(id) => {
                    let selector = format!("[{}=\"{}\"]", NAV_UNDERLINE_ATTR, id.as_str());
                    for el in dom::query_all(&self.document, &selector) {
                        let rtl = el.get_attribute(NAV_DIRECTION_ATTR).as_deref() == Some("rtl");
                        let (from, to) = section_gradient(*id);
                        let css = style::underline_css(
                            underline_segment(p.phase),
                            underline_visible(p.progress),
                            rtl,
                            &style::linear_gradient(from, to),
                        );
                        _ = el.set_attribute("style", &css);
                    }
                }
                Effect::Aurora(id) => {
                    let selector = format!("#{} {}", id.as_str(), AURORA_SELECTOR);
                    for el in dom::query_all(&self.document, &selector) {
                        _ = el.set_attribute("style", &style::opacity_css(aurora_opacity(p.phase)));
                    }
                }
                Effect::PainsPanel(i) => {
                    let selector = format!("{} {}", pains_selector(*i), PAINS_CONTENT_SELECTOR);
                    for el in dom::query_all(&self.document, &selector) {
                        _ = el.set_attribute("style", &style::panel_css(pains_panel(p.phase)));
                    }
                }
            }
        }
    }

    fn update_active_section(&mut self, viewport_height: f32) {
        let probe = DomProbe(&self.document);
        let visible = SectionId::ALL.into_iter().filter(|id| {
            site_core::LayoutProbe::rect(&probe, &format!("#{}", id.as_str()))
                .map(|r| in_active_band(r, viewport_height))
                .unwrap_or(false)
        });
        let Some(active) = self.active.update(visible) else {
            return;
        };
        log::debug!("[scroll] active section -> {}", active);
        for el in dom::query_all(&self.document, &format!("[{}]", NAV_LINK_ATTR)) {
            let is_active = el.get_attribute(NAV_LINK_ATTR).as_deref() == Some(active.as_str());
            let cl = el.class_list();
            _ = if is_active {
                cl.add_1(ACTIVE_CLASS)
            } else {
                cl.remove_1(ACTIVE_CLASS)
            };
        }
    }
}

/// Scroll/resize wiring for a [`ScrollEngine`]: scroll events coalesce into
/// at most one pending animation frame, resize recomputes immediately.
pub struct ScrollDriver {
    engine: Rc<RefCell<ScrollEngine>>,
    pending: Rc<Cell<Option<i32>>>,
    _compute: Rc<Closure<dyn FnMut()>>,
    listeners: Vec<EventListener>,
}

impl ScrollDriver {
    pub fn start(engine: ScrollEngine) -> Self {
        let engine = Rc::new(RefCell::new(engine));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let compute = {
            let engine = engine.clone();
            let pending = pending.clone();
            Rc::new(Closure::wrap(Box::new(move || {
                pending.set(None);
                engine.borrow_mut().on_frame();
            }) as Box<dyn FnMut()>))
        };

        let mut listeners = Vec::new();
        if let Some(window) = web::window() {
            let engine_scroll = engine.clone();
            let pending_scroll = pending.clone();
            let compute_scroll = compute.clone();
            listeners.push(EventListener::passive(&window, "scroll", move |_| {
                if !engine_scroll.borrow_mut().request() {
                    return;
                }
                if let Some(w) = web::window() {
                    let cb = (*compute_scroll).as_ref().unchecked_ref();
                    if let Ok(id) = w.request_animation_frame(cb) {
                        pending_scroll.set(Some(id));
                    }
                }
            }));
            let engine_resize = engine.clone();
            listeners.push(EventListener::new(&window, "resize", move |_| {
                engine_resize.borrow_mut().sample();
            }));
        }

        engine.borrow_mut().sample();
        log::info!("[scroll] driver started");
        Self {
            engine,
            pending,
            _compute: compute,
            listeners,
        }
    }

    pub fn stop(&mut self) {
        self.listeners.clear();
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.engine.borrow_mut().tracker.coalescer().cancel();
        log::info!("[scroll] driver stopped");
    }
}

impl Drop for ScrollDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
