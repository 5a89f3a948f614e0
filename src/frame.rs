use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Something advanced once per repaint.
pub trait FrameHandler {
    fn frame(&mut self, now: Instant);
}

struct LoopInner {
    handle: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopInner {
    fn schedule(&self) {
        let tick = self.tick.borrow();
        let (Some(w), Some(tick)) = (web::window(), tick.as_ref()) else {
            return;
        };
        if let Ok(id) = w.request_animation_frame(tick.as_ref().unchecked_ref()) {
            self.handle.set(Some(id));
        }
    }
}

/// A `requestAnimationFrame` loop that owns its pending callback id.
/// [`stop`](Self::stop) (or drop) cancels the pending tick; no further
/// frames run afterwards.
pub struct AnimationLoop {
    label: &'static str,
    inner: Rc<LoopInner>,
}

impl AnimationLoop {
    pub fn start<H: FrameHandler + 'static>(label: &'static str, handler: Rc<RefCell<H>>) -> Self {
        let inner = Rc::new(LoopInner {
            handle: Cell::new(None),
            tick: RefCell::new(None),
        });
        let weak = Rc::downgrade(&inner);
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.handle.set(None);
            handler.borrow_mut().frame(Instant::now());
            inner.schedule();
        }) as Box<dyn FnMut()>));
        inner.schedule();
        log::info!("[loop] {} started", label);
        Self { label, inner }
    }

    pub fn is_running(&self) -> bool {
        self.inner.handle.get().is_some()
    }

    pub fn stop(&self) {
        if let Some(id) = self.inner.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
            log::info!("[loop] {} stopped", self.label);
        }
        self.inner.tick.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Seconds between two instants, never negative.
#[inline]
pub fn seconds_between(earlier: Instant, later: Instant) -> f32 {
    if later > earlier {
        (later - earlier).as_secs_f32()
    } else {
        0.0
    }
}
