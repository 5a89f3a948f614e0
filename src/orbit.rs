use crate::camera::OrbitCamera;
use crate::constants::*;
use crate::dom;
use crate::frame::{seconds_between, FrameHandler};
use crate::input::{client_to_local, PointerState};
use crate::style;
use glam::Vec2;
use instant::Instant;
use site_core::constants::GLYPH_SATURATION;
use site_core::{Bounds, LetterPose, OrbitConfig, OrbitRing};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

/// The orbit ring projected through a fixed perspective camera onto a 2D
/// canvas laid over the portrait.
pub struct OrbitSurface {
    canvas: web::HtmlCanvasElement,
    ctx: Option<web::CanvasRenderingContext2d>,
    ring: OrbitRing,
    camera: OrbitCamera,
    pointer: Rc<RefCell<PointerState>>,
    started: Instant,
    last: Instant,
}

impl OrbitSurface {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        config: OrbitConfig,
        pointer: Rc<RefCell<PointerState>>,
    ) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("[orbit] invalid config ({}), using defaults", e);
                OrbitConfig::default()
            }
        };
        let now = Instant::now();
        let mut surface = Self {
            canvas,
            ctx: None,
            ring: OrbitRing::new(config),
            camera: OrbitCamera::new(1.0, 1.0, ORBIT_CAMERA_Z, ORBIT_FOVY),
            pointer,
            started: now,
            last: now,
        };
        surface.resize();
        log::info!("[orbit] {} glyphs", surface.ring.letters().len());
        surface
    }

    pub fn resize(&mut self) {
        let css = self
            .canvas
            .parent_element()
            .map(|p| {
                let r = p.get_bounding_client_rect();
                Bounds::new(r.width() as f32, r.height() as f32)
            })
            .filter(|b| !b.is_empty())
            .unwrap_or(Bounds::new(CONTAINER_FALLBACK_PX, CONTAINER_FALLBACK_PX));
        let dpr = dom::device_pixel_ratio();
        dom::sync_canvas_backing_size(&self.canvas, css, dpr);
        if self.ctx.is_none() {
            self.ctx = dom::context_2d(&self.canvas);
            if self.ctx.is_none() {
                log::warn!("[orbit] 2d context unavailable, skipping draws");
            }
        }
        if let Some(ctx) = &self.ctx {
            _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        }
        self.camera = OrbitCamera::new(css.width, css.height, ORBIT_CAMERA_Z, ORBIT_FOVY);
    }

    /// Pointer on the scene plane, `None` without a hovering pointer.
    fn pointer_world(&self) -> Option<Vec2> {
        let client = self.pointer.borrow().client?;
        let rect = self.canvas.get_bounding_client_rect();
        let local = client_to_local(client, rect.left() as f32, rect.top() as f32);
        self.camera.screen_to_plane(local.x, local.y)
    }

    fn draw(&self) {
        let Some(ctx) = &self.ctx else {
            return;
        };
        ctx.clear_rect(0.0, 0.0, self.camera.width as f64, self.camera.height as f64);
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        for pose in self.ring.poses() {
            self.draw_glyph(ctx, &pose);
        }
    }

    #[allow(deprecated)]
    fn draw_glyph(&self, ctx: &web::CanvasRenderingContext2d, pose: &LetterPose) {
        let Some((screen, px_per_unit)) = self.camera.project(pose.position) else {
            return;
        };
        ctx.save();
        _ = ctx.translate(screen.x as f64, screen.y as f64);
        // Scene y points up, canvas y points down.
        _ = ctx.rotate(-pose.rotation as f64);
        ctx.set_font(&style::glyph_font(pose.font_size * px_per_unit, GLYPH_FONT_FAMILY));
        ctx.set_shadow_color(&style::hsl(pose.hue, GLYPH_GLOW_SATURATION, GLYPH_GLOW_LIGHTNESS));
        ctx.set_shadow_blur(GLYPH_GLOW_BLUR_PX);
        ctx.set_fill_style(&JsValue::from_str(&style::hsl(
            pose.hue,
            GLYPH_SATURATION,
            pose.lightness,
        )));
        let mut buf = [0u8; 4];
        _ = ctx.fill_text(pose.glyph.encode_utf8(&mut buf), 0.0, 0.0);
        ctx.restore();
    }
}

impl FrameHandler for OrbitSurface {
    fn frame(&mut self, now: Instant) {
        let delta = seconds_between(self.last, now);
        self.last = now;
        let pointer = self.pointer_world();
        self.ring
            .on_frame(seconds_between(self.started, now), delta, pointer);
        self.draw();
    }
}
