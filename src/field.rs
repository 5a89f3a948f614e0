use crate::constants::CONTAINER_FALLBACK_PX;
use crate::dom;
use crate::frame::{seconds_between, FrameHandler};
use crate::style;
use instant::Instant;
use site_core::constants::HALO_STOPS;
use site_core::{Bounds, ParticleField, ParticleFieldConfig, ParticleSample, Rgb};
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldScope {
    /// Fills the window.
    Viewport,
    /// Fills the canvas' parent element.
    Container,
}

/// A [`ParticleField`] bound to a 2D canvas.
pub struct ParticleSurface {
    label: &'static str,
    canvas: web::HtmlCanvasElement,
    ctx: Option<web::CanvasRenderingContext2d>,
    field: ParticleField,
    scope: FieldScope,
    started: Instant,
}

impl ParticleSurface {
    pub fn new(
        label: &'static str,
        canvas: web::HtmlCanvasElement,
        config: ParticleFieldConfig,
        scope: FieldScope,
    ) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("[{}] invalid field config ({}), using starfield preset", label, e);
                ParticleFieldConfig::starfield()
            }
        };
        let css = measure(&canvas, scope);
        let mut surface = Self {
            label,
            ctx: None,
            field: ParticleField::from_entropy(config, css),
            canvas,
            scope,
            started: Instant::now(),
        };
        surface.sync_backing(css);
        log::info!("[{}] {} particles", label, surface.field.len());
        surface
    }

    /// Re-measure, resize the backing store and regenerate every particle.
    pub fn resize(&mut self) {
        let css = measure(&self.canvas, self.scope);
        self.sync_backing(css);
        self.field.resize(css);
        log::debug!(
            "[{}] regenerated {} particles for {:.0}x{:.0}",
            self.label,
            self.field.len(),
            css.width,
            css.height
        );
    }

    fn sync_backing(&mut self, css: Bounds) {
        let dpr = dom::device_pixel_ratio();
        dom::sync_canvas_backing_size(&self.canvas, css, dpr);
        // A failed acquisition is retried here on the next resize only.
        if self.ctx.is_none() {
            self.ctx = dom::context_2d(&self.canvas);
            if self.ctx.is_none() {
                log::warn!("[{}] 2d context unavailable, skipping draws", self.label);
            }
        }
        if let Some(ctx) = &self.ctx {
            _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        }
    }

    fn draw(&self, t: f32) {
        let Some(ctx) = &self.ctx else {
            return;
        };
        let b = self.field.bounds();
        ctx.clear_rect(0.0, 0.0, b.width as f64, b.height as f64);
        for s in self.field.sample(t) {
            draw_halo(ctx, &s);
            draw_core(ctx, &s);
        }
    }
}

impl FrameHandler for ParticleSurface {
    fn frame(&mut self, now: Instant) {
        self.draw(seconds_between(self.started, now));
    }
}

fn measure(canvas: &web::HtmlCanvasElement, scope: FieldScope) -> Bounds {
    match scope {
        FieldScope::Viewport => dom::viewport_size(),
        FieldScope::Container => {
            let rect = canvas.parent_element().map(|p| p.get_bounding_client_rect());
            let side = |v: Option<f64>| match v {
                Some(v) if v >= 1.0 => v.floor() as f32,
                _ => CONTAINER_FALLBACK_PX,
            };
            Bounds::new(
                side(rect.as_ref().map(|r| r.width())),
                side(rect.as_ref().map(|r| r.height())),
            )
        }
    }
}

#[allow(deprecated)]
fn draw_halo(ctx: &web::CanvasRenderingContext2d, s: &ParticleSample) {
    if s.halo_radius <= 0.0 || s.halo_alpha <= 0.0 {
        return;
    }
    let (x, y) = (s.position.x as f64, s.position.y as f64);
    let r = s.halo_radius as f64;
    let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, r) else {
        return;
    };
    for (offset, factor) in HALO_STOPS {
        _ = gradient.add_color_stop(offset, &style::rgba(s.glow_color, factor * s.halo_alpha));
    }
    ctx.set_fill_style(&gradient);
    ctx.begin_path();
    _ = ctx.arc(x, y, r, 0.0, TAU);
    ctx.fill();
}

#[allow(deprecated)]
fn draw_core(ctx: &web::CanvasRenderingContext2d, s: &ParticleSample) {
    ctx.set_fill_style(&JsValue::from_str(&style::rgba(Rgb::WHITE, s.core_alpha)));
    ctx.begin_path();
    _ = ctx.arc(
        s.position.x as f64,
        s.position.y as f64,
        s.core_radius as f64,
        0.0,
        TAU,
    );
    ctx.fill();
}
