use glam::Vec2;

/// Last known hover position of the pointer in client (CSS) pixels.
/// `None` means no hovering pointer: touch input, pointer outside the page,
/// or window blurred.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub client: Option<Vec2>,
}

impl PointerState {
    pub fn hover(&mut self, x: f32, y: f32, pointer_type: &str) {
        self.client = if pointer_type == "touch" || !x.is_finite() || !y.is_finite() {
            None
        } else {
            Some(Vec2::new(x, y))
        };
    }

    pub fn leave(&mut self) {
        self.client = None;
    }
}

/// Client coordinates relative to an element's top-left corner.
#[inline]
pub fn client_to_local(client: Vec2, rect_left: f32, rect_top: f32) -> Vec2 {
    client - Vec2::new(rect_left, rect_top)
}

/// Backing-store scale for a canvas: device pixel ratio capped at `max`.
#[inline]
pub fn effective_dpr(device_pixel_ratio: f64, max: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(max)
    } else {
        1.0
    }
}
