//! Visual effects derived from [`SectionProgress`](crate::scroll::SectionProgress):
//! nav underline fill, aurora glow and the floating pain-point panels all read
//! the same scalars rather than each re-deriving scroll geometry.

use crate::constants::*;
use crate::particles::Rgb;
use crate::sections::SectionId;

/// Piecewise-linear map through `(x, y)` keyframes, clamped at both ends.
/// Keyframes must be sorted by `x`.
pub fn keyframes(x: f32, frames: &[(f32, f32)]) -> f32 {
    let (first, last) = match (frames.first(), frames.last()) {
        (Some(f), Some(l)) => (*f, *l),
        _ => return 0.0,
    };
    if x.is_nan() || x <= first.0 {
        return first.1;
    }
    if x >= last.0 {
        return last.1;
    }
    for pair in frames.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x <= x1 {
            let span = x1 - x0;
            if span <= 0.0 {
                return y1;
            }
            return y0 + (y1 - y0) * (x - x0) / span;
        }
    }
    last.1
}

/// Filled part of the underline track, both in `[0, 1]` of the track width.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UnderlineSegment {
    pub left: f32,
    pub width: f32,
}

/// Forward-emptying bar: grows from the left until the phase midpoint, then
/// shrinks towards the right edge.
pub fn underline_segment(phase: f32) -> UnderlineSegment {
    let s = if phase.is_nan() { 0.0 } else { phase.clamp(0.0, 1.0) };
    if s <= 0.5 {
        UnderlineSegment {
            left: 0.0,
            width: (2.0 * s).clamp(0.0, 1.0),
        }
    } else {
        let width = (2.0 * (1.0 - s)).clamp(0.0, 1.0);
        UnderlineSegment {
            left: 1.0 - width,
            width,
        }
    }
}

#[inline]
pub fn underline_visible(progress: f32) -> bool {
    progress > 0.0
}

fn lerp_rgb(a: [u8; 3], b: [u8; 3], t: f32) -> Rgb {
    let ch = |i: usize| (a[i] as f32 + (b[i] as f32 - a[i] as f32) * t).round() as u8;
    Rgb::new(ch(0), ch(1), ch(2))
}

/// Color at `position` in `[0, 1]` along the nav gradient stops.
pub fn gradient_color_at(position: f32) -> Rgb {
    let stops = &NAV_GRADIENT_STOPS;
    let scaled = position.clamp(0.0, 1.0) * (stops.len() - 1) as f32;
    let i = scaled.floor() as usize;
    if i >= stops.len() - 1 {
        let [r, g, b] = stops[stops.len() - 1];
        return Rgb::new(r, g, b);
    }
    lerp_rgb(stops[i], stops[i + 1], scaled - i as f32)
}

/// Each nav section gets its own slice of the shared gradient.
pub fn section_gradient(section: SectionId) -> (Rgb, Rgb) {
    let Some(index) = section.nav_index() else {
        let (a, b) = NAV_GRADIENT_FALLBACK;
        return (Rgb::new(a[0], a[1], a[2]), Rgb::new(b[0], b[1], b[2]));
    };
    let segment = 1.0 / (SectionId::NAV.len() - 1) as f32;
    let start = index as f32 * segment;
    let end = ((index + 1) as f32 * segment).min(1.0);
    (gradient_color_at(start), gradient_color_at(end))
}

#[inline]
pub fn aurora_opacity(pass_phase: f32) -> f32 {
    keyframes(pass_phase, &AURORA_KEYFRAMES)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelStyle {
    pub opacity: f32,
    /// Vertical translate in percent of the panel height.
    pub shift_percent: f32,
}

pub fn pains_panel(pass_phase: f32) -> PanelStyle {
    PanelStyle {
        opacity: keyframes(pass_phase, &PAINS_OPACITY_KEYFRAMES),
        shift_percent: keyframes(pass_phase, &PAINS_SHIFT_KEYFRAMES),
    }
}
