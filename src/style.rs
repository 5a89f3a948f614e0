use site_core::effects::{PanelStyle, UnderlineSegment};
use site_core::Rgb;

// CSS value builders shared by the canvas renderers and the DOM style writers.

#[inline]
pub fn rgba(c: Rgb, alpha: f32) -> String {
    let a = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
    format!("rgba({}, {}, {}, {:.3})", c.r, c.g, c.b, a)
}

#[inline]
pub fn hex(c: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

#[inline]
pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> String {
    format!("hsl({:.0}, {:.0}%, {:.0}%)", hue, saturation, lightness)
}

pub fn linear_gradient(from: Rgb, to: Rgb) -> String {
    format!("linear-gradient(90deg, {}, {})", hex(from), hex(to))
}

#[inline]
pub fn glyph_font(px: f32, family: &str) -> String {
    format!("{:.1}px {}", px.max(1.0), family)
}

/// Inline style for the filled part of a nav underline. `rtl` anchors the
/// segment from the right edge.
pub fn underline_css(seg: UnderlineSegment, visible: bool, rtl: bool, gradient: &str) -> String {
    let edge = if rtl { "right" } else { "left" };
    format!(
        "position:absolute;top:0;bottom:0;{}:{:.2}%;width:{:.2}%;background:{};opacity:{}",
        edge,
        seg.left * 100.0,
        seg.width * 100.0,
        gradient,
        if visible { 1 } else { 0 }
    )
}

#[inline]
pub fn opacity_css(opacity: f32) -> String {
    format!("opacity:{:.3}", opacity.clamp(0.0, 1.0))
}

pub fn panel_css(panel: PanelStyle) -> String {
    format!(
        "opacity:{:.3};transform:translateY({:.2}%)",
        panel.opacity.clamp(0.0, 1.0),
        panel.shift_percent
    )
}
