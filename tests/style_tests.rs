// Host-side tests for the CSS value builders.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use site_core::effects::{PanelStyle, UnderlineSegment};
use site_core::Rgb;
use style::*;

#[test]
fn color_strings() {
    assert_eq!(rgba(Rgb::new(1, 2, 3), 0.5), "rgba(1, 2, 3, 0.500)");
    assert_eq!(rgba(Rgb::WHITE, 3.0), "rgba(255, 255, 255, 1.000)");
    assert_eq!(rgba(Rgb::WHITE, f32::NAN), "rgba(255, 255, 255, 0.000)");
    assert_eq!(hex(Rgb::new(0x3e, 0x91, 0xf7)), "#3e91f7");
    assert_eq!(hsl(187.0, 70.0, 85.0), "hsl(187, 70%, 85%)");
    assert_eq!(
        linear_gradient(Rgb::new(0, 0, 0), Rgb::WHITE),
        "linear-gradient(90deg, #000000, #ffffff)"
    );
}

#[test]
fn glyph_font_never_collapses() {
    assert_eq!(glyph_font(24.0, "serif"), "24.0px serif");
    assert_eq!(glyph_font(0.0, "serif"), "1.0px serif");
}

#[test]
fn underline_css_anchors_by_direction() {
    let seg = UnderlineSegment {
        left: 0.25,
        width: 0.5,
    };
    let ltr = underline_css(seg, true, false, "red");
    assert!(ltr.contains("left:25.00%"));
    assert!(ltr.contains("width:50.00%"));
    assert!(ltr.contains("opacity:1"));

    let rtl = underline_css(seg, false, true, "red");
    assert!(rtl.contains("right:25.00%"));
    assert!(rtl.ends_with("opacity:0"));
}

#[test]
fn opacity_and_panel_css() {
    assert_eq!(opacity_css(0.5), "opacity:0.500");
    assert_eq!(opacity_css(-1.0), "opacity:0.000");
    let css = panel_css(PanelStyle {
        opacity: 1.0,
        shift_percent: -50.0,
    });
    assert_eq!(css, "opacity:1.000;transform:translateY(-50.00%)");
}
