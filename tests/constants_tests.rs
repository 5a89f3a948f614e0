// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use site_core::constants as core;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(MAX_DEVICE_PIXEL_RATIO >= 1.0);
    assert!(CONTAINER_FALLBACK_PX > 0.0);
    assert!(ORBIT_FOVY > 0.0 && ORBIT_FOVY < std::f32::consts::PI);
    assert!(GLYPH_GLOW_BLUR_PX >= 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_sits_outside_the_orbits() {
    let outer = core::ORBIT_RING_RADII.iter().copied().fold(0.0, f32::max);
    assert!(ORBIT_CAMERA_Z > outer + core::MAX_DISPLACEMENT + core::ORBIT_DEPTH_AMPLITUDE);
}

#[test]
fn canvas_ids_are_distinct() {
    let ids = [STARFIELD_CANVAS_ID, VORTEX_CANVAS_ID, ORBIT_CANVAS_ID];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn attribute_selectors_are_bracketed() {
    for sel in [
        AURORA_SELECTOR,
        PAINS_SELECTOR,
        PAINS_CONTENT_SELECTOR,
        MODAL_IMAGE_SELECTOR,
        CONTACT_OPEN_SELECTOR,
    ] {
        assert!(sel.starts_with('[') && sel.ends_with(']'), "{sel}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn core_tuning_is_consistent() {
    assert!(core::DENSITY_SCALE_MIN < 1.0 && core::DENSITY_SCALE_MAX > 1.0);
    assert!(core::PULSE_BASE - core::PULSE_SPAN >= 0.0);
    assert!(core::PULSE_BASE + core::PULSE_SPAN <= 1.0);
    assert!(core::SPRING_DAMPING_RATIO >= 1.0, "springs must not overshoot");
    let halo_alpha: Vec<f32> = core::HALO_STOPS.iter().map(|s| s.1).collect();
    assert!(halo_alpha.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(core::ORBIT_ALPHABET.chars().count(), 26);
}
