// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn mouse_hover_is_tracked() {
    let mut p = PointerState::default();
    assert_eq!(p.client, None);
    p.hover(120.0, 48.5, "mouse");
    assert_eq!(p.client, Some(Vec2::new(120.0, 48.5)));
    p.hover(10.0, 20.0, "pen");
    assert_eq!(p.client, Some(Vec2::new(10.0, 20.0)));
}

#[test]
fn touch_never_counts_as_hovering() {
    let mut p = PointerState::default();
    p.hover(120.0, 48.5, "mouse");
    p.hover(30.0, 30.0, "touch");
    assert_eq!(p.client, None);
}

#[test]
fn non_finite_coordinates_clear_the_pointer() {
    let mut p = PointerState::default();
    p.hover(f32::NAN, 4.0, "mouse");
    assert_eq!(p.client, None);
    p.hover(4.0, f32::INFINITY, "mouse");
    assert_eq!(p.client, None);
}

#[test]
fn leave_clears_the_pointer() {
    let mut p = PointerState::default();
    p.hover(1.0, 2.0, "mouse");
    p.leave();
    assert_eq!(p.client, None);
}

#[test]
fn client_to_local_subtracts_the_element_origin() {
    let local = client_to_local(Vec2::new(300.0, 220.0), 100.0, 20.0);
    assert_eq!(local, Vec2::new(200.0, 200.0));
}

#[test]
fn device_pixel_ratio_is_capped() {
    assert_eq!(effective_dpr(1.0, 2.0), 1.0);
    assert_eq!(effective_dpr(1.5, 2.0), 1.5);
    assert_eq!(effective_dpr(3.0, 2.0), 2.0);
    assert_eq!(effective_dpr(0.0, 2.0), 1.0);
    assert_eq!(effective_dpr(f64::NAN, 2.0), 1.0);
}
