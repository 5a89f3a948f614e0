// Host-side tests for the orbit camera's projection and picking.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod camera {
    include!("../src/camera.rs");
}

use camera::*;
use glam::{Vec2, Vec3};

fn cam() -> OrbitCamera {
    OrbitCamera::new(800.0, 600.0, 4.5, std::f32::consts::FRAC_PI_4)
}

#[test]
fn origin_projects_to_the_surface_center() {
    let (screen, _) = cam().project(Vec3::ZERO).unwrap();
    assert!((screen - Vec2::new(400.0, 300.0)).length() < 1e-2);
}

#[test]
fn center_ray_points_down_the_view_axis() {
    let (ro, rd) = cam().screen_to_world_ray(400.0, 300.0);
    assert!((ro - Vec3::new(0.0, 0.0, 4.5)).length() < 1e-6);
    assert!((rd - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-4);
}

#[test]
fn plane_pick_inverts_projection() {
    let c = cam();
    for p in [Vec2::new(0.9, 0.0), Vec2::new(-0.6, 1.2), Vec2::new(0.3, -1.4)] {
        let (screen, _) = c.project(p.extend(0.0)).unwrap();
        let back = c.screen_to_plane(screen.x, screen.y).unwrap();
        assert!((back - p).length() < 1e-3, "{p} -> {back}");
    }
}

#[test]
fn scene_y_points_up_on_screen() {
    let (screen, _) = cam().project(Vec3::new(0.0, 1.0, 0.0)).unwrap();
    assert!(screen.y < 300.0);
}

#[test]
fn pixels_per_unit_matches_screen_offset() {
    let c = cam();
    let (screen, px) = c.project(Vec3::new(1.0, 0.0, 0.0)).unwrap();
    assert!((screen.x - 400.0 - px).abs() < 1e-2);
    // Closer to the camera draws larger
    let (_, near) = c.project(Vec3::new(0.0, 0.0, 0.15)).unwrap();
    assert!(near > px);
}

#[test]
fn points_behind_the_camera_are_not_projected() {
    assert!(cam().project(Vec3::new(0.0, 0.0, 5.0)).is_none());
}

#[test]
fn degenerate_surface_size_is_clamped() {
    let c = OrbitCamera::new(0.0, 0.0, 4.5, 1.0);
    assert_eq!(c.width, 1.0);
    assert_eq!(c.height, 1.0);
    assert!(c.project(Vec3::ZERO).is_some());
}
