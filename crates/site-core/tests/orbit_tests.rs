// Host-side tests for the orbiting glyph ring: layout, repulsion and the
// displacement spring.

use glam::Vec2;
use site_core::orbit::{ellipse_position, repulsion, ring_for_index, rotation_jitter};
use site_core::{ConfigError, OrbitConfig, OrbitRing};

const DT: f32 = 1.0 / 60.0;

fn run(ring: &mut OrbitRing, seconds: f32, mut pointer: impl FnMut(usize) -> Option<Vec2>) {
    let steps = (seconds / DT).round() as usize;
    let start = ring.elapsed();
    for i in 0..steps {
        ring.on_frame(start + (i + 1) as f32 * DT, DT, pointer(i));
    }
}

fn max_displacement(ring: &OrbitRing) -> f32 {
    ring.letters()
        .iter()
        .map(|l| l.displacement.length())
        .fold(0.0, f32::max)
}

#[test]
fn alphabet_is_spread_round_robin_over_three_rings() {
    let ring = OrbitRing::new(OrbitConfig::default());
    assert_eq!(ring.letters().len(), 26);
    for (i, l) in ring.letters().iter().enumerate() {
        assert_eq!(l.ring, i % 3);
        assert_eq!(l.ring, ring_for_index(i));
        assert_eq!(l.glyph, (b'A' + i as u8) as char);
    }
    let per_ring: Vec<usize> = (0..3)
        .map(|r| ring.letters().iter().filter(|l| l.ring == r).count())
        .collect();
    assert_eq!(per_ring, vec![9, 9, 8]);
}

#[test]
fn phases_are_evenly_spaced() {
    let ring = OrbitRing::new(OrbitConfig::default());
    let step = std::f32::consts::TAU / 26.0;
    for (i, l) in ring.letters().iter().enumerate() {
        assert!((l.phase - i as f32 * step).abs() < 1e-5);
    }
}

#[test]
fn rest_pose_sits_on_the_ellipse() {
    let config = OrbitConfig::default();
    let ring = OrbitRing::new(config.clone());
    for pose in ring.poses() {
        let l = &ring.letters()[pose.index];
        let ideal = ellipse_position(config.ring_radii[l.ring], l.phase, config.aspect);
        assert!((pose.position.truncate() - ideal).length() < 1e-5);
        assert!((pose.position.z - l.depth).abs() < 1e-6);
        assert_eq!(pose.font_size, config.font_sizes[l.ring]);
    }
}

#[test]
fn rotation_jitter_is_fixed_per_glyph() {
    let mut ring = OrbitRing::new(OrbitConfig::default());
    let offsets: Vec<f32> = ring.letters().iter().map(|l| l.rotation_offset).collect();
    run(&mut ring, 3.0, |_| Some(Vec2::new(0.0, 1.4)));
    for (l, before) in ring.letters().iter().zip(&offsets) {
        assert_eq!(l.rotation_offset, *before);
        assert_eq!(l.rotation_offset, rotation_jitter(l.ring, l.index));
    }
}

#[test]
fn rings_turn_at_their_own_speed() {
    let config = OrbitConfig::default();
    let mut ring = OrbitRing::new(config.clone());
    run(&mut ring, 1.0, |_| None);
    let angles = ring.ring_angles();
    for (angle, speed) in angles.iter().zip(config.ring_speeds) {
        assert!((angle - speed).abs() < 1e-3, "{angle} vs {speed}");
    }
}

#[test]
fn no_pointer_means_no_displacement() {
    let mut ring = OrbitRing::new(OrbitConfig::default());
    run(&mut ring, 2.0, |_| None);
    assert_eq!(max_displacement(&ring), 0.0);
}

#[test]
fn repulsion_is_zero_outside_radius_and_on_the_pointer() {
    let p = Vec2::new(0.5, 0.5);
    assert_eq!(repulsion(p, p, 0.8, 24.0), Vec2::ZERO);
    assert_eq!(repulsion(Vec2::new(2.0, 0.5), p, 0.8, 24.0), Vec2::ZERO);
    assert_eq!(repulsion(Vec2::new(0.5, 1.5), p, 0.8, 24.0), Vec2::ZERO);

    let f = repulsion(Vec2::new(0.9, 0.5), p, 0.8, 24.0);
    assert!(f.x > 0.0 && f.y.abs() < 1e-6);
    assert!((f.x - 0.5 * 24.0).abs() < 1e-4);
}

#[test]
fn pointer_pushes_nearby_glyphs_away() {
    let mut ring = OrbitRing::new(OrbitConfig::default());
    let pose_a = ring.poses().next().map(|p| p.position.truncate());
    let Some(a) = pose_a else {
        panic!("no glyphs");
    };
    // Just inside letter A's position, towards the center
    let pointer = a * 0.9;
    ring.on_frame(DT, DT, Some(pointer));
    let l = &ring.letters()[0];
    assert!(l.displacement.length() > 0.0);
    assert!(l.displacement.dot(a - pointer) > 0.0);
}

#[test]
fn displacement_never_exceeds_the_clamp() {
    let mut config = OrbitConfig::default();
    config.repel_strength = 1.0e6;
    config.repel_radius = 5.0;
    let max = config.max_displacement;
    let mut ring = OrbitRing::new(config);
    // Jitter the pointer around the ring every frame
    run(&mut ring, 5.0, |i| {
        let a = i as f32 * 2.399;
        Some(Vec2::new(a.cos(), a.sin()) * (i % 7) as f32 * 0.25)
    });
    assert!(max_displacement(&ring) <= max + 1e-4);
}

#[test]
fn glyphs_return_to_orbit_after_the_pointer_leaves() {
    let mut ring = OrbitRing::new(OrbitConfig::default());
    run(&mut ring, 1.0, |_| Some(Vec2::new(0.0, 1.2)));
    assert!(max_displacement(&ring) > 0.01);
    run(&mut ring, 2.0, |_| None);
    assert!(max_displacement(&ring) < 1e-3, "{}", max_displacement(&ring));
}

#[test]
fn non_finite_input_is_ignored() {
    let mut ring = OrbitRing::new(OrbitConfig::default());
    ring.on_frame(0.1, f32::NAN, Some(Vec2::ZERO));
    assert_eq!(ring.ring_angles(), [0.0; 3]);
    ring.on_frame(0.2, DT, Some(Vec2::new(f32::NAN, 0.0)));
    assert_eq!(max_displacement(&ring), 0.0);
    // A huge delta is clamped to one short step
    ring.on_frame(10.0, 10.0, None);
    let config = OrbitConfig::default();
    assert!(ring.ring_angles()[2] <= config.ring_speeds[2] * (DT + 1.0 / 15.0) + 1e-4);
}

#[test]
fn config_validation() {
    assert!(OrbitConfig::default().validate().is_ok());
    let c = OrbitConfig::new("", [1.0; 3], [0.1; 3], Vec2::ONE);
    assert_eq!(c.validate(), Err(ConfigError::EmptyAlphabet));
    let mut c = OrbitConfig::default();
    c.spring_omega = 0.0;
    assert!(matches!(
        c.validate(),
        Err(ConfigError::NotPositive { name: "spring_omega", .. })
    ));
    let mut c = OrbitConfig::default();
    c.max_displacement = f32::NAN;
    assert!(c.validate().is_err());
}

#[test]
fn custom_alphabet_builds_its_own_ring() {
    let ring = OrbitRing::new(OrbitConfig::new("ΑΒΓ", [1.0, 1.1, 1.2], [0.1, 0.2, 0.3], Vec2::ONE));
    let glyphs: String = ring.letters().iter().map(|l| l.glyph).collect();
    assert_eq!(glyphs, "ΑΒΓ");
    assert!(ring.extent().x > 1.2);
}

#[test]
fn portal_preset_uses_the_tighter_rings() {
    let config = OrbitConfig::portal();
    assert!(config.validate().is_ok());
    assert_eq!(config.ring_radii, [1.0, 1.25, 1.45]);
    assert_eq!(config.ring_speeds, OrbitConfig::default().ring_speeds);
    assert_eq!(config.alphabet.len(), 26);

    let ring = OrbitRing::new(config.clone());
    for pose in ring.poses() {
        let l = &ring.letters()[pose.index];
        assert_eq!(l.ring, ring_for_index(pose.index));
        let ideal = ellipse_position(config.ring_radii[l.ring], l.phase, config.aspect);
        assert!((pose.position.truncate() - ideal).length() < 1e-5);
    }
}
