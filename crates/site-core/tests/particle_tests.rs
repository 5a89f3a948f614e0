// Host-side tests for the particle field simulation.

use site_core::particles::{scaled_count, GlowColor, GlowSizeTier, Span};
use site_core::{Bounds, ConfigError, ParticleField, ParticleFieldConfig, Rgb};

const REFERENCE: Bounds = Bounds::new(1280.0, 720.0);

#[test]
fn count_scales_with_viewport_area() {
    assert_eq!(scaled_count(156, REFERENCE), 156);
    // Small viewports are floored at 0.7x
    assert_eq!(scaled_count(156, Bounds::new(320.0, 480.0)), 109);
    // Large viewports are capped at 1.2x
    assert_eq!(scaled_count(156, Bounds::new(3840.0, 2160.0)), 187);
}

#[test]
fn starfield_scales_but_vortex_does_not() {
    let small = Bounds::new(320.0, 480.0);
    let starfield = ParticleField::new(ParticleFieldConfig::starfield(), small, 1);
    let vortex = ParticleField::new(ParticleFieldConfig::vortex(), small, 1);
    assert_eq!(starfield.len(), 109);
    assert_eq!(vortex.len(), 300);
}

#[test]
fn seeded_fields_are_identical() {
    let a = ParticleField::new(ParticleFieldConfig::starfield(), REFERENCE, 42);
    let b = ParticleField::new(ParticleFieldConfig::starfield(), REFERENCE, 42);
    assert_eq!(a.particles(), b.particles());
    let sa: Vec<_> = a.sample(3.5).collect();
    let sb: Vec<_> = b.sample(3.5).collect();
    assert_eq!(sa, sb);
}

#[test]
fn zero_area_bounds_give_empty_field() {
    let field = ParticleField::new(ParticleFieldConfig::starfield(), Bounds::new(0.0, 720.0), 3);
    assert!(field.is_empty());
    assert_eq!(field.sample(1.0).count(), 0);
}

#[test]
fn resize_regenerates_every_particle() {
    let mut field = ParticleField::new(ParticleFieldConfig::vortex(), Bounds::new(280.0, 280.0), 9);
    let before = field.particles().to_vec();
    field.resize(Bounds::new(400.0, 400.0));
    assert_eq!(field.generation(), 1);
    assert_eq!(field.len(), 300);
    assert_eq!(field.bounds(), Bounds::new(400.0, 400.0));

    // No particle keeps its orbit slot
    for (old, new) in before.iter().zip(field.particles()) {
        assert!((old.base_angle, old.base_radius) != (new.base_angle, new.base_radius));
    }
    let kept = field.particles().iter().filter(|new| {
        before
            .iter()
            .any(|old| old.base_angle == new.base_angle && old.base_radius == new.base_radius)
    });
    assert_eq!(kept.count(), 0);

    // Radii are resampled, not rescaled by one factor
    let ratios: Vec<f32> = before
        .iter()
        .zip(field.particles())
        .filter(|(old, _)| old.base_radius > 1.0)
        .map(|(old, new)| new.base_radius / old.base_radius)
        .collect();
    let lo = ratios.iter().copied().fold(f32::INFINITY, f32::min);
    let hi = ratios.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    assert!(hi - lo > 0.5, "radius ratios span {lo}..{hi}");

    field.resize(Bounds::default());
    assert!(field.is_empty());
    field.resize(Bounds::new(280.0, 280.0));
    assert_eq!(field.len(), 300);
    assert_eq!(field.generation(), 3);
}

#[test]
fn resizing_to_the_same_bounds_still_regenerates() {
    let b = Bounds::new(640.0, 480.0);
    let mut field = ParticleField::new(ParticleFieldConfig::starfield(), b, 21);
    let before = field.particles().to_vec();
    field.resize(b);
    assert_eq!(field.len(), before.len());
    for (old, new) in before.iter().zip(field.particles()) {
        assert!((old.base_angle, old.base_radius) != (new.base_angle, new.base_radius));
    }
}

#[test]
fn spin_directions_are_mixed() {
    let field = ParticleField::new(ParticleFieldConfig::vortex(), Bounds::new(280.0, 280.0), 4);
    let n = field.len();
    let clockwise = field.particles().iter().filter(|p| p.angular_velocity < 0.0).count();
    let spinning_back = field.particles().iter().filter(|p| p.personal_spin < 0.0).count();
    assert!(clockwise > n / 4 && clockwise < 3 * n / 4);
    assert!(spinning_back > n / 4 && spinning_back < 3 * n / 4);
}

#[test]
fn particles_spawn_inside_bounds() {
    let b = Bounds::new(800.0, 600.0);
    let field = ParticleField::new(ParticleFieldConfig::starfield(), b, 5);
    let half_diagonal = b.center().length();
    for p in field.particles() {
        assert!(p.base_radius >= 0.0 && p.base_radius <= half_diagonal + 1e-3);
        let spawn = b.center() + glam::Vec2::from_angle(p.base_angle) * p.base_radius;
        assert!(spawn.x >= -1e-3 && spawn.x <= b.width + 1e-3);
        assert!(spawn.y >= -1e-3 && spawn.y <= b.height + 1e-3);
    }
}

#[test]
fn parameters_respect_configured_ranges() {
    let config = ParticleFieldConfig::starfield();
    let field = ParticleField::new(config.clone(), REFERENCE, 11);
    for p in field.particles() {
        assert!(config.core_radius.contains(p.core_radius));
        assert!(config.base_alpha.contains(p.base_alpha));
        assert!(config.angular_velocity.contains(p.angular_velocity.abs()));
        assert!(config.wobble.amplitude.contains(p.wobble_amplitude));
        assert!(p.glow_size_multiplier >= 4.0 && p.glow_size_multiplier <= 17.0);
        assert!(config
            .glow_palette
            .iter()
            .any(|g| g.color == p.glow_color));
    }
}

#[test]
fn twinkle_share_is_about_one_fifth() {
    let mut config = ParticleFieldConfig::starfield();
    config.count = 4000;
    config.density_scaling = false;
    let field = ParticleField::new(config, REFERENCE, 21);
    let twinkling = field
        .particles()
        .iter()
        .filter(|p| p.pulse_frequency > 0.0)
        .count() as f32;
    let share = twinkling / field.len() as f32;
    assert!((0.15..=0.25).contains(&share), "share {share}");
}

#[test]
fn non_twinkling_particles_hold_steady_pulse() {
    let field = ParticleField::new(ParticleFieldConfig::starfield(), REFERENCE, 2);
    for p in field.particles().iter().filter(|p| p.pulse_frequency == 0.0) {
        assert_eq!(p.pulse(0.0), 1.0);
        assert_eq!(p.pulse(17.3), 1.0);
    }
    // Vortex twinkles everywhere, within [0.2, 1.0]
    let vortex = ParticleField::new(ParticleFieldConfig::vortex(), Bounds::new(280.0, 280.0), 2);
    for p in vortex.particles() {
        assert!(p.pulse_frequency > 0.0);
        for t in [0.0, 0.7, 5.0, 60.0] {
            let v = p.pulse(t);
            assert!((0.2 - 1e-5..=1.0 + 1e-5).contains(&v));
        }
    }
}

#[test]
fn samples_stay_drawable() {
    let field = ParticleField::new(ParticleFieldConfig::starfield(), REFERENCE, 8);
    for t in [0.0, 1.0, 120.0] {
        for s in field.sample(t) {
            assert!(s.position.is_finite());
            assert!(s.halo_radius >= 0.0);
            assert!(s.core_alpha > 0.0 && s.core_alpha <= 1.0);
        }
    }
}

#[test]
fn radius_never_goes_negative() {
    let field = ParticleField::new(ParticleFieldConfig::vortex(), Bounds::new(20.0, 20.0), 4);
    for p in field.particles() {
        for i in 0..100 {
            assert!(p.radius(i as f32 * 0.37) >= 0.0);
        }
    }
}

#[test]
fn palette_pick_follows_weights() {
    let config = ParticleFieldConfig::starfield();
    assert_eq!(config.glow_color_for(0.0), Rgb::WHITE);
    assert_eq!(config.glow_color_for(0.39), Rgb::WHITE);
    assert_eq!(config.glow_color_for(0.5), Rgb::new(100, 200, 255));
    assert_eq!(config.glow_color_for(0.99), Rgb::new(64, 224, 208));
    assert_eq!(config.glow_color_for(1.0), Rgb::new(64, 224, 208));
}

#[test]
fn presets_validate() {
    assert!(ParticleFieldConfig::starfield().validate().is_ok());
    assert!(ParticleFieldConfig::vortex().validate().is_ok());
    assert_eq!(ParticleFieldConfig::default(), ParticleFieldConfig::starfield());
}

#[test]
fn invalid_configs_are_rejected() {
    let mut c = ParticleFieldConfig::starfield();
    c.glow_palette.clear();
    assert_eq!(c.validate(), Err(ConfigError::EmptyPalette));

    let mut c = ParticleFieldConfig::starfield();
    c.glow_palette = smallvec::smallvec![GlowColor {
        color: Rgb::WHITE,
        weight: 0.0
    }];
    assert!(matches!(c.validate(), Err(ConfigError::PaletteWeight(_))));

    let mut c = ParticleFieldConfig::starfield();
    c.glow_size_tiers = smallvec::smallvec![GlowSizeTier {
        probability: 0.5,
        multiplier: Span::new(1.0, 2.0)
    }];
    assert!(matches!(c.validate(), Err(ConfigError::TierProbability(_))));

    let mut c = ParticleFieldConfig::starfield();
    c.core_radius = Span::new(3.0, 1.0);
    assert!(matches!(
        c.validate(),
        Err(ConfigError::InvertedRange { name: "core_radius", .. })
    ));

    let mut c = ParticleFieldConfig::starfield();
    c.pulse.enabled_fraction = 1.5;
    assert!(matches!(c.validate(), Err(ConfigError::Fraction { .. })));
}
