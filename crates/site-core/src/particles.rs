//! Radial particle fields: the page-wide starfield and the vortex behind the
//! portrait share this one simulation, differing only in their
//! [`ParticleFieldConfig`].
//!
//! A field owns its particles exclusively. Motion is a pure function of the
//! stored parameters and elapsed seconds, so the renderer can call
//! [`ParticleField::sample`] at any frame rate.

use crate::constants::*;
use crate::error::ConfigError;
use glam::Vec2;
use rand::prelude::*;
use smallvec::{smallvec, SmallVec};
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Closed interval sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max <= self.min {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }

    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvertedRange {
                name,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowColor {
    pub color: Rgb,
    pub weight: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowSizeTier {
    pub probability: f32,
    pub multiplier: Span,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WobbleConfig {
    pub amplitude: Span,
    pub frequency: Span,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseConfig {
    pub frequency: Span,
    /// Share of particles that twinkle; the rest keep pulse = 1.
    pub enabled_fraction: f32,
}

/// Every tunable of a particle field.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleFieldConfig {
    pub count: usize,
    /// Scale `count` by viewport area relative to 1280x720.
    pub density_scaling: bool,
    /// Coherent whole-field rotation in rad/s.
    pub center_drift_rate: f32,
    pub core_radius: Span,
    pub base_alpha: Span,
    /// Magnitude of the personal drift; the sign is drawn per particle.
    pub angular_velocity: Span,
    /// Magnitude of the second drift term; the sign is drawn per particle.
    pub personal_spin: Span,
    pub wobble: WobbleConfig,
    pub pulse: PulseConfig,
    pub glow_palette: SmallVec<[GlowColor; 4]>,
    pub glow_size_tiers: SmallVec<[GlowSizeTier; 4]>,
}

impl ParticleFieldConfig {
    /// Full-viewport starfield.
    pub fn starfield() -> Self {
        Self {
            count: 156,
            density_scaling: true,
            center_drift_rate: STARFIELD_DRIFT_RATE,
            core_radius: Span::new(0.6, 2.0),
            base_alpha: Span::new(0.5, 1.0),
            angular_velocity: Span::new(0.005, 0.025),
            personal_spin: Span::new(0.0, 0.015),
            wobble: WobbleConfig {
                amplitude: Span::new(2.0, 8.0),
                frequency: Span::new(0.2, 0.9),
            },
            pulse: PulseConfig {
                frequency: Span::new(0.5, 1.3),
                enabled_fraction: 0.2,
            },
            glow_palette: smallvec![
                GlowColor { color: Rgb::WHITE, weight: 0.4 },
                GlowColor { color: Rgb::new(100, 200, 255), weight: 0.3 },
                GlowColor { color: Rgb::new(64, 224, 208), weight: 0.3 },
            ],
            glow_size_tiers: smallvec![
                GlowSizeTier { probability: 0.6, multiplier: Span::new(4.0, 7.0) },
                GlowSizeTier { probability: 0.25, multiplier: Span::new(7.0, 11.0) },
                GlowSizeTier { probability: 0.15, multiplier: Span::new(11.0, 17.0) },
            ],
        }
    }

    /// Container-bounded vortex behind the portrait.
    pub fn vortex() -> Self {
        Self {
            count: 300,
            density_scaling: false,
            center_drift_rate: VORTEX_DRIFT_RATE,
            core_radius: Span::new(0.9, 2.5),
            base_alpha: Span::new(0.65, 1.0),
            angular_velocity: Span::new(0.003, 0.015),
            personal_spin: Span::new(0.0, 0.01),
            wobble: WobbleConfig {
                amplitude: Span::new(1.6, 5.1),
                frequency: Span::new(0.18, 0.68),
            },
            pulse: PulseConfig {
                frequency: Span::new(0.35, 0.95),
                enabled_fraction: 1.0,
            },
            glow_palette: smallvec![
                GlowColor { color: Rgb::new(76, 29, 149), weight: 0.5 },
                GlowColor { color: Rgb::new(124, 58, 237), weight: 0.5 },
            ],
            glow_size_tiers: smallvec![
                GlowSizeTier { probability: 0.8, multiplier: Span::new(2.0, 4.0) },
                GlowSizeTier { probability: 0.2, multiplier: Span::new(4.0, 6.0) },
            ],
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.core_radius.validate("core_radius")?;
        self.base_alpha.validate("base_alpha")?;
        self.angular_velocity.validate("angular_velocity")?;
        self.personal_spin.validate("personal_spin")?;
        self.wobble.amplitude.validate("wobble.amplitude")?;
        self.wobble.frequency.validate("wobble.frequency")?;
        self.pulse.frequency.validate("pulse.frequency")?;
        if !(0.0..=1.0).contains(&self.pulse.enabled_fraction) {
            return Err(ConfigError::Fraction {
                name: "pulse.enabled_fraction",
                value: self.pulse.enabled_fraction,
            });
        }
        if self.glow_palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        let total: f32 = self.glow_palette.iter().map(|g| g.weight.max(0.0)).sum();
        if total <= 0.0 {
            return Err(ConfigError::PaletteWeight(total));
        }
        if self.glow_size_tiers.is_empty() {
            return Err(ConfigError::EmptyTiers);
        }
        let p: f32 = self.glow_size_tiers.iter().map(|t| t.probability).sum();
        if (p - 1.0).abs() > 1e-3 {
            return Err(ConfigError::TierProbability(p));
        }
        for tier in &self.glow_size_tiers {
            tier.multiplier.validate("glow_size_tiers.multiplier")?;
        }
        Ok(())
    }

    /// Pick a palette entry by a uniform draw in `[0, 1]`.
    pub fn glow_color_for(&self, draw: f32) -> Rgb {
        let total: f32 = self.glow_palette.iter().map(|g| g.weight.max(0.0)).sum();
        let mut target = draw.clamp(0.0, 1.0) * total;
        for g in &self.glow_palette {
            let w = g.weight.max(0.0);
            if target < w {
                return g.color;
            }
            target -= w;
        }
        self.glow_palette.last().map(|g| g.color).unwrap_or(Rgb::WHITE)
    }

    fn glow_tier_for(&self, draw: f32) -> Option<&GlowSizeTier> {
        let mut acc = 0.0;
        for tier in &self.glow_size_tiers {
            acc += tier.probability;
            if draw < acc {
                return Some(tier);
            }
        }
        self.glow_size_tiers.last()
    }
}

impl Default for ParticleFieldConfig {
    fn default() -> Self {
        Self::starfield()
    }
}

/// Drawing surface size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.area() <= 0.0 || !self.area().is_finite()
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Particle count for a requested `count` over a viewport of `bounds`:
/// `round(count * clamp(area / (1280*720), 0.7, 1.2))`.
pub fn scaled_count(count: usize, bounds: Bounds) -> usize {
    let reference = REFERENCE_VIEWPORT_WIDTH * REFERENCE_VIEWPORT_HEIGHT;
    let ratio = (bounds.area() / reference).clamp(DENSITY_SCALE_MIN, DENSITY_SCALE_MAX);
    (count as f32 * ratio).round() as usize
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub base_angle: f32,
    pub base_radius: f32,
    pub core_radius: f32,
    pub base_alpha: f32,
    pub angular_velocity: f32,
    pub wobble_amplitude: f32,
    pub wobble_frequency: f32,
    pub wobble_phase: f32,
    /// Zero disables the twinkle.
    pub pulse_frequency: f32,
    pub pulse_phase: f32,
    pub personal_spin: f32,
    pub tint: f32,
    pub glow_color: Rgb,
    pub glow_size_multiplier: f32,
}

impl Particle {
    fn generate<R: Rng + ?Sized>(rng: &mut R, config: &ParticleFieldConfig, bounds: Bounds) -> Self {
        let center = bounds.center();
        let spawn = Vec2::new(
            rng.gen::<f32>() * bounds.width,
            rng.gen::<f32>() * bounds.height,
        );
        let offset = spawn - center;
        let tint = rng.gen::<f32>();
        let glow_size_multiplier = config
            .glow_tier_for(rng.gen::<f32>())
            .map(|t| t.multiplier.sample(rng))
            .unwrap_or(1.0);
        let twinkle = rng.gen::<f32>() < config.pulse.enabled_fraction;
        Self {
            base_angle: offset.y.atan2(offset.x),
            base_radius: offset.length(),
            core_radius: config.core_radius.sample(rng),
            base_alpha: config.base_alpha.sample(rng),
            angular_velocity: {
                let speed = config.angular_velocity.sample(rng);
                signed(rng, speed)
            },
            wobble_amplitude: config.wobble.amplitude.sample(rng),
            wobble_frequency: config.wobble.frequency.sample(rng),
            wobble_phase: rng.gen::<f32>() * TAU,
            pulse_frequency: if twinkle {
                config.pulse.frequency.sample(rng)
            } else {
                0.0
            },
            pulse_phase: rng.gen::<f32>() * TAU,
            personal_spin: {
                let speed = config.personal_spin.sample(rng);
                signed(rng, speed)
            },
            tint,
            glow_color: config.glow_color_for(tint),
            glow_size_multiplier,
        }
    }

    #[inline]
    pub fn angle(&self, t: f32, drift_rate: f32) -> f32 {
        self.base_angle + t * drift_rate + t * self.angular_velocity + t * self.personal_spin
    }

    #[inline]
    pub fn radius(&self, t: f32) -> f32 {
        (self.base_radius + self.wobble_amplitude * (t * self.wobble_frequency + self.wobble_phase).sin())
            .max(0.0)
    }

    #[inline]
    pub fn pulse(&self, t: f32) -> f32 {
        if self.pulse_frequency > 0.0 {
            PULSE_BASE + PULSE_SPAN * (t * self.pulse_frequency + self.pulse_phase).sin()
        } else {
            1.0
        }
    }

    pub fn position(&self, center: Vec2, t: f32, drift_rate: f32) -> Vec2 {
        center + Vec2::from_angle(self.angle(t, drift_rate)) * self.radius(t)
    }

    pub fn sample(&self, center: Vec2, t: f32, drift_rate: f32) -> ParticleSample {
        let pulse = self.pulse(t);
        ParticleSample {
            position: self.position(center, t, drift_rate),
            halo_radius: self.core_radius * self.glow_size_multiplier * pulse,
            halo_alpha: self.base_alpha * pulse,
            glow_color: self.glow_color,
            core_radius: self.core_radius,
            core_alpha: (self.base_alpha * (CORE_ALPHA_BASE + CORE_ALPHA_PULSE * pulse)).min(1.0),
        }
    }
}

fn signed<R: Rng + ?Sized>(rng: &mut R, magnitude: f32) -> f32 {
    if rng.gen_bool(0.5) {
        -magnitude
    } else {
        magnitude
    }
}

/// What the renderer draws for one particle on one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSample {
    pub position: Vec2,
    pub halo_radius: f32,
    /// Alpha at the halo's center stop, before [`HALO_STOPS`] factors.
    pub halo_alpha: f32,
    pub glow_color: Rgb,
    pub core_radius: f32,
    pub core_alpha: f32,
}

pub struct ParticleField {
    config: ParticleFieldConfig,
    bounds: Bounds,
    particles: Vec<Particle>,
    rng: StdRng,
    generation: u64,
}

impl ParticleField {
    /// Seeded field; zero-area bounds give an empty field.
    pub fn new(config: ParticleFieldConfig, bounds: Bounds, seed: u64) -> Self {
        Self::with_rng(config, bounds, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: ParticleFieldConfig, bounds: Bounds) -> Self {
        Self::with_rng(config, bounds, StdRng::from_entropy())
    }

    fn with_rng(config: ParticleFieldConfig, bounds: Bounds, rng: StdRng) -> Self {
        let mut field = Self {
            config,
            bounds,
            particles: Vec::new(),
            rng,
            generation: 0,
        };
        field.regenerate();
        field
    }

    /// Throw away every particle and draw a fresh set for `bounds`.
    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.generation += 1;
        self.regenerate();
    }

    fn regenerate(&mut self) {
        self.particles.clear();
        if self.bounds.is_empty() {
            log::debug!("[field] zero-area bounds, no particles");
            return;
        }
        let count = if self.config.density_scaling {
            scaled_count(self.config.count, self.bounds)
        } else {
            self.config.count
        };
        let bounds = self.bounds;
        let config = &self.config;
        let rng = &mut self.rng;
        self.particles
            .extend((0..count).map(|_| Particle::generate(rng, config, bounds)));
        log::debug!(
            "[field] generated {} particles for {:.0}x{:.0}",
            count,
            bounds.width,
            bounds.height
        );
    }

    pub fn sample(&self, t: f32) -> impl Iterator<Item = ParticleSample> + '_ {
        let center = self.bounds.center();
        let drift = self.config.center_drift_rate;
        self.particles.iter().map(move |p| p.sample(center, t, drift))
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn config(&self) -> &ParticleFieldConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Bumped on every [`resize`](Self::resize).
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
