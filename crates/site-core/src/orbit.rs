//! Glyphs riding three elliptical orbits, pushed aside by the pointer and
//! pulled back by a damped spring.
//!
//! The simulation lives in a flat 2D scene plane. A renderer reads
//! [`LetterPose`]s and maps them into whatever projection it uses; nothing
//! here knows about canvases or scene graphs.

use crate::constants::*;
use crate::error::ConfigError;
use glam::{Vec2, Vec3};
use std::f32::consts::{FRAC_PI_2, TAU};

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitConfig {
    pub alphabet: Vec<char>,
    pub ring_radii: [f32; RING_COUNT],
    /// Angular speed of each ring in rad/s.
    pub ring_speeds: [f32; RING_COUNT],
    pub font_sizes: [f32; RING_COUNT],
    /// Horizontal/vertical radius multipliers.
    pub aspect: Vec2,
    pub depth_amplitude: f32,
    pub repel_radius: f32,
    pub repel_strength: f32,
    /// Natural frequency of the displacement spring (rad/s).
    pub spring_omega: f32,
    /// 1.0 is critical damping.
    pub damping_ratio: f32,
    pub max_displacement: f32,
}

impl OrbitConfig {
    pub fn new(
        alphabet: &str,
        ring_radii: [f32; RING_COUNT],
        ring_speeds: [f32; RING_COUNT],
        aspect: Vec2,
    ) -> Self {
        Self {
            alphabet: alphabet.chars().collect(),
            ring_radii,
            ring_speeds,
            aspect,
            ..Self::default()
        }
    }

    /// Ring layout of the landing page's knowledge portal.
    pub fn portal() -> Self {
        Self::new(
            ORBIT_ALPHABET,
            PORTAL_RING_RADII,
            ORBIT_RING_SPEEDS,
            Vec2::from_array(ORBIT_ASPECT),
        )
    }

    /// Spring constant `k = omega^2`.
    #[inline]
    pub fn stiffness(&self) -> f32 {
        self.spring_omega * self.spring_omega
    }

    /// Velocity drag rate `c = 2 * zeta * omega` (per second).
    #[inline]
    pub fn damping_rate(&self) -> f32 {
        2.0 * self.damping_ratio * self.spring_omega
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.alphabet.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        for (name, value) in [
            ("spring_omega", self.spring_omega),
            ("damping_ratio", self.damping_ratio),
            ("max_displacement", self.max_displacement),
            ("repel_radius", self.repel_radius),
            ("aspect.x", self.aspect.x),
            ("aspect.y", self.aspect.y),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        Ok(())
    }
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            alphabet: ORBIT_ALPHABET.chars().collect(),
            ring_radii: ORBIT_RING_RADII,
            ring_speeds: ORBIT_RING_SPEEDS,
            font_sizes: ORBIT_FONT_SIZES,
            aspect: Vec2::from_array(ORBIT_ASPECT),
            depth_amplitude: ORBIT_DEPTH_AMPLITUDE,
            repel_radius: REPEL_RADIUS,
            repel_strength: REPEL_STRENGTH,
            spring_omega: SPRING_OMEGA,
            damping_ratio: SPRING_DAMPING_RATIO,
            max_displacement: MAX_DISPLACEMENT,
        }
    }
}

#[inline]
pub fn ellipse_position(radius: f32, angle: f32, aspect: Vec2) -> Vec2 {
    Vec2::new(
        radius * aspect.x * angle.cos(),
        radius * aspect.y * angle.sin(),
    )
}

/// Round-robin ring assignment by alphabet position.
#[inline]
pub fn ring_for_index(index: usize) -> usize {
    index % RING_COUNT
}

/// Fixed per-glyph tilt in radians; same value for the lifetime of the ring.
#[inline]
pub fn rotation_jitter(ring: usize, index: usize) -> f32 {
    let seed = ring as f32 * GLYPH_SEED_RING_MUL + index as f32 * GLYPH_SEED_INDEX_MUL;
    (seed.sin() - 0.5) * GLYPH_ROTATION_JITTER
}

#[inline]
pub fn glyph_hue(index: usize) -> f32 {
    (GLYPH_HUE_BASE + GLYPH_HUE_STEP * index as f32) % 360.0
}

#[inline]
pub fn glyph_lightness(index: usize) -> f32 {
    GLYPH_LIGHTNESS_BASE + GLYPH_LIGHTNESS_STEP * (index % 3) as f32
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitLetter {
    pub glyph: char,
    pub ring: usize,
    pub index: usize,
    /// Angle on the orbit before ring rotation.
    pub phase: f32,
    pub displacement: Vec2,
    pub velocity: Vec2,
    pub hue: f32,
    pub lightness: f32,
    pub rotation_offset: f32,
    pub depth: f32,
}

impl OrbitLetter {
    fn new(glyph: char, index: usize, alphabet_len: usize, depth_amplitude: f32) -> Self {
        let ring = ring_for_index(index);
        Self {
            glyph,
            ring,
            index,
            phase: index as f32 / alphabet_len.max(1) as f32 * TAU,
            displacement: Vec2::ZERO,
            velocity: Vec2::ZERO,
            hue: glyph_hue(index),
            lightness: glyph_lightness(index),
            rotation_offset: rotation_jitter(ring, index),
            depth: (index as f32).sin() * depth_amplitude,
        }
    }

    #[inline]
    pub fn base_angle(&self, ring_angle: f32) -> f32 {
        self.phase + ring_angle
    }
}

/// Final placement of one glyph for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LetterPose {
    pub glyph: char,
    pub ring: usize,
    pub index: usize,
    /// Scene-space position; `z` is the fixed per-glyph depth.
    pub position: Vec3,
    /// Rotation about the view axis in radians.
    pub rotation: f32,
    pub font_size: f32,
    pub hue: f32,
    pub lightness: f32,
}

pub struct OrbitRing {
    config: OrbitConfig,
    letters: Vec<OrbitLetter>,
    ring_angles: [f32; RING_COUNT],
    elapsed: f32,
}

impl OrbitRing {
    pub fn new(config: OrbitConfig) -> Self {
        let n = config.alphabet.len();
        let letters = config
            .alphabet
            .iter()
            .enumerate()
            .map(|(i, &glyph)| OrbitLetter::new(glyph, i, n, config.depth_amplitude))
            .collect();
        Self {
            config,
            letters,
            ring_angles: [0.0; RING_COUNT],
            elapsed: 0.0,
        }
    }

    /// Advance rings and springs by one frame. `pointer` is the pointer's
    /// scene-plane position, `None` when there is no hovering pointer.
    pub fn on_frame(&mut self, elapsed: f32, delta: f32, pointer: Option<Vec2>) {
        self.elapsed = elapsed;
        let dt = if delta.is_finite() {
            delta.clamp(0.0, MAX_FRAME_DELTA_SEC)
        } else {
            0.0
        };
        if dt == 0.0 {
            return;
        }
        for (angle, speed) in self.ring_angles.iter_mut().zip(self.config.ring_speeds) {
            *angle = wrap_angle(*angle + speed * dt);
        }
        let pointer = pointer.filter(|p| p.is_finite());

        let k = self.config.stiffness();
        let drag = (-self.config.damping_rate() * dt).exp();
        for letter in &mut self.letters {
            let ideal = ellipse_position(
                self.config.ring_radii[letter.ring],
                letter.base_angle(self.ring_angles[letter.ring]),
                self.config.aspect,
            );
            let mut force = match pointer {
                Some(p) => repulsion(
                    ideal + letter.displacement,
                    p,
                    self.config.repel_radius,
                    self.config.repel_strength,
                ),
                None => Vec2::ZERO,
            };
            force -= letter.displacement * k;
            letter.velocity = (letter.velocity + force * dt) * drag;
            letter.displacement = (letter.displacement + letter.velocity * dt)
                .clamp_length_max(self.config.max_displacement);
        }
    }

    pub fn pose(&self, letter: &OrbitLetter) -> LetterPose {
        let angle = letter.base_angle(self.ring_angles[letter.ring]);
        let ideal = ellipse_position(self.config.ring_radii[letter.ring], angle, self.config.aspect);
        let p = ideal + letter.displacement;
        LetterPose {
            glyph: letter.glyph,
            ring: letter.ring,
            index: letter.index,
            position: p.extend(letter.depth),
            rotation: angle + FRAC_PI_2 + letter.rotation_offset,
            font_size: self.config.font_sizes[letter.ring],
            hue: letter.hue,
            lightness: letter.lightness,
        }
    }

    pub fn poses(&self) -> impl Iterator<Item = LetterPose> + '_ {
        self.letters.iter().map(|l| self.pose(l))
    }

    pub fn letters(&self) -> &[OrbitLetter] {
        &self.letters
    }

    pub fn ring_angles(&self) -> [f32; RING_COUNT] {
        self.ring_angles
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Largest outer extent of any orbit, for fitting the camera.
    pub fn extent(&self) -> Vec2 {
        let r = self.config.ring_radii.iter().copied().fold(0.0, f32::max) + self.config.max_displacement;
        Vec2::new(r * self.config.aspect.x, r * self.config.aspect.y)
    }
}

/// Outward push with linear falloff, zero outside `radius` or on top of the pointer.
#[inline]
pub fn repulsion(position: Vec2, pointer: Vec2, radius: f32, strength: f32) -> Vec2 {
    let away = position - pointer;
    let dist = away.length();
    if dist >= radius || dist <= REPEL_MIN_DISTANCE {
        return Vec2::ZERO;
    }
    away / dist * (1.0 - dist / radius) * strength
}
