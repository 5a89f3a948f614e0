// Shared tuning constants for the decorative animation layer and scroll effects.

use std::f32::consts::TAU;

// Particle density scaling
pub const REFERENCE_VIEWPORT_WIDTH: f32 = 1280.0;
pub const REFERENCE_VIEWPORT_HEIGHT: f32 = 720.0;
pub const DENSITY_SCALE_MIN: f32 = 0.7;
pub const DENSITY_SCALE_MAX: f32 = 1.2;

// Whole-field coherent rotation (rad/s)
pub const STARFIELD_DRIFT_RATE: f32 = 0.003;
pub const VORTEX_DRIFT_RATE: f32 = 0.0015;

// Twinkle pulse: base + span * sin(..)
pub const PULSE_BASE: f32 = 0.6;
pub const PULSE_SPAN: f32 = 0.4;

// Halo gradient stops (offset, alpha factor of baseAlpha * pulse)
pub const HALO_STOPS: [(f32, f32); 4] = [(0.0, 0.6), (0.3, 0.4), (0.7, 0.1), (1.0, 0.0)];

// Core dot alpha = min(1, baseAlpha * (CORE_ALPHA_BASE + CORE_ALPHA_PULSE * pulse))
pub const CORE_ALPHA_BASE: f32 = 0.95;
pub const CORE_ALPHA_PULSE: f32 = 0.25;

// Orbit ring layout
pub const RING_COUNT: usize = 3;
pub const ORBIT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const ORBIT_RING_RADII: [f32; RING_COUNT] = [1.35, 1.42, 1.5];
// Tighter rings used by the knowledge portal on the landing page
pub const PORTAL_RING_RADII: [f32; RING_COUNT] = [1.0, 1.25, 1.45];
pub const ORBIT_RING_SPEEDS: [f32; RING_COUNT] = [0.12, 0.16, 0.2]; // rad/s
pub const ORBIT_FONT_SIZES: [f32; RING_COUNT] = [0.12, 0.15, 0.18]; // scene units
pub const ORBIT_ASPECT: [f32; 2] = [0.67, 1.0]; // x, y radius multipliers
pub const ORBIT_DEPTH_AMPLITUDE: f32 = 0.15;

// Pointer repulsion (scene units)
pub const REPEL_RADIUS: f32 = 0.8;
pub const REPEL_STRENGTH: f32 = 24.0;

// Displacement spring: natural frequency, damping ratio (1 = critical)
pub const SPRING_OMEGA: f32 = 8.0;
pub const SPRING_DAMPING_RATIO: f32 = 1.0;
pub const MAX_DISPLACEMENT: f32 = 1.0;

// Below this pointer distance the push direction is undefined
pub const REPEL_MIN_DISTANCE: f32 = 1e-4;

// Longest step fed to the spring integrator (a backgrounded tab can report seconds)
pub const MAX_FRAME_DELTA_SEC: f32 = 1.0 / 15.0;

// Per-glyph rotation jitter: (sin(ring * 1000 + index * 17.3456) - 0.5) * PI/3
pub const GLYPH_SEED_RING_MUL: f32 = 1000.0;
pub const GLYPH_SEED_INDEX_MUL: f32 = 17.3456;
pub const GLYPH_ROTATION_JITTER: f32 = std::f32::consts::FRAC_PI_3;

// Glyph color: hsl(HUE_BASE + HUE_STEP * i, 70%, LIGHTNESS_BASE + LIGHTNESS_STEP * (i % 3))
pub const GLYPH_HUE_BASE: f32 = 180.0;
pub const GLYPH_HUE_STEP: f32 = 7.0;
pub const GLYPH_SATURATION: f32 = 70.0;
pub const GLYPH_LIGHTNESS_BASE: f32 = 70.0;
pub const GLYPH_LIGHTNESS_STEP: f32 = 15.0;

// Scroll progress defaults
pub const PROGRESS_THRESHOLD_VH: f32 = 0.5;
pub const PROGRESS_RANGE_PADDING_PX: f32 = 96.0;
pub const PROGRESS_CENTER_OFFSET_PX: f32 = 20.0;
pub const PROGRESS_INFLATE_VH: f32 = 0.4;

// A section band "passes through" the viewport between its top touching the
// bottom edge and its bottom touching the top edge.
pub const PASS_THROUGH_INFLATE_VH: f32 = 0.5;

// Aurora glow keyframes over pass-through phase
pub const AURORA_KEYFRAMES: [(f32, f32); 4] = [(0.2, 0.0), (0.4, 1.0), (0.6, 1.0), (0.8, 0.0)];

// Pain-point panel keyframes over pass-through phase
pub const PAINS_OPACITY_KEYFRAMES: [(f32, f32); 3] = [(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)];
pub const PAINS_SHIFT_KEYFRAMES: [(f32, f32); 2] = [(0.0, 50.0), (1.0, -50.0)]; // percent

// Active-section observer margin (fraction of viewport trimmed top and bottom)
pub const ACTIVE_SECTION_MARGIN: f32 = 0.2;

// Back-to-top button threshold (px)
pub const BACK_TO_TOP_SCROLL_Y: f32 = 500.0;

// Nav underline gradient stops
pub const NAV_GRADIENT_STOPS: [[u8; 3]; 4] = [
    [0x3e, 0x91, 0xf7],
    [0xf0, 0xab, 0xfc],
    [0xfb, 0x92, 0x3c],
    [0xa8, 0x55, 0xf7],
];
pub const NAV_GRADIENT_FALLBACK: ([u8; 3], [u8; 3]) = ([0x06, 0xb6, 0xd4], [0x08, 0x91, 0xb2]);

#[inline]
pub fn wrap_angle(a: f32) -> f32 {
    a.rem_euclid(TAU)
}
