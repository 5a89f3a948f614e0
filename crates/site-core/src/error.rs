use thiserror::Error;

/// Rejected tuning values. Animation paths never produce these; they come
/// from `validate()` on the config structs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("glow palette is empty")]
    EmptyPalette,
    #[error("glow palette weights must sum to a positive value, got {0}")]
    PaletteWeight(f32),
    #[error("glow size tiers are empty")]
    EmptyTiers,
    #[error("glow size tier probabilities must sum to 1, got {0}")]
    TierProbability(f32),
    #[error("range `{name}` is inverted: {min} > {max}")]
    InvertedRange { name: &'static str, min: f32, max: f32 },
    #[error("fraction `{name}` must lie in [0, 1], got {value}")]
    Fraction { name: &'static str, value: f32 },
    #[error("orbit alphabet is empty")]
    EmptyAlphabet,
    #[error("`{name}` must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
}
