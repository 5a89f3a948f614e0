pub mod constants;
pub mod effects;
pub mod error;
pub mod orbit;
pub mod particles;
pub mod scroll;
pub mod sections;
pub mod ui;

pub use error::ConfigError;
pub use orbit::{LetterPose, OrbitConfig, OrbitLetter, OrbitRing};
pub use particles::{Bounds, Particle, ParticleField, ParticleFieldConfig, ParticleSample, Rgb};
pub use scroll::{
    ElementRect, FrameCoalescer, LayoutProbe, ProgressMap, ProgressTuning, SectionGeometry,
    SectionProgress, SectionTracker, TrackSpec,
};
pub use sections::{ActiveSection, SectionId};
pub use ui::{ImageModal, ModalKey, QualificationTab, SiteState};
