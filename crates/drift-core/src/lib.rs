//! Particle lifecycle and pooling core for the drift pointer trail.
//!
//! Platform-neutral: the field consumes a [`Surface`] drawing capability and
//! is driven by whatever per-frame scheduler the host provides. All
//! randomness flows through an explicitly seeded RNG so behavior is
//! reproducible on the host.

pub mod constants;
pub mod field;
pub mod input;
pub mod particle;
pub mod rng;
pub mod surface;

pub use constants::*;
pub use field::{ConfigError, FieldConfig, ParticleField};
pub use particle::Particle;
pub use surface::{CompositeMode, Surface};
