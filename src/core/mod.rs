//! Platform-agnostic core - shared between the WASM background and the CLI

pub mod config;
pub mod engine;
pub mod field;
pub mod particle;
pub mod pointer;
pub mod simulator;

pub use config::FieldConfig;
pub use engine::{FieldEngine, RunState};
pub use field::{particle_count, Field, FieldRng, FIELD_CAPACITY};
pub use particle::Particle;
pub use pointer::{DeviceClass, PointerState};
