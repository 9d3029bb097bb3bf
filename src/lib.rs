//! Ambient particle field - decorative animated background
//!
//! A field of glowing points that drift, get pushed away by the pointer,
//! spring back to their anchors, and link up with faint lines when close.
//!
//! - `core`: platform-agnostic field, pointer tracking and physics
//! - `render`: the `Surface` seam and the field renderer
//! - `web` (wasm): `ParticleBackground`, the handle a page mounts on a canvas
//!
//! The native `field-cli` binary runs the same engine headless.

pub mod core;
pub mod error;
pub mod render;
pub mod stats;
pub mod theme;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub use web::ParticleBackground;

pub use crate::core::{DeviceClass, Field, FieldConfig, FieldEngine, FieldRng, Particle, PointerState, RunState};
pub use error::{FieldError, Result};
pub use render::{RecordingSurface, Renderer, Surface};
