//! Rendering: the `Surface` seam, the field renderer, and surface backends

mod recording;
mod renderer;
mod surface;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
mod canvas;

pub use recording::{DrawCommand, RecordingSurface};
pub use renderer::Renderer;
pub use surface::{GradientStop, Glow, Surface};

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub use canvas::Canvas2dSurface;
