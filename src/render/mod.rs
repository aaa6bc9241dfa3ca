//! Rendering: the drawing-surface abstraction and the frame pipeline.

#[cfg(target_arch = "wasm32")]
mod canvas;
mod pipeline;
mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use pipeline::draw_frame;
pub use surface::{DrawSurface, PaintState, DEFAULT_FONT};
