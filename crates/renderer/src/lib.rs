//! 2D overlay renderer on wgpu: solid shapes and bitmap text.

pub mod overlay;
pub mod pipeline;
pub mod renderer;

pub use overlay::*;
pub use pipeline::*;
pub use renderer::*;
