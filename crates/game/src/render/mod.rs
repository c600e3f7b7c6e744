//! Rendering: clear to paper, draw the overlay for the current stage, present.

mod overlay;

use anyhow::Result;

use crate::Slideshow;

const PAPER: wgpu::Color = wgpu::Color {
    r: 0.98,
    g: 0.96,
    b: 0.91,
    a: 1.0,
};

/// Draw one frame. Called from `Slideshow::render()`.
pub fn run(state: &mut Slideshow) -> Result<()> {
    let (output, mut encoder) = match state.renderer.begin_frame() {
        Ok(frame) => frame,
        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
            state.renderer.reconfigure();
            return Ok(());
        }
        Err(wgpu::SurfaceError::Timeout) => {
            log::warn!("Surface timeout, skipping frame");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

    let (sw, sh) = state.renderer.dimensions();
    let tb = overlay::build(state, sw as f32, sh as f32);

    state.renderer.clear(&mut encoder, &view, PAPER);
    state
        .renderer
        .render_overlay(&mut encoder, &view, &tb.vertices, &tb.indices);
    state.renderer.end_frame(output, encoder);
    Ok(())
}
