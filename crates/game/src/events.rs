//! Window event handling for the slideshow.

use winit::event::WindowEvent;
use winit::keyboard::PhysicalKey;

impl crate::Slideshow {
    /// Handle a window event. Returns true if the app should exit.
    pub(crate) fn handle_window_event(&mut self, event: WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => {
                self.shutdown();
                true
            }
            WindowEvent::Resized(size) => {
                self.renderer.resize(size);
                false
            }
            WindowEvent::Focused(false) => {
                self.input.reset();
                false
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    self.input.process_keyboard(key, event.state);
                }
                false
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.input.process_mouse_button(button, state);
                false
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input.process_cursor_position((position.x, position.y));
                false
            }
            WindowEvent::RedrawRequested => {
                self.update();
                if !self.running {
                    return true;
                }
                if let Err(e) = self.render() {
                    log::error!("Render error: {}", e);
                }
                self.renderer.window().request_redraw();
                false
            }
            _ => false,
        }
    }
}
