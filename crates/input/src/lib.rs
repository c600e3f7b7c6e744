//! Input handling for keyboard and mouse.
//!
//! Events are fed in as winit delivers them; the frame update reads the
//! per-frame sets and then calls [`InputState::end_frame`].

use glam::Vec2;
use std::collections::HashSet;

/// Manages input state for the current frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently held down.
    keys_held: HashSet<KeyCode>,
    /// Keys pressed this frame.
    keys_pressed: HashSet<KeyCode>,

    /// Mouse buttons currently held.
    mouse_held: HashSet<MouseButton>,
    /// Mouse buttons pressed this frame.
    mouse_pressed: HashSet<MouseButton>,

    /// Mouse position in window coordinates.
    mouse_position: Vec2,
    /// Cursor position at every left click this frame, in order.
    clicks: Vec<Vec2>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-frame state. Call once the frame has consumed its input.
    pub fn end_frame(&mut self) {
        self.keys_pressed.clear();
        self.mouse_pressed.clear();
        self.clicks.clear();
    }

    /// Forget everything, e.g. when the window loses focus.
    pub fn reset(&mut self) {
        self.keys_held.clear();
        self.mouse_held.clear();
        self.end_frame();
    }

    /// Process a keyboard event.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.keys_held.contains(&key) {
                    self.keys_pressed.insert(key);
                }
                self.keys_held.insert(key);
            }
            ElementState::Released => {
                self.keys_held.remove(&key);
            }
        }
    }

    /// Process a mouse button event.
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.mouse_held.contains(&button) {
                    self.mouse_pressed.insert(button);
                    if button == MouseButton::Left {
                        self.clicks.push(self.mouse_position);
                    }
                }
                self.mouse_held.insert(button);
            }
            ElementState::Released => {
                self.mouse_held.remove(&button);
            }
        }
    }

    /// Process cursor position update.
    pub fn process_cursor_position(&mut self, position: (f64, f64)) {
        self.mouse_position = Vec2::new(position.0 as f32, position.1 as f32);
    }

    // Query methods

    /// Check if a key is currently held.
    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Check if a key was pressed this frame.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Check if a mouse button is held.
    pub fn is_mouse_held(&self, button: MouseButton) -> bool {
        self.mouse_held.contains(&button)
    }

    /// Check if a mouse button was pressed this frame.
    pub fn is_mouse_pressed(&self, button: MouseButton) -> bool {
        self.mouse_pressed.contains(&button)
    }

    /// Get the mouse position in window coordinates.
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    /// Left-click positions this frame (window pixels).
    pub fn clicks(&self) -> &[Vec2] {
        &self.clicks
    }

    /// Right arrow: next stage.
    pub fn is_next_pressed(&self) -> bool {
        self.is_key_pressed(KeyCode::ArrowRight)
    }

    /// Left arrow: previous stage.
    pub fn is_previous_pressed(&self) -> bool {
        self.is_key_pressed(KeyCode::ArrowLeft)
    }

    /// M toggles the background music.
    pub fn is_music_toggle_pressed(&self) -> bool {
        self.is_key_pressed(KeyCode::KeyM)
    }

    /// Enter or Space.
    pub fn is_confirm_pressed(&self) -> bool {
        self.is_key_pressed(KeyCode::Enter)
            || self.is_key_pressed(KeyCode::NumpadEnter)
            || self.is_key_pressed(KeyCode::Space)
    }

    pub fn is_quit_pressed(&self) -> bool {
        self.is_key_pressed(KeyCode::Escape)
    }
}

// Re-export for convenience
pub use winit::event::{ElementState, MouseButton};
pub use winit::keyboard::KeyCode;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_press_is_one_shot() {
        let mut input = InputState::new();
        input.process_keyboard(KeyCode::ArrowRight, ElementState::Pressed);
        assert!(input.is_next_pressed());
        assert!(input.is_key_held(KeyCode::ArrowRight));

        input.end_frame();
        // OS key repeat delivers another Pressed while held.
        input.process_keyboard(KeyCode::ArrowRight, ElementState::Pressed);
        assert!(!input.is_next_pressed());

        input.process_keyboard(KeyCode::ArrowRight, ElementState::Released);
        assert!(!input.is_key_held(KeyCode::ArrowRight));
    }

    #[test]
    fn clicks_capture_cursor_at_press_time() {
        let mut input = InputState::new();
        input.process_cursor_position((10.0, 20.0));
        input.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        input.process_mouse_button(MouseButton::Left, ElementState::Released);
        input.process_cursor_position((30.5, 40.0));
        input.process_mouse_button(MouseButton::Left, ElementState::Pressed);

        assert_eq!(input.clicks(), &[Vec2::new(10.0, 20.0), Vec2::new(30.5, 40.0)]);
        assert!(input.is_mouse_pressed(MouseButton::Left));

        input.end_frame();
        assert!(input.clicks().is_empty());
        assert!(input.is_mouse_held(MouseButton::Left));
    }

    #[test]
    fn right_click_is_not_a_click() {
        let mut input = InputState::new();
        input.process_mouse_button(MouseButton::Right, ElementState::Pressed);
        assert!(input.clicks().is_empty());
        assert!(input.is_mouse_pressed(MouseButton::Right));
    }

    #[test]
    fn confirm_accepts_enter_and_space() {
        let mut input = InputState::new();
        input.process_keyboard(KeyCode::Space, ElementState::Pressed);
        assert!(input.is_confirm_pressed());
        input.reset();
        assert!(!input.is_confirm_pressed());
        assert!(!input.is_key_held(KeyCode::Space));
    }
}
