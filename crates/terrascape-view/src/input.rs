use std::collections::HashSet;

use glam::Vec2;

/// Platform virtual-key code.
pub type KeyCode = u32;

/// Virtual-key codes used by the default camera bindings.
pub mod keys {
    use super::KeyCode;

    pub const SPACE: KeyCode = 0x20;
    pub const CONTROL: KeyCode = 0x11;
    pub const A: KeyCode = 0x41;
    pub const D: KeyCode = 0x44;
    pub const S: KeyCode = 0x53;
    pub const W: KeyCode = 0x57;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left = 0,
    Right = 1,
    Middle = 2,
}

/// Window events translated by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    MouseDown(MouseButton),
    MouseUp(MouseButton),
    MouseMove { x: f32, y: f32 },
    Wheel(f32),
}

/// Accumulated input state read each frame by the application.
///
/// "Pressed"/"released" flags last for the frame in which the event arrived;
/// call [`end_frame`](Self::end_frame) after the frame's update consumed them.
#[derive(Debug, Default)]
pub struct InputState {
    keys_pressed: HashSet<KeyCode>,
    keys_released: HashSet<KeyCode>,
    keys_held: HashSet<KeyCode>,
    buttons_pressed: [bool; 3],
    buttons_released: [bool; 3],
    buttons_held: [bool; 3],
    mouse_position: Option<Vec2>,
    mouse_delta: Vec2,
    wheel_delta: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                // Auto-repeat keydowns don't re-trigger the pressed edge.
                if self.keys_held.insert(key) {
                    self.keys_pressed.insert(key);
                }
            }
            InputEvent::KeyUp(key) => {
                self.keys_held.remove(&key);
                self.keys_released.insert(key);
            }
            InputEvent::MouseDown(button) => {
                self.buttons_pressed[button as usize] = true;
                self.buttons_held[button as usize] = true;
            }
            InputEvent::MouseUp(button) => {
                self.buttons_released[button as usize] = true;
                self.buttons_held[button as usize] = false;
            }
            InputEvent::MouseMove { x, y } => {
                let position = Vec2::new(x, y);
                if let Some(previous) = self.mouse_position {
                    self.mouse_delta += position - previous;
                }
                self.mouse_position = Some(position);
            }
            InputEvent::Wheel(delta) => self.wheel_delta += delta,
        }
    }

    /// Clear per-frame edges and deltas. Held state persists.
    pub fn end_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed = [false; 3];
        self.buttons_released = [false; 3];
        self.mouse_delta = Vec2::ZERO;
        self.wheel_delta = 0.0;
    }

    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    pub fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed[button as usize]
    }

    pub fn is_mouse_button_released(&self, button: MouseButton) -> bool {
        self.buttons_released[button as usize]
    }

    pub fn is_mouse_button_held(&self, button: MouseButton) -> bool {
        self.buttons_held[button as usize]
    }

    /// Last known cursor position (zero before the first move).
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position.unwrap_or(Vec2::ZERO)
    }

    /// Cursor movement accumulated this frame.
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    pub fn wheel_delta(&self) -> f32 {
        self.wheel_delta
    }
}
