use glam::{Mat4, Vec3};

use crate::input::{keys, InputState, KeyCode, MouseButton};

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.0;
pub const DEFAULT_SENSITIVITY: f32 = 0.2;
pub const DEFAULT_ZOOM: f32 = 45.0;

const PITCH_LIMIT: f32 = 89.0;
const ZOOM_MIN: f32 = 1.0;
const ZOOM_MAX: f32 = 45.0;
const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// Default key bindings for `FlyCamera::update`.
pub const KEY_BINDINGS: [(KeyCode, Direction); 6] = [
    (keys::W, Direction::Forward),
    (keys::S, Direction::Backward),
    (keys::A, Direction::Left),
    (keys::D, Direction::Right),
    (keys::SPACE, Direction::Up),
    (keys::CONTROL, Direction::Down),
];

/// Euler-angle fly camera for a left-handed (Direct3D style) view space.
/// Angles are in degrees.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    pub position: Vec3,
    pub world_up: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub speed: f32,
    pub sensitivity: f32,
    pub zoom: f32,
    /// Mouse-look is toggled by clicking the left button.
    pub mouse_look: bool,
    front: Vec3,
    right: Vec3,
    up: Vec3,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }
}

impl FlyCamera {
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            world_up,
            yaw,
            pitch,
            speed: DEFAULT_SPEED,
            sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
            mouse_look: false,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
        };
        camera.update_vectors();
        camera
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Screen-right direction.
    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_lh(self.position, self.position + self.front, self.up)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_lh(self.zoom.to_radians(), aspect, NEAR_PLANE, FAR_PLANE)
    }

    pub fn view_proj(&self, width: f32, height: f32) -> Mat4 {
        self.projection(width / height) * self.view_matrix()
    }

    /// Move for `dt` seconds. Forward/backward stay in the horizontal plane.
    pub fn process_keyboard(&mut self, direction: Direction, dt: f32) {
        let velocity = self.speed * dt;
        let flat_front = Vec3::new(self.front.x, 0.0, self.front.z);
        match direction {
            Direction::Forward => self.position += flat_front * velocity,
            Direction::Backward => self.position -= flat_front * velocity,
            Direction::Right => self.position += self.right * velocity,
            Direction::Left => self.position -= self.right * velocity,
            Direction::Up => self.position += self.up * velocity,
            Direction::Down => self.position -= self.up * velocity,
        }
    }

    pub fn process_mouse_movement(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
        self.yaw += dx * self.sensitivity;
        self.pitch += dy * self.sensitivity;
        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
        self.update_vectors();
    }

    pub fn process_mouse_scroll(&mut self, dy: f32) {
        self.zoom = (self.zoom - dy).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Apply one frame of input: toggle mouse-look on left click, look
    /// around while it is on, then move along every held binding.
    pub fn update(&mut self, input: &InputState, dt: f32) {
        if input.is_mouse_button_pressed(MouseButton::Left) {
            self.mouse_look = !self.mouse_look;
            log::debug!("Mouse look {}", if self.mouse_look { "on" } else { "off" });
        }
        if self.mouse_look {
            let delta = input.mouse_delta();
            if delta != glam::Vec2::ZERO {
                // Screen y grows downward; moving the mouse up pitches up.
                self.process_mouse_movement(-delta.x, -delta.y, true);
            }
        }
        if input.wheel_delta() != 0.0 {
            self.process_mouse_scroll(input.wheel_delta());
        }
        for (key, direction) in KEY_BINDINGS {
            if input.is_key_held(key) {
                self.process_keyboard(direction, dt);
            }
        }
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos())
            .normalize();
        self.right = self.world_up.cross(self.front).normalize();
        self.up = self.front.cross(self.right).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputEvent;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_default_orientation() {
        let camera = FlyCamera::default();
        assert!(approx(camera.front(), Vec3::NEG_Z), "front {:?}", camera.front());
        assert!(approx(camera.up(), Vec3::Y));
        // Looking down -Z in a left-handed view, screen-right is -X.
        assert!(approx(camera.right(), Vec3::NEG_X), "right {:?}", camera.right());
    }

    #[test]
    fn test_view_matrix_maps_eye_and_target() {
        let mut camera = FlyCamera::new(Vec3::new(3.0, 2.0, 1.0), Vec3::Y, -60.0, 20.0);
        camera.process_mouse_movement(5.0, -3.0, true);
        let view = camera.view_matrix();
        assert!(approx(view.transform_point3(camera.position), Vec3::ZERO));
        let ahead = view.transform_point3(camera.position + camera.front());
        assert!(approx(ahead, Vec3::Z), "target maps to {ahead:?}");
        let right = view.transform_point3(camera.position + camera.right());
        assert!(approx(right, Vec3::X), "right maps to {right:?}");
    }

    #[test]
    fn test_pitch_is_constrained() {
        let mut camera = FlyCamera::default();
        camera.process_mouse_movement(0.0, 10_000.0, true);
        assert_eq!(camera.pitch, 89.0);
        camera.process_mouse_movement(0.0, -10_000.0, true);
        assert_eq!(camera.pitch, -89.0);
        camera.process_mouse_movement(0.0, -10_000.0, false);
        assert!(camera.pitch < -89.0);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = FlyCamera::default();
        camera.process_mouse_scroll(10.0);
        assert_eq!(camera.zoom, 35.0);
        camera.process_mouse_scroll(100.0);
        assert_eq!(camera.zoom, 1.0);
        camera.process_mouse_scroll(-100.0);
        assert_eq!(camera.zoom, 45.0);
    }

    #[test]
    fn test_forward_stays_horizontal() {
        let mut camera = FlyCamera::new(Vec3::ZERO, Vec3::Y, -90.0, 45.0);
        camera.process_keyboard(Direction::Forward, 1.0);
        assert_eq!(camera.position.y, 0.0);
        assert!(camera.position.z < 0.0);

        camera.position = Vec3::ZERO;
        camera.process_keyboard(Direction::Up, 0.5);
        assert!(camera.position.y > 0.0);
    }

    #[test]
    fn test_update_moves_with_held_keys() {
        let mut camera = FlyCamera::default();
        let mut input = InputState::new();
        input.on_event(InputEvent::KeyDown(keys::W));
        input.on_event(InputEvent::KeyDown(keys::D));
        camera.update(&input, 0.5);
        // speed 2 * 0.5s = 1 unit forward (-Z) and 1 unit right (-X).
        assert!(approx(camera.position, Vec3::new(-1.0, 0.0, -1.0)), "{:?}", camera.position);
    }

    #[test]
    fn test_mouse_look_toggles_on_click() {
        let mut camera = FlyCamera::default();
        let mut input = InputState::new();

        input.on_event(InputEvent::MouseMove { x: 0.0, y: 0.0 });
        input.on_event(InputEvent::MouseMove { x: 10.0, y: 0.0 });
        camera.update(&input, 0.0);
        assert_eq!(camera.yaw, DEFAULT_YAW, "no look before the first click");
        input.end_frame();

        input.on_event(InputEvent::MouseDown(MouseButton::Left));
        input.on_event(InputEvent::MouseMove { x: 20.0, y: 0.0 });
        camera.update(&input, 0.0);
        assert!(camera.mouse_look);
        assert_eq!(camera.yaw, DEFAULT_YAW - 10.0 * DEFAULT_SENSITIVITY);
        input.end_frame();

        input.on_event(InputEvent::MouseUp(MouseButton::Left));
        input.on_event(InputEvent::MouseDown(MouseButton::Left));
        camera.update(&input, 0.0);
        assert!(!camera.mouse_look);
    }

    #[test]
    fn test_view_proj_is_finite() {
        let camera = FlyCamera::default();
        let vp = camera.view_proj(800.0, 600.0);
        assert!(vp.is_finite());
    }
}
