use crate::config::CameraConfig;
use crate::core::{Button, Controller};
use crate::math::{self, Matrix4, Vector3, IDENTITY, WORLD_UP, ZERO};

pub const PITCH_LIMIT: f32 = 90.0;
pub const YAW_MAX: f32 = 360.0;

/// Movement keys held during a frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MovementState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MovementState {
    pub fn from_controller(controller: &dyn Controller) -> Self {
        Self {
            forward: controller.is_down(Button::KeyW),
            backward: controller.is_down(Button::KeyS),
            left: controller.is_down(Button::KeyA),
            right: controller.is_down(Button::KeyD),
            up: controller.is_down(Button::Space),
            down: controller.is_down(Button::Shift),
        }
    }

    const fn to_direction(positive: bool, negative: bool) -> i32 {
        positive as i32 - negative as i32
    }

    /// Signed (forward, lateral, vertical) axes, each in {-1, 0, 1}
    pub const fn axes(&self) -> (i32, i32, i32) {
        (
            Self::to_direction(self.forward, self.backward),
            Self::to_direction(self.right, self.left),
            Self::to_direction(self.up, self.down),
        )
    }
}

/// Input sampled once per frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameInput {
    pub movement: MovementState,
    /// Relative mouse motion in pixels since the previous frame
    pub mouse_delta: (i32, i32),
}

/// Free-flying camera driven by yaw/pitch in degrees
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vector3,
    pub yaw: f32,
    pub pitch: f32,
    pub speed: f32,
    pub sensitivity: f32,
    input: FrameInput,
    transform: Matrix4,
}

impl Camera {
    pub fn new(config: &CameraConfig) -> Self {
        let mut camera = Self {
            position: config.position,
            yaw: wrap_yaw(config.yaw),
            pitch: clamp_pitch(config.pitch),
            speed: config.move_speed,
            sensitivity: config.mouse_sensitivity,
            input: FrameInput::default(),
            transform: IDENTITY,
        };
        camera.rebuild_transform();
        camera
    }

    /// Unit view direction derived from the current yaw and pitch
    pub fn forward(&self) -> Vector3 {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();

        let mut dir = [-yaw_sin * pitch_cos, pitch_sin, yaw_cos * pitch_cos];
        math::normalize(&mut dir);
        dir
    }

    pub fn right(&self) -> Vector3 {
        let mut right = ZERO;
        math::cross(&mut right, &WORLD_UP, &self.forward());
        right
    }

    pub fn up(&self) -> Vector3 {
        WORLD_UP
    }

    /// Step the camera by one frame: move, look, then rebuild the orientation
    pub fn update(&mut self, input: &FrameInput) {
        self.input = *input;

        let displacement = self.displacement();
        let position = self.position;
        math::add(&mut self.position, &position, &displacement);

        let (dx, dy) = self.input.mouse_delta;
        self.yaw = wrap_yaw(self.yaw - dx as f32 * self.sensitivity);
        self.pitch = clamp_pitch(self.pitch - dy as f32 * self.sensitivity);

        self.rebuild_transform();
    }

    /// Movement for the stored input, `speed` long unless no axis is active
    fn displacement(&self) -> Vector3 {
        let (forward_axis, lateral_axis, vertical_axis) = self.input.movement.axes();

        let mut movement = ZERO;
        let mut component = ZERO;

        math::scale(&mut component, &self.forward(), forward_axis as f32);
        let partial = movement;
        math::add(&mut movement, &partial, &component);

        math::scale(&mut component, &self.right(), lateral_axis as f32);
        let partial = movement;
        math::add(&mut movement, &partial, &component);

        math::scale(&mut component, &WORLD_UP, vertical_axis as f32);
        let partial = movement;
        math::add(&mut movement, &partial, &component);

        math::normalize(&mut movement);
        let direction = movement;
        math::scale(&mut movement, &direction, self.speed);
        movement
    }

    fn rebuild_transform(&mut self) {
        math::identity(&mut self.transform);
        math::rotate_x(&mut self.transform, self.pitch.to_radians());
        math::rotate_y(&mut self.transform, self.yaw.to_radians());
    }

    /// Orientation rebuilt by the last update: `Ry(yaw) * Rx(pitch)`
    pub fn transform(&self) -> &Matrix4 {
        &self.transform
    }

    /// Translation that brings the camera position to the origin
    pub fn view_matrix(&self) -> Matrix4 {
        let mut offset = ZERO;
        math::scale(&mut offset, &self.position, -1.0);

        let mut view = IDENTITY;
        math::translation(&mut view, &offset);
        view
    }

    pub fn last_input(&self) -> &FrameInput {
        &self.input
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

/// Out of range yaw snaps to the opposite boundary instead of wrapping by modulo
pub fn wrap_yaw(yaw: f32) -> f32 {
    if yaw < 0.0 {
        YAW_MAX
    } else if yaw > YAW_MAX {
        0.0
    } else {
        yaw
    }
}

pub fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_cancel_opposites() {
        let movement = MovementState {
            forward: true,
            backward: true,
            left: true,
            right: false,
            up: false,
            down: true,
        };
        assert_eq!(movement.axes(), (0, -1, -1));
    }

    #[test]
    fn test_wrap_yaw_boundaries() {
        assert_eq!(wrap_yaw(-0.001), 360.0);
        assert_eq!(wrap_yaw(-720.0), 360.0);
        assert_eq!(wrap_yaw(360.5), 0.0);
        assert_eq!(wrap_yaw(1000.0), 0.0);
        assert_eq!(wrap_yaw(0.0), 0.0);
        assert_eq!(wrap_yaw(360.0), 360.0);
        assert_eq!(wrap_yaw(123.0), 123.0);
    }

    #[test]
    fn test_clamp_pitch() {
        assert_eq!(clamp_pitch(120.0), 90.0);
        assert_eq!(clamp_pitch(-91.0), -90.0);
        assert_eq!(clamp_pitch(45.0), 45.0);
    }

    #[test]
    fn test_idle_update_keeps_position() {
        let mut camera = Camera::default();
        let start = camera.position;
        camera.update(&FrameInput::default());
        assert_eq!(camera.position, start);
    }

    #[test]
    fn test_right_is_positive_x_at_rest() {
        let camera = Camera::new(&CameraConfig {
            yaw: 0.0,
            ..Default::default()
        });
        let right = camera.right();
        assert!((right[0] - 1.0).abs() < 1e-6);
        assert!(right[1].abs() < 1e-6);
        assert!(right[2].abs() < 1e-6);
    }

    #[test]
    fn test_default_faces_negative_z() {
        let forward = Camera::default().forward();
        assert!(forward[0].abs() < 1e-6);
        assert!((forward[2] + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_view_matrix_negates_position() {
        let mut camera = Camera::default();
        camera.position = [1.0, 2.0, 3.0];
        let view = camera.view_matrix();
        assert_eq!(view[3][0], -1.0);
        assert_eq!(view[3][1], -2.0);
        assert_eq!(view[3][2], -3.0);
    }
}
