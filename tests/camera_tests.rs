use flycam::camera::{Camera, FrameInput, MovementState};
use flycam::config::CameraConfig;
use flycam::math::{self, IDENTITY};

const EPSILON: f32 = 1e-5;

fn camera_at_rest() -> Camera {
    Camera::new(&CameraConfig {
        position: [0.0, 0.0, 0.0],
        yaw: 0.0,
        pitch: 0.0,
        move_speed: 0.5,
        mouse_sensitivity: 1.0,
        ..Default::default()
    })
}

fn moving(movement: MovementState) -> FrameInput {
    FrameInput {
        movement,
        mouse_delta: (0, 0),
    }
}

fn looking(dx: i32, dy: i32) -> FrameInput {
    FrameInput {
        movement: MovementState::default(),
        mouse_delta: (dx, dy),
    }
}

#[cfg(test)]
mod orientation_tests {
    use super::*;

    #[test]
    fn test_forward_at_rest_is_positive_z() {
        let forward = camera_at_rest().forward();
        assert!(forward[0].abs() < EPSILON);
        assert!(forward[1].abs() < EPSILON);
        assert!((forward[2] - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_forward_follows_yaw_and_pitch() {
        let camera = Camera::new(&CameraConfig {
            yaw: 90.0,
            pitch: 0.0,
            ..Default::default()
        });
        let forward = camera.forward();
        assert!((forward[0] + 1.0).abs() < EPSILON);
        assert!(forward[2].abs() < EPSILON);

        let camera = Camera::new(&CameraConfig {
            yaw: 0.0,
            pitch: 90.0,
            ..Default::default()
        });
        let forward = camera.forward();
        assert!((forward[1] - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_transform_is_ry_times_rx() {
        let camera = Camera::new(&CameraConfig {
            yaw: 90.0,
            pitch: 90.0,
            ..Default::default()
        });

        let mut out = [0.0; 4];
        math::transform(&mut out, camera.transform(), &[0.0, 1.0, 0.0, 1.0]);
        assert!((out[0] - 1.0).abs() < EPSILON);
        assert!(out[1].abs() < EPSILON);
        assert!(out[2].abs() < EPSILON);
    }

    #[test]
    fn test_transform_identity_at_rest() {
        let camera = camera_at_rest();
        for col in 0..4 {
            for row in 0..4 {
                assert!((camera.transform()[col][row] - IDENTITY[col][row]).abs() < EPSILON);
            }
        }
    }
}

#[cfg(test)]
mod look_tests {
    use super::*;

    #[test]
    fn test_yaw_below_zero_resets_to_360() {
        let mut camera = camera_at_rest();
        camera.update(&looking(5, 0));
        assert_eq!(camera.yaw, 360.0);
    }

    #[test]
    fn test_yaw_above_360_resets_to_zero() {
        let mut camera = camera_at_rest();
        camera.yaw = 358.0;
        camera.update(&looking(-45, 0));
        assert_eq!(camera.yaw, 0.0);
    }

    #[test]
    fn test_yaw_in_range_decrements() {
        let mut camera = camera_at_rest();
        camera.yaw = 100.0;
        camera.update(&looking(10, 0));
        assert_eq!(camera.yaw, 90.0);
    }

    #[test]
    fn test_pitch_clamped_both_ways() {
        let mut camera = camera_at_rest();
        camera.update(&looking(0, -500));
        assert_eq!(camera.pitch, 90.0);

        camera.update(&looking(0, 1000));
        assert_eq!(camera.pitch, -90.0);

        camera.update(&looking(0, 30));
        assert_eq!(camera.pitch, -90.0);
    }

    #[test]
    fn test_sensitivity_scales_delta() {
        let mut camera = Camera::new(&CameraConfig {
            yaw: 180.0,
            pitch: 0.0,
            mouse_sensitivity: 0.5,
            ..Default::default()
        });
        camera.update(&looking(20, -10));
        assert_eq!(camera.yaw, 170.0);
        assert_eq!(camera.pitch, 5.0);
    }
}

#[cfg(test)]
mod movement_tests {
    use super::*;

    #[test]
    fn test_forward_moves_speed_along_view() {
        let mut camera = camera_at_rest();
        camera.update(&moving(MovementState {
            forward: true,
            ..Default::default()
        }));
        assert!((camera.position[2] - 0.5).abs() < EPSILON);
        assert!(camera.position[0].abs() < EPSILON);
    }

    #[test]
    fn test_diagonal_not_faster_than_axis() {
        let mut camera = camera_at_rest();
        camera.update(&moving(MovementState {
            forward: true,
            right: true,
            ..Default::default()
        }));

        let expected = 0.5 / 2.0_f32.sqrt();
        assert!((camera.position[0] - expected).abs() < EPSILON);
        assert!(camera.position[1].abs() < EPSILON);
        assert!((camera.position[2] - expected).abs() < EPSILON);
        assert!((math::length(&camera.position) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_vertical_movement_uses_world_up() {
        let mut camera = Camera::new(&CameraConfig {
            pitch: -45.0,
            move_speed: 2.0,
            position: [1.0, 1.0, 1.0],
            ..Default::default()
        });
        camera.update(&moving(MovementState {
            up: true,
            ..Default::default()
        }));
        assert!((camera.position[0] - 1.0).abs() < EPSILON);
        assert!((camera.position[1] - 3.0).abs() < EPSILON);
        assert!((camera.position[2] - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut camera = camera_at_rest();
        camera.update(&moving(MovementState {
            forward: true,
            backward: true,
            left: true,
            right: true,
            up: true,
            down: true,
        }));
        assert_eq!(camera.position, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_movement_uses_orientation_before_look() {
        let mut camera = camera_at_rest();
        camera.update(&FrameInput {
            movement: MovementState {
                forward: true,
                ..Default::default()
            },
            mouse_delta: (-90, 0),
        });

        // Moved along the old heading, turned afterwards
        assert!((camera.position[2] - 0.5).abs() < EPSILON);
        assert!(camera.position[0].abs() < EPSILON);
        assert_eq!(camera.yaw, 90.0);
    }

    #[test]
    fn test_update_keeps_last_input() {
        let mut camera = camera_at_rest();
        let input = FrameInput {
            movement: MovementState {
                left: true,
                ..Default::default()
            },
            mouse_delta: (3, -4),
        };
        camera.update(&input);
        assert_eq!(*camera.last_input(), input);
        // Left at rest is -x
        assert!((camera.position[0] + 0.5).abs() < EPSILON);
    }
}
