use glam::{Mat4, Vec3};

use super::input::CameraInput;

/// Builds a view matrix from a camera pose.
///
/// The camera is placed by translating to `position`, then yawing about Y, then pitching about X.
/// The view matrix undoes that, so it is `Rx(-pitch) * Ry(-yaw) * T(-position)`, applied to column
/// vectors.
pub fn view_matrix(position: Vec3, yaw_degrees: f32, pitch_degrees: f32) -> Mat4 {
    let translation = Mat4::from_translation(-position);
    let yaw = Mat4::from_rotation_y((-yaw_degrees).to_radians());
    let pitch = Mat4::from_rotation_x((-pitch_degrees).to_radians());

    pitch * yaw * translation
}

/// A first-person camera driven by held keys.
///
/// Movement is along the world axes, not the camera's own: "forward" always decreases world z no
/// matter where the camera is looking. Position and angles are integrated with plain Euler steps,
/// with no acceleration or momentum.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualCamera {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    speed: f32,
    rotation_speed: f32,
    view: Mat4,
}

impl VirtualCamera {
    /// Units per second.
    pub const DEFAULT_SPEED: f32 = 1.0;

    /// Degrees per second.
    pub const DEFAULT_ROTATION_SPEED: f32 = 10.0;

    /// Creates a camera at `position` looking down -z. Don't start at the origin, or the scene sits
    /// right on the near plane.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            speed: Self::DEFAULT_SPEED,
            rotation_speed: Self::DEFAULT_ROTATION_SPEED,
            view: view_matrix(position, 0.0, 0.0),
        }
    }

    pub fn with_speeds(mut self, speed: f32, rotation_speed: f32) -> Self {
        self.speed = speed;
        self.rotation_speed = rotation_speed;
        self
    }

    pub fn position(&self) -> Vec3 { self.position }

    pub fn yaw(&self) -> f32 { self.yaw }

    pub fn pitch(&self) -> f32 { self.pitch }

    pub fn speed(&self) -> f32 { self.speed }

    pub fn rotation_speed(&self) -> f32 { self.rotation_speed }

    /// The most recently computed view matrix.
    pub fn view(&self) -> Mat4 { self.view }

    /// Advances the camera by one frame.
    ///
    /// Returns the new view matrix if any input flag was set. When nothing was pressed the camera
    /// is left untouched and `None` comes back, so the caller can skip re-uploading the matrix.
    /// A negative `elapsed_secs` is treated as zero.
    pub fn update(&mut self, input: &CameraInput, elapsed_secs: f32) -> Option<Mat4> {
        if !input.any() {
            return None;
        }

        let elapsed = elapsed_secs.max(0.0);
        let step = self.speed * elapsed;
        let turn = self.rotation_speed * elapsed;

        if input.move_left {
            self.position.x -= step;
        }
        if input.move_right {
            self.position.x += step;
        }
        if input.move_up {
            self.position.y += step;
        }
        if input.move_down {
            self.position.y -= step;
        }
        if input.move_forward {
            self.position.z -= step;
        }
        if input.move_back {
            self.position.z += step;
        }

        if input.yaw_left {
            self.yaw += turn;
        }
        if input.yaw_right {
            self.yaw -= turn;
        }
        if input.pitch_up {
            self.pitch += turn;
        }
        if input.pitch_down {
            self.pitch -= turn;
        }

        self.view = view_matrix(self.position, self.yaw, self.pitch);
        Some(self.view)
    }
}
