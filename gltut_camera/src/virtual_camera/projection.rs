use glam::Mat4;

/// A standard OpenGL perspective matrix. Depth is mapped to [-1, 1] in clip space, so a point on
/// the near plane lands on z = -1 and one on the far plane on z = 1.
///
/// `aspect_ratio` is the viewport's width over its height and has to follow the window: a
/// projection built with a stale aspect ratio stretches the whole scene.
pub fn perspective_projection(
    vertical_fov_degrees: f32,
    aspect_ratio: f32,
    near_plane: f32,
    far_plane: f32,
) -> Mat4 {
    Mat4::perspective_rh_gl(vertical_fov_degrees.to_radians(), aspect_ratio, near_plane, far_plane)
}

/// The parts of a perspective projection that don't change with the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_y: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y: 67.0,
            z_near: 0.1,
            z_far: 100.0,
        }
    }
}

impl Projection {
    pub fn matrix(&self, aspect_ratio: f32) -> Mat4 {
        perspective_projection(self.fov_y, aspect_ratio, self.z_near, self.z_far)
    }
}
