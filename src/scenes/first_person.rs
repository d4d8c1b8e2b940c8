use camera::{CameraInput, Projection, VirtualCamera};
use glam::Vec3;

use crate::graphics::driver::ShaderDriver;
use crate::graphics::shader::{Program, ShaderError};
use crate::window::FrameSize;

#[derive(Debug, Clone, Copy)]
struct Locations {
    view: i32,
    proj: i32,
}

/// A first-person camera feeding the `view` and `proj` uniforms.
#[derive(Debug, Clone)]
pub struct CameraScene {
    camera: VirtualCamera,
    projection: Projection,
    locations: Option<Locations>,
}

impl Default for CameraScene {
    fn default() -> Self {
        Self::new(VirtualCamera::new(Vec3::new(0.0, 0.0, 2.0)), Projection::default())
    }
}

impl CameraScene {
    pub fn new(camera: VirtualCamera, projection: Projection) -> Self {
        Self { camera, projection, locations: None }
    }


    pub fn prepare<D: ShaderDriver>(&mut self, program: &Program<D>, size: FrameSize) -> Result<(), ShaderError> {
        let locations = Locations {
            view: program.uniform_location("view")?,
            proj: program.uniform_location("proj")?,
        };

        program.set_used();
        program.set_mat4(locations.view, &self.camera.view());
        program.set_mat4(locations.proj, &self.projection.matrix(size.aspect()));
        self.locations = Some(locations);

        Ok(())
    }

    /// Only uploads a view matrix when the camera actually moved.
    pub fn frame<D: ShaderDriver>(&mut self, program: &Program<D>, input: &CameraInput, elapsed_secs: f32) {
        if let Some(locations) = self.locations {
            if let Some(view) = self.camera.update(input, elapsed_secs) {
                program.set_mat4(locations.view, &view);
            }
        }
    }

    pub fn resize<D: ShaderDriver>(&mut self, program: &Program<D>, size: FrameSize) {
        if let Some(locations) = self.locations {
            program.set_mat4(locations.proj, &self.projection.matrix(size.aspect()));
        }
    }
}
