use glam::{Mat4, Vec3};

use crate::graphics::driver::ShaderDriver;
use crate::graphics::shader::{Program, ShaderError};

/// Moves back and forth along x, turning around once it gets more than one unit from the centre.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    position: f32,
    speed: f32,
}

impl Default for Slider {
    fn default() -> Self {
        Self { position: 0.0, speed: 1.0 }
    }
}

impl Slider {

    pub fn speed(&self) -> f32 { self.speed }

    /// Advances by one frame and returns the new position.
    pub fn step(&mut self, elapsed_secs: f32) -> f32 {
        self.position += elapsed_secs * self.speed;
        if self.position.abs() > 1.0 {
            self.speed = -self.speed;
        }
        self.position
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(self.position, 0.0, 0.0))
    }
}

/// Slides the triangle by rewriting the translation column of a `matrix` uniform every frame.
#[derive(Debug, Clone, Default)]
pub struct SlideScene {
    slider: Slider,
    location: Option<i32>,
}

impl SlideScene {

    pub fn prepare<D: ShaderDriver>(&mut self, program: &Program<D>) -> Result<(), ShaderError> {
        let location = program.uniform_location("matrix")?;

        program.set_used();
        program.set_mat4(location, &self.slider.matrix());
        self.location = Some(location);

        Ok(())
    }

    pub fn frame<D: ShaderDriver>(&mut self, program: &Program<D>, elapsed_secs: f32) {
        if let Some(location) = self.location {
            self.slider.step(elapsed_secs);
            program.set_mat4(location, &self.slider.matrix());
        }
    }
}
