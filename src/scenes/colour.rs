use crate::graphics::driver::ShaderDriver;
use crate::graphics::shader::{Program, ShaderError};

/// A single colour set once through a uniform.
#[derive(Debug, Clone)]
pub struct ColourScene {
    pub uniform: &'static str,
    pub colour: [f32; 4],
}

impl Default for ColourScene {
    fn default() -> Self {
        Self {
            uniform: "inputColour",
            colour: [1.0, 0.0, 0.0, 1.0],
        }
    }
}

impl ColourScene {
    pub fn prepare<D: ShaderDriver>(&mut self, program: &Program<D>) -> Result<(), ShaderError> {
        let location = program.uniform_location(self.uniform)?;

        program.set_used();
        program.set_vec4(location, self.colour);

        Ok(())
    }
}
