//! Compiling and linking shader programs.
//!
//! [`Shader`] and [`Program`] own their GL objects and delete them when dropped, so a failure
//! halfway through building a program never leaks what was created before it.

use glam::Mat4;
use thiserror::Error;

use crate::gl_log::GlLog;

use super::driver::{ProgramId, ShaderDriver, ShaderId, ShaderStage};

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("{0} shader source is empty")]
    EmptySource(ShaderStage),

    #[error("{stage} shader failed to compile:\n{log}")]
    CompileFailed { stage: ShaderStage, log: String },

    #[error("program needs a {0} shader")]
    MissingStage(ShaderStage),

    #[error("program failed to link:\n{0}")]
    LinkFailed(String),

    #[error("program failed to validate:\n{0}")]
    ValidateFailed(String),

    #[error("can't find uniform `{0}`")]
    MissingUniform(String),
}

/// Represents a compiled shader.
pub struct Shader<'d, D: ShaderDriver> {
    driver: &'d D,
    id: ShaderId,
    stage: ShaderStage,
}

impl<'d, D: ShaderDriver> Shader<'d, D> {
    pub fn id(&self) -> ShaderId { self.id }

    pub fn stage(&self) -> ShaderStage { self.stage }
}

impl<'d, D: ShaderDriver> Drop for Shader<'d, D> {
    fn drop(&mut self) {
        self.driver.delete_shader(self.id);
    }
}

/// Represents the graphics pipeline: a linked and validated program.
pub struct Program<'d, D: ShaderDriver> {
    driver: &'d D,
    id: ProgramId,
}

impl<'d, D: ShaderDriver> Program<'d, D> {
    pub fn id(&self) -> ProgramId { self.id }

    pub fn driver(&self) -> &'d D { self.driver }

    pub fn set_used(&self) {
        self.driver.use_program(self.id);
    }

    pub fn uniform_location(&self, name: &str) -> Result<i32, ShaderError> {
        match self.driver.uniform_location(self.id, name) {
            loc if loc < 0 => Err(ShaderError::MissingUniform(name.to_string())),
            loc => Ok(loc),
        }
    }

    /// Uploads a matrix to the program that is currently in use.
    pub fn set_mat4(&self, location: i32, matrix: &Mat4) {
        self.driver.uniform_mat4(location, &matrix.to_cols_array());
    }

    /// Uploads a vector to the program that is currently in use.
    pub fn set_vec4(&self, location: i32, value: [f32; 4]) {
        self.driver.uniform_vec4(location, value);
    }
}

impl<'d, D: ShaderDriver> Drop for Program<'d, D> {
    fn drop(&mut self) {
        self.driver.delete_program(self.id);
    }
}

/// Compiles shaders and links them into programs, reporting every driver log it gets to the
/// GL log.
pub struct ShaderBuilder<'d, 'l, D: ShaderDriver> {
    driver: &'d D,
    log: Option<&'l GlLog>,
}

impl<'d, 'l, D: ShaderDriver> ShaderBuilder<'d, 'l, D> {
    pub fn new(driver: &'d D) -> Self {
        Self { driver, log: None }
    }

    pub fn with_log(mut self, log: &'l GlLog) -> Self {
        self.log = Some(log);
        self
    }

    pub fn compile(&self, stage: ShaderStage, source: &str) -> Result<Shader<'d, D>, ShaderError> {
        if source.trim().is_empty() {
            return Err(ShaderError::EmptySource(stage));
        }

        let shader = Shader {
            driver: self.driver,
            id: self.driver.create_shader(stage),
            stage,
        };
        self.driver.shader_source(shader.id, source);
        self.driver.compile_shader(shader.id);

        if !self.driver.compile_status(shader.id) {
            let log = self.driver.shader_info_log(shader.id);
            if let Some(gl_log) = self.log {
                gl_log_err!(gl_log, "shader info log for GL index {}:\n{}", shader.id, log);
            }
            return Err(ShaderError::CompileFailed { stage, log });
        }

        // Compilers may warn without failing
        let warnings = self.driver.shader_info_log(shader.id);
        if !warnings.is_empty() {
            log::warn!("{} shader {} compiled with warnings:\n{}", stage, shader.id, warnings);
            if let Some(gl_log) = self.log {
                gl_log!(gl_log, "shader info log for GL index {}:\n{}", shader.id, warnings);
            }
        }

        Ok(shader)
    }

    pub fn link(&self, shaders: &[Shader<'d, D>]) -> Result<Program<'d, D>, ShaderError> {
        for stage in &[ShaderStage::Vertex, ShaderStage::Fragment] {
            if !shaders.iter().any(|s| s.stage == *stage) {
                return Err(ShaderError::MissingStage(*stage));
            }
        }

        let program = Program {
            driver: self.driver,
            id: self.driver.create_program(),
        };

        for shader in shaders {
            self.driver.attach_shader(program.id, shader.id);
        }

        self.driver.link_program(program.id);

        if !self.driver.link_status(program.id) {
            let log = self.driver.program_info_log(program.id);
            if let Some(gl_log) = self.log {
                gl_log_err!(gl_log, "Program link info log for GL index {}:\n{}", program.id, log);
            }
            return Err(ShaderError::LinkFailed(log));
        }

        self.driver.validate_program(program.id);

        if !self.driver.validate_status(program.id) {
            let log = self.driver.program_info_log(program.id);
            if let Some(gl_log) = self.log {
                gl_log_err!(gl_log, "Program validate info log for GL index {}:\n{}", program.id, log);
            }
            return Err(ShaderError::ValidateFailed(log));
        }

        // Once linked the program no longer needs the shaders; detaching lets them be freed
        for shader in shaders {
            self.driver.detach_shader(program.id, shader.id);
        }

        Ok(program)
    }

    /// Compiles a vertex and a fragment shader and links them.
    pub fn build(&self, vertex_source: &str, fragment_source: &str) -> Result<Program<'d, D>, ShaderError> {
        let shaders = [
            self.compile(ShaderStage::Vertex, vertex_source)?,
            self.compile(ShaderStage::Fragment, fragment_source)?,
        ];

        self.link(&shaders)
    }
}
