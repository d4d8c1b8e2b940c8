//! The narrow slice of OpenGL the shader pipeline needs.
//!
//! Everything that builds, inspects or feeds a shader program goes through [`ShaderDriver`]
//! instead of calling `gl::*` directly. The real implementation is [`Gl`](super::opengl::Gl);
//! the tests use an in-memory stand-in so the pipeline can be checked without a GPU.

use std::fmt;

pub type ShaderId = u32;
pub type ProgramId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// One entry of `glGetActiveAttrib`/`glGetActiveUniform`. `size` is the array length (1 for
/// non-arrays) and `gl_type` the raw type enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveVariable {
    pub name: String,
    pub size: i32,
    pub gl_type: u32,
}

pub trait ShaderDriver {
    fn create_shader(&self, stage: ShaderStage) -> ShaderId;
    fn shader_source(&self, shader: ShaderId, source: &str);
    fn compile_shader(&self, shader: ShaderId);
    fn compile_status(&self, shader: ShaderId) -> bool;
    fn shader_info_log(&self, shader: ShaderId) -> String;
    fn delete_shader(&self, shader: ShaderId);

    fn create_program(&self) -> ProgramId;
    fn attach_shader(&self, program: ProgramId, shader: ShaderId);
    fn detach_shader(&self, program: ProgramId, shader: ShaderId);
    fn link_program(&self, program: ProgramId);
    fn link_status(&self, program: ProgramId) -> bool;
    fn validate_program(&self, program: ProgramId);
    fn validate_status(&self, program: ProgramId) -> bool;
    fn program_info_log(&self, program: ProgramId) -> String;
    fn delete_program(&self, program: ProgramId);
    fn use_program(&self, program: ProgramId);

    fn attached_shaders(&self, program: ProgramId) -> i32;
    fn active_attributes(&self, program: ProgramId) -> Vec<ActiveVariable>;
    fn active_uniforms(&self, program: ProgramId) -> Vec<ActiveVariable>;
    /// -1 when `name` isn't an active attribute.
    fn attrib_location(&self, program: ProgramId, name: &str) -> i32;
    /// -1 when `name` isn't an active uniform.
    fn uniform_location(&self, program: ProgramId, name: &str) -> i32;

    fn uniform_mat4(&self, location: i32, columns: &[f32; 16]);
    fn uniform_vec4(&self, location: i32, value: [f32; 4]);

    fn get_string(&self, name: u32) -> String;
    /// Always returns two slots; queries with a single value leave the second at 0.
    fn get_integer(&self, param: u32) -> [i32; 2];
    fn get_boolean(&self, param: u32) -> bool;
}
