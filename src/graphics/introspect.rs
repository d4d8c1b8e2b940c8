//! What a linked program actually exposes: its active attributes and uniforms.
//!
//! None of this is needed to render. It is printed to the GL log at startup, which is the fastest
//! way to find out that the compiler optimised away the uniform you were trying to set.

use std::collections::BTreeMap;
use std::fmt;

use super::driver::{ActiveVariable, ShaderDriver};
use super::shader::Program;
use super::utils::array_base_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlslType {
    Bool,
    Int,
    Float,
    Vec2,
    Vec3,
    Vec4,
    Mat2,
    Mat3,
    Mat4,
    Sampler2D,
    Sampler3D,
    SamplerCube,
    Sampler2DShadow,
    Other,
}

impl GlslType {
    pub fn from_gl(gl_type: u32) -> Self {
        match gl_type {
            gl::BOOL => GlslType::Bool,
            gl::INT => GlslType::Int,
            gl::FLOAT => GlslType::Float,
            gl::FLOAT_VEC2 => GlslType::Vec2,
            gl::FLOAT_VEC3 => GlslType::Vec3,
            gl::FLOAT_VEC4 => GlslType::Vec4,
            gl::FLOAT_MAT2 => GlslType::Mat2,
            gl::FLOAT_MAT3 => GlslType::Mat3,
            gl::FLOAT_MAT4 => GlslType::Mat4,
            gl::SAMPLER_2D => GlslType::Sampler2D,
            gl::SAMPLER_3D => GlslType::Sampler3D,
            gl::SAMPLER_CUBE => GlslType::SamplerCube,
            gl::SAMPLER_2D_SHADOW => GlslType::Sampler2DShadow,
            _ => GlslType::Other,
        }
    }
}

impl fmt::Display for GlslType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GlslType::Bool => "bool",
            GlslType::Int => "int",
            GlslType::Float => "float",
            GlslType::Vec2 => "vec2",
            GlslType::Vec3 => "vec3",
            GlslType::Vec4 => "vec4",
            GlslType::Mat2 => "mat2",
            GlslType::Mat3 => "mat3",
            GlslType::Mat4 => "mat4",
            GlslType::Sampler2D => "sampler2D",
            GlslType::Sampler3D => "sampler3D",
            GlslType::SamplerCube => "samplerCube",
            GlslType::Sampler2DShadow => "sampler2DShadow",
            GlslType::Other => "other",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub location: i32,
    pub kind: GlslType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramInterface {
    pub program: u32,
    pub attached_shaders: i32,
    pub attributes: BTreeMap<String, Binding>,
    pub uniforms: BTreeMap<String, Binding>,
}

/// One entry per variable, or one per element for arrays (`name[0]`, `name[1]`, ...).
fn bindings<F>(variables: Vec<ActiveVariable>, location_of: F) -> BTreeMap<String, Binding>
where
    F: Fn(&str) -> i32,
{
    let mut map = BTreeMap::new();

    for variable in variables {
        let kind = GlslType::from_gl(variable.gl_type);

        if variable.size > 1 {
            let base = array_base_name(&variable.name);
            for i in 0..variable.size {
                let name = format!("{}[{}]", base, i);
                let location = location_of(&name);
                map.insert(name, Binding { location, kind });
            }
        } else {
            let location = location_of(&variable.name);
            map.insert(variable.name, Binding { location, kind });
        }
    }

    map
}

impl<'d, D: ShaderDriver> Program<'d, D> {
    pub fn introspect(&self) -> ProgramInterface {
        let driver = self.driver();
        let id = self.id();

        ProgramInterface {
            program: id,
            attached_shaders: driver.attached_shaders(id),
            attributes: bindings(driver.active_attributes(id), |name| driver.attrib_location(id, name)),
            uniforms: bindings(driver.active_uniforms(id), |name| driver.uniform_location(id, name)),
        }
    }
}

impl fmt::Display for ProgramInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--------------------")?;
        writeln!(f, "shader programme {} info:", self.program)?;
        writeln!(f, "GL_ATTACHED_SHADERS = {}", self.attached_shaders)?;

        writeln!(f, "GL_ACTIVE_ATTRIBUTES = {}", self.attributes.len())?;
        for (i, (name, binding)) in self.attributes.iter().enumerate() {
            writeln!(f, "  {}) type:{} name:{} location:{}", i, binding.kind, name, binding.location)?;
        }

        writeln!(f, "GL_ACTIVE_UNIFORMS = {}", self.uniforms.len())?;
        for (i, (name, binding)) in self.uniforms.iter().enumerate() {
            writeln!(f, "  {}) type:{} name:{} location:{}", i, binding.kind, name, binding.location)?;
        }

        Ok(())
    }
}
