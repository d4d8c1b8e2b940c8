//! A simple set of wrappers around the OpenGL API.
//!
//! The tutorials only ever draw a single triangle, so there is no point pulling in a full
//! rendering library. But even drawing one triangle takes a pile of cryptic, unsafe function
//! calls, so this module wraps them in a safe interface with a documented level of indirection.
//!
//! [`Gl`] is the production [`ShaderDriver`]. It assumes `gl::load_with` has already been called
//! and that the calling thread is the one the context is current on. Like every other type in
//! this module it is neither `Send` nor `Sync` in spirit: the GL context belongs to one thread.
//!
//! [Learn OpenGL](https://learnopengl.com/) and
//! [Rust and OpenGL from scratch](http://nercury.github.io/rust/opengl/tutorial/2018/02/09/opengl-in-rust-from-scratch-02-opengl-context.html)
//! are good companions for reading this.

use std::ffi::{CStr, CString, c_void};
use std::mem::size_of;
use std::os::raw::c_char;
use std::ptr::null;

use gl::types::*;

use super::driver::{ActiveVariable, ProgramId, ShaderDriver, ShaderId, ShaderStage};
use super::utils::{create_ws_buffer_with_len, string_from_gl_buffer};

/// The real OpenGL binding.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gl;

impl Gl {
    fn program_param(program: ProgramId, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe { gl::GetProgramiv(program, pname, &mut value); }
        value
    }

    fn shader_param(shader: ShaderId, pname: GLenum) -> GLint {
        let mut value = 0;
        unsafe { gl::GetShaderiv(shader, pname, &mut value); }
        value
    }

    /// Reads every active attribute (or uniform) through `getter`, which is one of
    /// `gl::GetActiveAttrib`/`gl::GetActiveUniform`.
    fn active_variables(
        program: ProgramId,
        count_param: GLenum,
        max_len_param: GLenum,
        getter: unsafe fn(GLuint, GLuint, GLsizei, *mut GLsizei, *mut GLint, *mut GLenum, *mut GLchar),
    ) -> Vec<ActiveVariable> {
        let count = Self::program_param(program, count_param);
        let max_len = Self::program_param(program, max_len_param).max(1);

        (0..count.max(0) as GLuint).map(|index| {
            let mut name = create_ws_buffer_with_len(max_len as usize);
            let (mut written, mut size, mut gl_type) = (0, 0, 0);

            unsafe {
                getter(program, index, max_len, &mut written, &mut size, &mut gl_type, name.as_mut_ptr() as *mut GLchar);
            }

            ActiveVariable {
                name: string_from_gl_buffer(name, written.max(0) as usize),
                size,
                gl_type,
            }
        }).collect()
    }

    fn location(program: ProgramId, name: &str, getter: unsafe fn(GLuint, *const GLchar) -> GLint) -> i32 {
        match CString::new(name) {
            Ok(name) => unsafe { getter(program, name.as_ptr()) },
            Err(_) => -1,
        }
    }
}

impl ShaderDriver for Gl {
    fn create_shader(&self, stage: ShaderStage) -> ShaderId {
        unsafe { gl::CreateShader(stage.gl_enum()) }
    }

    fn shader_source(&self, shader: ShaderId, source: &str) {
        let ptr = source.as_ptr() as *const GLchar;
        let len = source.len() as GLint;
        unsafe { gl::ShaderSource(shader, 1, &ptr, &len); }
    }

    fn compile_shader(&self, shader: ShaderId) {
        unsafe { gl::CompileShader(shader); }
    }

    fn compile_status(&self, shader: ShaderId) -> bool {
        Self::shader_param(shader, gl::COMPILE_STATUS) != gl::FALSE as GLint
    }

    fn shader_info_log(&self, shader: ShaderId) -> String {
        let len = Self::shader_param(shader, gl::INFO_LOG_LENGTH);
        if len <= 0 {
            return String::new();
        }

        let mut written = 0;
        let mut error = create_ws_buffer_with_len(len as usize);
        unsafe {
            gl::GetShaderInfoLog(shader, len, &mut written, error.as_mut_ptr() as *mut GLchar);
        }

        string_from_gl_buffer(error, written.max(0) as usize)
    }

    fn delete_shader(&self, shader: ShaderId) {
        unsafe { gl::DeleteShader(shader); }
    }

    fn create_program(&self) -> ProgramId {
        unsafe { gl::CreateProgram() }
    }

    fn attach_shader(&self, program: ProgramId, shader: ShaderId) {
        unsafe { gl::AttachShader(program, shader); }
    }

    fn detach_shader(&self, program: ProgramId, shader: ShaderId) {
        unsafe { gl::DetachShader(program, shader); }
    }

    fn link_program(&self, program: ProgramId) {
        unsafe { gl::LinkProgram(program); }
    }

    fn link_status(&self, program: ProgramId) -> bool {
        Self::program_param(program, gl::LINK_STATUS) != gl::FALSE as GLint
    }

    fn validate_program(&self, program: ProgramId) {
        unsafe { gl::ValidateProgram(program); }
    }

    fn validate_status(&self, program: ProgramId) -> bool {
        Self::program_param(program, gl::VALIDATE_STATUS) != gl::FALSE as GLint
    }

    fn program_info_log(&self, program: ProgramId) -> String {
        let len = Self::program_param(program, gl::INFO_LOG_LENGTH);
        if len <= 0 {
            return String::new();
        }

        let mut written = 0;
        let mut error = create_ws_buffer_with_len(len as usize);
        unsafe {
            gl::GetProgramInfoLog(program, len, &mut written, error.as_mut_ptr() as *mut GLchar);
        }

        string_from_gl_buffer(error, written.max(0) as usize)
    }

    fn delete_program(&self, program: ProgramId) {
        unsafe { gl::DeleteProgram(program); }
    }

    fn use_program(&self, program: ProgramId) {
        unsafe { gl::UseProgram(program); }
    }

    fn attached_shaders(&self, program: ProgramId) -> i32 {
        Self::program_param(program, gl::ATTACHED_SHADERS)
    }

    fn active_attributes(&self, program: ProgramId) -> Vec<ActiveVariable> {
        Self::active_variables(
            program,
            gl::ACTIVE_ATTRIBUTES,
            gl::ACTIVE_ATTRIBUTE_MAX_LENGTH,
            gl::GetActiveAttrib,
        )
    }

    fn active_uniforms(&self, program: ProgramId) -> Vec<ActiveVariable> {
        Self::active_variables(
            program,
            gl::ACTIVE_UNIFORMS,
            gl::ACTIVE_UNIFORM_MAX_LENGTH,
            gl::GetActiveUniform,
        )
    }

    fn attrib_location(&self, program: ProgramId, name: &str) -> i32 {
        Self::location(program, name, gl::GetAttribLocation)
    }

    fn uniform_location(&self, program: ProgramId, name: &str) -> i32 {
        Self::location(program, name, gl::GetUniformLocation)
    }

    fn uniform_mat4(&self, location: i32, columns: &[f32; 16]) {
        unsafe { gl::UniformMatrix4fv(location, 1, gl::FALSE, columns.as_ptr()); }
    }

    fn uniform_vec4(&self, location: i32, value: [f32; 4]) {
        unsafe { gl::Uniform4f(location, value[0], value[1], value[2], value[3]); }
    }

    fn get_string(&self, name: u32) -> String {
        unsafe {
            let ptr = gl::GetString(name);
            if ptr.is_null() {
                return String::new();
            }
            CStr::from_ptr(ptr as *const c_char).to_string_lossy().into_owned()
        }
    }

    fn get_integer(&self, param: u32) -> [i32; 2] {
        let mut values = [0; 2];
        unsafe { gl::GetIntegerv(param, values.as_mut_ptr()); }
        values
    }

    fn get_boolean(&self, param: u32) -> bool {
        let mut value = gl::FALSE;
        unsafe { gl::GetBooleanv(param, &mut value); }
        value == gl::TRUE
    }
}

/// Represents a [vertex buffer object (VBO)](https://en.wikipedia.org/wiki/Vertex_buffer_object),
/// vertex data that's sent to the graphics card. Vertices don't have to be spatial; they can
/// represent color, normal vectors, or any other data you want sent to the graphics card.
pub struct GlVertexBuffer {
    id: u32
}

impl GlVertexBuffer {

    pub fn init(data: &[f32]) -> Self {
        let vbo = Self::generate();
        vbo.bind();
        unsafe {
            gl::BufferData(
                gl::ARRAY_BUFFER,
                (data.len() * size_of::<f32>()) as isize,
                data.as_ptr() as *const c_void,
                gl::STATIC_DRAW
            );
        }

        vbo
    }

    pub fn generate() -> Self {
        let mut vbo = 0u32;
        unsafe { gl::GenBuffers(1, &mut vbo) };
        Self {
            id: vbo
        }
    }

    pub fn bind(&self) {
        unsafe { gl::BindBuffer(gl::ARRAY_BUFFER, self.id); }
    }
}

impl Drop for GlVertexBuffer {
    fn drop(&mut self) {
        unsafe {
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
            gl::DeleteBuffers(1, &self.id);
        }
    }
}

/// A vertex array object remembers which buffers feed which attribute locations, so a draw call
/// only has to bind it.
pub struct GlVertexArray {
    id: u32
}

impl GlVertexArray {

    /// Generates a vertex array and leaves it bound.
    pub fn generate() -> Self {
        let mut vao = 0u32;
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::BindVertexArray(vao);
        }
        Self { id: vao }
    }

    pub fn bind(&self) {
        unsafe { gl::BindVertexArray(self.id); }
    }
}

impl Drop for GlVertexArray {
    fn drop(&mut self) {
        unsafe {
            gl::BindVertexArray(0);
            gl::DeleteVertexArrays(1, &self.id);
        }
    }
}

/// Tells OpenGL how to read the currently bound array buffer into attribute `index`: `size` floats
/// per vertex, starting `offset` floats in, `stride` floats apart (0 for tightly packed).
pub fn set_vertex_attrib(index: u32, offset: usize, size: i32, stride: usize) {
    unsafe {
        gl::EnableVertexAttribArray(index);
        gl::VertexAttribPointer(
            index,
            size,
            gl::FLOAT,
            gl::FALSE,
            (stride * size_of::<f32>()) as i32,
            if offset == 0 { null() } else { (offset * size_of::<f32>()) as *const c_void }
        );
    }
}

/// Depth test with `GL_LESS`, and back faces culled with clockwise winding as the front.
pub fn configure_pipeline() {
    unsafe {
        gl::Enable(gl::DEPTH_TEST);
        gl::DepthFunc(gl::LESS);

        gl::Enable(gl::CULL_FACE);
        gl::CullFace(gl::BACK);
        gl::FrontFace(gl::CW);
    }
}

pub fn set_viewport(width: u32, height: u32) {
    unsafe { gl::Viewport(0, 0, width as i32, height as i32); }
}

pub fn clear(color: [f32; 4]) {
    unsafe {
        gl::ClearColor(color[0], color[1], color[2], color[3]);
        gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
    }
}

pub fn draw_triangles(vertex_count: i32) {
    unsafe { gl::DrawArrays(gl::TRIANGLES, 0, vertex_count); }
}
