//! An in-memory `ShaderDriver` for tests.
//!
//! It "compiles" anything with a `main` function, links a vertex and fragment shader only when
//! every fragment `in` has a matching vertex `out`, and reports attributes and uniforms by
//! reading the declarations out of the sources. That is enough to exercise the whole shader
//! pipeline, object lifetimes included, without a GPU.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use super::driver::{ActiveVariable, ProgramId, ShaderDriver, ShaderId, ShaderStage};

#[derive(Debug, Clone, PartialEq)]
pub enum Upload {
    Mat4(i32, [f32; 16]),
    Vec4(i32, [f32; 4]),
}

#[derive(Debug, Default)]
struct MockProgram {
    attached: Vec<ShaderId>,
    linked: bool,
    validated: bool,
    log: String,
    attributes: Vec<(ActiveVariable, i32)>,
    uniforms: Vec<(ActiveVariable, i32)>,
}

#[derive(Debug, Default)]
struct MockState {
    next_id: u32,
    shaders: BTreeMap<ShaderId, (ShaderStage, String, Option<bool>)>,
    programs: BTreeMap<ProgramId, MockProgram>,
    deleted_shaders: BTreeSet<ShaderId>,
    deleted_programs: BTreeSet<ProgramId>,
    current_program: Option<ProgramId>,
    uploads: Vec<Upload>,
}

#[derive(Debug, Default)]
pub struct MockDriver {
    state: RefCell<MockState>,
    compile_warning: Option<String>,
    validate_error: Option<String>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shaders that compile report `log` as their info log, like a driver warning would.
    pub fn with_compile_warning(mut self, log: &str) -> Self {
        self.compile_warning = Some(log.to_string());
        self
    }

    /// Every validation fails with `log`.
    pub fn with_validate_error(mut self, log: &str) -> Self {
        self.validate_error = Some(log.to_string());
        self
    }

    pub fn live_shaders(&self) -> usize {
        self.state.borrow().shaders.len()
    }

    pub fn live_programs(&self) -> usize {
        self.state.borrow().programs.len()
    }

    pub fn deleted_shaders(&self) -> usize {
        self.state.borrow().deleted_shaders.len()
    }

    pub fn deleted_programs(&self) -> usize {
        self.state.borrow().deleted_programs.len()
    }

    pub fn current_program(&self) -> Option<ProgramId> {
        self.state.borrow().current_program
    }

    pub fn uploads(&self) -> Vec<Upload> {
        self.state.borrow().uploads.clone()
    }

    pub fn clear_uploads(&self) {
        self.state.borrow_mut().uploads.clear();
    }

    fn next_id(&self) -> u32 {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        state.next_id
    }
}

fn gl_type(glsl: &str) -> u32 {
    match glsl {
        "bool" => gl::BOOL,
        "int" => gl::INT,
        "float" => gl::FLOAT,
        "vec2" => gl::FLOAT_VEC2,
        "vec3" => gl::FLOAT_VEC3,
        "vec4" => gl::FLOAT_VEC4,
        "mat2" => gl::FLOAT_MAT2,
        "mat3" => gl::FLOAT_MAT3,
        "mat4" => gl::FLOAT_MAT4,
        "sampler2D" => gl::SAMPLER_2D,
        "sampler3D" => gl::SAMPLER_3D,
        "samplerCube" => gl::SAMPLER_CUBE,
        "sampler2DShadow" => gl::SAMPLER_2D_SHADOW,
        _ => gl::UNSIGNED_INT_VEC3,
    }
}

/// Every `<qualifier> <type> <name>[N];` declaration in `source`, as (type, name, array size).
fn declarations<'a>(source: &'a str, qualifier: &str) -> Vec<(&'a str, &'a str, i32)> {
    source.lines()
        .filter_map(|line| {
            let mut words = line.trim().trim_end_matches(';').split_whitespace();
            if words.next()? != qualifier {
                return None;
            }
            let glsl_type = words.next()?;
            let name = words.next()?;

            Some(match name.find('[') {
                Some(open) => {
                    let size = name[open + 1..].trim_end_matches(']').parse().unwrap_or(1);
                    (glsl_type, &name[..open], size)
                }
                None => (glsl_type, name, 1),
            })
        })
        .collect()
}

/// Hands out locations the way a driver would: consecutively, one per array element.
fn active(decls: &[(&str, &str, i32)]) -> Vec<(ActiveVariable, i32)> {
    let mut next_location = 0;
    decls.iter().map(|(glsl_type, name, size)| {
        let variable = ActiveVariable {
            name: if *size > 1 { format!("{}[0]", name) } else { name.to_string() },
            size: *size,
            gl_type: gl_type(glsl_type),
        };
        let location = next_location;
        next_location += size;
        (variable, location)
    }).collect()
}

impl ShaderDriver for MockDriver {
    fn create_shader(&self, stage: ShaderStage) -> ShaderId {
        let id = self.next_id();
        self.state.borrow_mut().shaders.insert(id, (stage, String::new(), None));
        id
    }

    fn shader_source(&self, shader: ShaderId, source: &str) {
        if let Some(entry) = self.state.borrow_mut().shaders.get_mut(&shader) {
            entry.1 = source.to_string();
        }
    }

    fn compile_shader(&self, shader: ShaderId) {
        if let Some(entry) = self.state.borrow_mut().shaders.get_mut(&shader) {
            entry.2 = Some(entry.1.contains("void main"));
        }
    }

    fn compile_status(&self, shader: ShaderId) -> bool {
        self.state.borrow().shaders.get(&shader).and_then(|s| s.2).unwrap_or(false)
    }

    fn shader_info_log(&self, shader: ShaderId) -> String {
        if self.compile_status(shader) {
            self.compile_warning.clone().unwrap_or_default()
        } else {
            "0:1(1): error: syntax error, unexpected end of file".to_string()
        }
    }

    fn delete_shader(&self, shader: ShaderId) {
        let mut state = self.state.borrow_mut();
        state.shaders.remove(&shader);
        state.deleted_shaders.insert(shader);
    }

    fn create_program(&self) -> ProgramId {
        let id = self.next_id();
        self.state.borrow_mut().programs.insert(id, MockProgram::default());
        id
    }

    fn attach_shader(&self, program: ProgramId, shader: ShaderId) {
        if let Some(p) = self.state.borrow_mut().programs.get_mut(&program) {
            p.attached.push(shader);
        }
    }

    fn detach_shader(&self, program: ProgramId, shader: ShaderId) {
        if let Some(p) = self.state.borrow_mut().programs.get_mut(&program) {
            p.attached.retain(|s| *s != shader);
        }
    }

    fn link_program(&self, program: ProgramId) {
        let mut state = self.state.borrow_mut();
        let MockState { shaders, programs, .. } = &mut *state;
        let p = match programs.get_mut(&program) {
            Some(p) => p,
            None => return,
        };

        let source = |stage: ShaderStage| -> String {
            p.attached.iter()
                .filter_map(|id| shaders.get(id))
                .filter(|s| s.0 == stage)
                .map(|s| s.1.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        };
        let vertex = source(ShaderStage::Vertex);
        let fragment = source(ShaderStage::Fragment);

        let outputs: Vec<_> = declarations(&vertex, "out").into_iter().map(|d| d.1).collect();
        let unmatched = declarations(&fragment, "in").into_iter()
            .find(|d| !outputs.contains(&d.1));

        if let Some((_, name, _)) = unmatched {
            p.linked = false;
            p.log = format!("error: fragment shader input `{}` has no matching vertex shader output", name);
            return;
        }

        let mut uniforms = declarations(&vertex, "uniform");
        for decl in declarations(&fragment, "uniform") {
            if !uniforms.iter().any(|u| u.1 == decl.1) {
                uniforms.push(decl);
            }
        }

        p.linked = true;
        p.log.clear();
        p.attributes = active(&declarations(&vertex, "in"));
        p.uniforms = active(&uniforms);
    }

    fn link_status(&self, program: ProgramId) -> bool {
        self.state.borrow().programs.get(&program).map_or(false, |p| p.linked)
    }

    fn validate_program(&self, program: ProgramId) {
        if let Some(p) = self.state.borrow_mut().programs.get_mut(&program) {
            match &self.validate_error {
                Some(log) => {
                    p.validated = false;
                    p.log = log.clone();
                }
                None => p.validated = p.linked,
            }
        }
    }

    fn validate_status(&self, program: ProgramId) -> bool {
        self.state.borrow().programs.get(&program).map_or(false, |p| p.validated)
    }

    fn program_info_log(&self, program: ProgramId) -> String {
        self.state.borrow().programs.get(&program).map(|p| p.log.clone()).unwrap_or_default()
    }

    fn delete_program(&self, program: ProgramId) {
        let mut state = self.state.borrow_mut();
        state.programs.remove(&program);
        state.deleted_programs.insert(program);
        if state.current_program == Some(program) {
            state.current_program = None;
        }
    }

    fn use_program(&self, program: ProgramId) {
        self.state.borrow_mut().current_program = Some(program);
    }

    fn attached_shaders(&self, program: ProgramId) -> i32 {
        self.state.borrow().programs.get(&program).map_or(0, |p| p.attached.len() as i32)
    }

    fn active_attributes(&self, program: ProgramId) -> Vec<ActiveVariable> {
        self.state.borrow().programs.get(&program)
            .map(|p| p.attributes.iter().map(|a| a.0.clone()).collect())
            .unwrap_or_default()
    }

    fn active_uniforms(&self, program: ProgramId) -> Vec<ActiveVariable> {
        self.state.borrow().programs.get(&program)
            .map(|p| p.uniforms.iter().map(|u| u.0.clone()).collect())
            .unwrap_or_default()
    }

    fn attrib_location(&self, program: ProgramId, name: &str) -> i32 {
        self.state.borrow().programs.get(&program)
            .and_then(|p| lookup(&p.attributes, name))
            .unwrap_or(-1)
    }

    fn uniform_location(&self, program: ProgramId, name: &str) -> i32 {
        self.state.borrow().programs.get(&program)
            .and_then(|p| lookup(&p.uniforms, name))
            .unwrap_or(-1)
    }

    fn uniform_mat4(&self, location: i32, columns: &[f32; 16]) {
        self.state.borrow_mut().uploads.push(Upload::Mat4(location, *columns));
    }

    fn uniform_vec4(&self, location: i32, value: [f32; 4]) {
        self.state.borrow_mut().uploads.push(Upload::Vec4(location, value));
    }

    fn get_string(&self, name: u32) -> String {
        match name {
            gl::VENDOR => "Mock Vendor".to_string(),
            gl::RENDERER => "Mock Renderer".to_string(),
            gl::VERSION => "3.3.0 Mock".to_string(),
            gl::SHADING_LANGUAGE_VERSION => "3.30".to_string(),
            _ => String::new(),
        }
    }

    fn get_integer(&self, param: u32) -> [i32; 2] {
        match param {
            gl::MAX_VIEWPORT_DIMS => [16384, 16384],
            _ => [16, 0],
        }
    }

    fn get_boolean(&self, _param: u32) -> bool {
        false
    }
}

/// Resolves `name`, `name[i]` or `name[0]`-style names against the active list.
fn lookup(variables: &[(ActiveVariable, i32)], name: &str) -> Option<i32> {
    let (base, index) = match name.find('[') {
        Some(open) => (&name[..open], name[open + 1..].trim_end_matches(']').parse::<i32>().ok()?),
        None => (name, 0),
    };

    variables.iter().find_map(|(variable, location)| {
        let variable_base = variable.name.strip_suffix("[0]").unwrap_or(&variable.name);
        if variable_base == base && index < variable.size {
            Some(location + index)
        } else {
            None
        }
    })
}
