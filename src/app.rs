//! The frame loop.
//!
//! Everything runs on the main thread: the event loop, the GL context and all of the scene
//! state. Per frame the loop reads the held keys, lets the scene update its uniforms, draws and
//! swaps.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::Context as _;
use glutin::event::{Event, WindowEvent};
use glutin::event_loop::{ControlFlow, EventLoop};
use log::{error, info, warn};

use crate::config::Config;
use crate::fps::{fps_title, FpsCounter};
use crate::gl_log::GlLog;
use crate::graphics::driver::ShaderDriver;
use crate::graphics::opengl::{self, Gl, GlVertexArray, GlVertexBuffer};
use crate::graphics::shader::{Program, ShaderBuilder};
use crate::input::KeyState;
use crate::scenes::{Geometry, Scene};
use crate::window::{FrameSize, GlWindow};

const CLEAR_COLOUR: [f32; 4] = [0.6, 0.6, 0.8, 1.0];

/// A vertex array with one buffer per attribute.
struct Mesh {
    vao: GlVertexArray,
    _buffers: Vec<GlVertexBuffer>,
    vertex_count: i32,
}

impl Mesh {
    /// Uploads `geometry` into `vao`, feeding each attribute to wherever `program` put it.
    fn upload<D: ShaderDriver>(vao: GlVertexArray, geometry: &Geometry, program: &Program<D>) -> Self {
        vao.bind();

        let mut buffers = Vec::new();
        for attribute in geometry.attributes() {
            let location = program.driver().attrib_location(program.id(), attribute.name);
            if location < 0 {
                warn!("vertex attribute `{}` is not used by the shader", attribute.name);
                continue;
            }

            let vbo = GlVertexBuffer::init(attribute.data);
            opengl::set_vertex_attrib(location as u32, 0, attribute.components, 0);
            buffers.push(vbo);
        }

        Self {
            vao,
            _buffers: buffers,
            vertex_count: geometry.vertex_count(),
        }
    }

    fn draw(&self) {
        self.vao.bind();
        opengl::draw_triangles(self.vertex_count);
    }
}

/// Owns everything the loop touches. Field order matters: GL objects have to be dropped while
/// the window, and so the context, is still alive.
struct App {
    scene: Scene,
    program: Program<'static, Gl>,
    mesh: Mesh,
    keys: KeyState,
    fps: FpsCounter,
    started: Instant,
    last_frame: Instant,
    window: GlWindow,
}

impl App {
    fn handle(&mut self, event: Event<()>, control_flow: &mut ControlFlow) {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::Resized(physical) => {
                    let size = FrameSize::from(physical);
                    self.window.resize(physical);
                    opengl::set_viewport(size.width, size.height);
                    self.scene.resize(&self.program, size);
                }
                WindowEvent::KeyboardInput { input, .. } => self.keys.handle(&input),
                WindowEvent::Focused(false) => self.keys.clear(),
                _ => {}
            },
            Event::MainEventsCleared => {
                if let Err(e) = self.frame() {
                    error!("{}", e);
                    *control_flow = ControlFlow::Exit;
                }
                if self.keys.wants_close() {
                    *control_flow = ControlFlow::Exit;
                }
            }
            Event::LoopDestroyed => info!("closing {}", self.window.title()),
            _ => {}
        }
    }

    fn frame(&mut self) -> Result<(), crate::window::WindowError> {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if let Some(rate) = self.fps.tick(now.duration_since(self.started).as_secs_f64()) {
            self.window.set_title(&fps_title(self.window.title(), rate));
        }

        opengl::clear(CLEAR_COLOUR);

        self.scene.frame(&self.program, &self.keys.camera_input(), elapsed);
        self.mesh.draw();

        self.window.swap_buffers()
    }
}

/// Reads a GLSL file given on the command line, or falls back to the demo's own shader.
fn shader_source(path: Option<&Path>, builtin: &str, log: &GlLog) -> anyhow::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| {
                gl_log_err!(log, "ERROR: opening shader file {}: {}", path.display(), e);
                e
            })
            .with_context(|| format!("could not read shader {}", path.display())),
        None => Ok(builtin.to_owned()),
    }
}

fn open_gl_log(config: &Config) -> GlLog {
    if !config.log {
        return GlLog::disabled();
    }

    match GlLog::restart(&config.log_file) {
        Ok(log) => log,
        Err(e) => {
            warn!("could not open GL log file {} for writing: {}", config.log_file.display(), e);
            GlLog::disabled()
        }
    }
}

pub fn run(config: Config) -> anyhow::Result<()> {
    let gl_log = open_gl_log(&config);

    let events = EventLoop::new();
    let window = GlWindow::open(&config, &events, &gl_log)?;
    let size = window.size();
    opengl::set_viewport(size.width, size.height);
    opengl::configure_pipeline();

    let (vertex, fragment) = config.demo.sources();
    let vertex = shader_source(config.vertex_shader.as_deref(), vertex, &gl_log)?;
    let fragment = shader_source(config.fragment_shader.as_deref(), fragment, &gl_log)?;

    // Validation checks the program against the current state, so a vertex array has to be bound
    let vao = GlVertexArray::generate();

    let gl: &'static Gl = &Gl;
    let program = ShaderBuilder::new(gl)
        .with_log(&gl_log)
        .build(&vertex, &fragment)
        .with_context(|| format!("could not build the shaders for {}", config.demo))?;

    gl_log!(gl_log, "{}", program.introspect());

    let mesh = Mesh::upload(vao, &config.demo.geometry(), &program);

    let mut scene = config.demo.scene();
    scene.prepare(&program, size)?;

    let now = Instant::now();
    let mut app = App {
        scene,
        program,
        mesh,
        keys: KeyState::default(),
        fps: FpsCounter::new(config.fps, 0.0),
        started: now,
        last_frame: now,
        window,
    };

    info!("running {}", config.demo);
    // ControlFlow starts out as Poll, so frames are only throttled by vsync
    events.run(move |event, _, control_flow| app.handle(event, control_flow))
}
