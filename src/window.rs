//! Window and OpenGL context creation.

use glutin::dpi::{LogicalSize, PhysicalSize};
use glutin::event_loop::EventLoop;
use glutin::monitor::MonitorHandle;
use glutin::window::{Fullscreen, WindowBuilder};
use glutin::{Api, ContextBuilder, GlProfile, GlRequest, PossiblyCurrent, WindowedContext};
use log::info;
use thiserror::Error;

use crate::config::Config;
use crate::gl_log::GlLog;
use crate::graphics::context_info::log_context_info;
use crate::graphics::opengl::Gl;

/// Samples per pixel requested for the default framebuffer.
pub const MULTISAMPLING: u16 = 16;

#[derive(Debug, Error)]
pub enum WindowError {
    #[error("could not create the window: {0}")]
    Creation(String),

    #[error("could not make the OpenGL context current: {0}")]
    Context(String),
}

/// The size of the framebuffer in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    /// Width over height. A minimised window reports a zero height, which is treated as one pixel.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

impl From<PhysicalSize<u32>> for FrameSize {
    fn from(size: PhysicalSize<u32>) -> Self {
        Self { width: size.width, height: size.height }
    }
}

pub struct GlWindow {
    context: WindowedContext<PossiblyCurrent>,
    title: String,
}

impl GlWindow {
    /// Opens the window, makes its context current on this thread and loads the GL functions.
    /// Every GL call after this has to come from the same thread.
    pub fn open<T>(config: &Config, events: &EventLoop<T>, log: &GlLog) -> Result<Self, WindowError> {
        gl_log!(log, "starting glutin window\n");

        let title = config.window_title().to_string();
        let mut window = WindowBuilder::new()
            .with_title(title.as_str())
            .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64));

        if config.fullscreen {
            let monitor = events.primary_monitor();
            log_monitor(&monitor, log);
            window = window.with_fullscreen(Some(Fullscreen::Borderless(monitor)));
        }

        let mut builder = ContextBuilder::new()
            .with_gl(GlRequest::Specific(Api::OpenGl, (config.major, config.minor)))
            .with_multisampling(MULTISAMPLING)
            .with_vsync(true);

        if config.wants_core_profile() {
            builder = builder.with_gl_profile(GlProfile::Core);
        }
        if config.wants_forward_compatible() {
            // glutin picks the forward compatible bit itself wherever the platform needs it
            gl_log!(log, "forward compatible context requested");
        }

        let context = builder.build_windowed(window, events).map_err(|e| {
            gl_log_err!(log, "ERROR: could not create window: {}", e);
            WindowError::Creation(e.to_string())
        })?;

        let context = unsafe { context.make_current() }.map_err(|(_, e)| {
            gl_log_err!(log, "ERROR: could not make context current: {}", e);
            WindowError::Context(e.to_string())
        })?;

        gl::load_with(|symbol| context.get_proc_address(symbol) as *const _);

        info!("opened \"{}\" with an OpenGL {}.{} context", title, config.major, config.minor);
        if log.is_enabled() {
            log_context_info(&Gl, log);
        }

        Ok(Self { context, title })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn size(&self) -> FrameSize {
        self.context.window().inner_size().into()
    }

    pub fn set_title(&self, title: &str) {
        self.context.window().set_title(title);
    }

    pub fn resize(&self, size: PhysicalSize<u32>) {
        self.context.resize(size);
    }

    pub fn swap_buffers(&self) -> Result<(), WindowError> {
        self.context.swap_buffers().map_err(|e| WindowError::Context(e.to_string()))
    }
}

fn log_monitor(monitor: &MonitorHandle, log: &GlLog) {
    gl_log!(log, "Full Screen Mode");

    for mode in monitor.video_modes() {
        let size = mode.size();
        gl_log!(log, "({}*{}, {}HZ)", size.width, size.height, mode.refresh_rate());
    }

    let size = monitor.size();
    gl_log!(
        log,
        "Primary monitor: {} ({}*{})\n",
        monitor.name().unwrap_or_else(|| "unknown".to_string()),
        size.width,
        size.height
    );
}
