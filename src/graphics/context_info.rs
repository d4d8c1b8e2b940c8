use crate::gl_log::GlLog;

use super::driver::ShaderDriver;

/// Implementation limits worth having in the log when something doesn't render.
const CONTEXT_PARAMS: [(u32, &str); 12] = [
    (gl::MAX_COMBINED_TEXTURE_IMAGE_UNITS, "GL_MAX_COMBINED_TEXTURE_IMAGE_UNITS"),
    (gl::MAX_CUBE_MAP_TEXTURE_SIZE, "GL_MAX_CUBE_MAP_TEXTURE_SIZE"),
    (gl::MAX_DRAW_BUFFERS, "GL_MAX_DRAW_BUFFERS"),
    (gl::MAX_FRAGMENT_UNIFORM_COMPONENTS, "GL_MAX_FRAGMENT_UNIFORM_COMPONENTS"),
    (gl::MAX_TEXTURE_IMAGE_UNITS, "GL_MAX_TEXTURE_IMAGE_UNITS"),
    (gl::MAX_TEXTURE_SIZE, "GL_MAX_TEXTURE_SIZE"),
    (gl::MAX_VARYING_VECTORS, "GL_MAX_VARYING_VECTORS"),
    (gl::MAX_VERTEX_ATTRIBS, "GL_MAX_VERTEX_ATTRIBS"),
    (gl::MAX_VERTEX_TEXTURE_IMAGE_UNITS, "GL_MAX_VERTEX_TEXTURE_IMAGE_UNITS"),
    (gl::MAX_VERTEX_UNIFORM_COMPONENTS, "GL_MAX_VERTEX_UNIFORM_COMPONENTS"),
    (gl::MAX_VIEWPORT_DIMS, "GL_MAX_VIEWPORT_DIMS"),
    (gl::STEREO, "GL_STEREO"),
];

/// Writes the driver strings and the context limits to the GL log.
pub fn log_context_info<D: ShaderDriver>(driver: &D, log: &GlLog) {
    gl_log!(log, "Vendor: {}", driver.get_string(gl::VENDOR));
    gl_log!(log, "Renderer: {}", driver.get_string(gl::RENDERER));
    gl_log!(log, "Version: {}", driver.get_string(gl::VERSION));
    gl_log!(log, "Shading language version: {}", driver.get_string(gl::SHADING_LANGUAGE_VERSION));

    gl_log!(log, "GL Context Params:");

    for (param, name) in CONTEXT_PARAMS.iter() {
        match *param {
            gl::STEREO => gl_log!(log, "{} {}", name, driver.get_boolean(*param)),
            gl::MAX_VIEWPORT_DIMS => {
                let [width, height] = driver.get_integer(*param);
                gl_log!(log, "{} {} {}", name, width, height)
            }
            _ => gl_log!(log, "{} {}", name, driver.get_integer(*param)[0]),
        }
    }

    gl_log!(log, "-----------------------------");
}
