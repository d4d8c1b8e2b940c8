//! Command line configuration.
//!
//! Parsed once at startup into a [`Config`] that is handed by reference to whatever needs it.
//! Window resizes don't write back into it; the frame loop tracks the live size itself.

use std::path::PathBuf;

use clap::{App, ArgMatches};
use thiserror::Error;

use crate::scenes::Demo;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Cli(#[from] clap::Error),

    #[error("unknown demo `{0}`")]
    UnknownDemo(String),

    #[error("window size must be non-zero, got {0}x{1}")]
    EmptyWindow(u32, u32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub demo: Demo,
    pub major: u8,
    pub minor: u8,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    pub fps: bool,
    pub core: bool,
    pub forward: bool,
    pub log: bool,
    pub log_file: PathBuf,
    pub title: Option<String>,
    pub vertex_shader: Option<PathBuf>,
    pub fragment_shader: Option<PathBuf>,
}

impl Config {
    /// Parses the process arguments. `--help`, `--version` and usage errors print and exit.
    pub fn from_args() -> Result<Self, ConfigError> {
        let yaml = load_yaml!("cli.yaml");
        let matches = App::from_yaml(yaml).get_matches();

        Self::from_matches(&matches)
    }

    #[cfg(test)]
    pub fn parse_from<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let yaml = load_yaml!("cli.yaml");
        let matches = App::from_yaml(yaml).get_matches_from_safe(args)?;

        Self::from_matches(&matches)
    }

    pub fn from_matches(matches: &ArgMatches) -> Result<Self, ConfigError> {
        let demo = matches.value_of("demo").unwrap_or_default();
        let demo = demo.parse::<Demo>().map_err(|_| ConfigError::UnknownDemo(demo.to_string()))?;

        let width = value_t!(matches, "width", u32)?;
        let height = value_t!(matches, "height", u32)?;
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyWindow(width, height));
        }

        Ok(Self {
            demo,
            major: value_t!(matches, "major", u8)?,
            minor: value_t!(matches, "minor", u8)?,
            width,
            height,
            fullscreen: matches.is_present("full"),
            fps: value_t!(matches, "fps", bool)?,
            core: value_t!(matches, "core", bool)?,
            forward: value_t!(matches, "forward", bool)?,
            log: value_t!(matches, "log", bool)?,
            log_file: PathBuf::from(matches.value_of("log-file").unwrap_or(crate::gl_log::GL_LOG_FILE)),
            title: matches.value_of("title").map(String::from),
            vertex_shader: matches.value_of("vertex-shader").map(PathBuf::from),
            fragment_shader: matches.value_of("fragment-shader").map(PathBuf::from),
        })
    }

    /// Profiles only exist from OpenGL 3.2 on.
    pub fn wants_core_profile(&self) -> bool {
        self.core && (self.major, self.minor) >= (3, 2)
    }

    pub fn wants_forward_compatible(&self) -> bool {
        self.forward && self.major >= 3
    }

    pub fn window_title(&self) -> &str {
        self.title.as_deref().unwrap_or_else(|| self.demo.title())
    }
}
