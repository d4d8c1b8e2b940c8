//! The `gl.log` diagnostic file.
//!
//! Each run truncates the file and writes a short header; after that every entry is appended by
//! reopening the file, so a crash never loses what was written before it. Entries are mirrored to
//! the `log` facade as well, which is what ends up on the terminal.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, error, warn};

pub const GL_LOG_FILE: &str = "gl.log";

#[derive(Debug, Clone, Default)]
pub struct GlLog {
    path: Option<PathBuf>,
}

impl GlLog {
    /// A log that only forwards to the `log` facade.
    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// Truncates `path` and writes the log header.
    pub fn restart<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut file = File::create(&path)?;

        writeln!(file, "GL_LOG_FILE log. local time {}", chrono::Local::now())?;
        writeln!(file, "build version: {} {}\n", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))?;

        Ok(Self { path: Some(path) })
    }

    pub fn is_enabled(&self) -> bool {
        self.path.is_some()
    }

    #[cfg(test)]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Appends an entry.
    pub fn write(&self, args: fmt::Arguments) {
        debug!("{}", args);
        self.append(args);
    }

    /// Appends an entry and reports it as an error.
    pub fn error(&self, args: fmt::Arguments) {
        error!("{}", args);
        self.append(args);
    }

    fn append(&self, args: fmt::Arguments) {
        let path = match &self.path {
            Some(path) => path,
            None => return,
        };

        let result = OpenOptions::new()
            .append(true)
            .open(path)
            .and_then(|mut file| writeln!(file, "{}", args));

        if let Err(e) = result {
            warn!("could not append to GL log file {}: {}", path.display(), e);
        }
    }
}

macro_rules! gl_log {
    ($log:expr, $($arg:tt)+) => { $log.write(format_args!($($arg)+)) };
}

macro_rules! gl_log_err {
    ($log:expr, $($arg:tt)+) => { $log.error(format_args!($($arg)+)) };
}

#[cfg(test)]
pub(crate) fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("gltut-{}-{}.log", std::process::id(), name))
}
