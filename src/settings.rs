//! Program settings.
//!
//! Settings are read from an optional JSON file. Every section has defaults, so a
//! missing file or a partial document is fine.

use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::errors::TriangleError;

/// Environment variable naming the settings file.
pub const CONFIG_ENV: &str = "HELLO_TRIANGLE_CONFIG";

/// Settings file looked up in the working directory when [`CONFIG_ENV`] is unset.
pub const DEFAULT_CONFIG_FILE: &str = "hello-triangle.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub shaders: ShaderPaths,
    pub log: LogSettings,
    pub clear_color: [f32; 4],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            shaders: ShaderPaths::default(),
            log: LogSettings::default(),
            clear_color: [0.2, 0.2, 0.2, 1.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    pub fullscreen: bool,
    pub vsync: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Hello Triangle".to_string(),
            width: 640,
            height: 480,
            resizable: true,
            fullscreen: false,
            vsync: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderPaths {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
}

impl Default for ShaderPaths {
    fn default() -> Self {
        Self {
            vertex: PathBuf::from("simple.vert"),
            fragment: PathBuf::from("simple.frag"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub directory: PathBuf,
    pub main_file: String,
    pub error_file: String,
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("logs"),
            main_file: "gl.log".to_string(),
            error_file: "gl_error.log".to_string(),
            level: "info".to_string(),
        }
    }
}

impl LogSettings {
    pub fn level_filter(&self) -> Result<LevelFilter, TriangleError> {
        self.level
            .parse::<LevelFilter>()
            .map_err(|_| TriangleError::Settings(format!("unknown log level '{}'", self.level)))
    }

    pub fn main_path(&self) -> PathBuf {
        self.directory.join(&self.main_file)
    }

    pub fn error_path(&self) -> PathBuf {
        self.directory.join(&self.error_file)
    }
}

impl Settings {
    /// Loads settings from the file named by [`CONFIG_ENV`], or [`DEFAULT_CONFIG_FILE`].
    pub fn from_env() -> Result<Self, TriangleError> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load(&path)
    }

    /// Loads settings from `path`. A missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self, TriangleError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_json(&contents)
                .map_err(|e| TriangleError::Settings(format!("{}: {}", path.display(), e))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(TriangleError::Settings(format!(
                "could not read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, TriangleError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), TriangleError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(TriangleError::Settings(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.clear_color.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Err(TriangleError::Settings(format!(
                "clear colour components must lie in [0, 1], got {:?}",
                self.clear_color
            )));
        }
        self.log.level_filter()?;
        Ok(())
    }
}
