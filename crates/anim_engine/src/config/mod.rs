//! Configuration system
//!
//! The defaults reproduce the fixed window the application has always opened
//! (640x480, "Test Window"). Files are optional and may be TOML or RON; any
//! field missing from a file keeps its default.

use std::path::Path;

pub use serde::{Serialize, Deserialize};

/// Default window width in pixels
pub const DEFAULT_WIDTH: u32 = 640;
/// Default window height in pixels
pub const DEFAULT_HEIGHT: u32 = 480;
/// Default window title
pub const DEFAULT_TITLE: &str = "Test Window";
/// Default increment of the cycling clear color per frame
pub const DEFAULT_COLOR_STEP: f32 = 0.01;
/// Default frame rate used when the window cannot vsync itself
pub const DEFAULT_TARGET_FPS: u32 = 60;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        format.parse(&contents)
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml` files
    Toml,
    /// `.ron` files
    Ron,
}

impl ConfigFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Parse configuration text in this format
    pub fn parse<T: for<'de> Deserialize<'de>>(self, contents: &str) -> Result<T, ConfigError> {
        match self {
            Self::Toml => toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Self::Ron => ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value was read but makes no sense
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Name of the offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Client area width in pixels
    pub width: u32,
    /// Client area height in pixels
    pub height: u32,
    /// Title bar text
    pub title: String,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window settings
    pub window: WindowSettings,
    /// Name reported to the graphics driver
    pub application_name: String,
    /// Per-frame increment of the clear color, in (0, 1)
    pub color_step: f32,
    /// Frame rate cap for windows without vsync; 0 disables pacing
    pub target_fps: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            application_name: DEFAULT_TITLE.to_string(),
            color_step: DEFAULT_COLOR_STEP,
            target_fps: DEFAULT_TARGET_FPS,
        }
    }
}

impl Config for AppConfig {}

impl AppConfig {
    /// Reject values the window system cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid {
                field: "window",
                reason: format!("size {}x{} has a zero dimension", self.window.width, self.window.height),
            });
        }
        if self.window.title.is_empty() {
            return Err(ConfigError::Invalid {
                field: "window.title",
                reason: "title is empty".to_string(),
            });
        }
        if !(self.color_step > 0.0 && self.color_step < 1.0) {
            return Err(ConfigError::Invalid {
                field: "color_step",
                reason: format!("{} is outside (0, 1)", self.color_step),
            });
        }
        Ok(())
    }
}
