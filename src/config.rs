// Configuration: window and canvas resolution, fixed once at startup and
// passed to whoever needs it. Overridable from a TOML file; defaults match
// the classic 1024x600 window over a 256x150 paper.

use serde::Deserialize;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::fs;

use crate::error::Error;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: usize,
    pub window_height: usize,
    pub canvas_width: usize,
    pub canvas_height: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 1024,
            window_height: 600,
            canvas_width: 256,
            canvas_height: 150,
        }
    }
}

impl AppConfig {
    /// Path to the configuration file.
    pub fn config_path() -> PathBuf {
        let config_dir = if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("pico-paint")
        } else {
            PathBuf::from(".config/pico-paint")
        };

        config_dir.join("config.toml")
    }

    /// Load configuration from file; a missing file means defaults.
    pub fn load_from_file() -> Result<Self, Error> {
        let config_path = Self::config_path();

        match fs::read_to_string(&config_path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(Error::Config(format!(
                "read {}: {e}",
                config_path.display()
            ))),
        }
    }

    /// Parse and validate a TOML configuration document.
    pub fn from_toml(content: &str) -> Result<Self, Error> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validated()
    }

    // The pointer mapper divides by the scale, so no dimension may be zero.
    fn validated(self) -> Result<Self, Error> {
        if self.window_width == 0
            || self.window_height == 0
            || self.canvas_width == 0
            || self.canvas_height == 0
        {
            return Err(Error::Config(
                "window and canvas dimensions must be nonzero".into(),
            ));
        }
        Ok(self)
    }

    /// Window-to-canvas scale factor on each axis.
    pub fn scale(&self) -> (f32, f32) {
        (
            self.window_width as f32 / self.canvas_width as f32,
            self.window_height as f32 / self.canvas_height as f32,
        )
    }
}
