// Crate-wide error type. Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String), // Pushing the frame buffer to the window failed
    #[error("Palette index {index} out of range (palette has {count} colors)")]
    PaletteIndex { index: usize, count: usize },
    #[error("Config error: {0}")]
    Config(String), // Reading or validating the config file failed
}
