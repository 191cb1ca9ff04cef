// Pointer mapping and per-frame input state.

use crate::config::AppConfig;
use crate::palette::Color;

/// Converts window-space pointer coordinates into canvas space. The scale is
/// fixed for the process lifetime; config validation keeps it nonzero.
pub struct InputMapper {
    scale: (f32, f32),
}

impl InputMapper {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            scale: config.scale(),
        }
    }

    /// Pure division by the window-to-canvas scale factor.
    pub fn to_canvas_space(&self, point: (f32, f32)) -> (f32, f32) {
        (point.0 / self.scale.0, point.1 / self.scale.1)
    }
}

/// One frame's classified raw input sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Pointer position in window-space pixels.
    pub mouse: (f32, f32),
    /// Physical left-button state; this is the authoritative drag signal.
    pub left_down: bool,
    /// Clear-canvas request (C key edge).
    pub clear: bool,
    /// Quit request (window closed or ESC).
    pub quit: bool,
}

/// Pointer and selection state owned by the app loop, updated every frame.
pub struct InputState {
    /// Current pointer position, canvas space.
    pub pos: (f32, f32),
    /// Position sampled on the previous frame; drag segments run prev -> pos.
    pub prev: (f32, f32),
    /// Pointer-down as sampled this frame.
    pub down: bool,
    /// The drawing color selected via the palette strip.
    pub color: Color,
}

impl InputState {
    pub fn new(color: Color) -> Self {
        Self {
            pos: (0.0, 0.0),
            prev: (0.0, 0.0),
            down: false,
            color,
        }
    }
}
