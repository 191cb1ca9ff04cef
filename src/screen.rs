// The on-screen window: a minifb wrapper owning the window-resolution
// backbuffer the canvas and overlay are composited into each frame.

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use crate::error::Error;
use crate::input::FrameInput;
use crate::surface::Surface;

pub struct Screen {
    window: Window,
    frame: Surface, // what you actually see, window resolution
}

impl Screen {
    /// Open the window. Failure here is fatal; the process cannot continue
    /// without a graphics context.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self {
            window,
            frame: Surface::new(width, height, 0),
        })
    }

    /// Drain this frame's input into one classified sample.
    pub fn sample_input(&self) -> FrameInput {
        FrameInput {
            mouse: self
                .window
                .get_mouse_pos(MouseMode::Clamp)
                .unwrap_or((0.0, 0.0)),
            left_down: self.window.get_mouse_down(MouseButton::Left),
            clear: self.window.is_key_pressed(Key::C, KeyRepeat::No),
            quit: !self.window.is_open() || self.window.is_key_down(Key::Escape),
        }
    }

    /// The backbuffer to composite into before presenting.
    pub fn frame_mut(&mut self) -> &mut Surface {
        &mut self.frame
    }

    /// Push the backbuffer to the screen.
    /// Visual: the window immediately displays the new frame.
    pub fn present(&mut self) -> Result<(), Error> {
        self.window
            .update_with_buffer(self.frame.pixels(), self.frame.width(), self.frame.height())
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }
}
