// The per-frame application loop: event intake, pointer sampling, drawing,
// compositing. Owns every pixel buffer and all input state.

use log::{debug, warn};

use crate::canvas::Canvas;
use crate::config::AppConfig;
use crate::input::{FrameInput, InputMapper, InputState};
use crate::overlay::{Action, ButtonRegistry, Overlay};
use crate::palette::{self, Palette};
use crate::surface::Surface;

/// Loop state after construction; Stopped is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Running,
    Stopped,
}

pub struct App {
    palette: Palette,
    canvas: Canvas,
    overlay: Overlay,
    buttons: ButtonRegistry,
    mapper: InputMapper,
    input: InputState,
    state: LoopState,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let palette = Palette::pico8();
        let canvas = Canvas::new(config.canvas_width, config.canvas_height, palette::WHITE);
        let overlay = Overlay::new(config.canvas_width, config.canvas_height, &palette);
        let buttons = ButtonRegistry::from_palette(config.canvas_width, &palette);
        let mapper = InputMapper::new(config);

        Self {
            palette,
            canvas,
            overlay,
            buttons,
            mapper,
            input: InputState::new(palette::BLACK),
            state: LoopState::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Run one frame against the given input sample: intake, sample update,
    /// draw. Compositing is separate so the loop can skip it after a quit.
    pub fn frame(&mut self, raw: FrameInput) {
        /* 1) Event intake */
        if raw.quit {
            self.state = LoopState::Stopped;
            return;
        }
        if raw.clear {
            debug!("clearing canvas");
            self.canvas.clear();
        }
        // Pointer-down edge: hit-test the palette strip at the position we
        // showed the user last frame, and apply any resulting actions before
        // this frame draws.
        if raw.left_down && !self.input.down {
            for action in self.buttons.dispatch(self.input.pos) {
                self.apply(action);
            }
        }

        /* 2) Sample update */
        self.input.prev = self.input.pos;
        self.input.pos = self.mapper.to_canvas_space(raw.mouse);
        self.input.down = raw.left_down;

        /* 3) Draw: freehand segment from the previous to the current pointer
        position while the button is held. */
        if self.input.down {
            self.canvas
                .draw_line(self.input.prev, self.input.pos, self.input.color);
        }
    }

    /// Compose the frame: paper first, then the palette strip with its
    /// colorkey treated as transparent, both scaled to window resolution.
    pub fn composite(&self, dest: &mut Surface) {
        self.canvas.composite(dest);
        self.overlay.composite(dest);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::SelectColor(index) => match self.palette.color_at(index) {
                Ok(color) => {
                    debug!("drawing color set to palette index {index}");
                    self.input.color = color;
                }
                // The registry only emits in-range indices, so this is a bug
                // somewhere upstream; drop the signal loudly instead of
                // drawing with an undefined color.
                Err(e) => warn!("ignoring color change: {e}"),
            },
        }
    }
}
