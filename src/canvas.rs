// The paper: a persistent pixel buffer at the logical app resolution.
// Only line drawing and clearing may touch it; it lives until exit.

use crate::palette::Color;
use crate::surface::Surface;

pub struct Canvas {
    surface: Surface,
    background: Color,
}

impl Canvas {
    /// Create the paper filled with the background color.
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        Self {
            surface: Surface::new(width, height, background.to_pixel()),
            background,
        }
    }

    /// Wipe the paper back to its background color.
    pub fn clear(&mut self) {
        self.surface.fill(self.background.to_pixel());
    }

    /// Rasterize a 1-pixel line between two canvas-space points. Sub-pixel
    /// endpoints are rounded to the nearest pixel; anything falling outside
    /// the paper is dropped per-pixel, not an error.
    pub fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), color: Color) {
        self.surface.draw_line(
            from.0.round() as i32,
            from.1.round() as i32,
            to.0.round() as i32,
            to.1.round() as i32,
            color.to_pixel(),
        );
    }

    /// Scale-blit the paper onto the destination surface.
    pub fn composite(&self, dest: &mut Surface) {
        self.surface.blit_scaled(dest, None);
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }
}
