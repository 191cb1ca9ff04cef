// Palette strip UI: a static overlay surface plus the clickable button
// regions laid over it. Both are derived from the palette, in palette order,
// and frozen after construction.
//
// Visual: one swatch per drawing color across the top of the window, a thin
// black divider under them, everything else see-through.

use log::debug;

use crate::palette::{self, Palette};
use crate::surface::Surface;

/// Swatch strip height in canvas-space pixels; the divider sits on the row
/// just below it.
pub const SWATCH_HEIGHT: u32 = 8;

/// Swatch rectangle for palette index `i`: the strip tiles the full canvas
/// width with one equal-width swatch per drawing color.
fn swatch_rect(index: usize, canvas_width: usize, count: usize) -> Rect {
    let w = canvas_width / count;
    Rect {
        x: (index * w) as i32,
        y: 0,
        w: w as u32,
        h: SWATCH_HEIGHT,
    }
}

/// An axis-aligned rectangle in canvas-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    /// Right and bottom edges are exclusive.
    pub fn contains(&self, point: (f32, f32)) -> bool {
        point.0 >= self.x as f32
            && point.0 < (self.x + self.w as i32) as f32
            && point.1 >= self.y as f32
            && point.1 < (self.y + self.h as i32) as f32
    }
}

/// What a button activation asks the app to do, consumed in the same
/// event-intake phase that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectColor(usize),
}

/// A clickable region bound to an action.
pub struct Button {
    rect: Rect,
    label: String,
    action: Action,
}

/// The immutable set of buttons over the overlay.
pub struct ButtonRegistry {
    buttons: Vec<Button>,
}

impl ButtonRegistry {
    /// One button per palette entry, tiling the swatch strip in palette order.
    pub fn from_palette(canvas_width: usize, palette: &Palette) -> Self {
        let count = palette.len();
        let buttons = (0..count)
            .map(|i| Button {
                rect: swatch_rect(i, canvas_width, count),
                label: i.to_string(),
                action: Action::SelectColor(i),
            })
            .collect();
        Self { buttons }
    }

    /// Collect the actions of every button containing `point`. The tiling
    /// layout guarantees non-overlap, but if rectangles ever did overlap all
    /// of them fire; last one wins for any shared state.
    pub fn dispatch(&self, point: (f32, f32)) -> Vec<Action> {
        let mut actions = Vec::new();
        for button in &self.buttons {
            if button.rect.contains(point) {
                debug!("button {} hit at ({:.1}, {:.1})", button.label, point.0, point.1);
                actions.push(button.action);
            }
        }
        actions
    }
}

/// The static UI layer composited over the canvas each frame.
pub struct Overlay {
    surface: Surface,
    colorkey: u32,
}

impl Overlay {
    /// Render the swatch strip and divider once; the surface never changes
    /// afterwards.
    pub fn new(width: usize, height: usize, palette: &Palette) -> Self {
        let colorkey = palette.colorkey().to_pixel();
        let mut surface = Surface::new(width, height, colorkey);

        let count = palette.len();
        for (i, (_name, color)) in palette.iter().enumerate() {
            let r = swatch_rect(i, width, count);
            surface.fill_rect(r.x, r.y, r.w, r.h, color.to_pixel());
        }

        // Divider between the strip and the drawing area.
        surface.fill_rect(0, SWATCH_HEIGHT as i32, width as u32, 1, palette::BLACK.to_pixel());

        Self { surface, colorkey }
    }

    /// Scale-blit the overlay onto the destination, keyed pixels transparent.
    pub fn composite(&self, dest: &mut Surface) {
        self.surface.blit_scaled(dest, Some(self.colorkey));
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swatch_strip_geometry() {
        let palette = Palette::pico8();
        let overlay = Overlay::new(256, 150, &palette);
        let surface = overlay.surface();

        // Every swatch shows its palette color across its full 16x8 rect.
        for (i, (_name, color)) in palette.iter().enumerate() {
            let x0 = i * 16;
            assert_eq!(surface.pixel(x0, 0), Some(color.to_pixel()));
            assert_eq!(surface.pixel(x0 + 15, 7), Some(color.to_pixel()));
        }
        // Divider row is black across the full width.
        for x in [0, 128, 255] {
            assert_eq!(surface.pixel(x, 8), Some(palette::BLACK.to_pixel()));
        }
        // Below the divider it is all colorkey.
        let key = palette.colorkey().to_pixel();
        assert_eq!(surface.pixel(0, 9), Some(key));
        assert_eq!(surface.pixel(128, 75), Some(key));
    }

    #[test]
    fn test_dispatch_inside_swatch() {
        let palette = Palette::pico8();
        let registry = ButtonRegistry::from_palette(256, &palette);
        for i in 0..palette.len() {
            let x = i as f32 * 16.0 + 8.0;
            assert_eq!(registry.dispatch((x, 4.0)), vec![Action::SelectColor(i)]);
        }
    }

    #[test]
    fn test_dispatch_misses_divider_and_paper() {
        let palette = Palette::pico8();
        let registry = ButtonRegistry::from_palette(256, &palette);
        // Divider strip.
        assert!(registry.dispatch((8.0, 8.0)).is_empty());
        assert!(registry.dispatch((8.0, 8.9)).is_empty());
        // Drawing area.
        assert!(registry.dispatch((128.0, 75.0)).is_empty());
        // Left of the first swatch.
        assert!(registry.dispatch((-1.0, 4.0)).is_empty());
    }

    #[test]
    fn test_swatch_boundaries_are_exclusive_on_the_right() {
        let palette = Palette::pico8();
        let registry = ButtonRegistry::from_palette(256, &palette);
        assert_eq!(registry.dispatch((15.9, 0.0)), vec![Action::SelectColor(0)]);
        assert_eq!(registry.dispatch((16.0, 0.0)), vec![Action::SelectColor(1)]);
    }
}
