// pico-paint: a tiny raster paint program over a minifb window.

pub mod app;
pub mod canvas;
pub mod config;
pub mod error;
pub mod input;
pub mod overlay;
pub mod palette;
pub mod screen;
pub mod surface;
