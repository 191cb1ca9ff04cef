// pico-paint: a tiny raster paint program.
// • The window shows a 256x150 paper scaled up 4x.
// • Click a swatch in the top strip to pick a drawing color.
// • Hold Left Mouse and drag to draw 1-pixel freehand lines.
// • C clears the paper. ESC (or closing the window) quits.

use std::time::{Duration, Instant};

use log::{debug, info, warn};

use pico_paint::app::App;
use pico_paint::config::AppConfig;
use pico_paint::error::Error;
use pico_paint::screen::Screen;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting pico-paint");

    let config = AppConfig::load_from_file().unwrap_or_else(|e| {
        warn!("Config load failed ({e}); using defaults");
        AppConfig::default()
    });

    /* --- Window + app state ---
       Visual: an empty white paper appears with the palette strip on top.
       No window means no app; bail out with the error. */
    let mut screen = Screen::new("pico-paint", config.window_width, config.window_height)?;
    let mut app = App::new(&config);
    info!(
        "Window {}x{}, paper {}x{}",
        config.window_width, config.window_height, config.canvas_width, config.canvas_height
    );

    /* --- FPS bookkeeping --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while app.is_running() {
        // 1-3) Intake events, resample the pointer, draw any drag segment.
        app.frame(screen.sample_input());
        if !app.is_running() {
            break;
        }

        // 4) Composite paper + palette strip and flip.
        app.composite(screen.frame_mut());
        screen.present()?;

        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            debug!("FPS: {:.1}", frames_this_second as f32 / secs);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    // Dropping the screen releases the window and graphics context.
    info!("Stopped");
    Ok(())
}
