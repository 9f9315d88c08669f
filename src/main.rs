//! Desktop host for the tessellation animation.
//!
//! Opens a simulator window, starts the [`Animation`] and runs the frame loop:
//!
//! 1. Poll window events; closing the window cancels the animation.
//! 2. Deliver the due frame from the [`FrameQueue`] (clear, rotate, tessellate).
//! 3. Draw the title overlay on top and present the frame.
//! 4. Sleep out the rest of [`FRAME_TIME`] and record profiling metrics.
//!
//! Set `RUST_LOG=debug` (or `trace` for per-tessellation detail) for more
//! output; the default level is `info`, which logs a stats line every
//! [`STATS_INTERVAL`].

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::info;
use synesthetic_tessellation::animation::{Animation, FrameQueue};
use synesthetic_tessellation::config::{
    FRAME_TIME,
    RECURSE_LEVELS,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    SIDES,
    STATS_INTERVAL,
    WINDOW_TITLE,
};
use synesthetic_tessellation::overlay::draw_title_overlay;
use synesthetic_tessellation::profiling::ProfilingMetrics;
use synesthetic_tessellation::surface::{DisplaySurface, Surface};
use synesthetic_tessellation::tessellation::primitive_count;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Initialize display and window (simulator mode)
    let display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let mut surface = DisplaySurface::new(display);
    let output_settings = OutputSettingsBuilder::new().build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    // Window must be presented once before events can be polled
    surface.clear();
    window.update(surface.target());

    let mut scheduler = FrameQueue::new();
    let mut animation = Animation::start(&surface, &mut scheduler);
    info!(
        "{}x{} window, {} polygons per frame",
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
        primitive_count(SIDES, RECURSE_LEVELS)
    );

    let mut metrics = ProfilingMetrics::new();
    let mut last_stats = Instant::now();

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    while animation.is_running() {
        let frame_start = Instant::now();

        for ev in window.events() {
            if matches!(ev, SimulatorEvent::Quit) {
                animation.cancel(&mut scheduler);
            }
        }

        if let Some(handle) = scheduler.next_due()
            && animation.tick(handle, &mut surface, &mut scheduler)
        {
            metrics.record_polygons(surface.drawn_since_clear());
            draw_title_overlay(surface.target_mut());
        }

        let render_time = frame_start.elapsed();
        window.update(surface.target());

        // Sleep to maintain target frame rate
        let pre_sleep = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(pre_sleep) {
            thread::sleep(remaining);
        }
        let sleep_time = frame_start.elapsed().saturating_sub(pre_sleep);
        metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);

        if last_stats.elapsed() >= STATS_INTERVAL {
            info!("{}", metrics.summary());
            last_stats = Instant::now();
        }
    }

    info!(
        "stopped after {} frames ({} polygons, uptime {})",
        animation.frames_rendered(),
        metrics.total_polygons,
        metrics.uptime_string()
    );
}
