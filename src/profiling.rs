//! Profiling metrics for the render loop.
//!
//! Tracks frame timing statistics and how many polygons each frame emitted.
//! The host records one sample per frame and periodically logs a summary.
//!
//! # Usage
//!
//! ```ignore
//! let mut metrics = ProfilingMetrics::new();
//!
//! // In main loop:
//! let frame_start = Instant::now();
//! // ... render work ...
//! let render_time = frame_start.elapsed();
//! // ... sleep ...
//! metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
//! metrics.record_polygons(surface.drawn_since_clear());
//! ```

use core::fmt::Write;
use std::time::{Duration, Instant};

use heapless::String;

// =============================================================================
// Profiling Metrics
// =============================================================================

/// Frame timing and render statistics.
pub struct ProfilingMetrics {
    // Frame timing (microseconds for precision)
    /// Total frame time (render + sleep + overhead)
    pub frame_time_us: u32,
    /// Time spent rendering (clear + tessellation + overlay)
    pub render_time_us: u32,
    /// Time spent sleeping (rate limiting)
    pub sleep_time_us: u32,

    // Statistics (computed over time)
    /// Minimum frame time observed
    pub frame_time_min_us: u32,
    /// Maximum frame time observed
    pub frame_time_max_us: u32,
    /// Rolling average frame time (simple exponential moving average)
    frame_time_avg_us: f32,
    /// Rolling average render time
    render_time_avg_us: f32,

    // Counters
    /// Total frames recorded since startup
    pub total_frames: u64,
    /// Polygons drawn in the most recent frame
    pub polygons_last_frame: u32,
    /// Polygons drawn since startup
    pub total_polygons: u64,

    start_time: Instant,
}

impl ProfilingMetrics {
    /// Create new profiling metrics, starting the uptime timer.
    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            sleep_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            render_time_avg_us: 0.0,
            total_frames: 0,
            polygons_last_frame: 0,
            total_polygons: 0,
            start_time: Instant::now(),
        }
    }

    /// Exponential moving average alpha (0.1 for smooth updates).
    const EMA_ALPHA: f32 = 0.1;

    /// Record frame timing for this frame.
    ///
    /// Updates current frame stats, min/max, and rolling averages.
    pub fn record_frame(&mut self, total_time: Duration, render_time: Duration, sleep_time: Duration) {
        let total_us = total_time.as_micros() as u32;
        let render_us = render_time.as_micros() as u32;

        self.frame_time_us = total_us;
        self.render_time_us = render_us;
        self.sleep_time_us = sleep_time.as_micros() as u32;

        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        if self.total_frames == 0 {
            self.frame_time_avg_us = total_us as f32;
            self.render_time_avg_us = render_us as f32;
        } else {
            self.frame_time_avg_us = ema(self.frame_time_avg_us, total_us);
            self.render_time_avg_us = ema(self.render_time_avg_us, render_us);
        }

        self.total_frames += 1;
    }

    /// Record how many polygons the last frame put on the surface.
    #[inline]
    pub fn record_polygons(&mut self, count: usize) {
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        self.polygons_last_frame = count;
        self.total_polygons += u64::from(count);
    }

    /// Get average frame time in microseconds.
    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 {
        self.frame_time_avg_us as u32
    }

    /// Get average render time in microseconds.
    #[inline]
    pub const fn render_time_avg_us(&self) -> u32 {
        self.render_time_avg_us as u32
    }

    /// Frames per second implied by the average frame time.
    pub fn fps(&self) -> f32 {
        if self.frame_time_avg_us > 0.0 {
            1_000_000.0 / self.frame_time_avg_us
        } else {
            0.0
        }
    }

    /// Get uptime since metrics were created.
    #[inline]
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Format uptime as HH:MM:SS string.
    pub fn uptime_string(&self) -> String<12> {
        format_hms(self.uptime().as_secs())
    }

    /// One-line summary for the periodic stats log.
    pub fn summary(&self) -> String<128> {
        let mut s = String::new();
        let _ = write!(
            s,
            "{} {:.0} fps, frame {}us avg ({}..{}), render {}us, {} polygons",
            self.uptime_string(),
            self.fps(),
            self.frame_time_avg_us(),
            self.frame_time_min_us,
            self.frame_time_max_us,
            self.render_time_avg_us(),
            self.polygons_last_frame,
        );
        s
    }
}

impl Default for ProfilingMetrics {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

#[inline]
fn ema(avg: f32, sample_us: u32) -> f32 {
    ProfilingMetrics::EMA_ALPHA.mul_add(sample_us as f32, (1.0 - ProfilingMetrics::EMA_ALPHA) * avg)
}

fn format_hms(total_secs: u64) -> String<12> {
    let mut s = String::new();
    let _ = write!(
        s,
        "{:02}:{:02}:{:02}",
        total_secs / 3600,
        (total_secs % 3600) / 60,
        total_secs % 60
    );
    s
}

// =============================================================================
// Tests
// =============================================================================
