//! Application configuration constants.
//!
//! Everything here is fixed at compile time. The animation has no end-user
//! settings: the window size, pacing and tessellation parameters below are
//! the whole configuration surface.
//!
//! Per-frame polygon budget at the default parameters is
//! `primitive_count(SIDES, RECURSE_LEVELS)` = 14 500 triangles.

use std::time::Duration;

// =============================================================================
// Window Configuration
// =============================================================================

/// Window width in pixels.
pub const SCREEN_WIDTH: u32 = 800;

/// Window height in pixels.
pub const SCREEN_HEIGHT: u32 = 600;

/// Window title.
pub const WINDOW_TITLE: &str = "Synesthetic Systems";

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~60 FPS). The host loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_micros(16_667);

/// How often the host logs frame statistics.
pub const STATS_INTERVAL: Duration = Duration::from_secs(1);

// =============================================================================
// Tessellation Parameters
// =============================================================================

/// Rotation added per frame, in degrees.
pub const ROTATION_STEP: f64 = 0.03;

/// Outer radius as a fraction of the surface's shorter side.
/// Above 0.5 the outer triangle deliberately overflows the surface.
pub const RADIUS_SCALE: f64 = 0.9;

/// Cells per edge at every level.
pub const SIDES: u32 = 10;

/// Cells spin at `rotation * INNER_ROTATION_MULTIPLIER * 2`.
pub const INNER_ROTATION_MULTIPLIER: f64 = -2.0;

/// Nested tessellation depth below the outer grid.
pub const RECURSE_LEVELS: u32 = 1;
