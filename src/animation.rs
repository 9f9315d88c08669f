//! Animation driver: the per-frame redraw loop.
//!
//! The driver owns the only state that outlives a frame, the rotation angle.
//! Everything else (the tessellation bundle, the polygons) is rebuilt from
//! scratch on every tick.
//!
//! # Lifecycle
//!
//! ```text
//!   start() ──► Running { pending } ──tick(pending)──► Running { pending' }
//!                      │
//!                   cancel()
//!                      ▼
//!                  Cancelled   (terminal, last frame stays on the surface)
//! ```
//!
//! # Scheduling
//!
//! Frames are requested from a [`FrameScheduler`], which hands out a
//! [`FrameHandle`] for the next display refresh. The host calls
//! [`Animation::tick`] with that handle when the refresh comes due. Each tick
//! runs to completion (clear, advance, tessellate, request the next frame)
//! before the next one can start.
//!
//! Cancellation is cooperative. It withdraws the pending request, so no
//! further tick is scheduled; a tick already in progress is not interrupted,
//! and a stale handle delivered after cancellation is ignored.

use embedded_graphics::prelude::Size;
use heapless::Deque;
use log::{debug, info, trace};

use crate::colors::{BASE_BLUE, BASE_DARK};
use crate::config::{INNER_ROTATION_MULTIPLIER, RADIUS_SCALE, RECURSE_LEVELS, ROTATION_STEP, SIDES};
use crate::geometry::Point;
use crate::surface::Surface;
use crate::tessellation::Tessellation;

// =============================================================================
// Frame Scheduling
// =============================================================================

/// Maximum number of outstanding frame requests in a [`FrameQueue`].
pub const MAX_PENDING_FRAMES: usize = 4;

/// Identifies one requested frame. Used to deliver or cancel it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FrameHandle(u64);

impl FrameHandle {
    #[inline]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Something that can run a callback on the next display refresh.
pub trait FrameScheduler {
    /// Request a callback for the next refresh.
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a pending request. Unknown or already-delivered handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// In-process frame scheduler polled by the host loop.
///
/// Requests queue up in order; the host takes the oldest with
/// [`FrameQueue::next_due`] once per display refresh. The queue is bounded:
/// when full, the oldest request is dropped to make room.
pub struct FrameQueue {
    next_id: u64,
    pending: Deque<FrameHandle, MAX_PENDING_FRAMES>,
}

impl FrameQueue {
    pub const fn new() -> Self {
        Self {
            next_id: 0,
            pending: Deque::new(),
        }
    }

    /// Take the oldest pending request, if any.
    #[inline]
    pub fn next_due(&mut self) -> Option<FrameHandle> {
        self.pending.pop_front()
    }

    #[inline]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

impl Default for FrameQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        if self.pending.is_full() {
            self.pending.pop_front();
        }
        self.pending.push_back(handle).ok();
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let kept = self.pending.len();
        for _ in 0..kept {
            if let Some(h) = self.pending.pop_front()
                && h != handle
            {
                self.pending.push_back(h).ok();
            }
        }
    }
}

// =============================================================================
// Animation State Machine
// =============================================================================

/// Driver state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AnimationState {
    /// A frame has been requested and will be drawn when delivered.
    Running { pending: FrameHandle },
    /// No more frames will be requested.
    Cancelled,
}

/// Rotating tessellation animation.
pub struct Animation {
    center: Point,
    radius: f64,
    rotation: f64,
    state: AnimationState,
    frames_rendered: u64,
}

impl Animation {
    /// Fit the animation to `surface` and request the first frame.
    ///
    /// Center and radius are computed once here and reused on every tick; call
    /// [`Animation::refit`] to re-derive them after a resize.
    pub fn start<S, F>(surface: &S, scheduler: &mut F) -> Self
    where
        S: Surface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        let (center, radius) = fit(surface.size());
        info!(
            "animation start: center=({:.1}, {:.1}) radius={radius:.1}",
            center.x, center.y
        );
        Self {
            center,
            radius,
            rotation: 0.0,
            state: AnimationState::Running {
                pending: scheduler.request_frame(),
            },
            frames_rendered: 0,
        }
    }

    /// Draw one frame if `handle` is the frame this animation is waiting for.
    ///
    /// Clears the surface, advances the rotation by [`ROTATION_STEP`], renders
    /// the tessellation and requests the next frame. Returns `false` (and
    /// touches nothing) when cancelled or when `handle` is stale.
    pub fn tick<S, F>(&mut self, handle: FrameHandle, surface: &mut S, scheduler: &mut F) -> bool
    where
        S: Surface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        match self.state {
            AnimationState::Running { pending } if pending == handle => {}
            AnimationState::Running { .. } => {
                trace!("ignoring stale frame {}", handle.id());
                return false;
            }
            AnimationState::Cancelled => return false,
        }

        surface.clear();
        self.rotation += ROTATION_STEP;
        self.tessellation().render(surface);
        self.frames_rendered += 1;

        self.state = AnimationState::Running {
            pending: scheduler.request_frame(),
        };
        true
    }

    /// Stop requesting frames. The last drawn frame stays on the surface.
    ///
    /// Cancelling twice is a no-op.
    pub fn cancel<F>(&mut self, scheduler: &mut F)
    where
        F: FrameScheduler + ?Sized,
    {
        if let AnimationState::Running { pending } = self.state {
            scheduler.cancel_frame(pending);
            self.state = AnimationState::Cancelled;
            info!("animation cancelled after {} frames", self.frames_rendered);
        }
    }

    /// Re-derive center and radius for a new surface size.
    ///
    /// Rotation and state are kept.
    pub fn refit(&mut self, size: Size) {
        let (center, radius) = fit(size);
        debug!(
            "animation refit to {}x{}: radius {:.1} -> {radius:.1}",
            size.width, size.height, self.radius
        );
        self.center = center;
        self.radius = radius;
    }

    /// Parameter bundle for the current frame.
    pub fn tessellation(&self) -> Tessellation {
        Tessellation {
            center: self.center,
            radius: self.radius,
            sides: SIDES,
            color1: BASE_DARK,
            color2: BASE_BLUE,
            rotation: self.rotation,
            inner_rotation_multiplier: INNER_ROTATION_MULTIPLIER,
            recurse_levels: RECURSE_LEVELS,
        }
    }

    #[inline]
    pub const fn state(&self) -> AnimationState {
        self.state
    }

    #[inline]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, AnimationState::Running { .. })
    }

    /// Current rotation in degrees. Grows without bound.
    #[inline]
    pub const fn rotation(&self) -> f64 {
        self.rotation
    }

    #[inline]
    pub const fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub const fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

/// Center of the surface and a radius of [`RADIUS_SCALE`] times its shorter side.
fn fit(size: Size) -> (Point, f64) {
    let w = f64::from(size.width);
    let h = f64::from(size.height);
    (Point::new(w / 2.0, h / 2.0), w.min(h) * RADIUS_SCALE)
}

// =============================================================================
// Tests
// =============================================================================
