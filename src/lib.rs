//! Animated, recursively subdivided triangular tessellation.
//!
//! A large equilateral triangle is cut into a grid of smaller triangles, each
//! colored from a gradient across the outer one. Each cell is either drawn flat
//! or subdivided again as a tessellation of its own. A continuous
//! rotation drives the animation: the outer grid turns one way while every
//! cell spins the other way, faster.
//!
//! # Layers
//!
//! Leaf-first, data flows strictly downward:
//!
//! ```text
//! animation ──► tessellation ──► geometry, colors
//!                     │
//!                     ▼
//!                primitives ──► surface (Scene | DisplaySurface)
//! ```
//!
//! - [`colors`]: hex <-> RGB conversion, linear interpolation
//! - [`geometry`]: rotation about a center, barycentric gradient factor
//! - [`primitives`]: equilateral triangle emission
//! - [`tessellation`]: the recursive grid
//! - [`animation`]: redraw loop state machine and frame scheduling
//! - [`surface`]: the drawable surface contract and its implementations
//!
//! The binary (`main.rs`) hosts the animation in a desktop window and adds the
//! [`overlay`] title and [`profiling`] statistics.
//!
//! # Testing
//!
//! Everything in this library runs headless against [`surface::Scene`]:
//! ```bash
//! cargo test --lib
//! ```

// Crate-level lints: casts are intentional in pixel and timing math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animation;
pub mod colors;
pub mod config;
pub mod geometry;
pub mod overlay;
pub mod primitives;
pub mod profiling;
pub mod styles;
pub mod surface;
pub mod tessellation;
