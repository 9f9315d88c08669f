//! Drawable surfaces.
//!
//! The tessellation only needs three things from whatever it draws on: clear
//! everything, append a filled polygon, and report the pixel size. That
//! contract is the [`Surface`] trait. Two implementations are provided:
//!
//! - [`Scene`]: a retained scene graph. Every polygon becomes a node in an
//!   ordered list, which can be inspected or serialized to SVG. This is the
//!   surface used by tests and headless snapshots.
//! - [`DisplaySurface`]: immediate mode over any embedded-graphics
//!   [`DrawTarget`] with `Rgb888` pixels (the simulator window, a framebuffer).
//!   Polygons are rasterized straight into the target.
//!
//! # Degenerate Input
//!
//! Zero-radius geometry can produce NaN coordinates. [`DisplaySurface`] skips
//! polygons with non-finite vertices instead of rasterizing garbage; [`Scene`]
//! keeps them, so tests can see exactly what was emitted.
//!
//! Finite but huge coordinates (a radius of `1e12`) are clipped to the target
//! before they become pixel points. Only the visible part is rasterized and
//! the integer math inside embedded-graphics stays in range.

use core::fmt::Write as _;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::{DrawTarget, Point as PixelPoint, Primitive, Size};
use embedded_graphics::primitives::{PrimitiveStyle, Triangle};
use embedded_graphics::Drawable;

use crate::colors::{BACKGROUND, Rgb, rgb_to_hex};
use crate::geometry::Point;

/// Minimal vector drawing contract used by the renderer.
pub trait Surface {
    /// Remove everything drawn so far.
    fn clear(&mut self);

    /// Append a filled polygon (no stroke) with vertices in drawing order.
    fn fill_polygon(&mut self, vertices: &[Point], fill: Rgb);

    /// Current size in pixels.
    fn size(&self) -> Size;
}

// =============================================================================
// Retained Scene Graph
// =============================================================================

/// One filled polygon node in a [`Scene`].
#[derive(Clone, PartialEq, Debug)]
pub struct Polygon {
    pub vertices: Vec<Point>,
    pub fill: Rgb,
}

/// Retained list of filled polygons, in the order they were appended.
#[derive(Clone, Debug)]
pub struct Scene {
    size: Size,
    nodes: Vec<Polygon>,
}

impl Scene {
    pub const fn new(size: Size) -> Self {
        Self { size, nodes: Vec::new() }
    }

    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.nodes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Serialize the scene as a standalone SVG document.
    ///
    /// The background is painted first, then one `<polygon>` per node in
    /// append order, so later nodes paint over earlier ones.
    pub fn to_svg(&self) -> String {
        let mut svg = String::with_capacity(128 + self.nodes.len() * 96);
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.size.width,
            h = self.size.height,
        );
        let _ = write!(svg, r#"<rect width="100%" height="100%" fill="{}"/>"#, rgb_to_hex(BACKGROUND));
        for node in &self.nodes {
            svg.push_str(r#"<polygon points=""#);
            for (i, p) in node.vertices.iter().enumerate() {
                if i > 0 {
                    svg.push(' ');
                }
                let _ = write!(svg, "{},{}", p.x, p.y);
            }
            let _ = write!(svg, r#"" fill="{}"/>"#, rgb_to_hex(node.fill));
        }
        svg.push_str("</svg>");
        svg
    }
}

impl Surface for Scene {
    fn clear(&mut self) {
        self.nodes.clear();
    }

    fn fill_polygon(&mut self, vertices: &[Point], fill: Rgb) {
        self.nodes.push(Polygon {
            vertices: vertices.to_vec(),
            fill,
        });
    }

    fn size(&self) -> Size {
        self.size
    }
}

// =============================================================================
// Immediate-Mode Display Adapter
// =============================================================================

/// [`Surface`] over an embedded-graphics draw target.
///
/// Clearing fills the target with the page background. Polygons are clipped
/// to the target, fan-triangulated from their first vertex and drawn as
/// filled [`Triangle`] primitives.
pub struct DisplaySurface<D> {
    target: D,
    background: Rgb888,
    drawn_since_clear: usize,
}

impl<D> DisplaySurface<D>
where
    D: DrawTarget<Color = Rgb888>,
{
    pub fn new(target: D) -> Self {
        Self {
            target,
            background: BACKGROUND.to_rgb888(),
            drawn_since_clear: 0,
        }
    }

    /// Polygons rasterized since the last [`Surface::clear`].
    #[inline]
    pub const fn drawn_since_clear(&self) -> usize {
        self.drawn_since_clear
    }

    #[inline]
    pub const fn target(&self) -> &D {
        &self.target
    }

    /// Mutable access for drawing on top of the tessellation (overlays).
    #[inline]
    pub const fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }
}

impl<D> Surface for DisplaySurface<D>
where
    D: DrawTarget<Color = Rgb888>,
{
    fn clear(&mut self) {
        self.target.clear(self.background).ok();
        self.drawn_since_clear = 0;
    }

    fn fill_polygon(&mut self, vertices: &[Point], fill: Rgb) {
        if vertices.len() < 3 || !vertices.iter().all(Point::is_finite) {
            return;
        }
        let bounds = self.target.bounding_box();
        let min = Point::new(
            f64::from(bounds.top_left.x) - GUARD_BAND,
            f64::from(bounds.top_left.y) - GUARD_BAND,
        );
        let max = Point::new(
            min.x + f64::from(bounds.size.width) + 2.0 * GUARD_BAND,
            min.y + f64::from(bounds.size.height) + 2.0 * GUARD_BAND,
        );
        let visible = clip_polygon(vertices, min, max);
        if visible.len() < 3 {
            return;
        }

        let style = PrimitiveStyle::with_fill(fill.to_rgb888());
        let anchor = to_pixel(visible[0]);
        for pair in visible[1..].windows(2) {
            Triangle::new(anchor, to_pixel(pair[0]), to_pixel(pair[1]))
                .into_styled(style)
                .draw(&mut self.target)
                .ok();
        }
        self.drawn_since_clear += 1;
    }

    fn size(&self) -> Size {
        self.target.bounding_box().size
    }
}

/// Pixels of slack around the target when clipping.
const GUARD_BAND: f64 = 1.0;

#[inline]
fn to_pixel(p: Point) -> PixelPoint {
    PixelPoint::new(p.x.round() as i32, p.y.round() as i32)
}

// =============================================================================
// Clipping
// =============================================================================

/// One side of the clip rectangle.
#[derive(Clone, Copy, Debug)]
enum ClipEdge {
    Left(f64),
    Right(f64),
    Top(f64),
    Bottom(f64),
}

impl ClipEdge {
    #[inline]
    fn inside(self, p: Point) -> bool {
        match self {
            Self::Left(x) => p.x >= x,
            Self::Right(x) => p.x <= x,
            Self::Top(y) => p.y >= y,
            Self::Bottom(y) => p.y <= y,
        }
    }

    /// Where segment `a -> b` crosses this edge. Only called when exactly one
    /// end is inside, so the segment is never parallel to the edge.
    #[inline]
    fn intersect(self, a: Point, b: Point) -> Point {
        match self {
            Self::Left(x) | Self::Right(x) => {
                let t = (x - a.x) / (b.x - a.x);
                Point::new(x, t.mul_add(b.y - a.y, a.y))
            }
            Self::Top(y) | Self::Bottom(y) => {
                let t = (y - a.y) / (b.y - a.y);
                Point::new(t.mul_add(b.x - a.x, a.x), y)
            }
        }
    }
}

/// Clip a convex polygon to the rectangle `min..=max`
/// (Sutherland-Hodgman, one pass per edge).
///
/// Returns fewer than three vertices when nothing is left.
fn clip_polygon(vertices: &[Point], min: Point, max: Point) -> Vec<Point> {
    let mut output = vertices.to_vec();
    for edge in [
        ClipEdge::Left(min.x),
        ClipEdge::Right(max.x),
        ClipEdge::Top(min.y),
        ClipEdge::Bottom(max.y),
    ] {
        let input = core::mem::take(&mut output);
        let Some(&last) = input.last() else {
            break;
        };
        let mut prev = last;
        for &p in &input {
            match (edge.inside(prev), edge.inside(p)) {
                (true, true) => output.push(p),
                (true, false) => output.push(edge.intersect(prev, p)),
                (false, true) => {
                    output.push(edge.intersect(prev, p));
                    output.push(p);
                }
                (false, false) => {}
            }
            prev = p;
        }
    }
    output
}

// =============================================================================
// Tests
// =============================================================================
