//! Low-level drawing primitives.

use crate::colors::Rgb;
use crate::geometry::{Point, equilateral_vertices};
use crate::surface::Surface;

/// Append one filled equilateral triangle to `surface`.
///
/// Vertices sit on a circle of `radius` around `center`, at
/// `{0, 120, 240} + rotation_degrees` degrees. No stroke is drawn.
///
/// Any finite input is accepted; a zero or negative radius still emits a
/// (degenerate) polygon and leaves it to the surface to skip.
#[inline]
pub fn draw_equilateral_triangle<S>(surface: &mut S, center: Point, radius: f64, rotation_degrees: f64, fill: Rgb)
where
    S: Surface + ?Sized,
{
    surface.fill_polygon(&equilateral_vertices(center, radius, rotation_degrees), fill);
}
