//! Recursive triangular tessellation.
//!
//! A large equilateral triangle is cut into a grid of `sides²` smaller ones.
//! Row `r` (counting from the apex, starting at 0) holds `r + 1` upright cells
//! and `r` inverted cells wedged between them:
//!
//! ```text
//!            /\
//!           /  \            row 0: 1 upright
//!          /____\
//!         /\    /\
//!        /  \  /  \         row 1: 2 upright, 1 inverted
//!       /____\/____\
//! ```
//!
//! Each cell takes its color from a gradient across the outer triangle. A
//! cell either becomes a flat-filled leaf or, while recursion levels remain,
//! a whole new tessellation of its own with a derived parameter bundle.
//!
//! # Gradient
//!
//! The cell's gradient factor `t` is its barycentric coordinate toward the
//! bottom-right corner of the (rotated) outer triangle. Leaves are filled with
//! `lerp(color1, color2, t)`. A recursing cell hands its children the pair
//! `(lerp(t), lerp(1 - t))`, so every nested triangle runs its own gradient.
//!
//! # Rotation
//!
//! Cell centers are laid out unrotated and then rotated about the outer
//! center by `rotation`. The cells themselves spin at
//! `rotation * inner_rotation_multiplier * 2`; inverted cells add 180 degrees.
//! Rotation is never normalized, it grows for as long as the animation runs.
//!
//! # Inverted Cells Recurse Twice
//!
//! A recursing inverted cell emits two nested tessellations at the same
//! position: one with the gradient pair and one with the flat
//! `(color, color)` pair. The second paints over the first, so inverted cells
//! end up flat at double the cost. This is kept as-is; see
//! [`primitive_count`] for what it does to the polygon budget.

use log::trace;

use crate::colors::{Rgb, interpolate_color};
use crate::geometry::{Point, gradient_factor, rotate_point};
use crate::primitives::draw_equilateral_triangle;
use crate::surface::Surface;

/// Parameter bundle for one tessellation pass.
///
/// Read-only while rendering. Each recursion level derives a fresh bundle
/// through [`Tessellation::nested`]; nothing is shared between branches.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Tessellation {
    /// Circumcenter of the outer triangle.
    pub center: Point,
    /// Circumradius of the outer triangle. Must be positive.
    pub radius: f64,
    /// Cells per edge.
    pub sides: u32,
    /// Gradient start (at the top and bottom-left corners).
    pub color1: Rgb,
    /// Gradient end (at the bottom-right corner).
    pub color2: Rgb,
    /// Rotation of the outer triangle, degrees.
    pub rotation: f64,
    pub inner_rotation_multiplier: f64,
    /// Remaining levels of nested tessellation before cells become leaves.
    pub recurse_levels: u32,
}

/// Cell sizes derived from the outer radius and the subdivision count.
#[derive(Clone, Copy, Debug)]
struct Grid {
    /// Edge length of the outer triangle.
    side: f64,
    /// Edge length of one cell.
    cell_side: f64,
    /// Height of one cell (one row).
    cell_height: f64,
    /// Circumradius of one cell.
    cell_radius: f64,
}

impl Grid {
    fn new(radius: f64, sides: u32) -> Self {
        let sqrt3 = 3f64.sqrt();
        let side = radius * sqrt3;
        let cell_side = side / f64::from(sides);
        Self {
            side,
            cell_side,
            cell_height: cell_side * sqrt3 / 2.0,
            cell_radius: cell_side / sqrt3,
        }
    }
}

impl Tessellation {
    /// Draw the whole tessellation onto `surface`.
    ///
    /// `sides == 0` draws nothing.
    pub fn render<S>(&self, surface: &mut S)
    where
        S: Surface + ?Sized,
    {
        if self.sides == 0 {
            return;
        }
        trace!(
            "tessellate sides={} radius={:.2} rotation={:.2} levels={}",
            self.sides, self.radius, self.rotation, self.recurse_levels
        );

        let grid = Grid::new(self.radius, self.sides);
        let (top, bottom_left, bottom_right) = self.outer_corners(&grid);
        let cell_rotation = self.rotation * self.inner_rotation_multiplier * 2.0;
        let sides = f64::from(self.sides);

        for row in 0..self.sides {
            let r = f64::from(row);
            // Shift that centers this row's cells under the apex
            let row_offset = (sides - r - 1.0) * grid.cell_side / 2.0;
            let row_left = self.center.x - grid.side / 2.0 + row_offset;
            let row_top = self.center.y - self.radius + grid.cell_height * r;

            // Upright cells
            let y = row_top + grid.cell_radius;
            for col in 0..=row {
                let x = row_left + f64::from(col) * grid.cell_side + grid.cell_side / 2.0;
                let cell = rotate_point(Point::new(x, y), self.center, self.rotation);
                let t = gradient_factor(cell, top, bottom_left, bottom_right);
                let color = interpolate_color(self.color1, self.color2, t);

                if self.recurse_levels > 0 {
                    let inner = interpolate_color(self.color1, self.color2, 1.0 - t);
                    self.nested(cell, grid.cell_radius, (color, inner), cell_rotation)
                        .render(surface);
                } else {
                    draw_equilateral_triangle(surface, cell, grid.cell_radius, cell_rotation, color);
                }
            }

            // Inverted cells, between the upright ones
            let y = row_top + grid.cell_height - grid.cell_radius;
            let inverted_rotation = cell_rotation + 180.0;
            for col in 0..row {
                let x = row_left + f64::from(col) * grid.cell_side + grid.cell_side;
                let cell = rotate_point(Point::new(x, y), self.center, self.rotation);
                let t = gradient_factor(cell, top, bottom_left, bottom_right);
                let color = interpolate_color(self.color1, self.color2, t);

                if self.recurse_levels > 0 {
                    let inner = interpolate_color(self.color1, self.color2, 1.0 - t);
                    self.nested(cell, grid.cell_radius, (color, inner), inverted_rotation)
                        .render(surface);
                    self.nested(cell, grid.cell_radius, (color, color), inverted_rotation)
                        .render(surface);
                } else {
                    draw_equilateral_triangle(surface, cell, grid.cell_radius, inverted_rotation, color);
                }
            }
        }
    }

    /// Bundle for a nested tessellation filling one cell of this one.
    ///
    /// Keeps `sides` and the multiplier, takes one recursion level.
    pub fn nested(&self, center: Point, radius: f64, colors: (Rgb, Rgb), rotation: f64) -> Self {
        Self {
            center,
            radius,
            color1: colors.0,
            color2: colors.1,
            rotation,
            recurse_levels: self.recurse_levels.saturating_sub(1),
            ..*self
        }
    }

    /// Top, bottom-left and bottom-right corners after rotation.
    fn outer_corners(&self, grid: &Grid) -> (Point, Point, Point) {
        let c = self.center;
        let top = Point::new(c.x, c.y - self.radius);
        let bottom_left = Point::new(c.x - grid.side / 2.0, c.y + self.radius / 2.0);
        let bottom_right = Point::new(c.x + grid.side / 2.0, c.y + self.radius / 2.0);
        (
            rotate_point(top, c, self.rotation),
            rotate_point(bottom_left, c, self.rotation),
            rotate_point(bottom_right, c, self.rotation),
        )
    }
}

/// Number of leaf polygons one [`Tessellation::render`] emits.
///
/// Without recursion a grid has `n²` cells: `n(n+1)/2` upright and
/// `n(n-1)/2` inverted. With recursion each upright cell expands into one
/// nested tessellation and each inverted cell into two.
pub fn primitive_count(sides: u32, recurse_levels: u32) -> u64 {
    let n = u64::from(sides);
    let upright = n * (n + 1) / 2;
    let inverted = n * n.saturating_sub(1) / 2;
    let mut count = n * n;
    for _ in 0..recurse_levels {
        count = count.saturating_mul(upright + 2 * inverted);
    }
    count
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::Size;

    use super::*;
    use crate::colors::{BASE_BLUE, BASE_DARK, hex_to_rgb};
    use crate::surface::Scene;

    fn bundle(sides: u32, recurse_levels: u32) -> Tessellation {
        Tessellation {
            center: Point::new(400.0, 300.0),
            radius: 270.0,
            sides,
            color1: BASE_DARK,
            color2: BASE_BLUE,
            rotation: 0.0,
            inner_rotation_multiplier: -2.0,
            recurse_levels,
        }
    }

    fn render(t: &Tessellation) -> Scene {
        let mut scene = Scene::new(Size::new(800, 600));
        t.render(&mut scene);
        scene
    }

    /// Circumcenter of an emitted triangle (its centroid, being equilateral).
    fn centroid(scene: &Scene, i: usize) -> Point {
        let v = &scene.polygons()[i].vertices;
        Point::new((v[0].x + v[1].x + v[2].x) / 3.0, (v[0].y + v[1].y + v[2].y) / 3.0)
    }

    #[test]
    fn test_leaf_count_is_sides_squared() {
        for n in 1..=12 {
            let scene = render(&bundle(n, 0));
            assert_eq!(scene.len(), (n * n) as usize, "sides = {n}");
            assert_eq!(primitive_count(n, 0), u64::from(n * n));
        }
    }

    #[test]
    fn test_zero_sides_draws_nothing() {
        assert!(render(&bundle(0, 0)).is_empty());
        assert!(render(&bundle(0, 2)).is_empty());
        assert_eq!(primitive_count(0, 3), 0);
    }

    #[test]
    fn test_two_sides_three_upright_one_inverted() {
        let scene = render(&bundle(2, 0));
        assert_eq!(scene.len(), 4);

        // Emission order per row: upright cells, then inverted cells.
        // Row 1 inverted cell is last and sits on the vertical axis.
        let inverted = centroid(&scene, 3);
        assert!((inverted.x - 400.0).abs() < 1e-9, "inverted cell off-axis: {inverted:?}");

        // Inverted cells are turned 180 degrees relative to upright ones.
        let up = &scene.polygons()[1].vertices[0];
        let down = &scene.polygons()[3].vertices[0];
        let up_dir = (up.x - centroid(&scene, 1).x).signum();
        let down_dir = (down.x - inverted.x).signum();
        assert_eq!(up_dir, -down_dir);
    }

    #[test]
    fn test_single_cell_scenario() {
        let t = Tessellation {
            center: Point::new(0.0, 0.0),
            radius: 10.0,
            sides: 1,
            color1: hex_to_rgb("#000000").unwrap(),
            color2: hex_to_rgb("#FFFFFF").unwrap(),
            rotation: 0.0,
            inner_rotation_multiplier: -2.0,
            recurse_levels: 0,
        };
        let scene = render(&t);
        assert_eq!(scene.len(), 1);

        // The only cell is the outer triangle itself, centered on the origin.
        let c = centroid(&scene, 0);
        assert!(c.x.abs() < 1e-9 && c.y.abs() < 1e-9, "cell center {c:?}");
        let v = &scene.polygons()[0].vertices;
        assert!((v[0].x.hypot(v[0].y) - 10.0).abs() < 1e-9, "cell radius equals outer radius");

        // Gradient factor at the centroid is 1/3: 255 / 3 = 85
        assert_eq!(scene.polygons()[0].fill, hex_to_rgb("#555555").unwrap());
    }

    #[test]
    fn test_colors_follow_gradient() {
        let scene = render(&bundle(6, 0));
        for (i, poly) in scene.polygons().iter().enumerate() {
            assert_eq!(poly.fill.r, 0x22, "polygon {i}");
            assert_eq!(poly.fill.g, 0x22, "polygon {i}");
            assert!((0x22..=0xFF).contains(&poly.fill.b), "polygon {i} blue {}", poly.fill.b);
        }
        // Bottom-right cell is bluer than the apex cell
        let apex = scene.polygons()[0].fill.b;
        let last_upright = scene.polygons()[scene.len() - 6].fill.b;
        assert!(last_upright > apex, "apex {apex} vs bottom-right {last_upright}");
    }

    #[test]
    fn test_recursion_counts() {
        // Upright cells recurse once, inverted cells twice.
        for (n, levels) in [(1, 1), (2, 1), (3, 1), (2, 2), (3, 2)] {
            let scene = render(&bundle(n, levels));
            assert_eq!(scene.len() as u64, primitive_count(n, levels), "sides={n} levels={levels}");
        }
        // sides=2, one level: 3 upright * 4 + 1 inverted * 2 * 4
        assert_eq!(primitive_count(2, 1), 20);
        assert_eq!(primitive_count(10, 1), 14_500);
    }

    #[test]
    fn test_inverted_cell_second_pass_is_flat() {
        // sides=2, one level: leaves 12..16 are the gradient pass of the
        // inverted cell, 16..20 the flat pass on top.
        let scene = render(&bundle(2, 1));
        let flat = &scene.polygons()[16..20];
        assert!(flat.windows(2).all(|w| w[0].fill == w[1].fill), "flat pass should be uniform");
        for (g, f) in scene.polygons()[12..16].iter().zip(flat) {
            assert_eq!(g.vertices, f.vertices, "both passes share geometry");
        }
    }

    /// Direction of vertex `v` of polygon `i` as seen from its center, degrees.
    fn first_vertex_angle(scene: &Scene, i: usize) -> f64 {
        let c = centroid(scene, i);
        let v = scene.polygons()[i].vertices[0];
        (v.y - c.y).atan2(v.x - c.x).to_degrees()
    }

    #[test]
    fn test_cells_spin_against_outer_rotation() {
        let mut t = bundle(2, 0);
        t.rotation = 10.0;
        let scene = render(&t);

        // 10 * -2 * 2 = -40 for upright cells, plus 180 for the inverted one
        for i in 0..3 {
            let angle = first_vertex_angle(&scene, i);
            assert!((angle + 40.0).abs() < 1e-6, "upright cell {i} at {angle}");
        }
        let angle = first_vertex_angle(&scene, 3);
        assert!((angle - 140.0).abs() < 1e-6, "inverted cell at {angle}");
    }

    #[test]
    fn test_recursing_cell_hands_down_color_pair() {
        let mut t = bundle(1, 1);
        t.rotation = 10.0;
        let scene = render(&t);
        assert_eq!(scene.len(), 1);

        // The single cell sits on the outer center, where t = 1/3
        let factor = 1.0 / 3.0;
        let color = interpolate_color(BASE_DARK, BASE_BLUE, factor);
        let inner = interpolate_color(BASE_DARK, BASE_BLUE, 1.0 - factor);
        let child = Tessellation {
            color1: color,
            color2: inner,
            rotation: -40.0,
            recurse_levels: 0,
            ..t
        };
        let expected = render(&child);

        assert_eq!(scene.polygons()[0].fill, expected.polygons()[0].fill);
        // lerp(0x6c, 0xb5, 1/3); the swapped pair would give 0x9d
        assert_eq!(scene.polygons()[0].fill, Rgb { r: 0x22, g: 0x22, b: 0x84 });
        for (got, want) in scene.polygons()[0].vertices.iter().zip(&expected.polygons()[0].vertices) {
            assert!((got.x - want.x).abs() < 1e-6 && (got.y - want.y).abs() < 1e-6, "{got:?} vs {want:?}");
        }
    }

    #[test]
    fn test_nested_bundle() {
        let parent = bundle(10, 3);
        let child = parent.nested(Point::new(1.0, 2.0), 5.0, (BASE_BLUE, BASE_DARK), 42.0);
        assert_eq!(child.recurse_levels, 2);
        assert_eq!(child.sides, 10);
        assert_eq!(child.inner_rotation_multiplier, -2.0);
        assert_eq!(child.color1, BASE_BLUE);
        assert_eq!(child.color2, BASE_DARK);
        assert_eq!(child.rotation, 42.0);
        assert_eq!(parent.recurse_levels, 3, "parent untouched");
    }

    #[test]
    fn test_cells_stay_inside_outer_triangle() {
        let mut t = bundle(5, 0);
        t.rotation = 33.3;
        let scene = render(&t);
        for i in 0..scene.len() {
            let c = centroid(&scene, i);
            let d = (c.x - t.center.x).hypot(c.y - t.center.y);
            assert!(d < t.radius, "cell {i} at distance {d}");
        }
    }

    #[test]
    fn test_large_rotation_is_stable() {
        let mut t = bundle(3, 0);
        t.rotation = 1.0e7;
        let scene = render(&t);
        assert_eq!(scene.len(), 9);
        assert!(scene.polygons().iter().all(|p| p.vertices.iter().all(Point::is_finite)));
    }
}
