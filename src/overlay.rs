//! Title overlay drawn on top of the tessellation.
//!
//! The overlay is part of the page around the animation, not of the
//! animation itself: it is drawn straight onto the display after each tick
//! and never goes through [`Surface`](crate::surface::Surface), so the
//! polygon counts stay pure tessellation.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ Synesthetic Systems          │  ProFont 24pt
//! │ Taste the future             │  ProFont 18pt
//! │                              │
//! │        (tessellation)        │
//! └──────────────────────────────┘
//! ```

use embedded_graphics::{pixelcolor::Rgb888, prelude::*, text::Text};

use crate::styles::{SUBTITLE_STYLE, TITLE_STYLE, TOP_LEFT};

/// Page heading.
pub const TITLE: &str = "Synesthetic Systems";

/// Line under the heading.
pub const SUBTITLE: &str = "Taste the future";

/// Top-left corner of the heading.
const TITLE_POS: Point = Point::new(16, 16);

/// Top-left corner of the subtitle, one heading line plus a gap below.
const SUBTITLE_POS: Point = Point::new(16, 52);

/// Draw the heading and subtitle in the top-left corner.
pub fn draw_title_overlay<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb888>,
{
    Text::with_text_style(TITLE, TITLE_POS, TITLE_STYLE, TOP_LEFT)
        .draw(display)
        .ok();
    Text::with_text_style(SUBTITLE, SUBTITLE_POS, SUBTITLE_STYLE, TOP_LEFT)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::*;
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;
    use crate::colors::{BACKGROUND, TEXT};

    #[test]
    fn test_overlay_draws_text_pixels_in_corner() {
        let mut display = SimulatorDisplay::<Rgb888>::new(Size::new(400, 120));
        display.clear(BACKGROUND.to_rgb888()).ok();
        draw_title_overlay(&mut display);

        let text = TEXT.to_rgb888();
        let lit = |x0: i32, y0: i32, x1: i32, y1: i32| {
            (y0..y1).any(|y| (x0..x1).any(|x| display.get_pixel(Point::new(x, y)) == text))
        };
        assert!(lit(16, 16, 380, 50), "heading not drawn");
        assert!(lit(16, 52, 380, 80), "subtitle not drawn");
        assert!(!lit(0, 90, 400, 120), "overlay leaked below the subtitle");
    }
}
