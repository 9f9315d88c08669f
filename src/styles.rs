//! Pre-computed static text styles for the title overlay.
//!
//! `MonoTextStyle` and `TextStyle` constructors are `const fn` in
//! embedded-graphics 0.8, so the styles are built at compile time and
//! referenced directly from the render loop without per-frame construction.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb888,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::TEXT;

/// Overlay text color as a pixel value.
const TEXT_COLOR: Rgb888 = Rgb888::new(TEXT.r as u8, TEXT.g as u8, TEXT.b as u8);

/// Left-aligned text anchored at its top edge.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Large monospace heading (`ProFont` 24pt).
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&PROFONT_24_POINT, TEXT_COLOR);

/// Medium monospace subheading (`ProFont` 18pt).
pub const SUBTITLE_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&PROFONT_18_POINT, TEXT_COLOR);
