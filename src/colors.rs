//! Color utilities: hex <-> RGB conversion and linear interpolation.
//!
//! Colors travel through the tessellation as [`Rgb`] triples. Channels are
//! stored as wide signed integers rather than `u8`: interpolation is not
//! clamped, so a factor outside `[0, 1]` extrapolates past the 8-bit range and
//! the result has to be representable until it reaches the drawing surface.
//!
//! # Conversions
//!
//! | From        | To          | Function           | Notes                              |
//! |-------------|-------------|--------------------|------------------------------------|
//! | `#RRGGBB`   | [`Rgb`]     | [`hex_to_rgb`]     | `None` on malformed input          |
//! | [`Rgb`]     | `#rrggbb`   | [`rgb_to_hex`]     | Out-of-range channels stay visible |
//! | [`Rgb`]     | `Rgb888`    | [`Rgb::to_rgb888`] | Saturates at the surface boundary  |
//!
//! `hex_to_rgb(&rgb_to_hex(c)) == Some(c)` holds for every in-range color.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb888;
use heapless::String;

// =============================================================================
// Palette
// =============================================================================

/// Dark base color of the outer gradient (`#222222`).
pub const BASE_DARK: Rgb = Rgb::new(0x22, 0x22, 0x22);

/// Blue base color of the outer gradient (`#2222FF`).
pub const BASE_BLUE: Rgb = Rgb::new(0x22, 0x22, 0xFF);

/// Page background behind the tessellation (`#141414`).
pub const BACKGROUND: Rgb = Rgb::new(0x14, 0x14, 0x14);

/// Title overlay text color.
pub const TEXT: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

/// Capacity of a formatted hex string.
///
/// `#rrggbb` needs 7 bytes; extrapolated channels can print up to 9 characters
/// each (`-80000000`), so the buffer is sized for the worst case.
pub const HEX_CAPACITY: usize = 32;

// =============================================================================
// RGB Triple
// =============================================================================

/// An RGB color with unclamped integer channels.
///
/// In-range colors have every channel in `0..=255`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    /// Build an in-range color from 8-bit channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as i32,
            g: g as i32,
            b: b as i32,
        }
    }

    /// Whether every channel fits in 8 bits.
    #[inline]
    pub const fn is_in_gamut(&self) -> bool {
        matches!(self.r, 0..=255) && matches!(self.g, 0..=255) && matches!(self.b, 0..=255)
    }

    /// Convert to the surface pixel color, saturating each channel to `0..=255`.
    #[inline]
    pub fn to_rgb888(self) -> Rgb888 {
        Rgb888::new(
            self.r.clamp(0, 255) as u8,
            self.g.clamp(0, 255) as u8,
            self.b.clamp(0, 255) as u8,
        )
    }
}

impl From<Rgb888> for Rgb {
    fn from(color: Rgb888) -> Self {
        use embedded_graphics::pixelcolor::RgbColor;
        Self::new(color.r(), color.g(), color.b())
    }
}

// =============================================================================
// Conversions
// =============================================================================

/// Parse a `#RRGGBB` string (either case) into an [`Rgb`].
///
/// Returns `None` for anything else: wrong length, missing `#`, or non-hex
/// digits.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    if hex.len() != 7 || !hex.starts_with('#') || !hex.bytes().skip(1).all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: core::ops::Range<usize>| hex.get(range).and_then(|s| u8::from_str_radix(s, 16).ok());
    Some(Rgb::new(channel(1..3)?, channel(3..5)?, channel(5..7)?))
}

/// Format an [`Rgb`] as a `#rrggbb` string.
///
/// Each channel is written as two lowercase, zero-padded hex digits. Channels
/// outside `0..=255` are not clamped: a negative channel prints as `-` plus its
/// magnitude (`-1a`) and a large one prints with extra digits (`100`). The
/// result is then no longer a valid color string and will not parse back.
pub fn rgb_to_hex(color: Rgb) -> String<HEX_CAPACITY> {
    let mut s = String::new();
    s.push('#').ok();
    for channel in [color.r, color.g, color.b] {
        if channel < 0 {
            let _ = write!(s, "-{:x}", channel.unsigned_abs());
        } else {
            let _ = write!(s, "{channel:02x}");
        }
    }
    s
}

/// Linear per-channel interpolation from `from` (t = 0) to `to` (t = 1).
///
/// `t` is not clamped. Values outside `[0, 1]` extrapolate, which may produce
/// channels outside the 8-bit range. Halves round up.
#[inline]
pub fn interpolate_color(from: Rgb, to: Rgb, t: f64) -> Rgb {
    let lerp = |a: i32, b: i32| -> i32 { (f64::from(a) * (1.0 - t) + f64::from(b) * t + 0.5).floor() as i32 };
    Rgb {
        r: lerp(from.r, to.r),
        g: lerp(from.g, to.g),
        b: lerp(from.b, to.b),
    }
}

// =============================================================================
// Tests
// =============================================================================
