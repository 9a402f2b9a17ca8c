//! Colors, alpha pixels and compositing for the status item.
//!
//! # Theme Tint
//!
//! Status bar content is drawn in a single tint supplied by the host on every
//! render (it flips with light/dark appearance). Icon markup marks the elements
//! that follow the tint with [`THEME_TOKEN`]; any other authored color is drawn
//! as-is.
//!
//! # Alpha
//!
//! `embedded_graphics` colors carry no alpha, so canvases store [`Rgba`] and
//! opacity is applied while compositing. [`blend_over`] is the usual
//! source-over operator on straight (non-premultiplied) alpha, done in 8-bit
//! fixed point.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black. Default tint for light appearance.
pub const BLACK: Rgb888 = Rgb888::BLACK;

/// Pure white. Default tint for dark appearance.
pub const WHITE: Rgb888 = Rgb888::WHITE;

/// Pure red.
pub const RED: Rgb888 = Rgb888::RED;

/// Pure green.
pub const GREEN: Rgb888 = Rgb888::GREEN;

/// Pure blue.
pub const BLUE: Rgb888 = Rgb888::BLUE;

/// Mid gray.
pub const GRAY: Rgb888 = Rgb888::new(128, 128, 128);

// =============================================================================
// Theme Placeholder
// =============================================================================

/// Color value that marks a markup element as following the theme tint.
/// Matched case-insensitively after trimming.
pub const THEME_TOKEN: &str = "currentColor";

// =============================================================================
// Alpha Pixel
// =============================================================================

/// A straight-alpha pixel.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgba {
    pub color: Rgb888,
    pub alpha: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self { color: Rgb888::BLACK, alpha: 0 };

    pub const fn new(color: Rgb888, alpha: u8) -> Self { Self { color, alpha } }

    /// Opaque pixel of `color`.
    pub const fn opaque(color: Rgb888) -> Self { Self { color, alpha: 255 } }

    #[inline]
    pub const fn is_transparent(self) -> bool { self.alpha == 0 }
}

impl Default for Rgba {
    fn default() -> Self { Self::TRANSPARENT }
}

/// Composite `src` at `alpha` over `dst` (source-over).
pub fn blend_over(dst: Rgba, src: Rgb888, alpha: u8) -> Rgba {
    if alpha == 0 {
        return dst;
    }
    if alpha == 255 || dst.alpha == 0 {
        return Rgba::new(src, alpha);
    }

    let src_a = u32::from(alpha);
    // Destination coverage left visible through the source.
    let dst_a = u32::from(dst.alpha) * (255 - src_a) / 255;
    let out_a = src_a + dst_a;

    let mix = |s: u8, d: u8| -> u8 {
        ((u32::from(s) * src_a + u32::from(d) * dst_a + out_a / 2) / out_a) as u8
    };

    Rgba::new(
        Rgb888::new(
            mix(src.r(), dst.color.r()),
            mix(src.g(), dst.color.g()),
            mix(src.b(), dst.color.b()),
        ),
        out_a as u8,
    )
}

// =============================================================================
// Markup Color Values
// =============================================================================

/// Parse an authored color value: `#rgb`, `#rrggbb` or a basic color name.
///
/// Returns `None` for anything else, including [`THEME_TOKEN`] and `none`;
/// callers check those first.
pub fn parse_color(value: &str) -> Option<Rgb888> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }

    let named = match value.to_ascii_lowercase().as_str() {
        "black" => BLACK,
        "white" => WHITE,
        "red" => RED,
        "green" => Rgb888::new(0, 128, 0),
        "lime" => GREEN,
        "blue" => BLUE,
        "gray" | "grey" => GRAY,
        "yellow" => Rgb888::YELLOW,
        "orange" => Rgb888::new(255, 165, 0),
        _ => return None,
    };
    Some(named)
}

fn parse_hex(hex: &str) -> Option<Rgb888> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);
            Some(Rgb888::new(digit(0)?, digit(1)?, digit(2)?))
        }
        6 => {
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Rgb888::new(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

/// Whether `value` is the theme placeholder token.
#[inline]
pub fn is_theme_token(value: &str) -> bool { value.trim().eq_ignore_ascii_case(THEME_TOKEN) }

// =============================================================================
// Unit Tests
// =============================================================================
