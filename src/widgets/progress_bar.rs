//! Fixed-size progress bar with a percentage label.
//!
//! # Layout
//!
//! ```text
//! |<------------ PROGRESS_BAR_WIDTH ------------>|
//! |<------- TRACK_WIDTH ------->|<- LABEL_RESERVE ->|
//! [=========|..................]            70%
//! ```
//!
//! The canvas never changes size, so the status item does not jitter as the
//! numbers move. Track and fill share the same rectangle row, centered
//! vertically.
//!
//! # Opacity Schemes
//!
//! | Scheme | Filled segment | Remainder |
//! |--------|----------------|-----------|
//! | [`ColorScheme::Standard`] | full (drawn over a half-opacity full-width track) | half |
//! | [`ColorScheme::Swapped`]  | half | full |

use core::fmt::Write;

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::bitmap::Bitmap;
use crate::config::{
    FULL_OPACITY,
    HALF_OPACITY,
    PROGRESS_BAR_HEIGHT,
    PROGRESS_BAR_WIDTH,
    TRACK_HEIGHT,
    TRACK_WIDTH,
    TRACK_Y,
};
use crate::styles::RIGHT_MIDDLE;

/// Which side of the bar is emphasized.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ColorScheme {
    /// Filled segment emphasized.
    #[default]
    Standard,
    /// Remainder emphasized (countdown: the days still left stand out).
    Swapped,
}

/// Inputs for one progress bar.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ProgressBarSpec {
    /// Length of the filled segment, 0..=100.
    pub fill_percentage: f32,
    /// Number shown in the label, 0..=100. Independent of the fill.
    pub text_percentage: f32,
    pub color: Rgb888,
    pub color_scheme: ColorScheme,
}

/// Clamp to 0..=100; non-finite input counts as 0.
#[inline]
pub fn clamp_percentage(value: f32) -> f32 { if value.is_finite() { value.clamp(0.0, 100.0) } else { 0.0 } }

/// Pixel width of the filled segment for `fill_percentage`.
pub fn fill_width(fill_percentage: f32) -> u32 {
    let width = (TRACK_WIDTH as f32 * clamp_percentage(fill_percentage) / 100.0).round() as u32;
    width.min(TRACK_WIDTH)
}

/// Draw the bar on a fresh `PROGRESS_BAR_WIDTH`×`PROGRESS_BAR_HEIGHT` canvas.
///
/// `label_font` is used for the percentage text; pass the condensed status
/// font when the host has one.
pub fn render_progress_bar(spec: &ProgressBarSpec, label_font: &MonoFont<'_>) -> Bitmap {
    let mut canvas = Bitmap::new(Size::new(PROGRESS_BAR_WIDTH, PROGRESS_BAR_HEIGHT));
    let fill = PrimitiveStyle::with_fill(spec.color);
    let filled = fill_width(spec.fill_percentage);

    let filled_rect = Rectangle::new(Point::new(0, TRACK_Y), Size::new(filled, TRACK_HEIGHT));
    let remainder_rect = Rectangle::new(
        Point::new(filled as i32, TRACK_Y),
        Size::new(TRACK_WIDTH - filled, TRACK_HEIGHT),
    );

    match spec.color_scheme {
        ColorScheme::Standard => {
            Rectangle::new(Point::new(0, TRACK_Y), Size::new(TRACK_WIDTH, TRACK_HEIGHT))
                .into_styled(fill)
                .draw(&mut canvas.layer(HALF_OPACITY))
                .ok();
            filled_rect.into_styled(fill).draw(&mut canvas.layer(FULL_OPACITY)).ok();
        }
        ColorScheme::Swapped => {
            filled_rect.into_styled(fill).draw(&mut canvas.layer(HALF_OPACITY)).ok();
            remainder_rect.into_styled(fill).draw(&mut canvas.layer(FULL_OPACITY)).ok();
        }
    }

    let mut label: String<8> = String::new();
    let _ = write!(label, "{}%", clamp_percentage(spec.text_percentage).round() as u32);
    let label_pos = Point::new(PROGRESS_BAR_WIDTH as i32 - 1, PROGRESS_BAR_HEIGHT as i32 / 2);
    Text::with_text_style(&label, label_pos, MonoTextStyle::new(label_font, spec.color), RIGHT_MIDDLE)
        .draw(&mut canvas)
        .ok();

    canvas
}

// =============================================================================
// Unit Tests
// =============================================================================
