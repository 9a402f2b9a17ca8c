//! Procedural glyphs drawn when icon markup is missing or renders nothing.
//!
//! Both glyphs are laid out in the same 128-unit design box as the markup
//! icons and scaled to the requested size, so they line up with the text
//! exactly like a loaded icon would. They depend only on size and color.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};

use crate::bitmap::Bitmap;
use crate::config::layout::{DEFAULT_STROKE_WIDTH, MIN_STROKE_PX};
use crate::path::{self, Affine, Vec2};
use crate::widgets::primitives::{LineCap, fill_polylines, stroke_polylines};

// =============================================================================
// Glyph Geometry (design units)
// =============================================================================

/// Headstone body: straight sides with an arched top.
const HEADSTONE_ARCH: &str = "M36 108 V52 C36 16 92 16 92 52 V108 Z";

/// Cross cut into the headstone.
const HEADSTONE_CROSS: &str = "M64 38 V82 M50 54 H78";

/// Width of the cross bars in design units.
const CROSS_WIDTH: f32 = 6.0;

/// Plinth under the headstone (top-left, bottom-right).
const PLINTH: (Vec2, Vec2) = (Vec2::new(16.0, 104.0), Vec2::new(112.0, 122.0));

/// Tree crown: one closed loop of cubic curves.
const CROWN: &str = "M64 10 C98 10 114 40 102 64 C94 80 80 86 64 86 \
                     C48 86 34 80 26 64 C14 40 30 10 64 10 Z";

/// Trunk under the crown (top-left, bottom-right).
const TRUNK: (Vec2, Vec2) = (Vec2::new(56.0, 84.0), Vec2::new(72.0, 122.0));

fn placement(size: u32) -> Affine {
    let side = size as f32;
    Affine::view_box(side).then(Affine::device_to_raster(side))
}

fn scaled_rect(transform: Affine, (a, b): (Vec2, Vec2)) -> Rectangle {
    let a = transform.apply(a);
    let b = transform.apply(b);
    let top_left = Point::new(a.x.min(b.x).round() as i32, a.y.min(b.y).round() as i32);
    let width = (a.x - b.x).abs().round().max(1.0) as u32;
    let height = (a.y - b.y).abs().round().max(1.0) as u32;
    Rectangle::new(top_left, Size::new(width, height))
}

// =============================================================================
// Glyphs
// =============================================================================

/// Headstone: filled rounded plinth, filled arched body, cross knocked out of
/// the body.
pub fn render_mortality_glyph(size: u32, color: Rgb888) -> Bitmap {
    let transform = placement(size);
    let scale = transform.length_scale();
    let mut bitmap = Bitmap::new(Size::new(size, size));

    let plinth = scaled_rect(transform, PLINTH);
    let radius = (plinth.size.height / 3).max(1);
    RoundedRectangle::with_equal_corners(plinth, Size::new(radius, radius))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(&mut bitmap)
        .ok();

    let arch = path::flatten(&path::parse(HEADSTONE_ARCH), transform);
    fill_polylines(&mut bitmap, &arch, color);

    let cross = path::flatten(&path::parse(HEADSTONE_CROSS), transform);
    let width = (CROSS_WIDTH * scale).max(MIN_STROKE_PX);
    stroke_polylines(&mut bitmap.eraser(), &cross, width, LineCap::Butt, color);

    bitmap
}

/// Tree: stroked crown outline over a filled trunk.
pub fn render_vitality_glyph(size: u32, color: Rgb888) -> Bitmap {
    let transform = placement(size);
    let scale = transform.length_scale();
    let mut bitmap = Bitmap::new(Size::new(size, size));

    scaled_rect(transform, TRUNK)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(&mut bitmap)
        .ok();

    let crown = path::flatten(&path::parse(CROWN), transform);
    let width = (DEFAULT_STROKE_WIDTH * scale).max(MIN_STROKE_PX);
    stroke_polylines(&mut bitmap, &crown, width, LineCap::Round, color);

    bitmap
}

// =============================================================================
// Unit Tests
// =============================================================================
