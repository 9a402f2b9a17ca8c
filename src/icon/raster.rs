//! Rasterizing icon markup into a square bitmap.
//!
//! Markup is authored in a 128×128 view-box. Every `<path>` outside a
//! `<mask>` is parsed, placed with [`Affine::view_box`], flattened and then
//! filled and/or stroked according to its [`IconStyle`]. Fill goes first so a
//! stroke sits on top of its own fill.

use embedded_graphics::prelude::*;
use embedded_graphics::pixelcolor::Rgb888;
use log::{debug, trace};

use super::markup::Document;
use super::style::IconStyle;
use crate::bitmap::Bitmap;
use crate::error::{RenderFault, Result};
use crate::path::{self, Affine};
use crate::widgets::primitives::{fill_polylines, stroke_polylines};

/// Rasterize `markup` to a `target_size`×`target_size` bitmap.
///
/// Returns `None` when no element produced any pixels; callers then fall back
/// to the procedural glyphs.
pub fn rasterize(markup: &str, target_size: u32, theme: Rgb888) -> Option<Bitmap> {
    try_rasterize(markup, target_size, theme).ok()
}

/// Like [`rasterize`] but reports why nothing was drawn.
pub fn try_rasterize(markup: &str, target_size: u32, theme: Rgb888) -> Result<Bitmap> {
    let document = Document::parse(markup);
    let side = target_size as f32;
    let transform = Affine::view_box(side).then(Affine::device_to_raster(side));
    let scale = transform.length_scale();

    let mut bitmap = Bitmap::new(Size::new(target_size, target_size));
    let mut rendered = 0;

    for element in document.drawable_paths() {
        let style = IconStyle::resolve(element, theme, scale);
        if style.is_invisible() {
            trace!("path has neither fill nor stroke");
            continue;
        }

        let Some(data) = element.attr("d") else { continue };
        let parsed = path::parse(data);
        if !parsed.has_geometry() {
            trace!("path {data:?} has no geometry");
            continue;
        }

        let polylines = path::flatten(&parsed, transform);
        if let Some(color) = style.fill {
            rendered += fill_polylines(&mut bitmap, &polylines, color);
        }
        if let Some(color) = style.stroke {
            rendered += stroke_polylines(&mut bitmap, &polylines, style.stroke_width, style.line_cap, color);
        }
    }

    if rendered == 0 || bitmap.painted_pixels() == 0 {
        debug!("icon markup produced no geometry at {target_size}px");
        return Err(RenderFault::NoGeometryRendered);
    }
    Ok(bitmap)
}

// =============================================================================
// Unit Tests
// =============================================================================
