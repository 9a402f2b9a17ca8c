//! Per-element paint resolution for icon markup.

use embedded_graphics::pixelcolor::Rgb888;
use log::trace;

use super::markup::Element;
use crate::colors::{is_theme_token, parse_color};
use crate::config::layout::{DEFAULT_STROKE_WIDTH, MIN_STROKE_PX};
pub use crate::widgets::primitives::LineCap;

/// How one path element is painted, in device pixels.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct IconStyle {
    /// Fill color, `None` when the element has no fill.
    pub fill: Option<Rgb888>,
    /// Stroke color, `None` when the element has no stroke.
    pub stroke: Option<Rgb888>,
    /// Never below [`MIN_STROKE_PX`].
    pub stroke_width: f32,
    pub line_cap: LineCap,
}

impl IconStyle {
    /// Resolve paint for `element`, drawn at `scale` device pixels per design unit.
    ///
    /// A missing `fill`/`stroke` attribute, or the value `none`, turns that
    /// operation off. The theme token is replaced by `theme`; any other color
    /// is kept as authored.
    pub fn resolve(element: &Element, theme: Rgb888, scale: f32) -> Self {
        let design_width = element
            .attr("stroke-width")
            .and_then(parse_length)
            .unwrap_or(DEFAULT_STROKE_WIDTH);

        let line_cap = match element.attr("stroke-linecap").map(str::trim) {
            Some(cap) if cap.eq_ignore_ascii_case("round") => LineCap::Round,
            _ => LineCap::Butt,
        };

        Self {
            fill: resolve_paint(element.attr("fill"), theme),
            stroke: resolve_paint(element.attr("stroke"), theme),
            stroke_width: (design_width * scale).max(MIN_STROKE_PX),
            line_cap,
        }
    }

    #[inline]
    pub fn draws_fill(&self) -> bool { self.fill.is_some() }

    #[inline]
    pub fn draws_stroke(&self) -> bool { self.stroke.is_some() }

    /// Neither fill nor stroke is enabled.
    #[inline]
    pub fn is_invisible(&self) -> bool { !self.draws_fill() && !self.draws_stroke() }
}

fn resolve_paint(value: Option<&str>, theme: Rgb888) -> Option<Rgb888> {
    let value = value?.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        return None;
    }
    if is_theme_token(value) {
        return Some(theme);
    }
    parse_color(value).or_else(|| {
        trace!("unrecognised paint {value:?}, using theme color");
        Some(theme)
    })
}

/// `12`, `12.5`, `12px`. Negative or non-finite lengths are rejected.
fn parse_length(value: &str) -> Option<f32> {
    let value = value.trim();
    let value = value.strip_suffix("px").unwrap_or(value).trim_end();
    value.parse::<f32>().ok().filter(|w| w.is_finite() && *w >= 0.0)
}

// =============================================================================
// Unit Tests
// =============================================================================
