//! Low-level fill and stroke primitives shared by the icon renderers.
//!
//! Everything here draws flattened [`Polyline`]s (raster space, y down) into
//! any `DrawTarget<Color = Rgb888>`. Straight pieces go through the
//! `embedded_graphics` primitives; filling arbitrary outlines is a plain
//! scanline pass.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle};

use crate::path::{Polyline, Vec2};

/// Stroke end treatment.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LineCap {
    /// Stroke stops flush at the endpoint.
    #[default]
    Butt,
    /// Half-disc past each endpoint.
    Round,
}

#[inline]
fn to_point(p: Vec2) -> Point { Point::new(p.x.round() as i32, p.y.round() as i32) }

// =============================================================================
// Fill
// =============================================================================

/// Fill the area enclosed by `polys` with the non-zero winding rule.
///
/// Open polylines are closed implicitly. Rows are sampled at pixel centers.
/// Returns the number of spans drawn (0 means nothing visible).
pub fn fill_polylines<D>(
    target: &mut D,
    polys: &[Polyline],
    color: Rgb888,
) -> usize
where
    D: DrawTarget<Color = Rgb888> + OriginDimensions,
{
    let size = target.size();
    let width = size.width as f32;
    let Some((y_min, y_max)) = vertical_extent(polys) else {
        return 0;
    };

    let first_row = (y_min.floor() as i32).max(0);
    let last_row = (y_max.ceil() as i32).min(size.height as i32 - 1);
    let mut crossings: Vec<(f32, i32)> = Vec::new();
    let mut spans = 0;

    for row in first_row..=last_row {
        let sample_y = row as f32 + 0.5;
        crossings.clear();

        for poly in polys {
            let closing = match (poly.points.last(), poly.points.first()) {
                (Some(&last), Some(&first)) if last != first => Some((last, first)),
                _ => None,
            };
            for (a, b) in poly.edges().chain(closing) {
                let upward = a.y <= sample_y && b.y > sample_y;
                let downward = b.y <= sample_y && a.y > sample_y;
                if upward || downward {
                    let x = a.x + (sample_y - a.y) * (b.x - a.x) / (b.y - a.y);
                    crossings.push((x, if upward { 1 } else { -1 }));
                }
            }
        }

        crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut winding = 0;
        for pair in crossings.windows(2) {
            winding += pair[0].1;
            if winding == 0 {
                continue;
            }
            // Pixels whose centers fall inside [x0, x1), clipped to the target.
            let start = (pair[0].0 - 0.5).ceil().clamp(0.0, width) as i32;
            let end = (pair[1].0 - 0.5).ceil().clamp(0.0, width) as i32;
            if end > start {
                let span = Rectangle::new(Point::new(start, row), Size::new((end - start) as u32, 1));
                target.fill_solid(&span, color).ok();
                spans += 1;
            }
        }
    }

    spans
}

fn vertical_extent(polys: &[Polyline]) -> Option<(f32, f32)> {
    polys
        .iter()
        .flat_map(|p| p.points.iter())
        .map(|p| p.y)
        .fold(None, |acc, y| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
        })
}

// =============================================================================
// Stroke
// =============================================================================

/// Stroke `polys` with a line `width` pixels wide.
///
/// Interior vertices get a disc so thick segments join without notches; the
/// ends get one only for [`LineCap::Round`]. Returns the number of segments
/// drawn.
pub fn stroke_polylines<D>(
    target: &mut D,
    polys: &[Polyline],
    width: f32,
    cap: LineCap,
    color: Rgb888,
) -> usize
where
    D: DrawTarget<Color = Rgb888>,
{
    let area = target.bounding_box();
    let longest_side = area.size.width.max(area.size.height).max(1);
    let stroke_width = (width.round() as u32).clamp(1, longest_side * 2);
    // Anything further out than one stroke width cannot reach the target.
    let pad = stroke_width as f32 + 1.0;
    let clip_min = Vec2::new(area.top_left.x as f32 - pad, area.top_left.y as f32 - pad);
    let clip_max = Vec2::new(
        (area.top_left.x + area.size.width as i32) as f32 + pad,
        (area.top_left.y + area.size.height as i32) as f32 + pad,
    );
    let line_style = PrimitiveStyleBuilder::new()
        .stroke_color(color)
        .stroke_width(stroke_width)
        .build();
    let dot_style = PrimitiveStyle::with_fill(color);
    let mut drawn = 0;

    for poly in polys {
        for (a, b) in poly.edges() {
            let Some((a, b)) = clip_segment(a, b, clip_min, clip_max) else { continue };
            Line::new(to_point(a), to_point(b))
                .into_styled(line_style)
                .draw(target)
                .ok();
            drawn += 1;
        }

        let n = poly.points.len();
        for (i, &p) in poly.points.iter().enumerate() {
            let is_end = !poly.closed && (i == 0 || i == n - 1);
            if is_end && cap == LineCap::Butt {
                continue;
            }
            if stroke_width > 1 && contains(clip_min, clip_max, p) {
                Circle::with_center(to_point(p), stroke_width)
                    .into_styled(dot_style)
                    .draw(target)
                    .ok();
            }
        }
    }

    drawn
}

fn contains(min: Vec2, max: Vec2, p: Vec2) -> bool { p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y }

/// Liang-Barsky clip of segment `a`-`b` to the box `min`..`max`.
///
/// `None` when the segment misses the box or has a non-finite end.
fn clip_segment(a: Vec2, b: Vec2, min: Vec2, max: Vec2) -> Option<(Vec2, Vec2)> {
    if !(a.x.is_finite() && a.y.is_finite() && b.x.is_finite() && b.y.is_finite()) {
        return None;
    }

    let (ax, ay) = (f64::from(a.x), f64::from(a.y));
    let (dx, dy) = (f64::from(b.x) - ax, f64::from(b.y) - ay);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);

    for (p, q) in [
        (-dx, ax - f64::from(min.x)),
        (dx, f64::from(max.x) - ax),
        (-dy, ay - f64::from(min.y)),
        (dy, f64::from(max.y) - ay),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
    }

    let at = |t: f64| Vec2::new((ax + t * dx) as f32, (ay + t * dy) as f32);
    Some((at(t0), at(t1)))
}

// =============================================================================
// Unit Tests
// =============================================================================
