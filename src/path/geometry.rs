//! Coordinate transforms and curve flattening.
//!
//! Icon markup is authored in a 128×128 view-box with the origin at the top
//! left and y growing downward. The status surface thinks in device space with
//! the origin at the bottom left and y growing upward. [`Affine::view_box`]
//! maps the first onto the second (uniform scale, then a flip about the
//! view-box's horizontal midline), and [`Affine::device_to_raster`] maps device
//! space onto the top-down rows of a [`Bitmap`](crate::bitmap::Bitmap).

use super::{ParsedPath, Segment, Vec2};
use crate::config::VIEWBOX_SIZE;
use crate::config::layout::{CURVE_TOLERANCE_PX, MAX_CURVE_DEPTH};

// =============================================================================
// Affine Transform (axis-aligned)
// =============================================================================

/// `x' = sx * x + tx`, `y' = sy * y + ty`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Affine {
    pub sx: f32,
    pub sy: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Affine {
    pub const IDENTITY: Self = Self { sx: 1.0, sy: 1.0, tx: 0.0, ty: 0.0 };

    /// View-box design units to bottom-left device pixels for a square
    /// target of `target_size` pixels.
    pub fn view_box(target_size: f32) -> Self {
        let scale = target_size / VIEWBOX_SIZE;
        Self { sx: scale, sy: -scale, tx: 0.0, ty: VIEWBOX_SIZE * scale }
    }

    /// Bottom-left device pixels to top-down raster rows of a canvas `height` tall.
    pub const fn device_to_raster(height: f32) -> Self { Self { sx: 1.0, sy: -1.0, tx: 0.0, ty: height } }

    /// Apply `self`, then `next`.
    pub fn then(self, next: Self) -> Self {
        Self {
            sx: self.sx * next.sx,
            sy: self.sy * next.sy,
            tx: self.tx * next.sx + next.tx,
            ty: self.ty * next.sy + next.ty,
        }
    }

    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 { Vec2::new(self.sx * p.x + self.tx, self.sy * p.y + self.ty) }

    /// Uniform length scale (for stroke widths).
    #[inline]
    pub fn length_scale(self) -> f32 { self.sx.abs() }
}

// =============================================================================
// Polylines
// =============================================================================

/// A flattened subpath.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Polyline {
    pub points: Vec<Vec2>,
    /// Ended with a close command (last point equals the first).
    pub closed: bool,
}

impl Polyline {
    /// Consecutive point pairs.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ { self.points.windows(2).map(|w| (w[0], w[1])) }
}

/// Transform `path` and flatten curves into polylines.
///
/// Curves are subdivided after transforming, so the tolerance is in output
/// pixels regardless of the scale. Subpaths with fewer than two points are
/// dropped.
pub fn flatten(path: &ParsedPath, transform: Affine) -> Vec<Polyline> {
    let mut out = Vec::new();
    let mut current = Polyline::default();
    let mut cursor = Vec2::ZERO;
    let mut start = Vec2::ZERO;

    for segment in path.segments() {
        match *segment {
            Segment::MoveTo(to) => {
                finish(&mut out, &mut current);
                cursor = transform.apply(to);
                start = cursor;
                current.points.push(cursor);
            }
            Segment::LineTo(to) => {
                cursor = transform.apply(to);
                current.points.push(cursor);
            }
            Segment::CubicTo { ctrl1, ctrl2, to } => {
                let p3 = transform.apply(to);
                flatten_cubic(
                    [cursor, transform.apply(ctrl1), transform.apply(ctrl2), p3],
                    &mut current.points,
                    0,
                );
                cursor = p3;
            }
            Segment::Close => {
                if cursor != start {
                    current.points.push(start);
                }
                current.closed = true;
                finish(&mut out, &mut current);
                // Drawing may continue from the subpath start without a new move.
                cursor = start;
                current.points.push(start);
            }
        }
    }

    finish(&mut out, &mut current);
    out
}

fn finish(out: &mut Vec<Polyline>, current: &mut Polyline) {
    let done = core::mem::take(current);
    if done.points.len() > 1 {
        out.push(done);
    }
}

fn flatten_cubic(p: [Vec2; 4], out: &mut Vec<Vec2>, depth: u32) {
    if depth >= MAX_CURVE_DEPTH || is_flat(p) {
        out.push(p[3]);
        return;
    }
    // de Casteljau split at t = 0.5
    let m01 = p[0].midpoint(p[1]);
    let m12 = p[1].midpoint(p[2]);
    let m23 = p[2].midpoint(p[3]);
    let m012 = m01.midpoint(m12);
    let m123 = m12.midpoint(m23);
    let mid = m012.midpoint(m123);
    flatten_cubic([p[0], m01, m012, mid], out, depth + 1);
    flatten_cubic([mid, m123, m23, p[3]], out, depth + 1);
}

/// Both control points within tolerance of the chord.
fn is_flat(p: [Vec2; 4]) -> bool {
    let dx = p[3].x - p[0].x;
    let dy = p[3].y - p[0].y;
    let chord = dx.hypot(dy);
    if chord < f32::EPSILON {
        return p[0].distance(p[1]) <= CURVE_TOLERANCE_PX && p[0].distance(p[2]) <= CURVE_TOLERANCE_PX;
    }
    let offset = |c: Vec2| ((c.x - p[0].x) * dy - (c.y - p[0].y) * dx).abs() / chord;
    offset(p[1]) <= CURVE_TOLERANCE_PX && offset(p[2]) <= CURVE_TOLERANCE_PX
}
