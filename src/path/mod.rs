//! Vector path data: parsing, resolved geometry and flattening.
//!
//! - `parser`: the path-data mini-language (`M L H V C Z`, upper = absolute,
//!   lower = relative) into [`PathCommand`]s and a resolved [`ParsedPath`]
//! - `geometry`: view-box transforms and curve flattening into polylines

pub mod geometry;
pub mod parser;

pub use geometry::{Affine, Polyline, flatten};
pub use parser::{CommandKind, ParsedPath, PathCommand, Segment, parse, parse_commands};

/// A point or offset in floating-point coordinates.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }

    #[inline]
    pub fn midpoint(self, other: Self) -> Self { Self::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5) }

    #[inline]
    pub fn distance(self, other: Self) -> f32 { (other.x - self.x).hypot(other.y - self.y) }
}

impl core::ops::Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self { Self::new(self.x + rhs.x, self.y + rhs.y) }
}
