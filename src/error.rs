//! Render fault taxonomy.
//!
//! None of these escape the public entry points. Each fault is recovered where
//! it is detected (partial geometry, procedural icon, degraded text) and is
//! kept as a value so the recovery can be logged and tested.

use thiserror::Error;

/// Result type alias for internal render steps.
pub type Result<T> = core::result::Result<T, RenderFault>;

/// Recoverable failures inside the rendering core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderFault {
    /// A path data token could not be read as a number. Parsing of that path
    /// stops at `offset`; segments before it are kept.
    #[error("malformed path data at byte {offset}: {token:?}")]
    MalformedPathSegment { offset: usize, token: String },

    /// Icon markup rasterized to nothing visible.
    #[error("icon markup produced no visible geometry")]
    NoGeometryRendered,

    /// The resource loader had no markup for the requested icon.
    #[error("no icon markup named {0:?}")]
    MissingAsset(String),

    /// The calculator could not supply a usable total-day count.
    #[error("total day count unavailable")]
    DenominatorUnavailable,
}
