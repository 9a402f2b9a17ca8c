//! Status item dimensions and pre-computed layout constants.
//!
//! # Pre-computed Layout Constants
//!
//! Everything the renderers need to size a canvas is a `const`, so a render
//! call never derives geometry from anything other than its inputs. Values that
//! depend on each other (track width, icon scale) are computed here at compile
//! time rather than inside the draw functions.

// =============================================================================
// Vector Icon Design Space
// =============================================================================

/// Side length of the square view-box icon markup is authored in.
pub const VIEWBOX_SIZE: f32 = 128.0;

/// Stroke width (design units) used when an element has a stroke but no
/// `stroke-width` attribute. Scaled with the icon like any authored width.
pub const DEFAULT_STROKE_WIDTH: f32 = 8.0;

/// Hard floor for any rasterized stroke, in device pixels.
/// Thin authored strokes vanish at 16 px without it.
pub const MIN_STROKE_PX: f32 = 2.0;

/// Maximum chord deviation (device pixels) when flattening cubic curves.
pub const CURVE_TOLERANCE_PX: f32 = 0.25;

/// Recursion cap for curve subdivision.
pub const MAX_CURVE_DEPTH: u32 = 10;

// =============================================================================
// Icon + Text Composite
// =============================================================================

/// Edge length of status bar icons in pixels.
pub const ICON_SIZE: u32 = 16;

/// Gap between the icon and its text label.
pub const ICON_TEXT_SPACING: u32 = 2;

// =============================================================================
// Progress Bar
// =============================================================================

/// Progress bar canvas width in pixels (fixed for every percentage).
pub const PROGRESS_BAR_WIDTH: u32 = 64;

/// Progress bar canvas height in pixels.
pub const PROGRESS_BAR_HEIGHT: u32 = 18;

/// Height of the track and fill rectangles.
pub const TRACK_HEIGHT: u32 = 6;

/// Width kept free at the right edge for the percentage label.
pub const LABEL_RESERVE: u32 = 24;

/// Track width: canvas minus the label region.
pub const TRACK_WIDTH: u32 = PROGRESS_BAR_WIDTH - LABEL_RESERVE;

/// Top edge of the track, vertically centered in the canvas.
pub const TRACK_Y: i32 = ((PROGRESS_BAR_HEIGHT - TRACK_HEIGHT) / 2) as i32;

/// Opacity of the de-emphasized bar segment (50%).
pub const HALF_OPACITY: u8 = 128;

/// Opacity of the emphasized bar segment (100%).
pub const FULL_OPACITY: u8 = 255;

// =============================================================================
// Text Formatting
// =============================================================================

/// Days per year for the years+days presentation. Remainder is `days % 365`.
pub const DAYS_PER_YEAR: i64 = 365;

/// Number of block characters in the text-only progress preview.
pub const PREVIEW_CELLS: usize = 10;

/// Text shown when the progress bar has no denominator to work with.
pub const ERROR_TEXT: &str = "Error";
