//! Drawing components for status item content.
//!
//! - [`composite`]: icon and text side by side
//! - [`progress_bar`]: fixed-size bar with percentage label
//! - [`primitives`]: scanline fill and polyline stroke shared with the icon
//!   renderers
//!
//! Every widget draws into a fresh [`Bitmap`](crate::bitmap::Bitmap) sized for
//! its content and returns it. Nothing is cached between calls.

pub mod composite;
pub mod primitives;
pub mod progress_bar;

pub use composite::{compose_icon_and_text, measure_text};
pub use primitives::{LineCap, fill_polylines, stroke_polylines};
pub use progress_bar::{ColorScheme, ProgressBarSpec, clamp_percentage, fill_width, render_progress_bar};
