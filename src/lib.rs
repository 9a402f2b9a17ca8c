// Crate-level lints: pixel math converts between float and integer freely
#![allow(clippy::cast_possible_truncation)] // f32 -> i32/u32 after rounding
#![allow(clippy::cast_precision_loss)] // u32/i64 -> f32 for coordinates and percentages
#![allow(clippy::cast_possible_wrap)] // u32 -> i32 for canvas sizes
#![allow(clippy::cast_sign_loss)] // clamped non-negative f32 -> u32

//! Rendering core for a day-count status bar indicator.
//!
//! Turns a day count (days left, or days lived) into what a menu bar style
//! status item shows: plain text, a percentage, a fixed-size progress bar, or
//! an icon next to the text. Icons come from small vector markup files and
//! fall back to procedural glyphs when a file is missing or draws nothing.
//!
//! # Modules
//!
//! | Module | Role |
//! |--------|------|
//! | [`path`] | Path data parsing, view-box transforms, curve flattening |
//! | [`icon`] | Markup tree, style resolution, rasterizer, procedural glyphs |
//! | [`widgets`] | Icon + text composite, progress bar, fill/stroke primitives |
//! | [`display`] | Request model, text formats, content selection, preview text |
//! | [`status_item`] | Host-facing renderer wired to its collaborators |
//! | [`bitmap`] | RGBA canvas implementing `DrawTarget` |
//! | [`colors`] / [`styles`] | Tint handling, alpha blending, fonts |
//! | [`config`] | Layout constants and [`RenderOptions`](config::RenderOptions) |
//! | [`error`] | [`RenderFault`](error::RenderFault) recoveries |
//!
//! # Example
//!
//! ```
//! use daycount_statusbar::colors::WHITE;
//! use daycount_statusbar::display::{CountMode, DisplayFormat, DisplayRequest, FixedProfile};
//! use daycount_statusbar::icon::NoIcons;
//! use daycount_statusbar::status_item::StatusItemRenderer;
//!
//! let profile = FixedProfile { total_days: Some(30_000), days_lived: None };
//! let renderer = StatusItemRenderer::new(&profile, &NoIcons, &WHITE);
//!
//! let request = DisplayRequest {
//!     value: 8724,
//!     format: DisplayFormat::YearsAndDays,
//!     mode: CountMode::Countdown,
//!     show_icon: false,
//! };
//! assert_eq!(renderer.render(&request).text.as_deref(), Some("23y 329d"));
//! ```
//!
//! # Failure Handling
//!
//! Nothing here returns an error to the host. Malformed path data keeps the
//! geometry read so far, icons fall back to procedural glyphs, and missing day
//! totals degrade to plain text. Each recovery is logged through the `log`
//! facade; the host decides whether a logger is installed.

pub mod bitmap;
pub mod colors;
pub mod config;
pub mod display;
pub mod error;
pub mod icon;
pub mod path;
pub mod status_item;
pub mod styles;
pub mod widgets;

pub use bitmap::Bitmap;
pub use config::RenderOptions;
pub use display::{CountMode, DisplayContent, DisplayFormat, DisplayRequest, LifeProfile};
pub use error::RenderFault;
pub use icon::{Glyph, IconSource};
pub use status_item::{StatusItemRenderer, ThemeSource};
