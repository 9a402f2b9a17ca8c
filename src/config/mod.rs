//! Renderer configuration.
//!
//! - `layout`: canvas dimensions, opacities and other compile-time constants
//! - [`RenderOptions`]: the runtime knobs a host passes into every render

pub mod layout;

// Re-export layout constants at config level for convenience
pub use layout::{
    DAYS_PER_YEAR,
    DEFAULT_STROKE_WIDTH,
    ERROR_TEXT,
    FULL_OPACITY,
    HALF_OPACITY,
    ICON_SIZE,
    ICON_TEXT_SPACING,
    LABEL_RESERVE,
    MIN_STROKE_PX,
    PREVIEW_CELLS,
    PROGRESS_BAR_HEIGHT,
    PROGRESS_BAR_WIDTH,
    TRACK_HEIGHT,
    TRACK_WIDTH,
    TRACK_Y,
    VIEWBOX_SIZE,
};

use crate::styles::StatusFonts;

/// Runtime render settings supplied by the host.
///
/// Nothing here is cached between renders; the host builds (or copies) one of
/// these for each call.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Fonts available on the host status surface.
    pub fonts: StatusFonts,
    /// Target edge length for icons, in pixels.
    pub icon_size: u32,
}

impl RenderOptions {
    /// Default status bar fonts and icon size.
    pub const fn new() -> Self {
        Self {
            fonts: StatusFonts::DEFAULT,
            icon_size: ICON_SIZE,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_leaves_label_reserve() {
        assert_eq!(TRACK_WIDTH + LABEL_RESERVE, PROGRESS_BAR_WIDTH);
    }

    #[test]
    fn test_track_is_vertically_centered() {
        let below = PROGRESS_BAR_HEIGHT as i32 - (TRACK_Y + TRACK_HEIGHT as i32);
        assert_eq!(TRACK_Y, below, "Track should have equal margins above and below");
    }

    #[test]
    fn test_half_opacity_is_below_full() {
        assert!(HALF_OPACITY < FULL_OPACITY);
    }

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert_eq!(options.icon_size, ICON_SIZE);
        assert!(options.fonts.condensed.is_some());
    }
}
