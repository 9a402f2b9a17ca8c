//! Status bar fonts and shared text styles.
//!
//! The host status surface has one default font. Some hosts also offer a
//! condensed cut of it, which the progress bar label prefers because the label
//! lives in a narrow reserved strip. [`StatusFonts`] carries both; the
//! condensed slot is optional and callers fall back to the regular font.
//!
//! # Dynamic Color Styles
//!
//! Text is always drawn in the theme tint, which is only known at render time,
//! so only the alignment styles are `const`. Character styles are built with
//! `MonoTextStyle::new(font, tint)` at the call site.

use embedded_graphics::{
    mono_font::{MonoFont, ascii::FONT_5X8},
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_9_POINT;

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Left-aligned text positioned by the top of its metric box.
pub const LEFT_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Right-aligned text positioned by its vertical middle. Used for the
/// progress bar percentage label.
pub const RIGHT_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Font References
// =============================================================================

/// Default status bar font (`ProFont` 9pt).
pub const STATUS_FONT: &MonoFont<'static> = &PROFONT_9_POINT;

/// Condensed status bar font (5x8 pixels).
pub const CONDENSED_FONT: &MonoFont<'static> = &FONT_5X8;

/// Fonts offered by the host status surface.
#[derive(Clone, Copy, Debug)]
pub struct StatusFonts {
    /// The unmodified default status bar font.
    pub regular: &'static MonoFont<'static>,
    /// A condensed variant, if the host has one.
    pub condensed: Option<&'static MonoFont<'static>>,
}

impl StatusFonts {
    pub const DEFAULT: Self = Self {
        regular: STATUS_FONT,
        condensed: Some(CONDENSED_FONT),
    };

    /// Fonts for a host without a condensed cut.
    pub const fn regular_only(regular: &'static MonoFont<'static>) -> Self {
        Self { regular, condensed: None }
    }

    /// Font for the progress bar label: condensed when available.
    #[inline]
    pub fn label_font(&self) -> &'static MonoFont<'static> { self.condensed.unwrap_or(self.regular) }
}

impl Default for StatusFonts {
    fn default() -> Self { Self::DEFAULT }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_font_prefers_condensed() {
        let fonts = StatusFonts::DEFAULT;
        assert_eq!(fonts.label_font().character_size, CONDENSED_FONT.character_size);
    }

    #[test]
    fn test_label_font_falls_back_to_regular() {
        let fonts = StatusFonts::regular_only(STATUS_FONT);
        assert_eq!(fonts.label_font().character_size, STATUS_FONT.character_size);
    }

    #[test]
    fn test_condensed_is_narrower() {
        assert!(CONDENSED_FONT.character_size.width < STATUS_FONT.character_size.width);
    }
}
