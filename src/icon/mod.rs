//! Status item icons.
//!
//! An icon is looked up by [`Glyph`] through an [`IconSource`], rasterized
//! from its markup and, if that yields nothing, replaced by the matching
//! procedural glyph. [`load_icon`] always returns a bitmap.
//!
//! - `markup`: element tree with structural mask handling
//! - `style`: fill/stroke resolution and theme recoloring
//! - `raster`: markup to bitmap
//! - `fallback`: procedural headstone and tree glyphs

pub mod fallback;
pub mod markup;
pub mod raster;
pub mod style;

pub use fallback::{render_mortality_glyph, render_vitality_glyph};
pub use raster::{rasterize, try_rasterize};
pub use style::IconStyle;

use embedded_graphics::pixelcolor::Rgb888;
use log::debug;

use crate::bitmap::Bitmap;
use crate::display::CountMode;
use crate::error::RenderFault;

/// The two status item icons.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Glyph {
    /// Shown while counting down the days left.
    Mortality,
    /// Shown while counting up the days lived.
    Vitality,
}

impl Glyph {
    /// Asset name the icon source is asked for.
    pub const fn asset_name(self) -> &'static str {
        match self {
            Self::Mortality => "mortality",
            Self::Vitality => "vitality",
        }
    }

    pub const fn for_mode(mode: CountMode) -> Self {
        match mode {
            CountMode::Countdown => Self::Mortality,
            CountMode::CountUp => Self::Vitality,
        }
    }

    /// Draw the procedural stand-in for this glyph.
    pub fn procedural(self, size: u32, color: Rgb888) -> Bitmap {
        match self {
            Self::Mortality => render_mortality_glyph(size, color),
            Self::Vitality => render_vitality_glyph(size, color),
        }
    }
}

/// Where icon markup comes from (bundle resources, files, tests).
pub trait IconSource {
    /// Markup for the asset called `name`, or `None` if there is none.
    fn load_icon_markup(&self, name: &str) -> Option<String>;
}

/// A source with no icons; every lookup falls back to the procedural glyph.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoIcons;

impl IconSource for NoIcons {
    fn load_icon_markup(&self, _name: &str) -> Option<String> { None }
}

/// Load, rasterize and (if needed) replace `glyph` at `size` pixels in `color`.
pub fn load_icon<S: IconSource + ?Sized>(source: &S, glyph: Glyph, size: u32, color: Rgb888) -> Bitmap {
    let name = glyph.asset_name();
    let rendered = source
        .load_icon_markup(name)
        .ok_or_else(|| RenderFault::MissingAsset(name.to_string()))
        .and_then(|markup| try_rasterize(&markup, size, color));

    match rendered {
        Ok(bitmap) => bitmap,
        Err(fault) => {
            debug!("{fault}; drawing procedural {name}");
            glyph.procedural(size, color)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::colors::{BLACK, WHITE};

    struct MapSource(HashMap<&'static str, &'static str>);

    impl IconSource for MapSource {
        fn load_icon_markup(&self, name: &str) -> Option<String> { self.0.get(name).map(|s| (*s).to_string()) }
    }

    #[test]
    fn test_glyph_for_mode() {
        assert_eq!(Glyph::for_mode(CountMode::Countdown), Glyph::Mortality);
        assert_eq!(Glyph::for_mode(CountMode::CountUp), Glyph::Vitality);
        assert_eq!(Glyph::Mortality.asset_name(), "mortality");
    }

    #[test]
    fn test_missing_asset_uses_procedural() {
        let icon = load_icon(&NoIcons, Glyph::Vitality, 16, WHITE);
        assert_eq!(icon, render_vitality_glyph(16, WHITE));
    }

    #[test]
    fn test_masked_only_markup_uses_procedural() {
        let source = MapSource(HashMap::from([(
            "mortality",
            r#"<svg><mask><path d="M0 0 H128 V128 Z" fill="currentColor"/></mask></svg>"#,
        )]));
        let icon = load_icon(&source, Glyph::Mortality, 16, BLACK);
        assert_eq!(icon, render_mortality_glyph(16, BLACK));
    }

    #[test]
    fn test_markup_is_preferred_when_it_renders() {
        let markup = r#"<path d="M0 0 H128 V128 H0 Z" fill="currentColor"/>"#;
        let source = MapSource(HashMap::from([("vitality", markup)]));
        let icon = load_icon(&source, Glyph::Vitality, 16, WHITE);
        assert_eq!(icon.painted_pixels(), 256, "Full-box square covers the whole icon");
    }
}
