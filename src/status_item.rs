//! The status item entry points.
//!
//! [`StatusItemRenderer`] bundles the host collaborators (day totals, icon
//! markup, theme tint) with the [`RenderOptions`] and exposes the two calls a
//! host makes whenever the value, format, mode or appearance changes.
//!
//! The tint is asked for on every call. Appearance can flip between two
//! renders without anything else changing, so it is never stored here.

use embedded_graphics::pixelcolor::Rgb888;
use log::trace;

use crate::config::RenderOptions;
use crate::display::{DisplayContent, DisplayRequest, LifeProfile, preview_text, select};
use crate::icon::IconSource;

/// Supplies the host's current foreground tint.
pub trait ThemeSource {
    fn tint(&self) -> Rgb888;
}

/// A fixed tint.
impl ThemeSource for Rgb888 {
    fn tint(&self) -> Rgb888 { *self }
}

/// Renders status content from host collaborators.
pub struct StatusItemRenderer<'a, P: ?Sized, I: ?Sized, T: ?Sized> {
    profile: &'a P,
    icons: &'a I,
    theme: &'a T,
    options: RenderOptions,
}

impl<'a, P, I, T> StatusItemRenderer<'a, P, I, T>
where
    P: LifeProfile + ?Sized,
    I: IconSource + ?Sized,
    T: ThemeSource + ?Sized,
{
    pub fn new(profile: &'a P, icons: &'a I, theme: &'a T) -> Self {
        Self::with_options(profile, icons, theme, RenderOptions::default())
    }

    pub const fn with_options(profile: &'a P, icons: &'a I, theme: &'a T, options: RenderOptions) -> Self {
        Self { profile, icons, theme, options }
    }

    pub const fn options(&self) -> &RenderOptions { &self.options }

    /// Content for the live status item. Never empty.
    pub fn render(&self, request: &DisplayRequest) -> DisplayContent {
        let tint = self.theme.tint();
        trace!("render {request:?} in {tint:?}");
        select(request, self.profile, self.icons, tint, &self.options)
    }

    /// Text-only approximation of [`render`](Self::render).
    pub fn render_preview_text(&self, request: &DisplayRequest) -> String { preview_text(request, self.profile) }
}
