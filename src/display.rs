//! What the status item shows for one request.
//!
//! [`select`] is the single dispatch point: it turns a [`DisplayRequest`] plus
//! the host collaborators into a [`DisplayContent`] holding either text or a
//! bitmap. It keeps no state; every call starts from its arguments.
//!
//! # Formats
//!
//! | Format | Output | Without a day total |
//! |--------|--------|---------------------|
//! | [`DisplayFormat::DaysOnly`] | `"8724"` | n/a |
//! | [`DisplayFormat::YearsAndDays`] | `"23y 329d"` | n/a |
//! | [`DisplayFormat::Percentage`] | `"69.9%"` | raw day count |
//! | [`DisplayFormat::ProgressBar`] | bar bitmap | `"Error"` |
//!
//! Text formats are drawn next to the mode's icon when
//! [`DisplayRequest::show_icon`] is set.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb888;
use heapless::String as Label;
use log::warn;

use crate::bitmap::Bitmap;
use crate::config::{DAYS_PER_YEAR, ERROR_TEXT, PREVIEW_CELLS, RenderOptions};
use crate::error::{RenderFault, Result};
use crate::icon::{Glyph, IconSource, load_icon};
use crate::widgets::{ColorScheme, ProgressBarSpec, clamp_percentage, compose_icon_and_text, render_progress_bar};

// =============================================================================
// Request Model
// =============================================================================

/// How the day count is presented.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DisplayFormat {
    #[default]
    DaysOnly,
    YearsAndDays,
    Percentage,
    ProgressBar,
}

impl DisplayFormat {
    pub const ALL: [Self; 4] = [Self::DaysOnly, Self::YearsAndDays, Self::Percentage, Self::ProgressBar];
}

/// Which way the day count runs.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CountMode {
    /// `value` is the number of days left.
    #[default]
    Countdown,
    /// `value` is the number of days lived.
    CountUp,
}

impl CountMode {
    /// Progress bar opacity scheme for this mode.
    pub const fn color_scheme(self) -> ColorScheme {
        match self {
            Self::Countdown => ColorScheme::Swapped,
            Self::CountUp => ColorScheme::Standard,
        }
    }
}

/// One render request from the host state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DisplayRequest {
    /// Day count for the current mode (may be negative once the horizon has passed).
    pub value: i64,
    pub format: DisplayFormat,
    pub mode: CountMode,
    /// Draw the mode's icon in front of text formats.
    pub show_icon: bool,
}

/// Day totals supplied by the host's life calculator.
pub trait LifeProfile {
    /// Total days in the span, or `None` if not known yet.
    fn total_days(&self) -> Option<i64>;

    /// Days lived so far, when tracked separately from the request value.
    fn days_lived(&self) -> Option<i64> { None }
}

/// A profile with fixed numbers.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct FixedProfile {
    pub total_days: Option<i64>,
    pub days_lived: Option<i64>,
}

impl LifeProfile for FixedProfile {
    fn total_days(&self) -> Option<i64> { self.total_days }

    fn days_lived(&self) -> Option<i64> { self.days_lived }
}

// =============================================================================
// Output Model
// =============================================================================

/// Rendered status content: text, an image, or nothing.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct DisplayContent {
    pub text: Option<String>,
    pub image: Option<Bitmap>,
}

impl DisplayContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            image: None,
        }
    }

    pub fn image(image: Bitmap) -> Self {
        Self {
            text: None,
            image: Some(image),
        }
    }

    pub const fn nothing() -> Self { Self { text: None, image: None } }

    pub const fn is_empty(&self) -> bool { self.text.is_none() && self.image.is_none() }
}

// =============================================================================
// Text Formatting
// =============================================================================

/// `"8724"`
pub fn format_days(days: i64) -> Label<24> {
    let mut out = Label::new();
    let _ = write!(out, "{days}");
    out
}

/// `"23y 329d"`: whole 365-day years plus the remainder. Negative input reads
/// `"0y 0d"`.
pub fn format_years_and_days(days: i64) -> Label<32> {
    let days = days.max(0);
    let mut out = Label::new();
    let _ = write!(out, "{}y {}d", days / DAYS_PER_YEAR, days % DAYS_PER_YEAR);
    out
}

/// `"69.9%"`
pub fn format_percentage(percentage: f32) -> Label<16> {
    let mut out = Label::new();
    let _ = write!(out, "{:.1}%", clamp_percentage(percentage));
    out
}

/// Fill and label percentages for the bar and percentage formats.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Progress {
    /// Share of the span already lived.
    pub fill: f32,
    /// Share shown as a number: remaining for countdown, lived for count-up.
    pub text: f32,
}

impl Progress {
    /// Work out both percentages, or [`RenderFault::DenominatorUnavailable`]
    /// without a positive total.
    pub fn compute<P: LifeProfile + ?Sized>(request: &DisplayRequest, profile: &P) -> Result<Self> {
        let total = profile
            .total_days()
            .filter(|&total| total > 0)
            .ok_or(RenderFault::DenominatorUnavailable)?;

        let lived = lived_days(request, profile, total);
        let shown = match request.mode {
            CountMode::Countdown => request.value,
            CountMode::CountUp => lived,
        };

        Ok(Self {
            fill: percent_of(lived, total),
            text: percent_of(shown, total),
        })
    }
}

fn lived_days<P: LifeProfile + ?Sized>(request: &DisplayRequest, profile: &P, total: i64) -> i64 {
    profile.days_lived().unwrap_or(match request.mode {
        CountMode::Countdown => total.saturating_sub(request.value),
        CountMode::CountUp => request.value,
    })
}

fn percent_of(part: i64, total: i64) -> f32 { clamp_percentage((part as f64 * 100.0 / total as f64) as f32) }

/// Text for the text formats. The bar format gets its [`ERROR_TEXT`] only when
/// it cannot draw; here it reads like [`DisplayFormat::DaysOnly`].
pub fn format_text<P: LifeProfile + ?Sized>(request: &DisplayRequest, profile: &P) -> String {
    let days = match request.mode {
        CountMode::Countdown => request.value,
        CountMode::CountUp => profile.days_lived().unwrap_or(request.value),
    };

    match request.format {
        DisplayFormat::DaysOnly | DisplayFormat::ProgressBar => format_days(days).as_str().into(),
        DisplayFormat::YearsAndDays => format_years_and_days(days).as_str().into(),
        DisplayFormat::Percentage => match Progress::compute(request, profile) {
            Ok(progress) => format_percentage(progress.text).as_str().into(),
            Err(fault) => {
                warn!("{fault}; showing the raw day count");
                format_days(days).as_str().into()
            }
        },
    }
}

// =============================================================================
// Selection
// =============================================================================

/// Build the status content for `request`.
///
/// Always returns text or an image. `theme` is the tint to draw in and must be
/// read from the host for each call.
pub fn select<P, I>(
    request: &DisplayRequest,
    profile: &P,
    icons: &I,
    theme: Rgb888,
    options: &RenderOptions,
) -> DisplayContent
where
    P: LifeProfile + ?Sized,
    I: IconSource + ?Sized,
{
    if request.format == DisplayFormat::ProgressBar {
        return match Progress::compute(request, profile) {
            Ok(progress) => {
                let spec = ProgressBarSpec {
                    fill_percentage: progress.fill,
                    text_percentage: progress.text,
                    color: theme,
                    color_scheme: request.mode.color_scheme(),
                };
                DisplayContent::image(render_progress_bar(&spec, options.fonts.label_font()))
            }
            Err(fault) => {
                warn!("{fault}; progress bar unavailable");
                DisplayContent::text(ERROR_TEXT)
            }
        };
    }

    let text = format_text(request, profile);
    if !request.show_icon {
        return DisplayContent::text(text);
    }

    let icon = load_icon(icons, Glyph::for_mode(request.mode), options.icon_size, theme);
    DisplayContent::image(compose_icon_and_text(&icon, &text, options.fonts.regular, theme))
}

/// Text-only stand-in for [`select`], for places that cannot show images.
///
/// The progress bar becomes block characters and a rounded percentage,
/// e.g. `"▓▓▓░░░░░░░ 70%"`.
pub fn preview_text<P: LifeProfile + ?Sized>(request: &DisplayRequest, profile: &P) -> String {
    if request.format != DisplayFormat::ProgressBar {
        return format_text(request, profile);
    }

    let progress = match Progress::compute(request, profile) {
        Ok(progress) => progress,
        Err(fault) => {
            warn!("{fault}; no preview");
            return ERROR_TEXT.into();
        }
    };

    let filled = ((progress.fill / 100.0 * PREVIEW_CELLS as f32).round() as usize).min(PREVIEW_CELLS);
    let mut out = String::with_capacity(PREVIEW_CELLS * '▓'.len_utf8() + 5);
    out.extend((0..PREVIEW_CELLS).map(|cell| if cell < filled { '▓' } else { '░' }));
    let _ = write!(out, " {}%", progress.text.round() as u32);
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::WHITE;
    use crate::icon::NoIcons;

    const NO_TOTAL: FixedProfile = FixedProfile { total_days: None, days_lived: None };
    const HUNDRED: FixedProfile = FixedProfile { total_days: Some(100), days_lived: None };

    fn request(value: i64, format: DisplayFormat, mode: CountMode) -> DisplayRequest {
        DisplayRequest { value, format, mode, show_icon: false }
    }

    fn render(request: &DisplayRequest, profile: &FixedProfile) -> DisplayContent {
        select(request, profile, &NoIcons, WHITE, &RenderOptions::default())
    }

    #[test]
    fn test_years_and_days_rule() {
        assert_eq!(format_years_and_days(8724).as_str(), "23y 329d");
        assert_eq!(format_years_and_days(365).as_str(), "1y 0d");
        assert_eq!(format_years_and_days(364).as_str(), "0y 364d");
        assert_eq!(format_years_and_days(-40).as_str(), "0y 0d", "Past horizon clamps to zero");
    }

    #[test]
    fn test_days_keep_sign() {
        assert_eq!(format_days(-12).as_str(), "-12");
        assert_eq!(format_days(i64::MIN).as_str(), "-9223372036854775808");
    }

    #[test]
    fn test_percentage_text() {
        assert_eq!(format_percentage(69.94).as_str(), "69.9%");
        assert_eq!(format_percentage(120.0).as_str(), "100.0%");
    }

    #[test]
    fn test_days_only_is_text() {
        let content = render(&request(8724, DisplayFormat::DaysOnly, CountMode::Countdown), &NO_TOTAL);
        assert_eq!(content, DisplayContent::text("8724"));
    }

    #[test]
    fn test_count_up_prefers_lived_days() {
        let profile = FixedProfile { total_days: None, days_lived: Some(400) };
        let content = render(&request(1, DisplayFormat::YearsAndDays, CountMode::CountUp), &profile);
        assert_eq!(content.text.as_deref(), Some("1y 35d"));
    }

    #[test]
    fn test_percentage_by_mode() {
        let down = render(&request(70, DisplayFormat::Percentage, CountMode::Countdown), &HUNDRED);
        assert_eq!(down.text.as_deref(), Some("70.0%"), "Countdown shows the share remaining");

        let up = render(&request(30, DisplayFormat::Percentage, CountMode::CountUp), &HUNDRED);
        assert_eq!(up.text.as_deref(), Some("30.0%"), "Count-up shows the share lived");
    }

    #[test]
    fn test_percentage_without_total_degrades_to_value() {
        let content = render(&request(8724, DisplayFormat::Percentage, CountMode::Countdown), &NO_TOTAL);
        assert_eq!(content, DisplayContent::text("8724"));

        let zero = FixedProfile { total_days: Some(0), days_lived: None };
        let content = render(&request(5, DisplayFormat::Percentage, CountMode::Countdown), &zero);
        assert_eq!(content, DisplayContent::text("5"), "Zero total is treated as unavailable");
    }

    #[test]
    fn test_progress_bar_without_total_is_error_text() {
        let content = render(&request(10, DisplayFormat::ProgressBar, CountMode::CountUp), &NO_TOTAL);
        assert_eq!(content, DisplayContent::text("Error"));
    }

    #[test]
    fn test_progress_bar_is_image() {
        let content = render(&request(70, DisplayFormat::ProgressBar, CountMode::Countdown), &HUNDRED);
        assert!(content.text.is_none());
        assert!(content.image.is_some());
    }

    #[test]
    fn test_progress_values() {
        let down = Progress::compute(&request(70, DisplayFormat::ProgressBar, CountMode::Countdown), &HUNDRED);
        assert_eq!(down, Ok(Progress { fill: 30.0, text: 70.0 }));

        let up = Progress::compute(&request(30, DisplayFormat::ProgressBar, CountMode::CountUp), &HUNDRED);
        assert_eq!(up, Ok(Progress { fill: 30.0, text: 30.0 }));

        let over = Progress::compute(&request(-50, DisplayFormat::ProgressBar, CountMode::Countdown), &HUNDRED);
        assert_eq!(over, Ok(Progress { fill: 100.0, text: 0.0 }), "Both clamp to 0..=100");
    }

    #[test]
    fn test_progress_extreme_values() {
        let profile = FixedProfile { total_days: Some(30000), days_lived: None };
        for (value, expected) in [
            (i64::MIN, Progress { fill: 100.0, text: 0.0 }),
            (i64::MAX, Progress { fill: 0.0, text: 100.0 }),
        ] {
            let req = request(value, DisplayFormat::ProgressBar, CountMode::Countdown);
            assert_eq!(Progress::compute(&req, &profile), Ok(expected));
            assert!(render(&req, &profile).image.is_some());
        }

        let up = Progress::compute(&request(i64::MIN, DisplayFormat::Percentage, CountMode::CountUp), &profile);
        assert_eq!(up, Ok(Progress { fill: 0.0, text: 0.0 }));
    }

    #[test]
    fn test_percentage_fallback_matches_days_text() {
        let profile = FixedProfile { total_days: None, days_lived: Some(400) };
        let percentage = render(&request(1, DisplayFormat::Percentage, CountMode::CountUp), &profile);
        let days = render(&request(1, DisplayFormat::DaysOnly, CountMode::CountUp), &profile);
        assert_eq!(percentage, DisplayContent::text("400"));
        assert_eq!(percentage, days);
    }

    #[test]
    fn test_show_icon_makes_image() {
        let mut req = request(42, DisplayFormat::DaysOnly, CountMode::CountUp);
        req.show_icon = true;
        let content = render(&req, &NO_TOTAL);
        let image = content.image.expect("icon + text is an image");
        assert!(image.width() > 16, "Icon plus text is wider than the icon");
        assert!(content.text.is_none());
    }

    #[test]
    fn test_show_icon_ignored_for_error_text() {
        let mut req = request(42, DisplayFormat::ProgressBar, CountMode::CountUp);
        req.show_icon = true;
        assert_eq!(render(&req, &NO_TOTAL), DisplayContent::text("Error"));
    }

    #[test]
    fn test_preview_blocks() {
        let req = request(70, DisplayFormat::ProgressBar, CountMode::Countdown);
        assert_eq!(preview_text(&req, &HUNDRED), "▓▓▓░░░░░░░ 70%");

        let req = request(100, DisplayFormat::ProgressBar, CountMode::CountUp);
        assert_eq!(preview_text(&req, &HUNDRED), "▓▓▓▓▓▓▓▓▓▓ 100%");

        assert_eq!(preview_text(&req, &NO_TOTAL), "Error");
    }

    #[test]
    fn test_preview_text_formats() {
        let req = request(8724, DisplayFormat::YearsAndDays, CountMode::Countdown);
        assert_eq!(preview_text(&req, &NO_TOTAL), "23y 329d");
    }

    #[test]
    fn test_content_constructors() {
        assert!(DisplayContent::nothing().is_empty());
        assert!(!DisplayContent::text("x").is_empty());
    }
}
