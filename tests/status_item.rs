//! End-to-end status item scenarios through the public API.

use std::cell::RefCell;
use std::collections::HashMap;

use daycount_statusbar::colors::{BLACK, Rgba, WHITE};
use daycount_statusbar::config::{
    FULL_OPACITY,
    HALF_OPACITY,
    PROGRESS_BAR_HEIGHT,
    PROGRESS_BAR_WIDTH,
    TRACK_WIDTH,
    TRACK_Y,
};
use daycount_statusbar::display::FixedProfile;
use daycount_statusbar::icon::{render_mortality_glyph, render_vitality_glyph};
use daycount_statusbar::styles::STATUS_FONT;
use daycount_statusbar::widgets::compose_icon_and_text;
use daycount_statusbar::{
    CountMode,
    DisplayContent,
    DisplayFormat,
    DisplayRequest,
    IconSource,
    LifeProfile,
    StatusItemRenderer,
};

/// Icon markup keyed by asset name; records every lookup.
#[derive(Default)]
struct Assets {
    markup: HashMap<&'static str, &'static str>,
    requested: RefCell<Vec<String>>,
}

impl Assets {
    fn with(name: &'static str, markup: &'static str) -> Self {
        Self {
            markup: HashMap::from([(name, markup)]),
            ..Self::default()
        }
    }
}

impl IconSource for Assets {
    fn load_icon_markup(&self, name: &str) -> Option<String> {
        self.requested.borrow_mut().push(name.to_string());
        self.markup.get(name).map(|m| (*m).to_string())
    }
}

/// Calculator that has not produced a total yet.
struct Pending;

impl LifeProfile for Pending {
    fn total_days(&self) -> Option<i64> { None }
}

const HUNDRED_DAYS: FixedProfile = FixedProfile { total_days: Some(100), days_lived: None };

fn request(value: i64, format: DisplayFormat, mode: CountMode) -> DisplayRequest {
    DisplayRequest { value, format, mode, show_icon: false }
}

#[test]
fn test_days_only_scenario() {
    let assets = Assets::default();
    let renderer = StatusItemRenderer::new(&Pending, &assets, &WHITE);
    let content = renderer.render(&request(8724, DisplayFormat::DaysOnly, CountMode::Countdown));
    assert_eq!(content, DisplayContent::text("8724"));
}

#[test]
fn test_years_and_days_scenario() {
    let assets = Assets::default();
    let renderer = StatusItemRenderer::new(&Pending, &assets, &WHITE);
    let content = renderer.render(&request(8724, DisplayFormat::YearsAndDays, CountMode::Countdown));
    assert_eq!(content.text.as_deref(), Some("23y 329d"), "floor(8724 / 365) = 23, 8724 % 365 = 329");
}

#[test]
fn test_countdown_progress_bar_scenario() {
    let assets = Assets::default();
    let renderer = StatusItemRenderer::new(&HUNDRED_DAYS, &assets, &WHITE);
    let content = renderer.render(&request(70, DisplayFormat::ProgressBar, CountMode::Countdown));
    let bar = content.image.expect("progress bar renders as an image");

    assert_eq!(bar.width(), PROGRESS_BAR_WIDTH);
    assert_eq!(bar.height(), PROGRESS_BAR_HEIGHT);

    // Swapped scheme: the lived 30% is faint, the remaining 70% is solid.
    let fill = (TRACK_WIDTH as f32 * 0.30).round() as i32;
    let alpha = |x: i32| bar.pixel(x, TRACK_Y).map_or(0, |p| p.alpha);
    assert_eq!(alpha(0), HALF_OPACITY);
    assert_eq!(alpha(fill - 1), HALF_OPACITY);
    assert_eq!(alpha(fill), FULL_OPACITY);
    assert_eq!(alpha(TRACK_WIDTH as i32 - 1), FULL_OPACITY);

    let preview = renderer.render_preview_text(&request(70, DisplayFormat::ProgressBar, CountMode::Countdown));
    assert_eq!(preview, "▓▓▓░░░░░░░ 70%");
}

#[test]
fn test_count_up_progress_bar_uses_standard_scheme() {
    let assets = Assets::default();
    let renderer = StatusItemRenderer::new(&HUNDRED_DAYS, &assets, &BLACK);
    let bar = renderer
        .render(&request(30, DisplayFormat::ProgressBar, CountMode::CountUp))
        .image
        .expect("progress bar renders as an image");

    let alpha = |x: i32| bar.pixel(x, TRACK_Y).map_or(0, |p| p.alpha);
    assert!(alpha(0) > alpha(TRACK_WIDTH as i32 - 1), "Lived segment is the solid one");
    assert_eq!(bar.pixel(0, TRACK_Y).map(|p| p.color), Some(BLACK));
}

#[test]
fn test_progress_bar_without_total_shows_error() {
    let assets = Assets::default();
    let renderer = StatusItemRenderer::new(&Pending, &assets, &WHITE);
    let req = request(70, DisplayFormat::ProgressBar, CountMode::Countdown);
    assert_eq!(renderer.render(&req), DisplayContent::text("Error"));
    assert_eq!(renderer.render_preview_text(&req), "Error");
}

#[test]
fn test_percentage_without_total_shows_value() {
    let assets = Assets::default();
    let renderer = StatusItemRenderer::new(&Pending, &assets, &WHITE);
    let content = renderer.render(&request(8724, DisplayFormat::Percentage, CountMode::Countdown));
    assert_eq!(content, DisplayContent::text("8724"));
}

#[test]
fn test_masked_icon_falls_back_to_procedural() {
    let assets = Assets::with(
        "mortality",
        r#"<svg viewBox="0 0 128 128">
             <defs><mask id="cut"><path d="M0 0 H128 V128 H0 Z" fill="white"/></mask></defs>
           </svg>"#,
    );
    let renderer = StatusItemRenderer::new(&Pending, &assets, &WHITE);
    let mut req = request(8724, DisplayFormat::DaysOnly, CountMode::Countdown);
    req.show_icon = true;

    let image = renderer.render(&req).image.expect("icon + text renders as an image");
    let expected = compose_icon_and_text(&render_mortality_glyph(16, WHITE), "8724", STATUS_FONT, WHITE);
    assert_eq!(image, expected);
    assert_eq!(assets.requested.borrow().as_slice(), ["mortality"]);
}

#[test]
fn test_missing_icon_falls_back_to_procedural() {
    let assets = Assets::default();
    let renderer = StatusItemRenderer::new(&HUNDRED_DAYS, &assets, &BLACK);
    let mut req = request(30, DisplayFormat::Percentage, CountMode::CountUp);
    req.show_icon = true;

    let image = renderer.render(&req).image.expect("icon + text renders as an image");
    let expected = compose_icon_and_text(&render_vitality_glyph(16, BLACK), "30.0%", STATUS_FONT, BLACK);
    assert_eq!(image, expected);
    assert_eq!(assets.requested.borrow().as_slice(), ["vitality"]);
}

#[test]
fn test_markup_icon_is_recolored() {
    let assets = Assets::with(
        "vitality",
        r##"<svg><path d="M0 0 H128 V128 H0 Z" fill="currentColor"/><path d="M32 32 H96 V96 H32 Z" fill="#ff0000"/></svg>"##,
    );
    let renderer = StatusItemRenderer::new(&Pending, &assets, &WHITE);
    let mut req = request(12, DisplayFormat::DaysOnly, CountMode::CountUp);
    req.show_icon = true;

    let image = renderer.render(&req).image.expect("icon + text renders as an image");
    let icon_top = (image.height() as i32 - 16) / 2;
    assert_eq!(image.pixel(0, icon_top), Some(Rgba::opaque(WHITE)), "Theme token follows the tint");
    assert_eq!(
        image.pixel(8, icon_top + 8).map(|p| p.color),
        Some(daycount_statusbar::colors::RED),
        "Authored color is kept"
    );
}
