//! Desktop preview of the day-count status item.
//!
//! Shows the rendered status content on a strip that imitates a menu bar,
//! with the text preview and recent log lines underneath.
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | `F` | Cycle format |
//! | `M` | Toggle countdown / count-up |
//! | `I` | Toggle icon |
//! | `T` | Toggle light / dark appearance |
//! | `Up` / `Down` | Value ±1 day |
//! | `Right` / `Left` | Value ±365 days |
//! | `Space` | Toggle auto-advance |
//! | `P` | Toggle whether the day total is known |
//!
//! Icon markup is read from `simulator/assets/<name>.svg`. Delete or rename a
//! file to see the procedural glyph instead.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod logger;
mod timing;

use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use daycount_statusbar::bitmap::Bitmap;
use daycount_statusbar::colors::{BLACK, GRAY, Rgba, WHITE, blend_over};
use daycount_statusbar::display::{CountMode, DisplayFormat, DisplayRequest, FixedProfile};
use daycount_statusbar::icon::IconSource;
use daycount_statusbar::status_item::StatusItemRenderer;
use daycount_statusbar::styles::{LEFT_TOP, STATUS_FONT};
use daycount_statusbar::widgets::measure_text;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{Level, LevelFilter, info};

use crate::timing::{DAY_TICK, FRAME_TIME};

const SCREEN_WIDTH: u32 = 240;
const SCREEN_HEIGHT: u32 = 120;
const BAR_HEIGHT: u32 = 24;

/// Demo span: 82 years.
const TOTAL_DAYS: i64 = 82 * 365;

/// Reads `<dir>/<name>.svg`.
struct DirIcons {
    dir: PathBuf,
}

impl IconSource for DirIcons {
    fn load_icon_markup(&self, name: &str) -> Option<String> {
        std::fs::read_to_string(self.dir.join(format!("{name}.svg"))).ok()
    }
}

fn next_format(format: DisplayFormat) -> DisplayFormat {
    let i = DisplayFormat::ALL.iter().position(|&f| f == format).unwrap_or(0);
    DisplayFormat::ALL[(i + 1) % DisplayFormat::ALL.len()]
}

/// Copy `bitmap` onto the display at `origin`, blending over `background`.
fn present(display: &mut SimulatorDisplay<Rgb888>, bitmap: &Bitmap, origin: Point, background: Rgb888) {
    let pixels = bitmap.pixels().iter().enumerate().filter(|(_, px)| !px.is_transparent()).map(|(i, px)| {
        let x = (i as u32 % bitmap.width()) as i32;
        let y = (i as u32 / bitmap.width()) as i32;
        let color = blend_over(Rgba::opaque(background), px.color, px.alpha).color;
        Pixel(origin + Point::new(x, y), color)
    });
    display.draw_iter(pixels).ok();
}

fn level_color(level: Level) -> Rgb888 {
    match level {
        Level::Error => Rgb888::RED,
        Level::Warn => Rgb888::YELLOW,
        Level::Info => Rgb888::GREEN,
        Level::Debug | Level::Trace => GRAY,
    }
}

fn main() {
    logger::init(LevelFilter::Debug);

    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(3).build();
    let mut window = Window::new("Day Count Status Item", &output_settings);

    let icons = DirIcons { dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets") };
    let mut request = DisplayRequest {
        value: TOTAL_DAYS - 8724,
        format: DisplayFormat::DaysOnly,
        mode: CountMode::Countdown,
        show_icon: false,
    };
    let mut dark = true;
    let mut total_known = true;
    let mut auto_advance = false;
    let mut last_tick = Instant::now();

    display.clear(BLACK).ok();
    window.update(&display);
    info!("Simulator started");

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                    Keycode::F => {
                        request.format = next_format(request.format);
                        info!("Format: {:?}", request.format);
                    }
                    Keycode::M => {
                        // Keep the same moment in time when flipping direction.
                        request.mode = match request.mode {
                            CountMode::Countdown => CountMode::CountUp,
                            CountMode::CountUp => CountMode::Countdown,
                        };
                        request.value = TOTAL_DAYS - request.value;
                        info!("Mode: {:?}", request.mode);
                    }
                    Keycode::I => request.show_icon = !request.show_icon,
                    Keycode::T => {
                        dark = !dark;
                        info!("Appearance: {}", if dark { "dark" } else { "light" });
                    }
                    Keycode::P => {
                        total_known = !total_known;
                        info!("Total days known: {total_known}");
                    }
                    Keycode::Up => request.value += 1,
                    Keycode::Down => request.value -= 1,
                    Keycode::Right => request.value += 365,
                    Keycode::Left => request.value -= 365,
                    Keycode::Space => auto_advance = !auto_advance,
                    _ => {}
                },
                _ => {}
            }
        }

        if auto_advance && last_tick.elapsed() >= DAY_TICK {
            last_tick = Instant::now();
            request.value += match request.mode {
                CountMode::Countdown => -1,
                CountMode::CountUp => 1,
            };
        }

        let (tint, bar_bg) = if dark { (WHITE, Rgb888::new(40, 40, 40)) } else { (BLACK, Rgb888::new(230, 230, 230)) };
        let profile = FixedProfile {
            total_days: total_known.then_some(TOTAL_DAYS),
            days_lived: None,
        };
        let renderer = StatusItemRenderer::new(&profile, &icons, &tint);
        let content = renderer.render(&request);

        display.clear(BLACK).ok();
        Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, BAR_HEIGHT))
            .into_styled(PrimitiveStyle::with_fill(bar_bg))
            .draw(&mut display)
            .ok();

        if let Some(image) = &content.image {
            let y = (BAR_HEIGHT as i32 - image.height() as i32) / 2;
            let x = SCREEN_WIDTH as i32 - image.width() as i32 - 8;
            present(&mut display, image, Point::new(x, y), bar_bg);
        } else if let Some(text) = &content.text {
            let style = MonoTextStyle::new(STATUS_FONT, tint);
            let size = measure_text(text, STATUS_FONT);
            let pos = Point::new(
                SCREEN_WIDTH as i32 - size.width as i32 - 8,
                (BAR_HEIGHT as i32 - size.height as i32) / 2,
            );
            Text::with_text_style(text, pos, style, LEFT_TOP).draw(&mut display).ok();
        }

        let preview = renderer.render_preview_text(&request);
        let small = MonoTextStyle::new(&FONT_6X10, WHITE);
        Text::with_text_style(&preview, Point::new(4, BAR_HEIGHT as i32 + 4), small, LEFT_TOP)
            .draw(&mut display)
            .ok();

        for (row, (level, line)) in logger::LOGGER.snapshot().iter().enumerate() {
            let pos = Point::new(4, BAR_HEIGHT as i32 + 20 + row as i32 * 12);
            Text::with_text_style(line, pos, MonoTextStyle::new(&FONT_6X10, level_color(*level)), LEFT_TOP)
                .draw(&mut display)
                .ok();
        }

        window.update(&display);

        if let Some(sleep) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(sleep);
        }
    }
}
