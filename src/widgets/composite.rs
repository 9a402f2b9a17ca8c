//! Icon-plus-text status content.
//!
//! The icon sits at the left edge, the text follows after a fixed gap, and
//! both are centered on the taller of the two.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};

use crate::bitmap::Bitmap;
use crate::config::ICON_TEXT_SPACING;
use crate::styles::LEFT_TOP;

/// Pixel size of `text` set in `font`.
pub fn measure_text(text: &str, font: &MonoFont<'_>) -> Size {
    let style = MonoTextStyle::new(font, Rgb888::BLACK);
    let metrics = style.measure_string(text, Point::zero(), Baseline::Top);
    Size::new(metrics.bounding_box.size.width, font.character_size.height)
}

/// Lay `icon` and `text` side by side on one transparent canvas.
///
/// Width is icon + gap + text; height is the larger of the two.
pub fn compose_icon_and_text(icon: &Bitmap, text: &str, font: &MonoFont<'_>, color: Rgb888) -> Bitmap {
    let text_size = measure_text(text, font);
    let width = icon.width() + ICON_TEXT_SPACING + text_size.width;
    let height = icon.height().max(text_size.height);
    let mut canvas = Bitmap::new(Size::new(width, height));

    let icon_y = ((height - icon.height()) / 2) as i32;
    canvas.blit(icon, Point::new(0, icon_y));

    let text_pos = Point::new(
        (icon.width() + ICON_TEXT_SPACING) as i32,
        ((height - text_size.height) / 2) as i32,
    );
    Text::with_text_style(text, text_pos, MonoTextStyle::new(font, color), LEFT_TOP)
        .draw(&mut canvas)
        .ok();

    canvas
}
