//! RGBA canvases for status item output.
//!
//! [`Bitmap`] is the value every renderer returns. It implements
//! `DrawTarget<Color = Rgb888>` so the usual `embedded_graphics` primitives
//! and text draw straight into it as opaque pixels. Translucent drawing goes
//! through a [`Layer`], which composites each pixel at a fixed opacity.
//!
//! Rows are stored top-down (`y = 0` is the top row), which is the
//! `embedded_graphics` convention. Geometry authored for a bottom-left origin
//! is converted before it reaches a canvas (see [`crate::path::geometry`]).

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::colors::{Rgba, blend_over};

/// A transparent-initialized RGBA pixel buffer.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Bitmap {
    /// Create a fully transparent bitmap.
    pub fn new(size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
            pixels: vec![Rgba::TRANSPARENT; (size.width * size.height) as usize],
        }
    }

    #[inline]
    pub const fn width(&self) -> u32 { self.width }

    #[inline]
    pub const fn height(&self) -> u32 { self.height }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> { self.index(Point::new(x, y)).map(|i| self.pixels[i]) }

    /// Row-major pixel data, top row first.
    pub fn pixels(&self) -> &[Rgba] { &self.pixels }

    /// Number of pixels with any coverage.
    pub fn painted_pixels(&self) -> usize { self.pixels.iter().filter(|p| !p.is_transparent()).count() }

    /// Smallest rectangle containing every painted pixel.
    pub fn painted_bounds(&self) -> Option<Rectangle> {
        let mut min = Point::new(i32::MAX, i32::MAX);
        let mut max = Point::new(i32::MIN, i32::MIN);
        let mut any = false;

        for (i, px) in self.pixels.iter().enumerate() {
            if px.is_transparent() {
                continue;
            }
            let x = (i as u32 % self.width) as i32;
            let y = (i as u32 / self.width) as i32;
            min = Point::new(min.x.min(x), min.y.min(y));
            max = Point::new(max.x.max(x), max.y.max(y));
            any = true;
        }

        any.then(|| Rectangle::with_corners(min, max))
    }

    /// Composite `src` over this bitmap with its top-left corner at `offset`.
    /// Parts of `src` outside the canvas are clipped.
    pub fn blit(&mut self, src: &Self, offset: Point) {
        for y in 0..src.height as i32 {
            for x in 0..src.width as i32 {
                let Some(px) = src.pixel(x, y) else { continue };
                if px.is_transparent() {
                    continue;
                }
                if let Some(i) = self.index(offset + Point::new(x, y)) {
                    self.pixels[i] = blend_over(self.pixels[i], px.color, px.alpha);
                }
            }
        }
    }

    /// A drawing view that composites everything at `opacity`.
    pub fn layer(&mut self, opacity: u8) -> Layer<'_> { Layer { bitmap: self, opacity } }

    /// A drawing view that clears every pixel it touches back to transparent.
    pub fn eraser(&mut self) -> Eraser<'_> { Eraser { bitmap: self } }

    #[inline]
    fn index(&self, point: Point) -> Option<usize> {
        let in_bounds =
            point.x >= 0 && point.y >= 0 && (point.x as u32) < self.width && (point.y as u32) < self.height;
        in_bounds.then(|| point.y as usize * self.width as usize + point.x as usize)
    }

    #[inline]
    fn composite(&mut self, point: Point, color: Rgb888, alpha: u8) {
        if let Some(i) = self.index(point) {
            self.pixels[i] = blend_over(self.pixels[i], color, alpha);
        }
    }
}

impl OriginDimensions for Bitmap {
    fn size(&self) -> Size { Size::new(self.width, self.height) }
}

impl DrawTarget for Bitmap {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.composite(point, color, 255);
        }
        Ok(())
    }
}

/// Translucent drawing view over a [`Bitmap`].
///
/// Every pixel drawn through the layer is composited with source-over at the
/// layer opacity. Primitives that touch a pixel twice blend twice, so layers
/// are meant for non-overlapping fills such as bar segments.
pub struct Layer<'a> {
    bitmap: &'a mut Bitmap,
    opacity: u8,
}

impl OriginDimensions for Layer<'_> {
    fn size(&self) -> Size { self.bitmap.size() }
}

impl DrawTarget for Layer<'_> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.bitmap.composite(point, color, self.opacity);
        }
        Ok(())
    }
}

/// Knock-out view over a [`Bitmap`]: drawn pixels become transparent and
/// the drawing color is ignored.
pub struct Eraser<'a> {
    bitmap: &'a mut Bitmap,
}

impl OriginDimensions for Eraser<'_> {
    fn size(&self) -> Size { self.bitmap.size() }
}

impl DrawTarget for Eraser<'_> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, _) in pixels {
            if let Some(i) = self.bitmap.index(point) {
                self.bitmap.pixels[i] = Rgba::TRANSPARENT;
            }
        }
        Ok(())
    }
}
