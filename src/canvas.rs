//! Drawing surface for the UI
//!
//! [`Canvas`] is an 8-bit grayscale image that `embedded-graphics` can draw on.
//! [`crate::display::EpaperDisplay::render`] takes the image behind it, see
//! [`Canvas::image`].

use core::convert::Infallible;

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_5X8, FONT_6X10, FONT_7X13, FONT_9X18};
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Pixel, Size};
use image::{GrayImage, Luma};

use crate::waveshare2::Layout;

const BLACK: Luma<u8> = Luma([0]);
const WHITE: Luma<u8> = Luma([255]);

fn luma(color: BinaryColor) -> Luma<u8> {
    match color {
        // On = black pixels
        BinaryColor::On => BLACK,
        BinaryColor::Off => WHITE,
    }
}

/// Closest built-in monospace font for a font size in pixels
///
/// Sizes above 20 (the huge face font) fall back to the largest font.
pub fn mono_font(size: u32) -> &'static MonoFont<'static> {
    match size {
        0..=8 => &FONT_5X8,
        9..=10 => &FONT_6X10,
        11..=13 => &FONT_7X13,
        14..=18 => &FONT_9X18,
        _ => &FONT_10X20,
    }
}

/// White canvas to draw the UI on
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: GrayImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: GrayImage::from_pixel(width, height, WHITE),
        }
    }

    /// Canvas with the size the layout is drawn for
    pub fn for_layout(layout: &Layout) -> Self {
        Self::new(layout.width, layout.height)
    }

    pub fn image(&self) -> &GrayImage {
        &self.image
    }

    pub fn into_image(self) -> GrayImage {
        self.image
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }
}

impl DrawTarget for Canvas {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (width, height) = self.image.dimensions();
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
                continue;
            };
            if x < width && y < height {
                self.image.put_pixel(x, y, luma(color));
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let value = luma(color);
        for pixel in self.image.pixels_mut() {
            *pixel = value;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{Line, PrimitiveStyle};

    #[test]
    fn font_sizes_map_to_mono_fonts() {
        assert_eq!(mono_font(8).character_size, Size::new(5, 8));
        assert_eq!(mono_font(10).character_size, Size::new(6, 10));
        assert_eq!(mono_font(35).character_size, Size::new(10, 20));
    }

    #[test]
    fn new_canvas_is_white_and_layout_sized() {
        let canvas = Canvas::for_layout(&Layout::BLACK);
        assert_eq!(canvas.size(), Size::new(250, 122));
        assert!(canvas.image().pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn on_pixels_are_black() {
        let mut canvas = Canvas::new(8, 4);
        Pixel(Point::new(3, 2), BinaryColor::On)
            .draw(&mut canvas)
            .unwrap();
        assert_eq!(*canvas.image().get_pixel(3, 2), BLACK);
        assert_eq!(*canvas.image().get_pixel(2, 2), WHITE);
    }

    #[test]
    fn pixels_outside_are_ignored() {
        let mut canvas = Canvas::new(8, 4);
        Line::new(Point::new(-4, 1), Point::new(20, 1))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut canvas)
            .unwrap();
        assert!((0..8).all(|x| *canvas.image().get_pixel(x, 1) == BLACK));
        assert!((0..8).all(|x| *canvas.image().get_pixel(x, 0) == WHITE));
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut canvas = Canvas::new(8, 4);
        canvas.clear(BinaryColor::On).unwrap();
        assert!(canvas.image().pixels().all(|p| *p == BLACK));
        canvas.clear(BinaryColor::Off).unwrap();
        assert_eq!(canvas, Canvas::new(8, 4));
    }
}
