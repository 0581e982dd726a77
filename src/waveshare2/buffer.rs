//! Canvas to panel buffer conversion
//!
//! The panel RAM is one bit per pixel, MSB first, rows of `ceil(WIDTH / 8)` bytes in
//! native portrait orientation. A set bit is white, so the buffer starts as `0xFF` and
//! black pixels clear their bit.
//!
//! Canvases may be drawn either in portrait (`WIDTH x HEIGHT`) or in landscape
//! (`HEIGHT x WIDTH`), the latter is rotated onto the panel.

use image::GrayImage;

/// Luma values below this are black
pub const THRESHOLD: u8 = 128;

/// The canvas can not be mapped onto the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("canvas is {width}x{height}, panel takes at most {panel_width}x{panel_height} or {panel_height}x{panel_width}")]
pub struct BufferError {
    pub width: u32,
    pub height: u32,
    pub panel_width: u32,
    pub panel_height: u32,
}

/// Computes the needed buffer length. Takes care of rounding up in case width
/// is not divisible by 8.
pub const fn buffer_len(width: u32, height: u32) -> usize {
    (width.div_ceil(8) * height) as usize
}

/// Pack `canvas` into the buffer layout of a `panel_width x panel_height` panel
///
/// A canvas wider than tall is rotated onto the panel. A canvas smaller than the panel
/// is placed in its top-left corner (top-left of the landscape view when rotated), the
/// uncovered pixels stay white.
pub fn get_buffer(
    canvas: &GrayImage,
    panel_width: u32,
    panel_height: u32,
) -> Result<Vec<u8>, BufferError> {
    let (width, height) = canvas.dimensions();
    let landscape = width > height;
    let fits = if landscape {
        width <= panel_height && height <= panel_width
    } else {
        width <= panel_width && height <= panel_height
    };
    if !fits {
        return Err(BufferError {
            width,
            height,
            panel_width,
            panel_height,
        });
    }

    let line_width = panel_width.div_ceil(8) as usize;
    let mut buffer = vec![0xFFu8; buffer_len(panel_width, panel_height)];
    for (x, y, pixel) in canvas.enumerate_pixels() {
        if pixel[0] >= THRESHOLD {
            continue;
        }
        let (panel_x, panel_y) = if landscape {
            (y, panel_height - x - 1)
        } else {
            (x, y)
        };
        let index = panel_y as usize * line_width + panel_x as usize / 8;
        buffer[index] &= !(0x80 >> (panel_x % 8));
    }

    Ok(buffer)
}

/// Unpack a panel buffer back into a portrait image, white for set bits
pub fn to_image(buffer: &[u8], panel_width: u32, panel_height: u32) -> Option<GrayImage> {
    if buffer.len() != buffer_len(panel_width, panel_height) {
        return None;
    }
    let line_width = panel_width.div_ceil(8) as usize;
    Some(GrayImage::from_fn(panel_width, panel_height, |x, y| {
        let byte = buffer[y as usize * line_width + x as usize / 8];
        if byte & (0x80 >> (x % 8)) != 0 {
            image::Luma([255])
        } else {
            image::Luma([0])
        }
    }))
}
