//! Display sinks receiving final 8-bit pixels.

use std::path::Path;

use crate::RenderResult;

/// Receiver of tone-mapped pixels.
///
/// Called exactly once per pixel. `y` is in screen coordinates: row 0 of
/// the scan is written to `y = vres - 1`.
pub trait DisplaySink {
    fn render(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8);
}

/// In-memory RGB8 framebuffer in screen order.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width * height * 3) as usize],
        }
    }

    /// Get the pixel at screen position (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        let i = ((y * self.width + x) * 3) as usize;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Raw RGB bytes, top row first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Convert to an `image` RGB buffer.
    pub fn to_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| image::Rgb(self.get(x, y)))
    }

    /// Save as PNG (or any format `image` infers from the extension).
    pub fn save<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        self.to_image().save(path)?;
        Ok(())
    }
}

impl DisplaySink for PixelBuffer {
    fn render(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        let i = ((y * self.width + x) * 3) as usize;
        self.data[i..i + 3].copy_from_slice(&[r, g, b]);
    }
}
