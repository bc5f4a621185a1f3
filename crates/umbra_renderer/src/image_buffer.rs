//! Linear image buffer and the raw float image format.
//!
//! The raw format is a headerless stream of `width * height * 3` IEEE
//! single-precision floats in native byte order (little-endian on every
//! supported target). Pixels are channel-interleaved (R, G, B), rows are
//! row-major and written top row first, the same orientation the display
//! sink receives. Readers must know the resolution out of band.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use bytemuck::{Pod, Zeroable};
use umbra_math::{Color, BLACK};

use crate::{RenderError, RenderResult};

/// One pixel of the raw float format.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
struct RawPixel {
    r: f32,
    g: f32,
    b: f32,
}

const RAW_PIXEL_SIZE: usize = std::mem::size_of::<RawPixel>();

/// Averaged, not yet tone-mapped pixel colors in scan order.
///
/// Row 0 is the bottom scan row (smallest world y), matching the render
/// loop's traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![BLACK; (width * height) as usize],
        }
    }

    /// Get the pixel at (column, row).
    pub fn get(&self, column: u32, row: u32) -> Color {
        self.pixels[(row * self.width + column) as usize]
    }

    /// Set the pixel at (column, row).
    pub fn set(&mut self, column: u32, row: u32, color: Color) {
        self.pixels[(row * self.width + column) as usize] = color;
    }

    /// Write the raw float image, top row first.
    pub fn write_raw<W: Write>(&self, writer: &mut W) -> RenderResult<()> {
        let raw: Vec<RawPixel> = (0..self.height)
            .rev()
            .flat_map(|row| (0..self.width).map(move |column| (column, row)))
            .map(|(column, row)| {
                let c = self.get(column, row);
                RawPixel { r: c.x, g: c.y, b: c.z }
            })
            .collect();

        writer.write_all(bytemuck::cast_slice(&raw))?;
        Ok(())
    }

    /// Write the raw float image to a file.
    pub fn save_raw<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_raw(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Read a raw float image of the given resolution.
    pub fn read_raw<R: Read>(reader: &mut R, width: u32, height: u32) -> RenderResult<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        let expected = width as usize * height as usize * RAW_PIXEL_SIZE;
        if bytes.len() != expected {
            return Err(RenderError::RawSize {
                expected,
                actual: bytes.len(),
            });
        }

        let mut image = Self::new(width, height);
        let mut screen_order = bytes
            .chunks_exact(RAW_PIXEL_SIZE)
            .map(bytemuck::pod_read_unaligned::<RawPixel>);

        for row in (0..height).rev() {
            for column in 0..width {
                if let Some(p) = screen_order.next() {
                    image.set(column, row, Color::new(p.r, p.g, p.b));
                }
            }
        }

        Ok(image)
    }

    /// Read a raw float image file of the given resolution.
    pub fn load_raw<P: AsRef<Path>>(path: P, width: u32, height: u32) -> RenderResult<Self> {
        let mut reader = BufReader::new(File::open(path)?);
        Self::read_raw(&mut reader, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floats(bytes: &[u8]) -> Vec<f32> {
        bytes
            .chunks_exact(4)
            .map(|b| f32::from_ne_bytes([b[0], b[1], b[2], b[3]]))
            .collect()
    }

    #[test]
    fn test_raw_layout_is_top_row_first() {
        let mut image = ImageBuffer::new(2, 2);
        image.set(0, 0, Color::new(0.1, 0.2, 0.3)); // bottom left
        image.set(1, 1, Color::new(0.7, 0.8, 0.9)); // top right

        let mut bytes = Vec::new();
        image.write_raw(&mut bytes).unwrap();
        assert_eq!(bytes.len(), 2 * 2 * 3 * 4);

        let values = floats(&bytes);
        // Top row: (0,1) black, then (1,1)
        assert_eq!(&values[0..6], &[0.0, 0.0, 0.0, 0.7, 0.8, 0.9]);
        // Bottom row: (0,0), then (1,0) black
        assert_eq!(&values[6..12], &[0.1, 0.2, 0.3, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_raw_preserves_unclamped_values() {
        let mut image = ImageBuffer::new(3, 1);
        image.set(2, 0, Color::new(4.5, -1.0, 0.25));

        let mut bytes = Vec::new();
        image.write_raw(&mut bytes).unwrap();
        let read = ImageBuffer::read_raw(&mut bytes.as_slice(), 3, 1).unwrap();
        assert_eq!(read, image);
    }

    #[test]
    fn test_raw_size_mismatch() {
        let bytes = vec![0u8; 20];
        let result = ImageBuffer::read_raw(&mut bytes.as_slice(), 2, 2);
        match result {
            Err(RenderError::RawSize { expected, actual }) => {
                assert_eq!(expected, 48);
                assert_eq!(actual, 20);
            }
            other => panic!("expected size mismatch, got {:?}", other.map(|i| i.width)),
        }
    }

    #[test]
    fn test_raw_file() {
        let path = std::env::temp_dir().join("umbra_image_buffer_test.bin");
        let mut image = ImageBuffer::new(4, 3);
        image.set(3, 2, Color::new(1.0, 0.5, 0.25));
        image.save_raw(&path).unwrap();

        assert_eq!(std::fs::metadata(&path).unwrap().len(), 4 * 3 * 12);
        let read = ImageBuffer::load_raw(&path, 4, 3).unwrap();
        assert_eq!(read.get(3, 2), Color::new(1.0, 0.5, 0.25));

        std::fs::remove_file(&path).ok();
    }
}
