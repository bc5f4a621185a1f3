//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are traced independently
//! and in parallel using rayon. Samples come from the pixel's row-major
//! index, so the tiling never changes the result.

use crate::{Color, Sampler, Tracer, World};

/// A rectangular region of the image, in scan coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// First column of the bucket
    pub x: u32,
    /// First scan row of the bucket
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 32;

/// Split an image into buckets, row by row. Edge buckets are clipped.
///
/// A bucket size of zero is treated as one.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh));
            x += bucket_size;
        }
        y += bucket_size;
    }

    buckets
}

/// Trace a single bucket.
///
/// Returns averaged linear pixel colors in row-major order within the bucket.
pub fn render_bucket(
    bucket: &Bucket,
    world: &World,
    tracer: &dyn Tracer,
    sampler: &dyn Sampler,
) -> BucketResult {
    let hres = world.vp.hres as usize;
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for row in bucket.y..bucket.y + bucket.height {
        for column in bucket.x..bucket.x + bucket.width {
            let samples = sampler.bundle(row as usize * hres + column as usize);
            pixels.push(world.render_pixel(tracer, samples, row, column));
        }
    }

    log::debug!(
        "Bucket at ({}, {}) done: {} pixels",
        bucket.x,
        bucket.y,
        pixels.len()
    );

    BucketResult::new(*bucket, pixels)
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

impl BucketResult {
    /// Create a new bucket result.
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }
}
