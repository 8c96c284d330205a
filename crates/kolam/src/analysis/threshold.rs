//! Binarization: darker pixels become foreground (255), the rest 0.

use image::{GrayImage, Luma};
use imageproc::contrast::{threshold, ThresholdType};

/// Global inverted threshold: `> level` is background, the rest foreground.
pub fn inverted_threshold(gray: &GrayImage, level: u8) -> GrayImage {
    threshold(gray, level, ThresholdType::BinaryInverted)
}

/// Standard deviation of the Gaussian window for an odd block size.
pub fn block_sigma(block: u32) -> f64 {
    0.3 * ((block as f64 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Normalized 1-D Gaussian weights of length `block`.
fn gaussian_kernel(block: u32) -> Vec<f64> {
    let sigma = block_sigma(block);
    let half = (block / 2) as f64;
    let weights: Vec<f64> = (0..block)
        .map(|i| {
            let d = i as f64 - half;
            (-(d * d) / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let total: f64 = weights.iter().sum();
    weights.into_iter().map(|w| w / total).collect()
}

/// Gaussian-weighted local mean, edges replicated, rounded back to u8.
pub fn gaussian_local_mean(gray: &GrayImage, block: u32) -> GrayImage {
    let (width, height) = gray.dimensions();
    if width == 0 || height == 0 {
        return gray.clone();
    }
    let kernel = gaussian_kernel(block);
    let half = (block / 2) as i64;
    let clamp = |v: i64, len: u32| v.clamp(0, len as i64 - 1) as u32;

    // Horizontal pass into a float buffer, then vertical pass.
    let mut rows = vec![0.0f64; width as usize * height as usize];
    for y in 0..height {
        for x in 0..width {
            let sum: f64 = kernel
                .iter()
                .enumerate()
                .map(|(k, w)| w * gray.get_pixel(clamp(x as i64 + k as i64 - half, width), y)[0] as f64)
                .sum();
            rows[(y * width + x) as usize] = sum;
        }
    }

    GrayImage::from_fn(width, height, |x, y| {
        let sum: f64 = kernel
            .iter()
            .enumerate()
            .map(|(k, w)| w * rows[(clamp(y as i64 + k as i64 - half, height) * width + x) as usize])
            .sum();
        Luma([sum.round().clamp(0.0, 255.0) as u8])
    })
}

/// Inverted adaptive threshold against the Gaussian local mean.
///
/// A pixel is foreground when it is at least `floor(c)` darker than its
/// neighbourhood. A uniform image therefore has no foreground at all for
/// any `c >= 1`.
pub fn adaptive_threshold(gray: &GrayImage, block: u32, c: f64) -> GrayImage {
    let mean = gaussian_local_mean(gray, block);
    let delta = c.floor() as i32;
    GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        let diff = gray.get_pixel(x, y)[0] as i32 - mean.get_pixel(x, y)[0] as i32;
        Luma([if diff <= -delta { 255 } else { 0 }])
    })
}
