//! Visualizations of analysis results, encoded as PNG.

use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat, Rgb, RgbImage};
use imageproc::drawing::draw_filled_circle_mut;

use crate::error::{KolamError, Result};
use crate::geometry::Point;

/// Radius of a drawn dot marker, in pixels.
pub const DOT_MARKER_RADIUS: i32 = 3;

const RED: Rgb<u8> = Rgb([255, 0, 0]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const SKELETON_GRAY: Rgb<u8> = Rgb([128, 128, 128]);

pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut data), ImageFormat::Png)
        .map_err(|e| KolamError::Render(format!("png encode: {}", e)))?;
    Ok(data)
}

fn draw_dots(canvas: &mut RgbImage, dots: &[Point], color: Rgb<u8>) {
    for dot in dots {
        let center = (dot.x.round() as i32, dot.y.round() as i32);
        draw_filled_circle_mut(canvas, center, DOT_MARKER_RADIUS, color);
    }
}

/// Grayscale photo with a red marker on every dot.
pub fn dot_overlay(gray: &GrayImage, dots: &[Point]) -> RgbImage {
    let mut canvas = DynamicImage::ImageLuma8(gray.clone()).to_rgb8();
    draw_dots(&mut canvas, dots, RED);
    canvas
}

/// Grayscale photo, skeleton pixels in gray, dots in black.
pub fn skeleton_composite(gray: &GrayImage, skeleton: &GrayImage, dots: &[Point]) -> RgbImage {
    let mut canvas = DynamicImage::ImageLuma8(gray.clone()).to_rgb8();
    for (x, y, p) in skeleton.enumerate_pixels() {
        if p[0] != 0 && x < canvas.width() && y < canvas.height() {
            canvas.put_pixel(x, y, SKELETON_GRAY);
        }
    }
    draw_dots(&mut canvas, dots, BLACK);
    canvas
}
