//! Edges and outer contours.

use image::{GrayImage, Luma};
use imageproc::contours::{find_contours, BorderType};
use imageproc::edges::canny;

use crate::geometry::Point;

/// Canny edge mask (255 on edges).
///
/// Callers guarantee `low <= high`.
pub fn edge_mask(gray: &GrayImage, low: f32, high: f32) -> GrayImage {
    canny(gray, low, high)
}

/// Outermost contours of a mask and the mask they draw.
///
/// Only borders that are not nested inside another region are kept. Each
/// is drawn one pixel wide; border-following points are 8-adjacent, so
/// plotting them draws the closed outline.
pub fn external_contours(mask: &GrayImage) -> (Vec<Vec<Point>>, GrayImage) {
    let mut drawn = GrayImage::new(mask.width(), mask.height());
    let contours: Vec<Vec<Point>> = find_contours::<i32>(mask)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
        .map(|c| {
            for p in &c.points {
                drawn.put_pixel(p.x as u32, p.y as u32, Luma([255]));
            }
            c.points.iter().map(|p| Point::new(p.x as f64, p.y as f64)).collect()
        })
        .collect();
    (contours, drawn)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(mask: &mut GrayImage, x0: u32, y0: u32, side: u32) {
        for y in y0..y0 + side {
            for x in x0..x0 + side {
                mask.put_pixel(x, y, Luma([255]));
            }
        }
    }

    #[test]
    fn nested_regions_keep_only_the_outer_border() {
        // a ring with a separate blob inside its hole
        let mut mask = GrayImage::new(30, 30);
        square(&mut mask, 2, 2, 20);
        for y in 5..19 {
            for x in 5..19 {
                mask.put_pixel(x, y, Luma([0]));
            }
        }
        square(&mut mask, 10, 10, 3);
        square(&mut mask, 25, 25, 3);

        let (contours, drawn) = external_contours(&mask);
        assert_eq!(contours.len(), 2);
        // the outline of the big square, not its interior
        assert_eq!(drawn.get_pixel(2, 10)[0], 255);
        assert_eq!(drawn.get_pixel(3, 10)[0], 0);
        assert_eq!(drawn.get_pixel(11, 11)[0], 0);
    }

    #[test]
    fn edges_of_a_bright_square() {
        let mut gray = GrayImage::new(40, 40);
        square(&mut gray, 10, 10, 20);
        let edges = edge_mask(&gray, 50.0, 150.0);
        assert!(edges.pixels().any(|p| p[0] == 255));
        assert_eq!(edges.get_pixel(20, 20)[0], 0);
    }

    #[test]
    fn blank_mask_has_no_contours() {
        let (contours, drawn) = external_contours(&GrayImage::new(10, 10));
        assert!(contours.is_empty());
        assert!(drawn.pixels().all(|p| p[0] == 0));
    }
}
