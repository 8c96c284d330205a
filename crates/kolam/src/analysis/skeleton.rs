//! Zhang-Suen thinning.
//!
//! ## Rust Lesson #25: Working on a Padded Copy
//!
//! Neighbour lookups near the image edge would need bounds checks on every
//! access. Copying the mask into a buffer with a one-pixel background frame
//! lets every interior pixel read its eight neighbours directly, and makes
//! pixels outside the image count as background.

use image::{GrayImage, Luma};

/// Thin a binary mask (non-zero = foreground) to a one-pixel-wide skeleton.
///
/// Returns a 0/255 mask of the same size.
pub fn skeletonize(mask: &GrayImage) -> GrayImage {
    let (width, height) = mask.dimensions();
    let stride = width as usize + 2;
    let mut grid = vec![0u8; stride * (height as usize + 2)];
    for (x, y, p) in mask.enumerate_pixels() {
        if p[0] != 0 {
            grid[(y as usize + 1) * stride + x as usize + 1] = 1;
        }
    }

    let mut doomed = Vec::new();
    loop {
        let mut changed = false;
        for first_pass in [true, false] {
            doomed.clear();
            for y in 1..=height as usize {
                for x in 1..=width as usize {
                    let at = y * stride + x;
                    if grid[at] == 1 && removable(&grid, at, stride, first_pass) {
                        doomed.push(at);
                    }
                }
            }
            for &at in &doomed {
                grid[at] = 0;
            }
            changed |= !doomed.is_empty();
        }
        if !changed {
            break;
        }
    }

    GrayImage::from_fn(width, height, |x, y| {
        Luma([grid[(y as usize + 1) * stride + x as usize + 1] * 255])
    })
}

/// Zhang-Suen deletion test for one sub-iteration.
fn removable(grid: &[u8], at: usize, stride: usize, first_pass: bool) -> bool {
    // P2..P9, clockwise from north
    let n = [
        grid[at - stride],
        grid[at - stride + 1],
        grid[at + 1],
        grid[at + stride + 1],
        grid[at + stride],
        grid[at + stride - 1],
        grid[at - 1],
        grid[at - stride - 1],
    ];
    let neighbours: u8 = n.iter().sum();
    if !(2..=6).contains(&neighbours) {
        return false;
    }
    let transitions = (0..8).filter(|&i| n[i] == 0 && n[(i + 1) % 8] == 1).count();
    if transitions != 1 {
        return false;
    }
    let (p2, p4, p6, p8) = (n[0], n[2], n[4], n[6]);
    if first_pass {
        p2 * p4 * p6 == 0 && p4 * p6 * p8 == 0
    } else {
        p2 * p4 * p8 == 0 && p2 * p6 * p8 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thick_bar_becomes_a_line() {
        let mut mask = GrayImage::new(40, 15);
        for y in 5..10 {
            for x in 5..35 {
                mask.put_pixel(x, y, Luma([255]));
            }
        }
        let skeleton = skeletonize(&mask);

        for x in 10..30 {
            let column: Vec<u32> = (0..15).filter(|&y| skeleton.get_pixel(x, y)[0] == 255).collect();
            assert_eq!(column, vec![7], "column {}", x);
        }
        assert!(skeleton.pixels().all(|p| p[0] == 0 || p[0] == 255));
    }

    #[test]
    fn empty_and_single_pixel() {
        let empty = GrayImage::new(8, 8);
        assert!(skeletonize(&empty).pixels().all(|p| p[0] == 0));

        let mut dot = GrayImage::new(8, 8);
        dot.put_pixel(3, 3, Luma([255]));
        assert_eq!(skeletonize(&dot).get_pixel(3, 3)[0], 255);
    }

    #[test]
    fn foreground_touching_the_border_is_thinned() {
        // Pixels outside the image count as background.
        let full = GrayImage::from_pixel(30, 5, Luma([255]));
        let skeleton = skeletonize(&full);
        for x in 8..22 {
            let column: Vec<u32> = (0..5).filter(|&y| skeleton.get_pixel(x, y)[0] == 255).collect();
            assert_eq!(column, vec![2], "column {}", x);
        }
    }
}
