//! Dot detection: small background regions enclosed by the foreground mask.
//!
//! Chalk dots are brighter than the floor they sit on, so every mask marks
//! them 0 and the surrounding floor or its edge halo 255. A dot is therefore
//! a closed border whose centre lands on a 0 pixel. Each traced border is
//! kept when it passes the area, inertia and convexity filters, and borders
//! whose centres fall within `min_dist_between_blobs` of an accepted dot
//! are folded into it.

use image::GrayImage;
use imageproc::contours::find_contours;
use imageproc::geometry::{contour_area, convex_hull};
use imageproc::point::Point as GridPoint;
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Shape filters a border must pass to count as a dot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlobParams {
    /// Smallest accepted polygon area in pixels (inclusive).
    pub min_area: u32,
    /// Largest accepted polygon area in pixels (inclusive).
    pub max_area: u32,
    /// Smallest accepted ratio of area to convex hull area.
    pub min_convexity: f64,
    /// Smallest accepted ratio of the minor to the major second moment.
    pub min_inertia_ratio: f64,
    /// Centres closer than this belong to the same dot.
    pub min_dist_between_blobs: f64,
}

impl Default for BlobParams {
    fn default() -> Self {
        Self {
            min_area: 2,
            max_area: 1000,
            min_convexity: 0.95,
            min_inertia_ratio: 0.1,
            min_dist_between_blobs: 10.0,
        }
    }
}

/// Area, centroid and elongation of a closed polygon.
#[derive(Debug, Clone, Copy)]
struct Shape {
    area: f64,
    center: Point,
    inertia_ratio: f64,
}

impl Shape {
    /// Polygon moments by Green's theorem. `None` for zero-area borders.
    fn of(points: &[GridPoint<i32>]) -> Option<Self> {
        let (mut a00, mut a10, mut a01) = (0.0, 0.0, 0.0);
        let (mut a20, mut a11, mut a02) = (0.0, 0.0, 0.0);

        let mut prev = *points.last()?;
        for &p in points {
            let (x0, y0) = (prev.x as f64, prev.y as f64);
            let (x1, y1) = (p.x as f64, p.y as f64);
            let cross = x0 * y1 - x1 * y0;
            a00 += cross;
            a10 += cross * (x0 + x1);
            a01 += cross * (y0 + y1);
            a20 += cross * (x0 * x0 + x0 * x1 + x1 * x1);
            a11 += cross * (x0 * (2.0 * y0 + y1) + x1 * (y0 + 2.0 * y1));
            a02 += cross * (y0 * y0 + y0 * y1 + y1 * y1);
            prev = p;
        }
        // Hole borders run the other way round.
        let sign = if a00 < 0.0 { -1.0 } else { 1.0 };

        let m00 = sign * a00 / 2.0;
        if m00 == 0.0 {
            return None;
        }
        let m10 = sign * a10 / 6.0;
        let m01 = sign * a01 / 6.0;
        let (cx, cy) = (m10 / m00, m01 / m00);

        let mu20 = sign * a20 / 12.0 - cx * m10;
        let mu11 = sign * a11 / 24.0 - cx * m01;
        let mu02 = sign * a02 / 12.0 - cy * m01;

        let spread = ((2.0 * mu11).powi(2) + (mu20 - mu02).powi(2)).sqrt();
        let inertia_ratio = if spread > 0.01 {
            let mean = 0.5 * (mu20 + mu02);
            (mean - 0.5 * spread) / (mean + 0.5 * spread)
        } else {
            1.0
        };

        Some(Self { area: m00, center: Point::new(cx, cy), inertia_ratio })
    }
}

fn convexity(points: &[GridPoint<i32>], area: f64) -> f64 {
    let hull_area = contour_area(&convex_hull(points.to_vec()));
    if hull_area > 0.0 {
        area / hull_area
    } else {
        1.0
    }
}

fn is_background(mask: &GrayImage, center: Point) -> bool {
    let (x, y) = (center.x.round(), center.y.round());
    if x < 0.0 || y < 0.0 || x >= mask.width() as f64 || y >= mask.height() as f64 {
        return false;
    }
    mask.get_pixel(x as u32, y as u32)[0] == 0
}

/// Centres of the dots in `mask`, in the raster order their borders are found.
pub fn detect_blobs(mask: &GrayImage, params: &BlobParams) -> Vec<Point> {
    let mut dots: Vec<Point> = Vec::new();

    for contour in find_contours::<i32>(mask) {
        let Some(shape) = Shape::of(&contour.points) else {
            continue;
        };
        if shape.area < params.min_area as f64 || shape.area > params.max_area as f64 {
            continue;
        }
        if shape.inertia_ratio < params.min_inertia_ratio {
            continue;
        }
        if convexity(&contour.points, shape.area) < params.min_convexity {
            continue;
        }
        if !is_background(mask, shape.center) {
            continue;
        }
        if dots.iter().any(|d| d.distance(shape.center) < params.min_dist_between_blobs) {
            continue;
        }
        dots.push(shape.center);
    }

    dots
}
