//! Core geometry types for kolam drawings.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Debug` = lets you print with `{:?}`
//! - `Clone` / `Copy` = can duplicate the value (Copy = implicitly, small values only)
//! - `PartialEq` = can compare with `==`
//!
//! All drawing coordinates are mathematical: x to the right, y up.

use serde::Serialize;

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from the origin along `theta` (radians).
    #[inline]
    pub fn polar(radius: f64, theta: f64) -> Self {
        Self::new(radius * theta.cos(), radius * theta.sin())
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An axis-aligned rectangle: the visible region of a drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Square bounds centered on the origin with the given half extent.
    pub fn symmetric(half: f64) -> Self {
        Self::new(-half, -half, half, half)
    }

    /// Smallest bounds containing every point, or None for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        points.into_iter().fold(None, |acc: Option<Bounds>, p| {
            Some(match acc {
                None => Bounds::new(p.x, p.y, p.x, p.y),
                Some(b) => Bounds::new(b.min_x.min(p.x), b.min_y.min(p.y), b.max_x.max(p.x), b.max_y.max(p.y)),
            })
        })
    }

    /// Merge two bounds into the smallest bounds containing both.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    /// Grow by `fraction` of the width/height on every side.
    ///
    /// A degenerate axis (zero extent) is padded by `fraction` units instead
    /// so the result always has a positive area.
    pub fn with_margin(&self, fraction: f64) -> Bounds {
        let pad_x = if self.width() > 0.0 { self.width() * fraction } else { fraction };
        let pad_y = if self.height() > 0.0 { self.height() * fraction } else { fraction };
        Bounds::new(self.min_x - pad_x, self.min_y - pad_y, self.max_x + pad_x, self.max_y + pad_y)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new((self.min_x + self.max_x) / 2.0, (self.min_y + self.max_y) / 2.0)
    }
}

/// `n` evenly spaced values from `start` to `end`, both endpoints included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.distance(p2), 5.0); // 3-4-5 triangle
    }

    #[test]
    fn bounds_from_points() {
        let b = Bounds::from_points([Point::new(1.0, -2.0), Point::new(-3.0, 4.0), Point::new(0.0, 0.0)]);
        assert_eq!(b, Some(Bounds::new(-3.0, -2.0, 1.0, 4.0)));
        assert_eq!(Bounds::from_points(Vec::new()), None);
    }

    #[test]
    fn margin_grows_each_side() {
        let b = Bounds::new(0.0, 0.0, 10.0, 20.0).with_margin(0.05);
        assert!((b.min_x + 0.5).abs() < 1e-12);
        assert!((b.max_y - 21.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_margin_has_area() {
        let b = Bounds::new(2.0, 0.0, 2.0, 5.0).with_margin(0.05);
        assert!(b.width() > 0.0);
    }

    #[test]
    fn linspace_includes_endpoints() {
        let values = linspace(0.0, 1.0, 5);
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }
}
