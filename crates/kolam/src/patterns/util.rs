//! Shared utilities for pattern generation.
//!
//! Most kolam curves are polar: a radius as a function of angle, sampled at a
//! fixed resolution. These helpers keep the sampling identical across
//! patterns.

use std::f64::consts::PI;

use crate::geometry::{linspace, Point};
use crate::primitive::Primitive;
use crate::request::PatternRequest;

/// Samples per closed curve (radial rings, flower, rosette).
pub const CURVE_SAMPLES: usize = 1000;

/// Samples along the whole spiral, regardless of turn count.
pub const SPIRAL_SAMPLES: usize = 2000;

/// Sample `r(theta)` over `[0, max_theta]` and return the cartesian points.
///
/// Negative radii are kept as-is, which reflects the point through the
/// origin (this is what gives rose curves their petals).
pub fn polar_curve<F>(max_theta: f64, samples: usize, r: F) -> Vec<Point>
where
    F: Fn(f64) -> f64,
{
    linspace(0.0, max_theta, samples)
        .into_iter()
        .map(|theta| Point::polar(r(theta), theta))
        .collect()
}

/// A full turn, `[0, 2π]`, at [`CURVE_SAMPLES`] resolution.
pub fn closed_polar_curve<F>(r: F) -> Vec<Point>
where
    F: Fn(f64) -> f64,
{
    polar_curve(2.0 * PI, CURVE_SAMPLES, r)
}

/// Stroke a point list with the request's line color and width.
#[inline]
pub fn stroke(points: Vec<Point>, request: &PatternRequest) -> Primitive {
    Primitive::Polyline {
        points,
        color: request.line_color,
        line_width: request.line_width,
    }
}
