//! Spiral kolam - a single Archimedean spiral.
//!
//! r = spacing * theta, so `spacing` is the radial growth per radian and
//! the gap between arms is 2π * spacing.

use std::f64::consts::PI;

use crate::primitive::Primitive;
use crate::request::PatternRequest;

use super::util::{polar_curve, stroke, SPIRAL_SAMPLES};

/// Generate the spiral as one polyline starting at the origin.
pub fn generate_spiral(request: &PatternRequest) -> Vec<Primitive> {
    let max_theta = 2.0 * PI * request.turns as f64;
    let points = polar_curve(max_theta, SPIRAL_SAMPLES, |theta| request.spacing * theta);
    vec![stroke(points, request)]
}
