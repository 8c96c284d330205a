//! Mandala kolam - concentric rings of small circles.
//!
//! Layer `n` sits at radius `0.7 * n * radius` and holds `n_petals * n`
//! circles, so the circle density stays roughly constant outward.

use std::f64::consts::PI;

use crate::geometry::{Bounds, Point};
use crate::primitive::Primitive;
use crate::request::PatternRequest;

const LAYER_STEP: f64 = 0.7;
const PETAL_SCALE: f64 = 0.2;
const VIEW_PADDING: f64 = 1.2;

pub fn generate_mandala(request: &PatternRequest) -> Vec<Primitive> {
    let mut circles = Vec::new();
    for layer in 1..=request.layers {
        let ring = request.radius * layer as f64 * LAYER_STEP;
        let n = request.n_petals * layer;
        for i in 0..n {
            let angle = 2.0 * PI * i as f64 / n as f64;
            circles.push(Primitive::Circle {
                center: Point::polar(ring, angle),
                radius: ring * PETAL_SCALE,
                color: request.line_color,
                line_width: request.line_width,
                filled: false,
            });
        }
    }
    circles
}

/// Square viewport reaching 20% past the outermost ring.
pub fn mandala_viewport(request: &PatternRequest) -> Bounds {
    let max_ring = request.radius * request.layers as f64 * LAYER_STEP;
    Bounds::symmetric(max_ring * VIEW_PADDING)
}
