//! Flower kolam - a rose (rhodonea) curve.
//!
//! r = radius * sin(n_petals * theta). Odd petal counts trace each petal
//! twice over a full turn, even counts draw 2 * n_petals petals.

use crate::primitive::Primitive;
use crate::request::PatternRequest;

use super::util::{closed_polar_curve, stroke};

pub fn generate_flower(request: &PatternRequest) -> Vec<Primitive> {
    let k = request.n_petals as f64;
    vec![stroke(closed_polar_curve(|theta| request.radius * (k * theta).sin()), request)]
}
