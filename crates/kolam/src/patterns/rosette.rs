//! Rosette kolam - layered petal curves shrinking toward the center.
//!
//! Layer `m` has `petals * m` lobes and is scaled by 0.8^(m-1).

use crate::primitive::Primitive;
use crate::request::PatternRequest;

use super::util::{closed_polar_curve, stroke};

const RIPPLE: f64 = 0.3;
const LAYER_SHRINK: f64 = 0.8;

pub fn generate_rosette(request: &PatternRequest) -> Vec<Primitive> {
    (1..=request.layers)
        .map(|m| {
            let lobes = (request.petals * m) as f64;
            let scale = LAYER_SHRINK.powi(m as i32 - 1);
            stroke(
                closed_polar_curve(|theta| request.radius * (1.0 + RIPPLE * (lobes * theta).cos()) * scale),
                request,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::PatternKind;

    #[test]
    fn one_curve_per_layer() {
        let request = PatternRequest { layers: 4, ..PatternRequest::for_pattern(PatternKind::Rosette) };
        assert_eq!(generate_rosette(&request).len(), 4);
    }

    #[test]
    fn inner_layers_shrink() {
        let request = PatternRequest { layers: 2, radius: 1.0, ..PatternRequest::for_pattern(PatternKind::Rosette) };
        let layers = generate_rosette(&request);
        let peak = |p: &Primitive| match p {
            Primitive::Polyline { points, .. } => points[0].x,
            _ => f64::NAN,
        };
        assert!((peak(&layers[0]) - 1.3).abs() < 1e-9);
        assert!((peak(&layers[1]) - 1.3 * 0.8).abs() < 1e-9);
    }
}
