//! Radial kolam - nested rings with a petal ripple.
//!
//! Ring `m` ripples with `n_petals + m` lobes and shrinks by `ring_scale`
//! per ring, so neighbouring rings never line up exactly.

use crate::primitive::Primitive;
use crate::request::PatternRequest;

use super::util::{closed_polar_curve, stroke};

/// Ripple amplitude relative to the ring radius.
const RIPPLE: f64 = 0.3;

/// Generate one closed curve per ring, outermost first.
pub fn generate_radial(request: &PatternRequest) -> Vec<Primitive> {
    (1..=request.rings)
        .map(|m| {
            let lobes = (request.n_petals + m) as f64;
            let scale = request.ring_scale.powi(m as i32 - 1);
            let points = closed_polar_curve(|theta| request.radius * (1.0 + RIPPLE * (lobes * theta).cos()) * scale);
            stroke(points, request)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::PatternKind;
    use crate::patterns::util::CURVE_SAMPLES;

    #[test]
    fn one_curve_per_ring() {
        let request = PatternRequest::for_pattern(PatternKind::Radial);
        let rings = generate_radial(&request);
        assert_eq!(rings.len(), 3);
        for ring in &rings {
            let Primitive::Polyline { points, .. } = ring else {
                panic!("expected a polyline");
            };
            assert_eq!(points.len(), CURVE_SAMPLES);
        }
    }

    #[test]
    fn rings_shrink_by_scale() {
        let request = PatternRequest { rings: 2, ..PatternRequest::for_pattern(PatternKind::Radial) };
        let rings = generate_radial(&request);
        // at theta = 0 the ripple peaks: r = radius * 1.3 * scale^(m-1)
        let first_x = |p: &Primitive| match p {
            Primitive::Polyline { points, .. } => points[0].x,
            _ => f64::NAN,
        };
        assert!((first_x(&rings[0]) - 1.5 * 1.3).abs() < 1e-9);
        assert!((first_x(&rings[1]) - 1.5 * 1.3 * 0.8).abs() < 1e-9);
    }
}
