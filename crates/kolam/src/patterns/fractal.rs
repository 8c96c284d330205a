//! Fractal kolam - squares sprouting smaller squares at their edge midpoints.
//!
//! ## Rust Lesson #24: Recursion Without the Call Stack
//!
//! The natural definition is recursive, but the depth is user-controlled.
//! An explicit `Vec` used as a stack keeps the work on the heap. Pushing
//! children in reverse order means they pop in the same order the
//! recursive version would visit them, so output order is unchanged.

use crate::geometry::Point;
use crate::primitive::Primitive;
use crate::request::PatternRequest;

use super::util::stroke;

struct Square {
    center: Point,
    half: f64,
    depth: u32,
}

/// Generate every square, pre-order (parent before its four children).
pub fn generate_fractal(request: &PatternRequest) -> Vec<Primitive> {
    let mut squares = Vec::with_capacity(fractal_square_count(request.fractal_depth).min(1 << 20));
    let mut stack = vec![Square {
        center: Point::new(0.0, 0.0),
        half: request.radius,
        depth: request.fractal_depth,
    }];

    while let Some(Square { center, half, depth }) = stack.pop() {
        let Point { x, y } = center;
        squares.push(stroke(
            vec![
                Point::new(x - half, y - half),
                Point::new(x + half, y - half),
                Point::new(x + half, y + half),
                Point::new(x - half, y + half),
                Point::new(x - half, y - half),
            ],
            request,
        ));

        if depth > 0 {
            let children = [
                Point::new(x + half, y),
                Point::new(x - half, y),
                Point::new(x, y + half),
                Point::new(x, y - half),
            ];
            for child in children.into_iter().rev() {
                stack.push(Square { center: child, half: half / 2.0, depth: depth - 1 });
            }
        }
    }

    squares
}

/// Number of squares drawn for a depth: 4^0 + 4^1 + ... + 4^depth.
pub fn fractal_square_count(depth: u32) -> usize {
    (0..=depth).map(|k| 4usize.saturating_pow(k)).fold(0, usize::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::PatternKind;

    fn request(depth: u32) -> PatternRequest {
        PatternRequest { fractal_depth: depth, radius: 1.0, ..PatternRequest::for_pattern(PatternKind::Fractal) }
    }

    fn first_corner(p: &Primitive) -> Point {
        match p {
            Primitive::Polyline { points, .. } => points[0],
            _ => panic!("expected a polyline"),
        }
    }

    #[test]
    fn count_is_geometric_sum() {
        assert_eq!(fractal_square_count(0), 1);
        assert_eq!(fractal_square_count(3), 85);
        for depth in 0..=4 {
            assert_eq!(generate_fractal(&request(depth)).len(), fractal_square_count(depth));
        }
    }

    #[test]
    fn squares_are_closed() {
        let squares = generate_fractal(&request(0));
        let Primitive::Polyline { points, .. } = &squares[0] else {
            panic!("expected a polyline");
        };
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], points[4]);
        assert_eq!(points[0], Point::new(-1.0, -1.0));
    }

    #[test]
    fn emission_is_preorder() {
        let squares = generate_fractal(&request(2));
        // root, then the right child, then the right child's own right child
        assert_eq!(first_corner(&squares[0]), Point::new(-1.0, -1.0));
        assert_eq!(first_corner(&squares[1]), Point::new(0.5, -0.5));
        assert_eq!(first_corner(&squares[2]), Point::new(1.25, -0.25));
        // after the right subtree's 5 squares comes the left child
        assert_eq!(first_corner(&squares[6]), Point::new(-1.5, -0.5));
    }
}
