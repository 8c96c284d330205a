//! Weave kolam - arcs looping around a grid of dots.
//!
//! Each cell between four neighbouring dots gets the arcs its style rule
//! asks for, centered in the cell with a diameter of one grid pitch.

use crate::geometry::{Bounds, Point};
use crate::primitive::Primitive;
use crate::request::PatternRequest;

use super::styles::WeaveStyle;

/// Generate the woven arcs for a request.
///
/// Cells are visited column-major: column `i` in the outer loop, row `j`
/// in the inner loop.
pub fn generate_weave(request: &PatternRequest) -> Vec<Primitive> {
    let spacing = request.spacing;
    let style = WeaveStyle::resolve(&request.weave_style);

    let mut arcs = Vec::new();
    for i in 0..request.cols.saturating_sub(1) {
        for j in 0..request.rows.saturating_sub(1) {
            let center = Point::new(
                i as f64 * spacing + spacing / 2.0,
                j as f64 * spacing + spacing / 2.0,
            );
            for (theta1, theta2) in style.arcs(i, j) {
                arcs.push(Primitive::Arc {
                    center,
                    width: spacing,
                    height: spacing,
                    theta1,
                    theta2,
                    color: request.line_color,
                    line_width: request.line_width,
                });
            }
        }
    }
    arcs
}

/// One dot on every lattice vertex, row by row.
pub fn generate_dot_grid(request: &PatternRequest) -> Vec<Primitive> {
    let spacing = request.spacing;
    (0..request.rows)
        .flat_map(|row| {
            (0..request.cols).map(move |col| Primitive::Dot {
                center: Point::new(col as f64 * spacing, row as f64 * spacing),
                radius: request.dot_radius,
                color: request.dot_color,
            })
        })
        .collect()
}

/// The grid plus one pitch of padding on every side.
pub fn weave_viewport(request: &PatternRequest) -> Bounds {
    let spacing = request.spacing;
    Bounds::new(
        -spacing,
        -spacing,
        request.cols.saturating_sub(1) as f64 * spacing + spacing,
        request.rows.saturating_sub(1) as f64 * spacing + spacing,
    )
}
