//! Lattice kolam - straight lines through every row and column of the grid.

use crate::geometry::Point;
use crate::primitive::Primitive;
use crate::request::PatternRequest;

use super::util::stroke;

/// Vertical lines first (one per column), then horizontal lines (one per row).
pub fn generate_lattice(request: &PatternRequest) -> Vec<Primitive> {
    let spacing = request.spacing;
    let right = request.cols.saturating_sub(1) as f64 * spacing;
    let top = request.rows.saturating_sub(1) as f64 * spacing;

    let verticals = (0..request.cols).map(|c| {
        let x = c as f64 * spacing;
        vec![Point::new(x, 0.0), Point::new(x, top)]
    });
    let horizontals = (0..request.rows).map(|r| {
        let y = r as f64 * spacing;
        vec![Point::new(0.0, y), Point::new(right, y)]
    });

    verticals.chain(horizontals).map(|points| stroke(points, request)).collect()
}
