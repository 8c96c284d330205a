//! Drawing primitives: the output of every pattern generator.
//!
//! A [`Drawing`] is an ordered list of primitives plus the viewport they
//! should be shown in. It is built fresh per request and handed to the
//! renderer once.

use serde::Serialize;

use crate::color::Color;
use crate::geometry::{Bounds, Point};

/// A single drawable shape.
///
/// ## Rust Lesson #22: Enums with Data
///
/// Each variant carries its own fields, and `match` makes the renderer
/// handle every shape explicitly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Primitive {
    /// Filled disc, used for the kolam dot grid.
    Dot { center: Point, radius: f64, color: Color },
    /// Elliptical arc between two counter-clockwise angles in degrees.
    Arc {
        center: Point,
        width: f64,
        height: f64,
        theta1: f64,
        theta2: f64,
        color: Color,
        line_width: f64,
    },
    Circle {
        center: Point,
        radius: f64,
        color: Color,
        line_width: f64,
        filled: bool,
    },
    Polyline { points: Vec<Point>, color: Color, line_width: f64 },
}

impl Primitive {
    /// Angular span of an arc in degrees, in [0, 360].
    ///
    /// An end angle before the start angle wraps around, so (315, 45) spans
    /// 90 degrees and (0, 360) is a full turn. Equal angles span nothing.
    pub fn arc_sweep(theta1: f64, theta2: f64) -> f64 {
        let mut end = theta2 - 360.0 * ((theta2 - theta1) / 360.0).floor();
        if theta2 != theta1 && end <= theta1 {
            end += 360.0;
        }
        end - theta1
    }

    /// Axis-aligned extent of the shape (stroke width excluded).
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Primitive::Dot { center, radius, .. } | Primitive::Circle { center, radius, .. } => Some(Bounds::new(
                center.x - radius,
                center.y - radius,
                center.x + radius,
                center.y + radius,
            )),
            Primitive::Arc { center, width, height, .. } => Some(Bounds::new(
                center.x - width / 2.0,
                center.y - height / 2.0,
                center.x + width / 2.0,
                center.y + height / 2.0,
            )),
            Primitive::Polyline { points, .. } => Bounds::from_points(points.iter().copied()),
        }
    }

    /// Short name used in logs and summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Dot { .. } => "dot",
            Primitive::Arc { .. } => "arc",
            Primitive::Circle { .. } => "circle",
            Primitive::Polyline { .. } => "polyline",
        }
    }
}

/// A complete pattern ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Drawing {
    pub primitives: Vec<Primitive>,
    pub viewport: Bounds,
    pub background: Color,
}

impl Drawing {
    /// Build a drawing that frames its own content.
    ///
    /// The viewport is the data extent plus a 5% margin on every side, or a
    /// unit square around the origin when there is nothing to draw.
    pub fn autoscaled(primitives: Vec<Primitive>, background: Color) -> Self {
        let viewport = primitives
            .iter()
            .filter_map(Primitive::bounds)
            .reduce(|a, b| a.union(&b))
            .map(|b| b.with_margin(AUTOSCALE_MARGIN))
            .unwrap_or_else(|| Bounds::symmetric(1.0));
        Self { primitives, viewport, background }
    }

    pub fn with_viewport(primitives: Vec<Primitive>, viewport: Bounds, background: Color) -> Self {
        Self { primitives, viewport, background }
    }

    /// Number of primitives of the given kind (see [`Primitive::kind`]).
    pub fn count(&self, kind: &str) -> usize {
        self.primitives.iter().filter(|p| p.kind() == kind).count()
    }
}

/// Padding applied around autoscaled content, as a fraction of its extent.
pub const AUTOSCALE_MARGIN: f64 = 0.05;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_wraps_past_zero() {
        assert_eq!(Primitive::arc_sweep(315.0, 45.0), 90.0);
        assert_eq!(Primitive::arc_sweep(0.0, 360.0), 360.0);
        assert_eq!(Primitive::arc_sweep(180.0, 270.0), 90.0);
        assert_eq!(Primitive::arc_sweep(210.0, 510.0), 300.0);
        assert_eq!(Primitive::arc_sweep(90.0, 90.0), 0.0);
    }

    #[test]
    fn autoscale_pads_content() {
        let line = Primitive::Polyline {
            points: vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)],
            color: Color::BLACK,
            line_width: 1.0,
        };
        let drawing = Drawing::autoscaled(vec![line], Color::WHITE);
        assert!((drawing.viewport.min_x + 0.5).abs() < 1e-12);
        assert!((drawing.viewport.max_y - 10.5).abs() < 1e-12);
    }

    #[test]
    fn empty_drawing_has_unit_viewport() {
        let drawing = Drawing::autoscaled(Vec::new(), Color::WHITE);
        assert_eq!(drawing.viewport, Bounds::symmetric(1.0));
    }
}
