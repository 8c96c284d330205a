//! SVG output - turn a [`Drawing`] into an SVG document.
//!
//! Drawings use mathematical coordinates (y up). SVG's y axis points down,
//! so every y is negated on the way out and the viewBox is flipped to
//! match. Arcs keep their counter-clockwise direction on screen.
//!
//! The document is sized in pixels for the given [`RenderOptions`], which is
//! also what the rasterizer uses, so the SVG and the PNG frame the same
//! region.

use std::fmt::Write;

use crate::color::Color;
use crate::geometry::Point;
use crate::primitive::{Drawing, Primitive};
use crate::render::RenderOptions;

/// Points per inch; stroke widths are given in points.
const POINTS_PER_INCH: f64 = 72.0;

impl Drawing {
    /// Build a standalone SVG document with one element per primitive.
    pub fn to_svg(&self, options: &RenderOptions) -> String {
        let (width_px, height_px) = options.canvas_size(&self.viewport);
        let scale = options.pixels_per_unit(&self.viewport);
        // Stroke widths are in points; convert to data units for this canvas.
        let unit = options.dpi as f64 / POINTS_PER_INCH / scale;

        let vp = &self.viewport;
        let mut svg = String::new();
        svg.push_str(&format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">
"#,
            width_px,
            height_px,
            fmt_num(vp.min_x),
            fmt_num(-vp.max_y),
            fmt_num(vp.width()),
            fmt_num(vp.height()),
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {}/>\n",
            fmt_num(vp.min_x),
            fmt_num(-vp.max_y),
            fmt_num(vp.width()),
            fmt_num(vp.height()),
            fill(self.background),
        ));

        svg.push_str("<g stroke-linecap=\"round\" stroke-linejoin=\"round\">\n");
        for primitive in &self.primitives {
            svg.push_str("  ");
            svg.push_str(&primitive_element(primitive, unit));
            svg.push('\n');
        }
        svg.push_str("</g>\n</svg>\n");
        svg
    }
}

fn primitive_element(primitive: &Primitive, unit: f64) -> String {
    match primitive {
        Primitive::Dot { center, radius, color } => format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" {}/>",
            fmt_num(center.x),
            fmt_num(-center.y),
            fmt_num(*radius),
            fill(*color),
        ),
        Primitive::Circle { center, radius, color, line_width, filled } => {
            let paint = if *filled { fill(*color) } else { "fill=\"none\"".to_string() };
            format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" {} {}/>",
                fmt_num(center.x),
                fmt_num(-center.y),
                fmt_num(*radius),
                paint,
                stroke(*color, line_width * unit),
            )
        }
        Primitive::Arc { center, width, height, theta1, theta2, color, line_width } => format!(
            "<path d=\"{}\" fill=\"none\" {}/>",
            arc_path(*center, width / 2.0, height / 2.0, *theta1, *theta2),
            stroke(*color, line_width * unit),
        ),
        Primitive::Polyline { points, color, line_width } => {
            let points: String = points
                .iter()
                .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(-p.y)))
                .collect::<Vec<_>>()
                .join(" ");
            format!("<polyline points=\"{}\" fill=\"none\" {}/>", points, stroke(*color, line_width * unit))
        }
    }
}

/// Path data for a counter-clockwise elliptical arc.
///
/// A full turn cannot be expressed as a single SVG arc (start == end draws
/// nothing), so it is split into two half arcs.
fn arc_path(center: Point, rx: f64, ry: f64, theta1: f64, theta2: f64) -> String {
    let sweep = Primitive::arc_sweep(theta1, theta2);
    let at = |degrees: f64| {
        let t = degrees.to_radians();
        // flipped y
        (center.x + rx * t.cos(), -(center.y + ry * t.sin()))
    };

    let (sx, sy) = at(theta1);
    let mut d = format!("M{},{}", fmt_num(sx), fmt_num(sy));
    if sweep <= 0.0 {
        return d;
    }

    let mut segment = |to: f64, large: bool| {
        let (x, y) = at(to);
        let _ = write!(
            d,
            " A{},{} 0 {} 0 {},{}",
            fmt_num(rx),
            fmt_num(ry),
            if large { 1 } else { 0 },
            fmt_num(x),
            fmt_num(y)
        );
    };

    if sweep >= 360.0 {
        segment(theta1 + 180.0, false);
        segment(theta1 + 360.0, false);
    } else {
        segment(theta1 + sweep, sweep > 180.0);
    }
    d
}

fn fill(color: Color) -> String {
    if color.alpha == 255 {
        format!("fill=\"{}\"", color.to_hex())
    } else {
        format!("fill=\"{}\" fill-opacity=\"{:.3}\"", color.to_hex(), color.opacity())
    }
}

fn stroke(color: Color, width: f64) -> String {
    let mut attrs = format!("stroke=\"{}\" stroke-width=\"{}\"", color.to_hex(), fmt_num(width));
    if color.alpha != 255 {
        let _ = write!(attrs, " stroke-opacity=\"{:.3}\"", color.opacity());
    }
    attrs
}

/// Compact fixed-point number: 4 decimals, trailing zeros dropped.
fn fmt_num(value: f64) -> String {
    let s = format!("{:.4}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        _ => s.to_string(),
    }
}
