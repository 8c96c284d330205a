//! Rasterization - SVG scene to PNG bytes.
//!
//! The drawing is first written as SVG (see [`Drawing::to_svg`]), parsed by
//! usvg and rendered with resvg onto a tiny-skia pixmap filled with the
//! background color.

use serde::{Deserialize, Serialize};
use tiny_skia::{Pixmap, Transform};
use tracing::debug;

use crate::error::{KolamError, Result};
use crate::geometry::Bounds;
use crate::primitive::Drawing;

/// Output resolution settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Pixels per inch of the output image.
    pub dpi: u32,
    /// Length of the viewport's longer side, in inches.
    pub figure_inches: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { dpi: 200, figure_inches: 6.0 }
    }
}

impl RenderOptions {
    /// Pixel length of the viewport's longer side.
    pub fn long_side_px(&self) -> f64 {
        self.figure_inches * self.dpi as f64
    }

    /// Scale from data units to pixels for a viewport.
    pub fn pixels_per_unit(&self, viewport: &Bounds) -> f64 {
        let longest = viewport.width().max(viewport.height());
        if longest > 0.0 { self.long_side_px() / longest } else { 1.0 }
    }

    /// Canvas size in pixels; the aspect ratio follows the viewport.
    pub fn canvas_size(&self, viewport: &Bounds) -> (u32, u32) {
        let scale = self.pixels_per_unit(viewport);
        let side = |extent: f64| ((extent * scale).round() as u32).max(1);
        (side(viewport.width()), side(viewport.height()))
    }
}

/// Rasterize a drawing and encode it as PNG.
pub fn render_png(drawing: &Drawing, options: &RenderOptions) -> Result<Vec<u8>> {
    if !(options.dpi > 0 && options.figure_inches.is_finite() && options.figure_inches > 0.0) {
        return Err(KolamError::validation("render", "dpi and figure_inches must be positive"));
    }

    let svg = drawing.to_svg(options);
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default())
        .map_err(|e| KolamError::Render(format!("svg parse: {}", e)))?;

    let (width, height) = options.canvas_size(&drawing.viewport);
    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| KolamError::Render(format!("could not allocate a {}x{} canvas", width, height)))?;
    pixmap.fill(drawing.background.into());

    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());
    debug!(width, height, primitives = drawing.primitives.len(), "rasterized drawing");

    pixmap.encode_png().map_err(|e| KolamError::Render(format!("png encode: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::patterns::PatternKind;
    use crate::request::PatternRequest;

    #[test]
    fn long_side_is_figure_size() {
        let options = RenderOptions::default();
        assert_eq!(options.canvas_size(&Bounds::new(0.0, 0.0, 10.0, 5.0)), (1200, 600));
        assert_eq!(options.canvas_size(&Bounds::new(0.0, 0.0, 1.0, 3.0)), (400, 1200));
    }

    #[test]
    fn png_has_viewport_aspect() {
        let request = PatternRequest { rows: 3, cols: 5, ..PatternRequest::for_pattern(PatternKind::Weave) };
        let drawing = PatternKind::Weave.generate(&request);
        let options = RenderOptions { dpi: 50, figure_inches: 4.0 };

        let png = render_png(&drawing, &options).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        // viewport is 6 x 4 units
        assert_eq!((decoded.width(), decoded.height()), (200, 133));
    }

    #[test]
    fn background_fills_canvas() {
        let drawing = Drawing::with_viewport(Vec::new(), Bounds::symmetric(1.0), Color::rgb(10, 200, 30));
        let png = render_png(&drawing, &RenderOptions { dpi: 10, figure_inches: 2.0 }).unwrap();
        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(0, 0).0, [10, 200, 30, 255]);
    }

    #[test]
    fn rejects_zero_dpi() {
        let drawing = Drawing::with_viewport(Vec::new(), Bounds::symmetric(1.0), Color::WHITE);
        assert!(render_png(&drawing, &RenderOptions { dpi: 0, figure_inches: 6.0 }).is_err());
    }
}
