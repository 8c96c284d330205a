//! # kolam
//!
//! Procedural kolam pattern generation and kolam photo analysis.
//!
//! ## Rust Lesson #7: Modules
//!
//! Rust modules are like ES6 modules but more explicit:
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level
//!
//! The two halves of the crate share nothing at runtime: `patterns`,
//! `svg` and `render` draw, `analysis` and `features` read photos.

pub mod analysis;
pub mod color;
pub mod config;
pub mod error;
pub mod features;
pub mod geometry;
pub mod patterns;
pub mod primitive;
pub mod render;
pub mod request;
mod svg;

use tracing::info;

// Re-export common types at crate root for convenience.
pub use analysis::{
    analyze_full, analyze_simple, AnalysisArtifacts, AnalysisVariant, AnalyzerConfig, BlobParams, ImageSource, Plane,
    SimpleAnalysis,
};
pub use color::Color;
pub use config::KolamConfig;
pub use error::{KolamError, Result};
pub use features::{classify, extract_features, AnalysisReport, ClassifierThresholds, FeatureVector, KolamClass};
pub use geometry::{Bounds, Point};
pub use patterns::{weave_style_names, PatternKind, WeaveStyle};
pub use primitive::{Drawing, Primitive};
pub use render::{render_png, RenderOptions};
pub use request::{Limits, PatternRequest};

/// Validate a request and build its drawing.
pub fn generate_drawing(request: &PatternRequest, limits: &Limits) -> Result<Drawing> {
    request.validate(limits)?;
    let drawing = request.pattern.generate(request);
    info!(
        pattern = request.pattern.name(),
        primitives = drawing.primitives.len(),
        "generated pattern"
    );
    Ok(drawing)
}

/// Validate, draw and rasterize with default limits and render settings.
pub fn generate(request: &PatternRequest) -> Result<Vec<u8>> {
    let drawing = generate_drawing(request, &Limits::default())?;
    render_png(&drawing, &RenderOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_produces_png() {
        let request = PatternRequest { rows: 4, cols: 4, ..PatternRequest::default() };
        let png = generate(&request).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        // square weave viewport at 6 in x 200 dpi
        assert_eq!((decoded.width(), decoded.height()), (1200, 1200));
    }

    #[test]
    fn invalid_request_is_rejected_before_drawing() {
        let request = PatternRequest { fractal_depth: 12, ..PatternRequest::for_pattern(PatternKind::Fractal) };
        let err = generate(&request).unwrap_err();
        assert!(matches!(err, KolamError::ResourceLimitExceeded { value: 12, .. }));
    }

    #[test]
    fn drawing_serializes_to_json() {
        let request = PatternRequest { rows: 2, cols: 2, ..PatternRequest::default() };
        let drawing = generate_drawing(&request, &Limits::default()).unwrap();
        let json = serde_json::to_value(&drawing).unwrap();
        assert_eq!(json["primitives"][0]["kind"], "arc");
        assert_eq!(json["background"], "#ffffff");
    }

    #[test]
    fn public_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PatternRequest>();
        assert_send_sync::<Drawing>();
        assert_send_sync::<AnalysisArtifacts>();
        assert_send_sync::<KolamError>();
    }
}
