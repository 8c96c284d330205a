//! Kolam pattern generators.
//!
//! Each pattern turns a [`PatternRequest`] into an ordered list of drawing
//! primitives. Generation is deterministic: the same request always yields
//! the same primitives.

pub mod util;

mod styles;
mod weave;
mod radial;
mod fractal;
mod spiral;
mod mandala;
mod lattice;
mod flower;
mod rosette;

pub use styles::{weave_style_names, ArcSpan, WeaveStyle};
pub use weave::{generate_dot_grid, generate_weave, weave_viewport};
pub use radial::generate_radial;
pub use fractal::{fractal_square_count, generate_fractal};
pub use spiral::generate_spiral;
pub use mandala::{generate_mandala, mandala_viewport};
pub use lattice::generate_lattice;
pub use flower::generate_flower;
pub use rosette::generate_rosette;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::KolamError;
use crate::primitive::Drawing;
use crate::request::PatternRequest;

/// Metadata describing a pattern for UI display.
#[derive(Debug, Clone, Copy)]
pub struct PatternMetadata {
    /// Request fields the pattern reads
    pub parameters: &'static [&'static str],
    /// Brief description of the pattern
    pub description: &'static str,
}

impl PatternMetadata {
    pub const fn new(parameters: &'static [&'static str], description: &'static str) -> Self {
        Self { parameters, description }
    }
}

/// Available pattern kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PatternKind {
    Weave,
    Radial,
    Fractal,
    Spiral,
    Mandala,
    Lattice,
    Flower,
    Rosette,
}

impl PatternKind {
    /// Get all available patterns.
    pub fn all() -> &'static [PatternKind] {
        &[
            PatternKind::Weave,
            PatternKind::Radial,
            PatternKind::Fractal,
            PatternKind::Spiral,
            PatternKind::Mandala,
            PatternKind::Lattice,
            PatternKind::Flower,
            PatternKind::Rosette,
        ]
    }

    /// Get pattern name as string.
    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::Weave => "weave",
            PatternKind::Radial => "radial",
            PatternKind::Fractal => "fractal",
            PatternKind::Spiral => "spiral",
            PatternKind::Mandala => "mandala",
            PatternKind::Lattice => "lattice",
            PatternKind::Flower => "flower",
            PatternKind::Rosette => "rosette",
        }
    }

    /// Parse pattern from string.
    pub fn from_name(name: &str) -> Option<PatternKind> {
        match name.trim().to_lowercase().as_str() {
            "weave" | "sikku" => Some(PatternKind::Weave),
            "radial" => Some(PatternKind::Radial),
            "fractal" => Some(PatternKind::Fractal),
            "spiral" => Some(PatternKind::Spiral),
            "mandala" => Some(PatternKind::Mandala),
            "lattice" | "grid" => Some(PatternKind::Lattice),
            "flower" | "rose" => Some(PatternKind::Flower),
            "rosette" => Some(PatternKind::Rosette),
            _ => None,
        }
    }

    /// Get UI metadata for this pattern.
    pub fn metadata(&self) -> PatternMetadata {
        match self {
            PatternKind::Weave => PatternMetadata::new(
                &["rows", "cols", "spacing", "weave_style", "dot_grid", "dot_radius"],
                "Arcs woven around a dot grid",
            ),
            PatternKind::Radial => PatternMetadata::new(
                &["radius", "n_petals", "rings", "ring_scale"],
                "Nested petal-modulated rings",
            ),
            PatternKind::Fractal => PatternMetadata::new(
                &["radius", "fractal_depth"],
                "Recursive square subdivision",
            ),
            PatternKind::Spiral => PatternMetadata::new(&["spacing", "turns"], "Archimedean spiral"),
            PatternKind::Mandala => PatternMetadata::new(
                &["radius", "n_petals", "layers"],
                "Concentric rings of circles",
            ),
            PatternKind::Lattice => PatternMetadata::new(&["rows", "cols", "spacing"], "Square line lattice"),
            PatternKind::Flower => PatternMetadata::new(&["radius", "n_petals"], "Rose (rhodonea) curve"),
            PatternKind::Rosette => PatternMetadata::new(
                &["radius", "petals", "layers"],
                "Layered petal curves shrinking inward",
            ),
        }
    }

    /// Build the drawing for a request of this kind.
    ///
    /// The request is assumed valid; [`crate::generate_drawing`] validates first.
    pub fn generate(&self, request: &PatternRequest) -> Drawing {
        debug!(pattern = self.name(), "generating primitives");
        let background = request.bg_color;
        match self {
            PatternKind::Weave => {
                let mut primitives = generate_weave(request);
                if request.dot_grid {
                    primitives.extend(generate_dot_grid(request));
                }
                Drawing::with_viewport(primitives, weave_viewport(request), background)
            }
            PatternKind::Mandala => Drawing::with_viewport(generate_mandala(request), mandala_viewport(request), background),
            PatternKind::Radial => Drawing::autoscaled(generate_radial(request), background),
            PatternKind::Fractal => Drawing::autoscaled(generate_fractal(request), background),
            PatternKind::Spiral => Drawing::autoscaled(generate_spiral(request), background),
            PatternKind::Lattice => Drawing::autoscaled(generate_lattice(request), background),
            PatternKind::Flower => Drawing::autoscaled(generate_flower(request), background),
            PatternKind::Rosette => Drawing::autoscaled(generate_rosette(request), background),
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternKind {
    type Err = KolamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatternKind::from_name(s).ok_or_else(|| KolamError::UnsupportedPatternKind(s.to_string()))
    }
}

impl TryFrom<String> for PatternKind {
    type Error = KolamError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PatternKind> for String {
    fn from(kind: PatternKind) -> Self {
        kind.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for &kind in PatternKind::all() {
            assert_eq!(PatternKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(PatternKind::all().len(), 8);
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let err = "hexagon".parse::<PatternKind>().unwrap_err();
        assert!(matches!(err, KolamError::UnsupportedPatternKind(ref name) if name == "hexagon"));
    }

    #[test]
    fn generation_is_deterministic() {
        for &kind in PatternKind::all() {
            let request = PatternRequest::for_pattern(kind);
            assert_eq!(kind.generate(&request), kind.generate(&request), "{} not reproducible", kind);
        }
    }

    #[test]
    fn every_pattern_draws_something() {
        for &kind in PatternKind::all() {
            let drawing = kind.generate(&PatternRequest::for_pattern(kind));
            assert!(!drawing.primitives.is_empty(), "{} drew nothing", kind);
            assert!(drawing.viewport.width() > 0.0 && drawing.viewport.height() > 0.0);
        }
    }
}
