//! Pattern requests: the full parameter bundle for one generated kolam.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{KolamError, Result};
use crate::patterns::PatternKind;

/// Parameters for one pattern.
///
/// Every field has a default (see [`Default`]), so a YAML or JSON request
/// only needs the fields it wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternRequest {
    pub pattern: PatternKind,

    /// Dot grid dimensions (weave, lattice).
    pub rows: u32,
    pub cols: u32,

    /// Grid pitch (weave, lattice) or spiral growth per radian (spiral).
    pub spacing: f64,

    /// Base radius (radial, fractal, mandala, flower, rosette).
    pub radius: f64,

    /// Petal count for radial, mandala and flower.
    pub n_petals: u32,

    /// Petal count for rosette.
    pub petals: u32,

    pub rings: u32,
    pub ring_scale: f64,
    pub fractal_depth: u32,
    pub turns: u32,
    pub layers: u32,

    /// Weave style name; unknown names fall back to "classic".
    pub weave_style: String,

    pub dot_grid: bool,
    pub dot_radius: f64,
    pub line_color: Color,
    pub dot_color: Color,
    pub bg_color: Color,

    /// Stroke width in points.
    pub line_width: f64,
}

impl Default for PatternRequest {
    fn default() -> Self {
        Self {
            pattern: PatternKind::Weave,
            rows: 9,
            cols: 9,
            spacing: 1.0,
            radius: 1.5,
            n_petals: 8,
            petals: 8,
            rings: 3,
            ring_scale: 0.8,
            fractal_depth: 3,
            turns: 6,
            layers: 5,
            weave_style: "classic".to_string(),
            dot_grid: true,
            dot_radius: 0.05,
            line_color: Color::BLACK,
            dot_color: Color::BLACK,
            bg_color: Color::WHITE,
            line_width: 1.5,
        }
    }
}

/// Safety ceilings checked before any geometry is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Fractal primitive count grows as 4^depth.
    pub max_fractal_depth: u32,
    pub max_grid: u32,
    pub max_layers: u32,
    pub max_petals: u32,
    pub max_rings: u32,
    pub max_turns: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_fractal_depth: 8,
            max_grid: 200,
            max_layers: 64,
            max_petals: 512,
            max_rings: 64,
            max_turns: 256,
        }
    }
}

impl PatternRequest {
    /// A default request for the given pattern.
    pub fn for_pattern(pattern: PatternKind) -> Self {
        Self { pattern, ..Self::default() }
    }

    /// Load a request from a YAML (or JSON, which is valid YAML) file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| KolamError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Check every parameter the selected pattern uses.
    ///
    /// Parameters that the pattern ignores are not checked, so a lattice
    /// request with `fractal_depth: 40` is still valid.
    pub fn validate(&self, limits: &Limits) -> Result<()> {
        positive("line_width", self.line_width)?;

        match self.pattern {
            PatternKind::Weave => {
                grid(self, limits)?;
                positive("spacing", self.spacing)?;
                if self.dot_grid {
                    positive("dot_radius", self.dot_radius)?;
                }
            }
            PatternKind::Lattice => {
                grid(self, limits)?;
                positive("spacing", self.spacing)?;
            }
            PatternKind::Radial => {
                positive("radius", self.radius)?;
                positive("ring_scale", self.ring_scale)?;
                count("n_petals", self.n_petals, limits.max_petals)?;
                count("rings", self.rings, limits.max_rings)?;
            }
            PatternKind::Fractal => {
                positive("radius", self.radius)?;
                ceiling("fractal depth", self.fractal_depth, limits.max_fractal_depth)?;
            }
            PatternKind::Spiral => {
                positive("spacing", self.spacing)?;
                count("turns", self.turns, limits.max_turns)?;
            }
            PatternKind::Mandala => {
                positive("radius", self.radius)?;
                count("n_petals", self.n_petals, limits.max_petals)?;
                count("layers", self.layers, limits.max_layers)?;
            }
            PatternKind::Flower => {
                positive("radius", self.radius)?;
                count("n_petals", self.n_petals, limits.max_petals)?;
            }
            PatternKind::Rosette => {
                positive("radius", self.radius)?;
                count("petals", self.petals, limits.max_petals)?;
                count("layers", self.layers, limits.max_layers)?;
            }
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(KolamError::validation(field, format!("must be a positive number, got {}", value)))
    }
}

fn count(field: &'static str, value: u32, limit: u32) -> Result<()> {
    if value == 0 {
        return Err(KolamError::validation(field, "must be at least 1"));
    }
    ceiling(field, value, limit)
}

fn ceiling(what: &'static str, value: u32, limit: u32) -> Result<()> {
    if value > limit {
        Err(KolamError::ResourceLimitExceeded { what, value: value as u64, limit: limit as u64 })
    } else {
        Ok(())
    }
}

fn grid(request: &PatternRequest, limits: &Limits) -> Result<()> {
    for (field, value) in [("rows", request.rows), ("cols", request.cols)] {
        if value < 2 {
            return Err(KolamError::validation(field, format!("grid patterns need at least 2, got {}", value)));
        }
        ceiling(field, value, limits.max_grid)?;
    }
    Ok(())
}
