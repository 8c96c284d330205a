//! Configuration file: limits, render settings, analyzer tuning, classifier.
//!
//! Every section and field is optional; missing values take their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::AnalyzerConfig;
use crate::error::{KolamError, Result};
use crate::features::ClassifierThresholds;
use crate::render::RenderOptions;
use crate::request::Limits;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KolamConfig {
    pub limits: Limits,
    pub render: RenderOptions,
    pub analyzer: AnalyzerConfig,
    pub classifier: ClassifierThresholds,
}

impl KolamConfig {
    /// Load a config file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: KolamConfig = serde_yaml::from_str(&content).map_err(|e| KolamError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        config.analyzer.validate().map_err(|e| KolamError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// A commented example with every default spelled out.
    pub fn example_yaml() -> &'static str {
        EXAMPLE
    }
}

const EXAMPLE: &str = r#"# kolam configuration
# Every field is optional; the values below are the defaults.

limits:
  max_fractal_depth: 8   # fractal draws 4^0 + ... + 4^depth squares
  max_grid: 200          # rows and cols for weave/lattice
  max_layers: 64
  max_petals: 512
  max_rings: 64
  max_turns: 256

render:
  dpi: 200
  figure_inches: 6.0     # longer side of the image

analyzer:
  threshold: 127         # simple pipeline: brighter than this is paper
  canny_low: 50.0
  canny_high: 150.0
  adaptive_block: 11     # odd window size
  adaptive_c: 2.0
  blobs:
    min_area: 2
    max_area: 1000
    min_convexity: 0.95
    min_inertia_ratio: 0.1
    min_dist_between_blobs: 10.0
  max_dim: 1024          # full pipeline downscales to this longest side
  max_pixels: 64000000

classifier:
  simple_dot_density: 0.0005
  simple_skeleton_density: 0.002
  geometric_dot_density: 0.002
  geometric_skeleton_density: 0.01
"#;
