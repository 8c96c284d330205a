//! Kolam photo analysis.
//!
//! Two fixed pipelines turn a photo into structural primitives:
//!
//! - **simple**: grayscale, global threshold, skeleton, dots.
//! - **full** (phone photos): orientation fix, size bound, grayscale, Canny
//!   edges, outer contours, adaptive threshold, skeleton, dots.
//!
//! Everything darker than its surroundings is foreground (255) in every mask.
//! Chalk dots are brighter than the floor, so they stay 0 and show up as
//! openings in the mask. Dots are detected on the threshold mask, before
//! thinning.

mod blobs;
mod contours;
mod planes;
mod skeleton;
mod source;
mod threshold;

pub use blobs::{detect_blobs, BlobParams};
pub use contours::{edge_mask, external_contours};
pub use planes::{dot_overlay, encode_png, skeleton_composite, DOT_MARKER_RADIUS};
pub use skeleton::skeletonize;
pub use source::{bound_size, bounded_size, correct_orientation, decode, Decoded, ImageSource};
pub use threshold::{adaptive_threshold, block_sigma, gaussian_local_mean, inverted_threshold};

use std::fmt;

use image::{DynamicImage, GrayImage};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{KolamError, Result};
use crate::geometry::Point;

/// Tuning for both pipelines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Global threshold level for the simple pipeline.
    pub threshold: u8,
    pub canny_low: f32,
    pub canny_high: f32,
    /// Adaptive threshold window side, odd.
    pub adaptive_block: u32,
    /// Adaptive threshold offset; only its floor is used.
    pub adaptive_c: f64,
    pub blobs: BlobParams,
    /// Longest side after downscaling in the full pipeline.
    pub max_dim: u32,
    /// Images with more pixels than this are refused.
    pub max_pixels: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            threshold: 127,
            canny_low: 50.0,
            canny_high: 150.0,
            adaptive_block: 11,
            adaptive_c: 2.0,
            blobs: BlobParams::default(),
            max_dim: 1024,
            max_pixels: 64_000_000,
        }
    }
}

impl AnalyzerConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.canny_low.is_finite() && self.canny_high.is_finite() && self.canny_low >= 0.0) {
            return Err(KolamError::validation("canny_low", "canny thresholds must be finite and non-negative"));
        }
        if self.canny_low > self.canny_high {
            return Err(KolamError::validation(
                "canny_high",
                format!("must be at least canny_low ({}), got {}", self.canny_low, self.canny_high),
            ));
        }
        if self.adaptive_block < 3 || self.adaptive_block % 2 == 0 {
            return Err(KolamError::validation(
                "adaptive_block",
                format!("must be odd and at least 3, got {}", self.adaptive_block),
            ));
        }
        if !self.adaptive_c.is_finite() {
            return Err(KolamError::validation("adaptive_c", "must be finite"));
        }
        if self.blobs.min_area > self.blobs.max_area {
            return Err(KolamError::validation("min_area", "must not exceed max_area"));
        }
        for (field, ratio) in [
            ("min_convexity", self.blobs.min_convexity),
            ("min_inertia_ratio", self.blobs.min_inertia_ratio),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(KolamError::validation(field, format!("must be between 0 and 1, got {}", ratio)));
            }
        }
        if !(self.blobs.min_dist_between_blobs.is_finite() && self.blobs.min_dist_between_blobs >= 0.0) {
            return Err(KolamError::validation("min_dist_between_blobs", "must be finite and non-negative"));
        }
        if self.max_dim == 0 {
            return Err(KolamError::validation("max_dim", "must be at least 1"));
        }
        Ok(())
    }
}

/// Which pipeline produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisVariant {
    Simple,
    Full,
}

impl fmt::Display for AnalysisVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AnalysisVariant::Simple => "simple",
            AnalysisVariant::Full => "full",
        })
    }
}

/// Output of the simple pipeline.
#[derive(Debug, Clone)]
pub struct SimpleAnalysis {
    pub gray: GrayImage,
    pub binary: GrayImage,
    pub skeleton: GrayImage,
    pub dots: Vec<Point>,
}

/// Output of the full pipeline. Every plane has the working image size.
#[derive(Debug, Clone)]
pub struct AnalysisArtifacts {
    pub gray: GrayImage,
    pub edges: GrayImage,
    pub contours: GrayImage,
    pub contour_points: Vec<Vec<Point>>,
    pub binary: GrayImage,
    pub skeleton: GrayImage,
    pub dots: Vec<Point>,
}

/// A single-channel plane that can be exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plane {
    Gray,
    Edges,
    Contours,
    Binary,
    Skeleton,
}

impl Plane {
    pub fn all() -> &'static [Plane] {
        &[Plane::Gray, Plane::Edges, Plane::Contours, Plane::Binary, Plane::Skeleton]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Plane::Gray => "gray",
            Plane::Edges => "edges",
            Plane::Contours => "contours",
            Plane::Binary => "binary",
            Plane::Skeleton => "skeleton",
        }
    }
}

impl AnalysisArtifacts {
    pub fn plane(&self, plane: Plane) -> &GrayImage {
        match plane {
            Plane::Gray => &self.gray,
            Plane::Edges => &self.edges,
            Plane::Contours => &self.contours,
            Plane::Binary => &self.binary,
            Plane::Skeleton => &self.skeleton,
        }
    }

    pub fn plane_png(&self, plane: Plane) -> Result<Vec<u8>> {
        encode_png(&DynamicImage::ImageLuma8(self.plane(plane).clone()))
    }

    pub fn dot_overlay_png(&self) -> Result<Vec<u8>> {
        encode_png(&DynamicImage::ImageRgb8(dot_overlay(&self.gray, &self.dots)))
    }

    pub fn skeleton_composite_png(&self) -> Result<Vec<u8>> {
        encode_png(&DynamicImage::ImageRgb8(skeleton_composite(&self.gray, &self.skeleton, &self.dots)))
    }
}

impl SimpleAnalysis {
    pub fn skeleton_composite_png(&self) -> Result<Vec<u8>> {
        encode_png(&DynamicImage::ImageRgb8(skeleton_composite(&self.gray, &self.skeleton, &self.dots)))
    }
}

/// Global-threshold pipeline: dots and skeleton of one photo.
pub fn analyze_simple(source: &ImageSource, config: &AnalyzerConfig) -> Result<SimpleAnalysis> {
    config.validate()?;
    let decoded = decode(source, config.max_pixels)?;
    let gray = decoded.image.to_luma8();
    Ok(simple_from_gray(gray, config))
}

/// The simple pipeline on an already decoded grayscale image.
pub fn simple_from_gray(gray: GrayImage, config: &AnalyzerConfig) -> SimpleAnalysis {
    let binary = inverted_threshold(&gray, config.threshold);
    let skeleton = skeletonize(&binary);
    let dots = detect_blobs(&binary, &config.blobs);
    info!(
        width = gray.width(),
        height = gray.height(),
        dots = dots.len(),
        "simple analysis complete"
    );
    SimpleAnalysis { gray, binary, skeleton, dots }
}

/// Full pipeline for phone photos.
///
/// `max_dim` bounds the longer side of the working image.
pub fn analyze_full(source: &ImageSource, max_dim: u32, config: &AnalyzerConfig) -> Result<AnalysisArtifacts> {
    config.validate()?;
    if max_dim == 0 {
        return Err(KolamError::validation("max_dim", "must be at least 1"));
    }

    let decoded = decode(source, config.max_pixels)?;
    let image = correct_orientation(decoded.image, decoded.orientation);
    let image = bound_size(image, max_dim);
    Ok(full_from_gray(image.to_luma8(), config))
}

/// The full pipeline from the grayscale stage on.
pub fn full_from_gray(gray: GrayImage, config: &AnalyzerConfig) -> AnalysisArtifacts {
    let edges = edge_mask(&gray, config.canny_low, config.canny_high);
    let (contour_points, contours) = external_contours(&edges);
    debug!(contours = contour_points.len(), "traced outer contours");

    let binary = adaptive_threshold(&gray, config.adaptive_block, config.adaptive_c);
    let skeleton = skeletonize(&binary);
    let dots = detect_blobs(&binary, &config.blobs);
    info!(
        width = gray.width(),
        height = gray.height(),
        dots = dots.len(),
        contours = contour_points.len(),
        "full analysis complete"
    );

    AnalysisArtifacts { gray, edges, contours, contour_points, binary, skeleton, dots }
}
