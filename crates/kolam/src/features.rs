//! Feature extraction and the density classifier.

use std::fmt;

use image::GrayImage;
use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisArtifacts, AnalysisVariant, SimpleAnalysis};
use crate::geometry::Point;

/// Scalar summary of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub dot_count: usize,
    pub skeleton_pixels: usize,
    pub contour_count: usize,
    /// Dots per pixel.
    pub dot_density: f64,
    /// Skeleton pixels per pixel.
    pub skeleton_density: f64,
    /// Mean distance over all dot pairs; 0 with fewer than two dots.
    pub avg_dot_distance: f64,
}

impl FeatureVector {
    /// Classify with the default thresholds.
    pub fn classify(&self) -> KolamClass {
        classify(self, &ClassifierThresholds::default())
    }
}

/// Compute features for a grayscale plane and its analysis results.
///
/// `contours` holds the traced outer contours when the pipeline has them.
pub fn extract_features(
    gray: &GrayImage,
    skeleton: &GrayImage,
    dots: &[Point],
    contours: Option<&[Vec<Point>]>,
) -> FeatureVector {
    let area = gray.width() as f64 * gray.height() as f64;
    let density = |count: usize| if area > 0.0 { count as f64 / area } else { 0.0 };

    let skeleton_pixels = skeleton.pixels().filter(|p| p[0] != 0).count();
    let contour_count = contours.map_or(0, |outlines| outlines.len());

    FeatureVector {
        dot_count: dots.len(),
        skeleton_pixels,
        contour_count,
        dot_density: density(dots.len()),
        skeleton_density: density(skeleton_pixels),
        avg_dot_distance: average_pairwise_distance(dots),
    }
}

/// Mean Euclidean distance over all unordered pairs.
pub fn average_pairwise_distance(dots: &[Point]) -> f64 {
    if dots.len() < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    let mut pairs = 0u64;
    for (i, a) in dots.iter().enumerate() {
        for b in &dots[i + 1..] {
            total += a.distance(*b);
            pairs += 1;
        }
    }
    total / pairs as f64
}

/// Density cut-offs. Both must be strictly below a tier to reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierThresholds {
    pub simple_dot_density: f64,
    pub simple_skeleton_density: f64,
    pub geometric_dot_density: f64,
    pub geometric_skeleton_density: f64,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            simple_dot_density: 0.0005,
            simple_skeleton_density: 0.002,
            geometric_dot_density: 0.002,
            geometric_skeleton_density: 0.01,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KolamClass {
    #[serde(rename = "Simple Dot-Based")]
    SimpleDotBased,
    #[serde(rename = "Geometric")]
    Geometric,
    #[serde(rename = "Complex/Looped")]
    ComplexLooped,
}

impl KolamClass {
    pub fn label(&self) -> &'static str {
        match self {
            KolamClass::SimpleDotBased => "Simple Dot-Based",
            KolamClass::Geometric => "Geometric",
            KolamClass::ComplexLooped => "Complex/Looped",
        }
    }
}

impl fmt::Display for KolamClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sparse drawings are simple, moderately dense ones geometric, the rest complex.
pub fn classify(features: &FeatureVector, thresholds: &ClassifierThresholds) -> KolamClass {
    let (dots, skeleton) = (features.dot_density, features.skeleton_density);
    if dots < thresholds.simple_dot_density && skeleton < thresholds.simple_skeleton_density {
        KolamClass::SimpleDotBased
    } else if dots < thresholds.geometric_dot_density && skeleton < thresholds.geometric_skeleton_density {
        KolamClass::Geometric
    } else {
        KolamClass::ComplexLooped
    }
}

/// Everything worth reporting about one analyzed photo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub source: String,
    pub variant: AnalysisVariant,
    pub width: u32,
    pub height: u32,
    pub dots: Vec<Point>,
    pub features: FeatureVector,
    pub class: KolamClass,
}

impl AnalysisReport {
    pub fn from_full(source: &str, artifacts: &AnalysisArtifacts, thresholds: &ClassifierThresholds) -> Self {
        let features = extract_features(&artifacts.gray, &artifacts.skeleton, &artifacts.dots, Some(artifacts.contour_points.as_slice()));
        Self::build(source, AnalysisVariant::Full, &artifacts.gray, &artifacts.dots, features, thresholds)
    }

    pub fn from_simple(source: &str, analysis: &SimpleAnalysis, thresholds: &ClassifierThresholds) -> Self {
        let features = extract_features(&analysis.gray, &analysis.skeleton, &analysis.dots, None);
        Self::build(source, AnalysisVariant::Simple, &analysis.gray, &analysis.dots, features, thresholds)
    }

    fn build(
        source: &str,
        variant: AnalysisVariant,
        gray: &GrayImage,
        dots: &[Point],
        features: FeatureVector,
        thresholds: &ClassifierThresholds,
    ) -> Self {
        let class = classify(&features, thresholds);
        Self {
            source: source.to_string(),
            variant,
            width: gray.width(),
            height: gray.height(),
            dots: dots.to_vec(),
            features,
            class,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn features(dot_density: f64, skeleton_density: f64) -> FeatureVector {
        FeatureVector {
            dot_count: 0,
            skeleton_pixels: 0,
            contour_count: 0,
            dot_density,
            skeleton_density,
            avg_dot_distance: 0.0,
        }
    }

    #[test]
    fn average_distance() {
        assert_eq!(average_pairwise_distance(&[]), 0.0);
        assert_eq!(average_pairwise_distance(&[Point::new(1.0, 1.0)]), 0.0);
        assert_eq!(average_pairwise_distance(&[Point::new(0.0, 0.0), Point::new(3.0, 4.0)]), 5.0);
        // pairs: 5, 5, 10
        let line = [Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(6.0, 8.0)];
        assert!((average_pairwise_distance(&line) - 20.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn classifier_boundaries_are_strict() {
        assert_eq!(features(0.0, 0.0).classify(), KolamClass::SimpleDotBased);
        assert_eq!(features(0.0004, 0.0019).classify(), KolamClass::SimpleDotBased);
        assert_eq!(features(0.0005, 0.0).classify(), KolamClass::Geometric);
        assert_eq!(features(0.0, 0.002).classify(), KolamClass::Geometric);
        assert_eq!(features(0.0019, 0.0099).classify(), KolamClass::Geometric);
        assert_eq!(features(0.002, 0.0).classify(), KolamClass::ComplexLooped);
        assert_eq!(features(0.0, 0.01).classify(), KolamClass::ComplexLooped);
    }

    #[test]
    fn custom_thresholds() {
        let strict = ClassifierThresholds { simple_dot_density: 0.0, ..ClassifierThresholds::default() };
        assert_eq!(classify(&features(0.0, 0.0), &strict), KolamClass::Geometric);
    }

    #[test]
    fn densities_are_per_pixel() {
        let gray = GrayImage::new(100, 50);
        let mut skeleton = GrayImage::new(100, 50);
        for x in 0..10 {
            skeleton.put_pixel(x, 0, Luma([255]));
        }
        let dots = [Point::new(1.0, 1.0), Point::new(4.0, 5.0)];
        let f = extract_features(&gray, &skeleton, &dots, None);
        assert_eq!(f.dot_count, 2);
        assert_eq!(f.skeleton_pixels, 10);
        assert_eq!(f.contour_count, 0);
        assert!((f.dot_density - 2.0 / 5000.0).abs() < 1e-15);
        assert!((f.skeleton_density - 10.0 / 5000.0).abs() < 1e-15);
        assert_eq!(f.avg_dot_distance, 5.0);
    }

    #[test]
    fn traced_contours_are_counted() {
        let gray = GrayImage::new(20, 20);
        let outlines = vec![
            vec![Point::new(2.0, 2.0), Point::new(3.0, 3.0)],
            vec![Point::new(10.0, 10.0)],
        ];
        let f = extract_features(&gray, &gray, &[], Some(outlines.as_slice()));
        assert_eq!(f.contour_count, 2);
    }

    #[test]
    fn full_report_counts_traced_contours_not_mask_blobs() {
        // Two outlines drawn into one connected run of pixels
        let mut drawn = GrayImage::new(20, 20);
        for x in 2..12 {
            drawn.put_pixel(x, 5, Luma([255]));
        }
        let outlines = vec![
            (2..7).map(|x| Point::new(x as f64, 5.0)).collect(),
            (7..12).map(|x| Point::new(x as f64, 5.0)).collect(),
        ];
        let blank = GrayImage::new(20, 20);
        let artifacts = AnalysisArtifacts {
            gray: blank.clone(),
            edges: drawn.clone(),
            contours: drawn,
            contour_points: outlines,
            binary: blank.clone(),
            skeleton: blank,
            dots: Vec::new(),
        };
        let report = AnalysisReport::from_full("outlines.png", &artifacts, &ClassifierThresholds::default());
        assert_eq!(report.features.contour_count, 2);
    }

    #[test]
    fn classifier_matches_worked_examples() {
        assert_eq!(features(0.0004, 0.0015).classify(), KolamClass::SimpleDotBased);
        assert_eq!(features(0.0015, 0.005).classify(), KolamClass::Geometric);
        assert_eq!(features(0.01, 0.05).classify(), KolamClass::ComplexLooped);
    }

    #[test]
    fn class_serializes_as_label() {
        let json = serde_json::to_string(&KolamClass::ComplexLooped).unwrap();
        assert_eq!(json, "\"Complex/Looped\"");
        assert_eq!(KolamClass::SimpleDotBased.to_string(), "Simple Dot-Based");
    }
}
