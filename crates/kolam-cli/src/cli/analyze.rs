//! Photo analysis command.
//!
//! Runs the full (or simple) pipeline on a kolam photo, prints the features
//! and class, and optionally writes the intermediate planes.
//!
//! ```bash
//! # Summary
//! kolam analyze photo.jpg
//!
//! # Machine-readable report
//! kolam analyze photo.jpg --json
//!
//! # Dump gray/edges/contours/binary/skeleton/dots/composite PNGs
//! kolam analyze photo.jpg --planes out/
//! ```

use std::fs;
use std::path::Path;

use image::{DynamicImage, GrayImage};
use kolam::analysis::encode_png;
use kolam::{analyze_full, analyze_simple, AnalysisReport, ImageSource, Plane};

use super::common::{load_config, next_value, parse_next};

/// Execute the analyze command.
pub fn cmd_analyze(args: &[String]) -> Result<(), String> {
    let mut image_path: Option<&str> = None;
    let mut config_path: Option<&str> = None;
    let mut planes_dir: Option<&str> = None;
    let mut max_dim: Option<u32> = None;
    let mut simple = false;
    let mut json = false;

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            "--simple" => simple = true,
            "--json" => json = true,
            "--max-dim" => max_dim = Some(parse_next(args, &mut i, flag)?),
            "--planes" => planes_dir = Some(next_value(args, &mut i, flag)?),
            "-c" | "--config" => config_path = Some(next_value(args, &mut i, flag)?),
            _ if flag.starts_with('-') => return Err(format!("unknown option '{}'", flag)),
            path => {
                if image_path.is_some() {
                    return Err(format!("unexpected argument '{}'", path));
                }
                image_path = Some(path);
            }
        }
        i += 1;
    }

    let image_path = image_path.ok_or("no image given (usage: kolam analyze <image>)")?;
    let config = load_config(config_path)?;
    let source = ImageSource::path(image_path);
    let name = source.name();

    let report = if simple {
        let analysis = analyze_simple(&source, &config.analyzer).map_err(|e| e.to_string())?;
        if let Some(dir) = planes_dir {
            let dir = prepare_dir(dir)?;
            save(dir, "gray", &encode_gray(&analysis.gray)?)?;
            save(dir, "binary", &encode_gray(&analysis.binary)?)?;
            save(dir, "skeleton", &encode_gray(&analysis.skeleton)?)?;
            save(dir, "composite", &analysis.skeleton_composite_png().map_err(|e| e.to_string())?)?;
        }
        AnalysisReport::from_simple(&name, &analysis, &config.classifier)
    } else {
        let max_dim = max_dim.unwrap_or(config.analyzer.max_dim);
        let artifacts = analyze_full(&source, max_dim, &config.analyzer).map_err(|e| e.to_string())?;
        if let Some(dir) = planes_dir {
            let dir = prepare_dir(dir)?;
            for &plane in Plane::all() {
                save(dir, plane.name(), &artifacts.plane_png(plane).map_err(|e| e.to_string())?)?;
            }
            save(dir, "dots", &artifacts.dot_overlay_png().map_err(|e| e.to_string())?)?;
            save(dir, "composite", &artifacts.skeleton_composite_png().map_err(|e| e.to_string())?)?;
        }
        AnalysisReport::from_full(&name, &artifacts, &config.classifier)
    };

    if json {
        let text = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{}", text);
    } else {
        print_summary(&report);
    }
    Ok(())
}

fn print_summary(report: &AnalysisReport) {
    let f = &report.features;
    println!("Image:    {} ({}x{}, {} pipeline)", report.source, report.width, report.height, report.variant);
    println!("Dots:     {}", f.dot_count);
    println!("Skeleton: {} px", f.skeleton_pixels);
    println!("Contours: {}", f.contour_count);
    println!("Dot density:      {:.6}", f.dot_density);
    println!("Skeleton density: {:.6}", f.skeleton_density);
    println!("Avg dot distance: {:.2}", f.avg_dot_distance);
    println!("Class:    {}", report.class);
}

fn encode_gray(gray: &GrayImage) -> Result<Vec<u8>, String> {
    encode_png(&DynamicImage::ImageLuma8(gray.clone())).map_err(|e| e.to_string())
}

fn prepare_dir(dir: &str) -> Result<&Path, String> {
    let path = Path::new(dir);
    fs::create_dir_all(path).map_err(|e| format!("failed to create {}: {}", dir, e))?;
    Ok(path)
}

fn save(dir: &Path, stem: &str, png: &[u8]) -> Result<(), String> {
    let path = dir.join(format!("{}.png", stem));
    fs::write(&path, png).map_err(|e| format!("failed to write {}: {}", path.display(), e))?;
    eprintln!("Wrote: {}", path.display());
    Ok(())
}

pub fn print_usage() {
    eprintln!("Usage: kolam analyze <image> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --simple             Global threshold only (no edges, contours or resizing)");
    eprintln!("  --max-dim <n>        Downscale so the longer side is at most n (default: 1024)");
    eprintln!("  --planes <dir>       Write intermediate images as PNGs into <dir>");
    eprintln!("  --json               Print the full report as JSON");
    eprintln!("  -c, --config <file>  Analyzer and classifier settings");
}
