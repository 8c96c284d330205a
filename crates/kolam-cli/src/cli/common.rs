//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use kolam::KolamConfig;

/// Output format chosen from the output file name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Png,
    Svg,
    Json,
}

impl OutputFormat {
    /// Pick a format from a file extension; anything unknown is PNG.
    pub fn from_path(path: &str) -> OutputFormat {
        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("svg") => OutputFormat::Svg,
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Png,
        }
    }
}

/// Take the value following a flag, advancing the cursor.
pub fn next_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i).map(String::as_str).ok_or_else(|| format!("{} needs a value", flag))
}

/// Take and parse the value following a flag.
pub fn parse_next<T: FromStr>(args: &[String], i: &mut usize, flag: &str) -> Result<T, String> {
    let raw = next_value(args, i, flag)?;
    raw.parse().map_err(|_| format!("invalid value for {}: '{}'", flag, raw))
}

/// Load `--config` if given, otherwise defaults.
pub fn load_config(path: Option<&str>) -> Result<KolamConfig, String> {
    match path {
        Some(path) => KolamConfig::load(path).map_err(|e| e.to_string()),
        None => Ok(KolamConfig::default()),
    }
}

/// Write bytes to a file, or to stdout for "-".
pub fn write_output(path: &str, data: &[u8]) -> Result<(), String> {
    if path == "-" {
        let mut stdout = io::stdout().lock();
        stdout.write_all(data).map_err(|e| format!("failed to write stdout: {}", e))?;
        return stdout.flush().map_err(|e| format!("failed to write stdout: {}", e));
    }
    fs::write(path, data).map_err(|e| format!("failed to write {}: {}", path, e))?;
    eprintln!("Wrote: {}", path);
    Ok(())
}
