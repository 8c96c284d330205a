//! CLI command implementations.
//!
//! This module contains the implementations for the CLI subcommands:
//! - `generate` - Draw a kolam pattern to PNG, SVG or JSON
//! - `analyze` - Extract features from a kolam photo and classify it
//! - `config` - Print or check a configuration file

pub mod common;
pub mod generate;
pub mod analyze;
pub mod config;

pub use generate::cmd_generate;
pub use analyze::cmd_analyze;
pub use config::cmd_config;
