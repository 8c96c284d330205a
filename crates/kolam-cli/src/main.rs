//! kolam - CLI for kolam pattern generation and photo analysis
//!
//! Usage:
//!   kolam generate -p <pattern> -o out.png   Draw a pattern
//!   kolam analyze <image>                    Classify a kolam photo
//!   kolam patterns                           List available patterns
//!   kolam styles                             List weave styles
//!   kolam config --example                   Print a config file

use std::env;

use tracing_subscriber::EnvFilter;

use kolam::{weave_style_names, PatternKind};

mod cli;

use cli::{cmd_analyze, cmd_config, cmd_generate};

fn main() {
    // RUST_LOG=debug shows per-stage pipeline logs; stdout stays clean for output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let prog = args.first().map(String::as_str).unwrap_or("kolam");

    let Some(command) = args.get(1) else {
        print_usage(prog);
        std::process::exit(1);
    };

    let result = match command.as_str() {
        "generate" => cmd_generate(&args[2..]),
        "analyze" => cmd_analyze(&args[2..]),
        "config" => cmd_config(&args[2..]),
        "patterns" => {
            cmd_patterns();
            Ok(())
        }
        "styles" => {
            cmd_styles();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage(prog);
            Ok(())
        }
        other => Err(format!("unknown command '{}' (see '{} help')", other, prog)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_usage(prog: &str) {
    eprintln!("kolam - procedural kolam patterns and kolam photo analysis");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} generate [-p <pattern>] [options]   Draw a pattern (see generate --help)", prog);
    eprintln!("  {} analyze <image> [options]           Classify a photo (see analyze --help)", prog);
    eprintln!("  {} patterns                            List patterns and their parameters", prog);
    eprintln!("  {} styles                              List weave styles", prog);
    eprintln!("  {} config [--example | --check <f>]    Show or validate configuration", prog);
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} generate -p mandala --layers 7 -o mandala.png", prog);
    eprintln!("  {} generate -p weave --style zigzag -o weave.svg", prog);
    eprintln!("  {} analyze photo.jpg --json", prog);
    eprintln!();
    eprintln!("Set RUST_LOG=debug for per-stage logs, RUST_LOG=warn to silence them.");
}

fn cmd_patterns() {
    println!("Available patterns:");
    for pattern in PatternKind::all() {
        let meta = pattern.metadata();
        println!("  {:<10} {}", pattern.name(), meta.description);
        println!("  {:<10} params: {}", "", meta.parameters.join(", "));
    }
}

fn cmd_styles() {
    println!("Weave styles:");
    for name in weave_style_names() {
        println!("  {}", name);
    }
}
