//! Config command: print the example file or check one.

use kolam::KolamConfig;

use super::common::{load_config, next_value};

/// Execute the config command.
pub fn cmd_config(args: &[String]) -> Result<(), String> {
    let mut check: Option<&str> = None;

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--example" => {
                print!("{}", KolamConfig::example_yaml());
                return Ok(());
            }
            "--check" => check = Some(next_value(args, &mut i, flag)?),
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            other => return Err(format!("unknown option '{}'", other)),
        }
        i += 1;
    }

    // With no file this shows the built-in defaults.
    let config = load_config(check)?;
    let yaml = serde_yaml::to_string(&config).map_err(|e| e.to_string())?;
    if let Some(path) = check {
        eprintln!("{}: ok", path);
    }
    print!("{}", yaml);
    Ok(())
}

pub fn print_usage() {
    eprintln!("Usage: kolam config [--example | --check <file>]");
    eprintln!();
    eprintln!("  --example        Print a commented config with every default");
    eprintln!("  --check <file>   Validate a config file and print the resolved settings");
    eprintln!();
    eprintln!("With no option, prints the resolved defaults.");
}
