//! Generate command implementation.

use kolam::{generate_drawing, render_png, PatternKind, PatternRequest};

use super::common::{load_config, next_value, parse_next, write_output, OutputFormat};

/// Execute the generate command.
pub fn cmd_generate(args: &[String]) -> Result<(), String> {
    let mut request_path: Option<&str> = None;
    let mut config_path: Option<&str> = None;
    let mut output_path = "kolam.png";
    let mut json = false;
    let mut dpi: Option<u32> = None;
    // Flags are applied on top of the request file, so collect them first.
    let mut overrides: Vec<(&str, &str)> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            "-r" | "--request" => request_path = Some(next_value(args, &mut i, flag)?),
            "-c" | "--config" => config_path = Some(next_value(args, &mut i, flag)?),
            "-o" | "--output" => output_path = next_value(args, &mut i, flag)?,
            "--json" => json = true,
            "--dpi" => dpi = Some(parse_next(args, &mut i, flag)?),
            "--no-dots" => overrides.push((flag, "")),
            _ if flag.starts_with('-') => {
                let value = next_value(args, &mut i, flag)?;
                overrides.push((flag, value));
            }
            other => return Err(format!("unexpected argument '{}'", other)),
        }
        i += 1;
    }

    let mut request = match request_path {
        Some(path) => PatternRequest::load(path).map_err(|e| e.to_string())?,
        None => PatternRequest::default(),
    };
    for (flag, value) in overrides {
        apply_flag(&mut request, flag, value)?;
    }

    let mut config = load_config(config_path)?;
    if let Some(dpi) = dpi {
        config.render.dpi = dpi;
    }

    let drawing = generate_drawing(&request, &config.limits).map_err(|e| e.to_string())?;
    eprintln!(
        "Pattern: {} ({} primitives)",
        request.pattern,
        drawing.primitives.len()
    );

    if json {
        let text = serde_json::to_string_pretty(&drawing).map_err(|e| e.to_string())?;
        println!("{}", text);
        return Ok(());
    }

    match OutputFormat::from_path(output_path) {
        OutputFormat::Svg => write_output(output_path, drawing.to_svg(&config.render).as_bytes()),
        OutputFormat::Json => {
            let text = serde_json::to_string_pretty(&drawing).map_err(|e| e.to_string())?;
            write_output(output_path, text.as_bytes())
        }
        OutputFormat::Png => {
            let png = render_png(&drawing, &config.render).map_err(|e| e.to_string())?;
            write_output(output_path, &png)
        }
    }
}

/// Set one request field from a command-line flag.
fn apply_flag(request: &mut PatternRequest, flag: &str, value: &str) -> Result<(), String> {
    fn parse<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, String> {
        value.parse().map_err(|_| format!("invalid value for {}: '{}'", flag, value))
    }
    fn color(flag: &str, value: &str) -> Result<kolam::Color, String> {
        value.parse().map_err(|e: kolam::KolamError| format!("{}: {}", flag, e))
    }

    match flag {
        "-p" | "--pattern" => {
            request.pattern = value.parse::<PatternKind>().map_err(|e| e.to_string())?;
        }
        "--rows" => request.rows = parse(flag, value)?,
        "--cols" => request.cols = parse(flag, value)?,
        "-s" | "--spacing" => request.spacing = parse(flag, value)?,
        "--radius" => request.radius = parse(flag, value)?,
        "--n-petals" => request.n_petals = parse(flag, value)?,
        "--petals" => request.petals = parse(flag, value)?,
        "--rings" => request.rings = parse(flag, value)?,
        "--ring-scale" => request.ring_scale = parse(flag, value)?,
        "--depth" => request.fractal_depth = parse(flag, value)?,
        "--turns" => request.turns = parse(flag, value)?,
        "--layers" => request.layers = parse(flag, value)?,
        "--style" => request.weave_style = value.to_string(),
        "--no-dots" => request.dot_grid = false,
        "--dot-radius" => request.dot_radius = parse(flag, value)?,
        "--line-color" => request.line_color = color(flag, value)?,
        "--dot-color" => request.dot_color = color(flag, value)?,
        "--bg-color" => request.bg_color = color(flag, value)?,
        "--line-width" => request.line_width = parse(flag, value)?,
        other => return Err(format!("unknown option '{}' (see 'kolam generate --help')", other)),
    }
    Ok(())
}

pub fn print_usage() {
    eprintln!("Usage: kolam generate [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -p, --pattern <name>    weave, radial, fractal, spiral, mandala, lattice, flower, rosette");
    eprintln!("  -o, --output <file>     Output file, .png/.svg/.json (default: kolam.png, '-' for stdout)");
    eprintln!("  -r, --request <file>    Load parameters from a YAML/JSON request file");
    eprintln!("  -c, --config <file>     Limits and render settings");
    eprintln!("  --json                  Print the primitives as JSON instead of rendering");
    eprintln!("  --dpi <n>               Output resolution (default: 200)");
    eprintln!();
    eprintln!("Pattern parameters:");
    eprintln!("  --rows <n>  --cols <n>  Dot grid size (default: 9 x 9)");
    eprintln!("  -s, --spacing <n>       Grid pitch / spiral growth (default: 1.0)");
    eprintln!("  --radius <n>            Base radius (default: 1.5)");
    eprintln!("  --n-petals <n>          Petals for radial, mandala, flower (default: 8)");
    eprintln!("  --petals <n>            Petals for rosette (default: 8)");
    eprintln!("  --rings <n>             Radial rings (default: 3)");
    eprintln!("  --ring-scale <n>        Radial ring shrink factor (default: 0.8)");
    eprintln!("  --depth <n>             Fractal depth (default: 3)");
    eprintln!("  --turns <n>             Spiral turns (default: 6)");
    eprintln!("  --layers <n>            Mandala/rosette layers (default: 5)");
    eprintln!("  --style <name>          Weave style (see 'kolam styles')");
    eprintln!("  --no-dots               Hide the weave dot grid");
    eprintln!("  --dot-radius <n>        Dot radius (default: 0.05)");
    eprintln!("  --line-color <color>    Any CSS color (default: black)");
    eprintln!("  --dot-color <color>     (default: black)");
    eprintln!("  --bg-color <color>      (default: white)");
    eprintln!("  --line-width <pt>       Stroke width in points (default: 1.5)");
}
