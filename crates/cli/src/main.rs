#![deny(unsafe_code)]
//! CLI binary for colorgear.
//!
//! Subcommands:
//! - `convert <input>`: show a color in every format
//! - `harmony <scheme> <input>`: list the harmony colors of a base color
//! - `wheel <x> <y>`: look up a pixel on the color wheel
//! - `list`: print supported formats and harmony schemes

mod config;
mod error;

use clap::{Parser, Subcommand};
use colorgear_core::{ColorFormat, ColorReport, ColorWheel, Harmony};
use config::CliConfig;
use error::CliError;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "colorgear", about = "Color format converter and harmony picker")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// JSON config file with defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a color and show it in every format.
    Convert {
        /// Color value, e.g. "#FF5733" or "255, 87, 51".
        #[arg(allow_hyphen_values = true)]
        input: String,

        /// Input format (rgb, hex, cmyk, hsl, hsv).
        #[arg(short, long)]
        from: Option<String>,
    },
    /// Show the harmony colors of a base color.
    Harmony {
        /// Scheme name (complementary, analogous, triadic, tetradic, split-complementary).
        scheme: String,

        /// Base color value.
        #[arg(allow_hyphen_values = true)]
        input: String,

        /// Input format (rgb, hex, cmyk, hsl, hsv).
        #[arg(short, long)]
        from: Option<String>,
    },
    /// Look up the color at a pixel of the color wheel.
    Wheel {
        /// Pixel column.
        #[arg(allow_hyphen_values = true)]
        x: i64,

        /// Pixel row.
        #[arg(allow_hyphen_values = true)]
        y: i64,

        /// Wheel edge length in pixels.
        #[arg(short, long)]
        size: Option<u32>,

        /// Also show the companion points of this harmony scheme.
        #[arg(long)]
        harmony: Option<String>,
    },
    /// List supported formats and harmony schemes.
    List,
}

fn init_logging(verbose: u8, config: &CliConfig) {
    let level = match verbose {
        0 => config.log_level.to_level_filter(),
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn input_format(from: Option<&str>, config: &CliConfig) -> Result<ColorFormat, CliError> {
    match from {
        Some(name) => Ok(name.parse::<ColorFormat>()?),
        None => Ok(config.default_format),
    }
}

fn parse_report(input: &str, format: ColorFormat) -> Result<ColorReport, CliError> {
    log::debug!("parsing {input:?} as {format}");
    let report = ColorReport::parse(format, input)?;
    log::debug!("pivot rgb: {}", report.rgb);
    Ok(report)
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    init_logging(cli.verbose, &config);
    log::debug!("config: {config:?}");

    match cli.command {
        Command::List => {
            let formats: Vec<&str> = ColorFormat::ALL.iter().map(|f| f.name()).collect();
            let harmonies: Vec<&str> = Harmony::ALL.iter().map(|h| h.name()).collect();
            if cli.json {
                let info = serde_json::json!({
                    "formats": formats,
                    "harmonies": harmonies,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Formats:");
                for format in ColorFormat::ALL {
                    println!("  {:<5} {}", format.name(), format.input_hint());
                }
                println!("Harmonies:");
                println!("  {}", harmonies.join(", "));
            }
        }
        Command::Convert { input, from } => {
            let format = input_format(from.as_deref(), &config)?;
            let report = parse_report(&input, format)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for format in ColorFormat::ALL {
                    println!("{:<5} {}", format!("{format}:"), report.render(format));
                }
            }
        }
        Command::Harmony {
            scheme,
            input,
            from,
        } => {
            let harmony: Harmony = scheme.parse()?;
            let format = input_format(from.as_deref(), &config)?;
            let report = parse_report(&input, format)?;
            let colors = harmony.colors(report.rgb)?;
            log::info!("{harmony} of {} -> {} colors", report.hex, colors.len());

            if cli.json {
                let info = serde_json::json!({
                    "scheme": harmony,
                    "base": report,
                    "colors": colors
                        .iter()
                        .map(|&rgb| ColorReport::from_rgb(rgb))
                        .collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("base: {} ({})", report.hex, report.rgb);
                println!("{harmony}:");
                for rgb in colors {
                    println!("  {} ({rgb})", rgb.to_hex());
                }
            }
        }
        Command::Wheel {
            x,
            y,
            size,
            harmony,
        } => {
            let wheel = ColorWheel::new(size.unwrap_or(config.wheel_size))?;
            let hsv = wheel.hsv_at(x, y).ok_or_else(|| {
                CliError::Input(format!(
                    "point ({x}, {y}) is outside a {0}x{0} color wheel",
                    wheel.size()
                ))
            })?;
            let report = ColorReport::from_rgb(hsv.to_rgb()?);
            let harmony = harmony.map(|name| name.parse::<Harmony>()).transpose()?;
            let points = harmony
                .map(|h| wheel.harmony_points(h, x, y))
                .unwrap_or_default();

            if cli.json {
                let info = serde_json::json!({
                    "x": x,
                    "y": y,
                    "size": wheel.size(),
                    "hsv": hsv,
                    "color": report,
                    "harmony": harmony,
                    "points": points,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!(
                    "({x}, {y}): {} hue {:.1}, saturation {:.1}",
                    report.hex, hsv.h, hsv.s
                );
                if let Some(harmony) = harmony {
                    println!("{harmony}:");
                    for p in points {
                        println!("  ({}, {}): {}", p.x, p.y, p.color.to_hex());
                    }
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        log::debug!("exiting with {e:?}");
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
