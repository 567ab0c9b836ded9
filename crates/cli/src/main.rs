#![deny(unsafe_code)]
//! CLI binary for shadescale, a Tailwind-style color scale generator.
//!
//! Subcommands:
//! - `generate [seed]` — build the 50..900 scale from a seed color
//! - `convert <color> <format>` — render one color in hex/rgb/hsl
//! - `shade <lightness>` — map a lightness percentage to its shade key

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use shadescale_core::{
    convert_color, format, generate_palette_with, ColorFormat, ScaleStrategy, ShadeKey,
    Xorshift64,
};
use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser)]
#[command(name = "shadescale", about = "Tailwind-style color scale generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the full 50..900 scale from a seed color.
    Generate {
        /// Seed as hex, e.g. "#3b82f6" or "38f". Omit for a random color.
        seed: Option<String>,

        /// Generation strategy (interpolation, lightness-steps).
        #[arg(short, long, default_value = "interpolation")]
        strategy: String,

        /// Display format for swatch values (hex, rgb, hsl).
        #[arg(short, long, default_value = "hex")]
        format: String,

        /// Write the palette as JSON to a file.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// PRNG seed for a reproducible random color (with no seed argument).
        #[arg(long)]
        random_seed: Option<u64>,
    },
    /// Render one color in a display format (hex, rgb, hsl).
    Convert {
        /// Color as hex, e.g. "#ff0000".
        color: String,

        /// Target format (hex, rgb, hsl).
        format: String,
    },
    /// Print the shade key a lightness percentage maps to.
    Shade {
        /// Lightness in percent, 0-100.
        lightness: f64,
    },
}

/// Picks a random seed color, reproducibly when `random_seed` is given.
fn random_seed_color(random_seed: Option<u64>) -> String {
    let seed = random_seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() ^ u64::from(d.subsec_nanos()))
            .unwrap_or(0)
    });
    Xorshift64::new(seed).next_rgb().to_hex()
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Generate {
            seed,
            strategy,
            format: format_name,
            output,
            random_seed,
        } => {
            let strategy = ScaleStrategy::from_name(&strategy).ok_or_else(|| {
                CliError::Input(format!(
                    "unknown strategy '{strategy}' (expected one of: {})",
                    ScaleStrategy::list_names().join(", ")
                ))
            })?;
            let display = ColorFormat::from_name(&format_name).ok_or_else(|| {
                CliError::Input(format!(
                    "unknown format '{format_name}' (expected one of: {})",
                    ColorFormat::list_names().join(", ")
                ))
            })?;

            let seed = seed.unwrap_or_else(|| random_seed_color(random_seed));
            let palette = generate_palette_with(&seed, strategy)?;

            if let Some(path) = &output {
                let json = serde_json::to_string_pretty(&palette)?;
                fs::write(path, json)
                    .map_err(|e| CliError::Io(format!("writing {}: {e}", path.display())))?;
            }

            if cli.json {
                let info = serde_json::json!({
                    "seed": palette.get(palette.seed_key()).to_hex(),
                    "seed_key": palette.seed_key().as_u16(),
                    "strategy": strategy.name(),
                    "palette": palette,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                for (key, color) in palette.iter() {
                    let marker = if key == palette.seed_key() { "  (seed)" } else { "" };
                    println!("{key:>4}  {}{marker}", format::render(color, display));
                }
            }
        }
        Command::Convert { color, format: format_name } => {
            let target = ColorFormat::from_name(&format_name).ok_or_else(|| {
                CliError::Input(format!(
                    "unknown format '{format_name}' (expected one of: {})",
                    ColorFormat::list_names().join(", ")
                ))
            })?;
            let value = convert_color(&color, target)?;
            if cli.json {
                let info = serde_json::json!({
                    "input": color,
                    "format": format_name,
                    "value": value,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{value}");
            }
        }
        Command::Shade { lightness } => {
            let key = ShadeKey::for_lightness(lightness);
            if cli.json {
                let info = serde_json::json!({
                    "lightness": lightness,
                    "shade": key.as_u16(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{key}");
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
