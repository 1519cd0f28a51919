#![deny(unsafe_code)]
//! CLI binary for tonal.
//!
//! Subcommands:
//! - `convert <l> <c> <h>`: OKLCh to sRGB/hex with gamut check
//! - `hex <#rrggbb>`: approximate and exact OKLCh for a hex color
//! - `contrast <fg> <bg>`: WCAG ratio and AA/AAA classification
//! - `scale`: the eased lightness scale
//! - `palette <name>`: generate and export one tonal palette
//! - `batch <file>`: generate every palette in a JSON request file
//! - `plane`: write the chroma × hue picker plane as a PNG

mod error;
mod export;

use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Builder;
use error::CliError;
use log::{debug, info, LevelFilter};
use serde_json::json;
use std::path::PathBuf;
use std::process;
use tonal_core::palette::ColorPalette;
use tonal_core::request::{PaletteFile, PaletteRequest, DEFAULT_STEPS};
use tonal_core::{
    classify, contrast_ratio, hex_to_oklch_approx, hex_to_rgb, lightness_scale, rgb_to_oklch,
    ContrastResult, OkLch, MAX_CHROMA,
};
use tonal_render::{snapshot, Plane, DEFAULT_PLANE_SIZE};

#[derive(Parser)]
#[command(name = "tonal", about = "OKLCh tonal palettes with WCAG contrast")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log debug events to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert an OKLCh color to sRGB and hex.
    Convert {
        /// Lightness in [0, 1].
        l: f64,
        /// Chroma in [0, 0.4].
        c: f64,
        /// Hue in degrees; wrapped into [0, 360).
        #[arg(allow_negative_numbers = true)]
        h: f64,
    },
    /// Show the approximate and exact OKLCh of a hex color.
    Hex {
        /// Color as #rrggbb.
        hex: String,
    },
    /// Compute the WCAG contrast ratio between two hex colors.
    Contrast {
        /// Foreground color as #rrggbb.
        foreground: String,
        /// Background color as #rrggbb.
        background: String,
    },
    /// Print the eased lightness scale.
    Scale {
        /// Number of steps (at least 2).
        #[arg(short, long, default_value_t = DEFAULT_STEPS)]
        steps: usize,
    },
    /// Generate a tonal palette from one base color.
    Palette {
        /// Palette name, used for variant labels.
        name: String,

        /// Base color as "l,c,h".
        #[arg(long, value_parser = parse_oklch, conflicts_with = "hex", required_unless_present = "hex")]
        oklch: Option<OkLch>,

        /// Base color as #rrggbb, seeded through the approximate inverse.
        #[arg(long)]
        hex: Option<String>,

        /// Number of tonal steps.
        #[arg(short, long, default_value_t = DEFAULT_STEPS)]
        steps: usize,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Also write a swatch strip PNG to this path.
        #[arg(long)]
        png: Option<PathBuf>,
    },
    /// Generate every palette listed in a JSON request file.
    Batch {
        /// Path to a JSON file of the form {"palettes": [...]}.
        file: PathBuf,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Write the chroma × hue plane at one lightness as a PNG.
    Plane {
        /// Fixed lightness in [0, 1].
        #[arg(short, long, default_value_t = 0.7)]
        lightness: f64,

        /// Edge length in pixels.
        #[arg(long, default_value_t = DEFAULT_PLANE_SIZE)]
        size: usize,

        /// Chroma at the top edge.
        #[arg(long, default_value_t = MAX_CHROMA)]
        max_chroma: f64,

        /// Output file path.
        #[arg(short, long, default_value = "plane.png")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Css,
    Tokens,
    Tailwind,
}

/// Parses "l,c,h" into a domain-checked color.
fn parse_oklch(s: &str) -> Result<OkLch, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [l, c, h] = parts.as_slice() else {
        return Err(format!("expected \"l,c,h\", got {s:?}"));
    };
    let num = |name: &str, v: &str| {
        v.parse::<f64>()
            .map_err(|e| format!("invalid {name} {v:?}: {e}"))
    };
    OkLch::new(num("lightness", *l)?, num("chroma", *c)?, num("hue", *h)?)
        .map_err(|e| e.to_string())
}

/// Formats palettes for stdout in the requested format.
fn render_palettes(palettes: &[ColorPalette], format: Format) -> Result<String, CliError> {
    let out = match format {
        Format::Json => serde_json::to_string_pretty(palettes)?,
        Format::Css => export::css_variables(palettes),
        Format::Tokens => serde_json::to_string_pretty(&export::style_dictionary_tokens(palettes))?,
        Format::Tailwind => export::tailwind_config(palettes),
        Format::Text => {
            let mut out = String::new();
            for palette in palettes {
                let base = palette.base_color();
                out.push_str(&format!(
                    "{} (base {})\n",
                    palette.name(),
                    export::css_oklch(base)
                ));
                for v in palette {
                    out.push_str(&format!(
                        "  {:<20} {}  {}  white {:>5.2} {:<3}  black {:>5.2} {:<3}{}\n",
                        v.name,
                        v.hex,
                        export::css_oklch(v.oklch),
                        v.contrast.white,
                        level(v.contrast.aa_white, v.contrast.aaa_white),
                        v.contrast.black,
                        level(v.contrast.aa_black, v.contrast.aaa_black),
                        if v.in_gamut { "" } else { "  (clamped)" },
                    ));
                }
            }
            out.trim_end().to_string()
        }
    };
    Ok(out)
}

fn level(aa: bool, aaa: bool) -> &'static str {
    match (aa, aaa) {
        (_, true) => "AAA",
        (true, false) => "AA",
        (false, false) => "-",
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Convert { l, c, h } => {
            let color = OkLch::new(l, c, h)?;
            let conv = color.to_rgb();
            debug!("convert {color:?} -> {conv:?}");
            if cli.json {
                let contrast = conv.rgb().map(ContrastResult::for_color);
                let info = json!({
                    "oklch": color,
                    "valid": conv.valid,
                    "rgb": conv.rgb().map(|rgb| json!({"r": rgb.r, "g": rgb.g, "b": rgb.b})),
                    "hex": conv.rgb().map(|rgb| rgb.to_hex()),
                    "contrast": contrast,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else if let Some(rgb) = conv.rgb() {
                let contrast = ContrastResult::for_color(rgb);
                println!("{rgb}  rgb({}, {}, {})", rgb.r, rgb.g, rgb.b);
                println!(
                    "white {:.2} {}  black {:.2} {}",
                    contrast.white,
                    level(contrast.aa_white, contrast.aaa_white),
                    contrast.black,
                    level(contrast.aa_black, contrast.aaa_black),
                );
            } else {
                println!("{} is outside the sRGB gamut", export::css_oklch(color));
            }
        }
        Command::Hex { hex } => {
            let rgb = hex_to_rgb(&hex)?;
            let approx = hex_to_oklch_approx(&hex)?;
            let exact = rgb_to_oklch(rgb);
            if cli.json {
                let info = json!({
                    "hex": rgb.to_hex(),
                    "approx": approx,
                    "exact": exact,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("approx {}", export::css_oklch(approx));
                println!("exact  {}", export::css_oklch(exact));
            }
        }
        Command::Contrast {
            foreground,
            background,
        } => {
            let fg = hex_to_rgb(&foreground)?;
            let bg = hex_to_rgb(&background)?;
            let ratio = contrast_ratio(fg, bg);
            let compliance = classify(ratio);
            if cli.json {
                let info = json!({
                    "foreground": fg,
                    "background": bg,
                    "ratio": ratio,
                    "aa": compliance.aa,
                    "aaa": compliance.aaa,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!(
                    "{fg} on {bg}: {ratio:.2}:1 {}",
                    level(compliance.aa, compliance.aaa)
                );
            }
        }
        Command::Scale { steps } => {
            let scale = lightness_scale(steps)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&scale)?);
            } else {
                for (i, l) in scale.iter().enumerate() {
                    println!("{:>5}  {l:.4}", (i + 1) * 100);
                }
            }
        }
        Command::Palette {
            name,
            oklch,
            hex,
            steps,
            format,
            png,
        } => {
            let request = match (oklch, hex) {
                (Some(base), _) => PaletteRequest::new(&name, base),
                (None, Some(hex)) => PaletteRequest::from_hex(&name, &hex)?,
                (None, None) => {
                    return Err(CliError::Input(
                        "one of --oklch or --hex is required".to_string(),
                    ))
                }
            }
            .with_steps(steps);
            let palette = request.generate()?;
            info!("generated {} with {} steps", palette.name(), palette.len());

            if let Some(path) = png {
                snapshot::write_palette_png(&palette, 48, 48, &path)?;
                eprintln!("wrote swatches -> {}", path.display());
            }

            let format = if cli.json { Format::Json } else { format };
            println!(
                "{}",
                render_palettes(std::slice::from_ref(&palette), format)?
            );
        }
        Command::Batch { file, format } => {
            let text = std::fs::read_to_string(&file)?;
            let palettes = PaletteFile::from_json_str(&text)
                .and_then(|requests| requests.generate_all())
                .map_err(|e| CliError::from_palette_file(&file, e))?;
            info!("generated {} palettes from {}", palettes.len(), file.display());
            let format = if cli.json { Format::Json } else { format };
            println!("{}", render_palettes(&palettes, format)?);
        }
        Command::Plane {
            lightness,
            size,
            max_chroma,
            output,
        } => {
            let plane = Plane::new(size, size, lightness, max_chroma)?;
            snapshot::write_plane_png(&plane, &output)?;
            let coverage = tonal_render::pixel::gamut_coverage(&plane);

            if cli.json {
                let info = json!({
                    "lightness": lightness,
                    "size": size,
                    "max_chroma": max_chroma,
                    "gamut_coverage": coverage,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered plane (l={lightness}, {size}x{size}, {:.1}% in gamut) -> {}",
                    coverage * 100.0,
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn init_logger(verbose: bool) {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
        return;
    }
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    Builder::new().filter_level(level).init();
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);
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
