#![deny(unsafe_code)]
//! CLI for the ambient particle field.
//!
//! Subcommands:
//! - `render`: play a scene headlessly for N ticks, write a PNG
//! - `inspect`: print resolved parameters, their schema and particle count
//! - `list`: print available palettes

mod error;
mod render;

use ambient_core::{Scene, TintPalette};
use ambient_field::FieldConfig;
use clap::{ArgAction, Parser, Subcommand};
use error::CliError;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "ambient", about = "Ambient particle field renderer")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a particle field for N ticks and write a PNG snapshot.
    Render {
        /// Scene file (JSON). Overrides every other render flag.
        #[arg(long)]
        scene: Option<PathBuf>,

        /// Surface width in pixels.
        #[arg(short = 'W', long, default_value_t = 1400)]
        width: usize,

        /// Surface height in pixels.
        #[arg(short = 'H', long, default_value_t = 1000)]
        height: usize,

        /// Number of ticks to simulate.
        #[arg(short, long, default_value_t = 240)]
        ticks: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Palette name (cobalt, ember, mint, mono).
        #[arg(short, long)]
        palette: Option<String>,

        /// Pointer held at "X,Y" for the whole run.
        #[arg(long)]
        pointer: Option<String>,

        /// Scroll offset change per tick (scroll velocity).
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        scroll: f64,

        /// Output file path.
        #[arg(short, long, default_value = "field.png")]
        output: PathBuf,

        /// Field parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// Show resolved parameters, schema and particle count for a surface.
    Inspect {
        /// Surface width in pixels.
        #[arg(short = 'W', long, default_value_t = 1400)]
        width: usize,

        /// Surface height in pixels.
        #[arg(short = 'H', long, default_value_t = 1000)]
        height: usize,

        /// Field parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// List available palettes.
    List,
}

fn parse_params(raw: &str) -> Result<serde_json::Value, CliError> {
    let params: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
    if !params.is_object() {
        return Err(CliError::Input("--params must be a JSON object".into()));
    }
    Ok(params)
}

fn parse_pointer(raw: &str) -> Result<[f64; 2], CliError> {
    let bad = || CliError::Input(format!("invalid --pointer {raw:?}: expected X,Y"));
    let (x, y) = raw.split_once(',').ok_or_else(bad)?;
    let x: f64 = x.trim().parse().map_err(|_| bad())?;
    let y: f64 = y.trim().parse().map_err(|_| bad())?;
    Ok([x, y])
}

fn load_scene(path: &Path) -> Result<Scene, CliError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::Input(format!("invalid scene {}: {e}", path.display())))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let palettes = TintPalette::list_names();
            if cli.json {
                let info = serde_json::json!({ "palettes": palettes });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Palettes:");
                for name in palettes {
                    println!("  {name}");
                }
            }
        }
        Command::Inspect {
            width,
            height,
            params,
        } => {
            let params = parse_params(&params)?;
            let config = FieldConfig::from_json(&params);
            let count = config.particle_count(width as f64, height as f64);
            if cli.json {
                let info = serde_json::json!({
                    "width": width,
                    "height": height,
                    "particles": count,
                    "params": config.to_json(),
                    "schema": FieldConfig::schema(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{width}x{height} seeds {count} particles");
                println!("{}", serde_json::to_string_pretty(&config.to_json())?);
            }
        }
        Command::Render {
            scene,
            width,
            height,
            ticks,
            seed,
            palette,
            pointer,
            scroll,
            output,
            params,
        } => {
            let scene = match scene {
                Some(path) => load_scene(&path)?,
                None => {
                    let mut params = parse_params(&params)?;
                    if let Some(name) = palette {
                        TintPalette::from_name(&name)?;
                        params["palette"] = serde_json::Value::String(name);
                    }
                    let mut s = Scene::new(width, height, seed);
                    s.ticks = ticks;
                    s.params = params;
                    s.pointer = pointer.as_deref().map(parse_pointer).transpose()?;
                    s.scroll_per_tick = scroll;
                    s
                }
            };

            let playback = render::play(&scene)?;
            ambient_raster::snapshot::write_png(
                &playback.surface,
                scene.background,
                scene.layer,
                &output,
            )?;

            if cli.json {
                let info = serde_json::json!({
                    "width": scene.width,
                    "height": scene.height,
                    "ticks": playback.ticks,
                    "particles": playback.particles,
                    "seed": scene.seed,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {}x{} ({} particles, {} ticks, seed {}) -> {}",
                    scene.width,
                    scene.height,
                    playback.particles,
                    playback.ticks,
                    scene.seed,
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_pointer_accepts_pairs() {
        assert_eq!(parse_pointer("700,500").unwrap(), [700.0, 500.0]);
        assert_eq!(parse_pointer(" -10.5 , 3 ").unwrap(), [-10.5, 3.0]);
    }

    #[test]
    fn parse_pointer_rejects_garbage() {
        for bad in ["", "700", "a,b", "1,2,3"] {
            assert_eq!(parse_pointer(bad).unwrap_err().exit_code(), 12, "{bad}");
        }
    }

    #[test]
    fn parse_params_requires_object() {
        assert!(parse_params("{\"wind\": 0.1}").is_ok());
        assert_eq!(parse_params("[1]").unwrap_err().exit_code(), 12);
        assert_eq!(parse_params("{oops").unwrap_err().exit_code(), 12);
    }

    #[test]
    fn render_flags_parse() {
        let cli = Cli::try_parse_from([
            "ambient", "render", "-W", "320", "-H", "200", "--pointer", "10,20", "--scroll",
            "-4", "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Render {
                width,
                height,
                scroll,
                pointer,
                ..
            } => {
                assert_eq!((width, height), (320, 200));
                assert_eq!(scroll, -4.0);
                assert_eq!(pointer.as_deref(), Some("10,20"));
            }
            _ => panic!("expected render"),
        }
    }
}
