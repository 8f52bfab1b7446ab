//! `glycoviz` scene inspector: compose a visualization, advance it a few
//! frames and dump the scene graph or its flattened instances.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use glycoviz::engine::NAVIGATION_HINT;
use glycoviz::pathway;
use glycoviz::{GlycovizError, Options, Visualization};

#[derive(Parser)]
#[command(name = "glycoviz")]
#[command(about = "Glycolysis scene inspector: compose, animate and dump scenes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Options TOML file (missing fields use defaults)
    #[arg(short, long, global = true)]
    options: Option<PathBuf>,

    /// Frames to advance before dumping
    #[arg(long, default_value_t = 0, global = true)]
    frames: u32,

    /// Seconds per frame
    #[arg(long, default_value_t = 1.0 / 60.0, global = true)]
    dt: f32,

    /// Start paused
    #[arg(long, global = true)]
    paused: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json, global = true)]
    format: Format,
}

#[derive(Subcommand)]
enum Command {
    /// List the ten pathway steps
    List,
    /// Compose one reaction step
    Step {
        /// Step number, 1..=10
        id: u32,
    },
    /// Compose the energy summary diagram
    Summary,
    /// Compose the standalone glucose model
    Glucose,
    /// Print the options JSON schema
    Schema,
    /// List presets in a directory
    Presets {
        /// Presets directory
        dir: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Scene graph as JSON
    Json,
    /// Scene graph as TOML
    Toml,
    /// Flat shape and label instances as JSON
    Instances,
}

#[derive(Debug)]
enum CliError {
    Glycoviz(GlycovizError),
    Json(serde_json::Error),
    Io(io::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Glycoviz(e) => write!(f, "{e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl From<GlycovizError> for CliError {
    fn from(e: GlycovizError) -> Self {
        Self::Glycoviz(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

fn load_options(cli: &Cli) -> Result<Options, GlycovizError> {
    let mut options = match &cli.options {
        Some(path) => {
            let opts = Options::load(path)?;
            log::info!("Loaded options from {}", path.display());
            opts
        }
        None => Options::default(),
    };
    if cli.paused {
        options.animation.start_animating = false;
    }
    Ok(options)
}

fn dump(cli: &Cli, mut vis: Visualization) -> Result<String, CliError> {
    for _ in 0..cli.frames {
        let _ = vis.frame(cli.dt);
    }
    log::info!(
        "{:?} after {} frames: t={:.3}s, particle={:.2}",
        vis.kind(),
        cli.frames,
        vis.elapsed(),
        vis.particle_progress()
    );
    let text = match cli.format {
        Format::Json => vis.graph().to_json()?,
        Format::Toml => vis.graph().to_toml()?,
        Format::Instances => serde_json::to_string_pretty(&serde_json::json!({
            "kind": vis.kind(),
            "hint": NAVIGATION_HINT,
            "controls": vis.controls(),
            "shapes": vis.shape_instances().iter().map(|s| serde_json::json!({
                "position": s.position(),
                "color": s.color,
            })).collect::<Vec<_>>(),
            "labels": vis.label_instances(),
        }))?,
    };
    Ok(text)
}

fn list_steps() -> String {
    pathway::steps()
        .iter()
        .map(|s| format!("{:>2}  {}  ({})", s.id, s.name, s.enzyme))
        .collect::<Vec<_>>()
        .join("\n")
}

fn run(cli: &Cli) -> Result<String, CliError> {
    match &cli.command {
        Command::List => Ok(list_steps()),
        Command::Schema => {
            Ok(serde_json::to_string_pretty(&Options::json_schema())?)
        }
        Command::Presets { dir } => Ok(Options::list_presets(dir).join("\n")),
        Command::Step { id } => {
            let vis = Visualization::for_step_id(*id, load_options(cli)?)?;
            dump(cli, vis)
        }
        Command::Summary => dump(cli, Visualization::summary(load_options(cli)?)),
        Command::Glucose => {
            dump(cli, Visualization::glucose_viewer(load_options(cli)?))
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli).and_then(|text| {
        let mut out = io::stdout().lock();
        writeln!(out, "{text}").map_err(CliError::from)
    }) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
