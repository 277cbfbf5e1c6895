//! chordmap — turn OCR text from a score into a chord map.
//!
//! `chordmap analyze song.txt` prints the inferred map;
//! `chordmap render song_chord_map.json` re-renders a saved export.

use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use chordmap::config::{Config, OutputFormat, Overrides, Settings};
use chordmap::map::{read_export, render_text, write_export, ChordMapExport};
use chordmap::{ChordMap, ChordMapper, Result};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Config file (defaults to ~/.chordmap/config.yaml)
    #[arg(long, global = true, env = "CHORDMAP_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Infer a chord map from OCR text
    Analyze {
        /// Input text file; stdin when absent or "-"
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Let labeled lines ("Chorus: ...") override inferred sections
        #[arg(long)]
        labels: bool,

        /// Ignore labeled lines even when the config enables them
        #[arg(long, conflicts_with = "labels")]
        no_labels: bool,

        /// Also write a JSON export into this directory
        #[arg(long)]
        export_dir: Option<PathBuf>,
    },
    /// Print a saved JSON export
    Render {
        /// Export file written by `analyze --export-dir`
        export: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "chordmap=debug" } else { "chordmap=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    let config = Config::load_or_default(args.config.as_deref())?;
    debug!(?config, "loaded configuration");

    match args.command {
        Command::Analyze {
            input,
            format,
            labels,
            no_labels,
            export_dir,
        } => {
            let overrides = Overrides {
                format,
                labels,
                no_labels,
                export_dir,
            };
            let settings = Settings::resolve(&config, &overrides);
            debug!(?settings, "resolved settings");

            let text = read_input(input.as_deref(), std::io::stdin())?;
            let mapper = ChordMapper::new().with_explicit_labels(settings.explicit_labels);
            let map = mapper.analyze(&text);
            info!(title = %map.title, "analyzed input");

            if let Some(dir) = &settings.export_dir {
                let path = write_export(dir, &map, Some(Utc::now()))?;
                eprintln!("exported {}", path.display());
            }

            println!("{}", format_map(&map, settings.format)?);
        }
        Command::Render { export, format } => {
            let map = read_export(&export)?;
            println!("{}", format_map(&map, format)?);
        }
    }

    Ok(())
}

/// Read the file at `path`, or all of `stdin` when `path` is absent or `-`.
fn read_input(path: Option<&Path>, mut stdin: impl Read) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => Ok(std::fs::read_to_string(p)?),
        _ => {
            let mut text = String::new();
            stdin.read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn format_map(map: &ChordMap, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => ChordMapExport::new(map, None).to_json()?,
        OutputFormat::Yaml => serde_yaml::to_string(map)?,
        OutputFormat::Text => render_text(map),
    })
}
