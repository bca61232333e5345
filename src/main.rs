use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use tailorkit::{
    default_config_path, draft_pattern, estimate_fabric, init_logging, parse_length, Config,
    ExportFormat, GarmentStyle, Measurements, Unit, BUILD_DATE, VERSION,
};

#[derive(Parser)]
#[command(name = "tailorkit", version)]
#[command(about = "Draft sewing patterns from body measurements", long_about = None)]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Config file (.toml or .json); defaults to the platform config dir
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draft a pattern and write its diagram
    Generate {
        /// Inches accept fractions, e.g. "31 1/2"
        #[arg(long)]
        waist: String,
        #[arg(long)]
        hips: String,
        #[arg(long)]
        length: String,
        /// cm or inch
        #[arg(long)]
        unit: Option<Unit>,
        /// pants, pants_with_extras or skirt_like
        #[arg(long)]
        style: Option<GarmentStyle>,
        /// Name used in the diagram title and file name
        #[arg(long)]
        client: Option<String>,
        /// svg or png
        #[arg(long)]
        format: Option<ExportFormat>,
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
        /// Print the pattern set as JSON on stdout
        #[arg(long)]
        json: bool,
    },
    /// Estimate the fabric to buy
    Fabric {
        #[arg(long)]
        length: String,
        #[arg(long)]
        hips: String,
        #[arg(long)]
        unit: Option<Unit>,
        #[arg(long)]
        style: Option<GarmentStyle>,
    },
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a config file holding the defaults
    Init {
        #[arg(long, value_name = "FILE")]
        path: Option<PathBuf>,
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective config as TOML
    Show,
}

fn config_path(explicit: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => Ok(default_config_path()?),
    }
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    Config::load_or_default(path).with_context(|| format!("loading {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json)?;
    debug!("tailorkit {} built {}", VERSION, BUILD_DATE);

    let path = config_path(cli.config)?;

    match cli.command {
        Commands::Generate {
            waist,
            hips,
            length,
            unit,
            style,
            client,
            format,
            output_dir,
            json,
        } => {
            let mut config = load_config(&path)?;
            if let Some(unit) = unit {
                config.drafting.unit = unit;
            }
            if let Some(style) = style {
                config.drafting.style = style;
            }
            if let Some(client) = client {
                config.drafting.client_name = client;
            }
            let format = format.unwrap_or(config.export.format);
            let dir = output_dir.unwrap_or_else(|| config.export.output_dir());

            let measurements =
                Measurements::parse(&waist, &hips, &length, config.drafting.unit)?;
            let request = config.request(measurements);
            let outcome = draft_pattern(&config, &request, format)?;
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("creating {}", dir.display()))?;
            let saved = outcome.document.save_in(&dir)?;

            if json {
                println!("{}", outcome.set.to_json()?);
            } else {
                println!("Pieces: {}", outcome.set.piece_names().join(", "));
                println!("Fabric needed: {}", outcome.fabric);
                println!("Saved {}", saved.display());
            }
        }
        Commands::Fabric {
            length,
            hips,
            unit,
            style,
        } => {
            let config = load_config(&path)?;
            let unit = unit.unwrap_or(config.drafting.unit);
            let read = |name: &str, text: &str| {
                parse_length(text, unit)
                    .map_err(|reason| anyhow::anyhow!("--{}: {}", name, reason))
            };
            let estimate = estimate_fabric(
                style.unwrap_or(config.drafting.style),
                read("length", &length)?,
                read("hips", &hips)?,
                unit,
                &config.constants,
            )?;
            println!("{}", estimate);
        }
        Commands::Config { action } => match action {
            ConfigAction::Init { path: target, force } => {
                let target = target.unwrap_or(path);
                if target.exists() && !force {
                    anyhow::bail!(
                        "{} already exists; pass --force to replace it",
                        target.display()
                    );
                }
                Config::default().save_to_file(&target)?;
                info!("Wrote default config to {}", target.display());
                println!("{}", target.display());
            }
            ConfigAction::Show => {
                let config = load_config(&path)?;
                println!("# {}", path.display());
                print!("{}", toml::to_string_pretty(&config)?);
            }
        },
    }

    Ok(())
}
