//! devrank: device catalog scoring and ranking tool
//!
//! Ranks device catalogs under adjustable category weights and derives
//! winner / best-value / use-case analyses.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use devrank::{
    cli::{self, CompareConfig, RankConfig, ScoreConfig},
    config::{load_or_default, ConfigError, Validatable},
    ranking::SortKey,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with scoring info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nScoring Categories:",
        "\n  price, performance, battery, camera, display, design, features",
        "\n\nWeight Presets:",
        "\n  balanced, gaming, photography, battery-life, budget",
        "\n\nOutput Formats:",
        "\n  summary, json, markdown, csv"
    )
}

#[derive(Parser)]
#[command(name = "devrank")]
#[command(author = "Binarly.io")]
#[command(version, long_version = build_long_version())]
#[command(about = "Device catalog scoring and ranking tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Threshold not met (--min-score)
    3  Error occurred

EXAMPLES:
    # Rank a catalog with uniform weights
    devrank rank phones.json

    # Rank for gamers, keep the top 10
    devrank rank phones.json --preset gaming --limit 10

    # Machine-readable comparison of two specific devices
    devrank compare phones.json --device ultra-x --device budget-5 -o json

    # Category breakdown for one device
    devrank score phones.json ultra-x")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments for the `rank` subcommand
#[derive(Parser)]
struct RankArgs {
    /// Path to the device catalog (JSON)
    catalog: PathBuf,

    /// Weight preset (balanced, gaming, photography, battery-life, budget)
    #[arg(long, env = "DEVRANK_PRESET")]
    preset: Option<String>,

    /// Sort key for the ranking
    #[arg(long, default_value = "overall")]
    sort_by: SortKey,

    /// Output format
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Keep only the top N devices in the report
    #[arg(long)]
    limit: Option<usize>,

    /// Drop devices priced above this cap before ranking
    #[arg(long)]
    max_price: Option<f64>,

    /// Drop devices rated below this floor before ranking
    #[arg(long)]
    min_rating: Option<f64>,

    /// Exit with code 1 if the top overall score is below this threshold
    #[arg(long)]
    min_score: Option<u32>,
}

/// Arguments for the `compare` subcommand
#[derive(Parser)]
struct CompareArgs {
    /// Path to the device catalog (JSON)
    catalog: PathBuf,

    /// Device id to include (repeatable; whole catalog when omitted)
    #[arg(long = "device", value_name = "ID")]
    devices: Vec<String>,

    /// Weight preset (balanced, gaming, photography, battery-life, budget)
    #[arg(long, env = "DEVRANK_PRESET")]
    preset: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    /// Path to the device catalog (JSON)
    catalog: PathBuf,

    /// Device id to break down
    device_id: String,

    /// Weight preset (balanced, gaming, photography, battery-life, budget)
    #[arg(long, env = "DEVRANK_PRESET")]
    preset: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank a device catalog
    Rank(RankArgs),

    /// Compare devices: winner, best value, category winners, picks
    Compare(CompareArgs),

    /// Show the category score breakdown for one device
    Score(ScoreArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .devrank.yaml in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load config file (if any) and validate it before use
    let (app_config, loaded_from) = load_or_default(cli.config.as_deref());
    if let Some(path) = &loaded_from {
        tracing::debug!("Using config from {}", path.display());
    }
    let validation_errors = app_config.validate();
    if !validation_errors.is_empty() {
        report_config_errors(&validation_errors);
        anyhow::bail!("Configuration is invalid");
    }

    // Dispatch to command handlers
    match cli.command {
        Commands::Rank(args) => {
            let weights = cli::resolve_weights(args.preset.as_deref(), app_config.weights)?;
            let config = RankConfig {
                catalog_path: args.catalog,
                weights,
                sort_key: args.sort_by,
                output: effective_format(args.output, &app_config),
                output_file: args.output_file.or(app_config.output.file),
                limit: args.limit,
                max_price: args.max_price,
                min_rating: args.min_rating,
                min_score: args.min_score.or(app_config.behavior.min_score),
                no_color: cli.no_color || app_config.output.no_color,
                quiet: cli.quiet || app_config.behavior.quiet,
            };
            exit_with(cli::run_rank(config)?)
        }

        Commands::Compare(args) => {
            let weights = cli::resolve_weights(args.preset.as_deref(), app_config.weights)?;
            let config = CompareConfig {
                catalog_path: args.catalog,
                device_ids: args.devices,
                weights,
                output: effective_format(args.output, &app_config),
                output_file: args.output_file.or(app_config.output.file),
                no_color: cli.no_color || app_config.output.no_color,
                quiet: cli.quiet || app_config.behavior.quiet,
            };
            exit_with(cli::run_compare(config)?)
        }

        Commands::Score(args) => {
            let weights = cli::resolve_weights(args.preset.as_deref(), app_config.weights)?;
            let config = ScoreConfig {
                catalog_path: args.catalog,
                device_id: args.device_id,
                weights,
                output: effective_format(args.output, &app_config),
                output_file: args.output_file.or(app_config.output.file),
                no_color: cli.no_color || app_config.output.no_color,
                quiet: cli.quiet || app_config.behavior.quiet,
            };
            exit_with(cli::run_score(config)?)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "devrank", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = devrank::config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::Config { action } => run_config_action(action, cli.config.as_deref()),
    }
}

/// Exit the process for non-zero handler codes
fn exit_with(code: i32) -> Result<()> {
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

/// CLI format wins; otherwise fall back to the config file's format
fn effective_format(cli_format: ReportFormat, config: &devrank::AppConfig) -> ReportFormat {
    if cli_format == ReportFormat::Auto {
        config.output.format
    } else {
        cli_format
    }
}

fn report_config_errors(errors: &[ConfigError]) {
    for error in errors {
        tracing::error!("config: {error}");
    }
}

fn run_config_action(action: ConfigAction, explicit_path: Option<&std::path::Path>) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = load_or_default(explicit_path);
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml_ng::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
            Ok(())
        }
        ConfigAction::Path => {
            let search_paths: [Option<String>; 3] = [
                std::env::current_dir()
                    .ok()
                    .map(|p| p.display().to_string()),
                dirs::config_dir().map(|p| p.join("devrank").display().to_string()),
                dirs::home_dir().map(|p| p.display().to_string()),
            ];
            eprintln!("Config file search paths (in order):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {path}");
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in devrank::config::file::CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match devrank::config::discover_config_file(explicit_path) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
            Ok(())
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".devrank.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            let content = devrank::config::generate_example_config();
            std::fs::write(&target, content)
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
            Ok(())
        }
    }
}
