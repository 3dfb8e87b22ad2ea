use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use rigsmith::commands::{
    autofix_command, check_command, info_command, init_command, presets_command, report_command,
    score_command, upgrade_command,
};
use tracing_subscriber::EnvFilter;

/// PC build compatibility checker and scorer.
///
/// This CLI is a thin wrapper around `rigsmith-core` (exposed in code as `rigsmith_core`).
/// All substantive logic lives in the library so it can be tested thoroughly
/// and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "rigsmith",
    version,
    about = "PC build compatibility checker and scorer",
    long_about = None
)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence).
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a rigsmith workspace at the given root.
    ///
    /// This will:
    /// - Create a `.rigsmith` metadata directory.
    /// - Create `builds` and `reports` directories.
    /// - Write a `.rigsmith/config.json` config file.
    Init {
        /// Workspace root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Optional workspace name. If omitted, the name is derived from the root directory.
        #[arg(long)]
        name: Option<String>,

        /// Default build preset (e.g., gaming, workstation).
        #[arg(long)]
        preset: Option<String>,

        /// Default performance target (e.g., 1440p-high).
        #[arg(long)]
        target: Option<String>,

        /// Default parts catalog, relative to the root.
        #[arg(long)]
        catalog: Option<String>,
    },

    /// Show configuration and layout of an existing workspace.
    Info {
        /// Workspace root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Run the compatibility rules against a build file.
    Check {
        /// Workspace root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Build file (JSON or YAML).
        #[arg(long)]
        build: String,

        /// Build preset; only affects efficiency notes.
        #[arg(long)]
        preset: Option<String>,

        /// Number of specs entered by hand; each lowers confidence.
        #[arg(long, default_value_t = 0)]
        manual_overrides: u32,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Check and score a build file.
    Score {
        /// Workspace root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Build file (JSON or YAML).
        #[arg(long)]
        build: String,

        /// Build preset used for weighting.
        #[arg(long)]
        preset: Option<String>,

        /// Performance target id; switches performance scoring to target mode.
        #[arg(long)]
        target: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Rank catalog upgrades within a budget.
    Upgrade {
        /// Workspace root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Build file (JSON or YAML).
        #[arg(long)]
        build: String,

        /// Budget in USD.
        #[arg(long)]
        budget: f64,

        /// Parts catalog. Defaults to the workspace catalog.
        #[arg(long)]
        catalog: Option<String>,

        /// Build preset used for scoring.
        #[arg(long)]
        preset: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Plan catalog swaps that resolve compatibility issues.
    Autofix {
        /// Workspace root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Build file (JSON or YAML).
        #[arg(long)]
        build: String,

        /// Candidate ordering: cheapest or performance.
        #[arg(long, default_value = "cheapest")]
        strategy: String,

        /// Parts catalog. Defaults to the workspace catalog.
        #[arg(long)]
        catalog: Option<String>,

        /// Build preset used for the checks.
        #[arg(long)]
        preset: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List build presets and performance targets.
    Presets {
        /// Workspace root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Registry file overriding the built-in presets and targets.
        #[arg(long)]
        registry: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Write a full JSON report for a build into `reports/`.
    Report {
        /// Workspace root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Build file (JSON or YAML).
        #[arg(long)]
        build: String,

        /// Parts catalog, needed with --budget. Defaults to the workspace catalog.
        #[arg(long)]
        catalog: Option<String>,

        /// Include ranked upgrades within this budget (USD).
        #[arg(long)]
        budget: Option<f64>,

        /// Build preset used for scoring.
        #[arg(long)]
        preset: Option<String>,

        /// Performance target id.
        #[arg(long)]
        target: Option<String>,
    },
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize tracing: {e}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Command::Init { root, name, preset, target, catalog } => {
            init_command(&root, name, preset, target, catalog)?
        }
        Command::Info { root, json } => info_command(&root, json)?,
        Command::Check { root, build, preset, manual_overrides, json } => {
            check_command(&root, &build, preset, manual_overrides, json)?
        }
        Command::Score { root, build, preset, target, json } => {
            score_command(&root, &build, preset, target, json)?
        }
        Command::Upgrade { root, build, budget, catalog, preset, json } => {
            upgrade_command(&root, &build, budget, catalog, preset, json)?
        }
        Command::Autofix { root, build, strategy, catalog, preset, json } => {
            autofix_command(&root, &build, &strategy, catalog, preset, json)?
        }
        Command::Presets { root, registry, json } => presets_command(&root, registry, json)?,
        Command::Report { root, build, catalog, budget, preset, target } => {
            report_command(&root, &build, catalog, budget, preset, target)?
        }
    }

    Ok(())
}
