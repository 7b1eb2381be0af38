//! RecStore - name/value record store with checked lookups
//!
//! Seeds an in-memory store with records and reports requested names.
//! A name with no record is reported as an error; it never crashes the
//! process.
//!
//! Exit codes:
//!   0 - Success (every name found, or --strict not set)
//!   1 - Runtime error (config, output encoding, etc.)
//!   2 - Some names had no record and --strict is set

mod cli;
mod config;
mod models;
mod reporter;
mod store;

use anyhow::{Context, Result};
use cli::Args;
use config::{Config, DEFAULT_CONFIG_FILE};
use models::ReportSummary;
use reporter::Reporter;
use std::path::Path;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    init_logging(&args);

    info!("RecStore v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    match run(args) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            error!("Run failed: {}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .recstore.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(DEFAULT_CONFIG_FILE);

    if path.exists() {
        eprintln!(
            "{} already exists. Remove it first or edit it manually.",
            DEFAULT_CONFIG_FILE
        );
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", DEFAULT_CONFIG_FILE))?;

    println!("Created {} with default settings.", DEFAULT_CONFIG_FILE);
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr so report output on stdout stays clean.
fn init_logging(args: &Args) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Build the store and report every requested name. Returns exit code (0 or 2).
fn run(args: Args) -> Result<i32> {
    run_in(&args, Path::new("."))
}

/// Run against `dir` as the working directory for `.recstore.toml` lookup.
fn run_in(args: &Args, dir: &Path) -> Result<i32> {
    let mut config = load_config(args, dir)?;
    config.merge_with_args(args);
    config.validate()?;

    let store = config.build_store();
    if store.is_empty() {
        warn!("Store has no records; every lookup will miss");
    } else {
        info!("Store seeded with {} records", store.len());
    }

    let format = config.report.format;

    if args.list {
        print!("{}", reporter::render_records(store.iter(), format)?);
        return Ok(0);
    }

    let summary = Reporter::new(&store).report_all(&config.report.lookups);

    print!("{}", reporter::render_summary(&summary, format)?);
    for e in &summary.missing {
        eprintln!("Error: {}", e);
    }

    debug!(
        "Reported {} names, {} missing",
        summary.found.len(),
        summary.missing.len()
    );

    let code = exit_code(&summary, config.report.strict);
    if code != 0 {
        eprintln!(
            "{} names had no record. Failing (exit code {}).",
            summary.missing.len(),
            code
        );
    }

    Ok(code)
}

/// Exit code for a finished report: 2 on misses under strict mode, else 0.
fn exit_code(summary: &ReportSummary, strict: bool) -> i32 {
    if strict && summary.has_missing() {
        2
    } else {
        0
    }
}

/// Load configuration from file or use defaults.
///
/// An explicit `--config` must load. A broken `.recstore.toml` in `dir` is
/// logged and replaced by defaults.
fn load_config(args: &Args, dir: &Path) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_from_dir(dir) {
        Ok(Some(config)) => {
            info!("Loaded default config from {}", DEFAULT_CONFIG_FILE);
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {:#}", e);
            Ok(Config::default())
        }
    }
}
