//! Konektado - Complaint Analytics Dashboard Generator
//!
//! A CLI tool that aggregates complaint/ticket records into
//! chart-ready summaries and renders a static dashboard report.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (missing dataset, parse failure, fetch failure, etc.)

mod analysis;
mod cli;
mod config;
mod feed;
mod models;
mod report;
mod source;

use anyhow::{Context, Result};
use cli::{Args, OutputFormat};
use config::Config;
use models::ComplaintRecord;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
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

    // Initialize logging
    init_logging(&args);

    info!("Konektado v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    match run_dashboard(args).await {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            error!("Dashboard generation failed: {}", e);
            eprintln!("\n❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .konektado.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(".konektado.toml");

    if path.exists() {
        eprintln!("⚠️  .konektado.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .konektado.toml")?;

    println!("✅ Created .konektado.toml with default settings.");
    println!("   Edit it to customize the dataset source and report output.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete dashboard workflow. Returns exit code.
async fn run_dashboard(args: Args) -> Result<i32> {
    let start_time = Instant::now();

    // Load configuration
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    // Step 1: Load the records
    let (records, source_label) = load_records(&config).await?;

    // Handle --dry-run: count records and exit
    if args.dry_run {
        return handle_dry_run(&records, &source_label);
    }

    // Step 2: Aggregate into the dashboard
    println!("📊 Aggregating {} records...", records.len());

    let mut dashboard = analysis::build_dashboard(
        &records,
        &source_label,
        config.report.effective_feed_limit(),
    );
    dashboard.metadata.duration_seconds = start_time.elapsed().as_secs_f64();

    // Step 3: Render and save the report
    println!("📝 Generating report...");

    let output = match config.report.format {
        OutputFormat::Json => report::generate_json_report(&dashboard)?,
        OutputFormat::Markdown => {
            report::generate_markdown_report(&dashboard, &config.report.placeholder)
        }
    };

    let output_path = Path::new(&config.general.output);
    report::write_report(&output, output_path)
        .with_context(|| format!("Failed to write report to {}", output_path.display()))?;

    // Print summary
    println!("\n📈 Dashboard Summary:");
    println!("   Records: {}", dashboard.metadata.total_records);
    println!(
        "   Days with complaints: {} | Regions: {} | NCR cities: {}",
        dashboard.daily.len(),
        dashboard.regions.len(),
        dashboard.ncr_cities.len()
    );
    println!(
        "   - Network Issue: {} | Other: {}",
        dashboard.complaint_types[0].value, dashboard.complaint_types[1].value
    );
    println!(
        "   - No Internet: {} | Slow Internet: {}",
        dashboard.network_issues[0].value, dashboard.network_issues[1].value
    );
    println!(
        "\n✅ Dashboard complete! Report saved to: {}",
        output_path.display()
    );

    Ok(0)
}

/// Handle --dry-run: print dataset counts, write nothing.
fn handle_dry_run(records: &[ComplaintRecord], source_label: &str) -> Result<i32> {
    println!("\n🔍 Dry run: loaded {} records from {}\n", records.len(), source_label);

    if records.is_empty() {
        println!("   No records found.");
    } else {
        let valid_dates = records.iter().filter(|r| r.utc_day().is_some()).count();
        let network_issues = records.iter().filter(|r| r.is_network_issue()).count();
        let ncr = records.iter().filter(|r| r.is_ncr()).count();

        println!("   With parseable date: {}", valid_dates);
        println!("   Network issues: {}", network_issues);
        println!("   NCR-flagged: {}", ncr);
    }

    println!("\n✅ Dry run complete. No report was written.");
    Ok(0)
}

/// Load records from the configured source (URL takes precedence).
async fn load_records(config: &Config) -> Result<(Vec<ComplaintRecord>, String)> {
    if let Some(ref url) = config.source.url {
        println!("📥 Fetching dataset: {}", url);
        let records = source::fetch_url(url, config.source.timeout_seconds)
            .await
            .with_context(|| format!("Failed to fetch dataset from {}", url))?;
        return Ok((records, url.clone()));
    }

    let path = Path::new(&config.source.input);
    println!("📥 Reading dataset: {}", path.display());
    let records = source::load_file(path)
        .with_context(|| format!("Failed to load dataset from {}", path.display()))?;

    Ok((records, config.source.input.clone()))
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .konektado.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
