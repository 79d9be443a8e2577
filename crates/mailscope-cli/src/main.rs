//! Command-line interface for mailscope.
//!
//! Two subcommands sit on top of the resolution pipeline: `lookup` for a
//! single address and `batch` for a newline-separated file of them.
//! Results come back from the cache when available, so repeated runs
//! are cheap.

use anyhow::Context;
use clap::{Parser, Subcommand};
use mailscope_core::{AppConfig, EmailAddress, ProfileRecord};
use mailscope_db::Database;
use mailscope_resolver::{BatchCoordinator, ResolutionPipeline};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "mailscope", version, about = "Resolve email addresses to public profile records")]
struct Cli {
    /// Path to the lookup cache database (defaults to the platform data dir)
    #[arg(long, global = true, value_name = "PATH")]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one email address
    Lookup {
        /// The email address to resolve
        email: String,

        /// Print the record as JSON instead of the human-readable form
        #[arg(long)]
        json: bool,
    },
    /// Resolve every address in a file, one address per line
    Batch {
        /// Path to the input file
        file: PathBuf,

        /// Print the records as JSON instead of the per-address summary
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("mailscope error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing()?;

    let mut config = AppConfig::load_with_env().context("failed to load configuration")?;
    if let Some(path) = cli.database {
        config.database.path = Some(path);
    }

    let db_path = config.database.resolved_path()?;
    let database = Database::new(&db_path)
        .await
        .with_context(|| format!("failed to open lookup cache at {}", db_path.display()))?;
    database
        .run_migrations()
        .await
        .context("failed to migrate lookup cache")?;

    let pipeline = ResolutionPipeline::from_config(&config, Arc::new(database))
        .context("failed to assemble the resolution pipeline")?;

    match cli.command {
        Commands::Lookup { email, json } => run_lookup(&pipeline, &email, json).await,
        Commands::Batch { file, json } => {
            run_batch(&config, Arc::new(pipeline), &file, json).await
        }
    }
}

async fn run_lookup(pipeline: &ResolutionPipeline, email: &str, json: bool) -> anyhow::Result<()> {
    let address = EmailAddress::new(email)?;
    let record = pipeline.resolve(&address).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_record(&record);
    }

    // Finding nothing is still a successful run
    Ok(())
}

async fn run_batch(
    config: &AppConfig,
    pipeline: Arc<ResolutionPipeline>,
    file: &std::path::Path,
    json: bool,
) -> anyhow::Result<()> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let addresses = collect_addresses(&contents);
    if addresses.is_empty() {
        anyhow::bail!("no valid email addresses in {}", file.display());
    }

    let coordinator = BatchCoordinator::from_config(&config.resolver, pipeline);
    let results = coordinator.resolve_all(&addresses).await;

    let mut keys: Vec<&String> = results.keys().collect();
    keys.sort();

    if json {
        let records: Vec<&ProfileRecord> = keys.into_iter().map(|k| &results[k]).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        let total = results.len();
        let found = results.values().filter(|r| r.found).count();
        for key in keys {
            print_summary_line(&results[key]);
        }
        println!("{found} of {total} resolved");
    }

    Ok(())
}

/// Parse newline-separated addresses, skipping blanks and invalid lines.
fn collect_addresses(contents: &str) -> Vec<EmailAddress> {
    let mut addresses = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match EmailAddress::new(line) {
            Ok(address) => addresses.push(address),
            Err(e) => tracing::warn!("Skipping line {}: {e}", index + 1),
        }
    }
    addresses
}

fn print_record(record: &ProfileRecord) {
    if record.found {
        println!("{}  [found via {}]", record.email, record.source);
    } else {
        println!("{}  [not found, last stage: {}]", record.email, record.source);
    }
    print_field("name", record.name.as_deref());
    print_field("headline", record.headline.as_deref());
    print_field("company", record.company.as_deref());
    print_field("location", record.location.as_deref());
    print_field("summary", record.summary.as_deref());
    print_field("photo", record.photo_url.as_deref());
    print_field("linkedin", record.linkedin_url.as_deref());
    print_field("twitter", record.twitter.as_deref());
    print_field("industry", record.industry.as_deref());
}

fn print_field(label: &str, value: Option<&str>) {
    if let Some(value) = value {
        println!("  {label}: {value}");
    }
}

fn print_summary_line(record: &ProfileRecord) {
    if record.found {
        let detail = record
            .name
            .as_deref()
            .or(record.linkedin_url.as_deref())
            .unwrap_or("");
        println!("{}: found ({detail})", record.email);
    } else {
        println!("{}: not found", record.email);
    }
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("MAILSCOPE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
