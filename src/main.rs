mod app_context;
mod database;
mod errors;
mod services;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sea_orm_migration::MigratorTrait;
use tracing::info;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::app_context::AppContext;
use crate::database::connection::{establish_connection, get_database_url};
use crate::database::migrations::Migrator;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    /// Path to the SQLite database file (":memory:" for a throwaway store)
    #[clap(short, long, global = true, default_value = "farmledger.db")]
    database: String,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or upgrade the database schema
    Migrate,
    /// Print the dashboard summary (counts plus revenue/cost/profit totals)
    Dashboard,
    /// Print the full report: totals, crop-wise profits, labour cost rollup
    Report,
    /// Print the per-crop stats feed used for chart rendering
    CropStats,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(&args.log_level);

    let database_url = get_database_url(Some(&args.database));
    let db = establish_connection(&database_url).await?;

    // Schema initialization is an explicit startup step
    Migrator::up(&db, None).await?;

    let ctx = AppContext::new(db);

    match args.command {
        Commands::Migrate => {
            info!("Database ready: {}", args.database);
        }
        Commands::Dashboard => {
            let summary = ctx.report_service().dashboard_summary().await?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Report => {
            let report = ctx.report_service().reports().await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::CropStats => {
            let stats = ctx.report_service().crop_stats().await?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_ref()
        .unwrap_or(&"info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level.to_string()))
        .without_time()
        .init();
}
