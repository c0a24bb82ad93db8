use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use egrid_ingest::config::{Config, DEFAULT_SHEET_NAME, DEFAULT_WORKBOOK_PATH};
use egrid_ingest::loader::WorkbookLoader;
use egrid_ingest::normalize::clean_table;

#[derive(Parser)]
#[command(name = "egrid-ingest")]
#[command(about = "Load an eGRID worksheet and normalize its column names", long_about = None)]
struct Cli {
    /// Path to the eGRID workbook
    #[arg(long, env = "EGRID_WORKBOOK_PATH", default_value = DEFAULT_WORKBOOK_PATH)]
    file: String,

    /// Worksheet to load (e.g. "SRL21" for 2021 state resource-level rates)
    #[arg(long, env = "EGRID_SHEET_NAME", default_value = DEFAULT_SHEET_NAME)]
    sheet: String,

    /// Print the cleaned table to stdout as JSON records
    #[arg(long)]
    json: bool,

    /// Maximum number of records to print with --json
    #[arg(long)]
    limit: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with environment filter support
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,egrid_ingest=debug")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    // Load environment variables before clap resolves env-backed args
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config {
        workbook_path: cli.file,
        sheet_name: cli.sheet,
    };
    info!("Starting eGRID ingest with config: {:?}", config);

    let loader = WorkbookLoader::new(config.workbook_path.clone());
    let table = clean_table(loader.load_sheet(&config.sheet_name)?);

    info!("Cleaned columns: {:?}", table.columns());
    info!(
        "Table ready: {} rows x {} columns",
        table.row_count(),
        table.column_count()
    );

    if cli.json {
        let records = table.to_records();
        let end = cli.limit.unwrap_or(records.len()).min(records.len());
        serde_json::to_writer_pretty(std::io::stdout().lock(), &records[..end])?;
        println!();
    }

    Ok(())
}
