// src/main.rs
mod dashboard;
mod extractors;
mod gamelog;
mod metrics;
mod pipeline;
mod source;
mod storage;
mod utils;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use source::{client, HtmlTableSource, TableSource};
use storage::StorageManager;
use utils::AppError;

/// Builds a season performance dashboard from a team game log page
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Game log page to fetch
    #[arg(short, long, default_value = client::DEFAULT_GAME_LOG_URL)]
    url: String,

    /// Parse a saved copy of the page instead of fetching it
    #[arg(short, long, conflicts_with = "url")]
    input: Option<PathBuf>,

    /// Team name shown in the dashboard title
    #[arg(short, long, default_value = "Washington Wizards")]
    team: String,

    /// Output directory for the dashboard and summary
    #[arg(short, long, default_value = "./output")]
    output_dir: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Debug mode - save the raw page, an annotated copy and a row report
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting dashboard build for args: {:?}", args);

    if args.timeout_secs == 0 {
        return Err(AppError::Config("--timeout-secs must be greater than zero".to_string()));
    }

    // 3. Initialize storage
    let storage = StorageManager::new(&args.output_dir)?;

    // 4. Fetch (or load) the page; any failure here ends the run
    let page = match &args.input {
        Some(path) => client::load_page(path)?,
        None => client::download_page(&args.url, Duration::from_secs(args.timeout_secs)).await?,
    };
    tracing::info!("Page ready ({} bytes)", page.len());

    let source = HtmlTableSource::new(page);

    if args.debug {
        save_debug_artifacts(&storage, &source);
    }

    // 5. Extract, normalize and compute
    let data = pipeline::run_pipeline(&source)?;
    tracing::info!(
        "Processed {} games: overall {} ({})",
        data.games.len(),
        data.summary.overall.record(),
        data.summary.overall.win_pct_display()
    );

    // 6. Render and save
    let generated_at = chrono::Utc::now().to_rfc3339();
    let html = data.render_html(&args.team, &generated_at);
    let dashboard_path = storage.save_dashboard(&html)?;
    storage.save_summary(&args.team, &data, &generated_at)?;

    tracing::info!(
        "Dashboard written to {} (output dir {})",
        dashboard_path.display(),
        storage.base_dir().display()
    );
    Ok(())
}

/// Debug output never fails the run; problems are logged.
fn save_debug_artifacts(storage: &StorageManager, source: &HtmlTableSource) {
    if let Err(e) = storage.save_debug("raw_page.html", source.html()) {
        tracing::warn!("Failed to save raw page: {}", e);
    }

    match utils::html_debug::create_debug_html(source.html(), &utils::html_debug::TABLE_PATTERNS) {
        Ok(annotated) => {
            if let Err(e) = storage.save_debug("page_annotated.html", &annotated) {
                tracing::warn!("Failed to save annotated page: {}", e);
            }
        }
        Err(e) => tracing::warn!("Failed to create debug HTML: {}", e),
    }

    match source.rows() {
        Ok(rows) => {
            if let Err(e) = storage.save_debug("row_report.html", &utils::html_debug::row_report(&rows)) {
                tracing::warn!("Failed to save row report: {}", e);
            }
        }
        Err(e) => tracing::warn!("No row report: {}", e),
    }
}
