//! SMA crossover scanner
//!
//! Scans the instrument universe under `DATA_DIR` and prints the buy and
//! sell lists for the latest bar.

use dotenvy::dotenv;
use smacross::config::{get_environment, ReportFormat, ScanConfig};
use smacross::core::runtime::ScanRuntime;
use smacross::logging;
use smacross::services::FileMarketDataProvider;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    info!(environment = %get_environment(), "Starting SMA crossover scanner");

    let config = ScanConfig::from_env().map_err(|e| {
        error!(error = %e, "Refusing to start");
        e
    })?;
    let provider = FileMarketDataProvider::new(config.data_dir.clone());
    info!(data_dir = %provider.root().display(), "Using file market data provider");

    let report_format = config.report_format;
    let runtime = ScanRuntime::new(config)?;
    let report = runtime.run(&provider).await?;

    match report_format {
        ReportFormat::Text => print!("{}", report),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
