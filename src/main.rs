use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use vlrent::core::config;

#[derive(Parser)]
#[command(name = "vlrent", about = "VL Rent a Car terminal front desk")]
struct Args {
    /// Run with the AI assistant disabled (no API calls)
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to vlrent.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("vlrent.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&file_config, args.offline);

    log::info!(
        "vlrent starting up (assistant model: {}, offline: {})",
        resolved.assistant_model,
        resolved.assistant_api_key.is_none()
    );

    vlrent::tui::run(resolved)
}
