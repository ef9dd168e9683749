use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use staydesk::core::config::{StaydeskConfig, load_config, resolve};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "staydesk", about = "Terminal console for managing your stays")]
struct Args {
    /// Backend base URL, overrides config and STAYDESK_BASE_URL
    #[arg(long)]
    base_url: Option<String>,

    /// Where to write the log file
    #[arg(long, default_value = "staydesk.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {}", e);
        StaydeskConfig::default()
    });
    let config = resolve(&file_config, args.base_url.as_deref());

    log::info!("Staydesk starting up against {}", config.base_url);

    staydesk::tui::run(config)
}
