use clap::Parser;
use enumnav::core::config::{self, CliOverrides, EnumNavConfig};
use enumnav::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "enumnav", about = "Browse Rust enums through a push/pop navigation stack")]
struct Args {
    /// Config file to use instead of ~/.enumnav/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the log
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// off, error, warn, info, debug or trace
    #[arg(long, value_parser = parse_level)]
    log_level: Option<LevelFilter>,

    /// Input poll interval in milliseconds
    #[arg(long)]
    tick_rate: Option<u64>,
}

fn parse_level(raw: &str) -> Result<LevelFilter, String> {
    raw.parse::<LevelFilter>()
        .map_err(|_| format!("unknown log level `{raw}`"))
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let cli = CliOverrides {
        log_file: args.log_file,
        log_level: args.log_level,
        tick_rate_ms: args.tick_rate,
    };
    let resolved = match &loaded {
        Ok(file_config) => config::resolve(file_config, &cli),
        Err(_) => config::resolve(&EnumNavConfig::default(), &cli),
    };

    // Initialize file logger
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Err(e) = &loaded {
        log::warn!("{}; falling back to defaults", e);
    }
    log::info!("EnumNav starting up");
    log::debug!("Resolved config: {:?}", resolved);

    tui::run(resolved)
}
