use clap::Parser;
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use trove::core::config::{self, CliOverrides, EnvOverrides, TroveConfig};
use trove::tui;

#[derive(Parser)]
#[command(name = "trove", about = "Hunt for hidden treasure on an 80x24 grid", version)]
struct Args {
    /// Seed for a reproducible board
    #[arg(long)]
    seed: Option<u64>,

    /// Start with hidden treasure visible
    #[arg(long)]
    cheats: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, value_parser = parse_level)]
    log_level: Option<LevelFilter>,

    /// Where to write the log
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Ignore ~/.trove/config.toml
    #[arg(long)]
    no_config: bool,
}

fn parse_level(raw: &str) -> Result<LevelFilter, String> {
    raw.parse()
        .map_err(|_| format!("unknown log level '{raw}'"))
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let loaded = if args.no_config {
        Ok(TroveConfig::default())
    } else {
        config::load_config()
    };
    // A broken config file should not stop the game; report it once logging is up
    let (file_config, config_error) = match loaded {
        Ok(c) => (c, None),
        Err(e) => (TroveConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        seed: args.seed,
        cheats: args.cheats,
        log_file: args.log_file,
        log_level: args.log_level,
    };
    let resolved = config::resolve(&file_config, &EnvOverrides::from_env(), &cli);

    // The game owns the terminal, so logs go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        warn!("Ignoring unreadable config, using defaults: {}", e);
    }
    info!("Trove starting up (log level {})", resolved.log_level);

    tui::run(&resolved)
}
