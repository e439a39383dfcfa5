// CLI module for translate-gateway

use clap::Parser;
use std::path::PathBuf;

/// translate-gateway - single-endpoint HTTP translation gateway
#[derive(Parser, Debug)]
#[command(name = "translate-gateway", version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML config file (default: ~/.translate-gateway/config.toml)
    #[arg(short, long, env = "TRANSLATE_GATEWAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the bind address
    #[arg(long)]
    pub host: Option<String>,

    /// Override the listen port
    #[arg(short, long)]
    pub port: Option<u16>,
}
