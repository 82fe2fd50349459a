use std::path::PathBuf;

use clap::Parser;

/// Foundry generative media gateway
#[derive(Debug, Parser)]
#[command(name = "foundry", about = "Uniform gateway for Gemini, Edge TTS, and weather lookups")]
pub struct Args {
    /// Path to configuration file; the environment is used when omitted
    #[arg(short, long, env = "FOUNDRY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the listen address
    #[arg(long, env = "FOUNDRY_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
