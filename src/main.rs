//! Sysdeck - a system panel for desktop host runtimes
//!
//! This is the binary entry point. All logic lives in the member crates.

use clap::Parser;
use sysdeck_app::settings;
use sysdeck_core::prelude::*;

/// Sysdeck - a system panel for desktop host runtimes
#[derive(Parser, Debug)]
#[command(name = "sysdeck")]
#[command(about = "A system panel for desktop host runtimes", long_about = None)]
struct Args {
    /// WebSocket URL of the host runtime (overrides settings.toml)
    #[arg(long, value_name = "URL")]
    host_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    sysdeck_core::logging::init()?;

    let mut settings = settings::load_settings();
    if let Some(url) = args.host_url {
        settings.host_url = url;
    }

    info!("Connecting to host runtime at {}", settings.host_url);

    // A connection failure here is fatal: the host is expected to have
    // launched us and to be accepting connections already.
    sysdeck_tui::run(settings).await
}
