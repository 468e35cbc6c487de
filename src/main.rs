//! Engineering Suite API server.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────────┐
//!                    │                ENGINEERING SUITE                 │
//!                    │                                                  │
//!   Client Request   │  ┌──────────┐   ┌────────────┐   ┌───────────┐   │
//!   ─────────────────┼─▶│ cors +   │──▶│  handlers  │──▶│ validate  │   │
//!                    │  │ req id   │   │            │   │ (types)   │   │
//!                    │  └──────────┘   └────────────┘   └─────┬─────┘   │
//!                    │                                        ▼         │
//!   Client Response  │  ┌──────────┐   ┌────────────┐   ┌───────────┐   │
//!   ◀────────────────┼──│ response │◀──│  envelope  │◀──│  engine   │   │
//!                    │  └──────────┘   └────────────┘   └───────────┘   │
//!                    │                                                  │
//!                    │   config · observability · security · lifecycle  │
//!                    └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use engineering_suite::config::resolve_config;
use engineering_suite::lifecycle::startup;
use engineering_suite::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "engineering-suite", version)]
#[command(about = "HTTP API for box geometry and material cost calculations", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = resolve_config(args.config.as_deref())?;
    init_logging(&config.observability.log_level)?;

    tracing::info!(
        "{} v{} starting",
        config.app.name,
        config.app.version
    );

    startup::run(config).await?;
    Ok(())
}
