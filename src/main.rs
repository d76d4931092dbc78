mod cli;
mod config;
mod filter;
mod graphql;
mod model;
mod queries;
mod query;
mod state;
mod view;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Logs go to stderr so --json output stays clean
    let default_filter = if cli.output.verbose {
        "rombrowser=debug,info"
    } else {
        "rombrowser=info,warn"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Starting rombrowser {}", env!("CARGO_PKG_VERSION"));

    cli::run(cli).await
}
