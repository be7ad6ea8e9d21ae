//! storelens - Fake Store API reporting tool.
//!
//! Fetches users, products, and carts from the Fake Store API in parallel,
//! then prints three aggregate views: price totals per category, the
//! highest-value cart and its owner, and the two users farthest apart.
//!
//! # Usage
//!
//! ```bash
//! storelens
//!
//! # Point at another API instance
//! STORELENS_BASE_URL=http://localhost:8080 storelens
//!
//! # Turn up logging
//! RUST_LOG=storelens_cli=debug storelens
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::time::Instant;

use storelens_cli::config::StoreApiConfig;
use storelens_cli::fakestore::FakeStoreClient;
use storelens_cli::report::StoreReport;

#[tokio::main]
async fn main() {
    // Initialize tracing: report on stdout, logs on stderr
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "storelens=info,storelens_cli=info".into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        tracing::error!("Report failed: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();

    let config = StoreApiConfig::from_env()?;
    let client = FakeStoreClient::new(&config)?;

    let snapshot = client.fetch_snapshot().await?;
    let report = StoreReport::build(&snapshot);
    print!("{report}");

    tracing::info!(elapsed = ?start.elapsed(), "report complete");
    Ok(())
}
