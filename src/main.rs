//! Pokedex - interactive PokeAPI browser backed by pokecache
//!
//! Pages through PokeAPI location areas, memoizing every response body for
//! the configured cache interval.

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokecache::pokeapi::PokeApiClient;
use pokecache::repl::{spawn_stdin_reader, Repl};
use pokecache::{Cache, Config};

/// Main entry point for the Pokedex.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the response cache, which starts its reaper
/// 4. Build the PokeAPI client around the cache
/// 5. Run the command loop until `exit`, end of input or Ctrl+C
/// 6. Shut the cache reaper down
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the way of the prompt,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokecache=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_interval={}s, request_timeout={}s, api_base_url={}",
        config.cache_interval, config.request_timeout, config.api_base_url
    );

    let cache = Cache::new(config.cache_interval_duration())
        .context("Invalid CACHE_INTERVAL")?;
    let client = PokeApiClient::new(cache.clone(), &config).context("Failed to build HTTP client")?;
    let mut repl = Repl::new(client, cache.clone());

    let lines = spawn_stdin_reader().context("Failed to start stdin reader")?;
    let mut stdout = std::io::stdout();

    tokio::select! {
        result = repl.run(lines, &mut stdout) => {
            result.context("Command loop failed")?;
        }
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down...");
        }
    }

    cache.shutdown().await;
    info!("Pokedex shutdown complete");
    Ok(())
}
