//! # solcasa
//!
//! HTTP gateway serving content and records for Solana Name Service domains.

use clap::{Parser, ValueEnum};
use mimalloc::MiMalloc;
use solcasa_domain::config::CacheBackend;
use solcasa_domain::CliOverrides;
use tokio_util::sync::CancellationToken;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Clone, Copy, ValueEnum)]
enum BackendArg {
    Sqlite,
    Memory,
}

impl From<BackendArg> for CacheBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Sqlite => CacheBackend::Sqlite,
            BackendArg::Memory => CacheBackend::Memory,
        }
    }
}

#[derive(Parser)]
#[command(name = "solcasa")]
#[command(version)]
#[command(about = "Gateway for Solana Name Service domains")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// HTTP port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level or filter directive
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    /// Cache storage backend
    #[arg(long, value_enum)]
    cache_backend: Option<BackendArg>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        web_port: cli.port,
        bind_address: cli.bind,
        log_level: cli.log_level,
        cache_backend: cli.cache_backend.map(CacheBackend::from),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!(version = env!("CARGO_PKG_VERSION"), "solcasa starting");
    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        cache_backend = ?config.cache.backend,
        rpc_endpoints = config.upstream.rpc_urls.len(),
        "Configuration loaded"
    );

    let shutdown = CancellationToken::new();
    let services = di::Services::build(&config).await?;

    services.start_jobs(&config, shutdown.clone()).await;

    server::start_web_server(&config, services.app_state, shutdown.clone()).await?;

    shutdown.cancel();
    info!("solcasa stopped");
    Ok(())
}
