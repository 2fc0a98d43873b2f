//! Info service entry point.

use std::net::{IpAddr, SocketAddr};

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use info_service::api::{create_router, AppState};
use info_service::config::Config;
use info_service::error::ServiceError;
use info_service::utils::shutdown_signal;

/// HTTP info and health-check service.
#[derive(Parser, Debug)]
#[command(name = "info-service")]
#[command(about = "Reports system, runtime, and request metadata over HTTP")]
#[command(version)]
struct Args {
    /// Bind address (overrides HOST).
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose logging (same effect as DEBUG=true).
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
    let args = Args::parse();

    let mut config = Config::load()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    // DEBUG maps the original's dev mode onto verbose logging.
    let filter = if args.verbose || config.debug {
        EnvFilter::new("info_service=debug,info")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.rust_log.clone()))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    config.validate().map_err(ServiceError::InvalidConfig)?;

    let ip: IpAddr = config.host.parse()?;
    let addr = SocketAddr::new(ip, config.port);

    let state = AppState::new();
    let router = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    info!("info service listening on {}", addr);

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("info service stopped");
    Ok(())
}
