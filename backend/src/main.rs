//! Roster backend entry-point: wires the versioned REST endpoints, health
//! probes, and OpenAPI docs.

mod server;

use actix_web::web;
use clap::Parser;
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use roster::inbound::http::health::HealthState;
use server::ServerConfig;

/// Command-line and environment configuration.
#[derive(Debug, Parser)]
#[command(name = "roster", about = "HTTP API serving the seeded user roster")]
struct Cli {
    /// Socket address to bind the HTTP listener to.
    #[arg(long, env = "ROSTER_BIND", default_value = "0.0.0.0:8080")]
    bind: SocketAddr,
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();

    let health_state = web::Data::new(HealthState::new());
    let server = server::create_server(health_state, ServerConfig::new(cli.bind))?;
    info!(bind = %cli.bind, "roster backend listening");
    server.await
}
