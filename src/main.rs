//! Entry point: resolve `PORT`, bind, serve until killed.

use std::net::SocketAddr;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use secure_hello::{Config, Error, Server};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "secure_hello=info".into()),
        )
        .init();

    if let Err(e) = run().await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;
    info!(port = config.port, "server starting");

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    Server::bind(addr).await?.serve().await
}
