//! # secure-hello
//!
//! A deliberately tiny HTTP server used to demonstrate secure container base
//! images (non-root, no shell, no package manager). The image is the point;
//! this server exists so the container has something to run.
//!
//! It serves exactly two paths:
//!
//! | Path | Response |
//! |---|---|
//! | `GET /` | `200 OK`, a three-line plaintext greeting |
//! | `GET /health` | `200 OK`, body `OK\n` — the liveness probe |
//!
//! Everything else is a 404. The listen port comes from the `PORT` environment
//! variable and defaults to `8080`. Failing to bind is fatal: the process logs
//! the error and exits non-zero, leaving restarts to the orchestrator.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::net::SocketAddr;
//! use secure_hello::{Config, Server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::from_env().unwrap();
//!     let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
//!
//!     Server::bind(addr).await.unwrap().serve().await.unwrap();
//! }
//! ```

mod config;
mod error;
mod response;
mod routes;
mod server;

pub use config::{Config, DEFAULT_PORT};
pub use error::Error;
pub use response::Response;
pub use server::Server;
