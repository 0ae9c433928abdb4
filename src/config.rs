//! Listen-port configuration.
//!
//! The whole configuration surface is one environment variable: `PORT`
//! overrides the listen port, and unset or empty means the default, `8080`.
//! A value that does not parse as a port number is rejected at startup rather
//! than silently replaced with the default.

use crate::error::Error;

/// Listen port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 8080;

/// Runtime configuration, resolved once at startup.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Port the server listens on, on all interfaces.
    pub port: u16,
}

impl Config {
    /// Resolves configuration from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        let port = std::env::var("PORT").ok();
        Ok(Self { port: resolve_port(port.as_deref())? })
    }
}

/// Port resolution, factored out of [`Config::from_env`] so tests never have
/// to mutate the process environment.
fn resolve_port(value: Option<&str>) -> Result<u16, Error> {
    match value {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(s) => s.parse().map_err(|_| Error::InvalidPort(s.to_owned())),
    }
}
