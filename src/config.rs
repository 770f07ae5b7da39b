//! Host listener configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_BIND: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid IP address: {value:?}")]
    InvalidBind { var: &'static str, value: String },
    #[error("{var} is not a valid port: {value:?}")]
    InvalidPort { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub bind: IpAddr,
    pub port: u16,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { bind: DEFAULT_BIND, port: DEFAULT_PORT }
    }
}

impl HostConfig {
    /// Build the listener config from environment variables.
    ///
    /// Optional:
    /// - `FURGLO_BIND`: listen address, default `0.0.0.0`
    /// - `PORT`: listen port, default `3000`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a variable is set but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::var("FURGLO_BIND").ok().as_deref(), std::env::var("PORT").ok().as_deref())
    }

    fn from_vars(bind: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        let bind = match bind.map(str::trim) {
            None | Some("") => DEFAULT_BIND,
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidBind { var: "FURGLO_BIND", value: raw.to_owned() })?,
        };
        let port = match port.map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort { var: "PORT", value: raw.to_owned() })?,
        };
        Ok(Self { bind, port })
    }

    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}
