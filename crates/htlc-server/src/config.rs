use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Answer cross-origin requests from any origin.
    pub allow_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)),
            allow_cors: true,
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Apply a `PORT` value, keeping the configured host.
    pub fn with_port_override(mut self, port: Option<&str>) -> ServerResult<Self> {
        if let Some(port) = port {
            let port: u16 = port
                .parse()
                .map_err(|_| ServerError::Config(format!("invalid PORT: {port}")))?;
            self.bind_addr.set_port(port);
        }
        Ok(self)
    }

    /// Apply the `PORT` environment variable, if set.
    pub fn with_env(self) -> ServerResult<Self> {
        let port = std::env::var("PORT").ok();
        self.with_port_override(port.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert!(c.allow_cors);
    }

    #[test]
    fn toml_partial_uses_defaults() {
        let c = ServerConfig::from_toml_str("bind_addr = \"0.0.0.0:8080\"").unwrap();
        assert_eq!(c.bind_addr.port(), 8080);
        assert!(c.allow_cors);
    }

    #[test]
    fn toml_invalid() {
        let err = ServerConfig::from_toml_str("bind_addr = 12").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn port_override() {
        let c = ServerConfig::default().with_port_override(Some("4100")).unwrap();
        assert_eq!(c.bind_addr, "127.0.0.1:4100".parse::<SocketAddr>().unwrap());

        let c = ServerConfig::default().with_port_override(None).unwrap();
        assert_eq!(c.bind_addr.port(), DEFAULT_PORT);

        assert!(ServerConfig::default().with_port_override(Some("http")).is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_addr = \"127.0.0.1:9000\"\nallow_cors = false").unwrap();

        let c = ServerConfig::load(file.path()).unwrap();
        assert_eq!(c.bind_addr.port(), 9000);
        assert!(!c.allow_cors);
    }
}
