//! Server configuration from environment variables.

use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ROOT: &str = "web";

/// Static file server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory files are served from.
    pub root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            root: PathBuf::from(DEFAULT_ROOT),
        }
    }
}

impl ServerConfig {
    /// Create from `BLOCKFALL_HTTP_HOST`, `BLOCKFALL_HTTP_PORT` and
    /// `BLOCKFALL_HTTP_ROOT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup<F>(mut get_env: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let non_empty = |v: String| {
            let v = v.trim().to_string();
            if v.is_empty() {
                None
            } else {
                Some(v)
            }
        };

        let host = get_env("BLOCKFALL_HTTP_HOST")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = get_env("BLOCKFALL_HTTP_PORT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let root = get_env("BLOCKFALL_HTTP_ROOT")
            .and_then(non_empty)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));

        Self { host, port, root }
    }
}
