use std::net::SocketAddr;
use std::path::PathBuf;

use directory_common::store::Store;

use crate::error::AppError;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

/// Web server configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Results file to serve instead of the bundled copy.
    pub data_path: Option<PathBuf>,
    pub listen_addr: SocketAddr,
}

impl Config {
    /// Optional:
    /// - `COUNCILLOR_DATA_PATH`: results JSON to load (default: bundled data)
    /// - `COUNCILLOR_WEB_LISTEN_ADDR` (default: "127.0.0.1:3000")
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_values(
            std::env::var("COUNCILLOR_DATA_PATH").ok(),
            std::env::var("COUNCILLOR_WEB_LISTEN_ADDR").ok(),
        )
    }

    fn from_values(data_path: Option<String>, listen_addr: Option<String>) -> Result<Self, AppError> {
        let data_path = data_path
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        if let Some(path) = &data_path {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "COUNCILLOR_DATA_PATH not found: {}",
                    path.display()
                )));
            }
        }

        let raw_addr = listen_addr.unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = raw_addr.parse::<SocketAddr>().map_err(|e| {
            AppError::Config(format!(
                "COUNCILLOR_WEB_LISTEN_ADDR is not a socket address ({raw_addr}): {e}"
            ))
        })?;

        Ok(Self {
            data_path,
            listen_addr,
        })
    }

    pub fn load_store(&self) -> Result<Store, AppError> {
        let store = match &self.data_path {
            Some(path) => Store::load(path)?,
            None => Store::bundled()?,
        };
        Ok(store)
    }
}
