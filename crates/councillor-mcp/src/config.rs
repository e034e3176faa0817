use std::net::SocketAddr;
use std::path::PathBuf;

use directory_common::store::Store;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    /// Results file to serve instead of the bundled copy.
    pub data_path: Option<PathBuf>,
    /// Serve MCP over TCP on this address instead of stdio.
    pub tcp_listen_addr: Option<SocketAddr>,
}

impl Config {
    /// Optional:
    /// - `COUNCILLOR_DATA_PATH`: results JSON to load (default: bundled data)
    /// - `MCP_TCP_LISTEN_ADDR`: e.g. "127.0.0.1:7300" (default: stdio)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_values(
            std::env::var("COUNCILLOR_DATA_PATH").ok(),
            std::env::var("MCP_TCP_LISTEN_ADDR").ok(),
        )
    }

    fn from_values(
        data_path: Option<String>,
        tcp_listen_addr: Option<String>,
    ) -> Result<Self, AppError> {
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

        let tcp_listen_addr = tcp_listen_addr
            .filter(|a| !a.trim().is_empty())
            .map(|raw| {
                raw.parse::<SocketAddr>().map_err(|e| {
                    AppError::Config(format!(
                        "MCP_TCP_LISTEN_ADDR is not a socket address ({raw}): {e}"
                    ))
                })
            })
            .transpose()?;

        Ok(Self {
            data_path,
            tcp_listen_addr,
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
