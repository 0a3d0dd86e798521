//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Directory holding the data file and report temp files
    pub data_dir: PathBuf,
    /// Name of the JSON data file inside `data_dir`
    pub data_file_name: String,
    /// Whether mutations are written back to the data file
    pub persist_data: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `DATA_DIR` - Data directory (default: `data`)
    /// - `DATA_FILE_NAME` - Data file name (default: `recipes.json`)
    /// - `PERSIST_DATA` - `true`/`false` (default: true)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds a Config from a variable lookup. Missing or unparsable values
    /// fall back to the defaults.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            data_dir: lookup("DATA_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            data_file_name: lookup("DATA_FILE_NAME")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.data_file_name),
            persist_data: lookup("PERSIST_DATA")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.persist_data),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            data_dir: PathBuf::from("data"),
            data_file_name: "recipes.json".to_string(),
            persist_data: true,
        }
    }
}
