mod config;
pub mod database;
mod store;

pub use config::{Config, LoggingConfig, ProgressionConfig, ScenariosConfig};
pub use database::Database;
pub use store::{MemoryStore, ProgressStore};

use std::path::PathBuf;

use crate::error::Result;

/// Returns the data directory, creating it if needed.
///
/// `KAIROS_DATA_DIR` overrides the location outright. Otherwise this is
/// `~/.config/kairos[-dev]/`, with the `-dev` suffix when `KAIROS_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = data_dir_path();
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Resolve the data directory without touching the filesystem.
fn data_dir_path() -> PathBuf {
    match std::env::var_os("KAIROS_DATA_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("KAIROS_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("kairos-dev")
            } else {
                base_dir.join("kairos")
            }
        }
    }
}
