mod config;

pub use config::{ClockConfig, Config, LocationConfig, QiblaConfig};

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/marisolat[-dev]/` based on MARISOLAT_ENV.
///
/// Set MARISOLAT_ENV=dev to use the development directory, or
/// MARISOLAT_CONFIG_DIR to point somewhere else entirely.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("MARISOLAT_CONFIG_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("MARISOLAT_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("marisolat-dev")
            } else {
                base_dir.join("marisolat")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
