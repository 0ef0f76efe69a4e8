//! Path utilities for propedge.
//!
//! User-level data lives under `~/.propedge/`, currently just
//! `~/.propedge/config.toml`.

use std::path::PathBuf;

/// Returns the propedge home directory (`~/.propedge/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".propedge")
}

/// Returns the default config file path (`~/.propedge/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
