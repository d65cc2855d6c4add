// ABOUTME: Configuration module for the lega-slides application
// ABOUTME: Provides export settings and environment variable handling

use std::env;
use std::path::PathBuf;

/// Deck title baked into export metadata.
pub const DECK_TITLE: &str = "Legalização e Infraestrutura";

/// Author string baked into export metadata.
pub const DECK_AUTHOR: &str = "Setor de Infraestrutura e Legalização";

/// Global configuration for the application
pub struct Config {
    pub browser_path: Option<String>,
    pub default_timeout_ms: u64,
    pub logo_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            browser_path: env::var("BROWSER_PATH").ok(),
            default_timeout_ms: 30000, // 30 seconds
            logo_path: PathBuf::from("assets/logo.png"),
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let browser_path = env::var("BROWSER_PATH").ok();
        let default_timeout_ms = env::var("DEFAULT_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30000);
        let logo_path = env::var("LOGO_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("assets/logo.png"));

        Self {
            browser_path,
            default_timeout_ms,
            logo_path,
        }
    }
}
