//! Configuration file parser for ~/.config/faqview/config.toml.
//!
//! The config file is optional — a missing file yields `Config::default()`.
//! Unknown keys are silently ignored by serde (with `deny_unknown_fields` off),
//! though we log a warning when the file contains potential typos.
use crate::view_state::FaqConfig;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Endpoint the FAQ backend serves its full record list on.
pub const DEFAULT_SOURCE_URL: &str = "http://localhost:8080/api/faq/all";

/// Category tabs in display order. The first entry selects every record.
pub const DEFAULT_CATEGORIES: [&str; 5] = ["All", "Policy", "Common", "Buying", "Selling"];

/// Records per page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config file exceeds maximum allowed size.
    #[error("Config file too large: {0}")]
    TooLarge(String),

    /// Values parsed but cannot drive the view (zero page size, no categories).
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Top-level application configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
/// Missing keys fall back to `Default::default()`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL of the endpoint returning the full FAQ list as JSON.
    pub source_url: String,

    /// Upper bound on the initial fetch, in seconds.
    pub request_timeout_secs: u64,

    /// Number of records shown per page.
    pub page_size: usize,

    /// Ordered category tabs. The first one is the "show everything" tab.
    pub categories: Vec<String>,

    /// Theme variant name ("dark" or "light").
    pub theme: String,

    /// Custom keybinding overrides. Keys are action names, values are key strings.
    pub keybindings: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            request_timeout_secs: 20,
            page_size: DEFAULT_PAGE_SIZE,
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            theme: "dark".to_string(),
            keybindings: HashMap::new(),
        }
    }
}

impl Config {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → silently accepted (serde default behavior), logged as warning
    /// - Zero page size or empty category list → `Err(ConfigError::Invalid)`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // File deleted between metadata and read
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        // Parse as a raw table first to detect unknown keys
        if let Ok(raw) = content.parse::<toml::Table>() {
            let known_keys = [
                "source_url",
                "request_timeout_secs",
                "page_size",
                "categories",
                "theme",
                "keybindings",
            ];
            for key in raw.keys() {
                if !known_keys.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        tracing::info!(
            path = %path.display(),
            source = %config.source_url,
            page_size = config.page_size,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Reject values the view-state machine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be at least 1".into()));
        }
        if self.categories.is_empty() {
            return Err(ConfigError::Invalid(
                "categories must contain at least the \"all\" category".into(),
            ));
        }
        if self.categories.iter().any(|c| c.trim().is_empty()) {
            return Err(ConfigError::Invalid("category names must not be blank".into()));
        }
        Ok(())
    }

    /// The subset of settings the view-state machine is built from.
    pub fn faq_config(&self) -> FaqConfig {
        FaqConfig {
            categories: self.categories.clone(),
            page_size: self.page_size,
        }
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

// ============================================================================
// Tests
// ============================================================================
