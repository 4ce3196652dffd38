//! Output options for rendering, optionally read from a TOML file.
//!
//! The file is optional: a missing or blank file yields
//! `RenderConfig::default()`. Unknown keys are ignored by serde, though we log
//! a warning so typos do not go unnoticed.
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file too large: {0}")]
    TooLarge(String),
}

// ============================================================================
// Configuration
// ============================================================================

/// How a feed is written out.
///
/// All fields use `#[serde(default)]` so any subset of keys can be given.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Line breaks and indentation between elements.
    pub formatted_output: bool,

    /// Spaces per nesting level when `formatted_output` is on.
    pub indent_size: usize,

    /// Emit `<?xml version="1.0" encoding="UTF-8"?>` before the root.
    pub xml_declaration: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            formatted_output: true,
            indent_size: 4,
            xml_declaration: true,
        }
    }
}

impl RenderConfig {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    const KNOWN_KEYS: [&'static str; 3] = ["formatted_output", "indent_size", "xml_declaration"];

    /// Single-line output without declaration, handy for embedding.
    pub fn compact() -> Self {
        Self {
            formatted_output: false,
            indent_size: 0,
            xml_declaration: false,
        }
    }

    /// Load render options from a TOML file.
    ///
    /// - Missing file → `Ok(RenderConfig::default())`
    /// - Empty file → `Ok(RenderConfig::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → accepted, logged as warning
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
                // Deleted between metadata and read
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        Self::from_toml(&content)
    }

    /// Parse render options from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        if let Ok(raw) = content.parse::<toml::Table>() {
            for key in raw.keys() {
                if !Self::KNOWN_KEYS.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Self = toml::from_str(content)?;
        tracing::info!(
            formatted_output = config.formatted_output,
            indent_size = config.indent_size,
            "Loaded render configuration"
        );
        Ok(config)
    }
}

// ============================================================================
// Tests
// ============================================================================
