//! Settings loading from configuration files.
//!
//! This module provides functions to load [`Settings`] from TOML files, JSON
//! files, and to apply environment variable overrides.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML or JSON file (overriding defaults).
//! 3. Apply environment variable overrides (highest priority).
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `FORMGEN_DEBUG` | `debug` |
//! | `FORMGEN_LOG_LEVEL` | `log_level` |
//! | `FORMGEN_DOWNLOAD_DIR` | `download_dir` |
//! | `FORMGEN_SUBMISSION_FILE_NAME` | `submission_file_name` |
//!
//! ## Examples
//!
//! ```rust,no_run
//! use formgen_core::settings_loader;
//!
//! let settings = settings_loader::from_toml_file_with_env("formgen.toml").unwrap();
//! ```

use std::path::{Path, PathBuf};

use crate::error::FormGenError;
use crate::settings::Settings;

/// Loads settings from a TOML string.
///
/// Keys not present in the TOML keep their default values.
pub fn from_toml_str(toml_str: &str) -> Result<Settings, FormGenError> {
    toml::from_str(toml_str)
        .map_err(|e| FormGenError::ConfigurationError(format!("Failed to parse TOML: {e}")))
}

/// Loads settings from a TOML file.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Settings, FormGenError> {
    let content = read_config(path.as_ref(), "TOML")?;
    from_toml_str(&content)
}

/// Loads settings from a TOML file and then applies environment variable overrides.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> Result<Settings, FormGenError> {
    let mut settings = from_toml_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from a JSON string.
///
/// Keys not present in the JSON keep their default values.
pub fn from_json_str(json_str: &str) -> Result<Settings, FormGenError> {
    serde_json::from_str(json_str)
        .map_err(|e| FormGenError::ConfigurationError(format!("Failed to parse JSON: {e}")))
}

/// Loads settings from a JSON file.
pub fn from_json_file(path: impl AsRef<Path>) -> Result<Settings, FormGenError> {
    let content = read_config(path.as_ref(), "JSON")?;
    from_json_str(&content)
}

/// Loads settings from just environment variables (starting from defaults).
pub fn from_env() -> Settings {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings);
    settings
}

/// Applies environment variable overrides to a settings struct.
///
/// `FORMGEN_DEBUG` accepts "true"/"1"/"yes" as true, anything else as false.
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(val) = std::env::var("FORMGEN_DEBUG") {
        settings.debug = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
    }

    if let Ok(val) = std::env::var("FORMGEN_LOG_LEVEL") {
        settings.log_level = val;
    }

    if let Ok(val) = std::env::var("FORMGEN_DOWNLOAD_DIR") {
        settings.download_dir = PathBuf::from(val);
    }

    if let Ok(val) = std::env::var("FORMGEN_SUBMISSION_FILE_NAME") {
        if !val.trim().is_empty() {
            settings.submission_file_name = val;
        }
    }
}

fn read_config(path: &Path, format: &str) -> Result<String, FormGenError> {
    std::fs::read_to_string(path).map_err(|e| {
        FormGenError::ConfigurationError(format!(
            "Failed to read {format} file '{}': {e}",
            path.display()
        ))
    })
}
