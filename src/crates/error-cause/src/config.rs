//! Configuration management.
//!
//! Controls how much diagnostic context `ErrorWithCause` captures at
//! construction. Configuration can come from:
//! - a YAML/JSON config file named by `ERROR_CAUSE_CONFIG`
//! - environment variables (`ERROR_CAUSE_TRACE=header|auto|force`), which
//!   override the file
//! - code, through [`set_global`] or [`CauseConfig::load_and_apply`]
//!
//! # Example
//!
//! ```rust,ignore
//! use error_cause::config::{set_global, CauseConfig, FromEnv};
//!
//! // Load from environment
//! let config = CauseConfig::from_env("ERROR_CAUSE")?;
//!
//! // Load from file and make it active
//! CauseConfig::load_and_apply("error-cause.yaml")?;
//! ```

use crate::constants::ENV_PREFIX;
use crate::error::{CauseError, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// How much trace text to capture when an error is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceCapture {
    /// Only the `"<name>: <message>"` header line.
    Header,
    /// Header plus a backtrace when `RUST_BACKTRACE`/`RUST_LIB_BACKTRACE`
    /// enable one.
    #[default]
    Auto,
    /// Header plus an unconditionally captured backtrace.
    Force,
}

impl FromStr for TraceCapture {
    type Err = CauseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "header" | "off" | "none" => Ok(TraceCapture::Header),
            "auto" => Ok(TraceCapture::Auto),
            "force" | "full" | "always" => Ok(TraceCapture::Force),
            other => Err(CauseError::ConfigError(format!(
                "Invalid trace capture mode: {}",
                other
            ))),
        }
    }
}

/// Crate configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CauseConfig {
    #[serde(default)]
    pub trace_capture: TraceCapture,
}

impl CauseConfig {
    /// Load configuration from a file (format detected from the extension).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .ok_or_else(|| {
                CauseError::ConfigError(format!(
                    "Unable to determine file extension for {:?}",
                    path
                ))
            })?;

        let content = match extension.as_str() {
            "yaml" | "yml" | "json" => std::fs::read_to_string(path)?,
            _ => {
                return Err(CauseError::ConfigError(format!(
                    "Unsupported config file extension: {}",
                    extension
                )))
            }
        };

        let config = if extension == "json" {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        debug!("Loaded error-cause config from {:?}", path);
        Ok(config)
    }

    /// Load a config file and make it the active configuration.
    pub fn load_and_apply(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::load(path)?;
        set_global(config.clone());
        Ok(config)
    }
}

/// Trait for types that can be loaded from environment variables.
pub trait FromEnv: Sized {
    /// Load configuration from environment variables with the given prefix.
    fn from_env(prefix: &str) -> Result<Self>;
}

impl FromEnv for CauseConfig {
    /// Reads `{prefix}_CONFIG` as a base config file, then applies
    /// `{prefix}_TRACE` on top of it.
    fn from_env(prefix: &str) -> Result<Self> {
        let mut config = match std::env::var(format!("{}_CONFIG", prefix)) {
            Ok(path) => Self::load(path)?,
            Err(std::env::VarError::NotPresent) => Self::default(),
            Err(e) => return Err(e.into()),
        };

        let key = format!("{}_TRACE", prefix);
        match std::env::var(&key) {
            Ok(_) => config.trace_capture = get_env_parse::<TraceCapture>(&key)?,
            Err(std::env::VarError::NotPresent) => {}
            Err(e) => return Err(e.into()),
        }

        Ok(config)
    }
}

fn global_cell() -> &'static RwLock<CauseConfig> {
    static GLOBAL: OnceLock<RwLock<CauseConfig>> = OnceLock::new();
    GLOBAL.get_or_init(|| {
        let config = CauseConfig::from_env(ENV_PREFIX).unwrap_or_else(|e| {
            warn!("Ignoring invalid error-cause environment configuration: {}", e);
            CauseConfig::default()
        });
        RwLock::new(config)
    })
}

/// The active configuration. Read from the environment on first use.
pub fn global() -> CauseConfig {
    global_cell().read().clone()
}

/// Replace the active configuration for errors constructed from now on.
pub fn set_global(config: CauseConfig) {
    *global_cell().write() = config;
}

/// Get an environment variable as a string.
pub fn get_env(key: &str) -> Result<String> {
    std::env::var(key).map_err(|e| {
        CauseError::ConfigError(format!("Environment variable '{}' not found: {}", key, e))
    })
}

/// Get an environment variable and parse it to the specified type.
pub fn get_env_parse<T: FromStr>(key: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    let value = get_env(key)?;
    value.parse::<T>().map_err(|e| {
        CauseError::ConfigError(format!(
            "Failed to parse environment variable '{}': {}",
            key, e
        ))
    })
}
