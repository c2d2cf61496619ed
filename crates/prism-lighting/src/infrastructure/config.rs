//! TOML-based configuration for the lighting coordinator.
//!
//! The default location is platform-specific:
//! - Windows:  `%APPDATA%\Prism\lighting.toml`
//! - Linux:    `~/.config/prism/lighting.toml`
//! - macOS:    `~/Library/Application Support/Prism/lighting.toml`
//!
//! ```toml
//! [probe]
//! timeout_ms = 5000
//!
//! [backends]
//! bitmap = true
//! zone = true
//! cluster = false
//! ```
//!
//! Every field has a serde default, so a missing file, an empty file and a
//! file written by an older version all load.  A backend switched off under
//! `[backends]` is dropped before the coordinator is built and never probed.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::application::coordinator::{LightingCoordinator, DEFAULT_PROBE_TIMEOUT};
use crate::application::provider::{BackendKind, LightingProvider};

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level lighting configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LightingConfig {
    #[serde(default)]
    pub probe: ProbeConfig,
    #[serde(default)]
    pub backends: BackendToggles,
}

/// Backend probing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Deadline shared by all backend probes of one initialize.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

/// Which backend variants may be probed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackendToggles {
    #[serde(default = "default_true")]
    pub bitmap: bool,
    #[serde(default = "default_true")]
    pub zone: bool,
    #[serde(default = "default_true")]
    pub cluster: bool,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_PROBE_TIMEOUT.as_millis() as u64
}
fn default_true() -> bool {
    true
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Default for BackendToggles {
    fn default() -> Self {
        Self {
            bitmap: true,
            zone: true,
            cluster: true,
        }
    }
}

impl BackendToggles {
    pub fn is_enabled(&self, kind: BackendKind) -> bool {
        match kind {
            BackendKind::Bitmap => self.bitmap,
            BackendKind::Zone => self.zone,
            BackendKind::PositionCluster => self.cluster,
        }
    }
}

impl LightingConfig {
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe.timeout_ms)
    }

    /// Builds a coordinator from the enabled subset of `providers`.
    pub fn coordinator(&self, providers: Vec<Box<dyn LightingProvider>>) -> LightingCoordinator {
        let enabled = providers
            .into_iter()
            .filter(|p| {
                let on = self.backends.is_enabled(p.kind());
                if !on {
                    debug!(backend = %p.kind(), "backend disabled by configuration");
                }
                on
            })
            .collect();
        LightingCoordinator::new(enabled).with_probe_timeout(self.probe_timeout())
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Resolves the platform-default path of the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    platform_config_dir()
        .map(|dir| dir.join("lighting.toml"))
        .ok_or(ConfigError::NoPlatformConfigDir)
}

/// Loads a [`LightingConfig`] from `path`, returning the default if the file
/// does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: &Path) -> Result<LightingConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(LightingConfig::default()),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Writes `config` to `path` as pretty TOML, creating parent directories.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(path: &Path, config: &LightingConfig) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("Prism"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("prism"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("Prism")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
