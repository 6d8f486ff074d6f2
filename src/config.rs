use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub seeds: SeedConfig,
    pub logging: LoggingConfig,
}

/// Seed store configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Override the default seed directory.
    pub seed_dir: Option<PathBuf>,
    /// Fixed RNG seed for reproducible race/gender picks.
    pub rng_seed: Option<u64>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset.
    pub level: String,
    /// Override the default log directory.
    pub log_dir: Option<PathBuf>,
    /// Also write human-readable logs to stdout.
    pub stdout: bool,
    /// Write the human-readable log to stderr instead of stdout.
    pub stderr: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
            stdout: false,
            stderr: false,
        }
    }
}

/// Where the loaded configuration came from.
///
/// Returned alongside the config so the caller can log it once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from this file.
    File(PathBuf),
    /// No file at this path; defaults used.
    Missing(PathBuf),
    /// File present but unparseable; defaults used.
    Invalid { path: PathBuf, reason: String },
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            Self::File(path) => log::info!("Loaded config from {}", path.display()),
            Self::Missing(path) => {
                log::debug!("No config file at {}, using defaults", path.display())
            }
            Self::Invalid { path, reason } => log::warn!(
                "Failed to parse config at {}: {reason}, using defaults",
                path.display()
            ),
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/ttttrps-namegen/config.toml`.
    /// Falls back to `Default` if the file is missing or unparseable.
    pub fn load() -> (Self, ConfigSource) {
        Self::load_from(Self::config_path())
    }

    pub fn load_from(config_path: PathBuf) -> (Self, ConfigSource) {
        let Ok(contents) = std::fs::read_to_string(&config_path) else {
            return (Self::default(), ConfigSource::Missing(config_path));
        };

        match toml::from_str(&contents) {
            Ok(config) => (config, ConfigSource::File(config_path)),
            Err(e) => (
                Self::default(),
                ConfigSource::Invalid {
                    path: config_path,
                    reason: e.to_string(),
                },
            ),
        }
    }

    /// Resolved seed directory: the override, else the XDG data directory
    /// when it exists, else the seed lists bundled with the crate.
    pub fn seed_dir(&self) -> PathBuf {
        match &self.seeds.seed_dir {
            Some(dir) => dir.clone(),
            None => resolve_seed_dir(dirs::data_dir()),
        }
    }

    /// Resolved log directory (override or XDG default).
    pub fn log_dir(&self) -> PathBuf {
        self.logging.log_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("ttttrps-namegen").join("logs"))
                .unwrap_or_else(|| PathBuf::from("logs"))
        })
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("ttttrps-namegen").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

/// Seed lists shipped in the crate's `data/seeds`.
pub fn bundled_seed_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join("seeds")
}

fn resolve_seed_dir(data_dir: Option<PathBuf>) -> PathBuf {
    data_dir
        .map(|d| d.join("ttttrps-namegen").join("seeds"))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(bundled_seed_dir)
}
