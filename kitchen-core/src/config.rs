use kitchen_common::TESTBED_SUFFIX;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Name of the optional config file looked up at the project root.
pub const CONFIG_FILE_NAME: &str = "kitchen.yaml";

const DEFAULT_TESTBED_DIR: &str = "kitchen-mocks/src/kitchen";
const DEFAULT_MANIFEST_PATH: &str = "kitchen-mocks/public/kitchen-manifest.json";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn default_testbed_dir() -> PathBuf {
    PathBuf::from(DEFAULT_TESTBED_DIR)
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from(DEFAULT_MANIFEST_PATH)
}

fn default_suffix() -> String {
    TESTBED_SUFFIX.to_string()
}

/// YAML config file structure. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitchenConfig {
    /// Directory scanned for testbed files, relative to the project root.
    #[serde(default = "default_testbed_dir")]
    pub testbed_dir: PathBuf,
    /// Where the generated manifest is written, relative to the project root.
    #[serde(default = "default_manifest_path")]
    pub manifest_path: PathBuf,
    /// File name suffix marking a testbed.
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            testbed_dir: default_testbed_dir(),
            manifest_path: default_manifest_path(),
            suffix: default_suffix(),
        }
    }
}

impl KitchenConfig {
    /// Parse a YAML document.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Serialization(e.to_string()))?;
        if config.suffix.is_empty() {
            return Err(ConfigError::Config("suffix must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Load `path` if given, else `kitchen.yaml` under `root` if present,
    /// else the defaults.
    pub fn load(root: &Path, path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (root.join(CONFIG_FILE_NAME), false),
        };

        if !required && !path.exists() {
            debug!("No {} at {}, using defaults", CONFIG_FILE_NAME, root.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config = Self::from_yaml(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve the configured paths against the project root.
    pub fn resolve(&self, root: &Path) -> KitchenPaths {
        KitchenPaths {
            testbed_dir: root.join(&self.testbed_dir),
            manifest_path: root.join(&self.manifest_path),
            suffix: self.suffix.clone(),
        }
    }
}

/// Absolute locations the generator works with.
#[derive(Clone, Debug, PartialEq)]
pub struct KitchenPaths {
    pub testbed_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub suffix: String,
}

impl KitchenPaths {
    pub fn new(testbed_dir: impl Into<PathBuf>, manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            testbed_dir: testbed_dir.into(),
            manifest_path: manifest_path.into(),
            suffix: default_suffix(),
        }
    }
}
