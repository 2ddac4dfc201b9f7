use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Names a TOML file holding a [`SupportConfig`].
pub const CONFIG_FILE_ENV: &str = "FRONTLINE_TEST_CONFIG";
/// Overrides [`SupportConfig::temp_dir`].
pub const TEMP_DIR_ENV: &str = "FRONTLINE_TEST_TEMP_DIR";
/// Overrides [`SupportConfig::resource_root`].
pub const RESOURCE_ROOT_ENV: &str = "FRONTLINE_TEST_RESOURCES";

/// Settings shared by every test scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportConfig {
    /// Scratch directory created before and removed after each test
    pub temp_dir: PathBuf,
    /// Directory that `classpath:` resources are resolved against
    pub resource_root: PathBuf,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            temp_dir: PathBuf::from("test_temp"),
            resource_root: PathBuf::from("."),
            log_filter: "warn".to_string(),
        }
    }
}

impl SupportConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse test support configuration")
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).with_context(|| {
            format!("Failed to read test support configuration: {}", path.display())
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from the environment.
    ///
    /// Starts from the file named by [`CONFIG_FILE_ENV`] (or the defaults),
    /// then applies the single-field overrides.
    pub fn from_env() -> Result<Self> {
        let mut config = match std::env::var_os(CONFIG_FILE_ENV) {
            Some(path) => Self::load_from(Path::new(&path))?,
            None => Self::default(),
        };

        if let Some(dir) = std::env::var_os(TEMP_DIR_ENV) {
            config.temp_dir = PathBuf::from(dir);
        }
        if let Some(root) = std::env::var_os(RESOURCE_ROOT_ENV) {
            config.resource_root = PathBuf::from(root);
        }

        Ok(config)
    }

    /// Same settings with the scratch directory placed under `base`.
    pub fn rooted_at(mut self, base: &Path) -> Self {
        self.temp_dir = base.join(&self.temp_dir);
        self
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize test support configuration")
    }
}
