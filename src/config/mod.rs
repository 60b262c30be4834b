mod defaults;
mod types;

pub use types::*;

use crate::discovery::NamePattern;
use crate::error::ConfigError;
use defaults::*;
use std::path::Path;
use tracing::debug;

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            plans_dir: default_plans_dir(),
            naming: NamingConfig::default(),
            extract: ExtractConfig::default(),
            harmonize: HarmonizeConfig::default(),
            inventory: InventoryConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path must exist. Without one, `plankit.yaml` in the working
    /// directory is used when present, and the built-in defaults otherwise.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    debug!("Using config {:?}", path);
                    Self::load(path)
                } else {
                    debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Validate settings shared by every command. Report keywords are
    /// checked by the report command once CLI overrides are applied.
    pub fn validate(&self) -> Result<(), ConfigError> {
        NamePattern::new(&self.naming.pattern)?;
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
