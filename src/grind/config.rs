use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{GrindError, Result};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for grind, stored in config.json under the data directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GrindConfig {
    /// Path to a custom sheet file; the built-in sheet is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet: Option<String>,
}

impl GrindConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(GrindError::Io)?;
        let config: GrindConfig =
            serde_json::from_str(&content).map_err(GrindError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(GrindError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(GrindError::Serialization)?;
        fs::write(config_path, content).map_err(GrindError::Io)?;
        Ok(())
    }

    pub fn set_sheet(&mut self, path: &str) {
        self.sheet = Some(path.to_string());
    }

    pub fn clear_sheet(&mut self) {
        self.sheet = None;
    }
}
