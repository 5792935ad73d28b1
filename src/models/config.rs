use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file location relative to the working directory
pub const CONFIG_PATH: &str = "balvatika/config.toml";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "BALVATIKA_DATA_DIR";

/// Slot name used by the original browser dashboard
pub const DEFAULT_SLOT: &str = "balvatika_requests";

fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}

/// Balvatika configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalvatikaConfig {
    /// Directory holding the request slot (platform data dir when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Name of the slot file, without the `.json` extension
    #[serde(default = "default_slot")]
    pub slot: String,

    /// Write the demo requests on first run
    #[serde(default)]
    pub seed_demo_data: bool,
}

impl Default for BalvatikaConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            slot: default_slot(),
            seed_demo_data: false,
        }
    }
}

impl BalvatikaConfig {
    /// Load config from balvatika/config.toml
    pub fn load(project_root: &Path) -> anyhow::Result<Self> {
        let config_path = project_root.join(CONFIG_PATH);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: BalvatikaConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to balvatika/config.toml
    pub fn save(&self, project_root: &Path) -> anyhow::Result<()> {
        let config_path = project_root.join(CONFIG_PATH);
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Resolve the data directory
    ///
    /// Priority: explicit override, `BALVATIKA_DATA_DIR`, config file, platform data dir.
    pub fn resolve_data_dir(&self, explicit: Option<&Path>) -> PathBuf {
        if let Some(dir) = explicit {
            return dir.to_path_buf();
        }
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            return PathBuf::from(dir);
        }
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("balvatika"))
        .unwrap_or_else(|| PathBuf::from(".balvatika"))
}
