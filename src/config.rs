use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::model::ColumnLayout;
use crate::error::{Result, VacancyError};

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "JOB_VACANCIES_CONFIG";

/// Runtime settings. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where filtered rows are written for plotting.
    pub output_path: PathBuf,
    /// Print matching rows to stdout as well.
    pub echo: bool,
    pub layout: ColumnLayout,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("dataForPlotting.csv"),
            echo: true,
            layout: ColumnLayout::default(),
            window: WindowConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 600.0,
        }
    }
}

impl Config {
    /// Load from `path`, else from `$JOB_VACANCIES_CONFIG`, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        match path.map(Path::to_path_buf).or(env_path) {
            Some(p) => Self::from_file(&p),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        // FileNotFound is reserved for the input table; a bad config exits 3.
        let text = std::fs::read_to_string(path).map_err(|e| VacancyError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: Config = serde_json::from_str(&text).map_err(|e| VacancyError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        log::debug!("Loaded config from {}: {config:?}", path.display());
        Ok(config)
    }
}
