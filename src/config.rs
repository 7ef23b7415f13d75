//! Runtime configuration
//!
//! Resolves the roster file and output preferences from command-line flags,
//! environment variables, and the platform config directory.

use anyhow::Result;
use std::env;
use std::path::PathBuf;

// Environment variable names
pub const ENV_DATA_FILE: &str = "BIRTHDAYCMD_FILE";
pub const ENV_NO_COLOR: &str = "BIRTHDAYCMD_NO_COLOR";

const DEFAULT_FILE_NAME: &str = "people.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
    pub color: bool,
}

impl Config {
    /// Flag beats environment, environment beats the default location.
    pub fn resolve(file_flag: Option<PathBuf>) -> Result<Self> {
        let env_file = env::var(ENV_DATA_FILE).ok();
        let no_color = env::var(ENV_NO_COLOR).ok();
        Self::from_sources(file_flag, env_file, no_color)
    }

    fn from_sources(
        file_flag: Option<PathBuf>,
        env_file: Option<String>,
        no_color: Option<String>,
    ) -> Result<Self> {
        let data_file = match file_flag {
            Some(path) => path,
            None => match env_file.filter(|s| !s.trim().is_empty()) {
                Some(path) => PathBuf::from(path),
                None => Self::default_path()?,
            },
        };

        let color = !no_color.is_some_and(|v| !v.is_empty() && v != "0");

        Ok(Self { data_file, color })
    }

    pub fn default_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join("birthdaycmd").join(DEFAULT_FILE_NAME))
    }
}
