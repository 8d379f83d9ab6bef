use crate::error::SearchError;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.json";

/// Settings read from the JSON config file. Every field is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct FileConfig {
    pub key: Option<String>,
    pub url: Option<String>,
}

/// Returns the platform-specific path to the configuration file.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("jumpcloud_search").join(CONFIG_FILE_NAME))
}

/// Loads the config file at `path`. A missing file is an empty config.
pub fn load_config(path: &Path) -> Result<FileConfig, SearchError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(FileConfig::default()),
        Err(e) => {
            return Err(SearchError::Config {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        }
    };
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| SearchError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
