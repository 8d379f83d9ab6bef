use crate::config_manager::{default_config_path, load_config, FileConfig};
use crate::error::SearchError;
use crate::request::{DEFAULT_HOSTNAME, DEFAULT_SEARCH_URL, PLACEHOLDER_API_KEY};
use crate::utils::get_input_with_default;
use clap::Parser;
use std::env;
use std::path::PathBuf;
use tracing::{debug, warn};

pub const API_KEY_VAR: &str = "JUMPCLOUD_API_KEY";
pub const SEARCH_URL_VAR: &str = "JUMPCLOUD_SEARCH_URL";

#[derive(Debug, Default, Parser)]
#[command(name = "jumpcloud-search", version, about = "Look up JumpCloud systems by hostname")]
pub struct Cli {
    /// Hostname to search for. Prompted for when omitted.
    #[arg(long)]
    pub hostname: Option<String>,

    /// Search endpoint URL.
    #[arg(long)]
    pub url: Option<String>,

    /// JumpCloud API key, sent as `x-api-key`.
    #[arg(long)]
    pub api_key: Option<String>,

    /// JSON config file with `key` and `url` fields.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print only the id of the single matching system.
    #[arg(long)]
    pub find_id: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub search_url: String,
    pub api_key: String,
    pub hostname: String,
    pub find_id: bool,
}

impl AppConfig {
    /// Expects `.env` to be loaded already, see `main`.
    pub fn new(cli: Cli) -> Result<Self, SearchError> {
        let config_path = cli.config.clone().or_else(default_config_path);
        let file_config = match &config_path {
            Some(path) => {
                debug!("Reading config file {}", path.display());
                load_config(path)?
            }
            None => FileConfig::default(),
        };

        let hostname = match &cli.hostname {
            Some(hostname) => hostname.clone(),
            None => get_input_with_default("Enter hostname to find", DEFAULT_HOSTNAME)?,
        };

        Ok(Self::resolve(cli, hostname, file_config, |name| {
            env::var(name).ok()
        }))
    }

    /// Merges the sources: CLI, then environment, then config file, then defaults.
    pub fn resolve(
        cli: Cli,
        hostname: String,
        file_config: FileConfig,
        lookup_env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let from_env = |name: &str| lookup_env(name).filter(|v| !v.trim().is_empty());

        let api_key = cli
            .api_key
            .or_else(|| from_env(API_KEY_VAR))
            .or(file_config.key)
            .unwrap_or_else(|| PLACEHOLDER_API_KEY.to_string());
        if api_key == PLACEHOLDER_API_KEY {
            warn!(
                "No API key configured, sending placeholder '{}'. Set {} or pass --api-key.",
                PLACEHOLDER_API_KEY, API_KEY_VAR
            );
        }

        let search_url = cli
            .url
            .or_else(|| from_env(SEARCH_URL_VAR))
            .or(file_config.url)
            .unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string());

        Self {
            search_url,
            api_key,
            hostname,
            find_id: cli.find_id,
        }
    }
}
