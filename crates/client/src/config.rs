use anyhow::{Context, Result};
use std::path::PathBuf;

pub const DEFAULT_CREDENTIALS_PATH: &str = ".hacktracker/token";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub credentials_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_base_url = lookup("HACKTRACKER_API_URL")
            .filter(|url| !url.trim().is_empty())
            .context("Cannot load HACKTRACKER_API_URL env variable")?;

        Ok(Self {
            api_base_url: api_base_url.trim().trim_end_matches('/').to_string(),
            credentials_path: lookup("HACKTRACKER_CREDENTIALS")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CREDENTIALS_PATH)),
        })
    }
}
