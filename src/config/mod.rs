mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = load_from_path(&config_path).await?;
    config.llm.api_key = api_key_from_env();

    Ok(config)
}

/// A missing file is not an error; the app runs on defaults.
pub async fn load_from_path(path: &str) -> Result<Config> {
    match tokio::fs::read_to_string(path).await {
        Ok(raw) => {
            debug!("Loading configuration from: {}", path);
            Ok(serde_yaml::from_str(&raw)?)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No configuration file at {}, using defaults", path);
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

fn api_key_from_env() -> Option<String> {
    env::var("GEMINI_API_KEY")
        .or_else(|_| env::var("API_KEY"))
        .ok()
        .filter(|key| !key.is_empty())
}
