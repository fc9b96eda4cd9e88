pub mod config;
pub mod info;
pub mod search;
pub mod watch;

use color_eyre::Result;
use movie_rate_config::{Config, CredentialStore, PathManager};
use movie_rate_omdb::OmdbClient;

pub(crate) fn load_config(paths: &PathManager) -> Result<Config> {
    let config_file = paths.config_file();
    Config::load(&config_file).map_err(|e| {
        color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_file.display(), e)
    })
}

pub(crate) fn build_client(config: &Config, paths: &PathManager) -> Result<OmdbClient> {
    let api_key = resolve_api_key(config, paths)?;
    Ok(OmdbClient::with_base_url(
        api_key,
        config.omdb.base_url.clone(),
    ))
}

/// Key resolution order: environment, credential store, config file.
fn resolve_api_key(config: &Config, paths: &PathManager) -> Result<String> {
    if let Ok(key) = std::env::var("OMDB_API_KEY") {
        if !key.is_empty() {
            return Ok(key);
        }
    }

    let credentials_file = paths.credentials_file();
    let mut cred_store = CredentialStore::new(credentials_file.clone());
    cred_store.load().map_err(|e| {
        color_eyre::eyre::eyre!(
            "Failed to load credentials from {}: {}",
            credentials_file.display(),
            e
        )
    })?;
    if let Some(key) = cred_store.get_omdb_api_key() {
        return Ok(key.clone());
    }

    if let Some(key) = &config.omdb.api_key {
        return Ok(key.clone());
    }

    Err(color_eyre::eyre::eyre!(
        "No OMDb API key configured. Run 'reelrate config key' or set OMDB_API_KEY."
    ))
}
