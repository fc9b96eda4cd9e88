use crate::output::Output;
use crate::ConfigCommands;
use color_eyre::Result;
use movie_rate_config::{CredentialStore, PathManager};
use serde_json::json;

pub fn run_config(cmd: ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(output),
        ConfigCommands::Key => set_api_key(output),
    }
}

fn show_config(output: &Output) -> Result<()> {
    let paths = PathManager::default();
    let config = super::load_config(&paths)?;

    let credentials_file = paths.credentials_file();
    let mut cred_store = CredentialStore::new(credentials_file.clone());
    cred_store.load().map_err(|e| {
        color_eyre::eyre::eyre!(
            "Failed to load credentials from {}: {}",
            credentials_file.display(),
            e
        )
    })?;

    let api_key = if std::env::var("OMDB_API_KEY").map(|k| !k.is_empty()).unwrap_or(false) {
        Some("(from OMDB_API_KEY)".to_string())
    } else {
        cred_store
            .get_omdb_api_key()
            .or(config.omdb.api_key.as_ref())
            .map(|k| mask(k))
    };

    if output.is_human() {
        output.println(format!("Config file:      {}", paths.config_file().display()));
        output.println(format!("OMDb base URL:    {}", config.omdb.base_url));
        output.println(format!(
            "OMDb API key:     {}",
            api_key.as_deref().unwrap_or("(not set)")
        ));
        output.println(format!("Min term width:   {}", config.ui.min_terminal_width));
        output.println(format!("Default query:    {}", config.ui.default_query));
    } else {
        output.json(&json!({
            "config_file": paths.config_file().display().to_string(),
            "base_url": config.omdb.base_url,
            "api_key": api_key,
            "min_terminal_width": config.ui.min_terminal_width,
            "default_query": config.ui.default_query,
        }));
    }

    Ok(())
}

fn set_api_key(output: &Output) -> Result<()> {
    let paths = PathManager::default();
    paths
        .ensure_directories()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to create configuration directories: {}", e))?;

    let key = rpassword::prompt_password("OMDb API key: ")
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read API key: {}", e))?;
    let key = key.trim().to_string();
    if key.is_empty() {
        return Err(color_eyre::eyre::eyre!("API key cannot be empty"));
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
    cred_store.set_omdb_api_key(key);
    cred_store.save().map_err(|e| {
        color_eyre::eyre::eyre!(
            "Failed to save credentials to {}: {}",
            credentials_file.display(),
            e
        )
    })?;

    output.success("OMDb API key saved");
    Ok(())
}

fn mask(value: &str) -> String {
    if value.chars().count() <= 4 {
        "****".to_string()
    } else {
        let prefix: String = value.chars().take(4).collect();
        format!("{}****", prefix)
    }
}
