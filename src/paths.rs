use std::path::PathBuf;

use directories::ProjectDirs;

/// Environment variable that overrides the configuration directory.
pub const HOME_ENV: &str = "TICKETGRID_HOME";

/// Returns the directory holding `config.yaml` and `preferences.yaml`.
///
/// Respects `TICKETGRID_HOME`, then the platform config directory, then `.ticketgrid`.
pub fn config_dir() -> PathBuf {
    if let Ok(root) = std::env::var(HOME_ENV)
        && !root.is_empty()
    {
        return PathBuf::from(root);
    }
    ProjectDirs::from("", "", "ticketgrid")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".ticketgrid"))
}

/// Returns the path to the configuration file.
pub fn config_file() -> PathBuf {
    config_dir().join("config.yaml")
}

/// Returns the path to the persisted display preferences.
pub fn preferences_file() -> PathBuf {
    config_dir().join("preferences.yaml")
}
