use std::{fs, io::Read, path::{Path, PathBuf}};

use serde::{Deserialize, Serialize};

use crate::{error::AppError, validation::validate_api_base};

/// Settings directory inside the user's config directory
const SETTINGS_DIR: &str = "ghprofile";
/// Settings file name
const SETTINGS_FILE: &str = "settings.json";
/// Public GitHub REST API
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Effective configuration for the lookup client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Base URL the `/users/{username}` path is appended to
    pub api_base: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: format!("ghprofile/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Gets the path to the settings file
pub fn get_settings_path() -> Result<PathBuf, AppError> {
    let config_dir: PathBuf = dirs::config_dir().ok_or_else(|| {
        AppError::Validation("failed to find the config directory".to_string())
    })?;
    Ok(config_dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

/// Loads settings from the JSON file, falling back to defaults
///
/// # Arguments
/// * `path` - Settings file to read
pub fn load_settings_from(path: &Path) -> Result<Settings, AppError> {
    if !path.exists() {
        log::debug!("no settings file at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let mut file = fs::File::open(path)?;

    let mut file_contents = String::new();
    file.read_to_string(&mut file_contents)?;

    if file_contents.trim().is_empty() {
        return Ok(Settings::default());
    }

    let mut settings: Settings = serde_json::from_str(&file_contents)?;
    settings.api_base = validate_api_base(&settings.api_base)?;
    Ok(settings)
}

/// Loads settings from the user's config directory and applies overrides
///
/// # Arguments
/// * `api_base` - Optional API base URL taking precedence over the file
pub fn load_settings(api_base: Option<&str>) -> Result<Settings, AppError> {
    let path: PathBuf = get_settings_path()?;
    let mut settings: Settings = load_settings_from(&path)?;
    if let Some(api_base) = api_base {
        settings.api_base = validate_api_base(api_base)?;
    }
    Ok(settings)
}
