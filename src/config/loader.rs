//! Settings file loading.

use std::path::Path;

use super::{
    ConfigError,
    TextSettings,
};

/// Name of the settings file looked up in a workspace root.
pub const CONFIG_FILE_NAME: &str = ".localized-text.json";

/// Reads [`CONFIG_FILE_NAME`] from `workspace_root`.
///
/// # Returns
/// - `Ok(Some(settings))`: the file exists and parsed
/// - `Ok(None)`: there is no settings file
///
/// # Errors
/// - The file cannot be read
/// - The file is not valid JSON for [`TextSettings`]
pub(super) fn load_from_workspace(
    workspace_root: &Path,
) -> Result<Option<TextSettings>, ConfigError> {
    let config_path = workspace_root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: TextSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}
