//! Settings loaded from `.localized-text.json`.
/// Settings file discovery
mod loader;
/// Active settings holder
mod manager;
/// Settings schema and validation
mod types;

pub use loader::CONFIG_FILE_NAME;
pub use manager::ConfigManager;
pub use types::{
    ConfigError,
    FallbackConfig,
    TextSettings,
    ValidationError,
};
