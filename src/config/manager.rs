//! Holds the active settings and the values derived from them.

use std::path::PathBuf;

use super::{
    ConfigError,
    TextSettings,
    loader,
};
use crate::locale::LocaleId;
use crate::localized::GetOptions;
use crate::text::HumanizeOptions;

#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// Last settings that passed validation
    current_settings: TextSettings,

    /// Parsed `defaultLocale`
    current_locale: LocaleId,

    /// Parsed `fallback.preferredLocale`
    fallback_locale: Option<LocaleId>,

    /// Root the settings were loaded from
    workspace_root: Option<PathBuf>,
}

impl ConfigManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `.localized-text.json` from `workspace_root`, or the defaults when
    /// there is no root or no file.
    ///
    /// # Errors
    /// - The file cannot be read or parsed
    /// - The settings fail validation
    pub fn load_settings(&mut self, workspace_root: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for workspace: {:?}", workspace_root);

        let settings = if let Some(root) = &workspace_root {
            loader::load_from_workspace(root)?.map_or_else(TextSettings::default, |ws| {
                tracing::debug!("Loaded workspace settings: {:?}", ws);
                ws
            })
        } else {
            TextSettings::default()
        };

        self.apply(settings)?;
        self.workspace_root = workspace_root;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// Replaces the active settings. On error the previous settings stay.
    ///
    /// # Errors
    /// The settings fail validation.
    pub fn update_settings(&mut self, new_settings: TextSettings) -> Result<(), ConfigError> {
        tracing::debug!("Updating settings...");

        self.apply(new_settings)?;
        tracing::debug!("Settings updated successfully");

        Ok(())
    }

    /// Validates `settings` and swaps them in together with their parsed locales.
    fn apply(&mut self, settings: TextSettings) -> Result<(), ConfigError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        let current_locale = LocaleId::parse(&settings.default_locale)?;
        let fallback_locale =
            settings.fallback.preferred_locale.as_deref().map(LocaleId::parse).transpose()?;

        self.current_settings = settings;
        self.current_locale = current_locale;
        self.fallback_locale = fallback_locale;

        Ok(())
    }

    #[must_use]
    pub const fn get_settings(&self) -> &TextSettings {
        &self.current_settings
    }

    #[must_use]
    pub const fn workspace_root(&self) -> Option<&PathBuf> {
        self.workspace_root.as_ref()
    }

    /// The configured default locale.
    #[must_use]
    pub const fn current_locale(&self) -> &LocaleId {
        &self.current_locale
    }

    /// Lookup options matching the `fallback` settings.
    #[must_use]
    pub fn get_options(&self) -> GetOptions {
        GetOptions {
            use_fallback: self.current_settings.fallback.enabled,
            return_none_if_empty: true,
            fallback_locale: self.fallback_locale.clone(),
        }
    }

    #[must_use]
    pub const fn humanize_options(&self) -> HumanizeOptions {
        self.current_settings.humanize
    }
}
