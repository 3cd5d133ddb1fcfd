use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::error::TextError;
use crate::locale::LocaleId;
use crate::text::HumanizeOptions;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "fallback.preferredLocale")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error(transparent)]
    Locale(#[from] TextError),
}

/// One numbered line per error.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextSettings {
    /// Locale used when the caller has none of its own.
    pub default_locale: String,

    pub fallback: FallbackConfig,

    /// Defaults for `humanize` and the conversions built on it.
    pub humanize: HumanizeOptions,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FallbackConfig {
    /// Consult other locales when the requested one is empty.
    pub enabled: bool,

    /// Fall back to this locale instead of a random one.
    ///
    /// - `None`: any non-empty locale, chosen at random (default)
    /// - `Some(code)`: only this locale
    pub preferred_locale: Option<String>,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self { enabled: true, preferred_locale: None }
    }
}

impl TextSettings {
    /// # Errors
    /// - Locale code is empty
    /// - Locale code is malformed
    /// - Preferred fallback locale equals the default locale
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let default_locale =
            check_locale("defaultLocale", &self.default_locale, &mut errors);

        if let Some(code) = &self.fallback.preferred_locale {
            let preferred = check_locale("fallback.preferredLocale", code, &mut errors);

            if let (Some(default_locale), Some(preferred)) = (&default_locale, preferred)
                && *default_locale == preferred
            {
                errors.push(ValidationError::new(
                    "fallback.preferredLocale",
                    format!(
                        "The fallback locale '{preferred}' is the default locale itself. Choose another locale, or remove this field"
                    ),
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Parses a locale field, recording a validation error on failure.
fn check_locale(
    field_path: &str,
    code: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<LocaleId> {
    if code.trim().is_empty() {
        errors.push(ValidationError::new(
            field_path,
            "The locale cannot be empty. Please specify a locale code, for example: \"en\"",
        ));
        return None;
    }

    match LocaleId::parse(code) {
        Ok(locale) => Some(locale),
        Err(e) => {
            errors.push(ValidationError::new(field_path, format!("{e}. Example: \"fr-FR\"")));
            None
        }
    }
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            fallback: FallbackConfig::default(),
            humanize: HumanizeOptions::default(),
        }
    }
}
