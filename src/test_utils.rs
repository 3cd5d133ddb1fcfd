//! Shared fixtures for unit tests.
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use crate::locale::LocaleId;
use crate::localized::{
    LocaleEntry,
    LocalizedText,
};

/// Parses a locale code known to be valid.
pub(crate) fn locale(code: &str) -> LocaleId {
    LocaleId::parse(code).unwrap()
}

/// Builds entries from `(locale, text)` pairs, in order.
pub(crate) fn entries(pairs: &[(&str, &str)]) -> Vec<LocaleEntry> {
    pairs
        .iter()
        .map(|(code, text)| LocaleEntry::new(locale(code), Some((*text).to_string())))
        .collect()
}

/// Builds a container from `(locale, text)` pairs.
pub(crate) fn container(pairs: &[(&str, &str)]) -> LocalizedText {
    let mut text = LocalizedText::new();
    for (code, value) in pairs {
        text.set(locale(code), *value);
    }
    text
}
