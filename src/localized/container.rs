//! The multi-locale text container.

use std::fmt;
use std::hash::{
    DefaultHasher,
    Hash,
    Hasher,
};

use rand::Rng;

use super::fallback::{
    self,
    GetOptions,
    PLACEHOLDER,
};
use super::value_type::{
    ValueType,
    classify,
};
use crate::error::TextError;
use crate::locale::LocaleId;

/// One locale's variant of a phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleEntry {
    /// Locale the text belongs to
    locale: LocaleId,
    /// `None` when the locale is known but carries no text
    text: Option<String>,
}

impl LocaleEntry {
    /// Creates an entry.
    #[must_use]
    pub const fn new(locale: LocaleId, text: Option<String>) -> Self {
        Self { locale, text }
    }

    #[must_use]
    pub const fn locale(&self) -> &LocaleId {
        &self.locale
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The text, unless it is absent or empty.
    #[must_use]
    pub fn non_empty_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }
}

/// A phrase stored in several languages.
///
/// Each locale appears at most once; [`set`](Self::set) overwrites. A locale
/// that is absent reads exactly like one with empty text, which is also what
/// equality and hashing assume.
///
/// # Examples
/// ```
/// use localized_text::{GetOptions, LocaleId, LocalizedText};
///
/// let en = LocaleId::parse("en").unwrap();
/// let fr = LocaleId::parse("fr").unwrap();
///
/// let mut text = LocalizedText::with_text(en.clone(), "Hello");
/// text.set(fr.clone(), "Bonjour");
///
/// assert_eq!(text.get(&fr, &GetOptions::default()), Some("Bonjour"));
/// assert_eq!(text.render_exact(&LocaleId::parse("de").unwrap(), false), Some("N/A"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocalizedText {
    /// Entries in insertion order, unique by locale
    entries: Vec<LocaleEntry>,
    /// Usage statistics maintained by the caller
    usage_count: u64,
}

impl LocalizedText {
    /// Creates an empty container.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new(), usage_count: 0 }
    }

    /// Creates a container holding `text` for `locale`.
    #[must_use]
    pub fn with_text(locale: LocaleId, text: impl Into<String>) -> Self {
        let mut container = Self::new();
        container.set(locale, text);
        container
    }

    /// Clones the container and sets `text` for `locale` on the copy.
    #[must_use]
    pub fn cloned_with(&self, locale: LocaleId, text: impl Into<String>) -> Self {
        let mut clone = self.clone();
        clone.set(locale, text);
        clone
    }

    /// Stores `text` for `locale`, replacing any previous value.
    pub fn set(&mut self, locale: LocaleId, text: impl Into<String>) {
        self.upsert(locale, Some(text.into()));
    }

    /// Stores a possibly absent text for `locale`.
    pub(crate) fn upsert(&mut self, locale: LocaleId, text: Option<String>) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.locale == locale) {
            entry.text = text;
        } else {
            self.entries.push(LocaleEntry::new(locale, text));
        }
    }

    /// The stored text for `locale`, without any fallback.
    #[must_use]
    pub fn text(&self, locale: &LocaleId) -> Option<&str> {
        self.entry(locale).and_then(LocaleEntry::text)
    }

    /// The entry for `locale`, if one exists.
    fn entry(&self, locale: &LocaleId) -> Option<&LocaleEntry> {
        self.entries.iter().find(|entry| &entry.locale == locale)
    }

    /// Non-empty text for `locale`; absent and empty are the same thing.
    fn non_empty_text(&self, locale: &LocaleId) -> Option<&str> {
        self.entry(locale).and_then(LocaleEntry::non_empty_text)
    }

    /// Looks up `locale`, falling back as described by `options`.
    ///
    /// A random choice among several fallback candidates uses the thread RNG;
    /// see [`get_with_rng`](Self::get_with_rng) for a reproducible pick.
    #[must_use]
    pub fn get(&self, locale: &LocaleId, options: &GetOptions) -> Option<&str> {
        self.get_with_rng(locale, options, &mut rand::rng())
    }

    /// Looks up `locale`, drawing any random fallback choice from `rng`.
    ///
    /// 1. Non-empty text for `locale` wins.
    /// 2. Without fallback, the empty policy of `options` decides.
    /// 3. Otherwise the other locales are consulted: the preferred fallback
    ///    locale if one is given, else a uniformly random non-empty one.
    #[must_use]
    pub fn get_with_rng<R>(&self, locale: &LocaleId, options: &GetOptions, rng: &mut R) -> Option<&str>
    where
        R: Rng + ?Sized,
    {
        if let Some(text) = self.non_empty_text(locale) {
            return Some(text);
        }

        if !options.use_fallback {
            return fallback::empty_result(options.return_none_if_empty);
        }

        let fallback_set = self.entries.iter().filter(|entry| &entry.locale != locale);
        fallback::resolve(fallback_set, options, rng)
    }

    /// The text for `current`, falling back to other locales and finally to
    /// [`PLACEHOLDER`].
    #[must_use]
    pub fn render(&self, current: &LocaleId) -> String {
        self.get(current, &GetOptions::default().with_placeholder())
            .unwrap_or(PLACEHOLDER)
            .to_string()
    }

    /// The text for `current` only. An empty value becomes `None` when
    /// `return_none_if_empty` is set and [`PLACEHOLDER`] otherwise.
    #[must_use]
    pub fn render_exact(&self, current: &LocaleId, return_none_if_empty: bool) -> Option<&str> {
        let options = GetOptions {
            use_fallback: false,
            return_none_if_empty,
            fallback_locale: None,
        };
        self.get(current, &options)
    }

    /// A [`Display`](fmt::Display) view rendering the text for `current`.
    #[must_use]
    pub const fn display<'a>(&'a self, current: &'a LocaleId) -> Rendered<'a> {
        Rendered { text: self, current }
    }

    /// Whether any locale carries non-empty text.
    #[must_use]
    pub fn has_value(&self) -> bool {
        self.entries.iter().any(|entry| entry.non_empty_text().is_some())
    }

    /// Content kind of the first non-empty entry.
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        self.entries.iter().find_map(LocaleEntry::non_empty_text).map_or(ValueType::Unknown, classify)
    }

    #[must_use]
    pub const fn usage_count(&self) -> u64 {
        self.usage_count
    }

    /// Replaces the usage counter.
    ///
    /// # Errors
    /// Returns [`TextError::NegativeCounter`] when `count` is below zero.
    pub fn set_counter(&mut self, count: i64) -> Result<(), TextError> {
        self.usage_count = u64::try_from(count).map_err(|_| TextError::NegativeCounter(count))?;
        Ok(())
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &LocaleEntry> {
        self.entries.iter()
    }

    /// Stored locales in insertion order.
    pub fn locales(&self) -> impl Iterator<Item = &LocaleId> {
        self.entries.iter().map(LocaleEntry::locale)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for LocalizedText {
    /// Compares over the union of both sides' locales; missing equals empty.
    /// The usage counter does not take part.
    fn eq(&self, other: &Self) -> bool {
        self.entries
            .iter()
            .chain(&other.entries)
            .all(|entry| self.non_empty_text(&entry.locale) == other.non_empty_text(&entry.locale))
    }
}

impl Eq for LocalizedText {}

impl Hash for LocalizedText {
    /// XOR of per-entry hashes over non-empty entries, so neither order nor
    /// empty entries affect the result.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let combined = self
            .entries
            .iter()
            .filter_map(|entry| entry.non_empty_text().map(|text| (&entry.locale, text)))
            .fold(0_u64, |acc, pair| {
                let mut hasher = DefaultHasher::new();
                pair.hash(&mut hasher);
                acc ^ hasher.finish()
            });
        state.write_u64(combined);
    }
}

/// Display adapter returned by [`LocalizedText::display`].
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a> {
    /// Container being rendered
    text: &'a LocalizedText,
    /// Locale requested by the caller
    current: &'a LocaleId,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text.render(self.current))
    }
}
