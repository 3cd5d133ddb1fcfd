//! Wire form of [`LocalizedText`]: a flat JSON object keyed by language code.
//!
//! ```json
//! { "en": "Hello", "fr": "Bonjour" }
//! ```
//!
//! Empty texts are omitted, and a container without any value serializes to
//! `null` (no payload at all).

use std::collections::HashSet;
use std::fmt;
use std::hash::{
    DefaultHasher,
    Hash,
    Hasher,
};

use serde::de::{
    self,
    MapAccess,
    Visitor,
};
use serde::ser::SerializeMap;
use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};

use super::container::LocalizedText;
use crate::error::TextError;
use crate::locale::LocaleId;

impl LocalizedText {
    /// Encodes the container as ordered `(language code, text)` pairs.
    ///
    /// Empty texts are skipped. When several locales share a language code
    /// (`en-US`, `en-GB`) the first one with text wins.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut seen = HashSet::new();
        let mut pairs = Vec::new();

        for entry in self.entries() {
            let Some(text) = entry.non_empty_text() else {
                continue;
            };
            let language = entry.locale().language();
            if !seen.insert(language) {
                tracing::warn!(
                    "Skipping {} while encoding: language '{language}' is already present",
                    entry.locale()
                );
                continue;
            }
            pairs.push((language.to_string(), text.to_string()));
        }

        pairs
    }

    /// Decodes `(locale code, text)` pairs, calling [`set`](Self::set) for each.
    ///
    /// # Errors
    /// Returns [`TextError::InvalidLocale`] for a key that is not a locale code.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, TextError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut container = Self::new();
        for (code, text) in pairs {
            container.set(LocaleId::parse(code.as_ref())?, text);
        }
        Ok(container)
    }

    /// Serializes to JSON, or `None` when there is nothing to store.
    #[must_use]
    pub fn to_json(&self) -> Option<String> {
        if !self.has_value() {
            return None;
        }

        match serde_json::to_string(self) {
            Ok(json) => Some(json),
            Err(e) => {
                tracing::warn!("Failed to serialize localized text: {e}");
                None
            }
        }
    }

    /// Strictly decodes a JSON payload. `null` yields an empty container.
    ///
    /// # Errors
    /// Returns [`TextError::Json`] for malformed payloads, non-string values,
    /// or keys that are not locale codes.
    pub fn from_json(json: &str) -> Result<Self, TextError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds a container from either a JSON payload or free text.
    ///
    /// The token is decoded as JSON first. If that fails, or the decoded
    /// container holds no value, the whole token becomes the text for
    /// `current`. This never fails.
    ///
    /// # Examples
    /// ```
    /// use localized_text::{LocaleId, LocalizedText};
    ///
    /// let en = LocaleId::parse("en").unwrap();
    ///
    /// let parsed = LocalizedText::parse_lenient(r#"{"fr":"Bonjour"}"#, &en);
    /// assert_eq!(parsed.text(&LocaleId::parse("fr").unwrap()), Some("Bonjour"));
    ///
    /// let literal = LocalizedText::parse_lenient("Hello there", &en);
    /// assert_eq!(literal.text(&en), Some("Hello there"));
    /// ```
    #[must_use]
    pub fn parse_lenient(token: &str, current: &LocaleId) -> Self {
        if !token.is_empty() {
            match Self::from_json(token) {
                Ok(parsed) if parsed.has_value() => return parsed,
                Ok(_) => tracing::debug!("Decoded payload has no value; using it as {current} text"),
                Err(e) => tracing::debug!("Not a localized text payload ({e}); using it as {current} text"),
            }
        }

        Self::with_text(current.clone(), token)
    }
}

/// Compares two serialized forms by value rather than by bytes.
///
/// Both sides are decoded with [`LocalizedText::parse_lenient`], so key order
/// and omitted empty locales do not matter.
#[must_use]
pub fn serialized_eq(left: &str, right: &str, current: &LocaleId) -> bool {
    LocalizedText::parse_lenient(left, current) == LocalizedText::parse_lenient(right, current)
}

/// Hashes a serialized form consistently with [`serialized_eq`].
#[must_use]
pub fn serialized_hash(serialized: &str, current: &LocaleId) -> u64 {
    let mut hasher = DefaultHasher::new();
    LocalizedText::parse_lenient(serialized, current).hash(&mut hasher);
    hasher.finish()
}

impl Serialize for LocalizedText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !self.has_value() {
            return serializer.serialize_none();
        }

        let pairs = self.to_pairs();
        let mut map = serializer.serialize_map(Some(pairs.len()))?;
        for (language, text) in &pairs {
            map.serialize_entry(language, text)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LocalizedText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(LocalizedTextVisitor)
    }
}

/// Accepts `null` or an object of locale code to string-or-null.
struct LocalizedTextVisitor;

impl<'de> Visitor<'de> for LocalizedTextVisitor {
    type Value = LocalizedText;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("null or a map of locale codes to text")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(LocalizedText::new())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(LocalizedText::new())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut container = LocalizedText::new();
        while let Some((code, text)) = map.next_entry::<String, Option<String>>()? {
            let locale = LocaleId::parse(&code).map_err(de::Error::custom)?;
            container.upsert(locale, text);
        }
        Ok(container)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::test_utils::{
        container,
        locale,
    };

    #[rstest]
    fn to_pairs_skips_empty_and_uses_language_code() {
        let text = container(&[("en-US", "Hello"), ("fr", ""), ("de-DE", "Hallo")]);

        let pairs = text.to_pairs();

        assert_that!(
            pairs,
            eq(&vec![
                ("en".to_string(), "Hello".to_string()),
                ("de".to_string(), "Hallo".to_string())
            ])
        );
    }

    #[rstest]
    fn to_pairs_keeps_first_of_shared_language() {
        let text = container(&[("en-US", ""), ("en-GB", "Colour"), ("en-AU", "Color")]);

        assert_that!(
            text.to_pairs(),
            eq(&vec![("en".to_string(), "Colour".to_string())])
        );
    }

    #[gtest]
    #[rstest]
    fn from_pairs_sets_each_locale() {
        let text = LocalizedText::from_pairs([("en", "Hello"), ("fr", "Bonjour")]).unwrap();

        expect_that!(text.text(&locale("en")), some(eq("Hello")));
        expect_that!(text.text(&locale("fr")), some(eq("Bonjour")));
    }

    #[rstest]
    fn from_pairs_rejects_bad_locale() {
        let result = LocalizedText::from_pairs([("not a locale", "x")]);

        assert_that!(result, err(displays_as(contains_substring("not a locale"))));
    }

    #[rstest]
    fn serialize_to_object() {
        let text = container(&[("en", "Hello"), ("fr", "Bonjour"), ("de", "")]);

        let value = serde_json::to_value(&text).unwrap();

        assert_that!(value, eq(&json!({ "en": "Hello", "fr": "Bonjour" })));
    }

    #[gtest]
    #[rstest]
    fn serialize_without_value_is_null() {
        let text = container(&[("en", "")]);

        expect_that!(serde_json::to_string(&text).unwrap(), eq("null"));
        expect_that!(text.to_json(), none());
    }

    #[rstest]
    fn to_json_preserves_insertion_order() {
        let text = container(&[("fr", "Bonjour"), ("en", "Hello")]);

        assert_that!(text.to_json(), some(eq(r#"{"fr":"Bonjour","en":"Hello"}"#)));
    }

    #[gtest]
    #[rstest]
    fn deserialize_null_is_empty() {
        let text = LocalizedText::from_json("null").unwrap();

        expect_that!(text.is_empty(), eq(true));
        expect_that!(text.has_value(), eq(false));
    }

    #[gtest]
    #[rstest]
    fn deserialize_object_with_null_values() {
        let text = LocalizedText::from_json(r#"{"en":"Hello","fr":null}"#).unwrap();

        expect_that!(text.len(), eq(2));
        expect_that!(text.text(&locale("fr")), none());
        expect_that!(text, eq(&container(&[("en", "Hello")])));
    }

    #[rstest]
    #[case::malformed(r#"{"en":"Hello""#)]
    #[case::bad_locale(r#"{"english":"Hello"}"#)]
    #[case::number_value(r#"{"en":1}"#)]
    #[case::array("[1,2]")]
    #[case::plain_text("Hello")]
    fn from_json_rejects(#[case] json: &str) {
        assert_that!(LocalizedText::from_json(json), err(anything()));
    }

    #[rstest]
    fn round_trip_preserves_equality() {
        let original = container(&[("en", "Hello"), ("fr", "Bonjour"), ("fa", "سلام")]);

        let json = original.to_json().unwrap();
        let decoded = LocalizedText::from_json(&json).unwrap();

        assert_that!(decoded, eq(&original));
    }

    #[gtest]
    #[rstest]
    fn nested_in_struct() {
        #[derive(Debug, Serialize, Deserialize)]
        struct Product {
            name: LocalizedText,
        }

        let product: Product =
            serde_json::from_value(json!({ "name": { "en": "Chair" } })).unwrap();
        let empty: Product = serde_json::from_value(json!({ "name": null })).unwrap();

        expect_that!(product.name.text(&locale("en")), some(eq("Chair")));
        expect_that!(empty.name.has_value(), eq(false));
        expect_that!(
            serde_json::to_value(&empty).unwrap(),
            eq(&json!({ "name": null }))
        );
    }

    #[gtest]
    #[rstest]
    #[case::plain("Hello there", "Hello there")]
    #[case::malformed_json("{\"en\":", "{\"en\":")]
    #[case::json_null("null", "null")]
    #[case::json_without_value(r#"{"fr":""}"#, r#"{"fr":""}"#)]
    #[case::json_string(r#""quoted""#, r#""quoted""#)]
    fn parse_lenient_falls_back_to_literal(#[case] token: &str, #[case] expected: &str) {
        let current = locale("en");

        let text = LocalizedText::parse_lenient(token, &current);

        expect_that!(text.len(), eq(1));
        expect_that!(text.text(&current), some(eq(expected)));
    }

    #[gtest]
    #[rstest]
    fn parse_lenient_accepts_payload() {
        let text = LocalizedText::parse_lenient(r#"{"fr":"Bonjour","de":"Hallo"}"#, &locale("en"));

        expect_that!(text, eq(&container(&[("fr", "Bonjour"), ("de", "Hallo")])));
        expect_that!(text.text(&locale("en")), none());
    }

    #[rstest]
    fn parse_lenient_empty_token_has_no_value() {
        let text = LocalizedText::parse_lenient("", &locale("en"));

        assert_that!(text.has_value(), eq(false));
    }

    #[gtest]
    #[rstest]
    fn serialized_comparer_ignores_order_and_empty_locales() {
        let current = locale("en");
        let left = r#"{"en":"Hello","fr":"Bonjour"}"#;
        let right = r#"{"fr":"Bonjour","en":"Hello","de":""}"#;

        expect_that!(serialized_eq(left, right, &current), eq(true));
        expect_that!(serialized_hash(left, &current), eq(serialized_hash(right, &current)));
        expect_that!(serialized_eq(left, r#"{"en":"Hi"}"#, &current), eq(false));
    }

    #[rstest]
    fn serialized_comparer_treats_free_text_as_current_locale() {
        let current = locale("en");

        assert_that!(serialized_eq("Hello", r#"{"en":"Hello"}"#, &current), eq(true));
    }
}
