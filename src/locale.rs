//! Locale identifiers.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{
    Deserialize,
    Serialize,
};

use crate::error::TextError;

/// Primary language subtags of the RFC 5646 codes in common use.
/// Based on <http://tools.ietf.org/html/rfc5646>
static LANGUAGE_CODES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "af", "ar", "az", "be", "bg", "bs", "ca", "cs", "cy", "da", "de", "dv", "el", "en", "eo",
        "es", "et", "eu", "fa", "fi", "fo", "fr", "gl", "gu", "he", "hi", "hr", "hu", "hy", "id",
        "is", "it", "ja", "ka", "kk", "kn", "ko", "kok", "ky", "lt", "lv", "mi", "mk", "mn", "mr",
        "ms", "mt", "nb", "nl", "nn", "ns", "pa", "pl", "ps", "pt", "qu", "ro", "ru", "sa", "se",
        "sk", "sl", "sq", "sr", "sv", "sw", "syr", "ta", "te", "th", "tl", "tn", "tr", "ts", "tt",
        "uk", "ur", "uz", "vi", "xh", "zh", "zu",
    ]
    .into_iter()
    .collect()
});

/// Languages written right to left. Casing rules do not apply to them.
static RIGHT_TO_LEFT_LANGUAGES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["ar", "ckb", "dv", "fa", "he", "ps", "sd", "syr", "ug", "ur", "yi"].into_iter().collect()
});

/// A canonical language/region identifier such as `en` or `fr-FR`.
///
/// Parsing accepts `-` or `_` as the separator and any letter case; the stored
/// form is canonical (`language[-Script][-REGION][-variant]`), so equality and
/// hashing compare canonical codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocaleId(String);

impl LocaleId {
    /// Parses and canonicalizes a locale code.
    ///
    /// # Examples
    /// ```
    /// use localized_text::LocaleId;
    ///
    /// let locale = LocaleId::parse("fr_fr").unwrap();
    /// assert_eq!(locale.as_str(), "fr-FR");
    /// assert_eq!(locale.language(), "fr");
    /// ```
    ///
    /// # Errors
    /// Returns [`TextError::InvalidLocale`] for empty codes or malformed subtags.
    pub fn parse(code: &str) -> Result<Self, TextError> {
        let invalid = || TextError::InvalidLocale(code.to_string());
        let mut subtags = code.trim().split(['-', '_']);

        let language = subtags.next().filter(|s| is_language_subtag(s)).ok_or_else(invalid)?;
        let mut canonical = language.to_ascii_lowercase();

        // Script must precede region, region must precede variants.
        let mut stage = 0;
        for subtag in subtags {
            let (next_stage, normalized) = if stage < 1 && is_script_subtag(subtag) {
                (1, title_case_ascii(subtag))
            } else if stage < 2 && is_region_subtag(subtag) {
                (2, subtag.to_ascii_uppercase())
            } else if is_variant_subtag(subtag) {
                (3, subtag.to_ascii_lowercase())
            } else {
                return Err(invalid());
            };
            stage = next_stage;
            canonical.push('-');
            canonical.push_str(&normalized);
        }

        Ok(Self(canonical))
    }

    /// The canonical code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag, e.g. `en` for `en-US`.
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// The region subtag, if any.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.0.split('-').skip(1).find(|s| is_region_subtag(s))
    }

    /// Whether the language is written right to left.
    #[must_use]
    pub fn is_right_to_left(&self) -> bool {
        RIGHT_TO_LEFT_LANGUAGES.contains(self.language())
    }

    /// Whether the language is in the bundled table of common codes.
    ///
    /// Well-formed codes outside the table are still valid locales.
    #[must_use]
    pub fn is_known(&self) -> bool {
        LANGUAGE_CODES.contains(self.language())
    }
}

/// Two or three ASCII letters.
fn is_language_subtag(s: &str) -> bool {
    (2..=3).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Four ASCII letters, e.g. `Cyrl`.
fn is_script_subtag(s: &str) -> bool {
    s.len() == 4 && s.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Two ASCII letters or three digits, e.g. `US` or `419`.
fn is_region_subtag(s: &str) -> bool {
    (s.len() == 2 && s.bytes().all(|b| b.is_ascii_alphabetic()))
        || (s.len() == 3 && s.bytes().all(|b| b.is_ascii_digit()))
}

/// Five to eight alphanumerics, or four starting with a digit (`1996`).
fn is_variant_subtag(s: &str) -> bool {
    let alphanumeric = s.bytes().all(|b| b.is_ascii_alphanumeric());
    let digit_led = s.bytes().next().is_some_and(|b| b.is_ascii_digit());
    alphanumeric && ((5..=8).contains(&s.len()) || (s.len() == 4 && digit_led))
}

/// `cYRL` -> `Cyrl`
fn title_case_ascii(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
    })
}

/// English (`en`).
impl Default for LocaleId {
    fn default() -> Self {
        Self(String::from("en"))
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LocaleId {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LocaleId {
    type Error = TextError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LocaleId> for String {
    fn from(locale: LocaleId) -> Self {
        locale.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("en", "en")]
    #[case("EN", "en")]
    #[case("fr-FR", "fr-FR")]
    #[case("fr_fr", "fr-FR")]
    #[case(" de-at ", "de-AT")]
    #[case("az-cyrl-az", "az-Cyrl-AZ")]
    #[case("es-419", "es-419")]
    #[case("kok-IN", "kok-IN")]
    #[case("de-DE-1996", "de-DE-1996")]
    fn parse_canonicalizes(#[case] input: &str, #[case] expected: &str) {
        assert_that!(LocaleId::parse(input).unwrap().as_str(), eq(expected));
    }

    #[rstest]
    #[case("")]
    #[case("e")]
    #[case("english")]
    #[case("en-")]
    #[case("en-US-Latn")]
    #[case("en--US")]
    #[case("e1")]
    #[case("en-U")]
    fn parse_rejects_malformed(#[case] input: &str) {
        assert_that!(LocaleId::parse(input), err(anything()));
    }

    #[rstest]
    fn separators_compare_equal() {
        assert_that!(LocaleId::parse("fr_FR").unwrap(), eq(&LocaleId::parse("FR-fr").unwrap()));
    }

    #[gtest]
    #[rstest]
    #[case("en-US", "en", Some("US"))]
    #[case("az-Cyrl-AZ", "az", Some("AZ"))]
    #[case("fa", "fa", None)]
    fn language_and_region(
        #[case] input: &str,
        #[case] language: &str,
        #[case] region: Option<&str>,
    ) {
        let locale = LocaleId::parse(input).unwrap();

        expect_that!(locale.language(), eq(language));
        expect_that!(locale.region(), eq(region));
    }

    #[rstest]
    #[case("fa-IR", true)]
    #[case("ar", true)]
    #[case("he-IL", true)]
    #[case("en-US", false)]
    #[case("tr", false)]
    fn right_to_left(#[case] input: &str, #[case] expected: bool) {
        assert_that!(LocaleId::parse(input).unwrap().is_right_to_left(), eq(expected));
    }

    #[gtest]
    #[rstest]
    fn unknown_but_well_formed_is_accepted() {
        let locale = LocaleId::parse("xx-YY").unwrap();

        expect_that!(locale.is_known(), eq(false));
        expect_that!(LocaleId::parse("ja-JP").unwrap().is_known(), eq(true));
    }

    #[gtest]
    #[rstest]
    fn serde_uses_canonical_string() {
        let locale: LocaleId = serde_json::from_str(r#""pt_br""#).unwrap();

        expect_that!(locale.as_str(), eq("pt-BR"));
        expect_that!(serde_json::to_string(&locale).unwrap(), eq(r#""pt-BR""#));
        expect_that!(serde_json::from_str::<LocaleId>(r#""not a locale""#), err(anything()));
    }
}
