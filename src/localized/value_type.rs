//! Classification of a localized value's content.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Short opening or closing tag such as `<b>` or `</h1>`.
#[allow(clippy::expect_used)]
static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(<[\w\d]{1,2}>)|(</[\w\d]{1,2}>)").expect("literal pattern")
});

/// Brace placeholder such as `{0}` or `{id}`.
#[allow(clippy::expect_used)]
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[\w\d]{1,2}\}").expect("literal pattern"));

/// The kind of content a localized value holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueType {
    /// Contains markup tags
    Html,
    /// Contains `{x}` placeholders for formatting arguments
    FormattableText,
    /// Plain text
    Text,
    /// Nothing to classify
    #[default]
    Unknown,
}

/// Classifies a single text value.
///
/// Entities are decoded first, so `&lt;b&gt;` counts as markup. The tag check
/// runs before the placeholder check.
///
/// # Examples
/// ```
/// use localized_text::{classify, ValueType};
///
/// assert_eq!(classify("<b>bold</b>"), ValueType::Html);
/// assert_eq!(classify("Hello {0}"), ValueType::FormattableText);
/// assert_eq!(classify("Hello"), ValueType::Text);
/// assert_eq!(classify(""), ValueType::Unknown);
/// ```
#[must_use]
pub fn classify(text: &str) -> ValueType {
    if text.is_empty() {
        return ValueType::Unknown;
    }

    let decoded = decode_html_entities(text);
    if HTML_TAG.is_match(&decoded) {
        ValueType::Html
    } else if PLACEHOLDER.is_match(&decoded) {
        ValueType::FormattableText
    } else {
        ValueType::Text
    }
}

/// Decodes named and numeric character references.
///
/// Unknown or malformed references are kept verbatim.
pub(crate) fn decode_html_entities(value: &str) -> Cow<'_, str> {
    if !value.contains('&') {
        return Cow::Borrowed(value);
    }

    let mut result = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(amp) = rest.find('&') {
        let (before, after) = rest.split_at(amp);
        result.push_str(before);
        let tail = after.strip_prefix('&').unwrap_or(after);

        let decoded = tail
            .split_once(';')
            .and_then(|(name, remainder)| decode_entity(name).map(|ch| (ch, remainder)));
        if let Some((ch, remainder)) = decoded {
            result.push(ch);
            rest = remainder;
        } else {
            result.push('&');
            rest = tail;
        }
    }
    result.push_str(rest);

    Cow::Owned(result)
}

/// Resolves the text between `&` and `;`.
fn decode_entity(name: &str) -> Option<char> {
    if let Some(number) = name.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }

    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => None,
    }
}
