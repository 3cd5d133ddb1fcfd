//! Naming-convention conversion: humanized text, camelCase and kebab-case.

use std::sync::LazyLock;

use regex::Regex;
use serde::{
    Deserialize,
    Serialize,
};

use crate::locale::LocaleId;

/// Punctuation that always ends a word inside a joined identifier.
const ESCAPED_CHARS: &str = r"!@#$%^&*()_+?><';/.,\|`~=-";

/// Anything that is not a word character, hyphen, dot or space.
#[allow(clippy::expect_used)]
static UNESCAPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\-. ]").expect("literal pattern"));

/// Flags for [`humanize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HumanizeOptions {
    /// Keep the words joined instead of separating them with spaces
    pub ignore_space: bool,
    /// Re-case every word as `Title` even when it already has capitals
    pub force_title_case: bool,
}

/// Turns an identifier or loosely cased phrase into spaced, naturally cased words.
///
/// Right-to-left locales have no letter case, so their text is returned as is.
///
/// # Examples
/// ```
/// use localized_text::{humanize, HumanizeOptions, LocaleId};
///
/// let en = LocaleId::parse("en").unwrap();
/// assert_eq!(humanize("ThisIsFake", &en, HumanizeOptions::default()), "This Is Fake");
/// assert_eq!(humanize("hello world", &en, HumanizeOptions::default()), "Hello World");
/// ```
#[must_use]
pub fn humanize(s: &str, locale: &LocaleId, options: HumanizeOptions) -> String {
    if s.is_empty() || locale.is_right_to_left() {
        return s.to_string();
    }

    let words: Vec<&str> = s.split(' ').filter(|word| !word.is_empty()).collect();
    let result = match words.as_slice() {
        [word] => humanize_word(word, options),
        _ => humanize_words(&words, options),
    };

    result.trim().to_string()
}

/// A single word: title-case it if it is all lower-case, otherwise split it
/// at case transitions.
fn humanize_word(word: &str, options: HumanizeOptions) -> String {
    if options.ignore_space || word.chars().nth(1).is_none() {
        return word.to_string();
    }

    if word == word.to_lowercase() {
        return title_case(word);
    }

    split_identifier(word)
}

/// Several words: re-case each one and join them.
fn humanize_words(words: &[&str], options: HumanizeOptions) -> String {
    let cased = words.iter().map(|word| {
        if options.force_title_case {
            capitalize(word)
        } else if *word == word.to_lowercase() {
            title_case(word)
        } else {
            (*word).to_string()
        }
    });

    let separator = if options.ignore_space { "" } else { " " };
    cased.collect::<Vec<_>>().join(separator)
}

/// Digits and [`ESCAPED_CHARS`] become their own token.
fn is_separator(c: char) -> bool {
    c.is_numeric() || ESCAPED_CHARS.contains(c)
}

/// Scans a joined identifier left to right.
///
/// A letter run continues until the case flips relative to its second
/// character (`This|Is`, `IELTS|&`), or a separator appears. Separators are
/// emitted alone. Characters without case behave like lower-case letters.
fn split_identifier(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut result = String::with_capacity(word.len() * 2);
    let mut start = 0;

    while let Some(&current) = chars.get(start) {
        if is_separator(current) {
            result.push(current);
            result.push(' ');
            start += 1;
            continue;
        }

        let Some(&next) = chars.get(start + 1) else {
            result.push(current);
            break;
        };

        let upper_run = next.is_uppercase();
        let ends_run = |c: char| {
            is_separator(c) || if upper_run { c.is_lowercase() } else { c.is_uppercase() }
        };
        let end = chars
            .iter()
            .enumerate()
            .skip(start + 1)
            .find_map(|(index, &c)| ends_run(c).then_some(index))
            .unwrap_or(chars.len());

        result.extend(chars.iter().take(end).skip(start));
        result.push(' ');
        start = end;
    }

    result
}

/// Upper-cases the first letter of every word; word starts follow any
/// character other than a letter, digit or apostrophe.
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start && c.is_alphabetic() {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '\'');
    }
    result
}

/// `wORLD` -> `World`
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// `Hello World` -> `helloWorld`
#[must_use]
pub fn to_camel_case(s: &str, locale: &LocaleId) -> String {
    let humanized = humanize(s, locale, HumanizeOptions::default());
    let mut chars = humanized.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    first.to_lowercase().chain(chars).filter(|c| *c != ' ').collect()
}

/// `Hello World` -> `hello-world`
#[must_use]
pub fn to_kebab_case(s: &str, locale: &LocaleId) -> String {
    humanize(s, locale, HumanizeOptions::default()).to_lowercase().replace(' ', "-")
}

/// `hello-world` -> `hello world`; letter case is left alone.
#[must_use]
pub fn from_kebab_case(s: &str) -> String {
    s.replace('-', " ")
}

/// Strips everything except word characters, digits, `-`, `.` and spaces.
/// With `ignore_space`, spaces go too.
#[must_use]
pub fn to_unescaped(s: &str, ignore_space: bool) -> String {
    let stripped = UNESCAPED.replace_all(s, "");
    if ignore_space { stripped.replace(' ', "") } else { stripped.into_owned() }
}
