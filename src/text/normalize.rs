//! Persian text clean-up.
//!
//! Keyboard layouts and copy-pasted Arabic text leave artifacts in Persian
//! input: Arabic code points for look-alike letters, plain spaces where a
//! zero-width non-joiner (ZWNJ) belongs, and repeated punctuation.
//! [`fix_unicode`] runs every pass in a fixed order; later passes rely on the
//! output shape of earlier ones.

use std::sync::LazyLock;

use regex::Regex;

/// Zero-width non-joiner.
pub const ZWNJ: char = '\u{200C}';

/// Arabic letter Kaf.
const ARABIC_KAF: char = '\u{0643}';
/// Persian look-alike of Kaf.
const PERSIAN_KEHEH: char = '\u{06A9}';
/// Arabic letter Yeh.
const ARABIC_YEH: char = '\u{064A}';
/// Persian look-alike of Yeh (Farsi Yeh).
const PERSIAN_YEH: char = '\u{06CC}';

/// Prefixes `می` and `نمی` standing apart from their verb.
#[allow(clippy::expect_used)]
static PREFIX_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+(ن?می)\s+").expect("literal pattern"));

/// Suffixes `تر`, `تری`, `ترین`, `ها`, `های` standing apart from their word.
#[allow(clippy::expect_used)]
static SUFFIX_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+(تر(ی(ن)?)?|ها(ی)?)\s+").expect("literal pattern"));

/// `ه ی` written with a space (or stray ZWNJ) between the two letters.
#[allow(clippy::expect_used)]
static HEH_YEH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(\\S)(ه[\\s\u{200C}]+[یي])(\\s)").expect("literal pattern"));

/// ZWNJ touching whitespace on either side.
#[allow(clippy::expect_used)]
static ZWNJ_BESIDE_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\\s+\u{200C}|\u{200C}\\s+").expect("literal pattern"));

/// Runs of `!`.
#[allow(clippy::expect_used)]
static REPEATED_EXCLAMATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(!){2,}").expect("literal pattern"));

/// Runs of the Arabic question mark.
#[allow(clippy::expect_used)]
static REPEATED_QUESTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(؟){2,}").expect("literal pattern"));

/// Applies every clean-up pass.
///
/// # Examples
/// ```
/// use localized_text::fix_unicode;
///
/// assert_eq!(fix_unicode("كتاب"), "کتاب");
/// assert_eq!(fix_unicode("عالی!!!"), "عالی!");
/// ```
#[must_use]
pub fn fix_unicode(s: &str) -> String {
    let text = apply_persian_yeh_keheh(s);
    let text = apply_half_space_rule(&text);
    let text = fix_heh_yeh_half_space(&text);
    let text = cleanup_zwnj(&text);
    let text = fix_extra_marks(&text);
    let text = fix_digits(&text);
    let text = fix_extra_marks(&text);
    apply_persian_yeh_keheh(&text)
}

/// Replaces Arabic Kaf and Yeh with their Persian forms and trims.
#[must_use]
pub fn apply_persian_yeh_keheh(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            ARABIC_YEH => PERSIAN_YEH,
            ARABIC_KAF => PERSIAN_KEHEH,
            other => other,
        })
        .collect()
}

/// Joins `می`/`نمی` to the following word and `تر`/`ها`-style suffixes to
/// the preceding word with a ZWNJ.
#[must_use]
pub fn apply_half_space_rule(s: &str) -> String {
    let prefixed = PREFIX_SPACE.replace_all(s, format!(" ${{1}}{ZWNJ}"));
    SUFFIX_SPACE.replace_all(&prefixed, format!("{ZWNJ}${{1}} ")).into_owned()
}

/// Writes the compound `ه ی` boundary as `ه‌ی‌`.
#[must_use]
pub fn fix_heh_yeh_half_space(s: &str) -> String {
    HEH_YEH.replace_all(s, format!("${{1}}ه{ZWNJ}ی{ZWNJ}${{3}}")).into_owned()
}

/// Collapses a ZWNJ that sits next to whitespace into a single space.
#[must_use]
pub fn cleanup_zwnj(s: &str) -> String {
    ZWNJ_BESIDE_SPACE.replace_all(s, " ").into_owned()
}

/// Collapses repeated `!` and `؟` to one.
#[must_use]
pub fn fix_extra_marks(s: &str) -> String {
    let exclamation = REPEATED_EXCLAMATION.replace_all(s, "$1");
    REPEATED_QUESTION.replace_all(&exclamation, "$1").into_owned()
}

/// Rewrites Arabic-Indic digits (`٠`–`٩`) as Persian digits (`۰`–`۹`).
#[must_use]
pub fn fix_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{0660}'..='\u{0669}' => {
                char::from_u32(u32::from(c) - 0x0660 + 0x06F0).unwrap_or(c)
            }
            other => other,
        })
        .collect()
}
