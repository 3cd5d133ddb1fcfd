//! Small search and replace helpers.

use crate::error::TextError;

/// Finds the `nth` occurrence of `value`, counted in chars.
///
/// A positive `nth` searches forward from `start` (default: the beginning), a
/// negative one searches backward from `start` (default: the last char).
///
/// # Examples
/// ```
/// use localized_text::index_of_nth;
///
/// assert_eq!(index_of_nth("a.b.c.d", '.', 2, None).unwrap(), Some(3));
/// assert_eq!(index_of_nth("a.b.c.d", '.', -1, None).unwrap(), Some(5));
/// ```
///
/// # Errors
/// - [`TextError::ZeroDirection`] when `nth` is zero
/// - [`TextError::OutOfRange`] when `start` lies outside the string
pub fn index_of_nth(
    s: &str,
    value: char,
    nth: isize,
    start: Option<usize>,
) -> Result<Option<usize>, TextError> {
    if nth == 0 {
        return Err(TextError::ZeroDirection);
    }

    let chars: Vec<char> = s.chars().collect();
    let len = chars.len();
    let skip = nth.unsigned_abs() - 1;
    let matches = |(_, c): &(usize, &char)| **c == value;

    let found = if nth > 0 {
        let from = start.unwrap_or(0);
        if from > len {
            return Err(TextError::OutOfRange { index: from, len });
        }
        chars.iter().enumerate().skip(from).filter(matches).nth(skip)
    } else {
        let from = match start {
            Some(index) if index >= len => return Err(TextError::OutOfRange { index, len }),
            Some(index) => index,
            None if len == 0 => return Ok(None),
            None => len - 1,
        };
        chars.iter().enumerate().take(from + 1).rev().filter(matches).nth(skip)
    };

    Ok(found.map(|(index, _)| index))
}

/// The trimmed text between the first `start` and the next `end` after it.
///
/// Without `start` the result is empty; without a closing `end` it runs to
/// the end of the string.
#[must_use]
pub fn string_between(s: &str, start: char, end: char) -> String {
    s.split_once(start)
        .map_or("", |(_, after)| after.split(end).next().unwrap_or_default())
        .trim()
        .to_string()
}

/// Replaces `\r\n`, `\n` and `\r` with `replacement`.
#[must_use]
pub fn replace_line_breaks(s: &str, replacement: &str) -> String {
    s.replace("\r\n", replacement).replace('\n', replacement).replace('\r', replacement)
}

/// Replaces every occurrence of each of `old_values`, in order, with `new_value`.
/// Empty needles are ignored.
#[must_use]
pub fn replace_any(s: &str, new_value: &str, old_values: &[&str]) -> String {
    old_values
        .iter()
        .filter(|old| !old.is_empty())
        .fold(s.to_string(), |text, old| text.replace(old, new_value))
}
