//! Lookup options and fallback resolution.

use rand::Rng;
use rand::seq::IndexedRandom;

use super::container::LocaleEntry;
use crate::locale::LocaleId;

/// Returned in place of an empty value when the caller does not want `None`.
pub const PLACEHOLDER: &str = "N/A";

/// How [`LocalizedText::get`](super::LocalizedText::get) resolves a missing value.
///
/// The defaults mirror a plain lookup: fall back to other locales, and yield
/// `None` when nothing is found. Note the inverted flag: `return_none_if_empty
/// = false` is what produces [`PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetOptions {
    /// Look at other locales when the requested one is empty
    pub use_fallback: bool,
    /// `true` yields `None` for an empty result, `false` yields [`PLACEHOLDER`]
    pub return_none_if_empty: bool,
    /// Fall back to this locale only, instead of choosing among the others
    pub fallback_locale: Option<LocaleId>,
}

impl Default for GetOptions {
    fn default() -> Self {
        Self { use_fallback: true, return_none_if_empty: true, fallback_locale: None }
    }
}

impl GetOptions {
    /// Only the requested locale is consulted.
    #[must_use]
    pub const fn without_fallback(mut self) -> Self {
        self.use_fallback = false;
        self
    }

    /// Empty results become [`PLACEHOLDER`] instead of `None`.
    #[must_use]
    pub const fn with_placeholder(mut self) -> Self {
        self.return_none_if_empty = false;
        self
    }

    /// Falls back to `locale` rather than a random other locale.
    #[must_use]
    pub fn fallback_to(mut self, locale: LocaleId) -> Self {
        self.fallback_locale = Some(locale);
        self
    }
}

/// The value reported when nothing usable was found.
pub(crate) const fn empty_result(return_none_if_empty: bool) -> Option<&'static str> {
    if return_none_if_empty { None } else { Some(PLACEHOLDER) }
}

/// Resolves a value from the fallback set (every entry except the requested one).
///
/// With several non-empty candidates the choice is uniform over `rng`.
pub(crate) fn resolve<'a, I, R>(fallback_set: I, options: &GetOptions, rng: &mut R) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a LocaleEntry>,
    R: Rng + ?Sized,
{
    if let Some(preferred) = &options.fallback_locale {
        return resolve_preferred(fallback_set, preferred, options.return_none_if_empty);
    }

    let candidates: Vec<&str> =
        fallback_set.into_iter().filter_map(LocaleEntry::non_empty_text).collect();
    match candidates.as_slice() {
        [] => empty_result(options.return_none_if_empty),
        [only] => Some(*only),
        many => many.choose(rng).copied(),
    }
}

/// Reads the preferred fallback locale's value.
///
/// Callers are expected to name a locale that is present and distinct from the
/// requested one; otherwise the empty policy applies.
fn resolve_preferred<'a, I>(
    fallback_set: I,
    preferred: &LocaleId,
    return_none_if_empty: bool,
) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a LocaleEntry>,
{
    let Some(entry) = fallback_set.into_iter().find(|entry| entry.locale() == preferred) else {
        tracing::warn!("Fallback locale {preferred} is not among the stored locales");
        return empty_result(return_none_if_empty);
    };

    entry.non_empty_text().or_else(|| empty_result(return_none_if_empty))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rstest::rstest;

    use super::*;
    use crate::test_utils::{
        entries,
        locale,
    };

    #[gtest]
    #[rstest]
    fn default_options() {
        let options = GetOptions::default();

        expect_that!(options.use_fallback, eq(true));
        expect_that!(options.return_none_if_empty, eq(true));
        expect_that!(options.fallback_locale, none());
    }

    #[gtest]
    #[rstest]
    fn builder_methods_compose() {
        let options = GetOptions::default().without_fallback().with_placeholder();

        expect_that!(options.use_fallback, eq(false));
        expect_that!(options.return_none_if_empty, eq(false));
        expect_that!(
            GetOptions::default().fallback_to(locale("fr")).fallback_locale,
            some(eq(&locale("fr")))
        );
    }

    #[rstest]
    #[case(true, None)]
    #[case(false, Some("N/A"))]
    fn empty_result_policy(#[case] return_none: bool, #[case] expected: Option<&str>) {
        assert_that!(empty_result(return_none), eq(expected));
    }

    #[rstest]
    fn single_candidate_is_returned() {
        let set = entries(&[("fr", "bonjour"), ("de", "")]);
        let mut rng = SmallRng::seed_from_u64(1);

        let result = resolve(&set, &GetOptions::default(), &mut rng);

        assert_that!(result, some(eq("bonjour")));
    }

    #[rstest]
    #[case(true, None)]
    #[case(false, Some("N/A"))]
    fn no_candidates(#[case] return_none: bool, #[case] expected: Option<&str>) {
        let set = entries(&[("fr", ""), ("de", "")]);
        let options = GetOptions { return_none_if_empty: return_none, ..GetOptions::default() };
        let mut rng = SmallRng::seed_from_u64(1);

        assert_that!(resolve(&set, &options, &mut rng), eq(expected));
    }

    #[rstest]
    fn random_choice_covers_every_candidate() {
        let set = entries(&[("fr", "bonjour"), ("de", "hallo"), ("es", "hola")]);
        let mut rng = SmallRng::seed_from_u64(7);

        let mut seen: Vec<&str> = (0..200)
            .filter_map(|_| resolve(&set, &GetOptions::default(), &mut rng))
            .collect();
        seen.sort_unstable();
        seen.dedup();

        assert_that!(seen, eq(&vec!["bonjour", "hallo", "hola"]));
    }

    #[gtest]
    #[rstest]
    fn same_seed_same_choice() {
        let set = entries(&[("fr", "bonjour"), ("de", "hallo")]);

        let first = resolve(&set, &GetOptions::default(), &mut SmallRng::seed_from_u64(42));
        let second = resolve(&set, &GetOptions::default(), &mut SmallRng::seed_from_u64(42));

        expect_that!(first, some(anything()));
        expect_that!(first, eq(second));
    }

    #[rstest]
    fn preferred_locale_is_used() {
        let set = entries(&[("fr", "bonjour"), ("de", "hallo")]);
        let options = GetOptions::default().fallback_to(locale("de"));
        let mut rng = SmallRng::seed_from_u64(3);

        assert_that!(resolve(&set, &options, &mut rng), some(eq("hallo")));
    }

    #[gtest]
    #[rstest]
    #[case::empty_value(&[("fr", "bonjour"), ("de", "")])]
    #[case::absent(&[("fr", "bonjour")])]
    fn preferred_locale_without_value_uses_policy(#[case] pairs: &[(&str, &str)]) {
        let set = entries(pairs);
        let mut rng = SmallRng::seed_from_u64(3);

        let raw = resolve(&set, &GetOptions::default().fallback_to(locale("de")), &mut rng);
        let placeholder = resolve(
            &set,
            &GetOptions::default().with_placeholder().fallback_to(locale("de")),
            &mut rng,
        );

        expect_that!(raw, none());
        expect_that!(placeholder, some(eq(PLACEHOLDER)));
    }
}
