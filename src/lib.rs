//! localized-text
//!
//! A per-locale text value with fallback lookup and a compact JSON form,
//! plus the string helpers that usually travel with it: humanizing
//! identifiers, naming-convention conversion and Persian script clean-up.

pub mod config;
pub mod error;
pub mod locale;
pub mod localized;
pub mod text;

/// Unit test fixtures
mod test_utils;

pub use error::TextError;
pub use locale::LocaleId;
pub use localized::{
    GetOptions,
    LocalizedText,
    ValueType,
    classify,
};
pub use text::{
    HumanizeOptions,
    fix_unicode,
    humanize,
    index_of_nth,
};
