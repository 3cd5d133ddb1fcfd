//! Multi-locale text values.
/// The container and its entries
mod container;
/// Lookup options and fallback selection
mod fallback;
/// JSON wire form and lenient decoding
mod serialize;
/// Content classification
mod value_type;

pub use container::{
    LocaleEntry,
    LocalizedText,
    Rendered,
};
pub use fallback::{
    GetOptions,
    PLACEHOLDER,
};
pub use serialize::{
    serialized_eq,
    serialized_hash,
};
pub use value_type::{
    ValueType,
    classify,
};
