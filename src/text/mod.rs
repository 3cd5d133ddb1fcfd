//! Pure string transforms.
/// Naming-convention conversion and humanizing
mod case;
/// Persian script clean-up passes
mod normalize;
/// Search and replace helpers
mod search;

pub use case::{
    HumanizeOptions,
    from_kebab_case,
    humanize,
    to_camel_case,
    to_kebab_case,
    to_unescaped,
};
pub use normalize::{
    ZWNJ,
    apply_half_space_rule,
    apply_persian_yeh_keheh,
    cleanup_zwnj,
    fix_digits,
    fix_extra_marks,
    fix_heh_yeh_half_space,
    fix_unicode,
};
pub use search::{
    index_of_nth,
    replace_any,
    replace_line_breaks,
    string_between,
};
