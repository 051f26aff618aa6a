//! Locale-invariant conversion between editor text and numeric or structured values.
//!
//! Every function in this crate uses the invariant number format: `.` as the
//! decimal point and no grouping separators, independent of the host locale.
//!
//! - `number`: scalar parsing and formatting, ratios, precision
//! - `compound`: point, size and rectangle literals
//! - `text`: booleans, enums and identifier casing
//! - `version`: dotted version strings

pub mod compound;
pub mod number;
pub mod text;
pub mod version;

pub use compound::{
    format_compound, parse_compound, parse_compound_parts, CompoundLiteral, Point, Rect, Size,
};
pub use number::{
    digits_of_precision, format_double, format_float, format_int, parse_double,
    parse_editor_double, parse_editor_float, parse_ratio, split_ratio, try_parse_double,
    try_parse_float,
};
pub use text::{
    enum_name, format_bool, format_enum_flags, format_optional_storyboard_bool,
    format_storyboard_bool, parse_bool, parse_enum, parse_enum_flags, parse_storyboard_bool,
    storyboard_bool_from_editor, to_camel_case, to_human_readable, to_pascal_case, EditorEnum,
};
pub use version::{parse_version, Version};

/// Text did not conform to the grammar expected by a strict entry point.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("the value '{0}' could not be parsed as a number")]
    InvalidNumber(String),
    #[error("the value '{0}' is not a valid ratio")]
    InvalidRatio(String),
    #[error("the value '{value}' was not a {kind}: expected {expected} fields, found {found}")]
    FieldCount {
        kind: &'static str,
        value: String,
        expected: usize,
        found: usize,
    },
    #[error("the value '{0}' is not a valid version")]
    InvalidVersion(String),
    #[error("'{value}' is not a variant of {kind}")]
    UnknownVariant { kind: &'static str, value: String },
    #[error("the value '{0}' is not a boolean")]
    InvalidBool(String),
}
