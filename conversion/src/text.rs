//! Booleans, enums and identifier casing.
//!
//! Editor booleans (`"true"`/`"false"`) and storyboard booleans (`"YES"`/`"NO"`)
//! are separate vocabularies for separate documents and are never mixed.

use crate::FormatError;

pub fn format_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// `"true"` in any letter case is `true`; everything else is `false`.
pub fn parse_bool(text: &str) -> bool {
    text.eq_ignore_ascii_case("true")
}

pub fn format_storyboard_bool(value: bool) -> &'static str {
    if value {
        "YES"
    } else {
        "NO"
    }
}

pub fn format_optional_storyboard_bool(value: Option<bool>) -> Option<&'static str> {
    value.map(format_storyboard_bool)
}

/// Only the exact text `"YES"` is `true`.
pub fn parse_storyboard_bool(text: &str) -> bool {
    text == "YES"
}

/// Converts a strict editor boolean into the storyboard vocabulary.
///
/// Unlike [`parse_bool`], anything other than `true`/`false` (any case,
/// surrounding whitespace ignored) is an error.
pub fn storyboard_bool_from_editor(text: &str) -> Result<&'static str, FormatError> {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(format_storyboard_bool(true))
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(format_storyboard_bool(false))
    } else {
        Err(FormatError::InvalidBool(text.to_string()))
    }
}

/// An enum whose variants can be named in editor text.
pub trait EditorEnum: Copy + PartialEq + 'static {
    /// Name used in error messages.
    const KIND: &'static str;
    const VARIANTS: &'static [(&'static str, Self)];
}

/// Case-insensitive lookup of a variant by name.
pub fn parse_enum<T: EditorEnum>(text: &str) -> Result<T, FormatError> {
    let trimmed = text.trim();
    T::VARIANTS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
        .map(|(_, variant)| *variant)
        .ok_or_else(|| FormatError::UnknownVariant {
            kind: T::KIND,
            value: text.to_string(),
        })
}

pub fn enum_name<T: EditorEnum>(value: T) -> Option<&'static str> {
    T::VARIANTS
        .iter()
        .find(|(_, variant)| *variant == value)
        .map(|(name, _)| *name)
}

/// Parses a set of combinable variants written as `"Top, Left"`.
///
/// Names are separated by `,` or `|`; empty text is the empty set. The result
/// follows the order of [`EditorEnum::VARIANTS`] and holds each variant once.
pub fn parse_enum_flags<T: EditorEnum>(text: &str) -> Result<Vec<T>, FormatError> {
    let mut checked = Vec::new();
    for name in text.split([',', '|']).map(str::trim).filter(|name| !name.is_empty()) {
        checked.push(parse_enum::<T>(name)?);
    }
    Ok(T::VARIANTS
        .iter()
        .map(|(_, variant)| *variant)
        .filter(|variant| checked.contains(variant))
        .collect())
}

/// Joins the names of the given variants with `", "`, in table order.
pub fn format_enum_flags<T: EditorEnum>(values: &[T]) -> String {
    T::VARIANTS
        .iter()
        .filter(|(_, variant)| values.contains(variant))
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Lower-cases the first character (`"Name"` -> `"name"`).
pub fn to_camel_case(value: &str) -> String {
    map_first_char(value, |c| c.to_lowercase().collect())
}

/// Upper-cases the first character (`"name"` -> `"Name"`).
pub fn to_pascal_case(value: &str) -> String {
    map_first_char(value, |c| c.to_uppercase().collect())
}

fn map_first_char(value: &str, map: impl FnOnce(char) -> String) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => map(first) + chars.as_str(),
        None => String::new(),
    }
}

/// Turns a camel or Pascal cased identifier into words.
///
/// A space goes before every interior capital except one surrounded by
/// capitals on both sides, so acronyms stay together until their last letter
/// starts a new word. The first letter is capitalized.
///
/// # Examples
/// ```rust
/// use conversion::to_human_readable;
/// assert_eq!(to_human_readable("IsEnabled"), "Is Enabled");
/// assert_eq!(to_human_readable("RGBValue"), "RGB Value");
/// assert_eq!(to_human_readable("backgroundColor"), "Background Color");
/// ```
pub fn to_human_readable(identifier: &str) -> String {
    let chars: Vec<char> = identifier.chars().collect();
    let Some(first) = chars.first() else {
        return String::new();
    };
    let mut out = String::with_capacity(identifier.len() + 10);
    out.extend(first.to_uppercase());
    for i in 1..chars.len() {
        let ch = chars[i];
        let is_last = i == chars.len() - 1;
        if ch.is_uppercase()
            && !is_last
            && (!chars[i - 1].is_uppercase() || !chars[i + 1].is_uppercase())
        {
            out.push(' ');
        }
        out.push(ch);
    }
    out.trim().to_string()
}
