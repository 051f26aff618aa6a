//! Scalar parsing and formatting in the invariant number format.

use crate::FormatError;

/// Parses a plain invariant number without allocating on failure.
///
/// Surrounding whitespace is ignored. Accepts an optional sign, digits with at
/// most one `.`, and an exponent (`"-3"`, `"3.5"`, `"+3.0"`, `".5"`, `"1e3"`).
/// Empty text and non-finite results (`"inf"`, `"NaN"`, overflow) yield `None`.
///
/// # Examples
/// ```rust
/// use conversion::try_parse_double;
/// assert_eq!(try_parse_double(" 3.5 "), Some(3.5));
/// assert_eq!(try_parse_double("3,5"), None);
/// assert_eq!(try_parse_double(""), None);
/// ```
pub fn try_parse_double(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Single precision variant of [`try_parse_double`].
pub fn try_parse_float(text: &str) -> Option<f32> {
    try_parse_double(text)
        .map(|value| value as f32)
        .filter(|value| value.is_finite())
}

/// Strict number parsing: empty or malformed text is a [`FormatError`].
pub fn parse_double(text: &str) -> Result<f64, FormatError> {
    try_parse_double(text).ok_or_else(|| FormatError::InvalidNumber(text.to_string()))
}

/// Permissive number parsing used when committing editor text.
///
/// Empty text is `0`. Text that is not a plain number is retried as a ratio
/// literal, so constraint multipliers such as `"9:5"` or `"9/5"` become `1.8`.
///
/// # Examples
/// ```rust
/// use conversion::parse_editor_double;
/// assert_eq!(parse_editor_double(""), Ok(0.0));
/// assert_eq!(parse_editor_double("9:5"), Ok(1.8));
/// assert!(parse_editor_double("abc").is_err());
/// ```
pub fn parse_editor_double(text: &str) -> Result<f64, FormatError> {
    if text.trim().is_empty() {
        return Ok(0.0);
    }
    if let Some(value) = try_parse_double(text) {
        return Ok(value);
    }
    if split_ratio(text).is_some() {
        log::trace!("'{text}' is not a plain number, parsing as ratio");
        return parse_ratio(text);
    }
    Err(FormatError::InvalidNumber(text.to_string()))
}

/// Single precision variant of [`parse_editor_double`].
///
/// Values that fit a double but overflow a float are rejected.
pub fn parse_editor_float(text: &str) -> Result<f32, FormatError> {
    let value = parse_editor_double(text)? as f32;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FormatError::InvalidNumber(text.to_string()))
    }
}

/// Splits a ratio literal into its two operands.
///
/// `:` is tried first; `/` only when `:` does not give exactly two parts.
/// Operands are returned untrimmed.
pub fn split_ratio(text: &str) -> Option<(&str, &str)> {
    split_exactly_two(text, ':').or_else(|| split_exactly_two(text, '/'))
}

fn split_exactly_two(text: &str, delimiter: char) -> Option<(&str, &str)> {
    let mut parts = text.split(delimiter);
    let first = parts.next()?;
    let second = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((first, second))
}

/// Parses a ratio literal `a:b` or `a/b` into the quotient `a / b`.
///
/// Fails when the text does not split into exactly two operands, when an
/// operand is not a plain number, or when the quotient is not finite.
///
/// # Examples
/// ```rust
/// use conversion::parse_ratio;
/// assert_eq!(parse_ratio("9:5"), Ok(1.8));
/// assert_eq!(parse_ratio("9/5"), Ok(1.8));
/// assert!(parse_ratio("1:2:3").is_err());
/// ```
pub fn parse_ratio(text: &str) -> Result<f64, FormatError> {
    let invalid = || FormatError::InvalidRatio(text.to_string());
    let (numerator, denominator) = split_ratio(text).ok_or_else(invalid)?;
    let numerator = try_parse_double(numerator).ok_or_else(invalid)?;
    let denominator = try_parse_double(denominator).ok_or_else(invalid)?;
    let quotient = numerator / denominator;
    if quotient.is_finite() {
        Ok(quotient)
    } else {
        Err(invalid())
    }
}

/// Formats a double for an editor field.
///
/// Zero keeps a visible decimal point (`"0.0"`); every other value uses the
/// shortest representation that parses back to the same double.
///
/// # Examples
/// ```rust
/// use conversion::format_double;
/// assert_eq!(format_double(0.0), "0.0");
/// assert_eq!(format_double(1.8), "1.8");
/// assert_eq!(format_double(10.0), "10");
/// ```
pub fn format_double(value: f64) -> String {
    if value == 0.0 {
        "0.0".to_string()
    } else {
        value.to_string()
    }
}

/// Single precision variant of [`format_double`].
pub fn format_float(value: f32) -> String {
    if value == 0.0 {
        "0.0".to_string()
    } else {
        value.to_string()
    }
}

pub fn format_int(value: i64) -> String {
    value.to_string()
}

/// Number of fractional digits a value needs in its shortest invariant form.
///
/// Whole numbers and non-finite values need none. Only digits after the
/// point are counted, so the sign and integer part never change the result
/// (`-0.5` and `0.5` both need one digit).
pub fn digits_of_precision(value: f64) -> usize {
    if !value.is_finite() {
        return 0;
    }
    value
        .to_string()
        .split_once('.')
        .map(|(_, fraction)| fraction.len())
        .unwrap_or(0)
}
