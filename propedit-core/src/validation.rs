//! Syntactic acceptance checks run before an edit is committed.
//!
//! Every check is a plain predicate: `false` means "keep editing", never an
//! error. Range checks are not done here; out-of-range values are clamped later.

use conversion::{split_ratio, EditorEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    #[default]
    Decimal,
    Integer,
}

impl EditorEnum for ValidationMode {
    const KIND: &'static str = "ValidationMode";
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("decimal", ValidationMode::Decimal),
        ("integer", ValidationMode::Integer),
    ];
}

/// The grammar a field accepts, from its mode and ratio flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGrammar {
    Decimal,
    Integer,
    /// `a:b` or `a/b`, each operand in the given mode.
    Ratio(ValidationMode),
}

impl FieldGrammar {
    pub fn from_flags(mode: ValidationMode, allow_ratio: bool) -> Self {
        match (mode, allow_ratio) {
            (mode, true) => FieldGrammar::Ratio(mode),
            (ValidationMode::Decimal, false) => FieldGrammar::Decimal,
            (ValidationMode::Integer, false) => FieldGrammar::Integer,
        }
    }

    pub fn validate(self, text: &str, allow_negative: bool) -> bool {
        match self {
            FieldGrammar::Decimal => Validator::validate_decimal(text, allow_negative),
            FieldGrammar::Integer => Validator::validate_integer(text, allow_negative),
            FieldGrammar::Ratio(mode) => Validator::validate_ratio(text, mode, allow_negative),
        }
    }
}

pub struct Validator;

impl Validator {
    /// Accepts empty text (no value) or an invariant decimal.
    ///
    /// A leading sign is only allowed when `allow_negative` is set. At most one
    /// `.` and at least one digit; any other character, whitespace included,
    /// rejects the text.
    pub fn validate_decimal(text: &str, allow_negative: bool) -> bool {
        text.is_empty() || is_number(text, true, allow_negative)
    }

    /// Same as [`Validator::validate_decimal`] without a decimal point.
    pub fn validate_integer(text: &str, allow_negative: bool) -> bool {
        text.is_empty() || is_number(text, false, allow_negative)
    }

    /// Accepts empty text or exactly two non-empty operands split on `:`
    /// (preferred) or `/`, each valid for `mode`.
    pub fn validate_ratio(text: &str, mode: ValidationMode, allow_negative: bool) -> bool {
        if text.is_empty() {
            return true;
        }
        let Some((first, second)) = split_ratio(text) else {
            return false;
        };
        let allow_point = mode == ValidationMode::Decimal;
        is_number(first, allow_point, allow_negative) && is_number(second, allow_point, allow_negative)
    }
}

fn is_number(text: &str, allow_point: bool, allow_negative: bool) -> bool {
    let unsigned = match text.strip_prefix(|c: char| c == '-' || c == '+') {
        Some(rest) if allow_negative => rest,
        Some(_) => return false,
        None => text,
    };
    let mut seen_digit = false;
    let mut seen_point = false;
    for ch in unsigned.chars() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' if allow_point && !seen_point => seen_point = true,
            _ => return false,
        }
    }
    seen_digit
}
