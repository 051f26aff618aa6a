//! Bounds clamping, last-good-value repair and display rounding.

use conversion::{format_double, try_parse_double};

use crate::validation::FieldGrammar;

/// Clamps `value` into `[minimum, maximum]`.
///
/// # Panics
/// When `minimum > maximum` or either bound is NaN; bounds are validated when
/// a field is configured, so this is a caller bug.
pub fn coerce_value(value: f64, minimum: f64, maximum: f64) -> f64 {
    assert!(
        minimum <= maximum,
        "invalid bounds: minimum {minimum} is not <= maximum {maximum}"
    );
    let clamped = value.clamp(minimum, maximum);
    if clamped != value {
        log::debug!("clamped {value} into [{minimum}, {maximum}] as {clamped}");
    }
    clamped
}

/// Text chosen for a commit by [`fix_initial_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate<'a> {
    /// The user's entry is valid and is committed as typed.
    Entered(&'a str),
    /// The entry was empty or invalid; the last good display is committed.
    Reverted(&'a str),
}

impl<'a> Candidate<'a> {
    pub fn text(self) -> &'a str {
        match self {
            Candidate::Entered(text) | Candidate::Reverted(text) => text,
        }
    }

    pub fn is_reverted(self) -> bool {
        matches!(self, Candidate::Reverted(_))
    }
}

/// Picks the text to commit: `new_text` when it is a non-empty, valid entry
/// for `grammar`, otherwise the last good display text.
///
/// The user's text is never merged with the previous value; a rejected entry
/// is dropped whole.
pub fn fix_initial_value<'a>(
    new_text: &'a str,
    previous_display: &'a str,
    grammar: FieldGrammar,
    allow_negative: bool,
) -> Candidate<'a> {
    if new_text.is_empty() || !grammar.validate(new_text, allow_negative) {
        log::debug!("reverting '{new_text}' to last good value '{previous_display}'");
        return Candidate::Reverted(previous_display);
    }
    Candidate::Entered(new_text)
}

/// Re-parses `text` and limits it to `max_fraction_digits` decimals.
///
/// With zero digits the value is truncated toward zero and printed as an
/// integer. Otherwise it is rounded half away from zero and printed with at
/// least one fractional digit. Zero is `"0.0"` either way. Text that is not
/// a number is returned unchanged.
///
/// # Examples
/// ```rust
/// use propedit_core::coercion::round_display_value;
/// assert_eq!(round_display_value("10", 3), "10.0");
/// assert_eq!(round_display_value("1.23456", 3), "1.235");
/// assert_eq!(round_display_value("-7.9", 0), "-7");
/// ```
pub fn round_display_value(text: &str, max_fraction_digits: usize) -> String {
    let Some(value) = try_parse_double(text) else {
        return text.to_string();
    };
    if max_fraction_digits == 0 {
        let whole = value.trunc();
        return if whole == 0.0 {
            format_double(0.0)
        } else {
            whole.to_string()
        };
    }
    let display = format_double(round_half_away_from_zero(value, max_fraction_digits));
    if display.contains('.') {
        display
    } else {
        display + ".0"
    }
}

/// Rounds on the shortest decimal representation, so values such as `1.0005`
/// round up as written instead of following their binary approximation.
fn round_half_away_from_zero(value: f64, digits: usize) -> f64 {
    let repr = value.abs().to_string();
    let (whole, fraction) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    if fraction.len() <= digits {
        return value;
    }
    let mut kept: Vec<char> = whole.chars().chain(fraction.chars().take(digits)).collect();
    if fraction.as_bytes()[digits] >= b'5' {
        increment_digits(&mut kept);
    }
    let point = kept.len() - digits;
    let rounded = format!(
        "{}.{}",
        kept[..point].iter().collect::<String>(),
        kept[point..].iter().collect::<String>()
    );
    rounded
        .parse::<f64>()
        .map(|magnitude| magnitude.copysign(value))
        .unwrap_or(value)
}

fn increment_digits(digits: &mut Vec<char>) {
    for digit in digits.iter_mut().rev() {
        if *digit == '9' {
            *digit = '0';
        } else {
            *digit = char::from(*digit as u8 + 1);
            return;
        }
    }
    digits.insert(0, '1');
}
