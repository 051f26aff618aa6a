//! Point, size and rectangle literals (`"x, y"`, `"w, h"`, `"x, y, w, h"`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::number::{format_double, parse_editor_double};
use crate::FormatError;

/// A fixed-arity tuple of scalars serialized as comma separated numbers.
pub trait CompoundLiteral: Sized {
    /// Name used in error messages.
    const KIND: &'static str;
    const ARITY: usize;

    /// Builds the value from exactly [`Self::ARITY`] parts, in field order.
    fn from_parts(parts: &[f64]) -> Self;
    fn to_parts(&self) -> Vec<f64>;
}

/// Joins the fields of a compound value with `", "`, in field order.
pub fn format_compound<T: CompoundLiteral>(value: &T) -> String {
    value
        .to_parts()
        .into_iter()
        .map(format_double)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Splits `text` on `,` and parses each trimmed part.
///
/// Parts go through the permissive editor parser, so an empty part is `0`.
pub fn parse_compound_parts(text: &str, arity: usize) -> Result<Vec<f64>, FormatError> {
    parse_parts(text, "compound value", arity)
}

pub fn parse_compound<T: CompoundLiteral>(text: &str) -> Result<T, FormatError> {
    let parts = parse_parts(text, T::KIND, T::ARITY)?;
    Ok(T::from_parts(&parts))
}

fn parse_parts(text: &str, kind: &'static str, arity: usize) -> Result<Vec<f64>, FormatError> {
    let raw: Vec<&str> = text.split(',').collect();
    if raw.len() != arity {
        return Err(FormatError::FieldCount {
            kind,
            value: text.to_string(),
            expected: arity,
            found: raw.len(),
        });
    }
    raw.into_iter()
        .map(|part| parse_editor_double(part.trim()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl CompoundLiteral for Point {
    const KIND: &'static str = "point";
    const ARITY: usize = 2;

    fn from_parts(parts: &[f64]) -> Self {
        Self::new(parts[0], parts[1])
    }

    fn to_parts(&self) -> Vec<f64> {
        vec![self.x, self.y]
    }
}

impl CompoundLiteral for Size {
    const KIND: &'static str = "size";
    const ARITY: usize = 2;

    fn from_parts(parts: &[f64]) -> Self {
        Self::new(parts[0], parts[1])
    }

    fn to_parts(&self) -> Vec<f64> {
        vec![self.width, self.height]
    }
}

impl CompoundLiteral for Rect {
    const KIND: &'static str = "rectangle";
    const ARITY: usize = 4;

    fn from_parts(parts: &[f64]) -> Self {
        Self::new(parts[0], parts[1], parts[2], parts[3])
    }

    fn to_parts(&self) -> Vec<f64> {
        vec![self.x, self.y, self.width, self.height]
    }
}

macro_rules! impl_text_conversions {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&format_compound(self))
                }
            }

            impl FromStr for $ty {
                type Err = FormatError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    parse_compound(s)
                }
            }
        )*
    };
}

impl_text_conversions!(Point, Size, Rect);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_in_field_order() {
        assert_eq!(Point::new(1.5, 0.0).to_string(), "1.5, 0.0");
        assert_eq!(Size::new(320.0, 480.0).to_string(), "320, 480");
        assert_eq!(Rect::new(0.0, -4.0, 10.0, 2.25).to_string(), "0.0, -4, 10, 2.25");
    }

    #[test]
    fn parses_with_whitespace_and_empty_parts() {
        assert_eq!("1.5,  2".parse::<Point>(), Ok(Point::new(1.5, 2.0)));
        assert_eq!("3, ".parse::<Size>(), Ok(Size::new(3.0, 0.0)));
        assert_eq!(parse_compound_parts("1, 2, 3", 3), Ok(vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn wrong_arity_is_a_field_count_error() {
        let err = "1, 2, 3".parse::<Size>().unwrap_err();
        assert_eq!(
            err,
            FormatError::FieldCount {
                kind: "size",
                value: "1, 2, 3".to_string(),
                expected: 2,
                found: 3,
            }
        );
        assert!("1, 2".parse::<Rect>().is_err());
    }

    #[test]
    fn rect_exposes_origin_and_size() {
        let rect: Rect = "1, 2, 3, 4".parse().unwrap();
        assert_eq!(rect.origin(), Point::new(1.0, 2.0));
        assert_eq!(rect.size(), Size::new(3.0, 4.0));
    }
}
