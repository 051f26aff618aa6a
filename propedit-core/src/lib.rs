//! Validation, coercion and commit pipeline for numeric property editor fields.
//!
//! - `validation`: syntactic checks run before an edit is accepted
//! - `coercion`: clamping, last-good-value repair and display rounding
//! - `field`: per-field configuration and profiles
//! - `editor`: the validate, parse, clamp and format pipeline

pub mod coercion;
pub mod editor;
pub mod field;
pub mod validation;

pub use coercion::{coerce_value, fix_initial_value, round_display_value, Candidate};
pub use editor::{CommitOutcome, NumericEditor, StepDirection, Verdict};
pub use field::{ConfigError, FieldConfig, FieldProfile, NumericBounds};
pub use validation::{FieldGrammar, ValidationMode, Validator};
