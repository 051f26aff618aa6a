//! The commit pipeline shared by every numeric input surface.
//!
//! A control asks [`NumericEditor::verdict`] before ending an edit. On
//! acceptance it calls [`NumericEditor::commit_text`] and shows the returned
//! display string; on rejection it keeps the edit open and alerts the user
//! without touching the bound value.

use conversion::{format_double, parse_editor_double, Point};
use serde::{Deserialize, Serialize};

use crate::coercion::{coerce_value, fix_initial_value, round_display_value};
use crate::field::FieldConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl Verdict {
    pub fn is_accepted(self) -> bool {
        self == Verdict::Accepted
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

/// Result of committing an edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitOutcome {
    /// Value clamped into the field bounds, before display rounding.
    pub value: f64,
    pub display: String,
    /// The entered text was dropped in favour of the last good display.
    pub reverted: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct NumericEditor<'a> {
    config: &'a FieldConfig,
}

impl<'a> NumericEditor<'a> {
    pub fn new(config: &'a FieldConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a FieldConfig {
        self.config
    }

    /// Empty text means the field shows no value.
    pub fn is_indeterminate(text: &str) -> bool {
        text.is_empty()
    }

    pub fn verdict(&self, text: &str) -> Verdict {
        if self.config.grammar().validate(text, self.config.allow_negative) {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        }
    }

    /// Validates, parses, clamps and rounds `text`.
    ///
    /// Empty or invalid text commits `last_good_display` instead. A valid
    /// ratio whose quotient is not finite (`"1:0"`) reverts as well.
    pub fn commit_text(&self, text: &str, last_good_display: &str) -> CommitOutcome {
        let candidate = fix_initial_value(
            text,
            last_good_display,
            self.config.grammar(),
            self.config.allow_negative,
        );
        match parse_editor_double(candidate.text()) {
            Ok(value) => self.finish(value, candidate.is_reverted()),
            Err(err) => {
                log::debug!("cannot commit '{}': {err}", candidate.text());
                let value = parse_editor_double(last_good_display).unwrap_or(0.0);
                self.finish(value, true)
            }
        }
    }

    /// Clamps and rounds a value set programmatically.
    pub fn commit_value(&self, value: f64) -> CommitOutcome {
        self.finish(value, false)
    }

    /// Moves `current` by one increment.
    ///
    /// Leaving the bounds wraps to the opposite bound when the field wraps,
    /// otherwise the value is clamped.
    pub fn step(&self, current: f64, direction: StepDirection) -> CommitOutcome {
        let increment = self.config.increment;
        let next = match direction {
            StepDirection::Up => current + increment,
            StepDirection::Down => current - increment,
        };
        let bounds = self.config.bounds;
        let next = if !self.config.wraps {
            next
        } else if next > bounds.maximum() {
            bounds.minimum()
        } else if next < bounds.minimum() {
            bounds.maximum()
        } else {
            next
        };
        self.finish(next, false)
    }

    /// Commits the two components of a point independently.
    pub fn commit_point(&self, x_text: &str, y_text: &str, previous: Point) -> (Point, String) {
        let x = self.commit_text(x_text, &format_double(previous.x));
        let y = self.commit_text(y_text, &format_double(previous.y));
        let display = format!("{}, {}", x.display, y.display);
        (Point::new(x.value, y.value), display)
    }

    fn finish(&self, value: f64, reverted: bool) -> CommitOutcome {
        let bounds = self.config.bounds;
        let clamped = coerce_value(value, bounds.minimum(), bounds.maximum());
        let display = round_display_value(&format_double(clamped), self.config.precision());
        CommitOutcome {
            value: clamped,
            display,
            reverted,
        }
    }
}
