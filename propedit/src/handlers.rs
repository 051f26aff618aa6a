use std::error::Error;
use std::process::ExitCode;

use conversion::{
    digits_of_precision, format_double, parse_double, parse_ratio, parse_version,
    storyboard_bool_from_editor, to_camel_case, to_human_readable, to_pascal_case, Point, Rect,
    Size,
};
use propedit_core::{FieldConfig, FieldProfile, NumericBounds, NumericEditor, StepDirection};

use crate::commands::{Commands, ConvertKind, Direction, FieldArgs};
use crate::output::{print_info, print_outcome, print_verdict};

pub fn handle_command(command: Commands) -> Result<ExitCode, Box<dyn Error>> {
    match command {
        Commands::Validate { text, field } => {
            let config = field_config(&field)?;
            let verdict = NumericEditor::new(&config).verdict(&text);
            print_verdict(verdict);
            if verdict.is_accepted() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Commit {
            text,
            previous,
            json,
            field,
        } => {
            let config = field_config(&field)?;
            let outcome = NumericEditor::new(&config).commit_text(&text, &previous);
            if outcome.reverted {
                log::info!("'{text}' was rejected, kept '{previous}'");
            }
            print_outcome(&outcome, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Step {
            direction,
            current,
            field,
        } => {
            if !current.is_finite() {
                return Err(format!("current value must be a finite number, got '{current}'").into());
            }
            let config = field_config(&field)?;
            let direction = match direction {
                Direction::Up => StepDirection::Up,
                Direction::Down => StepDirection::Down,
            };
            let outcome = NumericEditor::new(&config).step(current, direction);
            print_outcome(&outcome, false)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Convert { kind, text } => {
            print_info(&convert(kind, &text)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Builds the field from an optional profile entry, then applies flags on top.
pub fn field_config(args: &FieldArgs) -> Result<FieldConfig, Box<dyn Error>> {
    let mut config = match (&args.profile, &args.field) {
        (Some(path), Some(name)) => FieldProfile::load(path)?.field(name)?.clone(),
        _ => FieldConfig::default(),
    };
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if args.ratio {
        config.allow_ratio = true;
    }
    if args.no_negative {
        config.allow_negative = false;
    }
    if args.min.is_some() || args.max.is_some() {
        let minimum = args.min.unwrap_or(config.bounds.minimum());
        let maximum = args.max.unwrap_or(config.bounds.maximum());
        config.bounds = NumericBounds::new(minimum, maximum)?;
    }
    if let Some(digits) = args.digits {
        config.max_fraction_digits = Some(digits);
    }
    if let Some(increment) = args.increment {
        config.increment = increment;
    }
    if args.wrap {
        config.wraps = true;
    }
    config.validate()?;
    Ok(config)
}

fn convert(kind: ConvertKind, text: &str) -> Result<String, Box<dyn Error>> {
    let converted = match kind {
        ConvertKind::Human => to_human_readable(text),
        ConvertKind::Camel => to_camel_case(text),
        ConvertKind::Pascal => to_pascal_case(text),
        ConvertKind::Version => parse_version(text)?.to_string(),
        ConvertKind::Ratio => format_double(parse_ratio(text)?),
        ConvertKind::Point => text.parse::<Point>()?.to_string(),
        ConvertKind::Size => text.parse::<Size>()?.to_string(),
        ConvertKind::Rect => text.parse::<Rect>()?.to_string(),
        ConvertKind::StoryboardBool => storyboard_bool_from_editor(text)?.to_string(),
        ConvertKind::Precision => digits_of_precision(parse_double(text)?).to_string(),
    };
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use propedit_core::ValidationMode;

    #[test]
    fn flags_build_a_field() {
        let args = FieldArgs {
            mode: Some(ValidationMode::Integer),
            no_negative: true,
            min: Some(0.0),
            max: Some(10.0),
            ..FieldArgs::default()
        };
        let config = field_config(&args).unwrap();
        assert_eq!(config.mode, ValidationMode::Integer);
        assert!(!config.allow_negative);
        assert_eq!(config.bounds, NumericBounds::new(0.0, 10.0).unwrap());
    }

    #[test]
    fn inverted_flags_are_rejected() {
        let args = FieldArgs {
            min: Some(5.0),
            max: Some(1.0),
            ..FieldArgs::default()
        };
        assert!(field_config(&args).is_err());
    }

    #[test]
    fn convert_kinds() {
        assert_eq!(convert(ConvertKind::Human, "IsEnabled").unwrap(), "Is Enabled");
        assert_eq!(convert(ConvertKind::Ratio, "9/5").unwrap(), "1.8");
        assert_eq!(convert(ConvertKind::Rect, "0,0,10,2.50").unwrap(), "0.0, 0.0, 10, 2.5");
        assert_eq!(convert(ConvertKind::StoryboardBool, "true").unwrap(), "YES");
        assert_eq!(convert(ConvertKind::Precision, "2.375").unwrap(), "3");
        assert!(convert(ConvertKind::Version, "1.x").is_err());
    }
}
