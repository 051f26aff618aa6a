use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use conversion::parse_enum;
use propedit_core::ValidationMode;

#[derive(Parser)]
#[command(
    name = "propedit",
    version,
    about = "Validate, commit and convert property editor field values"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether TEXT may be committed; exits with 1 when it may not
    Validate {
        #[arg(allow_hyphen_values = true)]
        text: String,
        #[command(flatten)]
        field: FieldArgs,
    },
    /// Run the commit pipeline on TEXT and print the display value
    Commit {
        #[arg(allow_hyphen_values = true)]
        text: String,
        /// Last good display value, used when TEXT is rejected
        #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
        previous: String,
        /// Print the full outcome as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        field: FieldArgs,
    },
    /// Move CURRENT one increment up or down
    Step {
        #[arg(value_enum)]
        direction: Direction,
        #[arg(allow_hyphen_values = true)]
        current: f64,
        #[command(flatten)]
        field: FieldArgs,
    },
    /// Convert TEXT between editor representations
    Convert {
        #[arg(value_enum)]
        kind: ConvertKind,
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
}

/// Field settings; flags override the values of a profile field.
#[derive(Args, Debug, Clone, Default)]
pub struct FieldArgs {
    /// decimal or integer
    #[arg(long, value_parser = parse_mode)]
    pub mode: Option<ValidationMode>,
    /// Accept `a:b` and `a/b`
    #[arg(long)]
    pub ratio: bool,
    /// Reject signed values
    #[arg(long)]
    pub no_negative: bool,
    #[arg(long, allow_hyphen_values = true)]
    pub min: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    pub max: Option<f64>,
    /// Fraction digits kept by decimal fields
    #[arg(long)]
    pub digits: Option<usize>,
    #[arg(long)]
    pub increment: Option<f64>,
    /// Wrap to the opposite bound when stepping past one
    #[arg(long)]
    pub wrap: bool,
    /// Field profile (.toml or .json)
    #[arg(long, requires = "field")]
    pub profile: Option<PathBuf>,
    /// Field name inside the profile
    #[arg(long, requires = "profile")]
    pub field: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConvertKind {
    Human,
    Camel,
    Pascal,
    Version,
    Ratio,
    Point,
    Size,
    Rect,
    StoryboardBool,
    Precision,
}

fn parse_mode(text: &str) -> Result<ValidationMode, String> {
    parse_enum(text).map_err(|err| err.to_string())
}
