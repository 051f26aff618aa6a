pub mod config;
pub mod profile;

pub use config::{FieldConfig, NumericBounds, DEFAULT_MAX_ROUND_DIGITS, MAX_FRACTION_DIGITS};
pub use profile::{FieldProfile, ProfileFormat};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("toml serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported profile format '{0}', expected .toml or .json")]
    UnsupportedFormat(String),
    #[error("invalid bounds: minimum {minimum} must not exceed maximum {maximum}")]
    InvalidBounds { minimum: f64, maximum: f64 },
    #[error("increment must be a positive finite number, got {0}")]
    InvalidIncrement(f64),
    #[error("at most {max} fraction digits are supported, got {found}")]
    Precision { found: usize, max: usize },
    #[error("field '{0}' not found in profile")]
    UnknownField(String),
    #[error("field '{field}': {source}")]
    Field {
        field: String,
        source: Box<ConfigError>,
    },
}
