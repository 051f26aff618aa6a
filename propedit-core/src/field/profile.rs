use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ConfigError, FieldConfig};

/// Named field configurations, loaded from a `.toml` or `.json` file.
///
/// ```toml
/// [fields.opacity]
/// allow_negative = false
/// max_fraction_digits = 2
/// bounds = { minimum = 0.0, maximum = 1.0 }
///
/// [fields.multiplier]
/// allow_ratio = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldProfile {
    #[serde(default)]
    pub fields: BTreeMap<String, FieldConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    Toml,
    Json,
}

impl ProfileFormat {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        match extension.to_ascii_lowercase().as_str() {
            "toml" => Ok(ProfileFormat::Toml),
            "json" => Ok(ProfileFormat::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl FieldProfile {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let profile: Self = toml::from_str(text)?;
        profile.validated()
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let profile: Self = serde_json::from_str(text)?;
        profile.validated()
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let format = ProfileFormat::from_path(path)?;
        let text = std::fs::read_to_string(path)?;
        let profile = match format {
            ProfileFormat::Toml => Self::from_toml_str(&text)?,
            ProfileFormat::Json => Self::from_json_str(&text)?,
        };
        log::debug!(
            "loaded {} field(s) from '{}'",
            profile.fields.len(),
            path.display()
        );
        Ok(profile)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = match ProfileFormat::from_path(path)? {
            ProfileFormat::Toml => toml::to_string_pretty(self)?,
            ProfileFormat::Json => serde_json::to_string_pretty(self)?,
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        std::fs::write(path, text)?;
        Ok(())
    }

    pub fn field(&self, name: &str) -> Result<&FieldConfig, ConfigError> {
        self.fields
            .get(name)
            .ok_or_else(|| ConfigError::UnknownField(name.to_string()))
    }

    /// Adds or replaces a field after validating it.
    pub fn insert(&mut self, name: &str, config: FieldConfig) -> Result<(), ConfigError> {
        validate_field(name, &config)?;
        self.fields.insert(name.to_string(), config);
        Ok(())
    }

    fn validated(self) -> Result<Self, ConfigError> {
        for (name, config) in &self.fields {
            validate_field(name, config)?;
        }
        Ok(self)
    }
}

fn validate_field(name: &str, config: &FieldConfig) -> Result<(), ConfigError> {
    config.validate().map_err(|source| ConfigError::Field {
        field: name.to_string(),
        source: Box::new(source),
    })
}
