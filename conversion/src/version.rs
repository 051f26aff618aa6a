use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::FormatError;

/// A `major.minor[.build[.revision]]` version.
///
/// Optional components sort before any present value, so `1.2 < 1.2.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    #[serde(default)]
    pub build: Option<u32>,
    #[serde(default)]
    pub revision: Option<u32>,
}

impl Version {
    pub fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            build: None,
            revision: None,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(build) = self.build {
            write!(f, ".{build}")?;
            if let Some(revision) = self.revision {
                write!(f, ".{revision}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s)
    }
}

/// Parses `"3035"` as `3035.0` and `"3035.24"` as `3035.24`.
///
/// Empty text is the zero version. Dotted text takes two to four
/// non-negative components.
pub fn parse_version(text: &str) -> Result<Version, FormatError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Version::default());
    }
    let invalid = || FormatError::InvalidVersion(text.to_string());
    if !trimmed.contains('.') {
        let major = trimmed.parse::<u32>().map_err(|_| invalid())?;
        return Ok(Version::new(major, 0));
    }

    let components = trimmed
        .split('.')
        .map(|part| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse::<u32>().map_err(|_| invalid())
        })
        .collect::<Result<Vec<_>, _>>()?;

    match components.as_slice() {
        [major, minor] => Ok(Version::new(*major, *minor)),
        [major, minor, build] => Ok(Version {
            build: Some(*build),
            ..Version::new(*major, *minor)
        }),
        [major, minor, build, revision] => Ok(Version {
            major: *major,
            minor: *minor,
            build: Some(*build),
            revision: Some(*revision),
        }),
        _ => Err(invalid()),
    }
}
