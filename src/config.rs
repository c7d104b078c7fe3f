use crate::error::{Result, SasError};
use serde::{Deserialize, Serialize};

/// Separator used between the three decimal numbers unless configured otherwise
pub const DEFAULT_SEPARATOR: &str = " ";

/// Rendering options. The decimal separator is the only recognised setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SasConfig {
    separator: String,
}

impl SasConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the separator, rejecting values that would blur the number boundaries
    pub fn with_separator(mut self, separator: impl Into<String>) -> Result<Self> {
        let separator = separator.into();
        validate_separator(&separator)?;
        self.separator = separator;
        Ok(self)
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Check a config that came in through deserialization
    pub fn validate(&self) -> Result<()> {
        validate_separator(&self.separator)
    }
}

impl Default for SasConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

fn validate_separator(separator: &str) -> Result<()> {
    if separator.chars().any(|c| c.is_ascii_digit()) {
        return Err(SasError::InvalidConfig(format!(
            "separator {:?} must not contain digits",
            separator
        )));
    }
    Ok(())
}
