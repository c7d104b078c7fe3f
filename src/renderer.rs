use crate::code::{DecimalCode, EmojiCode};
use crate::config::SasConfig;
use crate::error::Result;
use zeroize::Zeroizing;

/// Renders SAS bytes with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct SasRenderer {
    config: SasConfig,
}

impl SasRenderer {
    /// Create a renderer with the default space separator
    pub fn new() -> Self {
        Self {
            config: SasConfig::default(),
        }
    }

    /// Create a renderer with a custom configuration
    pub fn with_config(config: SasConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SasConfig {
        &self.config
    }

    /// Decimal code text using the configured separator
    pub fn decimal(&self, bytes: &[u8]) -> Result<String> {
        Ok(DecimalCode::from_bytes(bytes)?.format(self.config.separator()))
    }

    /// Emoji code for the first six bytes
    pub fn emoji(&self, bytes: &[u8]) -> Result<EmojiCode> {
        EmojiCode::from_bytes(bytes)
    }

    /// Decode hex-encoded SAS bytes, wiped from memory when dropped
    pub fn decode_hex(&self, input: &str) -> Result<Zeroizing<Vec<u8>>> {
        let cleaned: Zeroizing<String> = Zeroizing::new(
            input
                .chars()
                .filter(|c| !c.is_whitespace() && *c != ':')
                .collect(),
        );
        Ok(Zeroizing::new(hex::decode(cleaned.as_str())?))
    }
}
