//! Short Authentication String rendering.
//!
//! Turns the SAS bytes both parties derive after a key exchange into either
//! three 4-digit numbers or seven emoji. Peers computing from the same bytes
//! always get the same code.
//!
//! ```
//! use sas_code::{to_decimal_code, to_emoji_code};
//!
//! let decimal = to_decimal_code(&[0x12, 0x34, 0x56, 0x78, 0x9a], "-").unwrap();
//! assert_eq!(decimal, "1582-5441-8245");
//!
//! let emoji = to_emoji_code(&[0xfc, 0, 0, 0, 0, 0]).unwrap();
//! assert_eq!(emoji[0].label(), "pin");
//! ```

pub mod code;
pub mod config;
pub mod emoji;
pub mod error;
pub mod renderer;
pub mod sample;

#[cfg(feature = "wasm-bindgen")]
pub mod wasm;

pub use code::{
    to_decimal_code, to_emoji_code, DecimalCode, EmojiCode, DECIMAL_BYTES, EMOJI_BYTES,
    EMOJI_CODE_LENGTH,
};
pub use config::SasConfig;
pub use emoji::{all_emojis, emoji_for_code, EmojiRepresentation, IconRef};
pub use error::{CodeForm, Result, SasError};
pub use renderer::SasRenderer;
pub use sample::{random_emojis, static_preview};
