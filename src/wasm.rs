use crate::code::{DecimalCode, EmojiCode};
use crate::config::SasConfig;
use crate::emoji::all_emojis;
use crate::renderer::SasRenderer;
use crate::sample::{seeded_preview, static_preview};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub struct WasmSasRenderer {
    renderer: SasRenderer,
}

#[wasm_bindgen]
impl WasmSasRenderer {
    #[wasm_bindgen(constructor)]
    pub fn new(separator: Option<String>) -> Result<WasmSasRenderer, JsValue> {
        init_panic_hook();
        let config = match separator {
            Some(separator) => SasConfig::new()
                .with_separator(separator)
                .map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => SasConfig::default(),
        };
        let renderer =
            SasRenderer::with_config(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmSasRenderer { renderer })
    }

    /// Decimal code text for the given SAS bytes
    #[wasm_bindgen]
    pub fn decimal(&self, bytes: &[u8]) -> Result<String, JsValue> {
        self.renderer
            .decimal(bytes)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The three decimal numbers
    #[wasm_bindgen]
    pub fn decimal_numbers(&self, bytes: &[u8]) -> Result<Vec<u16>, JsValue> {
        DecimalCode::from_bytes(bytes)
            .map(|code| code.numbers().to_vec())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Emoji code as `{ indices, entries: [{ glyph, label, icon_ref }] }`
    #[wasm_bindgen]
    pub fn emoji(&self, bytes: &[u8]) -> Result<JsValue, JsError> {
        let code = EmojiCode::from_bytes(bytes)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(serde_wasm_bindgen::to_value(&code)?)
    }
}

/// The full 64-entry table
#[wasm_bindgen]
pub fn emoji_table() -> Result<JsValue, JsError> {
    Ok(serde_wasm_bindgen::to_value(all_emojis())?)
}

/// Seven random emoji for an illustrative preview
#[wasm_bindgen]
pub fn emoji_preview(seed: Option<u64>) -> Result<JsValue, JsError> {
    let preview = match seed {
        Some(seed) => seeded_preview(seed),
        None => static_preview(),
    };
    Ok(serde_wasm_bindgen::to_value(&preview)?)
}
