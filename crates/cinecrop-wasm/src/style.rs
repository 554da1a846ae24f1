//! Film style WASM bindings.
//!
//! The UI selects styles by string identifier; unknown identifiers fall
//! back to the identity treatment instead of failing, so a stale or
//! mistyped id degrades to "no filter" rather than an error dialog.

use cinecrop_core::{style, FilmStyle};
use wasm_bindgen::prelude::*;

/// Apply a film style to an encoded bitmap, returning new JPEG bytes at the
/// fixed 90% export quality.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const styled = apply_style(croppedJpeg, "kodak_gold");
/// const blob = new Blob([styled], { type: "image/jpeg" });
/// ```
#[wasm_bindgen]
pub fn apply_style(bitmap: &[u8], style_id: &str) -> Result<Vec<u8>, JsValue> {
    style::apply_style_by_id(bitmap, style_id)
        .map(|result| result.bytes)
        .map_err(|e| {
            let message = e.to_string();
            web_sys::console::error_1(&JsValue::from_str(&message));
            JsValue::from_str(&message)
        })
}

/// All style identifiers in display order.
#[wasm_bindgen]
pub fn style_ids() -> Vec<String> {
    FilmStyle::ALL
        .iter()
        .map(|style| style.id().to_string())
        .collect()
}

/// The default style identifier.
#[wasm_bindgen]
pub fn default_style_id() -> String {
    FilmStyle::default().id().to_string()
}

/// Prose description of a style, used as the prompt for the remote
/// generative path. Unknown identifiers yield the default style's text.
#[wasm_bindgen]
pub fn style_description(style_id: &str) -> String {
    FilmStyle::parse(style_id)
        .unwrap_or_default()
        .description()
        .to_string()
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_apply_style_rejects_garbage() {
        assert!(apply_style(&[0x00, 0x01], "hp5").is_err());
    }
}
