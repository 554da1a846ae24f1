//! Image decoding WASM bindings.
//!
//! Exposes source decoding (PNG, JPEG, WEBP with EXIF orientation applied)
//! and preview downscaling to the browser UI.

use crate::types::JsDecodedImage;
use cinecrop_core::decode;
use wasm_bindgen::prelude::*;

/// Decode an uploaded image (PNG, JPEG or WEBP).
///
/// EXIF orientation is applied, so the returned pixels are display-oriented.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const image = decode_image(bytes);
/// console.log(`Decoded ${image.width}x${image.height}`);
/// ```
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsDecodedImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| {
            let message = e.to_string();
            web_sys::console::error_1(&JsValue::from_str(&message));
            JsValue::from_str(&message)
        })
}

/// Check whether bytes look like one of the accepted upload formats.
///
/// Intended for the drag-and-drop gate before the full decode is attempted.
#[wasm_bindgen]
pub fn is_supported_input(bytes: &[u8]) -> bool {
    decode::is_supported_input(bytes)
}

/// Downscale an image to fit within `max_edge` for on-screen display.
///
/// Images already within the bound are returned unchanged.
#[wasm_bindgen]
pub fn generate_preview(image: &JsDecodedImage, max_edge: u32) -> Result<JsDecodedImage, JsValue> {
    let src = image.to_decoded();
    decode::generate_preview(&src, max_edge)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
