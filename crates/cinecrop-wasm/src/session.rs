//! Session WASM bindings.
//!
//! Wraps the core [`Session`] so the browser UI can drive the whole
//! load → crop → style → download flow through one object held in WASM
//! memory. The UI disables its triggering controls while a call is
//! outstanding; within the session, completions are already sequenced.

use cinecrop_core::session::{self, Session};
use cinecrop_core::{CropSelection, NormalizedCrop};
use wasm_bindgen::prelude::*;

fn report_error(message: String) -> JsValue {
    web_sys::console::error_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

/// One editing session: a source image, the cropped intermediate, and the
/// current styled result.
#[wasm_bindgen]
pub struct JsSession {
    inner: Session,
}

#[wasm_bindgen]
impl JsSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsSession {
        JsSession {
            inner: Session::new(),
        }
    }

    /// Decode and adopt a new source image (PNG, JPEG or WEBP bytes).
    pub fn load_source(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        self.inner
            .load_source(bytes)
            .map_err(|e| report_error(e.to_string()))
    }

    /// Clear everything, returning to the initial state.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Whether a source image is loaded.
    #[wasm_bindgen(getter)]
    pub fn has_source(&self) -> bool {
        self.inner.source().is_some()
    }

    /// Source dimensions as `[width, height]`, if a source is loaded.
    pub fn source_dimensions(&self) -> Option<Vec<u32>> {
        self.inner
            .source()
            .map(|image| vec![image.width, image.height])
    }

    /// Resolve and extract the confirmed crop, returning the intermediate
    /// JPEG bytes for preview display.
    pub fn confirm_crop(
        &mut self,
        crop_x: f64,
        crop_y: f64,
        crop_width: f64,
        crop_height: f64,
        zoom: f32,
        rotation_degrees: f64,
    ) -> Result<Vec<u8>, JsValue> {
        let selection = CropSelection::new(
            NormalizedCrop::new(crop_x, crop_y, crop_width, crop_height),
            zoom,
            rotation_degrees,
        );
        self.inner
            .confirm_crop(&selection)
            .map(|cropped| cropped.bytes.clone())
            .map_err(|e| report_error(e.to_string()))
    }

    /// Apply a film style to the cropped intermediate, returning the styled
    /// JPEG bytes. Unknown style identifiers apply the identity treatment.
    pub fn apply_style(&mut self, style_id: &str) -> Result<Vec<u8>, JsValue> {
        self.inner
            .apply_style_by_id(style_id)
            .map(|result| result.bytes.clone())
            .map_err(|e| report_error(e.to_string()))
    }

    /// The current styled result, if any.
    pub fn result_bytes(&self) -> Option<Vec<u8>> {
        self.inner.result().map(|result| result.bytes.clone())
    }

    /// The cropped intermediate, if any.
    pub fn cropped_bytes(&self) -> Option<Vec<u8>> {
        self.inner.cropped().map(|cropped| cropped.bytes.clone())
    }

    /// Suggested filename for downloading the current result, stamped with
    /// the current wall-clock time.
    pub fn download_filename(&self) -> String {
        session::download_filename(js_sys::Date::now() as u64)
    }
}

impl Default for JsSession {
    fn default() -> Self {
        Self::new()
    }
}
