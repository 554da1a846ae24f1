//! Crop geometry WASM bindings.
//!
//! The UI reports the confirmed crop window in fractions of the rotated
//! bounding box; these bindings resolve it into the pixel rectangle the
//! extraction step reads back.

use cinecrop_core::{geometry, NormalizedCrop};
use wasm_bindgen::prelude::*;

/// The fixed cinematic aspect ratio (width over height).
#[wasm_bindgen]
pub fn crop_aspect_ratio() -> f64 {
    geometry::CROP_ASPECT_RATIO
}

/// Clamp a zoom factor to the supported slider range.
#[wasm_bindgen]
pub fn clamp_zoom(zoom: f32) -> f32 {
    cinecrop_core::clamp_zoom(zoom)
}

/// Clamp a rotation angle to the supported slider range.
#[wasm_bindgen]
pub fn clamp_rotation(degrees: f64) -> f64 {
    cinecrop_core::clamp_rotation(degrees)
}

/// Bounding box of the source after rotation about its center.
///
/// Returns `[width, height]`.
#[wasm_bindgen]
pub fn rotated_bounds(
    source_width: u32,
    source_height: u32,
    rotation_degrees: f64,
) -> Result<JsValue, JsValue> {
    let bounds = geometry::rotated_bounds(source_width, source_height, rotation_degrees);
    serde_wasm_bindgen::to_value(&bounds).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resolve the confirmed crop window into a pixel region.
///
/// Returns `{ x, y, width, height }` in rotated-bounding-box pixel space,
/// honoring the fixed 65:24 aspect ratio.
#[wasm_bindgen]
pub fn resolve_crop_region(
    source_width: u32,
    source_height: u32,
    rotation_degrees: f64,
    crop_x: f64,
    crop_y: f64,
    crop_width: f64,
    crop_height: f64,
) -> Result<JsValue, JsValue> {
    let crop = NormalizedCrop::new(crop_x, crop_y, crop_width, crop_height);
    let region = geometry::resolve_crop_region(source_width, source_height, rotation_degrees, crop)
        .map_err(|e| {
            let message = e.to_string();
            web_sys::console::error_1(&JsValue::from_str(&message));
            JsValue::from_str(&message)
        })?;
    serde_wasm_bindgen::to_value(&region).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_aspect_ratio_value() {
        assert!((crop_aspect_ratio() - 65.0 / 24.0).abs() < 1e-12);
    }

    #[test]
    fn test_clamp_helpers() {
        assert_eq!(clamp_zoom(10.0), 3.0);
        assert_eq!(clamp_zoom(0.0), 1.0);
        assert_eq!(clamp_rotation(90.0), 20.0);
        assert_eq!(clamp_rotation(-90.0), -20.0);
    }
}
