//! Raster extraction WASM bindings.
//!
//! Rotates the decoded source onto a working surface, reads back the
//! resolved region, and hands the result to JavaScript either as raw pixels
//! (preview) or encoded JPEG bytes (the crop-confirm pipeline).

use crate::types::JsDecodedImage;
use cinecrop_core::transform::{self, InterpolationFilter};
use cinecrop_core::PixelRegion;
use wasm_bindgen::prelude::*;

fn filter_for(use_lanczos: bool) -> InterpolationFilter {
    if use_lanczos {
        InterpolationFilter::Lanczos3
    } else {
        InterpolationFilter::Bilinear
    }
}

fn report_error(message: String) -> JsValue {
    web_sys::console::error_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

/// Extract a rotated crop region and encode it as the intermediate JPEG.
///
/// This is the crop-confirm pipeline: the returned bytes are what the style
/// stage consumes.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const region = resolve_crop_region(img.width, img.height, rot, x, y, w, h);
/// const jpeg = extract_region(img, rot, region.x, region.y, region.width, region.height);
/// ```
#[wasm_bindgen]
pub fn extract_region(
    image: &JsDecodedImage,
    rotation_degrees: f64,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> Result<Vec<u8>, JsValue> {
    let src = image.to_decoded();
    let region = PixelRegion::new(x, y, width, height);
    transform::extract(&src, rotation_degrees, region)
        .map(|result| result.bytes)
        .map_err(|e| report_error(e.to_string()))
}

/// Extract a rotated crop region as raw pixels for preview rendering.
///
/// # Arguments
///
/// * `use_lanczos` - Use high-quality Lanczos3 filtering (slower), otherwise
///   bilinear
#[wasm_bindgen]
pub fn extract_region_pixels(
    image: &JsDecodedImage,
    rotation_degrees: f64,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    use_lanczos: bool,
) -> Result<JsDecodedImage, JsValue> {
    let src = image.to_decoded();
    let region = PixelRegion::new(x, y, width, height);
    transform::extract_decoded(&src, rotation_degrees, region, filter_for(use_lanczos))
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| report_error(e.to_string()))
}
