//! Cinecrop WASM - WebAssembly bindings for Cinecrop
//!
//! This crate exposes the cinecrop-core pipelines to JavaScript/TypeScript
//! applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Source decoding and preview generation
//! - `geometry` - Crop window resolution and bounding-box math
//! - `extract` - Rotated crop extraction
//! - `style` - Film style application
//! - `session` - Whole-workflow session object
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsSession } from '@cinecrop/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const session = new JsSession();
//! session.load_source(new Uint8Array(await file.arrayBuffer()));
//! session.confirm_crop(crop.x, crop.y, crop.width, crop.height, zoom, rotation);
//! const jpeg = session.apply_style("kodak_gold");
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod extract;
mod geometry;
mod session;
mod style;
mod types;

// Re-export public types
pub use decode::{decode_image, generate_preview, is_supported_input};
pub use extract::{extract_region, extract_region_pixels};
pub use geometry::{
    clamp_rotation, clamp_zoom, crop_aspect_ratio, resolve_crop_region, rotated_bounds,
};
pub use session::JsSession;
pub use style::{apply_style, default_style_id, style_description, style_ids};
pub use types::JsDecodedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
