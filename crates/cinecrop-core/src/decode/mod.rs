//! Image decoding pipeline for Cinecrop.
//!
//! This module provides functionality for:
//! - Decoding the accepted upload formats (PNG, JPEG, WEBP)
//! - EXIF orientation correction on load
//! - Downscaling for on-screen previews
//!
//! # Architecture
//!
//! The decoding pipeline is designed to be used from Web Workers via WASM
//! bindings. All operations are synchronous and single-threaded within WASM;
//! the hosting event loop treats each call as one non-blocking task.

mod resize;
mod source;
mod types;

pub use resize::{generate_preview, resize, resize_to_fit};
pub use source::{decode_image, detect_mime, get_orientation, is_supported_input};
pub use types::{DecodeError, DecodedImage, FilterType, Orientation};
