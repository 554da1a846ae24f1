//! Image encoding pipeline for Cinecrop.
//!
//! Both pipeline outputs are JPEG. The quality constants here are the
//! encoding policy for the whole workspace:
//!
//! - extraction produces an intermediate artifact, encoded at full quality
//! - the style stage produces the downloadable result at a fixed 90%,
//!   which bounds file size while preserving visual fidelity

mod jpeg;

pub use jpeg::{encode_jpeg, encode_result, EncodeError};

/// Quality for the intermediate cropped artifact.
pub const INTERMEDIATE_JPEG_QUALITY: u8 = 100;

/// Quality for the final styled output. Fixed; output-size-sensitive tests
/// depend on it.
pub const FINAL_JPEG_QUALITY: u8 = 90;
