//! Raster extraction: rotation onto a working surface and region read-back.
//!
//! The extraction pipeline mirrors what a 2D canvas does interactively:
//!
//! 1. Allocate a working surface sized to the rotated bounding box
//! 2. Draw the source through the rotation transform about the center
//! 3. Read back exactly the resolved [`crate::PixelRegion`]
//! 4. Encode the sub-rectangle alone as the intermediate JPEG
//!
//! # Coordinate System
//!
//! Rotation angles are in degrees, positive = counter-clockwise. Regions
//! are integer pixels within the rotated bounding box, origin top-left.

mod extract;
mod rotation;

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

pub use extract::{extract, extract_decoded, read_region};
pub use rotation::{rotate_surface, InterpolationFilter};

/// Errors from the extraction pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The working surface for the rotated image could not be allocated.
    /// Environment failure; fatal to the current operation only.
    #[error("No drawable surface could be allocated for a {width}x{height} working area")]
    SurfaceUnavailable { width: u32, height: u32 },

    /// The input bitmap failed to decode.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The output could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}
