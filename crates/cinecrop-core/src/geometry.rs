//! Crop geometry: rotated bounding boxes and region resolution.
//!
//! This is pure math with no pixel access. Given the source dimensions, the
//! confirmed rotation, and the normalized crop window, it produces the
//! integer rectangle the extraction pipeline reads back from the rotated
//! working surface.
//!
//! # Coordinate System
//!
//! - Angles are in degrees, positive = counter-clockwise
//! - The crop window is normalized (0.0 to 1.0) relative to the rotated
//!   bounding box, origin at the top-left corner
//! - Resolved regions are integer pixels within that bounding box

use thiserror::Error;

use crate::{NormalizedCrop, PixelRegion};

/// The fixed cinematic aspect ratio (width over height).
///
/// Hard constant of the product; never a runtime parameter.
pub const CROP_ASPECT_RATIO: f64 = 65.0 / 24.0;

/// Errors from crop-region resolution.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// The source image has a zero dimension; nothing can be cropped.
    #[error("Source image has an empty dimension ({width}x{height})")]
    EmptySource { width: u32, height: u32 },
}

/// Compute the dimensions of the bounding box for a rotated image.
///
/// When an image is rotated about its center, the corners extend beyond the
/// original bounds. The smallest axis-aligned box containing the rotated
/// image is:
///
/// ```text
/// bbox_w = |cos θ| * W + |sin θ| * H
/// bbox_h = |sin θ| * W + |cos θ| * H
/// ```
///
/// Symmetric in ±θ. A zero angle degenerates to the source dimensions
/// exactly (no-op rotation path).
pub fn rotated_bounds(width: u32, height: u32, angle_degrees: f64) -> (u32, u32) {
    // Fast path: no rotation (exact, no float rounding)
    if angle_degrees.abs() < 0.001 {
        return (width, height);
    }

    let angle_rad = angle_degrees.to_radians();
    let cos = angle_rad.cos().abs();
    let sin = angle_rad.sin().abs();

    let w = width as f64;
    let h = height as f64;

    let new_w = (w * cos + h * sin).round() as u32;
    let new_h = (w * sin + h * cos).round() as u32;

    (new_w.max(1), new_h.max(1))
}

/// Resolve the confirmed crop window into a pixel rectangle.
///
/// The window is interpreted relative to the bounding box of the source
/// rotated by `rotation_degrees`. The result always honors the fixed 65:24
/// aspect ratio within rounding: height is derived from the resolved width,
/// and if that overflows the box the width is re-derived from the clamped
/// height instead. Offsets are shifted so the region stays inside the box
/// rather than failing.
///
/// # Errors
///
/// Only degenerate input fails: a source with a zero dimension.
pub fn resolve_crop_region(
    source_width: u32,
    source_height: u32,
    rotation_degrees: f64,
    crop: NormalizedCrop,
) -> Result<PixelRegion, GeometryError> {
    if source_width == 0 || source_height == 0 {
        return Err(GeometryError::EmptySource {
            width: source_width,
            height: source_height,
        });
    }

    let (bbox_w, bbox_h) = rotated_bounds(source_width, source_height, rotation_degrees);
    let bw = bbox_w as f64;
    let bh = bbox_h as f64;

    // Resolve the width first, then derive the height from the fixed ratio.
    let norm_width = crop.width.clamp(0.0, 1.0);
    let mut width = (norm_width * bw).round().max(1.0) as u32;
    width = width.min(bbox_w);

    let mut height = ((width as f64) / CROP_ASPECT_RATIO).round().max(1.0) as u32;
    if height > bbox_h {
        // The window is taller than the box allows; clamp the height and
        // re-derive the width from the ratio.
        height = bbox_h;
        let rederived = ((height as f64) * CROP_ASPECT_RATIO).round() as u32;
        width = rederived.clamp(1, bbox_w);
    }

    let mut x = (crop.x.clamp(0.0, 1.0) * bw).round() as u32;
    let mut y = (crop.y.clamp(0.0, 1.0) * bh).round() as u32;

    // Shift back inside the box instead of rejecting edge selections.
    if x + width > bbox_w {
        x = bbox_w - width;
    }
    if y + height > bbox_h {
        y = bbox_h - height;
    }

    Ok(PixelRegion::new(x, y, width, height))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
