//! Region read-back and extraction.
//!
//! `extract` is the whole raster pipeline in one call: rotate the source
//! onto the working surface, read back the resolved region, and encode the
//! sub-rectangle alone as the intermediate artifact.

use crate::decode::DecodedImage;
use crate::encode::{encode_result, INTERMEDIATE_JPEG_QUALITY};
use crate::{PixelRegion, ResultImage};

use super::rotation::{rotate_surface, InterpolationFilter};
use super::RenderError;

/// Read back a sub-rectangle from a working surface.
///
/// The region is clamped to the surface bounds; a selection hanging over an
/// edge yields the in-bounds part rather than failing. The output is always
/// at least 1x1.
pub fn read_region(surface: &DecodedImage, region: PixelRegion) -> DecodedImage {
    let left = region.x.min(surface.width.saturating_sub(1));
    let top = region.y.min(surface.height.saturating_sub(1));
    let right = (left + region.width).min(surface.width);
    let bottom = (top + region.height).min(surface.height);

    let out_width = right.saturating_sub(left).max(1);
    let out_height = bottom.saturating_sub(top).max(1);

    let mut output = vec![0u8; (out_width * out_height * 3) as usize];

    // Copy row by row
    for y in 0..out_height {
        let src_y = top + y;
        let src_row_start = ((src_y * surface.width + left) * 3) as usize;
        let dst_row_start = (y * out_width * 3) as usize;
        let row_len = (out_width * 3) as usize;

        output[dst_row_start..dst_row_start + row_len]
            .copy_from_slice(&surface.pixels[src_row_start..src_row_start + row_len]);
    }

    DecodedImage {
        width: out_width,
        height: out_height,
        pixels: output,
    }
}

/// Extract a rotated crop region as raw pixels.
///
/// Used by the preview path, which keeps working in pixel space.
pub fn extract_decoded(
    image: &DecodedImage,
    rotation_degrees: f64,
    region: PixelRegion,
    filter: InterpolationFilter,
) -> Result<DecodedImage, RenderError> {
    let surface = rotate_surface(image, rotation_degrees, filter)?;
    Ok(read_region(&surface, region))
}

/// Extract a rotated crop region and encode it as the intermediate JPEG.
///
/// Export path: always rotates with Lanczos3 and encodes at full quality,
/// since this artifact feeds the style stage.
pub fn extract(
    image: &DecodedImage,
    rotation_degrees: f64,
    region: PixelRegion,
) -> Result<ResultImage, RenderError> {
    let cropped = extract_decoded(
        image,
        rotation_degrees,
        region,
        InterpolationFilter::Lanczos3,
    )?;
    Ok(encode_result(&cropped, INTERMEDIATE_JPEG_QUALITY)?)
}
