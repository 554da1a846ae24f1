//! Film style application.
//!
//! Applies a [`StyleRecipe`] to RGB pixel data and re-encodes the result.
//!
//! ## Adjustment Order
//! 1. Grayscale
//! 2. Sepia tint
//! 3. Saturation
//! 4. Contrast
//! 5. Brightness
//! 6. Hue rotation
//!
//! Each adjustment is standalone and identity-skipped; the recipes only
//! carry parameter values, so the composition is a fixed-order fold rather
//! than per-style logic.

use palette::{Hsl, IntoColor, Srgb};
use thiserror::Error;

use crate::decode::decode_image;
use crate::encode::{encode_result, FINAL_JPEG_QUALITY};
use crate::transform::RenderError;
use crate::{FilmStyle, ResultImage, StyleRecipe};

/// One capability: bitmap in, styled bitmap out.
///
/// Both the local deterministic engine ([`LocalStyler`]) and the remote
/// generative client implement this, so the calling UI is agnostic to the
/// path it holds.
pub trait StyleApplier {
    /// Apply `style` to an encoded image, returning new encoded bytes.
    fn apply_style(&self, image: &[u8], style: FilmStyle) -> Result<Vec<u8>, StyleError>;
}

/// Failures surfaced through the [`StyleApplier`] capability.
#[derive(Debug, Error)]
pub enum StyleError {
    /// Local pipeline failure (decode, surface, or encode).
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The upstream service declined the request due to policy.
    #[error("Request declined by the upstream service: {0}")]
    BlockedContent(String),

    /// The upstream response contained no image payload.
    #[error("The upstream service returned no image")]
    NoImageReturned,

    /// Any other upstream failure: network, quota, malformed response.
    #[error("Upstream service failure: {0}")]
    Upstream(String),
}

/// The local deterministic style path.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStyler;

impl StyleApplier for LocalStyler {
    fn apply_style(&self, image: &[u8], style: FilmStyle) -> Result<Vec<u8>, StyleError> {
        Ok(apply_style(image, style)?.bytes)
    }
}

/// Apply a film style to an encoded bitmap.
///
/// Decodes the input, runs the recipe over every pixel, and re-encodes as
/// JPEG at the fixed export quality. Deterministic: identical input bytes
/// and style always yield identical output bytes.
///
/// # Errors
///
/// Fails with [`RenderError::Decode`] when the input bitmap is unreadable.
pub fn apply_style(bitmap: &[u8], style: FilmStyle) -> Result<ResultImage, RenderError> {
    apply_recipe_to_bitmap(bitmap, &style.recipe())
}

/// Apply a style selected by string identifier.
///
/// Unknown identifiers fall back to the identity recipe rather than
/// failing; the output is the input re-encoded unchanged.
pub fn apply_style_by_id(bitmap: &[u8], style_id: &str) -> Result<ResultImage, RenderError> {
    let recipe = FilmStyle::parse(style_id)
        .map(FilmStyle::recipe)
        .unwrap_or(StyleRecipe::IDENTITY);
    apply_recipe_to_bitmap(bitmap, &recipe)
}

fn apply_recipe_to_bitmap(bitmap: &[u8], recipe: &StyleRecipe) -> Result<ResultImage, RenderError> {
    let mut image = decode_image(bitmap)?;
    apply_recipe(&mut image.pixels, recipe);
    Ok(encode_result(&image, FINAL_JPEG_QUALITY)?)
}

/// Apply a recipe to RGB pixel data in place.
pub fn apply_recipe(pixels: &mut [u8], recipe: &StyleRecipe) {
    // Early exit for the identity recipe
    if recipe.is_identity() {
        return;
    }

    for chunk in pixels.chunks_exact_mut(3) {
        let mut r = chunk[0] as f32 / 255.0;
        let mut g = chunk[1] as f32 / 255.0;
        let mut b = chunk[2] as f32 / 255.0;

        if recipe.grayscale {
            (r, g, b) = apply_grayscale(r, g, b);
        }
        (r, g, b) = apply_sepia(r, g, b, recipe.sepia);
        (r, g, b) = apply_saturate(r, g, b, recipe.saturate);
        (r, g, b) = apply_contrast(r, g, b, recipe.contrast);
        (r, g, b) = apply_brightness(r, g, b, recipe.brightness);
        (r, g, b) = apply_hue_rotate(r, g, b, recipe.hue_rotate_degrees);

        chunk[0] = (r.clamp(0.0, 1.0) * 255.0) as u8;
        chunk[1] = (g.clamp(0.0, 1.0) * 255.0) as u8;
        chunk[2] = (b.clamp(0.0, 1.0) * 255.0) as u8;
    }
}

/// Calculate luminance using ITU-R BT.709 coefficients.
#[inline]
fn luminance(r: f32, g: f32, b: f32) -> f32 {
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Replace all channels with the luminance.
#[inline]
fn apply_grayscale(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let gray = luminance(r, g, b);
    (gray, gray, gray)
}

/// Blend toward the sepia matrix by `amount` (0.0 = unchanged, 1.0 = full).
#[inline]
fn apply_sepia(r: f32, g: f32, b: f32, amount: f32) -> (f32, f32, f32) {
    if amount == 0.0 {
        return (r, g, b);
    }
    let sr = 0.393 * r + 0.769 * g + 0.189 * b;
    let sg = 0.349 * r + 0.686 * g + 0.168 * b;
    let sb = 0.272 * r + 0.534 * g + 0.131 * b;
    (
        r + (sr - r) * amount,
        g + (sg - g) * amount,
        b + (sb - b) * amount,
    )
}

/// Scale the distance of each channel from the luminance.
///
/// factor < 1 desaturates toward gray, factor > 1 intensifies color.
#[inline]
fn apply_saturate(r: f32, g: f32, b: f32, factor: f32) -> (f32, f32, f32) {
    if factor == 1.0 {
        return (r, g, b);
    }
    let gray = luminance(r, g, b);
    (
        gray + (r - gray) * factor,
        gray + (g - gray) * factor,
        gray + (b - gray) * factor,
    )
}

/// Scale the distance of each channel from the mid-point.
#[inline]
fn apply_contrast(r: f32, g: f32, b: f32, factor: f32) -> (f32, f32, f32) {
    if factor == 1.0 {
        return (r, g, b);
    }
    let midpoint = 0.5;
    (
        (r - midpoint) * factor + midpoint,
        (g - midpoint) * factor + midpoint,
        (b - midpoint) * factor + midpoint,
    )
}

/// Multiply every channel.
#[inline]
fn apply_brightness(r: f32, g: f32, b: f32, factor: f32) -> (f32, f32, f32) {
    if factor == 1.0 {
        return (r, g, b);
    }
    (r * factor, g * factor, b * factor)
}

/// Rotate the hue through HSL space.
#[inline]
fn apply_hue_rotate(r: f32, g: f32, b: f32, degrees: f32) -> (f32, f32, f32) {
    if degrees == 0.0 {
        return (r, g, b);
    }
    let rgb = Srgb::new(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0));
    let mut hsl: Hsl = rgb.into_color();
    hsl.hue += degrees;
    let rotated: Srgb = hsl.into_color();
    (rotated.red, rotated.green, rotated.blue)
}
