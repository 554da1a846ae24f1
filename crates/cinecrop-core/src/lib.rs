//! Cinecrop Core - Image processing library
//!
//! This crate provides the core processing functionality for Cinecrop:
//! decoding uploaded photos, resolving the cinematic 65:24 crop from an
//! interactive selection, extracting the rotated crop region, and applying
//! named film-style color treatments.

pub mod decode;
pub mod encode;
pub mod geometry;
pub mod session;
pub mod style;
pub mod transform;

pub use geometry::{resolve_crop_region, rotated_bounds, CROP_ASPECT_RATIO};
pub use session::{CommitOutcome, OpTicket, Session};
pub use style::{apply_style, apply_style_by_id, LocalStyler, StyleApplier, StyleError};
pub use transform::{extract, rotate_surface, InterpolationFilter, RenderError};

/// Minimum zoom factor for the interactive crop.
pub const ZOOM_MIN: f32 = 1.0;
/// Maximum zoom factor for the interactive crop.
pub const ZOOM_MAX: f32 = 3.0;
/// Step used by the zoom slider.
pub const ZOOM_STEP: f32 = 0.01;

/// Minimum rotation for the interactive crop, in degrees.
pub const ROTATION_MIN_DEGREES: f64 = -20.0;
/// Maximum rotation for the interactive crop, in degrees.
pub const ROTATION_MAX_DEGREES: f64 = 20.0;
/// Step used by the rotation slider.
pub const ROTATION_STEP_DEGREES: f64 = 0.1;

/// Clamp a zoom factor to the supported range.
pub fn clamp_zoom(zoom: f32) -> f32 {
    zoom.clamp(ZOOM_MIN, ZOOM_MAX)
}

/// Clamp a rotation angle to the supported range.
pub fn clamp_rotation(degrees: f64) -> f64 {
    degrees.clamp(ROTATION_MIN_DEGREES, ROTATION_MAX_DEGREES)
}

/// Crop window expressed as fractions of the rotated bounding box.
///
/// (0.0, 0.0) is the top-left corner; width/height are relative to the
/// box dimensions. Values outside [0, 1] are clamped when the window is
/// resolved to pixels.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NormalizedCrop {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl NormalizedCrop {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Window covering the whole bounding box.
    pub fn full() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }
}

/// The confirmed state of the interactive crop, consumed once at
/// confirmation time to resolve a [`PixelRegion`].
///
/// The window already reflects where the user panned and zoomed; zoom and
/// rotation are carried alongside so the extraction pipeline and any
/// preview renderer see the same final state.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CropSelection {
    /// Confirmed crop window, relative to the rotated bounding box.
    pub crop: NormalizedCrop,
    /// Zoom factor, clamped to [`ZOOM_MIN`]..=[`ZOOM_MAX`].
    pub zoom: f32,
    /// Rotation in degrees, clamped to the slider range.
    pub rotation_degrees: f64,
}

impl CropSelection {
    /// Create a selection with zoom and rotation clamped to their ranges.
    pub fn new(crop: NormalizedCrop, zoom: f32, rotation_degrees: f64) -> Self {
        Self {
            crop,
            zoom: clamp_zoom(zoom),
            rotation_degrees: clamp_rotation(rotation_degrees),
        }
    }
}

/// An axis-aligned rectangle in rotated-bounding-box pixel space.
///
/// Produced by [`geometry::resolve_crop_region`]; always non-empty and
/// fully contained within the bounding box it was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PixelRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// A finished, encoded image produced by the extraction or style pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultImage {
    /// Encoded JPEG bytes.
    pub bytes: Vec<u8>,
    /// Pixel width of the encoded image.
    pub width: u32,
    /// Pixel height of the encoded image.
    pub height: u32,
}

impl ResultImage {
    pub fn new(bytes: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            bytes,
            width,
            height,
        }
    }
}

/// The fixed enumeration of film styles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FilmStyle {
    /// Moody high-contrast black and white.
    BlackAndWhite,
    /// Warm, nostalgic Kodak Gold 200 look.
    #[default]
    KodakGold,
    /// Classic low-contrast black and white inspired by Ilford HP5.
    Hp5,
    /// Kodak Portra 400: natural colors and low contrast.
    KodakPortra,
    /// Cinestill 800T: tungsten-balanced with a cool shift.
    Cinestill800T,
    /// Fuji Superia: punchy saturation with a slight warm shift.
    FujiSuperia,
}

impl FilmStyle {
    /// Every style in display order.
    pub const ALL: [FilmStyle; 6] = [
        FilmStyle::KodakGold,
        FilmStyle::KodakPortra,
        FilmStyle::FujiSuperia,
        FilmStyle::Cinestill800T,
        FilmStyle::BlackAndWhite,
        FilmStyle::Hp5,
    ];

    /// Stable string identifier used across the API boundary.
    pub fn id(self) -> &'static str {
        match self {
            FilmStyle::BlackAndWhite => "black_and_white",
            FilmStyle::KodakGold => "kodak_gold",
            FilmStyle::Hp5 => "hp5",
            FilmStyle::KodakPortra => "kodak_portra",
            FilmStyle::Cinestill800T => "cinestill_800t",
            FilmStyle::FujiSuperia => "fuji_superia",
        }
    }

    /// Parse a style identifier.
    ///
    /// Unknown identifiers return `None`; the filter pipeline treats that
    /// as the identity style rather than an error.
    pub fn parse(id: &str) -> Option<FilmStyle> {
        match id.trim().to_ascii_lowercase().as_str() {
            "black_and_white" => Some(FilmStyle::BlackAndWhite),
            "kodak_gold" => Some(FilmStyle::KodakGold),
            "hp5" => Some(FilmStyle::Hp5),
            "kodak_portra" => Some(FilmStyle::KodakPortra),
            "cinestill_800t" => Some(FilmStyle::Cinestill800T),
            "fuji_superia" => Some(FilmStyle::FujiSuperia),
            _ => None,
        }
    }

    /// The color-adjustment recipe for this style.
    pub fn recipe(self) -> StyleRecipe {
        match self {
            FilmStyle::BlackAndWhite => StyleRecipe {
                grayscale: true,
                contrast: 1.4,
                brightness: 1.05,
                ..StyleRecipe::IDENTITY
            },
            FilmStyle::KodakGold => StyleRecipe {
                sepia: 0.25,
                saturate: 1.2,
                contrast: 1.05,
                brightness: 1.05,
                ..StyleRecipe::IDENTITY
            },
            FilmStyle::Hp5 => StyleRecipe {
                grayscale: true,
                contrast: 0.85,
                brightness: 1.1,
                ..StyleRecipe::IDENTITY
            },
            FilmStyle::KodakPortra => StyleRecipe {
                saturate: 1.15,
                contrast: 0.9,
                brightness: 1.05,
                ..StyleRecipe::IDENTITY
            },
            FilmStyle::Cinestill800T => StyleRecipe {
                contrast: 1.1,
                saturate: 1.3,
                hue_rotate_degrees: -10.0,
                brightness: 1.05,
                ..StyleRecipe::IDENTITY
            },
            FilmStyle::FujiSuperia => StyleRecipe {
                saturate: 1.2,
                contrast: 1.1,
                brightness: 1.05,
                hue_rotate_degrees: 5.0,
                ..StyleRecipe::IDENTITY
            },
        }
    }

    /// Prose description of the style, used as the prompt for the remote
    /// generative path.
    pub fn description(self) -> &'static str {
        match self {
            FilmStyle::BlackAndWhite => {
                "A moody, high-contrast black and white film photo with deep blacks \
                 and bright whites. Add a slight film grain."
            }
            FilmStyle::KodakGold => {
                "The warm, nostalgic look of Kodak Gold 200 film from the 90s. \
                 Slightly saturated colors, warm tones, and soft grain."
            }
            FilmStyle::Hp5 => {
                "A classic black and white film look inspired by Ilford HP5. Low \
                 contrast, rich mid-tones, and a fine, subtle grain."
            }
            FilmStyle::KodakPortra => {
                "Emulates the look of Kodak Portra 400 film, known for its beautiful \
                 skin tones, fine grain, and low contrast. Excellent for portraits \
                 and natural colors."
            }
            FilmStyle::Cinestill800T => {
                "The look of Cinestill 800T tungsten film: cool shadows, glowing \
                 highlights, and saturated night-time color."
            }
            FilmStyle::FujiSuperia => {
                "The look of Fuji Superia consumer film: punchy saturation, crisp \
                 contrast, and a slight green-gold cast."
            }
        }
    }
}

/// The color adjustments that make up one film style.
///
/// Each field is a standalone adjustment over the whole image; the filter
/// engine composes them in a fixed order. Identity values leave the image
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StyleRecipe {
    /// Fully desaturate before any other adjustment.
    pub grayscale: bool,
    /// Saturation multiplier (1.0 = unchanged).
    pub saturate: f32,
    /// Strength of the warm sepia tint, 0.0..=1.0.
    pub sepia: f32,
    /// Contrast multiplier about the mid-point (1.0 = unchanged).
    pub contrast: f32,
    /// Brightness multiplier (1.0 = unchanged).
    pub brightness: f32,
    /// Hue rotation in degrees (0.0 = unchanged).
    pub hue_rotate_degrees: f32,
}

impl StyleRecipe {
    /// The no-op recipe: output equals input.
    pub const IDENTITY: StyleRecipe = StyleRecipe {
        grayscale: false,
        saturate: 1.0,
        sepia: 0.0,
        contrast: 1.0,
        brightness: 1.0,
        hue_rotate_degrees: 0.0,
    };

    /// Check whether applying this recipe would change any pixel.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for StyleRecipe {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_is_kodak_gold() {
        assert_eq!(FilmStyle::default(), FilmStyle::KodakGold);
    }

    #[test]
    fn test_style_id_round_trip() {
        for style in FilmStyle::ALL {
            assert_eq!(FilmStyle::parse(style.id()), Some(style));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(FilmStyle::parse("HP5"), Some(FilmStyle::Hp5));
        assert_eq!(
            FilmStyle::parse("  Kodak_Gold "),
            Some(FilmStyle::KodakGold)
        );
    }

    #[test]
    fn test_parse_unknown_returns_none() {
        assert_eq!(FilmStyle::parse(""), None);
        assert_eq!(FilmStyle::parse("velvia"), None);
    }

    #[test]
    fn test_every_style_has_a_recipe() {
        for style in FilmStyle::ALL {
            // The table is fixed; no style maps to the identity recipe.
            assert!(!style.recipe().is_identity(), "{:?}", style);
        }
    }

    #[test]
    fn test_recipe_table_values() {
        let bw = FilmStyle::BlackAndWhite.recipe();
        assert!(bw.grayscale);
        assert_eq!(bw.contrast, 1.4);
        assert_eq!(bw.brightness, 1.05);

        let gold = FilmStyle::KodakGold.recipe();
        assert!(!gold.grayscale);
        assert_eq!(gold.sepia, 0.25);
        assert_eq!(gold.saturate, 1.2);
        assert_eq!(gold.contrast, 1.05);

        let hp5 = FilmStyle::Hp5.recipe();
        assert!(hp5.grayscale);
        assert_eq!(hp5.contrast, 0.85);
        assert_eq!(hp5.brightness, 1.1);

        let portra = FilmStyle::KodakPortra.recipe();
        assert_eq!(portra.saturate, 1.15);
        assert_eq!(portra.contrast, 0.9);

        let cinestill = FilmStyle::Cinestill800T.recipe();
        assert_eq!(cinestill.hue_rotate_degrees, -10.0);
        assert_eq!(cinestill.saturate, 1.3);

        let superia = FilmStyle::FujiSuperia.recipe();
        assert_eq!(superia.hue_rotate_degrees, 5.0);
        assert_eq!(superia.contrast, 1.1);
    }

    #[test]
    fn test_identity_recipe() {
        assert!(StyleRecipe::IDENTITY.is_identity());
        assert!(StyleRecipe::default().is_identity());

        let mut recipe = StyleRecipe::IDENTITY;
        recipe.saturate = 1.2;
        assert!(!recipe.is_identity());
    }

    #[test]
    fn test_crop_selection_clamps_ranges() {
        let sel = CropSelection::new(NormalizedCrop::full(), 5.0, 45.0);
        assert_eq!(sel.zoom, ZOOM_MAX);
        assert_eq!(sel.rotation_degrees, ROTATION_MAX_DEGREES);

        let sel = CropSelection::new(NormalizedCrop::full(), 0.5, -90.0);
        assert_eq!(sel.zoom, ZOOM_MIN);
        assert_eq!(sel.rotation_degrees, ROTATION_MIN_DEGREES);
    }

    #[test]
    fn test_pixel_region_aspect_ratio() {
        let region = PixelRegion::new(0, 0, 650, 240);
        assert!((region.aspect_ratio() - 65.0 / 24.0).abs() < 1e-9);
    }
}
