//! Single-session state for the crop-and-style workflow.
//!
//! One session owns at most one source image, one cropped intermediate, and
//! one "current result" slot. Operations are synchronous; the hosting event
//! loop invokes them one at a time. For hosts that complete operations out
//! of band, the ticket API sequences completions by invocation order: a
//! result whose ticket has been superseded by a newer invocation is
//! discarded instead of overwriting the slot.

use thiserror::Error;

use crate::decode::{decode_image, DecodeError, DecodedImage};
use crate::geometry::{resolve_crop_region, GeometryError};
use crate::style;
use crate::transform::{extract, RenderError};
use crate::{CropSelection, FilmStyle, ResultImage};

/// Errors from session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No source image has been loaded.
    #[error("No source image loaded")]
    NoSource,

    /// A style was requested before any crop was confirmed.
    #[error("No cropped image available; confirm a crop first")]
    NoCrop,

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Handle for one in-flight operation, issued by [`Session::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpTicket(u64);

/// Outcome of committing an operation's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The result is now the session's current result.
    Stored,
    /// A newer operation was begun after this one; the result was dropped.
    Superseded,
}

/// The state of one editing session.
#[derive(Debug, Default)]
pub struct Session {
    source: Option<DecodedImage>,
    cropped: Option<ResultImage>,
    result: Option<ResultImage>,
    issued: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode and adopt a new source image, discarding all downstream state.
    ///
    /// On decode failure the session is left exactly as it was.
    pub fn load_source(&mut self, bytes: &[u8]) -> Result<(), SessionError> {
        let image = decode_image(bytes)?;
        self.source = Some(image);
        self.cropped = None;
        self.result = None;
        Ok(())
    }

    /// Clear everything, returning to the initial state.
    pub fn reset(&mut self) {
        self.source = None;
        self.cropped = None;
        self.result = None;
    }

    /// The loaded source image, if any.
    pub fn source(&self) -> Option<&DecodedImage> {
        self.source.as_ref()
    }

    /// The cropped intermediate from the last confirmed crop, if any.
    pub fn cropped(&self) -> Option<&ResultImage> {
        self.cropped.as_ref()
    }

    /// The current styled result, if any.
    pub fn result(&self) -> Option<&ResultImage> {
        self.result.as_ref()
    }

    /// Resolve and extract the confirmed crop.
    ///
    /// Stores the cropped intermediate and clears any previous styled
    /// result (it was derived from the old crop). A failure leaves the
    /// previous crop and result in place.
    pub fn confirm_crop(&mut self, selection: &CropSelection) -> Result<&ResultImage, SessionError> {
        let source = self.source.as_ref().ok_or(SessionError::NoSource)?;

        let region = resolve_crop_region(
            source.width,
            source.height,
            selection.rotation_degrees,
            selection.crop,
        )?;
        let cropped = extract(source, selection.rotation_degrees, region)?;

        self.result = None;
        Ok(self.cropped.insert(cropped))
    }

    /// Apply a film style to the cropped intermediate.
    ///
    /// Each invocation produces a fresh result; the previous one is
    /// superseded. A failure leaves the previous result in place.
    pub fn apply_style(&mut self, style: FilmStyle) -> Result<&ResultImage, SessionError> {
        let cropped = self.cropped.as_ref().ok_or(SessionError::NoCrop)?;
        let styled = style::apply_style(&cropped.bytes, style)?;
        Ok(self.result.insert(styled))
    }

    /// Apply a style selected by string identifier; unknown identifiers
    /// fall back to the identity treatment.
    pub fn apply_style_by_id(&mut self, style_id: &str) -> Result<&ResultImage, SessionError> {
        let cropped = self.cropped.as_ref().ok_or(SessionError::NoCrop)?;
        let styled = style::apply_style_by_id(&cropped.bytes, style_id)?;
        Ok(self.result.insert(styled))
    }

    /// Issue a ticket for an operation whose result will be committed later.
    pub fn begin(&mut self) -> OpTicket {
        self.issued += 1;
        OpTicket(self.issued)
    }

    /// Commit an out-of-band operation result into the current-result slot.
    ///
    /// Last writer wins by invocation order: only the most recently issued
    /// ticket may store; anything older is discarded so a stale completion
    /// can never overwrite a newer one.
    pub fn commit_result(&mut self, ticket: OpTicket, image: ResultImage) -> CommitOutcome {
        if ticket.0 < self.issued {
            return CommitOutcome::Superseded;
        }
        self.result = Some(image);
        CommitOutcome::Stored
    }
}

/// Suggested filename for downloading a result, stamped by the caller.
pub fn download_filename(timestamp_ms: u64) -> String {
    format!("cinematic-edit-{timestamp_ms}.jpg")
}
