//! Export boundary: snapshot the visible scene through an external
//! rasterizer. Encoding to PNG/JPEG/PDF happens outside the engine; this
//! module only guarantees the viewport choreography around the capture.

use thiserror::Error;

use crate::document::Document;
use crate::util::time;
use crate::viewport::Viewport;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid pixel ratio: {0}")]
    InvalidPixelRatio(f32),

    #[error("rasterizer failed: {0}")]
    Rasterize(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
    Pdf,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpeg",
            ExportFormat::Pdf => "pdf",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Output pixels per document unit, e.g. 2.0 for a 2x raster.
    pub pixel_ratio: f32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Png,
            pixel_ratio: 2.0,
        }
    }
}

/// External rendering collaborator: rasterize the document at identity
/// transform into an opaque encoded buffer (or data URI bytes).
pub trait Rasterizer {
    fn snapshot(&mut self, document: &Document, pixel_ratio: f32)
        -> Result<Vec<u8>, ExportError>;
}

/// Capture the scene for export: reset the viewport to identity, rasterize,
/// then restore the prior viewport. The whole sequence is synchronous so no
/// intervening render observes the wrong transform, and the viewport is
/// restored even when the rasterizer fails.
pub fn export_snapshot<R: Rasterizer>(
    viewport: &mut Viewport,
    rasterizer: &mut R,
    document: &Document,
    options: &ExportOptions,
) -> Result<Vec<u8>, ExportError> {
    if !(options.pixel_ratio > 0.0) {
        return Err(ExportError::InvalidPixelRatio(options.pixel_ratio));
    }

    let previous = *viewport;
    viewport.reset();
    let result = rasterizer.snapshot(document, options.pixel_ratio);
    *viewport = previous;

    if let Err(err) = &result {
        log::error!("export failed: {err}");
    }
    result
}

/// Download name for an exported card.
pub fn export_file_name(format: ExportFormat) -> String {
    format!("wedding-card-{}.{}", time::timestamp_secs(), format.extension())
}
