//! Image import: files, byte buffers and URLs.
//!
//! File bytes are decoded immediately to recover natural pixel dimensions.
//! URL loads resolve asynchronously in the host; the importer hands out a
//! generation-tagged ticket so a result that lands after the document was
//! cleared (or replaced) is detected and dropped instead of mutating a
//! context it no longer belongs to. Nothing here touches the document on
//! failure.

use egui::Pos2;
use thiserror::Error;

use crate::element::{factory, Element};

/// Where newly imported images land on the canvas.
pub const IMPORT_ANCHOR: Pos2 = Pos2::new(100.0, 100.0);

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("empty image data")]
    Empty,
}

/// Ticket for an in-flight URL load. Valid only for the importer generation
/// it was issued under.
#[derive(Debug, Clone)]
pub struct PendingImport {
    url: String,
    generation: u64,
}

impl PendingImport {
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Default)]
pub struct Importer {
    generation: u64,
}

impl Importer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate all outstanding URL tickets, e.g. when the document is
    /// cleared or a different design is loaded.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Decode image bytes and build a ready-to-add element at the import
    /// anchor, sized to the natural dimensions. `src` is the source string
    /// to remember on the element, if any.
    pub fn import_bytes(&self, bytes: &[u8], src: Option<String>) -> Result<Element, ImportError> {
        if bytes.is_empty() {
            return Err(ImportError::Empty);
        }
        let decoded = image::load_from_memory(bytes)?;
        log::debug!("decoded import: {}x{}", decoded.width(), decoded.height());
        Ok(factory::create_image(
            IMPORT_ANCHOR,
            decoded.width() as f32,
            decoded.height() as f32,
            src,
        ))
    }

    /// Like [`Importer::import_bytes`], but rejects files whose name does
    /// not look like a supported raster format before decoding.
    pub fn import_file(&self, file_name: &str, bytes: &[u8]) -> Result<Element, ImportError> {
        if !is_supported_image(file_name) {
            log::warn!("dropped file is not a supported type: {file_name}");
            return Err(ImportError::UnsupportedType(file_name.to_owned()));
        }
        self.import_bytes(bytes, Some(file_name.to_owned()))
    }

    /// Start a URL import. The host fetches/decodes and calls
    /// [`Importer::complete_url`] with the natural dimensions.
    pub fn begin_url(&self, url: &str) -> PendingImport {
        PendingImport {
            url: url.to_owned(),
            generation: self.generation,
        }
    }

    /// Resolve a URL import. Returns the element to add, or `None` when the
    /// ticket went stale; stale results are a silent no-op, not an error.
    pub fn complete_url(&self, ticket: PendingImport, width: f32, height: f32) -> Option<Element> {
        if ticket.generation != self.generation {
            log::debug!("dropping stale image load for {}", ticket.url);
            return None;
        }
        Some(factory::create_image(
            IMPORT_ANCHOR,
            width,
            height,
            Some(ticket.url),
        ))
    }
}

/// Extension-based check for droppable files, mirroring the formats the
/// decoder handles.
pub fn is_supported_image(file_name: &str) -> bool {
    let ext = file_name
        .rsplit('.')
        .next()
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    matches!(ext.as_str(), "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp")
}
