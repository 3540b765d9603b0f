//! PDF document handle backed by hayro.
//!
//! The handle is confined to the conversion worker thread; pages render
//! strictly one at a time against a single document handle.

use std::sync::Arc;

use hayro::{render, Pdf, RenderSettings};
use hayro_interpret::InterpreterSettings;

use crate::{Error, Result};

/// An open PDF document.
pub(crate) struct Document {
    pdf: Pdf,
    interpreter: InterpreterSettings,
}

impl Document {
    /// Parse a document from raw bytes.
    ///
    /// Empty input and documents with no pages are rejected up front as
    /// invalid; so is anything hayro cannot parse.
    pub(crate) fn load(bytes: Vec<u8>) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::InvalidDocument("empty source".to_string()));
        }

        let data = Arc::new(bytes);
        let pdf =
            Pdf::new(data).map_err(|e| Error::InvalidDocument(format!("parse failed: {:?}", e)))?;

        if pdf.pages().is_empty() {
            return Err(Error::InvalidDocument(
                "document has no pages".to_string(),
            ));
        }

        Ok(Self {
            pdf,
            interpreter: InterpreterSettings::default(),
        })
    }

    pub(crate) fn page_count(&self) -> u32 {
        self.pdf.pages().len() as u32
    }

    /// Render one page (1-based) to PNG bytes at the given scale.
    ///
    /// The raster surface is sized from the page's intrinsic dimensions
    /// multiplied by `scale`, rounded down.
    pub(crate) fn render_page(&self, number: u32, scale: f32) -> Result<Vec<u8>> {
        let pages = self.pdf.pages();
        let page = (number as usize)
            .checked_sub(1)
            .and_then(|index| pages.get(index))
            .ok_or_else(|| Error::PageRenderFailed {
                page: number,
                reason: "page out of range".to_string(),
            })?;

        let settings = RenderSettings {
            x_scale: scale,
            y_scale: scale,
            ..Default::default()
        };

        let pixmap = render(page, &self.interpreter, &settings);
        pixmap.into_png().map_err(|e| Error::PageRenderFailed {
            page: number,
            reason: format!("PNG encoding failed: {:?}", e),
        })
    }
}
