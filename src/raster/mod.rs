//! PDF-to-image conversion.
//!
//! [`Rasterizer::convert`] turns a PDF source into a [`PageStream`]: a lazy,
//! finite sequence of PNG page images emitted one page at a time in strictly
//! ascending page order, with cooperative cancellation. The whole-document
//! latency of a multi-page PDF is dominated by page count, so callers get
//! each page as soon as it exists instead of waiting for the last one.

mod engine;
mod stream;

pub use stream::PageStream;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::path::PathBuf;

use crate::{Error, Result};

/// Where a document's bytes come from.
#[derive(Debug, Clone)]
pub enum PdfSource {
    /// A document reachable over HTTP(S).
    Url(String),
    /// A document on the local filesystem.
    File(PathBuf),
}

/// The options that should be applied when rendering a document.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// By how much the intrinsic page size should be scaled. Values below
    /// 1.0 reduce fidelity; cost grows roughly quadratically above it.
    pub scale: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

/// One page rendered as a PNG image.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// 1-based page number.
    pub number: u32,
    /// Pixel width of the rendered image.
    pub width: u32,
    /// Pixel height of the rendered image.
    pub height: u32,
    /// Encoded PNG bytes.
    pub png_data: Vec<u8>,
}

impl RenderedPage {
    /// The image as a `data:image/png;base64,…` URL, suitable for direct
    /// embedding in an `img` tag.
    pub fn data_url(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png_data))
    }
}

/// Converts PDF sources into page-image sequences.
///
/// Cheap to create and clone; conversions share nothing beyond the HTTP
/// connection pool, and every invocation starts from scratch.
#[derive(Clone)]
pub struct Rasterizer {
    http: reqwest::Client,
}

impl Rasterizer {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Build a rasterizer that fetches remote sources with the given client.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Open `source` and start rendering its pages at `scale`.
    ///
    /// Returns once the document is open, at which point
    /// [`PageStream::page_count`] is known; rendering continues on a
    /// dedicated worker thread. An empty, unfetchable, or unparseable source
    /// is an [`Error::InvalidDocument`].
    pub async fn convert(&self, source: PdfSource, options: RenderOptions) -> Result<PageStream> {
        if !options.scale.is_finite() || options.scale <= 0.0 {
            return Err(Error::Config(format!(
                "scale must be a positive finite number, got {}",
                options.scale
            )));
        }

        let mut staged_path = None;
        let input = match source {
            PdfSource::Url(raw) => {
                if raw.trim().is_empty() {
                    return Err(Error::InvalidDocument("empty document URL".to_string()));
                }
                url::Url::parse(&raw).map_err(|e| {
                    Error::InvalidDocument(format!("invalid document URL {:?}: {}", raw, e))
                })?;

                log::debug!("fetching document from {}", raw);
                let response = self.http.get(&raw).send().await.map_err(|e| {
                    Error::InvalidDocument(format!("failed to fetch document: {}", e))
                })?;
                let status = response.status();
                if !status.is_success() {
                    return Err(Error::InvalidDocument(format!(
                        "document fetch failed with status {}",
                        status.as_u16()
                    )));
                }
                let bytes = response.bytes().await.map_err(|e| {
                    Error::InvalidDocument(format!("failed to read document body: {}", e))
                })?;
                stream::WorkerInput::Bytes(bytes.to_vec())
            }
            PdfSource::File(path) => {
                let staged =
                    tokio::task::spawn_blocking(move || stream::stage_file(&path))
                        .await
                        .map_err(|e| Error::Other(format!("staging task failed: {}", e)))??;
                staged_path = Some(staged.path().to_path_buf());
                stream::WorkerInput::Staged(staged)
            }
        };

        stream::spawn_conversion(input, options, staged_path).await
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}
