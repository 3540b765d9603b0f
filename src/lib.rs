//! Foliokit
//!
//! Data plumbing for a portfolio site: a typed, read-only client for the
//! site's content API, and a rasterizer that converts PDF documents into
//! sequences of page images, emitted incrementally as each page completes.
//!
//! # Features
//!
//! - **Content client**: one GET per collection (photos, awards, featured
//!   work, latest videos, home intro), parsed into typed items in server
//!   order. No retry, no caching; failures are typed so callers can degrade
//!   gracefully.
//! - **Rasterizer**: sequential page rendering on a dedicated worker thread,
//!   incremental emission, cooperative cancellation, and scoped staging of
//!   local-file sources.
//!
//! # Example
//!
//! ```no_run
//! use foliokit::{ClientConfig, ContentClient, PdfSource, Rasterizer, RenderOptions};
//!
//! # async fn run() -> foliokit::Result<()> {
//! let client = ContentClient::new(ClientConfig::from_env())?;
//! let awards = client.awards().await?;
//! println!("{} awards", awards.len());
//!
//! let rasterizer = Rasterizer::new();
//! let mut pages = rasterizer
//!     .convert(
//!         PdfSource::Url("https://example.com/resume.pdf".to_string()),
//!         RenderOptions { scale: 1.5 },
//!     )
//!     .await?;
//! println!("rendering {} pages", pages.page_count());
//! while let Some(page) = pages.next_page().await {
//!     let page = page?;
//!     println!("page {} is {}x{}", page.number, page.width, page.height);
//! }
//! # Ok(())
//! # }
//! ```

pub mod content;
pub mod error;
pub mod raster;

pub use content::{
    AwardItem, Collection, ContentClient, FeaturedWorkItem, HomeIntroItem, LatestVideoItem,
    PhotoItem, PhotoSection,
};
pub use error::{Error, Result};
pub use raster::{PageStream, PdfSource, Rasterizer, RenderOptions, RenderedPage};

/// Environment variable consulted by [`ClientConfig::from_env`].
pub const BASE_URL_ENV: &str = "FOLIO_API_BASE_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Configuration for the content client
///
/// The defaults are chosen to match a local development backend:
/// - `base_url` points at `http://localhost:5000/api`
/// - a conservative 30s request timeout
///
/// # Examples
///
/// ```
/// let cfg = foliokit::ClientConfig::default();
/// assert!(cfg.base_url.ends_with("/api"));
/// assert!(cfg.user_agent.contains("foliokit"));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the content API; a trailing slash is tolerated.
    pub base_url: String,
    /// User agent string to send with requests
    pub user_agent: String,
    /// Timeout for content requests in milliseconds
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("foliokit/{}", env!("CARGO_PKG_VERSION")),
            timeout_ms: 30000,
        }
    }
}

impl ClientConfig {
    /// Default configuration with the base URL taken from the
    /// `FOLIO_API_BASE_URL` environment variable when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                config.base_url = base_url;
            }
        }
        config
    }
}
