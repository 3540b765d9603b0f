//! Typed client for the portfolio content API.
//!
//! The API serves small, ordered JSON collections (photos, awards, featured
//! work, latest videos, home-intro text). Each method issues exactly one GET
//! and returns the parsed array in server order; callers are expected to
//! degrade gracefully on failure. No retry, no caching.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::{ClientConfig, Error, Result};

/// Photography subsection a [`PhotoItem`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhotoSection {
    BehindScenes,
    CampusEvents,
    PortraitLandscape,
}

/// A photograph in one of the photography galleries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub section: PhotoSection,
    pub image_url: String,
    pub caption: String,
    pub order: i64,
}

/// An award or press mention shown on the resume page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub article_url: String,
    pub order: i64,
}

/// A recently published video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestVideoItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub video_id: String,
    pub description: String,
    pub order: i64,
}

/// A highlighted production project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedWorkItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub project_url: String,
    pub order: i64,
}

/// Introduction text for the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeIntroItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub description: String,
}

/// The named collections the content API exposes, with their endpoint paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    BehindScenes,
    CampusEvents,
    PortraitLandscape,
    Awards,
    LatestVideos,
    FeaturedWork,
    HomeIntro,
}

impl Collection {
    /// Endpoint path for this collection, relative to the base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Collection::BehindScenes => "/photography/behind-scenes",
            Collection::CampusEvents => "/photography/campus-events",
            Collection::PortraitLandscape => "/photography/portrait-landscape",
            Collection::Awards => "/awards",
            Collection::LatestVideos => "/latest-videos",
            Collection::FeaturedWork => "/featured-work",
            Collection::HomeIntro => "/home-intro",
        }
    }
}

impl From<PhotoSection> for Collection {
    fn from(section: PhotoSection) -> Self {
        match section {
            PhotoSection::BehindScenes => Collection::BehindScenes,
            PhotoSection::CampusEvents => Collection::CampusEvents,
            PhotoSection::PortraitLandscape => Collection::PortraitLandscape,
        }
    }
}

/// Read-only HTTP client for the content API.
///
/// Holds no state beyond the underlying connection pool; every call is
/// independent and safe to run concurrently with others.
pub struct ContentClient {
    http: reqwest::Client,
    base_url: String,
}

impl ContentClient {
    /// Build a client from the given configuration.
    ///
    /// The base URL is validated and any trailing slash is trimmed so that
    /// collection paths can be appended verbatim.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        url::Url::parse(&base_url)
            .map_err(|e| Error::Config(format!("invalid base URL {:?}: {}", config.base_url, e)))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    /// Fetch one photography gallery.
    pub async fn photos(&self, section: PhotoSection) -> Result<Vec<PhotoItem>> {
        self.get_json(Collection::from(section).path()).await
    }

    /// Fetch the awards list.
    pub async fn awards(&self) -> Result<Vec<AwardItem>> {
        self.get_json(Collection::Awards.path()).await
    }

    /// Fetch the latest-videos list.
    pub async fn latest_videos(&self) -> Result<Vec<LatestVideoItem>> {
        self.get_json(Collection::LatestVideos.path()).await
    }

    /// Fetch the featured-work list.
    pub async fn featured_work(&self) -> Result<Vec<FeaturedWorkItem>> {
        self.get_json(Collection::FeaturedWork.path()).await
    }

    /// Fetch the home-page introduction text.
    pub async fn home_intro(&self) -> Result<Vec<HomeIntroItem>> {
        self.get_json(Collection::HomeIntro.path()).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::RequestFailed {
                status: status.as_u16(),
            });
        }

        let items = response.json::<Vec<T>>().await?;
        Ok(items)
    }
}
