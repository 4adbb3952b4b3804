// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the album proxy.
//!
//! The proxy exposes one listing endpoint and three authenticated media
//! endpoints:
//!
//! - `GET {base}/albums/{albumId}/assets` — JSON array of asset records
//! - `GET {base}/proxy/thumbnail/{assetId}?api_key=...` — thumbnail bytes
//! - `GET {base}/proxy/fullsize/{assetId}?api_key=...` — full-resolution bytes
//! - `GET {base}/proxy/video/{assetId}?api_key=...` — video stream
//!
//! Every request carries an explicit timeout so a hung proxy cannot leave the
//! UI loading forever.

mod types;

pub use types::{Asset, AssetId, AssetKind};

use crate::error::{Error, Result};
use std::time::Duration;
use tracing::debug;

/// Client for the album proxy. Cheap to clone; the underlying connection
/// pool is shared between clones.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProxyClient {
    /// Builds a client for the proxy at `base_url`.
    ///
    /// A trailing slash on the base URL is tolerated. Fails only if the
    /// underlying TLS/connection pool cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("AlbumLens/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(format!("HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the complete ordered asset list of an album.
    ///
    /// Non-success responses become [`Error::Fetch`], carrying the server's
    /// body text verbatim when it supplies one. A body that is not a JSON
    /// array becomes [`Error::Format`].
    pub async fn fetch_album_assets(&self, album_id: &str) -> Result<Vec<Asset>> {
        let url = format!("{}/albums/{}/assets", self.base_url, album_id);
        debug!(%url, "fetching album assets");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                format!("status {}", status.as_u16())
            } else {
                body.trim().to_string()
            };
            return Err(Error::Fetch(message));
        }

        let body = response.bytes().await?;
        let value: serde_json::Value = serde_json::from_slice(&body)
            .map_err(|e| Error::Format(format!("not valid JSON: {e}")))?;
        if !value.is_array() {
            return Err(Error::Format("expected a JSON array of assets".to_string()));
        }

        let assets: Vec<Asset> = serde_json::from_value(value)?;
        debug!(count = assets.len(), "album assets fetched");
        Ok(assets)
    }

    /// Fetches thumbnail bytes for one asset.
    pub async fn fetch_thumbnail(&self, api_key: &str, asset_id: &AssetId) -> Result<Vec<u8>> {
        self.fetch_media_bytes("thumbnail", api_key, asset_id).await
    }

    /// Fetches full-resolution bytes for one asset.
    pub async fn fetch_fullsize(&self, api_key: &str, asset_id: &AssetId) -> Result<Vec<u8>> {
        self.fetch_media_bytes("fullsize", api_key, asset_id).await
    }

    /// URL of the video stream endpoint for one asset, with the API key
    /// percent-encoded into the query string.
    #[must_use]
    pub fn video_url(&self, api_key: &str, asset_id: &AssetId) -> String {
        let raw = format!("{}/proxy/video/{}", self.base_url, asset_id);
        match reqwest::Url::parse_with_params(&raw, &[("api_key", api_key)]) {
            Ok(url) => url.to_string(),
            // Unparseable base URLs are caught long before streaming; fall
            // back to the unencoded form rather than panicking.
            Err(_) => format!("{raw}?api_key={api_key}"),
        }
    }

    async fn fetch_media_bytes(
        &self,
        endpoint: &str,
        api_key: &str,
        asset_id: &AssetId,
    ) -> Result<Vec<u8>> {
        let url = format!("{}/proxy/{}/{}", self.base_url, endpoint, asset_id);
        let response = self
            .http
            .get(&url)
            .query(&[("api_key", api_key)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!(
                "{} request for {} failed with status {}",
                endpoint,
                asset_id,
                status.as_u16()
            )));
        }

        Ok(response.bytes().await?.to_vec())
    }
}
