// SPDX-License-Identifier: MPL-2.0
//! Wire types for the album endpoint.
//!
//! The proxy returns a flat JSON array of asset records ordered by creation
//! time. Records are immutable once fetched; the viewer never mutates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque asset identifier as issued by the media server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AssetId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Media type of an asset. Records without a `type` field are treated as
/// images; unrecognized values are kept around rather than rejected so a
/// server upgrade cannot break album loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AssetKind {
    #[default]
    Image,
    Video,
    #[serde(other)]
    Unknown,
}

/// One photo or video in an album.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    #[serde(rename = "assetId")]
    pub id: AssetId,

    #[serde(rename = "type", default)]
    pub kind: AssetKind,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Asset {
    /// Whether this asset is a video (excluded from fullsize prefetch).
    #[must_use]
    pub fn is_video(&self) -> bool {
        self.kind == AssetKind::Video
    }
}
