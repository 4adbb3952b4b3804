// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::album::{DayKey, LoadTicket};
use crate::api::{Asset, AssetId};
use crate::error::Error;
use iced::widget::{image, scrollable};

/// Messages consumed by `App::update`.
///
/// Async completions carry the album generation they were started under;
/// a completion from a superseded album load is dropped on arrival.
#[derive(Debug, Clone)]
pub enum Message {
    ApiKeyChanged(String),
    AlbumIdChanged(String),
    /// Load button pressed or Enter hit in either input.
    SubmitLoadAlbum,
    /// Album listing fetch finished.
    AlbumFetched {
        generation: u64,
        result: Result<Vec<Asset>, Error>,
    },
    /// The gallery scrollable moved; nearing the bottom plays the role the
    /// original's intersection observer played.
    GalleryScrolled(scrollable::Viewport),
    /// The load-more smoothing delay elapsed.
    LoadMoreElapsed { ticket: LoadTicket },
    /// A day was picked on the timeline strip.
    DateSelected(DayKey),
    /// Thumbnail bytes arrived (already wrapped in an image handle).
    ThumbnailFetched {
        generation: u64,
        id: AssetId,
        result: Result<image::Handle, Error>,
    },
    /// Fullsize bytes arrived for the lightbox or its prefetch.
    FullsizeFetched {
        generation: u64,
        id: AssetId,
        result: Result<Vec<u8>, Error>,
    },
    /// A gallery thumbnail was clicked; the index is into the displayed
    /// window.
    OpenLightbox(usize),
    CloseLightbox,
    LightboxNext,
    LightboxPrevious,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Proxy base URL override (not persisted).
    pub server: Option<String>,
    /// API key override; takes precedence over the stored one.
    pub api_key: Option<String>,
    /// Album id override; takes precedence over the stored one.
    pub album_id: Option<String>,
    /// Config directory override (settings.toml).
    pub config_dir: Option<String>,
    /// Data directory override (state file).
    pub data_dir: Option<String>,
}
