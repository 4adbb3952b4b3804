// SPDX-License-Identifier: MPL-2.0
//! `album_lens` is a desktop album viewer for a media proxy, built with the
//! Iced GUI framework.
//!
//! It fetches an album's asset list over HTTP, renders a paginated,
//! date-grouped thumbnail gallery with incremental loading, and offers a
//! fullscreen lightbox with keyboard navigation, speculative prefetch, and a
//! timeline strip for jumping to arbitrary dates.

pub mod album;
pub mod api;
pub mod app;
pub mod error;
pub mod logging;
pub mod media;
