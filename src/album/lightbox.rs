// SPDX-License-Identifier: MPL-2.0
//! Fullscreen lightbox cursor over the displayed window.
//!
//! Navigation clamps at the window's bounds (no wraparound). Nearing the end
//! of the window asks the window manager for another page, and the next few
//! image assets are prefetched so stepping forward feels instant.

use crate::api::Asset;

/// Within this many items of the window's end, navigation requests a
/// window extension.
pub const EXTEND_THRESHOLD: usize = 3;

/// How many upcoming images to prefetch ahead of the cursor.
pub const DEFAULT_PREFETCH_AHEAD: usize = 3;

/// Cursor state for the fullscreen view. Dropped entirely on close, so no
/// modal state survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lightbox {
    index: usize,
}

impl Lightbox {
    /// Opens the lightbox on an index into the displayed window.
    #[must_use]
    pub fn open(index: usize) -> Self {
        Self { index }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn has_next(&self, window_len: usize) -> bool {
        self.index + 1 < window_len
    }

    /// Steps forward; clamps at the last displayed item.
    /// Returns `true` when the cursor moved.
    pub fn next(&mut self, window_len: usize) -> bool {
        if self.has_next(window_len) {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Steps backward; clamps at the first displayed item.
    /// Returns `true` when the cursor moved.
    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Keeps the cursor valid when the window shrinks underneath it.
    pub fn clamp_to(&mut self, window_len: usize) {
        if window_len == 0 {
            self.index = 0;
        } else if self.index >= window_len {
            self.index = window_len - 1;
        }
    }

    /// Whether the cursor is close enough to the window's end that another
    /// page should be requested (same gating as scroll-triggered load-more).
    #[must_use]
    pub fn near_end(&self, window_len: usize) -> bool {
        window_len.saturating_sub(self.index) <= EXTEND_THRESHOLD
    }

    /// The next `count` image assets ahead of the cursor, skipping videos.
    /// These are fetched speculatively to hide network latency.
    #[must_use]
    pub fn prefetch_targets<'a>(&self, displayed: &'a [Asset], count: usize) -> Vec<&'a Asset> {
        displayed
            .iter()
            .skip(self.index + 1)
            .filter(|asset| !asset.is_video())
            .take(count)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Asset, AssetId, AssetKind};
    use chrono::{TimeZone, Utc};

    fn assets_with_kinds(kinds: &[AssetKind]) -> Vec<Asset> {
        kinds
            .iter()
            .enumerate()
            .map(|(i, &kind)| Asset {
                id: AssetId::from(format!("a{i}").as_str()),
                kind,
                created_at: Utc.with_ymd_and_hms(2025, 7, 4, 12, 0, 0).unwrap(),
            })
            .collect()
    }

    fn images(count: usize) -> Vec<Asset> {
        assets_with_kinds(&vec![AssetKind::Image; count])
    }

    #[test]
    fn next_clamps_at_window_end() {
        let mut lightbox = Lightbox::open(8);
        assert!(lightbox.next(10));
        assert_eq!(lightbox.index(), 9);
        assert!(!lightbox.next(10));
        assert_eq!(lightbox.index(), 9);
    }

    #[test]
    fn previous_clamps_at_zero() {
        let mut lightbox = Lightbox::open(1);
        assert!(lightbox.previous());
        assert!(!lightbox.previous());
        assert_eq!(lightbox.index(), 0);
    }

    #[test]
    fn near_end_triggers_within_three_of_the_end() {
        let lightbox = Lightbox::open(6);
        assert!(!lightbox.near_end(10)); // 4 from the end
        let lightbox = Lightbox::open(7);
        assert!(lightbox.near_end(10)); // 3 from the end
        let lightbox = Lightbox::open(9);
        assert!(lightbox.near_end(10));
    }

    #[test]
    fn prefetch_skips_videos() {
        let assets = assets_with_kinds(&[
            AssetKind::Image, // cursor
            AssetKind::Video,
            AssetKind::Image,
            AssetKind::Video,
            AssetKind::Image,
            AssetKind::Image,
        ]);
        let lightbox = Lightbox::open(0);

        let targets = lightbox.prefetch_targets(&assets, 3);
        let ids: Vec<&str> = targets.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a2", "a4", "a5"]);
    }

    #[test]
    fn prefetch_stops_at_window_end() {
        let assets = images(4);
        let lightbox = Lightbox::open(2);
        let targets = lightbox.prefetch_targets(&assets, 3);
        assert_eq!(targets.len(), 1);
    }

    #[test]
    fn clamp_to_recovers_from_shrunken_window() {
        let mut lightbox = Lightbox::open(9);
        lightbox.clamp_to(4);
        assert_eq!(lightbox.index(), 3);
        lightbox.clamp_to(0);
        assert_eq!(lightbox.index(), 0);
    }
}
