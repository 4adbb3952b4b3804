// SPDX-License-Identifier: MPL-2.0
//! Fullsize media cache backing lightbox prefetch.
//!
//! Fetched media bytes are wrapped in Iced image handles (decoding happens
//! lazily at render time) and kept in an LRU cache bounded by a byte budget,
//! so stepping back and forth between recently viewed photos never refetches
//! them.

use crate::api::AssetId;
use iced::widget::image;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Default byte budget (64 MB): roughly a dozen full-resolution JPEGs.
pub const DEFAULT_CACHE_BYTES: usize = 64 * 1024 * 1024;

/// Upper bound on cached entries regardless of size.
const MAX_ENTRIES: usize = 64;

#[derive(Debug, Clone)]
struct CacheEntry {
    handle: image::Handle,
    size_bytes: usize,
}

/// Cache effectiveness counters, logged when an album is replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub insertions: u64,
}

/// LRU cache of fullsize media keyed by asset id.
pub struct MediaCache {
    entries: LruCache<AssetId, CacheEntry>,
    max_bytes: usize,
    current_bytes: usize,
    stats: CacheStats,
}

impl MediaCache {
    /// Creates a cache with the given byte budget (clamped to at least one
    /// full-resolution image's worth).
    #[must_use]
    pub fn new(max_bytes: usize) -> Self {
        let capacity = NonZeroUsize::new(MAX_ENTRIES).expect("MAX_ENTRIES is non-zero");
        Self {
            entries: LruCache::new(capacity),
            max_bytes: max_bytes.max(4 * 1024 * 1024),
            current_bytes: 0,
            stats: CacheStats::default(),
        }
    }

    /// Stores fetched media bytes under an asset id, evicting least recently
    /// used entries until the byte budget holds.
    ///
    /// Returns `false` when the payload alone exceeds half the budget; such
    /// an entry would immediately evict everything useful.
    pub fn insert(&mut self, id: AssetId, bytes: Vec<u8>) -> bool {
        let size_bytes = bytes.len();
        if size_bytes > self.max_bytes / 2 {
            return false;
        }

        while self.current_bytes + size_bytes > self.max_bytes && !self.entries.is_empty() {
            if let Some((_, evicted)) = self.entries.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
                self.stats.evictions += 1;
            }
        }

        if let Some(existing) = self.entries.pop(&id) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes);
        }

        let entry = CacheEntry {
            handle: image::Handle::from_bytes(bytes),
            size_bytes,
        };
        self.current_bytes += size_bytes;
        self.entries.put(id, entry);
        self.stats.insertions += 1;
        true
    }

    /// Returns the cached handle for an asset, updating LRU order.
    /// The handle is reference-counted; cloning it is cheap.
    pub fn get(&mut self, id: &AssetId) -> Option<image::Handle> {
        match self.entries.get(id) {
            Some(entry) => {
                self.stats.hits += 1;
                Some(entry.handle.clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Checks membership without touching LRU order or counters.
    #[must_use]
    pub fn contains(&self, id: &AssetId) -> bool {
        self.entries.contains(id)
    }

    /// Returns the cached handle without touching LRU order or counters.
    /// Used by the render path, which only gets a shared reference.
    #[must_use]
    pub fn peek(&self, id: &AssetId) -> Option<image::Handle> {
        self.entries.peek(id).map(|entry| entry.handle.clone())
    }

    /// Drops everything, e.g. when a different album is loaded.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.current_bytes = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl std::fmt::Debug for MediaCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaCache")
            .field("entries", &self.entries.len())
            .field("current_bytes", &self.current_bytes)
            .field("max_bytes", &self.max_bytes)
            .field("stats", &self.stats)
            .finish()
    }
}
