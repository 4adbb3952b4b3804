// SPDX-License-Identifier: MPL-2.0
//! Default values for every configurable knob.

/// Proxy base URL when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Per-request timeout. The proxy itself talks to the media server with a
/// 10 s budget; ours sits just above it.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Window page size on regular layouts.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 300;

/// Window page size on narrow layouts.
pub const DEFAULT_NARROW_ITEMS_PER_PAGE: usize = 100;

/// Startup window widths below this use the narrow page size.
pub const NARROW_WIDTH_THRESHOLD: f32 = 900.0;

/// UX smoothing delay before a load-more commit is applied.
pub const DEFAULT_LOAD_MORE_DELAY_MS: u64 = 300;

/// Thumbnail columns in the gallery grid.
pub const DEFAULT_GRID_COLUMNS: usize = 4;

/// How many upcoming images the lightbox prefetches.
pub const DEFAULT_PREFETCH_COUNT: usize = 3;

/// Fullsize cache budget in megabytes.
pub const DEFAULT_CACHE_MB: u32 = 64;

pub(super) fn default_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

pub(super) fn default_load_more_delay_ms() -> Option<u64> {
    Some(DEFAULT_LOAD_MORE_DELAY_MS)
}

pub(super) fn default_grid_columns() -> Option<usize> {
    Some(DEFAULT_GRID_COLUMNS)
}

pub(super) fn default_prefetch_count() -> Option<usize> {
    Some(DEFAULT_PREFETCH_COUNT)
}

pub(super) fn default_cache_mb() -> Option<u32> {
    Some(DEFAULT_CACHE_MB)
}
