// SPDX-License-Identifier: MPL-2.0
//! Media handling: the byte-bounded prefetch cache for fullsize media.

pub mod cache;

pub use cache::{CacheStats, MediaCache, DEFAULT_CACHE_BYTES};
