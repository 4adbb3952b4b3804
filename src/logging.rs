// SPDX-License-Identifier: MPL-2.0
//! Tracing setup.
//!
//! Logs go to stderr; the level is controlled through `RUST_LOG`, defaulting
//! to debug for this crate and warn for everything else. Storage and
//! thumbnail failures log at warn, request lifecycle at debug.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber. Safe to call once; a second
/// call (e.g. from tests) is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("album_lens=debug,warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
