// SPDX-License-Identifier: MPL-2.0
//! Asset window management: the incremental-loading core of the viewer.
//!
//! An [`AssetWindow`] holds the full ordered asset list fetched for an album
//! and a bounded, contiguous "displayed" slice of it. The slice grows one
//! page at a time as the gallery scrolls, and is recentered when the user
//! jumps to an arbitrary date from the timeline.
//!
//! Load-more is a two-step operation: [`AssetWindow::begin_load_more`] claims
//! the single in-flight slot and hands out a [`LoadTicket`]; the caller
//! schedules the UX smoothing delay and then presents the ticket to
//! [`AssetWindow::commit_load_more`]. A date jump invalidates outstanding
//! tickets, so the two triggers cannot interleave into a divergent state.

use crate::album::grouping::DayKey;
use crate::api::Asset;

/// Load state of the window. There is at most one pending extension; a
/// concurrent request is dropped, not queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
}

/// Proof that a load-more was started. Stale tickets (superseded by a date
/// jump or a newer load) are ignored on commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// Result of a successful date jump, reported so the UI layer can scroll the
/// gallery to the day boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateJump {
    /// Index of the first matching asset within the full list.
    pub hit_index: usize,
    /// Position of that asset within the recentered displayed slice.
    pub window_position: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssetWindow {
    assets: Vec<Asset>,
    page_size: usize,
    start: usize,
    end: usize,
    has_more: bool,
    phase: LoadPhase,
    generation: u64,
}

impl AssetWindow {
    /// Creates a window over a freshly fetched asset list, displaying the
    /// first page. `page_size` is fixed for the lifetime of the session.
    #[must_use]
    pub fn new(assets: Vec<Asset>, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let end = assets.len().min(page_size);
        let has_more = assets.len() > end;
        Self {
            assets,
            page_size,
            start: 0,
            end,
            has_more,
            phase: LoadPhase::Idle,
            generation: 0,
        }
    }

    /// The full ordered asset list.
    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// The contiguous slice currently rendered.
    #[must_use]
    pub fn displayed(&self) -> &[Asset] {
        &self.assets[self.start..self.end]
    }

    /// Offset of the displayed slice within the full list.
    #[must_use]
    pub fn start_offset(&self) -> usize {
        self.start
    }

    #[must_use]
    pub fn displayed_len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn total_len(&self) -> usize {
        self.assets.len()
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Whether assets beyond the displayed slice remain.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Claims the load-more slot.
    ///
    /// Returns `None` while a load is already pending or when the list is
    /// exhausted; first-in-flight wins and the concurrent call is dropped.
    pub fn begin_load_more(&mut self) -> Option<LoadTicket> {
        if self.phase == LoadPhase::Loading || !self.has_more {
            return None;
        }
        self.phase = LoadPhase::Loading;
        Some(LoadTicket {
            generation: self.generation,
        })
    }

    /// Extends the displayed slice by one page.
    ///
    /// Called after the smoothing delay elapses. Returns `false` (leaving
    /// state untouched) when the ticket was invalidated by a date jump or a
    /// newer album state in the meantime.
    pub fn commit_load_more(&mut self, ticket: LoadTicket) -> bool {
        if ticket.generation != self.generation || self.phase != LoadPhase::Loading {
            return false;
        }
        self.phase = LoadPhase::Idle;
        self.end = (self.end + self.page_size).min(self.assets.len());
        self.has_more = self.end < self.assets.len();
        true
    }

    /// Recenters the window on the first asset of the given calendar day:
    /// `[max(0, i - P), min(N, i + 2P))`.
    ///
    /// A day with no matching asset leaves every field untouched, including
    /// a pending load. On success, any pending load-more is cancelled before
    /// the bounds move.
    pub fn select_date(&mut self, day: DayKey) -> Option<DateJump> {
        let hit_index = self
            .assets
            .iter()
            .position(|asset| DayKey::of(asset) == day)?;

        self.invalidate_pending();
        self.start = hit_index.saturating_sub(self.page_size);
        self.end = (hit_index + 2 * self.page_size).min(self.assets.len());
        self.has_more = self.end < self.assets.len();

        Some(DateJump {
            hit_index,
            window_position: hit_index - self.start,
        })
    }

    /// Drops any pending load-more and invalidates its ticket.
    fn invalidate_pending(&mut self) {
        self.generation += 1;
        self.phase = LoadPhase::Idle;
    }
}
