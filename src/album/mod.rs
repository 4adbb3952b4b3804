// SPDX-License-Identifier: MPL-2.0
//! Album-session state: windowing, date grouping, and lightbox navigation.
//!
//! Everything here is pure state manipulation with no knowledge of the GUI
//! layer or the network. The application shell wires scroll visibility and
//! timer completions into these types.

pub mod grouping;
pub mod lightbox;
pub mod window;

pub use grouping::{day_summaries, group_by_day, DayGroup, DayKey, DaySummary};
pub use lightbox::Lightbox;
pub use window::{AssetWindow, DateJump, LoadTicket};
