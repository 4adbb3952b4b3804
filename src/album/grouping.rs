// SPDX-License-Identifier: MPL-2.0
//! Date grouping: pure transforms over the asset list.
//!
//! Two consumers need two different shapes of the same information. The
//! gallery groups *adjacent* assets sharing a calendar day, preserving list
//! order; a list that is not date-ordered therefore produces several groups
//! for the same day. The timeline strip wants each day exactly once, with a
//! count and the index of its first occurrence.

use crate::api::Asset;
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;
use std::ops::Range;

/// A calendar day, keyed on the asset's creation timestamp (UTC, as the
/// proxy reports it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey(NaiveDate);

impl DayKey {
    #[must_use]
    pub fn of(asset: &Asset) -> Self {
        Self(asset.created_at.date_naive())
    }

    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self(NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default())
    }

    /// Long separator label, e.g. `Monday, January 5, 2026`.
    #[must_use]
    pub fn label(&self) -> String {
        self.0.format("%A, %B %-d, %Y").to_string()
    }

    /// Abbreviated weekday for the timeline strip, e.g. `Mon`.
    #[must_use]
    pub fn weekday_short(&self) -> String {
        self.0.format("%a").to_string()
    }

    /// Abbreviated month for the timeline strip, e.g. `Jan`.
    #[must_use]
    pub fn month_short(&self) -> String {
        self.0.format("%b").to_string()
    }

    /// Day of month, 1-31.
    #[must_use]
    pub fn day_of_month(&self) -> u32 {
        self.0.day()
    }
}

/// A run of adjacent assets sharing one calendar day. `range` indexes into
/// the slice that was grouped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    pub day: DayKey,
    pub range: Range<usize>,
}

impl DayGroup {
    #[must_use]
    pub fn len(&self) -> usize {
        self.range.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// One unique day on the timeline strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    pub day: DayKey,
    /// Total assets on this day, across non-adjacent repeats.
    pub count: usize,
    /// Index of the day's first asset in the full list.
    pub first_index: usize,
}

/// Partitions `assets` into contiguous day groups, preserving order.
#[must_use]
pub fn group_by_day(assets: &[Asset]) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();

    for (index, asset) in assets.iter().enumerate() {
        let day = DayKey::of(asset);
        match groups.last_mut() {
            Some(group) if group.day == day => group.range.end = index + 1,
            _ => groups.push(DayGroup {
                day,
                range: index..index + 1,
            }),
        }
    }

    groups
}

/// Collapses the asset list into unique days in first-occurrence order.
#[must_use]
pub fn day_summaries(assets: &[Asset]) -> Vec<DaySummary> {
    let mut summaries: Vec<DaySummary> = Vec::new();
    let mut seen: HashMap<DayKey, usize> = HashMap::new();

    for (index, asset) in assets.iter().enumerate() {
        let day = DayKey::of(asset);
        if let Some(&position) = seen.get(&day) {
            summaries[position].count += 1;
        } else {
            seen.insert(day, summaries.len());
            summaries.push(DaySummary {
                day,
                count: 1,
                first_index: index,
            });
        }
    }

    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Asset, AssetId, AssetKind};
    use chrono::{TimeZone, Utc};

    fn asset_on(id: &str, year: i32, month: u32, day: u32) -> Asset {
        Asset {
            id: AssetId::from(id),
            kind: AssetKind::Image,
            created_at: Utc.with_ymd_and_hms(year, month, day, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn one_shared_day_yields_one_group() {
        let assets: Vec<Asset> = (0..5)
            .map(|i| asset_on(&format!("a{i}"), 2025, 7, 4))
            .collect();

        let groups = group_by_day(&assets);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 5);
        assert_eq!(groups[0].range, 0..5);
    }

    #[test]
    fn alternating_days_are_not_collapsed() {
        let assets = vec![
            asset_on("a", 2025, 7, 4),
            asset_on("b", 2025, 7, 3),
            asset_on("c", 2025, 7, 4),
        ];

        let groups = group_by_day(&assets);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].day, groups[2].day);
        assert_eq!(groups[1].range, 1..2);
    }

    #[test]
    fn empty_list_yields_no_groups() {
        assert!(group_by_day(&[]).is_empty());
        assert!(day_summaries(&[]).is_empty());
    }

    #[test]
    fn summaries_collapse_repeats_and_keep_first_index() {
        let assets = vec![
            asset_on("a", 2025, 7, 4),
            asset_on("b", 2025, 7, 3),
            asset_on("c", 2025, 7, 4),
            asset_on("d", 2025, 7, 3),
        ];

        let summaries = day_summaries(&assets);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].day, DayKey::from_ymd(2025, 7, 4));
        assert_eq!(summaries[0].count, 2);
        assert_eq!(summaries[0].first_index, 0);
        assert_eq!(summaries[1].first_index, 1);
        assert_eq!(summaries[1].count, 2);
    }

    #[test]
    fn day_label_matches_long_en_us_form() {
        let day = DayKey::from_ymd(2026, 1, 5);
        assert_eq!(day.label(), "Monday, January 5, 2026");
        assert_eq!(day.weekday_short(), "Mon");
        assert_eq!(day.month_short(), "Jan");
        assert_eq!(day.day_of_month(), 5);
    }

    #[test]
    fn day_key_ignores_time_of_day() {
        let morning = Asset {
            id: AssetId::from("m"),
            kind: AssetKind::Image,
            created_at: Utc.with_ymd_and_hms(2025, 7, 4, 0, 5, 0).unwrap(),
        };
        let evening = Asset {
            id: AssetId::from("e"),
            kind: AssetKind::Image,
            created_at: Utc.with_ymd_and_hms(2025, 7, 4, 23, 55, 0).unwrap(),
        };
        assert_eq!(DayKey::of(&morning), DayKey::of(&evening));
    }
}
