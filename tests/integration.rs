// SPDX-License-Identifier: MPL-2.0
use album_lens::album::{day_summaries, group_by_day, AssetWindow, DayKey, Lightbox};
use album_lens::api::{Asset, AssetId, AssetKind};
use album_lens::app::config::{self, Config};
use album_lens::app::persisted_state::{AppState, DiskStore, PreferenceStore};
use chrono::{TimeZone, Utc};
use tempfile::tempdir;

/// A synthetic album shaped like the proxy returns it: newest first, a
/// handful of assets per day, an occasional video.
fn synthetic_album(count: usize) -> Vec<Asset> {
    (0..count)
        .map(|i| Asset {
            id: AssetId::from(format!("asset-{i}").as_str()),
            kind: if i % 7 == 0 {
                AssetKind::Video
            } else {
                AssetKind::Image
            },
            created_at: Utc.with_ymd_and_hms(2025, 12, 31, 18, 0, 0).unwrap()
                - chrono::Duration::days((i / 5) as i64),
        })
        .collect()
}

#[test]
fn window_walks_an_album_end_to_end() {
    let assets = synthetic_album(650);
    let mut window = AssetWindow::new(assets, 200);

    assert_eq!(window.displayed_len(), 200);
    assert!(window.has_more());

    let mut pages = 0;
    while let Some(ticket) = window.begin_load_more() {
        assert!(window.commit_load_more(ticket));
        pages += 1;
    }

    assert_eq!(pages, 3);
    assert_eq!(window.displayed_len(), 650);
    assert!(!window.has_more());

    // Grouping over the full displayed window: 5 assets per day, 130 days.
    let groups = group_by_day(window.displayed());
    assert_eq!(groups.len(), 130);
    assert!(groups.iter().all(|g| g.len() == 5));

    let summaries = day_summaries(window.assets());
    assert_eq!(summaries.len(), 130);
    assert_eq!(summaries[0].first_index, 0);
}

#[test]
fn date_jump_then_lightbox_navigation() {
    let assets = synthetic_album(650);
    let target_day = DayKey::of(&assets[400]);
    let mut window = AssetWindow::new(assets, 200);

    let jump = window.select_date(target_day).expect("day exists");
    assert_eq!(jump.hit_index, 400);
    assert_eq!(window.start_offset(), 200);

    // Open the lightbox on the jumped-to asset and walk toward the end.
    let mut lightbox = Lightbox::open(jump.window_position);
    assert!(!lightbox.near_end(window.displayed_len()));
    while lightbox.next(window.displayed_len()) {}
    assert!(lightbox.near_end(window.displayed_len()));

    // Prefetch skips the synthetic videos.
    let targets = lightbox.prefetch_targets(window.displayed(), 3);
    assert!(targets.iter().all(|asset| !asset.is_video()));
}

#[test]
fn config_round_trips_through_disk() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("settings.toml");

    let mut original = Config::default();
    original.server.base_url = Some("http://photos.local:9000".to_string());
    original.gallery.items_per_page = Some(150);
    original.lightbox.prefetch_count = Some(5);

    config::save_to_path(&original, &path).expect("save config");
    let loaded = config::load_from_path(&path).expect("load config");

    assert_eq!(loaded, original);
    assert_eq!(loaded.base_url(), "http://photos.local:9000");
    assert_eq!(loaded.items_per_page_for_width(1920.0), 150);
    assert_eq!(loaded.prefetch_count(), 5);
}

#[test]
fn credentials_survive_a_restart() {
    let dir = tempdir().expect("create temp dir");

    {
        let store = DiskStore::with_base_dir(dir.path().to_path_buf());
        let state = AppState {
            api_key: Some("secret-key".to_string()),
            album_id: Some("790fa206-9f0f-4b96-b38f-adcb55f8f419".to_string()),
        };
        assert!(store.save(&state).is_none());
    }

    // A fresh store over the same directory sees the saved credentials,
    // which is what auto-load at startup relies on.
    let store = DiskStore::with_base_dir(dir.path().to_path_buf());
    let (restored, warning) = store.load();
    assert!(warning.is_none());
    assert!(restored.has_credentials());
    assert_eq!(restored.api_key.as_deref(), Some("secret-key"));
}
