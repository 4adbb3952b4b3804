// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers.
//!
//! All async completions are tagged with the album generation they were
//! started under; a bumped generation (new album fetch) silently drops them.
//! Within one album, load-more cancellation is handled by the window's own
//! ticket mechanism.

use super::{view, App, Message};
use crate::album::LoadTicket;
use crate::api::{Asset, AssetId};
use crate::error::{Error, Result};
use iced::widget::image;
use iced::widget::scrollable::RelativeOffset;
use iced::Task;
use tracing::{debug, warn};

/// Relative scroll offset at which the next page is requested. Stands in
/// for the original's intersection observer firing near the list tail.
const LOAD_MORE_SCROLL_THRESHOLD: f32 = 0.92;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::ApiKeyChanged(value) => {
            app.api_key_input = value;
            persist_credentials(app);
            Task::none()
        }
        Message::AlbumIdChanged(value) => {
            app.album_id_input = value;
            persist_credentials(app);
            Task::none()
        }
        Message::SubmitLoadAlbum => submit_load_album(app),
        Message::AlbumFetched { generation, result } => album_fetched(app, generation, result),
        Message::GalleryScrolled(viewport) => {
            if viewport.relative_offset().y >= LOAD_MORE_SCROLL_THRESHOLD {
                try_begin_load_more(app)
            } else {
                Task::none()
            }
        }
        Message::LoadMoreElapsed { ticket } => load_more_elapsed(app, ticket),
        Message::DateSelected(day) => date_selected(app, day),
        Message::ThumbnailFetched {
            generation,
            id,
            result,
        } => thumbnail_fetched(app, generation, id, result),
        Message::FullsizeFetched {
            generation,
            id,
            result,
        } => fullsize_fetched(app, generation, id, result),
        Message::OpenLightbox(index) => {
            app.lightbox = Some(crate::album::Lightbox::open(index));
            lightbox_tasks(app)
        }
        Message::CloseLightbox => {
            app.lightbox = None;
            Task::none()
        }
        Message::LightboxNext => {
            let moved = match (&app.session, &mut app.lightbox) {
                (Some(session), Some(lightbox)) => lightbox.next(session.window.displayed_len()),
                _ => false,
            };
            if moved {
                lightbox_tasks(app)
            } else {
                Task::none()
            }
        }
        Message::LightboxPrevious => {
            let moved = app
                .lightbox
                .as_mut()
                .is_some_and(crate::album::Lightbox::previous);
            if moved {
                lightbox_tasks(app)
            } else {
                Task::none()
            }
        }
    }
}

/// Writes the credentials through to the preference store. Blank inputs
/// keep the previously stored value; a failing store only logs.
fn persist_credentials(app: &mut App) {
    let api_key = app.api_key_input.trim();
    let album_id = app.album_id_input.trim();
    if !api_key.is_empty() {
        app.persisted.api_key = Some(api_key.to_string());
    }
    if !album_id.is_empty() {
        app.persisted.album_id = Some(album_id.to_string());
    }
    if let Some(warning) = app.store.save(&app.persisted) {
        warn!("preferences not persisted: {warning}");
    }
}

fn submit_load_album(app: &mut App) -> Task<Message> {
    let album_id = app.album_id_input.trim().to_string();
    if album_id.is_empty() {
        app.error = Some(Error::Validation("Please enter an album ID".to_string()).to_string());
        return Task::none();
    }
    if app.api_key_input.trim().is_empty() {
        app.error = Some(Error::Validation("Please enter your API key".to_string()).to_string());
        return Task::none();
    }
    let Some(client) = app.client.clone() else {
        // Construction failed at startup; the error banner already says why.
        return Task::none();
    };

    app.error = None;
    app.initial_loading = true;
    app.session = None;
    app.lightbox = None;
    app.thumbnails.clear();
    app.pending_thumbnails.clear();
    app.pending_fullsize.clear();
    app.media_cache.clear();
    persist_credentials(app);

    // Supersede any in-flight fetch for a previous album.
    app.generation += 1;
    let generation = app.generation;

    Task::perform(
        async move { client.fetch_album_assets(&album_id).await },
        move |result| Message::AlbumFetched { generation, result },
    )
}

fn album_fetched(
    app: &mut App,
    generation: u64,
    result: Result<Vec<Asset>>,
) -> Task<Message> {
    if generation != app.generation {
        debug!("dropping album response from superseded fetch");
        return Task::none();
    }
    app.initial_loading = false;

    match result {
        Ok(assets) => {
            if assets.is_empty() {
                app.error = Some("No assets found in this album".to_string());
            }
            app.install_session(assets);
            let ids = displayed_ids(app);
            thumbnail_tasks(app, ids)
        }
        Err(error) => {
            warn!("album fetch failed: {error}");
            app.error = Some(error.to_string());
            Task::none()
        }
    }
}

/// Claims the load-more slot and schedules the smoothing delay. A no-op
/// while a load is pending or the list is exhausted.
fn try_begin_load_more(app: &mut App) -> Task<Message> {
    let Some(session) = app.session.as_mut() else {
        return Task::none();
    };
    let Some(ticket) = session.window.begin_load_more() else {
        return Task::none();
    };
    let delay = app.config.load_more_delay();
    Task::perform(tokio::time::sleep(delay), move |_| Message::LoadMoreElapsed {
        ticket,
    })
}

fn load_more_elapsed(app: &mut App, ticket: LoadTicket) -> Task<Message> {
    let committed = app
        .session
        .as_mut()
        .is_some_and(|session| session.window.commit_load_more(ticket));
    if !committed {
        return Task::none();
    }
    let ids = displayed_ids(app);
    thumbnail_tasks(app, ids)
}

fn date_selected(app: &mut App, day: crate::album::DayKey) -> Task<Message> {
    let Some(session) = app.session.as_mut() else {
        return Task::none();
    };
    // Absent days leave every piece of state untouched.
    let Some(jump) = session.window.select_date(day) else {
        return Task::none();
    };
    session.selected_day = Some(day);

    let displayed_len = session.window.displayed_len().max(1);
    let fraction = (jump.window_position as f32 / displayed_len as f32).clamp(0.0, 1.0);

    let ids = displayed_ids(app);
    Task::batch([
        thumbnail_tasks(app, ids),
        iced::widget::operation::snap_to(
            view::gallery_scrollable_id(),
            RelativeOffset {
                x: 0.0,
                y: fraction,
            },
        ),
    ])
}

fn thumbnail_fetched(
    app: &mut App,
    generation: u64,
    id: AssetId,
    result: Result<image::Handle>,
) -> Task<Message> {
    app.pending_thumbnails.remove(&id);
    if generation != app.generation {
        return Task::none();
    }
    match result {
        Ok(handle) => {
            app.thumbnails.insert(id, handle);
        }
        Err(error) => {
            // The cell keeps its placeholder; the proxy may still be warming up.
            debug!("thumbnail fetch failed for {id}: {error}");
        }
    }
    Task::none()
}

fn fullsize_fetched(
    app: &mut App,
    generation: u64,
    id: AssetId,
    result: Result<Vec<u8>>,
) -> Task<Message> {
    app.pending_fullsize.remove(&id);
    if generation != app.generation {
        return Task::none();
    }
    match result {
        Ok(bytes) => {
            app.media_cache.insert(id, bytes);
        }
        Err(error) => {
            warn!("fullsize fetch failed for {id}: {error}");
        }
    }
    Task::none()
}

/// Fetches the current lightbox asset, prefetches the next few images, and
/// asks for a window extension when the cursor nears the end.
fn lightbox_tasks(app: &mut App) -> Task<Message> {
    let (wanted, near_end) = {
        let (Some(session), Some(lightbox)) = (app.session.as_ref(), app.lightbox.as_ref())
        else {
            return Task::none();
        };
        let displayed = session.window.displayed();

        let mut wanted: Vec<AssetId> = Vec::new();
        if let Some(current) = displayed.get(lightbox.index()) {
            if !current.is_video() && !app.media_cache.contains(&current.id) {
                wanted.push(current.id.clone());
            }
        }
        for asset in lightbox.prefetch_targets(displayed, app.config.prefetch_count()) {
            if !app.media_cache.contains(&asset.id) {
                wanted.push(asset.id.clone());
            }
        }

        (wanted, lightbox.near_end(session.window.displayed_len()))
    };

    let mut tasks = vec![fullsize_tasks(app, wanted)];
    if near_end {
        tasks.push(try_begin_load_more(app));
    }
    Task::batch(tasks)
}

fn displayed_ids(app: &App) -> Vec<AssetId> {
    app.session
        .as_ref()
        .map(|session| {
            session
                .window
                .displayed()
                .iter()
                .map(|asset| asset.id.clone())
                .collect()
        })
        .unwrap_or_default()
}

fn thumbnail_tasks(app: &mut App, ids: Vec<AssetId>) -> Task<Message> {
    let Some(client) = app.client.clone() else {
        return Task::none();
    };
    let api_key = app.api_key_input.trim().to_string();
    let generation = app.generation;

    let mut tasks = Vec::new();
    for id in ids {
        if app.thumbnails.contains_key(&id) || app.pending_thumbnails.contains(&id) {
            continue;
        }
        app.pending_thumbnails.insert(id.clone());

        let client = client.clone();
        let api_key = api_key.clone();
        tasks.push(Task::perform(
            async move {
                let result = client
                    .fetch_thumbnail(&api_key, &id)
                    .await
                    .map(image::Handle::from_bytes);
                (id, result)
            },
            move |(id, result)| Message::ThumbnailFetched {
                generation,
                id,
                result,
            },
        ));
    }
    Task::batch(tasks)
}

fn fullsize_tasks(app: &mut App, ids: Vec<AssetId>) -> Task<Message> {
    let Some(client) = app.client.clone() else {
        return Task::none();
    };
    let api_key = app.api_key_input.trim().to_string();
    let generation = app.generation;

    let mut tasks = Vec::new();
    for id in ids {
        if app.pending_fullsize.contains(&id) {
            continue;
        }
        app.pending_fullsize.insert(id.clone());

        let client = client.clone();
        let api_key = api_key.clone();
        tasks.push(Task::perform(
            async move {
                let result = client.fetch_fullsize(&api_key, &id).await;
                (id, result)
            },
            move |(id, result)| Message::FullsizeFetched {
                generation,
                id,
                result,
            },
        ));
    }
    Task::batch(tasks)
}
