// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! `App` owns the album session, the thumbnail and fullsize caches, and the
//! credentials form, and translates messages into side effects (network
//! fetches, preference writes, scroll commands). Policy decisions - page
//! size selection, persistence format, cancellation of superseded fetches -
//! stay close to the update loop so user-facing behavior is easy to audit.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::album::{day_summaries, AssetWindow, DayKey, DaySummary, Lightbox};
use crate::api::{AssetId, ProxyClient};
use crate::media::MediaCache;
use config::Config;
use iced::widget::image;
use iced::{window, Element, Size, Subscription, Task, Theme};
use persisted_state::{AppState, DiskStore, PreferenceStore};
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::warn;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// State for one loaded album. Replaced wholesale on the next album fetch.
pub struct Session {
    /// The windowing core: full list plus displayed bounds.
    pub window: AssetWindow,
    /// Unique days for the timeline strip, derived once per fetch.
    pub summaries: Vec<DaySummary>,
    /// Currently highlighted timeline day, if any.
    pub selected_day: Option<DayKey>,
}

/// Root Iced application state.
pub struct App {
    pub(crate) config: Config,
    pub(crate) client: Option<ProxyClient>,
    pub(crate) store: Box<dyn PreferenceStore>,
    pub(crate) persisted: AppState,
    pub(crate) api_key_input: String,
    pub(crate) album_id_input: String,
    pub(crate) session: Option<Session>,
    pub(crate) thumbnails: HashMap<AssetId, image::Handle>,
    pub(crate) pending_thumbnails: HashSet<AssetId>,
    pub(crate) pending_fullsize: HashSet<AssetId>,
    pub(crate) media_cache: MediaCache,
    pub(crate) lightbox: Option<Lightbox>,
    pub(crate) error: Option<String>,
    pub(crate) initial_loading: bool,
    /// Album fetch generation; bumping it drops in-flight completions.
    pub(crate) generation: u64,
    /// Page size fixed at session start from the startup window width.
    pub(crate) page_size: usize,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("has_session", &self.session.is_some())
            .field("lightbox", &self.lightbox)
            .field("initial_loading", &self.initial_loading)
            .finish()
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a Fn boot closure; the flags are consumed exactly once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and, when stored credentials exist,
    /// kicks off loading of the last album.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir, flags.config_dir);

        let (mut config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            warn!("{warning}");
        }
        if let Some(server) = flags.server {
            config.server.base_url = Some(server);
        }

        let (client, client_error) =
            match ProxyClient::new(config.base_url(), config.request_timeout()) {
                Ok(client) => (Some(client), None),
                Err(error) => (None, Some(error.to_string())),
            };

        let store: Box<dyn PreferenceStore> = Box::new(DiskStore::new());
        let (persisted, state_warning) = store.load();
        if let Some(warning) = state_warning {
            warn!("{warning}");
        }

        let api_key_input = flags
            .api_key
            .or_else(|| persisted.api_key.clone())
            .unwrap_or_default();
        let album_id_input = flags
            .album_id
            .or_else(|| persisted.album_id.clone())
            .unwrap_or_default();

        let page_size = config.items_per_page_for_width(WINDOW_DEFAULT_WIDTH as f32);
        let media_cache = MediaCache::new(config.cache_bytes());

        let app = App {
            client,
            store,
            persisted,
            api_key_input,
            album_id_input,
            session: None,
            thumbnails: HashMap::new(),
            pending_thumbnails: HashSet::new(),
            pending_fullsize: HashSet::new(),
            media_cache,
            lightbox: None,
            error: client_error,
            initial_loading: false,
            generation: 0,
            page_size,
            config,
        };

        // Saved credentials auto-load the last album on startup.
        let task = if !app.api_key_input.trim().is_empty() && !app.album_id_input.trim().is_empty()
        {
            Task::done(Message::SubmitLoadAlbum)
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        String::from("AlbumLens")
    }

    fn theme(&self) -> Theme {
        match self.config.general.theme.unwrap_or_default() {
            config::ThemeChoice::Light => Theme::Light,
            config::ThemeChoice::Dark => Theme::Dark,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    /// Rebuilds session state from a fetched asset list.
    pub(crate) fn install_session(&mut self, assets: Vec<crate::api::Asset>) {
        let summaries = day_summaries(&assets);
        self.session = Some(Session {
            window: AssetWindow::new(assets, self.page_size),
            summaries,
            selected_day: None,
        });
    }
}
