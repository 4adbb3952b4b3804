// SPDX-License-Identifier: MPL-2.0
//! View rendering: credentials header, day-grouped gallery, timeline strip,
//! and the fullscreen lightbox.

use super::{App, Message, Session};
use crate::album::{group_by_day, Lightbox};
use crate::api::Asset;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    button, container, scrollable, stack, text, text_input, Column, Id, Image, Row, Space,
};
use iced::{Center, ContentFit, Element, Fill, FillPortion, Length};

/// Height of one thumbnail cell in the grid.
const THUMB_CELL_HEIGHT: f32 = 180.0;

/// Height of the timeline strip at the bottom.
const TIMELINE_HEIGHT: f32 = 96.0;

/// Widget id of the gallery scrollable, shared with the update path so a
/// date jump can snap the scroll position.
pub(super) fn gallery_scrollable_id() -> Id {
    Id::new("gallery")
}

pub(super) fn view(app: &App) -> Element<'_, Message> {
    if let (Some(session), Some(lightbox)) = (&app.session, &app.lightbox) {
        return view_lightbox(app, session, lightbox);
    }

    let mut column = Column::new().push(view_header(app));

    if let Some(error) = &app.error {
        column = column.push(
            container(text(error.as_str()).size(14))
                .padding(8)
                .width(Fill),
        );
    }

    if app.initial_loading {
        column = column.push(
            container(text("Fetching your album...").size(16))
                .center_x(Fill)
                .padding(24),
        );
    }

    match &app.session {
        Some(session) => {
            column = column
                .push(view_gallery(app, session))
                .push(view_timeline(session));
        }
        None if !app.initial_loading => {
            column = column.push(
                container(text("Load an album to browse your memories").size(16))
                    .center_x(Fill)
                    .center_y(Fill),
            );
        }
        None => {}
    }

    column.spacing(4).into()
}

fn view_header(app: &App) -> Element<'_, Message> {
    let inputs = Row::new()
        .spacing(8)
        .push(
            text_input("Enter API Key", &app.api_key_input)
                .secure(true)
                .on_input(Message::ApiKeyChanged)
                .on_submit(Message::SubmitLoadAlbum)
                .width(Length::Fixed(240.0)),
        )
        .push(
            text_input("Enter Album ID", &app.album_id_input)
                .on_input(Message::AlbumIdChanged)
                .on_submit(Message::SubmitLoadAlbum)
                .width(Length::Fixed(300.0)),
        )
        .push(
            button(text(if app.initial_loading {
                "Loading..."
            } else {
                "Load Album"
            }))
            .on_press_maybe((!app.initial_loading).then_some(Message::SubmitLoadAlbum)),
        );

    let mut header = Row::new()
        .spacing(16)
        .padding(12)
        .align_y(Center)
        .push(text("AlbumLens").size(24))
        .push(Space::new().width(Fill))
        .push(inputs);

    if let Some(session) = &app.session {
        header = header.push(
            text(format!(
                "Showing {} / {} memories",
                session.window.displayed_len(),
                session.window.total_len()
            ))
            .size(13),
        );
    }

    header.into()
}

fn view_gallery<'a>(app: &'a App, session: &'a Session) -> Element<'a, Message> {
    let columns = app.config.grid_columns();
    let displayed = session.window.displayed();

    let mut content = Column::new().spacing(20).padding(12);

    for group in group_by_day(displayed) {
        let day_assets = &displayed[group.range.clone()];

        let separator = Row::new()
            .spacing(12)
            .align_y(Center)
            .push(text(group.day.label()).size(18))
            .push(text(format!("{} photos", group.len())).size(13));

        let mut grid = Column::new().spacing(6);
        for (row_index, chunk) in day_assets.chunks(columns).enumerate() {
            let mut row = Row::new().spacing(6);
            for (cell_index, asset) in chunk.iter().enumerate() {
                let display_index = group.range.start + row_index * columns + cell_index;
                row = row.push(thumbnail_cell(app, asset, display_index));
            }
            // Keep cells in the last row the same width as full rows.
            for _ in chunk.len()..columns {
                row = row.push(Space::new().width(FillPortion(1)).height(Length::Shrink));
            }
            grid = grid.push(row);
        }

        content = content.push(Column::new().spacing(8).push(separator).push(grid));
    }

    if session.window.is_loading() {
        content = content.push(container(text("Loading more images...").size(14)).center_x(Fill));
    } else if !session.window.has_more() && session.window.total_len() > 0 {
        content = content.push(
            container(
                text(format!(
                    "You've reached the end! {} images total",
                    session.window.total_len()
                ))
                .size(14),
            )
            .center_x(Fill)
            .padding(12),
        );
    }

    scrollable(content)
        .id(gallery_scrollable_id())
        .on_scroll(Message::GalleryScrolled)
        .width(Fill)
        .height(Fill)
        .into()
}

fn thumbnail_cell<'a>(app: &'a App, asset: &'a Asset, display_index: usize) -> Element<'a, Message> {
    let media: Element<'a, Message> = match app.thumbnails.get(&asset.id) {
        Some(handle) => {
            let picture = Image::new(handle.clone())
                .content_fit(ContentFit::Cover)
                .width(Fill)
                .height(Fill);
            if asset.is_video() {
                stack![picture, video_badge()].into()
            } else {
                picture.into()
            }
        }
        None => container(text("...").size(13))
            .center_x(Fill)
            .center_y(Fill)
            .into(),
    };

    button(
        container(media)
            .width(FillPortion(1))
            .height(Length::Fixed(THUMB_CELL_HEIGHT)),
    )
    .padding(0)
    .style(button::text)
    .on_press(Message::OpenLightbox(display_index))
    .width(FillPortion(1))
    .into()
}

fn video_badge<'a>() -> Element<'a, Message> {
    container(text("▶").size(13))
        .padding(4)
        .align_right(Fill)
        .into()
}

fn view_timeline(session: &Session) -> Element<'_, Message> {
    let mut strip = Row::new().spacing(6).padding(8);

    for summary in &session.summaries {
        let selected = session.selected_day == Some(summary.day);

        let cell = Column::new()
            .align_x(Center)
            .push(text(summary.day.weekday_short()).size(11))
            .push(text(summary.day.day_of_month().to_string()).size(16))
            .push(text(summary.day.month_short()).size(11))
            .push(text(summary.count.to_string()).size(10));

        strip = strip.push(
            button(cell)
                .style(if selected {
                    button::primary
                } else {
                    button::secondary
                })
                .on_press(Message::DateSelected(summary.day)),
        );
    }

    container(
        scrollable(strip)
            .direction(Direction::Horizontal(Scrollbar::new()))
            .width(Fill),
    )
    .height(Length::Fixed(TIMELINE_HEIGHT))
    .into()
}

fn view_lightbox<'a>(
    app: &'a App,
    session: &'a Session,
    lightbox: &'a Lightbox,
) -> Element<'a, Message> {
    let displayed = session.window.displayed();
    let Some(asset) = displayed.get(lightbox.index()) else {
        // The window shrank underneath the cursor; nothing sensible to draw.
        return container(text("")).into();
    };

    let media: Element<'a, Message> = if asset.is_video() {
        // Poster frame plus a badge; playback is delegated to the proxy's
        // stream endpoint.
        match app.thumbnails.get(&asset.id) {
            Some(handle) => stack![
                Image::new(handle.clone())
                    .content_fit(ContentFit::Contain)
                    .width(Fill)
                    .height(Fill),
                container(text("▶ Video").size(16)).center_x(Fill).padding(12),
            ]
            .into(),
            None => container(text("▶ Video").size(20))
                .center_x(Fill)
                .center_y(Fill)
                .into(),
        }
    } else {
        match app
            .media_cache
            .peek(&asset.id)
            .or_else(|| app.thumbnails.get(&asset.id).cloned())
        {
            Some(handle) => Image::new(handle)
                .content_fit(ContentFit::Contain)
                .width(Fill)
                .height(Fill)
                .into(),
            None => container(text("Loading...").size(16))
                .center_x(Fill)
                .center_y(Fill)
                .into(),
        }
    };

    let top_bar = Row::new()
        .padding(12)
        .align_y(Center)
        .push(
            text(format!(
                "{} / {}",
                lightbox.index() + 1,
                session.window.displayed_len()
            ))
            .size(14),
        )
        .push(Space::new().width(Fill))
        .push(button(text("✕").size(16)).on_press(Message::CloseLightbox));

    let nav = Row::new()
        .spacing(8)
        .align_y(Center)
        .push(
            button(text("←").size(20))
                .on_press_maybe(lightbox.has_previous().then_some(Message::LightboxPrevious)),
        )
        .push(container(media).width(Fill).height(Fill))
        .push(
            button(text("→").size(20)).on_press_maybe(
                lightbox
                    .has_next(session.window.displayed_len())
                    .then_some(Message::LightboxNext),
            ),
        );

    let info = Column::new()
        .align_x(Center)
        .spacing(2)
        .padding(8)
        .push(text(asset.created_at.format("%B %-d, %Y  %H:%M").to_string()).size(13))
        .push(text(asset.id.to_string()).size(11))
        .push(text("← → to navigate  •  Esc to close").size(11));

    Column::new()
        .push(top_bar)
        .push(nav)
        .push(info)
        .width(Fill)
        .height(Fill)
        .into()
}
