// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions.
//!
//! Keyboard navigation only exists while the lightbox is open: Left/Right
//! step through the window, Escape returns to the gallery. Events already
//! captured by a focused widget are left alone.

use super::{App, Message};
use iced::{event, keyboard, Subscription};

pub(super) fn subscription(app: &App) -> Subscription<Message> {
    if app.lightbox.is_none() {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window| {
        if status == event::Status::Captured {
            return None;
        }

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(named),
                ..
            }) => match named {
                keyboard::key::Named::Escape => Some(Message::CloseLightbox),
                keyboard::key::Named::ArrowLeft => Some(Message::LightboxPrevious),
                keyboard::key::Named::ArrowRight => Some(Message::LightboxNext),
                _ => None,
            },
            _ => None,
        }
    })
}
