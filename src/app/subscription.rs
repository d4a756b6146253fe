// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native events to messages: window opening and resizes update the
//! known window size, and the arrow keys drive the gallery like its buttons do.

use super::Message;
use crate::ui::gallery;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, window, Subscription};

/// Creates the application-wide event subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| event_to_message(event, status))
}

/// Maps a native event to an application message, if it is one we handle.
pub fn event_to_message(event: event::Event, status: event::Status) -> Option<Message> {
    match event {
        event::Event::Window(
            window::Event::Opened { size, .. } | window::Event::Resized(size),
        ) => Some(Message::WindowResized(size)),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => key_to_gallery_message(&key).map(Message::Gallery),
            event::Status::Captured => None,
        },
        _ => None,
    }
}

/// Maps a key press to the gallery action it triggers, if any.
#[must_use]
pub fn key_to_gallery_message(key: &Key) -> Option<gallery::Message> {
    match key {
        Key::Named(Named::ArrowRight) => Some(gallery::Message::Next),
        Key::Named(Named::ArrowLeft) => Some(gallery::Message::Previous),
        _ => None,
    }
}
