//! Root-level subscription composition

use std::time::Duration;

use iced::keyboard::key::Named;
use iced::keyboard::{self, Key, Modifiers};
use iced::{Subscription, event, window};

use crate::messages::{Message, Navigation};
use crate::state::Gallery;

const FRAME: Duration = Duration::from_nanos(8_333_333); // ~120 FPS

pub fn subscription(state: &Gallery) -> Subscription<Message> {
    let mut subscriptions = vec![host_events()];

    if state.needs_frames() {
        subscriptions.push(iced::time::every(FRAME).map(Message::Tick));
    }

    Subscription::batch(subscriptions)
}

/// Keyboard navigation and window resizes.
fn host_events() -> Subscription<Message> {
    event::listen_with(|event, status, _id| match event {
        iced::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        iced::Event::Keyboard(keyboard::Event::KeyPressed {
            key, modifiers, ..
        }) if status != event::Status::Captured => on_key_press(key, modifiers),
        _ => None,
    })
}

fn on_key_press(key: Key, modifiers: Modifiers) -> Option<Message> {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    let nav = match key.as_ref() {
        Key::Named(Named::ArrowRight) => Navigation::Next,
        Key::Named(Named::ArrowLeft) => Navigation::Previous,
        Key::Named(Named::Home) => Navigation::First,
        Key::Named(Named::End) => Navigation::Last,
        _ => return None,
    };
    Some(Message::Navigate(nav))
}
