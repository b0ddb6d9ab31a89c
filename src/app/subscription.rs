// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Pointer moves and left-button releases are routed window-wide so a drag
//! keeps tracking (and ends) outside the card. Keyboard shortcuts only fire
//! when no widget captured the key.

use super::{config, Message};
use iced::{event, keyboard, mouse, time, Subscription};
use std::time::Duration;

/// Tick interval while toasts are on screen.
const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

/// Tick interval otherwise; only drains diagnostics.
const IDLE_TICK: Duration = Duration::from_secs(1);

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        let pointer = matches!(
            event,
            event::Event::Mouse(
                mouse::Event::CursorMoved { .. }
                    | mouse::Event::ButtonReleased(mouse::Button::Left)
            )
        );
        if pointer {
            return Some(Message::RawEvent {
                window: window_id,
                event,
            });
        }

        let key_press = matches!(
            event,
            event::Event::Keyboard(keyboard::Event::KeyPressed { .. })
        );
        if key_press && status == event::Status::Ignored {
            return Some(Message::RawEvent {
                window: window_id,
                event,
            });
        }

        None
    })
}

/// Frame ticks while the card, or a spinner, is moving.
pub fn create_animation_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(config::ANIMATION_FRAME_MS)).map(Message::AnimationTick)
    } else {
        Subscription::none()
    }
}

pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    let interval = if has_notifications {
        NOTIFICATION_TICK
    } else {
        IDLE_TICK
    };
    time::every(interval).map(Message::Tick)
}
