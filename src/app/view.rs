// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Picks the screen matching the controller's phase, layers the permission
//! alert on top when it is raised, and the toasts above everything.

use super::Message;
use crate::application::{ImageRenderer, LoadPhase, SwipeController};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::sizing;
use crate::ui::notifications::{self, Toast};
use crate::ui::state::MotionFrame;
use crate::ui::swipe::{self, card, empty_state, permission_alert, CardBitmaps};
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::{animated_spinner, AnimatedSpinner};
use iced::widget::{stack, Column, Container};
use iced::{alignment, Element, Length};
use std::time::Duration;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub controller: &'a SwipeController,
    pub renderer: &'a ImageRenderer<CardBitmaps>,
    pub frame: MotionFrame,
    pub backdrop_opacity: f32,
    pub spinner_elapsed: Duration,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen = view_screen(&ctx);

    let screen = if ctx.controller.is_alert_visible() {
        permission_alert::overlay(screen, ctx.i18n, ctx.colors)
    } else {
        screen
    };

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Container::new(stack![screen.map(Message::Swipe), toasts])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Which screen the controller's state calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Loading,
    Card,
    /// No photos to show. `retry` is off once access was denied.
    Empty { retry: bool },
    Blank,
}

impl Screen {
    fn for_controller(controller: &SwipeController) -> Self {
        if controller.is_loading() {
            return Self::Loading;
        }

        if controller.current_photo().is_some() {
            return Self::Card;
        }

        match controller.phase() {
            LoadPhase::Loaded => Self::Empty { retry: true },
            LoadPhase::Denied => Self::Empty { retry: false },
            LoadPhase::Idle | LoadPhase::AwaitingAuthorization | LoadPhase::Fetching => {
                Self::Blank
            }
        }
    }
}

fn view_screen<'a>(ctx: &ViewContext<'a>) -> Element<'a, swipe::Message> {
    let spinner_rotation = animated_spinner::rotation_at(ctx.spinner_elapsed);

    match Screen::for_controller(ctx.controller) {
        Screen::Loading => centered(
            AnimatedSpinner::new(ctx.colors.brand_primary, spinner_rotation)
                .with_size(sizing::ICON_XL)
                .into_element(),
        ),
        Screen::Card => card::view(card::ViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors,
            state: ctx.renderer.state(),
            frame: ctx.frame,
            card_size: ctx.renderer.target_size(),
            backdrop_opacity: ctx.backdrop_opacity,
            spinner_rotation,
            interactive: ctx.controller.accepts_gestures(),
        }),
        Screen::Empty { retry } => empty_state::view(ctx.i18n, ctx.colors, retry),
        Screen::Blank => centered(Column::new().into()),
    }
}

fn centered(content: Element<'_, swipe::Message>) -> Element<'_, swipe::Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Authorization, PhotoHandle};

    #[test]
    fn fresh_controller_shows_blank_screen() {
        assert_eq!(Screen::for_controller(&SwipeController::new()), Screen::Blank);
    }

    #[test]
    fn pending_authorization_shows_spinner() {
        let mut controller = SwipeController::new();
        let _ = controller.load_photos(Authorization::NotDetermined);
        assert_eq!(Screen::for_controller(&controller), Screen::Loading);
    }

    #[test]
    fn loaded_photos_show_card() {
        let mut controller = SwipeController::new();
        let _ = controller.load_photos(Authorization::Authorized);
        controller.photos_fetched(Ok(vec![PhotoHandle::new("a.jpg")]));
        assert_eq!(Screen::for_controller(&controller), Screen::Card);
    }

    #[test]
    fn empty_library_offers_retry() {
        let mut controller = SwipeController::new();
        let _ = controller.load_photos(Authorization::Authorized);
        controller.photos_fetched(Ok(Vec::new()));
        assert_eq!(
            Screen::for_controller(&controller),
            Screen::Empty { retry: true }
        );
    }

    #[test]
    fn denied_library_shows_empty_message_without_retry() {
        let mut controller = SwipeController::new();
        let _ = controller.load_photos(Authorization::Denied);
        controller.dismiss_alert();

        assert!(!controller.is_alert_visible());
        assert_eq!(
            Screen::for_controller(&controller),
            Screen::Empty { retry: false }
        );
    }
}
