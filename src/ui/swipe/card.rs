// SPDX-License-Identifier: MPL-2.0
//! The photo card and the blurred backdrop behind it.

use super::Message;
use crate::application::RenderState;
use crate::domain::{ResolvedImage, TargetSize};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::MotionFrame;
use crate::ui::styles;
use crate::ui::styles::container::fade;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{container, float, image, mouse_area, stack, Column, Container, Text};
use iced::{alignment, mouse, ContentFit, Element, Length, Vector};

/// GPU-ready bitmaps for one photo.
#[derive(Debug, Clone)]
pub struct CardBitmaps {
    pub card: image::Handle,
    pub backdrop: image::Handle,
}

impl From<ResolvedImage> for CardBitmaps {
    fn from(resolved: ResolvedImage) -> Self {
        let card = image::Handle::from_rgba(
            resolved.card.width(),
            resolved.card.height(),
            resolved.card.rgba_bytes().to_vec(),
        );
        let backdrop = image::Handle::from_rgba(
            resolved.backdrop.width(),
            resolved.backdrop.height(),
            resolved.backdrop.rgba_bytes().to_vec(),
        );
        Self { card, backdrop }
    }
}

/// Everything the card needs to draw itself.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub state: &'a RenderState<CardBitmaps>,
    pub frame: MotionFrame,
    pub card_size: TargetSize,
    pub backdrop_opacity: f32,
    pub spinner_rotation: f32,
    /// Whether pressing the card starts a drag.
    pub interactive: bool,
}

/// Renders the backdrop filling the window with the card centered on top,
/// shifted horizontally by the current motion frame.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let offset = ctx.frame.offset;
    let card = float(card_face(&ctx)).translate(move |_bounds, _viewport| Vector::new(offset, 0.0));

    let centered = Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    match backdrop(&ctx) {
        Some(backdrop) => stack![backdrop, centered].into(),
        None => centered.into(),
    }
}

fn backdrop<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let RenderState::Ready { image: bitmaps, .. } = ctx.state else {
        return None;
    };

    Some(
        image(bitmaps.backdrop.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .opacity(ctx.backdrop_opacity)
            .into(),
    )
}

fn card_face<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let width = Length::Fixed(ctx.card_size.width as f32);
    let height = Length::Fixed(ctx.card_size.height as f32);

    let opacity = ctx.frame.opacity;

    let content: Element<'a, Message> = match ctx.state {
        RenderState::Ready { image: bitmaps, .. } => image(bitmaps.card.clone())
            .width(width)
            .height(height)
            .content_fit(ContentFit::Cover)
            .opacity(opacity)
            .into(),
        RenderState::Loading { .. } => centered(
            AnimatedSpinner::new(fade(ctx.colors.brand_primary, opacity), ctx.spinner_rotation)
                .with_size(sizing::ICON_XL)
                .into_element(),
        ),
        RenderState::Failed { .. } => centered(
            Text::new(ctx.i18n.tr("card-load-failed"))
                .size(typography::BODY)
                .color(fade(ctx.colors.text_secondary, opacity))
                .into(),
        ),
        RenderState::Empty => centered(Column::new().into()),
    };

    let face = Container::new(content)
        .width(width)
        .height(height)
        .clip(true)
        .style(styles::container::card(opacity));

    let area = mouse_area(face).interaction(if ctx.interactive {
        mouse::Interaction::Grab
    } else {
        mouse::Interaction::default()
    });

    if ctx.interactive {
        area.on_press(Message::CardPressed).into()
    } else {
        area.into()
    }
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
