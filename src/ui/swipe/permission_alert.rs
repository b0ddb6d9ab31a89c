// SPDX-License-Identifier: MPL-2.0
//! Modal alert raised when access to the library is denied.
//!
//! The alert only dismisses itself. Access stays denied for the rest of the
//! session; the user has to change it outside the app and relaunch.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, opaque, stack, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Layers the alert over `base`, blocking interaction with it.
pub fn overlay<'a>(
    base: Element<'a, Message>,
    i18n: &'a I18n,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("permission-denied-title")).size(typography::TITLE_SM);
    let body = Text::new(i18n.tr("permission-denied-body"))
        .size(typography::BODY)
        .color(colors.text_secondary);

    let ok_button = button(
        Container::new(Text::new(i18n.tr("ok")).size(typography::BODY)).center_x(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(styles::button::primary)
    .on_press(Message::DismissAlert);

    let dialog = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(title)
            .push(body)
            .push(ok_button),
    )
    .width(Length::Fixed(sizing::DIALOG_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::dialog(colors));

    // The scrim swallows pointer input so nothing underneath reacts.
    let scrim = opaque(
        Container::new(dialog)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::scrim(colors)),
    );

    stack![base, scrim].into()
}
