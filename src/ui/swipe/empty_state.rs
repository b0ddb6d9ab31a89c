// SPDX-License-Identifier: MPL-2.0
//! Empty state shown when there are no photos to swipe through.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Renders the "no photos" message, plus a button to check the library again
/// when `retry` is set.
pub fn view<'a>(i18n: &'a I18n, colors: &ColorScheme, retry: bool) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("empty-library"))
        .size(typography::TITLE_MD)
        .color(colors.text_secondary);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title);

    if retry {
        let retry_button =
            button(Text::new(i18n.tr("empty-library-retry")).size(typography::BODY))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::RetryLoad);
        content = content.push(retry_button);
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
