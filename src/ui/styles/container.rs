// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

/// The photo card: rounded corners and a soft drop shadow, with surface and
/// shadow faded together by `opacity`.
pub fn card(opacity: f32) -> impl Fn(&Theme) -> container::Style {
    let opacity = opacity.clamp(0.0, 1.0);
    move |theme: &Theme| {
        let surface = theme.extended_palette().background.weak.color;

        container::Style {
            background: Some(Background::Color(fade(surface, opacity))),
            border: Border {
                radius: radius::CARD.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: fade(shadow::CARD.color, opacity),
                ..shadow::CARD
            },
            ..Default::default()
        }
    }
}

/// Multiplies the alpha channel of `color` by `factor`.
pub fn fade(color: Color, factor: f32) -> Color {
    Color {
        a: color.a * factor,
        ..color
    }
}

/// Full-window scrim behind a modal dialog.
pub fn scrim(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.overlay_background;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// Opaque dialog surface on top of the scrim.
pub fn dialog(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let surface = colors.surface_primary;
    let text = colors.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        text_color: Some(text),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}
