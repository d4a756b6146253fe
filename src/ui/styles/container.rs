// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Title bar surface ("primary container" colors).
pub fn top_bar(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.primary_container)),
        text_color: Some(colors.on_primary_container),
        ..Default::default()
    }
}

/// Outline around the primary gallery panel.
pub fn gallery_panel(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: palette::FRAME_GREEN,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Thin frame drawn around the artwork.
pub fn image_frame(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: palette::FRAME_BLUE,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Elevated surface for the informational second pane.
///
/// Uses the scheme's primary surface at [`opacity::SURFACE`].
pub fn info_pane(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    let surface = colors.surface_primary;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..surface
        })),
        text_color: Some(colors.text_primary),
        border: Border {
            color: palette::FRAME_YELLOW,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_use_distinct_accent_colors() {
        let theme = Theme::Light;
        let panel = gallery_panel(&theme).border.color;
        let image = image_frame(&theme).border.color;
        let info = info_pane(&theme).border.color;
        assert_ne!(panel, image);
        assert_ne!(image, info);
        assert_ne!(panel, info);
    }

    #[test]
    fn info_pane_is_elevated() {
        let style = info_pane(&Theme::Dark);
        assert!(style.shadow.blur_radius > 0.0);
    }

    #[test]
    fn info_pane_surface_follows_theme() {
        let light = info_pane(&Theme::Light);
        let dark = info_pane(&Theme::Dark);
        assert_ne!(light.background, dark.background);
        assert_eq!(light.text_color, Some(ColorScheme::light().text_primary));
        assert_eq!(dark.text_color, Some(ColorScheme::dark().text_primary));
    }

    #[test]
    fn top_bar_follows_theme() {
        let light = top_bar(&Theme::Light).background;
        let dark = top_bar(&Theme::Dark).background;
        assert_ne!(light, dark);
    }
}
