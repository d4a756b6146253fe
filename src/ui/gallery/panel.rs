// SPDX-License-Identifier: MPL-2.0
//! Primary gallery panel: artwork, captions and navigation buttons.

use super::Message;
use crate::domain::gallery::ArtworkIndex;
use crate::i18n::fluent::I18n;
use crate::media::ArtworkCatalog;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, text, tooltip, Column, Container, Row, Scrollable, Svg, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length, Padding, Theme,
};

pub struct ViewModel<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a ArtworkCatalog,
    pub index: ArtworkIndex,
}

pub fn view<'a>(model: ViewModel<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::MD)
        .padding(Padding {
            top: spacing::XL,
            ..Padding::ZERO
        })
        .align_x(Horizontal::Center)
        .push(artwork(&model))
        .push(captions(model.i18n))
        .push(navigation_row(model.i18n));

    Container::new(Scrollable::new(content).width(Length::Fill))
        .width(sizing::PANEL_WIDTH)
        .padding(sizing::PANEL_PADDING)
        .style(styles::container::gallery_panel)
        .into()
}

fn artwork<'a>(model: &ViewModel<'a>) -> Element<'a, Message> {
    let entry = model.catalog.get(model.index);
    let image = Svg::new(model.catalog.handle(model.index))
        .width(Length::Fill)
        .content_fit(ContentFit::Cover);

    let framed = Container::new(image)
        .max_width(sizing::IMAGE_MAX_WIDTH)
        .max_height(sizing::IMAGE_MAX_HEIGHT)
        .padding(1)
        .style(styles::container::image_frame);

    // Svg has no alt text; expose the description on hover instead.
    tooltip(
        framed,
        container(Text::new(model.i18n.tr(entry.description_key)).size(typography::BODY))
            .padding(spacing::XS)
            .style(container::rounded_box),
        tooltip::Position::Bottom,
    )
    .into()
}

fn captions<'a>(i18n: &I18n) -> Element<'a, Message> {
    let title = Container::new(
        Text::new(i18n.tr("gallery-artwork-title"))
            .size(typography::TITLE_LG)
            .style(caption_style),
    )
    .padding(spacing::MD);

    let subtitle = Container::new(
        Text::new(i18n.tr("gallery-artwork-subtitle"))
            .size(typography::TITLE_MD)
            .style(caption_style),
    )
    .padding(Padding {
        left: sizing::SUBTITLE_INSET,
        ..Padding::ZERO
    });

    Container::new(Column::new().push(title).push(subtitle))
        .padding(spacing::MD)
        .align_y(Vertical::Center)
        .into()
}

fn caption_style(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_caption),
    }
}

/// Previous on the leading edge, Next on the trailing edge.
fn navigation_row<'a>(i18n: &I18n) -> Element<'a, Message> {
    let previous = button(text(i18n.tr("gallery-previous-button")).size(typography::BODY))
        .on_press(Message::Previous)
        .padding([spacing::XS, spacing::LG])
        .height(sizing::BUTTON_HEIGHT)
        .style(styles::button::primary);

    let next = button(text(i18n.tr("gallery-next-button")).size(typography::BODY))
        .on_press(Message::Next)
        .padding([spacing::XS, spacing::LG])
        .height(sizing::BUTTON_HEIGHT)
        .style(styles::button::primary);

    Row::new()
        .width(Length::Fill)
        .align_y(Vertical::Center)
        .push(
            Container::new(previous)
                .width(Length::Fill)
                .align_x(Horizontal::Left),
        )
        .push(
            Container::new(next)
                .width(Length::Fill)
                .align_x(Horizontal::Right),
        )
        .into()
}
