// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::domain::layout::Breakpoints;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::top_bar::{self, ViewContext as TopBarViewContext};
use iced::{
    widget::{Column, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    pub breakpoints: Breakpoints,
    pub show_top_bar: bool,
}

/// Renders the gallery screen, with the top bar when it is visible.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery_view = ctx
        .gallery
        .view(gallery::ViewEnv {
            i18n: ctx.i18n,
            breakpoints: ctx.breakpoints,
        })
        .map(Message::Gallery);

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);
    if ctx.show_top_bar {
        column = column.push(top_bar::view(TopBarViewContext { i18n: ctx.i18n }));
    }
    column = column.push(
        Container::new(gallery_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
