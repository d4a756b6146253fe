// SPDX-License-Identifier: MPL-2.0
//! Title bar shown above the gallery.
//!
//! The bar only carries the application title. It is hidden in landscape
//! orientation to leave the height to the artwork.

use crate::domain::layout::is_landscape;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Container, Text},
    Element, Length, Size,
};

/// Contextual data needed to render the top bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Decides whether the bar is shown for the current window size.
///
/// An unknown size (before the first resize event) counts as portrait.
#[must_use]
pub fn is_visible(enabled: bool, window_size: Option<Size>) -> bool {
    enabled && !window_size.is_some_and(|size| is_landscape(size.width, size.height))
}

/// Render the top bar.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("top-bar-title")).size(typography::TITLE_LG);

    Container::new(title)
        .width(Length::Fill)
        .height(sizing::TOP_BAR_HEIGHT)
        .padding([0.0, spacing::MD])
        .align_x(Horizontal::Left)
        .align_y(Vertical::Center)
        .style(styles::container::top_bar)
        .into()
}
