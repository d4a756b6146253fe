// SPDX-License-Identifier: MPL-2.0
//! Static informational pane shown next to the gallery on wide layouts.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Container, Text};
use iced::Element;

pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    let surface = Container::new(Text::new(i18n.tr("second-pane-text")).size(typography::BODY))
        .width(sizing::PANEL_WIDTH)
        .padding(spacing::XS)
        .style(styles::container::info_pane);

    Container::new(surface).padding(sizing::PANEL_PADDING).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_pane_renders() {
        let i18n = I18n::default();
        let _element = view(&i18n);
    }
}
