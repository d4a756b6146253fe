// SPDX-License-Identifier: MPL-2.0
//! Gallery component encapsulating navigation state and rendering.
//!
//! The component owns the mounted [`GalleryState`] and the artwork catalog.
//! The pane layout is not stored: it is chosen from the available width on
//! every layout pass.

use super::{info_pane, panel};
use crate::domain::gallery::{ArtworkIndex, GalleryState};
use crate::domain::layout::{Breakpoints, LayoutMode};
use crate::i18n::fluent::I18n;
use crate::media::ArtworkCatalog;
use crate::ui::design_tokens::sizing;
use iced::widget::{responsive, Row};
use iced::{alignment::Vertical, Element, Size};

/// Messages emitted by the gallery controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
}

/// Environment needed to render the gallery.
#[derive(Clone, Copy)]
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub breakpoints: Breakpoints,
}

/// Mounted gallery state.
#[derive(Debug, Clone, Default)]
pub struct State {
    gallery: GalleryState,
    catalog: ArtworkCatalog,
}

impl State {
    /// Mounts the gallery on the first artwork.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current_index(&self) -> ArtworkIndex {
        self.gallery.current()
    }

    /// Applies a navigation message. Every message is a complete transition.
    pub fn update(&mut self, message: Message) {
        let index = match message {
            Message::Next => self.gallery.advance(),
            Message::Previous => self.gallery.retreat(),
        };
        tracing::debug!(?message, index = index.value(), "gallery navigated");
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        responsive(move |available: Size| self.view_for_width(env, available.width)).into()
    }

    /// Builds the layout for a given available width.
    pub fn view_for_width<'a>(&'a self, env: ViewEnv<'a>, width: f32) -> Element<'a, Message> {
        self.view_for_layout(env, env.breakpoints.layout_for(width))
    }

    /// Builds the panes of `mode`: the panel alone, or panel and info pane in a row.
    pub fn view_for_layout<'a>(
        &'a self,
        env: ViewEnv<'a>,
        mode: LayoutMode,
    ) -> Element<'a, Message> {
        let primary = panel::view(panel::ViewModel {
            i18n: env.i18n,
            catalog: &self.catalog,
            index: self.current_index(),
        });

        match mode {
            LayoutMode::Single => primary,
            LayoutMode::TwoPane => Row::new()
                .spacing(sizing::PANE_GAP)
                .align_y(Vertical::Top)
                .push(primary)
                .push(info_pane::view(env.i18n))
                .into(),
        }
    }
}
