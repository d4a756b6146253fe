// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring between the gallery, localization and
//! configuration.
//!
//! The `App` struct owns the mounted gallery and the presentation settings
//! resolved at startup. Gallery state lives only in memory: nothing is
//! written back to disk.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use subscription::key_to_gallery_message;

use crate::config::{self, Config, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::domain::gallery::ArtworkIndex;
use crate::domain::layout::Breakpoints;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::theming::ThemeMode;
use crate::ui::top_bar;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    breakpoints: Breakpoints,
    theme_mode: ThemeMode,
    /// Top bar preference from config; orientation may still hide it.
    top_bar_enabled: bool,
    /// Last known window size: the configured size until the window reports one.
    window_size: Option<Size>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_index", &self.gallery.current_index())
            .field("window_size", &self.window_size)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            gallery: gallery::State::new(),
            breakpoints: Breakpoints::default(),
            theme_mode: ThemeMode::System,
            top_bar_enabled: config::DEFAULT_SHOW_TOP_BAR,
            window_size: None,
        }
    }
}

/// Builds the window settings from the `[window]` config section.
pub fn window_settings(config: &Config) -> window::Settings {
    let (width, height) = config.window.size();

    window::Settings {
        size: Size::new(width, height),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    paths::init_cli_override(flags.config_dir.clone());
    let (config, config_warning) = config::load();
    let window = window_settings(&config);

    // iced requires a `Fn` boot function, so each call rebuilds from clones.
    let boot = move || App::new(&flags, &config, config_warning.as_deref());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from CLI flags and the loaded config.
    pub fn new(
        flags: &Flags,
        config: &Config,
        config_warning: Option<&str>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), config);

        if let Some(key) = config_warning {
            tracing::warn!("{}", i18n.tr(key));
        }

        let (width, height) = config.window.size();

        let app = App {
            i18n,
            window_size: Some(Size::new(width, height)),
            breakpoints: config.layout.breakpoints(),
            theme_mode: config.general.theme_mode,
            top_bar_enabled: config
                .layout
                .show_top_bar
                .unwrap_or(config::DEFAULT_SHOW_TOP_BAR),
            ..Self::default()
        };
        tracing::info!(
            locale = %app.i18n.current_locale(),
            medium_breakpoint = app.breakpoints.medium(),
            "gallery mounted"
        );

        (app, Task::none())
    }

    /// Artwork currently on display.
    #[must_use]
    pub fn current_index(&self) -> ArtworkIndex {
        self.gallery.current_index()
    }

    /// Whether the top bar is part of the current view.
    #[must_use]
    pub fn shows_top_bar(&self) -> bool {
        top_bar::is_visible(self.top_bar_enabled, self.window_size)
    }

    #[must_use]
    pub fn breakpoints(&self) -> Breakpoints {
        self.breakpoints
    }

    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery_message) => self.gallery.update(gallery_message),
            Message::WindowResized(size) => self.window_size = Some(size),
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            breakpoints: self.breakpoints,
            show_top_bar: self.shows_top_bar(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(config: &Config) -> App {
        App::new(&Flags::default(), config, None).0
    }

    #[test]
    fn app_starts_on_first_artwork() {
        assert_eq!(App::default().current_index(), ArtworkIndex::FIRST);
        assert_eq!(app_with(&Config::default()).current_index().value(), 0);
    }

    #[test]
    fn gallery_messages_navigate() {
        let mut app = App::default();
        let _ = app.update(Message::Gallery(gallery::Message::Previous));
        assert_eq!(app.current_index().value(), 3);
        let _ = app.update(Message::Gallery(gallery::Message::Next));
        assert_eq!(app.current_index().value(), 0);
    }

    #[test]
    fn resizing_across_breakpoint_keeps_navigation_state() {
        let mut app = App::default();
        let _ = app.update(Message::Gallery(gallery::Message::Next));
        let _ = app.update(Message::Gallery(gallery::Message::Next));

        for size in [Size::new(400.0, 800.0), Size::new(1200.0, 800.0)] {
            let _ = app.update(Message::WindowResized(size));
            let _element = app.view();
            assert_eq!(app.current_index().value(), 2);
        }
    }

    #[test]
    fn top_bar_hides_in_landscape() {
        let mut app = App::default();
        assert!(app.shows_top_bar());
        let _ = app.update(Message::WindowResized(Size::new(900.0, 400.0)));
        assert!(!app.shows_top_bar());
        let _ = app.update(Message::WindowResized(Size::new(400.0, 900.0)));
        assert!(app.shows_top_bar());
    }

    #[test]
    fn default_landscape_window_hides_top_bar_at_launch() {
        let app = App::new(&Flags::default(), &Config::default(), None).0;
        assert!(!app.shows_top_bar());
    }

    #[test]
    fn portrait_window_shows_top_bar_at_launch() {
        let mut config = Config::default();
        config.window.width = Some(400.0);
        config.window.height = Some(800.0);
        let mut app = app_with(&config);
        assert!(app.shows_top_bar());

        let _ = app.update(Message::WindowResized(Size::new(1000.0, 800.0)));
        assert!(!app.shows_top_bar());
    }

    #[test]
    fn config_disables_top_bar() {
        let mut config = Config::default();
        config.layout.show_top_bar = Some(false);
        assert!(!app_with(&config).shows_top_bar());
    }

    #[test]
    fn config_sets_breakpoint_and_theme() {
        let mut config = Config::default();
        config.layout.medium_breakpoint = Some(720.0);
        config.general.theme_mode = ThemeMode::Light;
        let app = app_with(&config);
        assert_eq!(app.breakpoints().medium(), 720.0);
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn title_is_localized() {
        let app = App::new(
            &Flags {
                lang: Some("en-US".to_string()),
                config_dir: None,
            },
            &Config::default(),
            None,
        )
        .0;
        assert_eq!(app.title(), "ArtSpace");
    }

    #[test]
    fn window_settings_follow_config() {
        let mut config = Config::default();
        config.window.width = Some(1024.0);
        config.window.height = Some(100.0);
        let settings = window_settings(&config);
        assert_eq!(settings.size, Size::new(1024.0, MIN_WINDOW_HEIGHT));
        assert_eq!(
            settings.min_size,
            Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT))
        );
    }
}
