// SPDX-License-Identifier: MPL-2.0
//! `art_space` is a small art gallery built with the Iced GUI framework.
//!
//! It shows one of four embedded artworks at a time with Previous/Next
//! controls that wrap around, and adds a second informational pane when the
//! window is wide enough. Strings are localized with Fluent.

#![doc(html_root_url = "https://docs.rs/art_space/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod media;
pub mod ui;
