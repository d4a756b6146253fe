// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! This module follows the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`gallery`] - Artwork panel with Previous/Next navigation and the
//!   adaptive second pane
//!
//! # Shared Infrastructure
//!
//! - [`top_bar`] - Title bar above the gallery
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod styles;
pub mod theming;
pub mod top_bar;
