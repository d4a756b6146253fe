// SPDX-License-Identifier: MPL-2.0
//! Domain layer - gallery rules with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`gallery`]: the artwork ring ([`ArtworkIndex`](gallery::ArtworkIndex),
//!   [`next`](gallery::next), [`previous`](gallery::previous))
//! - [`layout`]: width classification and pane selection
//!   ([`Breakpoints`](layout::Breakpoints), [`LayoutMode`](layout::LayoutMode))

pub mod gallery;
pub mod layout;
