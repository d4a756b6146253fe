// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: the artwork panel, its navigation buttons and the
//! optional informational pane.

pub mod component;
mod info_pane;
mod panel;

pub use component::{Message, State, ViewEnv};
