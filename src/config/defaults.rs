// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Layout**: Breakpoint and top bar defaults
//! - **Window**: Initial and minimum window size

pub use crate::domain::layout::breakpoint_bounds::{
    DEFAULT_MEDIUM as DEFAULT_MEDIUM_BREAKPOINT, MAX_MEDIUM as MAX_MEDIUM_BREAKPOINT,
    MIN_MEDIUM as MIN_MEDIUM_BREAKPOINT,
};

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Whether the title bar is shown (in portrait orientation).
pub const DEFAULT_SHOW_TOP_BAR: bool = true;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 800.0;

/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 650.0;

/// Minimum window width: one gallery panel plus margins.
pub const MIN_WINDOW_WIDTH: f32 = 320.0;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

const _: () = {
    assert!(MIN_WINDOW_WIDTH <= DEFAULT_WINDOW_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= DEFAULT_WINDOW_HEIGHT);
    assert!(MIN_MEDIUM_BREAKPOINT <= DEFAULT_MEDIUM_BREAKPOINT);
    assert!(DEFAULT_MEDIUM_BREAKPOINT <= MAX_MEDIUM_BREAKPOINT);
};
