// SPDX-License-Identifier: MPL-2.0
//! Adaptive layout rules.
//!
//! Widths are logical pixels, which map one-to-one onto density-independent
//! pixels on mobile platforms. The layout is derived from the width on every
//! layout pass and never stored.

/// Breakpoint bounds and defaults (logical pixels).
pub mod breakpoint_bounds {
    /// Default lower bound of the medium width class.
    pub const DEFAULT_MEDIUM: f32 = 600.0;
    /// Default lower bound of the expanded width class.
    pub const DEFAULT_EXPANDED: f32 = 840.0;
    /// Smallest accepted medium breakpoint.
    pub const MIN_MEDIUM: f32 = 320.0;
    /// Largest accepted medium breakpoint.
    pub const MAX_MEDIUM: f32 = 1600.0;
}

/// Coarse classification of the available width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthClass {
    /// Phones in portrait.
    Compact,
    /// Large phones in landscape, small tablets.
    Medium,
    /// Tablets in landscape, desktop windows.
    Expanded,
}

/// How many panes the gallery shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Only the primary gallery panel.
    Single,
    /// Gallery panel plus the informational panel.
    TwoPane,
}

impl LayoutMode {
    #[must_use]
    pub fn shows_second_pane(self) -> bool {
        matches!(self, LayoutMode::TwoPane)
    }
}

/// Width thresholds used to classify the viewport.
///
/// The expanded threshold never falls below the medium one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    medium: f32,
    expanded: f32,
}

impl Breakpoints {
    /// Creates breakpoints from a medium threshold, clamped to the accepted range.
    #[must_use]
    pub fn new(medium: f32) -> Self {
        let medium = if medium.is_finite() {
            medium.clamp(breakpoint_bounds::MIN_MEDIUM, breakpoint_bounds::MAX_MEDIUM)
        } else {
            breakpoint_bounds::DEFAULT_MEDIUM
        };
        Self {
            medium,
            expanded: breakpoint_bounds::DEFAULT_EXPANDED.max(medium),
        }
    }

    #[must_use]
    pub fn medium(&self) -> f32 {
        self.medium
    }

    #[must_use]
    pub fn expanded(&self) -> f32 {
        self.expanded
    }

    /// Classifies a viewport width.
    #[must_use]
    pub fn classify(&self, width: f32) -> WidthClass {
        if width >= self.expanded {
            WidthClass::Expanded
        } else if width >= self.medium {
            WidthClass::Medium
        } else {
            WidthClass::Compact
        }
    }

    /// Selects the layout for a viewport width: two panes at or above the medium breakpoint.
    #[must_use]
    pub fn layout_for(&self, width: f32) -> LayoutMode {
        match self.classify(width) {
            WidthClass::Compact => LayoutMode::Single,
            WidthClass::Medium | WidthClass::Expanded => LayoutMode::TwoPane,
        }
    }

    /// Shorthand for `layout_for(width).shows_second_pane()`.
    #[must_use]
    pub fn show_second_pane(&self, width: f32) -> bool {
        self.layout_for(width).shows_second_pane()
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::new(breakpoint_bounds::DEFAULT_MEDIUM)
    }
}

/// Returns true when the viewport is wider than it is tall.
#[must_use]
pub fn is_landscape(width: f32, height: f32) -> bool {
    width > height
}
