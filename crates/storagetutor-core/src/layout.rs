//! Page layout state: the collapsible sidebar and compact mode.

use serde::Serialize;

/// Viewport width below which the layout switches to compact mode.
pub const COMPACT_BREAKPOINT_PX: f64 = 768.0;

/// Owns the sidebar state. Passed to whoever needs it; never global.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutController {
    sidebar_collapsed: bool,
    compact: bool,
    width: f64,
}

impl LayoutController {
    pub fn new(width: f64) -> Self {
        let compact = width < COMPACT_BREAKPOINT_PX;
        Self {
            sidebar_collapsed: compact,
            compact,
            width,
        }
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub fn compact(&self) -> bool {
        self.compact
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Flip the sidebar. Returns the new collapsed state.
    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        log::debug!("sidebar collapsed: {}", self.sidebar_collapsed);
        self.sidebar_collapsed
    }

    /// Collapse the sidebar in compact mode, e.g. after picking a section.
    pub fn collapse_if_compact(&mut self) -> bool {
        if self.compact && !self.sidebar_collapsed {
            self.sidebar_collapsed = true;
            return true;
        }
        false
    }

    /// Re-apply layout for a new viewport width.
    ///
    /// Crossing the breakpoint resets the sidebar to the default for the new
    /// mode. Returns true if anything visible changed.
    pub fn apply_width(&mut self, width: f64) -> bool {
        self.width = width;
        let compact = width < COMPACT_BREAKPOINT_PX;
        if compact == self.compact {
            return false;
        }
        self.compact = compact;
        self.sidebar_collapsed = compact;
        log::info!("layout: compact={} at width {}", compact, width);
        true
    }
}

impl Default for LayoutController {
    fn default() -> Self {
        Self::new(1280.0)
    }
}
