//! Edge detection and progress for the horizontal card scroller.

use serde::Serialize;

use crate::constants::scroller::{
    DESKTOP_BREAKPOINT_PX, EDGE_TOLERANCE_PX, MIN_PROGRESS_PERCENT, STEP_FRACTION,
};

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Toward the first card
    Left,
    /// Toward the last card
    Right,
}

/// Raw scroll metrics of the container element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// `scrollLeft`
    pub scroll_left: f64,
    /// `scrollWidth`
    pub scroll_width: f64,
    /// `clientWidth`
    pub client_width: f64,
}

/// Derived state used to toggle arrows, fade edges and the progress bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    /// Content hidden off the left edge
    pub can_scroll_left: bool,
    /// Content hidden off the right edge
    pub can_scroll_right: bool,
    /// Scroll position, 0 to 100
    pub progress: f64,
}

impl ScrollMetrics {
    /// Compute arrow and progress state.
    pub fn state(&self) -> ScrollState {
        let max_scroll = self.scroll_width - self.client_width;
        let progress = if max_scroll > 0.0 {
            (self.scroll_left / max_scroll * 100.0).clamp(0.0, 100.0)
        } else {
            // Everything fits
            100.0
        };

        ScrollState {
            can_scroll_left: self.scroll_left > EDGE_TOLERANCE_PX,
            can_scroll_right: self.scroll_left < max_scroll - EDGE_TOLERANCE_PX,
            progress,
        }
    }

    /// Signed horizontal distance for one arrow click.
    pub fn step(&self, direction: ScrollDirection) -> f64 {
        let amount = self.client_width * STEP_FRACTION;
        match direction {
            ScrollDirection::Left => -amount,
            ScrollDirection::Right => amount,
        }
    }
}

impl ScrollState {
    /// Width of the progress bar fill, in percent.
    pub fn indicator_width(&self) -> f64 {
        self.progress.max(MIN_PROGRESS_PERCENT)
    }

    /// CSS classes for the fade-edge wrapper.
    pub fn fade_classes(&self) -> String {
        let mut classes = String::from("scroll-fade-edges");
        if !self.can_scroll_left {
            classes.push_str(" at-start");
        }
        if !self.can_scroll_right {
            classes.push_str(" at-end");
        }
        classes
    }

    /// Everything the page applies after a scroll or resize.
    pub fn view(&self) -> ScrollView {
        ScrollView {
            can_scroll_left: self.can_scroll_left,
            can_scroll_right: self.can_scroll_right,
            progress: self.progress,
            indicator_width: self.indicator_width(),
            fade_classes: self.fade_classes(),
        }
    }
}

/// Render-ready scroller state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollView {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
    pub progress: f64,
    /// Progress bar fill, in percent
    pub indicator_width: f64,
    /// Class list for the fade-edge wrapper
    pub fade_classes: String,
}

/// Whether the scroller renders as a static grid at this viewport width.
pub fn is_grid_layout(viewport_width_px: f64) -> bool {
    viewport_width_px >= DESKTOP_BREAKPOINT_PX
}
