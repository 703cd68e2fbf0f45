//! Horizontal swipe recognition for touch input.
//!
//! A touch sequence only becomes a drag once the finger has moved further
//! sideways than both the noise threshold and its vertical travel, so
//! vertical page scrolling is never hijacked.

use crate::constants;

/// Direction of a recognized swipe, in terms of finger travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: show the next item
    Left,
    /// Finger moved right: show the previous item
    Right,
}

/// Thresholds for swipe recognition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Net horizontal travel required at touch-end
    pub swipe_threshold_px: f64,
    /// Horizontal travel required before a drag is armed
    pub drag_noise_px: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: constants::carousel::SWIPE_THRESHOLD_PX,
            drag_noise_px: constants::carousel::DRAG_NOISE_PX,
        }
    }
}

/// Per-sequence touch tracking state.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    config: SwipeConfig,
    start_x: f64,
    start_y: f64,
    last_x: f64,
    is_dragging: bool,
    active: bool,
}

impl SwipeTracker {
    /// Create a tracker with the given thresholds.
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Thresholds in use.
    pub fn config(&self) -> SwipeConfig {
        self.config
    }

    /// Whether the current sequence has been armed as a horizontal drag.
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Begin a new touch sequence.
    pub fn touch_start(&mut self, x: f64, y: f64) {
        self.start_x = x;
        self.start_y = y;
        self.last_x = x;
        self.is_dragging = false;
        self.active = true;
    }

    /// Track finger movement.
    ///
    /// Returns `true` while the sequence is a horizontal drag; the caller
    /// should then suppress default scrolling.
    pub fn touch_move(&mut self, x: f64, y: f64) -> bool {
        if !self.active {
            return false;
        }
        self.last_x = x;

        if !self.is_dragging {
            let dx = (x - self.start_x).abs();
            let dy = (y - self.start_y).abs();
            if dx > self.config.drag_noise_px && dx > dy {
                self.is_dragging = true;
                log::trace!("Swipe: drag armed (dx={:.1}, dy={:.1})", dx, dy);
            }
        }
        self.is_dragging
    }

    /// Finish the sequence, returning the swipe if one was recognized.
    pub fn touch_end(&mut self) -> Option<SwipeDirection> {
        let was_dragging = self.active && self.is_dragging;
        let dx = self.last_x - self.start_x;
        self.reset();

        if !was_dragging || dx.abs() <= self.config.swipe_threshold_px {
            return None;
        }
        Some(if dx < 0.0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        })
    }

    /// Abandon the current sequence (touch-cancel).
    pub fn reset(&mut self) {
        self.start_x = 0.0;
        self.start_y = 0.0;
        self.last_x = 0.0;
        self.is_dragging = false;
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(tracker: &mut SwipeTracker, dx: f64, dy: f64) -> Option<SwipeDirection> {
        tracker.touch_start(200.0, 300.0);
        // Move in a few steps like a real finger
        for step in 1..=4 {
            let f = step as f64 / 4.0;
            tracker.touch_move(200.0 + dx * f, 300.0 + dy * f);
        }
        tracker.touch_end()
    }

    #[test]
    fn test_left_swipe() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(swipe(&mut tracker, -60.0, 0.0), Some(SwipeDirection::Left));
    }

    #[test]
    fn test_right_swipe() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(swipe(&mut tracker, 60.0, 5.0), Some(SwipeDirection::Right));
    }

    #[test]
    fn test_short_swipe_ignored() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(swipe(&mut tracker, 20.0, 0.0), None);
        assert_eq!(swipe(&mut tracker, -50.0, 0.0), None);
    }

    #[test]
    fn test_vertical_scroll_not_hijacked() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(swipe(&mut tracker, 60.0, 200.0), None);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn test_noise_does_not_arm() {
        let mut tracker = SwipeTracker::default();
        tracker.touch_start(100.0, 100.0);
        assert!(!tracker.touch_move(108.0, 100.0));
        assert!(tracker.touch_move(115.0, 100.0));
    }

    #[test]
    fn test_tap_is_not_a_swipe() {
        let mut tracker = SwipeTracker::default();
        tracker.touch_start(100.0, 100.0);
        assert_eq!(tracker.touch_end(), None);
    }

    #[test]
    fn test_end_without_start() {
        let mut tracker = SwipeTracker::default();
        assert!(!tracker.touch_move(500.0, 0.0));
        assert_eq!(tracker.touch_end(), None);
    }

    #[test]
    fn test_drag_back_below_threshold() {
        let mut tracker = SwipeTracker::default();
        tracker.touch_start(100.0, 100.0);
        tracker.touch_move(40.0, 100.0);
        tracker.touch_move(90.0, 100.0);
        assert_eq!(tracker.touch_end(), None);
    }

    #[test]
    fn test_custom_threshold() {
        let mut tracker = SwipeTracker::new(SwipeConfig {
            swipe_threshold_px: 75.0,
            drag_noise_px: 10.0,
        });
        assert_eq!(swipe(&mut tracker, -60.0, 0.0), None);
        assert_eq!(swipe(&mut tracker, -80.0, 0.0), Some(SwipeDirection::Left));
    }
}
