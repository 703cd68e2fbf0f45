//! Gallery carousel state machine.
//!
//! Holds the active index, the owned autoplay timer and the swipe tracker.
//! Every manual navigation goes through [`CarouselController::rearm`], so
//! interacting with the gallery always restarts the idle countdown.

use std::time::Duration;

use super::gesture::{SwipeConfig, SwipeDirection, SwipeTracker};
use super::position::{self, CarouselSlot, LayoutMode};
use super::timer::AutoplayTimer;
use crate::config::SiteSettings;
use crate::constants;
use crate::error::CarouselError;

/// Tunables for a carousel instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Delay between autoplay advances
    pub autoplay_interval: Duration,
    /// Swipe thresholds
    pub swipe: SwipeConfig,
    /// Index shown first (clamped to the item count)
    pub initial_index: usize,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval: Duration::from_millis(constants::carousel::AUTOPLAY_INTERVAL_MS),
            swipe: SwipeConfig::default(),
            initial_index: 0,
        }
    }
}

impl From<&SiteSettings> for CarouselConfig {
    fn from(settings: &SiteSettings) -> Self {
        Self {
            autoplay_interval: settings.autoplay_interval(),
            swipe: SwipeConfig {
                swipe_threshold_px: settings.swipe_threshold_px,
                drag_noise_px: settings.drag_noise_px,
            },
            initial_index: settings.initial_gallery_index,
        }
    }
}

/// Carousel over a fixed number of items.
pub struct CarouselController<T: AutoplayTimer> {
    len: usize,
    active: usize,
    layout: LayoutMode,
    autoplay_interval: Duration,
    timer: T,
    swipe: SwipeTracker,
}

impl<T: AutoplayTimer> CarouselController<T> {
    /// Create a stopped controller over `len` items.
    pub fn new(len: usize, timer: T, config: CarouselConfig) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }

        Ok(Self {
            len,
            active: config.initial_index.min(len - 1),
            layout: LayoutMode::default(),
            autoplay_interval: config.autoplay_interval,
            timer,
            swipe: SwipeTracker::new(config.swipe),
        })
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; empty carousels can't be constructed.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Currently centered item.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Layout used by [`Self::position_of`].
    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    /// Switch layout (viewport resize).
    pub fn set_layout(&mut self, layout: LayoutMode) {
        self.layout = layout;
    }

    /// Whether autoplay is scheduled.
    pub fn is_autoplaying(&self) -> bool {
        self.timer.is_running()
    }

    /// The owned timer.
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Mutable access to the owned timer, for clock-driven implementations.
    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    /// Begin autoplay.
    pub fn start(&mut self) {
        self.timer.start(self.autoplay_interval);
        log::debug!(
            "Carousel: autoplay started ({} items, every {:?})",
            self.len,
            self.autoplay_interval
        );
    }

    /// Stop autoplay. Called on teardown; also done on drop.
    pub fn stop(&mut self) {
        self.timer.cancel();
        self.swipe.reset();
    }

    /// Restart the idle countdown from zero.
    pub fn rearm(&mut self) {
        self.timer.cancel();
        self.timer.start(self.autoplay_interval);
    }

    /// Show the next item (manual).
    pub fn next(&mut self) {
        self.step_forward();
        self.rearm();
    }

    /// Show the previous item (manual).
    pub fn prev(&mut self) {
        self.active = (self.active + self.len - 1) % self.len;
        self.rearm();
    }

    /// Jump to `index` (dot or card click).
    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.active = index;
        self.rearm();
        Ok(())
    }

    /// Advance on a timer tick. Does not touch the timer.
    pub fn autoplay_tick(&mut self) {
        self.step_forward();
        log::trace!("Carousel: autoplay -> {}", self.active);
    }

    /// Touch-start at `(x, y)`.
    pub fn touch_start(&mut self, x: f64, y: f64) {
        self.swipe.touch_start(x, y);
    }

    /// Touch-move to `(x, y)`. Returns `true` while horizontally dragging.
    pub fn touch_move(&mut self, x: f64, y: f64) -> bool {
        self.swipe.touch_move(x, y)
    }

    /// Touch-end; navigates if the sequence was a swipe.
    pub fn touch_end(&mut self) -> Option<SwipeDirection> {
        let swipe = self.swipe.touch_end()?;
        match swipe {
            SwipeDirection::Left => self.next(),
            SwipeDirection::Right => self.prev(),
        }
        Some(swipe)
    }

    /// Touch-cancel.
    pub fn touch_cancel(&mut self) {
        self.swipe.reset();
    }

    /// Visual slot of `item`.
    pub fn position_of(&self, item: usize) -> CarouselSlot {
        position::position_of(self.active, item, self.len, self.layout)
    }

    /// Visual slots of all items in order.
    pub fn positions(&self) -> impl Iterator<Item = CarouselSlot> + '_ {
        (0..self.len).map(|item| self.position_of(item))
    }

    fn step_forward(&mut self) {
        self.active = (self.active + 1) % self.len;
    }
}

impl CarouselController<super::timer::DeadlineTimer> {
    /// Feed a clock reading; advances once if an autoplay tick is due.
    pub fn poll(&mut self, now: web_time::Instant) -> bool {
        let due = self.timer.poll(now);
        if due {
            self.autoplay_tick();
        }
        due
    }
}

impl<T: AutoplayTimer> Drop for CarouselController<T> {
    fn drop(&mut self) {
        self.timer.cancel();
    }
}

impl<T: AutoplayTimer> std::fmt::Debug for CarouselController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselController")
            .field("len", &self.len)
            .field("active", &self.active)
            .field("layout", &self.layout)
            .field("autoplaying", &self.timer.is_running())
            .finish()
    }
}
