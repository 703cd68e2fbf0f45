//! Gallery carousel: position mapping, swipe gestures and autoplay.

mod controller;
mod gesture;
mod position;
mod timer;

pub use controller::{CarouselConfig, CarouselController};
pub use gesture::{SwipeConfig, SwipeDirection, SwipeTracker};
pub use position::{CarouselSlot, LayoutMode, position_of, signed_distance};
pub use timer::{AutoplayTimer, DeadlineTimer};

#[cfg(target_arch = "wasm32")]
pub use timer::IntervalTimer;
