//! Recurring autoplay timers.
//!
//! The controller owns exactly one timer and only ever starts or cancels it.
//! [`DeadlineTimer`] is driven by explicit clock readings (native builds and
//! tests); [`IntervalTimer`] wraps the browser's `setInterval`.

use std::time::Duration;
use web_time::Instant;

/// A recurring timer owned by a carousel controller.
pub trait AutoplayTimer {
    /// (Re)start the timer with the given period. A running timer is
    /// replaced, so the next tick is one full period away.
    fn start(&mut self, period: Duration);

    /// Stop the timer. Cancelling a stopped timer is a no-op.
    fn cancel(&mut self);

    /// Whether the timer is scheduled.
    fn is_running(&self) -> bool;
}

/// Timer polled with clock readings.
///
/// The timer's notion of "now" is the latest instant it was given, so a
/// (re)start is measured from the last poll.
#[derive(Debug, Clone)]
pub struct DeadlineTimer {
    now: Instant,
    period: Duration,
    next_due: Option<Instant>,
    starts: usize,
    cancels: usize,
}

impl DeadlineTimer {
    /// Create a stopped timer whose clock starts at the current instant.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a stopped timer whose clock starts at `now`.
    pub fn starting_at(now: Instant) -> Self {
        Self {
            now,
            period: Duration::ZERO,
            next_due: None,
            starts: 0,
            cancels: 0,
        }
    }

    /// Latest clock reading.
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Instant of the next tick, if running.
    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Number of times the timer has been started.
    pub fn start_count(&self) -> usize {
        self.starts
    }

    /// Number of times a running timer has been cancelled.
    pub fn cancel_count(&self) -> usize {
        self.cancels
    }

    /// Advance the clock to `now` and report whether a tick is due.
    ///
    /// At most one tick fires per poll; periods missed entirely are skipped,
    /// matching how browsers coalesce throttled intervals.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now > self.now {
            self.now = now;
        }

        let Some(due) = self.next_due else {
            return false;
        };
        if self.now < due || self.period.is_zero() {
            return false;
        }

        let mut next = due + self.period;
        while next <= self.now {
            next += self.period;
        }
        self.next_due = Some(next);
        true
    }
}

impl Default for DeadlineTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoplayTimer for DeadlineTimer {
    fn start(&mut self, period: Duration) {
        self.period = period;
        self.next_due = Some(self.now + period);
        self.starts += 1;
    }

    fn cancel(&mut self) {
        if self.next_due.take().is_some() {
            self.cancels += 1;
        }
    }

    fn is_running(&self) -> bool {
        self.next_due.is_some()
    }
}

/// Browser `setInterval` timer.
///
/// The tick callback is installed once with [`IntervalTimer::set_callback`];
/// starting before a callback is installed logs a warning and does nothing.
#[cfg(target_arch = "wasm32")]
pub struct IntervalTimer {
    callback: Option<wasm_bindgen::closure::Closure<dyn FnMut()>>,
    handle: Option<i32>,
}

#[cfg(target_arch = "wasm32")]
impl IntervalTimer {
    /// Create a timer without a callback.
    pub fn new() -> Self {
        Self {
            callback: None,
            handle: None,
        }
    }

    /// Install the function invoked on every tick.
    pub fn set_callback(&mut self, callback: wasm_bindgen::closure::Closure<dyn FnMut()>) {
        self.callback = Some(callback);
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for IntervalTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl AutoplayTimer for IntervalTimer {
    fn start(&mut self, period: Duration) {
        use wasm_bindgen::JsCast;

        self.cancel();

        let Some(callback) = self.callback.as_ref() else {
            log::warn!("Autoplay timer started without a callback");
            return;
        };
        let Some(window) = web_sys::window() else {
            log::warn!("Autoplay timer: no window object available");
            return;
        };

        let timeout = i32::try_from(period.as_millis()).unwrap_or(i32::MAX);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            timeout,
        ) {
            Ok(handle) => self.handle = Some(handle),
            Err(e) => log::warn!("Failed to start autoplay timer: {:?}", e),
        }
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(handle);
            }
        }
    }

    fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(4000);

    #[test]
    fn test_stopped_timer_never_fires() {
        let t0 = Instant::now();
        let mut timer = DeadlineTimer::starting_at(t0);
        assert!(!timer.is_running());
        assert!(!timer.poll(t0 + Duration::from_secs(60)));
    }

    #[test]
    fn test_fires_each_period() {
        let t0 = Instant::now();
        let mut timer = DeadlineTimer::starting_at(t0);
        timer.start(PERIOD);

        assert!(!timer.poll(t0 + Duration::from_millis(3999)));
        assert!(timer.poll(t0 + Duration::from_millis(4000)));
        assert!(!timer.poll(t0 + Duration::from_millis(4001)));
        assert!(timer.poll(t0 + Duration::from_millis(8000)));
    }

    #[test]
    fn test_missed_periods_coalesce() {
        let t0 = Instant::now();
        let mut timer = DeadlineTimer::starting_at(t0);
        timer.start(PERIOD);

        assert!(timer.poll(t0 + Duration::from_millis(13_000)));
        assert!(!timer.poll(t0 + Duration::from_millis(13_500)));
        assert_eq!(timer.next_due(), Some(t0 + Duration::from_millis(16_000)));
    }

    #[test]
    fn test_restart_measures_from_last_poll() {
        let t0 = Instant::now();
        let mut timer = DeadlineTimer::starting_at(t0);
        timer.start(PERIOD);

        assert!(!timer.poll(t0 + Duration::from_millis(3000)));
        timer.start(PERIOD);
        assert!(!timer.poll(t0 + Duration::from_millis(6999)));
        assert!(timer.poll(t0 + Duration::from_millis(7000)));
        assert_eq!(timer.start_count(), 2);
    }

    #[test]
    fn test_cancel() {
        let t0 = Instant::now();
        let mut timer = DeadlineTimer::starting_at(t0);
        timer.cancel();
        assert_eq!(timer.cancel_count(), 0);

        timer.start(PERIOD);
        timer.cancel();
        assert!(!timer.is_running());
        assert_eq!(timer.cancel_count(), 1);
        assert!(!timer.poll(t0 + Duration::from_secs(10)));
    }
}
