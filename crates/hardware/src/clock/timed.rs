//! Timer-driven clock provider.
//!
//! The core never spawns threads; the driver calls [`TimedClock::due`] with the current
//! instant and applies the returned number of inversions.

use std::time::{Duration, Instant};

use crate::common::error::ClockError;

/// Default half-period of the timed provider.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

/// A periodic clock provider.
#[derive(Debug, Clone)]
pub struct TimedClock {
    interval: Duration,
    enabled: bool,
    last_tick: Option<Instant>,
}

impl Default for TimedClock {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            enabled: false,
            last_tick: None,
        }
    }
}

impl TimedClock {
    /// Creates a disabled timer with the given half-period.
    ///
    /// # Errors
    ///
    /// [`ClockError::IntervalTooShort`] if `interval` is under one millisecond.
    pub fn new(interval: Duration) -> Result<Self, ClockError> {
        let mut timer = Self::default();
        timer.set_interval(interval)?;
        Ok(timer)
    }

    /// Time between two inversions.
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Changes the half-period.
    ///
    /// # Errors
    ///
    /// [`ClockError::IntervalTooShort`] if `interval` is under one millisecond.
    pub fn set_interval(&mut self, interval: Duration) -> Result<(), ClockError> {
        if interval < Duration::from_millis(1) {
            return Err(ClockError::IntervalTooShort(interval));
        }
        self.interval = interval;
        Ok(())
    }

    /// Whether the timer is oscillating.
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Starts or stops oscillation. Starting measures the first period from `now`.
    pub fn set_enabled(&mut self, enabled: bool, now: Instant) {
        self.enabled = enabled;
        self.last_tick = if enabled { Some(now) } else { None };
    }

    /// Number of inversions that have fallen due since the previous call.
    pub fn due(&mut self, now: Instant) -> u32 {
        let Some(last) = self.last_tick.filter(|_| self.enabled) else {
            return 0;
        };
        let elapsed = now.saturating_duration_since(last);
        let periods = elapsed.as_nanos() / self.interval.as_nanos().max(1);
        if periods == 0 {
            return 0;
        }
        let periods = u32::try_from(periods).unwrap_or(u32::MAX);
        self.last_tick = Some(self.interval.checked_mul(periods).map_or(now, |span| last + span));
        periods
    }
}
