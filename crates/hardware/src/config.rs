//! Configuration system for the pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize a run. It
//! provides:
//! 1. **Defaults:** Baseline values (hazard mode, event retention, cycle limit, clock period).
//! 2. **Structures:** `general` settings for the processor and `clock` settings for the
//!    provider that drives it.
//! 3. **Validation:** Range checks applied by [`Config::from_json`].
//!
//! Configuration is supplied as JSON (`--config` on the CLI) or use `Config::default()`.

use std::time::Duration;

use serde::Deserialize;

use crate::clock::ProviderKind;
use crate::common::error::ConfigError;
use crate::core::pipeline::signals::HazardMode;

/// Default configuration constants for the simulator.
mod defaults {
    /// Number of observation events the processor retains before dropping the oldest.
    pub const EVENT_CAPACITY: usize = 4096;

    /// Cycle limit for [`crate::sim::simulator::Simulator::run`].
    pub const MAX_CYCLES: u64 = 100_000;

    /// Clock period setting; the half-period is this value times
    /// [`PERIOD_UNIT_MS`].
    pub const CLOCK_PERIOD: u64 = 10;

    /// Smallest accepted clock period setting.
    pub const MIN_CLOCK_PERIOD: u64 = 1;

    /// Largest accepted clock period setting.
    pub const MAX_CLOCK_PERIOD: u64 = 999;

    /// Milliseconds of half-period per unit of the period setting.
    pub const PERIOD_UNIT_MS: u64 = 50;
}

/// Root configuration structure for the simulator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Clock provider settings
    #[serde(default)]
    pub clock: ClockConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] for malformed input and [`ConfigError::OutOfRange`] for
    /// values outside their permitted range.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every ranged field.
    ///
    /// # Errors
    ///
    /// [`ConfigError::OutOfRange`] naming the first offending field.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        let period = self.clock.period;
        if period < defaults::MIN_CLOCK_PERIOD || period > defaults::MAX_CLOCK_PERIOD {
            return Err(ConfigError::OutOfRange {
                field: "clock.period",
                value: period,
                min: defaults::MIN_CLOCK_PERIOD,
                max: defaults::MAX_CLOCK_PERIOD,
            });
        }
        if self.general.max_cycles == 0 {
            return Err(ConfigError::OutOfRange {
                field: "general.max_cycles",
                value: 0,
                min: 1,
                max: u64::MAX,
            });
        }
        Ok(())
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Hazard policy the datapath starts in
    #[serde(default)]
    pub hazard_mode: HazardMode,

    /// Log a one-line pipeline snapshot at `info` every cycle
    #[serde(default)]
    pub trace_pipeline: bool,

    /// Observation events retained between drains
    #[serde(default = "GeneralConfig::default_event_capacity")]
    pub event_capacity: usize,

    /// Cycles [`crate::sim::simulator::Simulator::run`] executes before giving up
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,
}

impl GeneralConfig {
    /// Returns the default event retention.
    const fn default_event_capacity() -> usize {
        defaults::EVENT_CAPACITY
    }

    /// Returns the default cycle limit.
    const fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            hazard_mode: HazardMode::default(),
            trace_pipeline: false,
            event_capacity: defaults::EVENT_CAPACITY,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

/// Clock provider configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ClockConfig {
    /// Provider that owns the clock when the processor is created
    #[serde(default)]
    pub provider: ProviderKind,

    /// Period setting (1..=999); the half-period is `period * 50` ms
    #[serde(default = "ClockConfig::default_period")]
    pub period: u64,
}

impl ClockConfig {
    /// Returns the default period setting.
    const fn default_period() -> u64 {
        defaults::CLOCK_PERIOD
    }

    /// Time between two inversions of the timed provider.
    pub const fn half_period(&self) -> Duration {
        Duration::from_millis(self.period.saturating_mul(defaults::PERIOD_UNIT_MS))
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Manual,
            period: defaults::CLOCK_PERIOD,
        }
    }
}
