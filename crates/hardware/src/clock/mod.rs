//! Two-Phase System Clock.
//!
//! This module implements the virtual clock that drives every synchronous component.
//! It provides:
//! 1. **Edges:** Each level change raises a pre-edge (`Falling`/`Rising`), commits the
//!    level, then raises a post-edge (`Fallen`/`Risen`), synchronously and in that order.
//! 2. **Providers:** Only the current provider may invert the level. The manual provider
//!    is stepped explicitly; the timed provider oscillates with a fixed half-period.
//! 3. **Diagnostics:** Per-edge counters.

/// Timer-driven clock provider.
pub mod timed;

use serde::Deserialize;

use crate::common::error::ClockError;

pub use timed::TimedClock;

/// One of the four ordered notifications raised by a level change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClockEdge {
    /// High to low, before the level is committed.
    Falling,
    /// High to low, after the level is committed.
    Fallen,
    /// Low to high, before the level is committed.
    Rising,
    /// Low to high, after the level is committed.
    Risen,
}

impl ClockEdge {
    /// Returns `true` for the edges raised before the level changes.
    pub const fn is_pre_edge(self) -> bool {
        matches!(self, Self::Falling | Self::Rising)
    }

    /// Returns which half of the cycle this edge belongs to.
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Falling | Self::Fallen => Polarity::Negative,
            Self::Rising | Self::Risen => Polarity::Positive,
        }
    }
}

/// The clock edge a synchronous component is built for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Latches on `Rising`, commits on `Risen` (data path).
    Positive,
    /// Latches on `Falling`, commits on `Fallen` (control path).
    Negative,
}

/// Identifies a clock provider when requesting an inversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Explicit single stepping.
    #[default]
    Manual,
    /// Periodic oscillation.
    Timed,
}

/// The source that owns the right to change the clock level.
#[derive(Debug)]
pub enum ClockProvider {
    /// The caller inverts the level explicitly.
    Manual,
    /// The level inverts every half-period while enabled.
    Timed(TimedClock),
}

impl ClockProvider {
    /// Returns the kind of this provider.
    pub const fn kind(&self) -> ProviderKind {
        match self {
            Self::Manual => ProviderKind::Manual,
            Self::Timed(_) => ProviderKind::Timed,
        }
    }
}

/// Number of times each edge has been raised since construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeCounts {
    /// `Falling` notifications.
    pub falling: u64,
    /// `Fallen` notifications.
    pub fallen: u64,
    /// `Rising` notifications.
    pub rising: u64,
    /// `Risen` notifications.
    pub risen: u64,
}

impl EdgeCounts {
    fn record(&mut self, edge: ClockEdge) {
        match edge {
            ClockEdge::Falling => self.falling += 1,
            ClockEdge::Fallen => self.fallen += 1,
            ClockEdge::Rising => self.rising += 1,
            ClockEdge::Risen => self.risen += 1,
        }
    }
}

/// The shared two-phase clock.
///
/// The clock does not know its listeners; the owner passes an edge handler into
/// [`SystemClock::set_level`], so every edge is delivered synchronously and in order.
#[derive(Debug)]
pub struct SystemClock {
    level: bool,
    provider: ClockProvider,
    counts: EdgeCounts,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::manual()
    }
}

impl SystemClock {
    /// Creates a low clock driven by the manual provider.
    pub const fn manual() -> Self {
        Self::with_provider(ClockProvider::Manual)
    }

    /// Creates a low clock driven by `provider`.
    pub const fn with_provider(provider: ClockProvider) -> Self {
        Self {
            level: false,
            provider,
            counts: EdgeCounts {
                falling: 0,
                fallen: 0,
                rising: 0,
                risen: 0,
            },
        }
    }

    /// Current level (`true` is high).
    pub const fn level(&self) -> bool {
        self.level
    }

    /// Kind of the current provider.
    pub const fn provider_kind(&self) -> ProviderKind {
        self.provider.kind()
    }

    /// Edge counters.
    pub const fn edge_counts(&self) -> EdgeCounts {
        self.counts
    }

    /// Replaces the provider. The previous provider is dropped, which stops its timer.
    pub fn set_provider(&mut self, provider: ClockProvider) {
        tracing::debug!(from = ?self.provider.kind(), to = ?provider.kind(), "clock provider swapped");
        self.provider = provider;
    }

    /// Returns the timed provider, if it owns the clock.
    pub const fn timed(&self) -> Option<&TimedClock> {
        match &self.provider {
            ClockProvider::Timed(timer) => Some(timer),
            ClockProvider::Manual => None,
        }
    }

    /// Returns the timed provider mutably, or [`ClockError::NotTimed`].
    pub fn timed_mut(&mut self) -> Result<&mut TimedClock, ClockError> {
        match &mut self.provider {
            ClockProvider::Timed(timer) => Ok(timer),
            ClockProvider::Manual => Err(ClockError::NotTimed),
        }
    }

    /// Drives the clock to `level` on behalf of `requester`.
    ///
    /// # Arguments
    ///
    /// * `requester` - Provider asking for the change; it must own the clock.
    /// * `level` - Requested level.
    /// * `on_edge` - Receives the pre-edge, then (after the level is committed) the post-edge.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the level changed, `Ok(false)` if it already had that value.
    pub fn set_level(
        &mut self,
        requester: ProviderKind,
        level: bool,
        mut on_edge: impl FnMut(ClockEdge),
    ) -> Result<bool, ClockError> {
        if requester != self.provider.kind() {
            return Err(ClockError::NotProvider { requested: requester });
        }
        if level == self.level {
            return Ok(false);
        }
        let (pre, post) = if level {
            (ClockEdge::Rising, ClockEdge::Risen)
        } else {
            (ClockEdge::Falling, ClockEdge::Fallen)
        };
        tracing::trace!(?pre, "clock edge");
        self.counts.record(pre);
        on_edge(pre);
        self.level = level;
        tracing::trace!(?post, "clock edge");
        self.counts.record(post);
        on_edge(post);
        Ok(true)
    }

    /// Inverts the level on behalf of `requester`.
    pub fn invert(
        &mut self,
        requester: ProviderKind,
        on_edge: impl FnMut(ClockEdge),
    ) -> Result<(), ClockError> {
        let level = !self.level;
        self.set_level(requester, level, on_edge).map(|_| ())
    }

    /// Forces the level low without raising any edge.
    pub fn reset(&mut self) {
        self.level = false;
    }
}
