//! Observation events.
//!
//! The processor records what happens on every edge in a bounded queue that the
//! caller drains. Every event is also emitted as a `tracing` record.

use std::collections::VecDeque;
use std::collections::vec_deque::Drain;
use std::fmt;

use crate::common::reg::Register;
use crate::core::datapath::Component;
use crate::core::pipeline::signals::{HazardMode, HazardTypes};

/// Something observable that happened inside the processor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessorEvent {
    /// A program was installed.
    ProgramLoaded,
    /// The processor started responding to clock edges.
    ExecutionStarted,
    /// The processor stopped responding to clock edges.
    ExecutionStopped,
    /// The control path committed on a falling edge.
    ControlPathUpdated,
    /// The data path committed on a rising edge.
    DataPathUpdated,
    /// A component's visible value changed.
    StateChanged(Component),
    /// A register was written back.
    RegisterWritten(Register),
    /// A word was stored at the address.
    WordStored(u32),
    /// Data memory was cleared by a reset.
    DataMemoryCleared,
    /// The PC pointed past the end of the program.
    OutOfBoundsAccess(u32),
    /// The hazard policy changed.
    ModeChanged(HazardMode),
    /// Every instruction left the pipeline.
    ProgramFinished,
    /// A hazard was detected in fail mode.
    Failure(HazardTypes),
}

impl ProcessorEvent {
    /// Returns `true` for the events raised on every edge.
    pub const fn is_periodic(self) -> bool {
        matches!(
            self,
            Self::ControlPathUpdated | Self::DataPathUpdated | Self::StateChanged(_)
        )
    }
}

impl fmt::Display for ProcessorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProgramLoaded => f.write_str("program loaded"),
            Self::ExecutionStarted => f.write_str("execution started"),
            Self::ExecutionStopped => f.write_str("execution stopped"),
            Self::ControlPathUpdated => f.write_str("control path updated"),
            Self::DataPathUpdated => f.write_str("data path updated"),
            Self::StateChanged(component) => write!(f, "{component} changed"),
            Self::RegisterWritten(reg) => write!(f, "{reg} written"),
            Self::WordStored(address) => write!(f, "word stored at {address:#010x}"),
            Self::DataMemoryCleared => f.write_str("data memory cleared"),
            Self::OutOfBoundsAccess(address) => write!(f, "fetch outside program at {address:#010x}"),
            Self::ModeChanged(mode) => write!(f, "hazard mode changed to {mode}"),
            Self::ProgramFinished => f.write_str("program finished"),
            Self::Failure(hazards) => write!(f, "hazard failure: {hazards}"),
        }
    }
}

/// Bounded queue of events; the oldest event is discarded when full.
#[derive(Clone, Debug)]
pub struct EventLog {
    events: VecDeque<ProcessorEvent>,
    capacity: usize,
    dropped: u64,
}

impl EventLog {
    /// Creates a log that retains at most `capacity` events.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
            dropped: 0,
        }
    }

    pub(crate) fn push(&mut self, event: ProcessorEvent) {
        if event.is_periodic() {
            tracing::trace!(%event, "processor event");
        } else {
            tracing::debug!(%event, "processor event");
        }
        if self.capacity == 0 {
            self.dropped += 1;
            return;
        }
        if self.events.len() == self.capacity {
            let _ = self.events.pop_front();
            self.dropped += 1;
        }
        self.events.push_back(event);
    }

    /// Removes and returns every retained event, oldest first.
    pub fn drain(&mut self) -> Drain<'_, ProcessorEvent> {
        self.events.drain(..)
    }

    /// Iterates over retained events without removing them.
    pub fn iter(&self) -> impl Iterator<Item = &ProcessorEvent> {
        self.events.iter()
    }

    /// Number of retained events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if no events are retained.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events discarded because the log was full.
    pub const fn dropped(&self) -> u64 {
        self.dropped
    }
}
