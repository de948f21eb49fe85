//! Clocked Component Interface.
//!
//! Defines the two-phase contract shared by every synchronous block. The pre-edge
//! phase (`ChangeState`) reads only visible state and stores a pending value; it is
//! implemented per component in [`crate::core::pipeline::stages`] and the memory
//! synchronizers because each needs different inputs. The post-edge phase is uniform
//! and lives here.

use crate::clock::Polarity;

/// A synchronous component driven by one polarity of the system clock.
pub trait ClockedComponent {
    /// Edge the component latches on.
    fn polarity(&self) -> Polarity;

    /// Commits the pending state into the visible state.
    ///
    /// # Returns
    ///
    /// `true` if the observable value changed.
    fn change_outputs(&mut self) -> bool;

    /// Returns the component to its power-on state.
    fn reset(&mut self);
}
