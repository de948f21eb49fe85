//! Processor tests.
