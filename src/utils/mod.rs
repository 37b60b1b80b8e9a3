//! Utility functions and helpers
//!
//! Binary serialization helpers for the embedded store and the
//! wall-clock timestamp used on block records.

pub mod clock;
pub mod serialization;

pub use clock::current_timestamp;
pub use serialization::{deserialize, serialize};
