//! # Sensorium History - owned reading histories for sensors
//!
//! A reading history is the ordered list of every value a sensor has recorded.
//! This crate provides [`ReadingSequence`], a singly linked chain of readings in
//! which every node is exclusively owned by its predecessor (or by the
//! sequence head), together with the statistics sensors need:
//!
//! - **Average**: integer averages truncate, float averages use real division
//! - **Minimum extraction**: removes the first-encountered minimum and returns it
//! - **Search and removal**: by value, first occurrence wins
//!
//! Only the two reading types used by sensors are supported, see [`Numeric`].
//!
//! ## Quick Start
//!
//! ```rust
//! use sensorium_history::ReadingSequence;
//!
//! let mut history = ReadingSequence::new();
//! history.append(5.0_f32);
//! history.append(1.0);
//! history.append(3.0);
//!
//! assert_eq!(history.extract_minimum(), 1.0);
//! assert_eq!(history.average(), 4.0);
//! assert_eq!(history.len(), 2);
//! ```
//!
//! Empty histories are not an error: [`ReadingSequence::average`] and
//! [`ReadingSequence::extract_minimum`] return the zero value of the reading
//! type instead.

pub mod numeric;
pub mod sequence;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-export main types
pub use numeric::Numeric;
pub use sequence::{IntoIter, Iter, ReadingSequence};
