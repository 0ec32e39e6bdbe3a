//! Epsilon-aware comparators and crossing predicates.
//!
//! All functions in this module take explicit tolerance parameters.
//! [`default_epsilon`] is the one tolerance the overlap computation uses
//! for both segment-extent acceptance and point deduplication.

mod cmp;
mod predicates;

pub use cmp::{approx_eq, approx_le, default_epsilon, points_coincide};
pub use predicates::{segment_crossing, segment_crossing_tolerant};
