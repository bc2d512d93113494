//! Error types for the generation pipeline.
//!
//! Two kinds of failure are distinguished, per the generator's contract:
//! a rejected request (bad stage dimensions) never starts the pipeline, and
//! an out-of-range tile lookup is a caller bug that propagates rather than
//! panics. Non-fatal generation warnings are not modeled here — they are
//! logged through the `log` crate and generation continues.

use thiserror::Error;

/// Errors produced by this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DungeonError {
    /// A requested stage dimension was below the minimum of 5.
    #[error("invalid {which} dimension: {value} (minimum is 5)")]
    InvalidDimension {
        /// Name of the offending dimension (`"width"` or `"height"`).
        which: &'static str,
        /// The rejected value.
        value: i32,
    },

    /// `getTile` was called with coordinates outside the grid.
    #[error("tile ({x}, {y}) is out of range")]
    OutOfRangeTile {
        /// X coordinate requested.
        x: i32,
        /// Y coordinate requested.
        y: i32,
    },
}

/// Crate-level result alias.
pub type Result<T> = core::result::Result<T, DungeonError>;
