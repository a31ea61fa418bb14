//! Simplified wave function collapse over grids of text tiles
//!
//! Adjacency rules and tile frequencies are learned from a sample grid. A new
//! grid is then generated by repeatedly propagating neighbor constraints one
//! pass at a time, collapsing the lowest-entropy cell by weighted random
//! choice, and restarting from the seed whenever a cell runs out of options.

#![forbid(unsafe_code)]

/// Constraint propagation, entropy ranking and the collapse driver
pub mod algorithm;
/// Rule and weight extraction from sample grids
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Entropy and weighted choice helpers
pub mod math;
/// Tiles, dictionaries and the superposition grid
pub mod spatial;

pub use algorithm::executor::{CollapseDriver, CollapseOutcome, MaxAttempts};
pub use io::error::{CollapseError, Result};
