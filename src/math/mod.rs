//! Mathematical utilities for the algorithm

/// Weighted entropy and cumulative weighted choice
pub mod probability;
