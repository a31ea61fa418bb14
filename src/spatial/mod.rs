//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - Tile symbols and the sample dictionary
//! - The superposition grid, seeds and snapshots

/// Cell states, seed grids and the superposition grid
pub mod grid;
/// Tile symbols and dictionary indexing
pub mod tiles;

pub use grid::{Cell, SeedGrid, Snapshot, SuperpositionGrid};
