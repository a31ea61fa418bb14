//! Analysis modules extracting rules and statistics from sample grids

/// Directional adjacency rules and their lookup table
pub mod rules;
/// Tile frequency weights
pub mod weights;
