//! Frequency weights of sample tiles
//!
//! A tile's weight is the number of times it occurs in the sample. Weights
//! drive both the entropy score and the random choice during collapse.

use crate::spatial::tiles::TileId;
use ndarray::Array2;

/// Occurrence counts per tile, indexed by [`TileId`]
#[derive(Clone, Debug, PartialEq)]
pub struct TileWeights {
    counts: Vec<usize>,
    /// `w * ln(w)` per tile, cached for entropy evaluation
    weight_log_weights: Vec<f64>,
}

impl TileWeights {
    /// Count tile occurrences in an id grid
    pub fn from_counts(ids: &Array2<TileId>, tile_count: usize) -> Self {
        let mut counts = vec![0usize; tile_count];
        for id in ids {
            if let Some(count) = counts.get_mut(id.index()) {
                *count += 1;
            }
        }
        Self::from_vec(counts)
    }

    /// Wrap precomputed counts
    pub fn from_vec(counts: Vec<usize>) -> Self {
        let weight_log_weights = counts
            .iter()
            .map(|&count| {
                let weight = count as f64;
                if count == 0 { 0.0 } else { weight * weight.ln() }
            })
            .collect();
        Self {
            counts,
            weight_log_weights,
        }
    }

    /// Occurrence count of a tile (0 for unknown ids)
    pub fn weight(&self, tile: TileId) -> usize {
        self.counts.get(tile.index()).copied().unwrap_or(0)
    }

    /// Cached `w * ln(w)` of a tile
    pub fn weight_log_weight(&self, tile: TileId) -> f64 {
        self.weight_log_weights
            .get(tile.index())
            .copied()
            .unwrap_or(0.0)
    }

    /// Total number of sample cells
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of tiles covered
    pub const fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when no tiles are covered
    pub const fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Raw counts in id order
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }
}
