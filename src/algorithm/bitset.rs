use crate::spatial::tiles::TileId;
use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset holding the candidate tiles of a cell
///
/// Bit `i` is set when `TileId(i)` is still possible. The capacity equals the
/// dictionary size and never changes after construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TileBitset {
    bits: BitVec,
}

impl TileBitset {
    /// Create a bitset with no tiles present
    pub fn new(max_tiles: usize) -> Self {
        Self {
            bits: bitvec![0; max_tiles],
        }
    }

    /// Create a bitset containing every tile of the dictionary
    pub fn all(max_tiles: usize) -> Self {
        Self {
            bits: bitvec![1; max_tiles],
        }
    }

    /// Capacity of the set (dictionary size)
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Insert a tile, ignoring ids beyond the capacity
    pub fn insert(&mut self, tile: TileId) {
        if tile.index() < self.bits.len() {
            self.bits.set(tile.index(), true);
        }
    }

    /// Test tile membership
    pub fn contains(&self, tile: TileId) -> bool {
        self.bits.get(tile.index()).as_deref() == Some(&true)
    }

    /// Intersect this bitset with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Add every tile of another bitset in-place
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Create a new bitset containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// True when every tile of `self` is also in `other`
    pub fn is_subset(&self, other: &Self) -> bool {
        self.bits.iter_ones().all(|index| other.bits.get(index).as_deref() == Some(&true))
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tiles in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate over present tiles in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = TileId> + '_ {
        self.bits.iter_ones().map(TileId)
    }

    /// Extract all present tiles as a vector
    pub fn to_vec(&self) -> Vec<TileId> {
        self.iter().collect()
    }
}

impl fmt::Display for TileBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<usize> = self.bits.iter_ones().collect();
        write!(f, "TileBitset({} tiles: {ids:?})", self.count())
    }
}
