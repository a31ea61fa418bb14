//! Tile symbols and the dictionary mapping them to dense indices
//!
//! Samples are text grids, so a tile is a single `char`. Internally every
//! algorithm works on [`TileId`]s, which index into the sorted dictionary and
//! into candidate bitsets.

use std::collections::BTreeSet;
use std::fmt;

/// A tile symbol as it appears in a sample or seed grid
pub type Tile = char;

/// Dense 0-based index of a tile within a [`Dictionary`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileId(pub usize);

impl TileId {
    /// Position of the tile in dictionary order
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Set of distinct tiles observed in a sample
///
/// Symbols are kept in ascending order so tile ids are reproducible
/// independently of the order the sample was scanned in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dictionary {
    symbols: Vec<Tile>,
}

impl Dictionary {
    /// Build a dictionary from any collection of symbols, dropping duplicates
    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = Tile>,
    {
        let unique: BTreeSet<Tile> = symbols.into_iter().collect();
        Self {
            symbols: unique.into_iter().collect(),
        }
    }

    /// Number of distinct tiles
    pub const fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True when no tiles were observed
    pub const fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Look up the id of a symbol
    pub fn id_of(&self, symbol: Tile) -> Option<TileId> {
        self.symbols.binary_search(&symbol).ok().map(TileId)
    }

    /// Look up the symbol of an id
    pub fn symbol(&self, id: TileId) -> Option<Tile> {
        self.symbols.get(id.0).copied()
    }

    /// True when the symbol belongs to the dictionary
    pub fn contains(&self, symbol: Tile) -> bool {
        self.id_of(symbol).is_some()
    }

    /// All symbols in id order
    pub fn symbols(&self) -> &[Tile] {
        &self.symbols
    }

    /// All ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = TileId> + '_ {
        (0..self.symbols.len()).map(TileId)
    }
}
