//! Adjacency rule extraction from sample grids
//!
//! Every pair of orthogonally adjacent sample cells contributes one rule from
//! each cell's point of view. Rules are kept as a deduplicated set and then
//! compiled into an [`AdjacencyTable`] keyed by `(direction, dictator)` so
//! propagation never has to scan the rule set.

use crate::algorithm::bitset::TileBitset;
use crate::analysis::weights::TileWeights;
use crate::io::error::{Result, validate_rectangular};
use crate::spatial::tiles::{Dictionary, Tile, TileId};
use ndarray::Array2;
use std::collections::BTreeSet;
use std::fmt;

/// Position of a neighbor relative to a reference cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Neighbor in the previous row
    Up,
    /// Neighbor in the next row
    Down,
    /// Neighbor in the previous column
    Left,
    /// Neighbor in the next column
    Right,
}

impl Direction {
    /// All four directions in table order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Row and column delta from the reference cell to the neighbor
    pub const fn offset(self) -> [isize; 2] {
        match self {
            Self::Up => [-1, 0],
            Self::Down => [1, 0],
            Self::Left => [0, -1],
            Self::Right => [0, 1],
        }
    }

    /// The direction pointing back at the reference cell
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Slot of this direction in [`Direction::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }

    /// Grid indices of the neighbor of `position` in this direction
    ///
    /// Returns `None` when the neighbor falls outside a `rows` x `cols` grid;
    /// there is no wraparound.
    pub fn neighbor(self, position: [usize; 2], rows: usize, cols: usize) -> Option<[usize; 2]> {
        let [dr, dc] = self.offset();
        let row = position[0].checked_add_signed(dr)?;
        let col = position[1].checked_add_signed(dc)?;
        (row < rows && col < cols).then_some([row, col])
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
        };
        f.write_str(name)
    }
}

/// "If the neighbor in `direction` holds `dictator`, `allowed` is legal here"
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rule {
    /// Tile held by the neighbor
    pub dictator: TileId,
    /// Tile permitted for the reference cell
    pub allowed: TileId,
    /// Where the neighbor sits relative to the reference cell
    pub direction: Direction,
}

/// Deduplicated set of adjacency rules
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: BTreeSet<Rule>,
}

impl RuleSet {
    /// Add a rule; duplicates are ignored
    pub fn insert(&mut self, rule: Rule) -> bool {
        self.rules.insert(rule)
    }

    /// Test rule membership
    pub fn contains(&self, rule: &Rule) -> bool {
        self.rules.contains(rule)
    }

    /// Number of distinct rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when the sample had no adjacent pairs
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate rules in a stable order
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }
}

/// Precomputed lookup `(direction, dictator) -> allowed tiles`
///
/// A direction in which the sample has no adjacent pairs at all (a single
/// row has no vertical neighbors) carries no evidence and is reported as
/// unconstrained.
#[derive(Clone, Debug)]
pub struct AdjacencyTable {
    allowed: Vec<TileBitset>,
    constrained: [bool; 4],
    tile_count: usize,
}

impl AdjacencyTable {
    /// Compile a rule set over a dictionary of `tile_count` tiles
    pub fn from_rules(rules: &RuleSet, tile_count: usize) -> Self {
        let mut allowed = vec![TileBitset::new(tile_count); Direction::ALL.len() * tile_count];
        let mut constrained = [false; 4];
        for rule in rules.iter() {
            if let Some(flag) = constrained.get_mut(rule.direction.index()) {
                *flag = true;
            }
            let slot = rule.direction.index() * tile_count + rule.dictator.index();
            if let Some(set) = allowed.get_mut(slot) {
                set.insert(rule.allowed);
            }
        }
        Self {
            allowed,
            constrained,
            tile_count,
        }
    }

    /// True when the sample produced at least one rule in `direction`
    pub fn constrains(&self, direction: Direction) -> bool {
        self.constrained
            .get(direction.index())
            .copied()
            .unwrap_or(false)
    }

    /// Tiles allowed for a cell whose neighbor in `direction` holds `dictator`
    ///
    /// Unknown dictators yield `None`, which callers treat as "nothing allowed".
    pub fn allowed(&self, direction: Direction, dictator: TileId) -> Option<&TileBitset> {
        if dictator.index() >= self.tile_count {
            return None;
        }
        self.allowed
            .get(direction.index() * self.tile_count + dictator.index())
    }

    /// Dictionary size the table was built for
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }
}

/// Derive the dictionary, tile weights and adjacency rules of a sample
///
/// # Errors
///
/// Returns `InvalidInput` if the sample has no rows, an empty row, or rows of
/// unequal length.
pub fn extract_rules(sample: &[Vec<Tile>]) -> Result<(Dictionary, TileWeights, RuleSet)> {
    let (rows, cols) = validate_rectangular(sample, "sample")?;
    let grid = Array2::from_shape_fn((rows, cols), |(row, col)| {
        sample
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or_default()
    });
    Ok(extract_rules_from_array(&grid))
}

/// Rule extraction over an already rectangular sample
pub fn extract_rules_from_array(sample: &Array2<Tile>) -> (Dictionary, TileWeights, RuleSet) {
    let dictionary = Dictionary::from_symbols(sample.iter().copied());
    let (rows, cols) = sample.dim();

    let ids = sample.mapv(|symbol| dictionary.id_of(symbol).unwrap_or(TileId(0)));
    let weights = TileWeights::from_counts(&ids, dictionary.len());

    let mut rules = RuleSet::default();
    for (index, &allowed) in ids.indexed_iter() {
        for direction in Direction::ALL {
            if let Some(neighbor) = direction.neighbor(index.into(), rows, cols)
                && let Some(&dictator) = ids.get(neighbor)
            {
                rules.insert(Rule {
                    dictator,
                    allowed,
                    direction,
                });
            }
        }
    }

    (dictionary, weights, rules)
}
