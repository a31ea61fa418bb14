//! Superposition grid holding the working state of one collapse attempt
//!
//! Each cell is either a concrete tile or the set of tiles it may still
//! become. Dimensions are fixed when the grid is built from a seed and never
//! change afterwards.

use ndarray::Array2;

use crate::algorithm::bitset::TileBitset;
use crate::io::error::{Result, invalid_input, validate_rectangular};
use crate::spatial::tiles::{Dictionary, Tile, TileId};

/// Caller-supplied starting grid; `None` marks a superposition placeholder
pub type SeedGrid = Array2<Option<Tile>>;

/// Display copy of a grid; undetermined cells are masked to `None`
pub type Snapshot = Array2<Option<Tile>>;

/// State of a single cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Resolved to one tile
    Concrete(TileId),
    /// Still undetermined; an empty set is a contradiction
    Domain(TileBitset),
}

impl Cell {
    /// True for an empty candidate set
    pub fn is_contradiction(&self) -> bool {
        matches!(self, Self::Domain(candidates) if candidates.is_empty())
    }

    /// Candidate set of an undetermined cell
    pub const fn domain(&self) -> Option<&TileBitset> {
        match self {
            Self::Domain(candidates) => Some(candidates),
            Self::Concrete(_) => None,
        }
    }

    /// Tile of a resolved cell
    pub const fn concrete(&self) -> Option<TileId> {
        match self {
            Self::Concrete(tile) => Some(*tile),
            Self::Domain(_) => None,
        }
    }
}

/// Seed grid of the given size with every cell set to the placeholder
pub fn superposition_seed(rows: usize, cols: usize) -> SeedGrid {
    Array2::from_elem((rows, cols), None)
}

/// Build a seed grid from rows of optional tiles
///
/// # Errors
///
/// Returns `InvalidInput` if the rows are empty or ragged.
pub fn seed_from_rows(rows: &[Vec<Option<Tile>>]) -> Result<SeedGrid> {
    let shape = validate_rectangular(rows, "seed")?;
    Ok(Array2::from_shape_fn(shape, |(row, col)| {
        rows.get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .flatten()
    }))
}

/// Working grid of cells for one collapse attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuperpositionGrid {
    cells: Array2<Cell>,
}

impl SuperpositionGrid {
    /// Expand a seed: placeholders become the full dictionary, tiles stay put
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the seed has no cells or a preset tile is
    /// not part of the dictionary.
    pub fn from_seed(seed: &SeedGrid, dictionary: &Dictionary) -> Result<Self> {
        if seed.is_empty() {
            return Err(invalid_input(&"seed grid has no cells"));
        }

        let mut cells = Vec::with_capacity(seed.len());
        for ((row, col), slot) in seed.indexed_iter() {
            let cell = match slot {
                None => Cell::Domain(TileBitset::all(dictionary.len())),
                Some(symbol) => {
                    let id = dictionary.id_of(*symbol).ok_or_else(|| {
                        invalid_input(&format!(
                            "seed tile '{symbol}' at ({row}, {col}) does not occur in the sample"
                        ))
                    })?;
                    Cell::Concrete(id)
                }
            };
            cells.push(cell);
        }

        let cells = Array2::from_shape_vec(seed.dim(), cells)
            .map_err(|e| invalid_input(&format!("seed grid shape: {e}")))?;
        Ok(Self { cells })
    }

    /// Wrap an existing cell array
    pub const fn from_cells(cells: Array2<Cell>) -> Self {
        Self { cells }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Cell at grid indices
    pub fn get(&self, position: [usize; 2]) -> Option<&Cell> {
        self.cells.get(position)
    }

    /// Read access to every cell
    pub const fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    /// Resolve a cell to a concrete tile
    ///
    /// Returns `false` if the position lies outside the grid.
    pub fn set_concrete(&mut self, position: [usize; 2], tile: TileId) -> bool {
        self.cells.get_mut(position).is_some_and(|cell| {
            *cell = Cell::Concrete(tile);
            true
        })
    }

    /// First contradicted cell in row-major order
    pub fn find_contradiction(&self) -> Option<[usize; 2]> {
        self.cells
            .indexed_iter()
            .find(|(_, cell)| cell.is_contradiction())
            .map(|(index, _)| index.into())
    }

    /// True when no undetermined cell remains
    pub fn is_collapsed(&self) -> bool {
        self.cells.iter().all(|cell| matches!(cell, Cell::Concrete(_)))
    }

    /// Number of undetermined cells
    pub fn undetermined_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| matches!(cell, Cell::Domain(_)))
            .count()
    }

    /// Lossy display copy with every undetermined cell masked
    pub fn snapshot(&self, dictionary: &Dictionary) -> Snapshot {
        self.cells.map(|cell| match cell {
            Cell::Concrete(tile) => dictionary.symbol(*tile),
            Cell::Domain(_) => None,
        })
    }

    /// Symbols of a fully collapsed grid, or `None` while cells remain open
    pub fn to_tiles(&self, dictionary: &Dictionary) -> Option<Array2<Tile>> {
        let mut symbols = Vec::with_capacity(self.cells.len());
        for cell in &self.cells {
            symbols.push(dictionary.symbol(cell.concrete()?)?);
        }
        Array2::from_shape_vec(self.cells.dim(), symbols).ok()
    }
}
