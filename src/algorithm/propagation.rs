//! Single-pass constraint propagation over a superposition grid
//!
//! Every undetermined cell is intersected with the constraint implied by each
//! of its four neighbors. All neighbor lookups read the grid as it was before
//! the pass, so the result does not depend on visiting order. The pass is run
//! once per collapse step; it is not iterated to a fixed point.

use ndarray::Zip;

use crate::algorithm::bitset::TileBitset;
use crate::analysis::rules::{AdjacencyTable, Direction};
use crate::spatial::grid::{Cell, SuperpositionGrid};

/// Tiles a cell may hold given its neighbor in `direction`
///
/// - Direction without any sample rules: no restriction.
/// - Outside the grid: no restriction, the full dictionary.
/// - Concrete neighbor `v`: tiles allowed next to `v`.
/// - Undetermined neighbor: union of tiles allowed next to any of its
///   candidates.
pub fn directional_constraint(
    grid: &SuperpositionGrid,
    table: &AdjacencyTable,
    position: [usize; 2],
    direction: Direction,
) -> TileBitset {
    let tile_count = table.tile_count();
    if !table.constrains(direction) {
        return TileBitset::all(tile_count);
    }
    let neighbor = direction
        .neighbor(position, grid.rows(), grid.cols())
        .and_then(|neighbor| grid.get(neighbor));

    match neighbor {
        None => TileBitset::all(tile_count),
        Some(Cell::Concrete(dictator)) => table
            .allowed(direction, *dictator)
            .cloned()
            .unwrap_or_else(|| TileBitset::new(tile_count)),
        Some(Cell::Domain(candidates)) => {
            let mut union = TileBitset::new(tile_count);
            for dictator in candidates.iter() {
                if let Some(allowed) = table.allowed(direction, dictator) {
                    union.union_with(allowed);
                }
            }
            union
        }
    }
}

/// Narrow one candidate set by the constraints of all four neighbors
///
/// The result is always a subset of `current`.
pub fn narrow_domain(
    grid: &SuperpositionGrid,
    table: &AdjacencyTable,
    position: [usize; 2],
    current: &TileBitset,
) -> TileBitset {
    let mut narrowed = current.clone();
    for direction in Direction::ALL {
        if narrowed.is_empty() {
            break;
        }
        narrowed.intersect_with(&directional_constraint(grid, table, position, direction));
    }
    narrowed
}

/// Run one synchronous propagation pass and return the updated grid
///
/// Concrete cells are copied unchanged. A cell whose candidates all get
/// eliminated is kept as an empty domain for the caller to detect.
pub fn propagate(grid: &SuperpositionGrid, table: &AdjacencyTable) -> SuperpositionGrid {
    let cells = Zip::indexed(grid.cells()).map_collect(|index, cell| match cell {
        Cell::Concrete(tile) => Cell::Concrete(*tile),
        Cell::Domain(current) => Cell::Domain(narrow_domain(grid, table, index.into(), current)),
    });
    SuperpositionGrid::from_cells(cells)
}
