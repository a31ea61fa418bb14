//! Text grid parsing and writing
//!
//! A grid file holds one row per line and one tile per character. Seeds use
//! the superposition symbol for undetermined cells.

use crate::io::configuration::SUPERPOSITION_SYMBOL;
use crate::io::error::{CollapseError, Result, validate_rectangular};
use crate::io::image::ensure_parent_dir;
use crate::spatial::grid::{SeedGrid, Snapshot, seed_from_rows};
use crate::spatial::tiles::Tile;
use ndarray::Array2;
use std::path::Path;

/// Split text into rows of tiles
///
/// Line endings (including `\r`) are stripped and trailing blank lines are
/// ignored. Interior blank lines are kept so they surface as ragged rows.
pub fn parse_rows(text: &str) -> Vec<Vec<Tile>> {
    let mut rows: Vec<Vec<Tile>> = text
        .lines()
        .map(|line| line.trim_end_matches('\r').chars().collect())
        .collect();
    while rows.last().is_some_and(Vec::is_empty) {
        rows.pop();
    }
    rows
}

/// Parse a sample grid from text
///
/// # Errors
///
/// Returns `InvalidInput` if the text holds no cells or the rows are ragged
pub fn parse_sample(text: &str) -> Result<Vec<Vec<Tile>>> {
    let rows = parse_rows(text);
    validate_rectangular(&rows, "sample")?;
    Ok(rows)
}

/// Parse a seed grid, reading the superposition symbol as a placeholder
///
/// # Errors
///
/// Returns `InvalidInput` if the text holds no cells or the rows are ragged
pub fn parse_seed(text: &str) -> Result<SeedGrid> {
    let rows: Vec<Vec<Option<Tile>>> = parse_rows(text)
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|symbol| (symbol != SUPERPOSITION_SYMBOL).then_some(symbol))
                .collect()
        })
        .collect();
    seed_from_rows(&rows)
}

/// Load a sample grid from a text file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read and `InvalidInput` if its
/// content is not a rectangular grid
pub fn load_sample(path: &Path) -> Result<Vec<Vec<Tile>>> {
    parse_sample(&read_text(path)?)
}

/// Load a seed grid from a text file
///
/// # Errors
///
/// As [`load_sample`]
pub fn load_seed(path: &Path) -> Result<SeedGrid> {
    parse_seed(&read_text(path)?)
}

/// Render a concrete grid as text, one line per row
pub fn grid_to_text(grid: &Array2<Tile>) -> String {
    let mut text = String::with_capacity(grid.len() + grid.nrows());
    for row in grid.rows() {
        text.extend(row.iter());
        text.push('\n');
    }
    text
}

/// Render a snapshot as text with the superposition symbol for open cells
pub fn snapshot_to_text(snapshot: &Snapshot) -> String {
    let mut text = String::with_capacity(snapshot.len() + snapshot.nrows());
    for row in snapshot.rows() {
        text.extend(row.iter().map(|cell| cell.unwrap_or(SUPERPOSITION_SYMBOL)));
        text.push('\n');
    }
    text
}

/// Write a concrete grid to a text file
///
/// # Errors
///
/// Returns `FileSystem` if the parent directory or file cannot be written
pub fn write_grid_text(grid: &Array2<Tile>, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, grid_to_text(grid)).map_err(|e| CollapseError::FileSystem {
        path: path.to_path_buf(),
        operation: "write grid",
        source: e,
    })
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| CollapseError::FileSystem {
        path: path.to_path_buf(),
        operation: "read grid",
        source: e,
    })
}
