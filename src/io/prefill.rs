//! Seed preparation: preset cells and random pre-filling

use crate::algorithm::executor::RandomSelector;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::SeedGrid;
use crate::spatial::tiles::{Dictionary, Tile};
use std::str::FromStr;

/// Single forced tile placement given as `ROW,COL=SYMBOL`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Grid row (0-based)
    pub row: usize,
    /// Grid column (0-based)
    pub col: usize,
    /// Tile to place
    pub tile: Tile,
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(text: &str) -> std::result::Result<Self, Self::Err> {
        let (coordinates, symbol) = text
            .split_once('=')
            .ok_or_else(|| format!("expected ROW,COL=SYMBOL, got '{text}'"))?;
        let (row, col) = coordinates
            .split_once(',')
            .ok_or_else(|| format!("expected ROW,COL before '=', got '{coordinates}'"))?;

        let row = row
            .trim()
            .parse()
            .map_err(|e| format!("invalid row '{row}': {e}"))?;
        let col = col
            .trim()
            .parse()
            .map_err(|e| format!("invalid column '{col}': {e}"))?;

        let mut chars = symbol.chars();
        let (Some(tile), None) = (chars.next(), chars.next()) else {
            return Err(format!("symbol must be a single character, got '{symbol}'"));
        };

        Ok(Self { row, col, tile })
    }
}

/// Write presets into a seed grid
///
/// # Errors
///
/// Returns `InvalidParameter` if a preset lies outside the grid or names a
/// tile that is not in the dictionary
pub fn apply_presets(seed: &mut SeedGrid, presets: &[Preset], dictionary: &Dictionary) -> Result<()> {
    let (rows, cols) = seed.dim();
    for preset in presets {
        if !dictionary.contains(preset.tile) {
            return Err(invalid_parameter(
                "preset",
                &preset.tile,
                &"tile does not occur in the sample",
            ));
        }
        let cell = seed.get_mut([preset.row, preset.col]).ok_or_else(|| {
            invalid_parameter(
                "preset",
                &format!("{},{}", preset.row, preset.col),
                &format!("position is outside the {rows}x{cols} output"),
            )
        })?;
        *cell = Some(preset.tile);
    }
    Ok(())
}

/// Replace a random share of cells with uniformly random dictionary tiles
///
/// `round(cells * percent / 100)` distinct cells are overwritten, whether
/// they held a placeholder or a tile. Tile choice ignores sample frequency.
///
/// # Errors
///
/// Returns `InvalidParameter` if `percent` exceeds 100
pub fn fill_with_random_percent(
    seed: &SeedGrid,
    dictionary: &Dictionary,
    percent: u32,
    selector: &mut RandomSelector,
) -> Result<SeedGrid> {
    if percent > 100 {
        return Err(invalid_parameter(
            "percent",
            &percent,
            &"must be between 0 and 100",
        ));
    }

    let mut filled = seed.clone();
    if dictionary.is_empty() {
        return Ok(filled);
    }

    let total = seed.len();
    let to_fill = (total as f64 * f64::from(percent) / 100.0).round() as usize;
    let cols = seed.ncols();
    let mut remaining: Vec<usize> = (0..total).collect();

    for _ in 0..to_fill.min(total) {
        let flat = remaining.swap_remove(selector.index(remaining.len()));
        let tile = dictionary
            .symbols()
            .get(selector.index(dictionary.len()))
            .copied();
        if let Some(cell) = filled.get_mut([flat / cols, flat % cols]) {
            *cell = tile;
        }
    }

    Ok(filled)
}
