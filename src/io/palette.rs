//! Tile to color mapping for rendered output
//!
//! Palettes come from a JSON object mapping each tile symbol to `[r, g, b]`
//! or `[r, g, b, a]`, or are generated from the dictionary by spreading hues
//! evenly. Undetermined cells render in the average of all tile colors.

use crate::io::error::{CollapseError, Result};
use crate::spatial::tiles::{Dictionary, Tile};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

#[derive(Deserialize)]
#[serde(transparent)]
struct PaletteFile(BTreeMap<String, Vec<u8>>);

/// RGBA color per tile plus the superposition color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: HashMap<Tile, [u8; 4]>,
    superposition: [u8; 4],
}

impl Palette {
    /// Build a palette from explicit colors
    pub fn from_colors(colors: HashMap<Tile, [u8; 4]>) -> Self {
        let superposition = average_color(colors.values());
        Self {
            colors,
            superposition,
        }
    }

    /// Evenly spaced hues, one per dictionary tile
    pub fn generate(dictionary: &Dictionary) -> Self {
        let count = dictionary.len().max(1) as f64;
        let colors = dictionary
            .symbols()
            .iter()
            .enumerate()
            .map(|(i, &tile)| (tile, hsv_to_rgba(360.0 * i as f64 / count, 0.75, 0.9)))
            .collect();
        Self::from_colors(colors)
    }

    /// Parse a JSON palette and check it covers the dictionary
    ///
    /// # Errors
    ///
    /// Returns `PaletteParse` if the JSON is malformed, a key is not a single
    /// character, a color has neither 3 nor 4 channels, or a dictionary tile
    /// has no color
    pub fn from_json_str(text: &str, path: &Path, dictionary: &Dictionary) -> Result<Self> {
        let parse_error = |reason: String| CollapseError::PaletteParse {
            path: path.to_path_buf(),
            reason,
        };

        let PaletteFile(entries) =
            serde_json::from_str(text).map_err(|e| parse_error(e.to_string()))?;

        let mut colors = HashMap::with_capacity(entries.len());
        for (key, channels) in entries {
            let mut chars = key.chars();
            let (Some(tile), None) = (chars.next(), chars.next()) else {
                return Err(parse_error(format!("key '{key}' is not a single character")));
            };
            let color = match *channels.as_slice() {
                [r, g, b] => [r, g, b, 255],
                [r, g, b, a] => [r, g, b, a],
                _ => {
                    return Err(parse_error(format!(
                        "color for '{key}' has {} channels, expected 3 or 4",
                        channels.len()
                    )));
                }
            };
            colors.insert(tile, color);
        }

        if let Some(missing) = dictionary
            .symbols()
            .iter()
            .find(|tile| !colors.contains_key(tile))
        {
            return Err(parse_error(format!("no color for tile '{missing}'")));
        }

        Ok(Self::from_colors(colors))
    }

    /// Load a JSON palette file
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the file cannot be read, otherwise as
    /// [`Palette::from_json_str`]
    pub fn load(path: &Path, dictionary: &Dictionary) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| CollapseError::FileSystem {
            path: path.to_path_buf(),
            operation: "read palette",
            source: e,
        })?;
        Self::from_json_str(&text, path, dictionary)
    }

    /// Color of a tile, if the palette knows it
    pub fn color(&self, tile: Tile) -> Option<[u8; 4]> {
        self.colors.get(&tile).copied()
    }

    /// Color of a snapshot cell; `None` renders as the superposition color
    pub fn cell_color(&self, cell: Option<Tile>) -> [u8; 4] {
        cell.and_then(|tile| self.color(tile))
            .unwrap_or(self.superposition)
    }

    /// Color used for undetermined cells
    pub const fn superposition(&self) -> [u8; 4] {
        self.superposition
    }
}

// The average of all tile colors is used for undetermined cells
fn average_color<'a>(colors: impl Iterator<Item = &'a [u8; 4]>) -> [u8; 4] {
    let mut sums = [0u32; 4];
    let mut count = 0u32;
    for color in colors {
        for (sum, &channel) in sums.iter_mut().zip(color) {
            *sum += u32::from(channel);
        }
        count += 1;
    }
    if count == 0 {
        return [128, 128, 128, 255];
    }
    sums.map(|sum| (sum / count) as u8)
}

fn hsv_to_rgba(hue: f64, saturation: f64, value: f64) -> [u8; 4] {
    let chroma = value * saturation;
    let sector = (hue / 60.0) % 6.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = value - chroma;
    let to_byte = |channel: f64| ((channel + m) * 255.0).round() as u8;
    [to_byte(r), to_byte(g), to_byte(b), 255]
}
