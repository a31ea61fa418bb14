//! PNG export of collapsed grids

use crate::io::error::{CollapseError, Result, invalid_parameter};
use crate::io::palette::Palette;
use crate::spatial::grid::Snapshot;
use crate::spatial::tiles::Tile;
use image::{Rgba, RgbaImage};
use ndarray::Array2;
use std::path::Path;

/// Rasterize a snapshot, drawing each cell as a `scale` x `scale` block
///
/// # Errors
///
/// Returns `InvalidParameter` if `scale` is zero or the image would be too
/// large for `u32` pixel coordinates
pub fn render_snapshot(snapshot: &Snapshot, palette: &Palette, scale: u32) -> Result<RgbaImage> {
    if scale == 0 {
        return Err(invalid_parameter("scale", &scale, &"must be at least 1"));
    }

    let scaled = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|count| count.checked_mul(scale))
            .ok_or_else(|| invalid_parameter("scale", &scale, &"image dimensions overflow u32"))
    };
    let width = scaled(snapshot.ncols())?;
    let height = scaled(snapshot.nrows())?;
    let mut img = RgbaImage::new(width, height);

    for ((row, col), &cell) in snapshot.indexed_iter() {
        let color = Rgba(palette.cell_color(cell));
        let x0 = col as u32 * scale;
        let y0 = row as u32 * scale;
        for dy in 0..scale {
            for dx in 0..scale {
                img.put_pixel(x0 + dx, y0 + dy, color);
            }
        }
    }

    Ok(img)
}

/// Export a collapsed grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The grid holds a tile the palette has no color for
/// - `scale` is zero
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(
    grid: &Array2<Tile>,
    palette: &Palette,
    scale: u32,
    output_path: &Path,
) -> Result<()> {
    if let Some(missing) = grid.iter().find(|&&tile| palette.color(tile).is_none()) {
        return Err(invalid_parameter(
            "palette",
            missing,
            &"tile has no color assigned",
        ));
    }

    let img = render_snapshot(&grid.mapv(Some), palette, scale)?;

    ensure_parent_dir(output_path)?;
    img.save(output_path)
        .map_err(|e| CollapseError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CollapseError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}
