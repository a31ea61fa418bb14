//! Animated GIF rendering of collapse histories

use crate::io::configuration::{FINAL_FRAME_HOLD_MS, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{CollapseError, Result, invalid_input};
use crate::io::image::{ensure_parent_dir, render_snapshot};
use crate::io::palette::Palette;
use crate::spatial::grid::Snapshot;
use image::{Delay, Frame};
use std::path::Path;

/// Number of history snapshots merged into one frame for a requested delay
///
/// Delays below what viewers support are stretched by dropping frames, so
/// the apparent animation speed is kept.
pub const fn frame_skip_factor(frame_delay_ms: u32) -> usize {
    if frame_delay_ms == 0 {
        VIEWER_MIN_FRAME_DELAY_MS as usize
    } else if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
        VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
    } else {
        1
    }
}

/// Render history snapshots as GIF frames
///
/// The first and last snapshots are always included; the last frame is
/// held for [`FINAL_FRAME_HOLD_MS`].
///
/// # Errors
///
/// Returns `InvalidInput` for an empty history and `InvalidParameter` for a
/// zero `scale`
pub fn render_frames(
    history: &[Snapshot],
    palette: &Palette,
    scale: u32,
    frame_delay_ms: u32,
) -> Result<Vec<Frame>> {
    let Some(last) = history.last() else {
        return Err(invalid_input(&"no snapshots recorded for visualization"));
    };

    let skip_factor = frame_skip_factor(frame_delay_ms);
    let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);

    let mut frames = Vec::with_capacity(history.len() / skip_factor + 2);
    let last_index = history.len() - 1;
    for (index, snapshot) in history.iter().enumerate() {
        if index.is_multiple_of(skip_factor) && index != last_index {
            frames.push(Frame::from_parts(
                render_snapshot(snapshot, palette, scale)?,
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms, 1),
            ));
        }
    }

    // Final frame displays longer for better visibility
    frames.push(Frame::from_parts(
        render_snapshot(last, palette, scale)?,
        0,
        0,
        Delay::from_numer_denom_ms(FINAL_FRAME_HOLD_MS.max(delay_ms), 1),
    ));

    Ok(frames)
}

/// Export a collapse history as an animated GIF
///
/// # Errors
///
/// Returns an error if:
/// - The history is empty or `scale` is zero
/// - File system operations fail
/// - GIF encoding fails
pub fn export_history_gif(
    history: &[Snapshot],
    palette: &Palette,
    scale: u32,
    frame_delay_ms: u32,
    output_path: &Path,
) -> Result<()> {
    let frames = render_frames(history, palette, scale, frame_delay_ms)?;

    ensure_parent_dir(output_path)?;
    let file = std::fs::File::create(output_path).map_err(|e| CollapseError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;

    let mut encoder = image::codecs::gif::GifEncoder::new(file);
    encoder
        .encode_frames(frames)
        .map_err(|e| CollapseError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
