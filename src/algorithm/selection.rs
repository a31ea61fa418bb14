use crate::{
    algorithm::{bitset::TileBitset, executor::RandomSelector},
    analysis::weights::TileWeights,
    math::probability::weighted_entropy,
    spatial::grid::{Cell, SuperpositionGrid},
    spatial::tiles::TileId,
};

/// Lowest-entropy cell found by a ranking pass
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntropyCandidate {
    /// Grid indices of the cell
    pub position: [usize; 2],
    /// Weighted Shannon entropy of its candidate set
    pub entropy: f64,
}

/// Weighted Shannon entropy of a candidate set
///
/// Returns `None` for an empty set.
pub fn cell_entropy(candidates: &TileBitset, weights: &TileWeights) -> Option<f64> {
    let (sum_weights, sum_weight_log_weights) =
        candidates
            .iter()
            .fold((0.0_f64, 0.0_f64), |(sum, sum_log), tile| {
                (
                    sum + weights.weight(tile) as f64,
                    sum_log + weights.weight_log_weight(tile),
                )
            });
    weighted_entropy(sum_weights, sum_weight_log_weights)
}

/// Select the undetermined cell with the globally lowest entropy
///
/// Cells are scanned in row-major order and only a strictly lower score
/// replaces the current best, so ties go to the first cell encountered.
/// Empty candidate sets are skipped; contradictions are the driver's concern.
/// Returns `None` once no undetermined cell is left.
pub fn select_min_entropy(
    grid: &SuperpositionGrid,
    weights: &TileWeights,
) -> Option<EntropyCandidate> {
    let mut best: Option<EntropyCandidate> = None;

    for (index, cell) in grid.cells().indexed_iter() {
        let Cell::Domain(candidates) = cell else {
            continue;
        };
        let Some(entropy) = cell_entropy(candidates, weights) else {
            continue;
        };
        if best.is_none_or(|current| entropy < current.entropy) {
            best = Some(EntropyCandidate {
                position: index.into(),
                entropy,
            });
        }
    }

    best
}

/// Resolve one undetermined cell by frequency-weighted random choice
///
/// Returns the chosen tile, or `None` if the cell is concrete, empty or out
/// of bounds, in which case the grid is left untouched.
pub fn collapse_cell(
    grid: &mut SuperpositionGrid,
    position: [usize; 2],
    weights: &TileWeights,
    selector: &mut RandomSelector,
) -> Option<TileId> {
    let candidates = grid.get(position)?.domain()?.to_vec();
    if candidates.is_empty() {
        return None;
    }

    let candidate_weights: Vec<f64> = candidates
        .iter()
        .map(|&tile| weights.weight(tile) as f64)
        .collect();
    let chosen = candidates
        .get(selector.weighted_choice(&candidate_weights))
        .copied()?;

    grid.set_concrete(position, chosen).then_some(chosen)
}
