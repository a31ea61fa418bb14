//! Tests for entropy ranking and weighted collapse of a single cell

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use tilecollapse::algorithm::bitset::TileBitset;
    use tilecollapse::algorithm::executor::RandomSelector;
    use tilecollapse::algorithm::selection::{cell_entropy, collapse_cell, select_min_entropy};
    use tilecollapse::analysis::weights::TileWeights;
    use tilecollapse::spatial::grid::{Cell, SuperpositionGrid};
    use tilecollapse::spatial::tiles::TileId;

    fn set_of(capacity: usize, ids: &[usize]) -> TileBitset {
        let mut set = TileBitset::new(capacity);
        for &id in ids {
            set.insert(TileId(id));
        }
        set
    }

    fn grid_of(cols: usize, cells: Vec<Cell>) -> SuperpositionGrid {
        SuperpositionGrid::from_cells(Array2::from_shape_vec((1, cols), cells).expect("shape"))
    }

    // Tests a single candidate has zero entropy
    #[test]
    fn test_single_candidate_entropy_is_zero() {
        let weights = TileWeights::from_vec(vec![3, 5]);
        let entropy = cell_entropy(&set_of(2, &[1]), &weights).expect("non-empty");
        assert!(entropy.abs() < 1e-12);
    }

    // Tests equal weights reduce to ln(n)
    #[test]
    fn test_uniform_entropy_is_log_count() {
        let weights = TileWeights::from_vec(vec![1, 1, 1, 1]);
        let entropy = cell_entropy(&TileBitset::all(4), &weights).expect("non-empty");
        assert!((entropy - 4.0_f64.ln()).abs() < 1e-12);
    }

    // Tests skewed weights lower the entropy
    #[test]
    fn test_skewed_weights_lower_entropy() {
        let uniform = TileWeights::from_vec(vec![5, 5]);
        let skewed = TileWeights::from_vec(vec![9, 1]);
        let both = TileBitset::all(2);
        let h_uniform = cell_entropy(&both, &uniform).expect("non-empty");
        let h_skewed = cell_entropy(&both, &skewed).expect("non-empty");
        assert!(h_skewed < h_uniform);
    }

    // Tests empty candidate sets have no entropy
    #[test]
    fn test_empty_entropy_is_none() {
        let weights = TileWeights::from_vec(vec![1, 1]);
        assert!(cell_entropy(&TileBitset::new(2), &weights).is_none());
    }

    // Tests the globally lowest entropy cell is selected
    #[test]
    fn test_select_min_entropy_prefers_smaller_domain() {
        let weights = TileWeights::from_vec(vec![1, 1, 1]);
        let grid = grid_of(
            3,
            vec![
                Cell::Domain(TileBitset::all(3)),
                Cell::Domain(set_of(3, &[0, 2])),
                Cell::Concrete(TileId(1)),
            ],
        );

        let candidate = select_min_entropy(&grid, &weights).expect("open cell");
        assert_eq!(candidate.position, [0, 1]);
        assert!((candidate.entropy - 2.0_f64.ln()).abs() < 1e-12);
    }

    // Tests ties go to the first cell in row-major order
    #[test]
    fn test_select_min_entropy_tie_breaks_by_scan_order() {
        let weights = TileWeights::from_vec(vec![1, 1]);
        let cells = Array2::from_elem((2, 2), Cell::Domain(TileBitset::all(2)));
        let grid = SuperpositionGrid::from_cells(cells);

        let candidate = select_min_entropy(&grid, &weights).expect("open cell");
        assert_eq!(candidate.position, [0, 0]);
    }

    // Tests empty domains are skipped and a concrete grid yields nothing
    #[test]
    fn test_select_min_entropy_skips_contradictions_and_concrete() {
        let weights = TileWeights::from_vec(vec![1, 1]);
        let grid = grid_of(
            2,
            vec![Cell::Domain(TileBitset::new(2)), Cell::Concrete(TileId(0))],
        );
        assert!(select_min_entropy(&grid, &weights).is_none());
    }

    // Tests collapse picks a member of the domain and writes it in place
    #[test]
    fn test_collapse_cell_resolves_to_candidate() {
        let weights = TileWeights::from_vec(vec![2, 7, 1]);
        let mut selector = RandomSelector::new(7);

        for _ in 0..50 {
            let mut grid = grid_of(1, vec![Cell::Domain(set_of(3, &[0, 2]))]);
            let chosen = collapse_cell(&mut grid, [0, 0], &weights, &mut selector)
                .expect("cell collapses");
            assert!(chosen == TileId(0) || chosen == TileId(2));
            assert_eq!(grid.get([0, 0]), Some(&Cell::Concrete(chosen)));
        }
    }

    // Tests the random choice follows tile frequencies
    #[test]
    fn test_collapse_cell_is_frequency_weighted() {
        let weights = TileWeights::from_vec(vec![9, 1]);
        let mut selector = RandomSelector::new(2024);
        let mut heavy = 0;

        for _ in 0..1000 {
            let mut grid = grid_of(1, vec![Cell::Domain(TileBitset::all(2))]);
            if collapse_cell(&mut grid, [0, 0], &weights, &mut selector) == Some(TileId(0)) {
                heavy += 1;
            }
        }

        assert!(heavy > 800, "heavy tile chosen {heavy} times out of 1000");
    }

    // Tests concrete and out-of-bounds cells are left alone
    #[test]
    fn test_collapse_cell_ignores_resolved_cells() {
        let weights = TileWeights::from_vec(vec![1, 1]);
        let mut selector = RandomSelector::new(1);
        let mut grid = grid_of(1, vec![Cell::Concrete(TileId(1))]);

        assert!(collapse_cell(&mut grid, [0, 0], &weights, &mut selector).is_none());
        assert!(collapse_cell(&mut grid, [3, 3], &weights, &mut selector).is_none());
        assert_eq!(grid.get([0, 0]), Some(&Cell::Concrete(TileId(1))));
    }
}
