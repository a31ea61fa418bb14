//! Tests for tile frequency weights

#[cfg(test)]
mod tests {
    use ndarray::array;
    use tilecollapse::analysis::rules::extract_rules;
    use tilecollapse::analysis::weights::TileWeights;
    use tilecollapse::spatial::tiles::TileId;

    // Tests counting over an id grid
    #[test]
    fn test_from_counts() {
        let ids = array![[TileId(0), TileId(1)], [TileId(1), TileId(1)]];
        let weights = TileWeights::from_counts(&ids, 3);

        assert_eq!(weights.counts(), &[1, 3, 0]);
        assert_eq!(weights.total(), 4);
        assert_eq!(weights.len(), 3);
        assert!(!weights.is_empty());
    }

    // Tests the cached w*ln(w) terms
    #[test]
    fn test_weight_log_weight_cache() {
        let weights = TileWeights::from_vec(vec![1, 4, 0]);
        assert!(weights.weight_log_weight(TileId(0)).abs() < 1e-12);
        assert!((weights.weight_log_weight(TileId(1)) - 4.0 * 4.0_f64.ln()).abs() < 1e-12);
        assert!(weights.weight_log_weight(TileId(2)).abs() < 1e-12);
    }

    // Tests unknown ids read as zero
    #[test]
    fn test_unknown_tile() {
        let weights = TileWeights::from_vec(vec![2]);
        assert_eq!(weights.weight(TileId(5)), 0);
        assert!(weights.weight_log_weight(TileId(5)).abs() < 1e-12);
    }

    // Tests sample weights sum to the sample area
    #[test]
    fn test_sample_weights_match_area() {
        let sample: Vec<Vec<char>> = ["ABA", "CAA"]
            .iter()
            .map(|line| line.chars().collect())
            .collect();
        let (dictionary, weights, _) = extract_rules(&sample).expect("valid sample");

        assert_eq!(weights.total(), 6);
        assert_eq!(weights.weight(dictionary.id_of('A').expect("A")), 4);
        assert_eq!(weights.weight(dictionary.id_of('B').expect("B")), 1);
        assert_eq!(weights.weight(dictionary.id_of('C').expect("C")), 1);
        assert!(dictionary.ids().all(|id| weights.weight(id) > 0));
    }

    #[test]
    fn test_empty_weights() {
        let weights = TileWeights::from_vec(Vec::new());
        assert!(weights.is_empty());
        assert_eq!(weights.total(), 0);
    }
}
