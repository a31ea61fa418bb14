//! Tests for weighted entropy and cumulative sampling

#[cfg(test)]
mod tests {
    use tilecollapse::math::probability::{cumulative_choice, weighted_entropy};

    // Tests two equally weighted candidates give ln(2)
    #[test]
    fn test_weighted_entropy_uniform_pair() {
        let w = 3.0_f64;
        let entropy = weighted_entropy(2.0 * w, 2.0 * w * w.ln()).expect("positive sum");
        assert!(
            (entropy - 2.0_f64.ln()).abs() < 1e-12,
            "Expected ln 2, got {entropy}"
        );
    }

    // Tests weights {1, 3}: ln 4 - 3 ln 3 / 4
    #[test]
    fn test_weighted_entropy_skewed_pair() {
        let entropy = weighted_entropy(4.0, 3.0 * 3.0_f64.ln()).expect("positive sum");
        let expected = 4.0_f64.ln() - 0.75 * 3.0_f64.ln();
        assert!((entropy - expected).abs() < 1e-12);
        assert!(entropy > 0.0 && entropy < 2.0_f64.ln());
    }

    #[test]
    fn test_weighted_entropy_empty() {
        assert!(weighted_entropy(0.0, 0.0).is_none());
    }

    // Tests the unit interval maps onto cumulative weight buckets
    #[test]
    fn test_cumulative_choice_buckets() {
        let weights = [1.0, 2.0, 1.0];
        assert_eq!(cumulative_choice(&weights, 0.0), 0);
        assert_eq!(cumulative_choice(&weights, 0.24), 0);
        assert_eq!(cumulative_choice(&weights, 0.25), 1);
        assert_eq!(cumulative_choice(&weights, 0.74), 1);
        assert_eq!(cumulative_choice(&weights, 0.75), 2);
        assert_eq!(cumulative_choice(&weights, 0.999_999), 2);
    }

    // Tests zero weights are never picked
    #[test]
    fn test_cumulative_choice_skips_zero_weights() {
        let weights = [0.0, 5.0, 0.0];
        for step in 0..100 {
            let unit = f64::from(step) / 100.0;
            assert_eq!(cumulative_choice(&weights, unit), 1);
        }
    }

    #[test]
    fn test_cumulative_choice_degenerate() {
        assert_eq!(cumulative_choice(&[], 0.5), 0);
        assert_eq!(cumulative_choice(&[0.0, 0.0], 0.5), 0);
    }
}
