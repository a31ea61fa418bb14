/// Weighted Shannon entropy of a candidate set
///
/// With `sum_weights = Σw` and `sum_weight_log_weights = Σ w·ln(w)` over the
/// candidates, the entropy is `ln(Σw) - Σw·ln(w) / Σw`. A single candidate
/// scores zero. Returns `None` for an empty set, where the logarithm is
/// undefined.
pub fn weighted_entropy(sum_weights: f64, sum_weight_log_weights: f64) -> Option<f64> {
    (sum_weights > 0.0).then(|| sum_weights.ln() - sum_weight_log_weights / sum_weights)
}

/// Pick an index with probability proportional to its weight
///
/// `unit` must lie in `[0, 1)`. Zero-weight entries are never selected unless
/// every weight is zero, in which case the first index is returned.
pub fn cumulative_choice(weights: &[f64], unit: f64) -> usize {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return 0;
    }

    let mut remaining = unit * total;
    let mut last_positive = 0;
    for (i, &weight) in weights.iter().enumerate() {
        if weight <= 0.0 {
            continue;
        }
        last_positive = i;
        if remaining < weight {
            return i;
        }
        remaining -= weight;
    }
    last_positive
}
