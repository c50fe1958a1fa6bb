use crate::error::GameError;

/// Totals at or below this magnitude cannot be normalized.
const NORMALIZATION_EPSILON: f64 = 1e-12;

pub fn unity_vector(n: usize) -> Vec<f64> {
    vec![1.0; n]
}

/// Panics if the lengths differ.
pub fn scalar_product(u: &[f64], v: &[f64]) -> f64 {
    assert_eq!(u.len(), v.len());
    u.iter().zip(v.iter()).map(|(a, b)| a * b).sum()
}

pub fn sum_of_components(v: &[f64]) -> f64 {
    v.iter().sum()
}

/// Divides every component by the total of all components.
pub fn normalize_by_sum(v: &[f64]) -> Result<Vec<f64>, GameError> {
    let sum = sum_of_components(v);
    if !sum.is_finite() || abs_diff_eq!(sum, 0.0, epsilon = NORMALIZATION_EPSILON) {
        return Err(GameError::DegenerateNormalization { sum });
    }
    Ok(v.iter().map(|x| x / sum).collect())
}

/// Computes `matrix * v`. Every row of `matrix` must have `v.len()` entries.
pub fn right_multiply(matrix: &[Vec<f64>], v: &[f64]) -> Vec<f64> {
    matrix.iter().map(|row| scalar_product(row, v)).collect()
}

/// Index and value of the largest entry. Ties go to the lowest index.
pub fn arg_max(v: &[f64]) -> Option<(usize, f64)> {
    let (first, rest) = v.split_first()?;
    let mut best = (0, *first);
    for (index, value) in rest.iter().enumerate() {
        if *value > best.1 {
            best = (index + 1, *value);
        }
    }
    Some(best)
}

/// Index and value of the smallest entry. Ties go to the lowest index.
pub fn arg_min(v: &[f64]) -> Option<(usize, f64)> {
    let (first, rest) = v.split_first()?;
    let mut best = (0, *first);
    for (index, value) in rest.iter().enumerate() {
        if *value < best.1 {
            best = (index + 1, *value);
        }
    }
    Some(best)
}
