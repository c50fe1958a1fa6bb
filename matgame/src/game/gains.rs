use crate::error::GameError;
use crate::game::PayoffMatrix;
use crate::vector::{arg_max, right_multiply, scalar_product, sum_of_components};

/// Distributions handed in by callers must sum to one within this tolerance.
const SUM_TOLERANCE: f64 = 1e-10;

/// Checks that `distribution` is a probability vector over `num_actions` actions.
pub fn validate_distribution(distribution: &[f64], num_actions: usize) -> Result<(), GameError> {
    let sum = sum_of_components(distribution);
    if !abs_diff_eq!(sum, 1.0, epsilon = SUM_TOLERANCE) {
        return Err(GameError::InvalidArgument(format!(
            "distribution sums to {}, not 1",
            sum
        )));
    }
    if distribution.len() != num_actions {
        return Err(GameError::InvalidArgument(format!(
            "distribution has {} entries but there are {} actions",
            distribution.len(),
            num_actions
        )));
    }
    Ok(())
}

/// Expected payoff of Player1 playing `row` against Player2's `distribution` over columns.
pub fn calculate_estimated_gain(
    matrix: &PayoffMatrix,
    distribution: &[f64],
    row: usize,
) -> Result<f64, GameError> {
    validate_distribution(distribution, matrix.num_cols())?;
    if row >= matrix.num_rows() {
        return Err(GameError::InvalidArgument(format!(
            "row {} out of range for a matrix with {} rows",
            row,
            matrix.num_rows()
        )));
    }
    Ok(scalar_product(matrix.row(row), distribution))
}

/// Player1's best pure response to Player2's `distribution`. Ties go to the lowest row.
pub fn choose_by_random_estimation(
    matrix: &PayoffMatrix,
    distribution: &[f64],
) -> Result<usize, GameError> {
    let gains = calculate_gains(matrix, distribution)?;
    Ok(arg_max(&gains).map_or(0, |(row, _)| row))
}

/// Expected payoff of every row against Player2's `distribution`, i.e., `matrix * distribution`.
pub fn calculate_gains(matrix: &PayoffMatrix, distribution: &[f64]) -> Result<Vec<f64>, GameError> {
    validate_distribution(distribution, matrix.num_cols())?;
    Ok(right_multiply(matrix.entries(), distribution))
}

/// Expected payoff of every column against Player1's `distribution` over rows,
/// i.e., `distribution' * matrix`.
pub fn calculate_column_payoffs(
    matrix: &PayoffMatrix,
    distribution: &[f64],
) -> Result<Vec<f64>, GameError> {
    validate_distribution(distribution, matrix.num_rows())?;
    Ok(right_multiply(matrix.transpose().entries(), distribution))
}
