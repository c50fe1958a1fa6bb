use crate::game::PayoffMatrix;
use crate::vector::{arg_max, arg_min};

/// An action together with the payoff it guarantees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OptimalPureStrategy {
    pub strategy: usize,
    pub value: f64,
}

impl OptimalPureStrategy {
    pub fn new(strategy: usize, value: f64) -> OptimalPureStrategy {
        OptimalPureStrategy { strategy, value }
    }
}

/// Player1's safest row: the one whose worst outcome is largest. Ties go to the lowest row.
pub fn find_max_min_strategy(matrix: &PayoffMatrix) -> OptimalPureStrategy {
    // Most unsuitable responses to each row.
    let row_minima = matrix
        .entries()
        .iter()
        .map(|row| row.iter().cloned().fold(std::f64::INFINITY, f64::min))
        .collect::<Vec<f64>>();

    // `PayoffMatrix` is never empty, so there is always a maximum.
    let (strategy, value) = arg_max(&row_minima).unwrap_or((0, -std::f64::INFINITY));
    OptimalPureStrategy::new(strategy, value)
}

/// Player2's safest column: the one whose worst outcome (for Player2) is smallest.
/// Ties go to the lowest column.
pub fn find_min_max_strategy(matrix: &PayoffMatrix) -> OptimalPureStrategy {
    let column_maxima = (0..matrix.num_cols())
        .map(|col| {
            matrix
                .column(col)
                .into_iter()
                .fold(-std::f64::INFINITY, f64::max)
        })
        .collect::<Vec<f64>>();

    let (strategy, value) = arg_min(&column_maxima).unwrap_or((0, std::f64::INFINITY));
    OptimalPureStrategy::new(strategy, value)
}
