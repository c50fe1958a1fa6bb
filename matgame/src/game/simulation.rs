use crate::error::GameError;
use crate::game::{PayoffMatrix, Player};
use crate::strategy::OptimalMixedStrategy;

use log::debug;
use rand::Rng;

/// Plays `rounds` independent rounds in which both players sample their actions from
/// `strategy`, returning Player1's average payoff.
pub fn simulate_play<R: Rng + ?Sized>(
    matrix: &PayoffMatrix,
    strategy: &OptimalMixedStrategy,
    rounds: usize,
    rng: &mut R,
) -> Result<f64, GameError> {
    let strategy_pl1 = strategy.strategy(Player::Player1);
    let strategy_pl2 = strategy.strategy(Player::Player2);

    if rounds == 0 {
        return Err(GameError::InvalidArgument(String::from(
            "cannot simulate zero rounds",
        )));
    }
    if strategy_pl1.len() != matrix.num_rows() || strategy_pl2.len() != matrix.num_cols() {
        return Err(GameError::InvalidArgument(format!(
            "strategies over {}x{} actions do not fit a {}x{} matrix",
            strategy_pl1.len(),
            strategy_pl2.len(),
            matrix.num_rows(),
            matrix.num_cols()
        )));
    }

    let mut total_payoff = 0f64;
    for _ in 0..rounds {
        let row = strategy_pl1.sample(rng);
        let col = strategy_pl2.sample(rng);
        total_payoff += matrix.get(row, col);
    }

    let average_payoff = total_payoff / rounds as f64;
    debug!(
        "Average payoff over {} rounds: {} (game value {})",
        rounds,
        average_payoff,
        strategy.game_value()
    );
    Ok(average_payoff)
}
