use crate::error::GameError;
use crate::game::{calculate_column_payoffs, calculate_gains, PayoffMatrix, Player};
use crate::strategy::StrategyDistribution;

/// Game value together with an optimal mixed strategy for each player.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimalMixedStrategy {
    game_value: f64,
    mixed_strategies: [StrategyDistribution; 2],
}

impl OptimalMixedStrategy {
    pub fn new(
        game_value: f64,
        strategy_pl1: StrategyDistribution,
        strategy_pl2: StrategyDistribution,
    ) -> OptimalMixedStrategy {
        OptimalMixedStrategy {
            game_value,
            mixed_strategies: [strategy_pl1, strategy_pl2],
        }
    }

    pub fn game_value(&self) -> f64 {
        self.game_value
    }

    pub fn strategy(&self, player: Player) -> &StrategyDistribution {
        &self.mixed_strategies[player.index()]
    }

    pub fn mixed_strategies(&self) -> &[StrategyDistribution; 2] {
        &self.mixed_strategies
    }

    /// Checks that neither player can gain more than `epsilon` by deviating: no row earns
    /// more than the game value against Player2's strategy, and no column concedes less than
    /// the game value against Player1's strategy.
    pub fn is_equilibrium(&self, matrix: &PayoffMatrix, epsilon: f64) -> Result<bool, GameError> {
        let row_gains = calculate_gains(matrix, self.strategy(Player::Player2).inner())?;
        let column_payoffs =
            calculate_column_payoffs(matrix, self.strategy(Player::Player1).inner())?;

        Ok(row_gains.iter().all(|gain| *gain <= self.game_value + epsilon)
            && column_payoffs
                .iter()
                .all(|payoff| *payoff >= self.game_value - epsilon))
    }
}
