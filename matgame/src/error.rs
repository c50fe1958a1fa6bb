use crate::game::Player;
use optimizers::LpError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("linear program for {player:?} could not be solved: {source}")]
    SolverFailure {
        player: Player,
        #[source]
        source: LpError,
    },

    #[error("cannot normalize raw solution summing to {sum}")]
    DegenerateNormalization { sum: f64 },

    #[error("game values are not equal: {value_pl1} (Player1) vs {value_pl2} (Player2)")]
    ConsistencyViolation { value_pl1: f64, value_pl2: f64 },

    #[error("failed to read payoff matrix: {0}")]
    Io(#[from] std::io::Error),
}
