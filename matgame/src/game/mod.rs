mod gains;
mod payoff;
mod player;
mod pure_strategy;
mod simulation;

pub use self::gains::{
    calculate_column_payoffs, calculate_estimated_gain, calculate_gains,
    choose_by_random_estimation, validate_distribution,
};
pub use self::payoff::PayoffMatrix;
pub use self::player::Player;
pub use self::pure_strategy::{find_max_min_strategy, find_min_max_strategy, OptimalPureStrategy};
pub use self::simulation::simulate_play;

#[cfg(test)]
pub use self::payoff::test_fixtures;
