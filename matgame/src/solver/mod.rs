mod mixed_strategy_solver;
mod programs;

pub use self::mixed_strategy_solver::MixedStrategySolver;
pub use self::programs::{player1_program, player2_program};
