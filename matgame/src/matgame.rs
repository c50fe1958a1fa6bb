// Solving two-player zero-sum matrix games.
//
// Pure strategies are found by scanning the payoff matrix. Mixed strategies are found by
// reducing the game to a pair of linear programs (one per player) and handing them to an
// `optimizers::LinearProgramSolver`.

#[macro_use]
extern crate approx;

pub mod error;
pub mod game;
pub mod solver;
pub mod strategy;
pub mod vector;

pub use error::GameError;
