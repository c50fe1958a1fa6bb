use crate::error::GameError;
use crate::game::{PayoffMatrix, Player};
use crate::solver::{player1_program, player2_program};
use crate::strategy::{OptimalMixedStrategy, StrategyDistribution};
use crate::vector::sum_of_components;

use optimizers::{LinearProgram, LinearProgramSolver, LpError};

use log::{debug, info};

/// Matrices whose smallest entry does not exceed this are shifted before solving.
const POSITIVITY_MARGIN: f64 = 1e-5;

/// Largest tolerated disagreement between the values recovered from the two programs.
const CONSISTENCY_TOLERANCE: f64 = 1e-5;

/// Finds optimal mixed strategies by solving one linear program per player.
///
/// The payoff matrix is first shifted so that its smallest entry is at least one. Adding a
/// constant to every payoff leaves the optimal strategies unchanged and moves the game value by
/// the same constant, which is removed again at the end. The two programs are dual to each other,
/// so the values they imply must agree; if they do not the result is rejected.
pub struct MixedStrategySolver<S: LinearProgramSolver> {
    lp_solver: S,
}

impl<S: LinearProgramSolver> MixedStrategySolver<S> {
    pub fn new(lp_solver: S) -> MixedStrategySolver<S> {
        MixedStrategySolver { lp_solver }
    }

    pub fn find_mixed_strategies(
        &self,
        matrix: &PayoffMatrix,
    ) -> Result<OptimalMixedStrategy, GameError> {
        let shift = Self::positivity_shift(matrix);
        let shifted_matrix = matrix.shifted(shift);
        debug!("Shifting payoffs by {}", shift);
        if shifted_matrix
            .entries()
            .iter()
            .flatten()
            .any(|x| !x.is_finite())
        {
            return Err(GameError::InvalidArgument(format!(
                "payoffs overflow when shifted by {}",
                shift
            )));
        }

        let raw_pl1 = self.solve_program(Player::Player1, player1_program(&shifted_matrix))?;
        let raw_pl2 = self.solve_program(Player::Player2, player2_program(&shifted_matrix))?;

        let strategy_pl1 = StrategyDistribution::normalize(&raw_pl1)?;
        let strategy_pl2 = StrategyDistribution::normalize(&raw_pl2)?;

        let value_pl1 = Self::recover_value(&raw_pl1, shift)?;
        let value_pl2 = Self::recover_value(&raw_pl2, shift)?;
        debug!("Game value from Player1: {}, from Player2: {}", value_pl1, value_pl2);

        if (value_pl1 - value_pl2).abs() > CONSISTENCY_TOLERANCE {
            return Err(GameError::ConsistencyViolation {
                value_pl1,
                value_pl2,
            });
        }

        info!(
            "Solved {}x{} game with {}, value {}",
            matrix.num_rows(),
            matrix.num_cols(),
            self.lp_solver.name(),
            value_pl2
        );
        Ok(OptimalMixedStrategy::new(value_pl2, strategy_pl1, strategy_pl2))
    }

    /// Amount added to every payoff so that the smallest one is at least 1. Zero if the matrix
    /// is already safely positive.
    fn positivity_shift(matrix: &PayoffMatrix) -> f64 {
        let beta = matrix.min_element();
        match beta <= POSITIVITY_MARGIN {
            true => 1.0 - beta,
            false => 0.0,
        }
    }

    /// The raw solution sums to the reciprocal of the shifted game's value.
    fn recover_value(raw_solution: &[f64], shift: f64) -> Result<f64, GameError> {
        let theta = sum_of_components(raw_solution);
        if !(theta > 0.0) {
            return Err(GameError::DegenerateNormalization { sum: theta });
        }
        Ok(1.0 / theta - shift)
    }

    fn solve_program(
        &self,
        player: Player,
        program: Result<LinearProgram, LpError>,
    ) -> Result<Vec<f64>, GameError> {
        let program = program.map_err(|source| GameError::SolverFailure { player, source })?;
        let raw_solution = self
            .lp_solver
            .solve(&program)
            .map_err(|source| GameError::SolverFailure { player, source })?;

        if raw_solution.len() != program.num_variables() {
            return Err(GameError::SolverFailure {
                player,
                source: LpError::Backend(format!(
                    "returned {} values for {} variables",
                    raw_solution.len(),
                    program.num_variables()
                )),
            });
        }
        if raw_solution.iter().any(|x| !x.is_finite()) {
            return Err(GameError::SolverFailure {
                player,
                source: LpError::Unbounded,
            });
        }
        debug!("Raw solution for {:?}: {:?}", player, raw_solution);
        Ok(raw_solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_fixtures::DIAGONAL_GAME;
    use crate::game::{calculate_column_payoffs, calculate_gains};
    use optimizers::MinilpSolver;

    use assert_approx_eq::assert_approx_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Hands out canned solutions in order, ignoring the program.
    struct FixedSolver {
        responses: RefCell<VecDeque<Result<Vec<f64>, LpError>>>,
    }

    impl FixedSolver {
        fn new(responses: Vec<Result<Vec<f64>, LpError>>) -> FixedSolver {
            FixedSolver {
                responses: RefCell::new(responses.into_iter().collect()),
            }
        }
    }

    impl LinearProgramSolver for FixedSolver {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn solve(&self, _program: &LinearProgram) -> Result<Vec<f64>, LpError> {
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(LpError::Backend(String::from("no response left"))))
        }
    }

    fn matrix(entries: Vec<Vec<f64>>) -> PayoffMatrix {
        PayoffMatrix::new(entries).unwrap()
    }

    fn solve(game: &PayoffMatrix) -> OptimalMixedStrategy {
        MixedStrategySolver::new(MinilpSolver::new())
            .find_mixed_strategies(game)
            .unwrap()
    }

    fn assert_distribution(distribution: &StrategyDistribution, expected: &[f64]) {
        assert_eq!(distribution.len(), expected.len());
        for (actual, expected) in distribution.inner().iter().zip(expected.iter()) {
            assert_approx_eq!(*actual, *expected, 1e-4);
        }
    }

    #[test]
    fn fixed_solutions_recover_worked_example() {
        // Shifted by 1 the game is [[3,1],[1,7]] with value 2.5, so x = y = (0.75, 0.25) / 2.5.
        let solver = MixedStrategySolver::new(FixedSolver::new(vec![
            Ok(vec![0.3, 0.1]),
            Ok(vec![0.3, 0.1]),
        ]));
        let solution = solver.find_mixed_strategies(&DIAGONAL_GAME).unwrap();

        assert_approx_eq!(solution.game_value(), 1.5, 1e-12);
        assert_distribution(solution.strategy(Player::Player1), &[0.75, 0.25]);
        assert_distribution(solution.strategy(Player::Player2), &[0.75, 0.25]);
    }

    #[test]
    fn solver_failure_is_reported_per_player() {
        let solver = MixedStrategySolver::new(FixedSolver::new(vec![
            Ok(vec![0.3, 0.1]),
            Err(LpError::Unbounded),
        ]));
        match solver.find_mixed_strategies(&DIAGONAL_GAME) {
            Err(GameError::SolverFailure { player, source }) => {
                assert_eq!(player, Player::Player2);
                assert_eq!(source, LpError::Unbounded);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn infinite_solution_is_a_solver_failure() {
        let solver = MixedStrategySolver::new(FixedSolver::new(vec![Ok(vec![
            std::f64::INFINITY,
            0.0,
        ])]));
        match solver.find_mixed_strategies(&DIAGONAL_GAME) {
            Err(GameError::SolverFailure { player, source }) => {
                assert_eq!(player, Player::Player1);
                assert_eq!(source, LpError::Unbounded);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn nan_solution_is_a_solver_failure() {
        let solver = MixedStrategySolver::new(FixedSolver::new(vec![
            Ok(vec![0.3, 0.1]),
            Ok(vec![std::f64::NAN, 0.1]),
        ]));
        assert!(matches!(
            solver.find_mixed_strategies(&DIAGONAL_GAME),
            Err(GameError::SolverFailure {
                player: Player::Player2,
                ..
            })
        ));
    }

    #[test]
    fn overflowing_shift_is_rejected() {
        let game = matrix(vec![vec![1e308, -1e308], vec![-1e308, 1e308]]);
        assert!(matches!(
            MixedStrategySolver::new(MinilpSolver::new()).find_mixed_strategies(&game),
            Err(GameError::InvalidArgument(_))
        ));
    }

    #[test]
    fn wrong_solution_length_is_a_solver_failure() {
        let solver = MixedStrategySolver::new(FixedSolver::new(vec![Ok(vec![0.3, 0.1, 0.0])]));
        assert!(matches!(
            solver.find_mixed_strategies(&DIAGONAL_GAME),
            Err(GameError::SolverFailure {
                player: Player::Player1,
                ..
            })
        ));
    }

    #[test]
    fn zero_solution_is_degenerate() {
        let solver = MixedStrategySolver::new(FixedSolver::new(vec![
            Ok(vec![0.0, 0.0]),
            Ok(vec![0.3, 0.1]),
        ]));
        assert!(matches!(
            solver.find_mixed_strategies(&DIAGONAL_GAME),
            Err(GameError::DegenerateNormalization { .. })
        ));
    }

    #[test]
    fn disagreeing_values_are_rejected() {
        // Player2's solution implies 1 / 0.5 - 1 = 1.0 instead of 1.5.
        let solver = MixedStrategySolver::new(FixedSolver::new(vec![
            Ok(vec![0.3, 0.1]),
            Ok(vec![0.25, 0.25]),
        ]));
        match solver.find_mixed_strategies(&DIAGONAL_GAME) {
            Err(GameError::ConsistencyViolation {
                value_pl1,
                value_pl2,
            }) => {
                assert_approx_eq!(value_pl1, 1.5, 1e-12);
                assert_approx_eq!(value_pl2, 1.0, 1e-12);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn worked_example() {
        let game = DIAGONAL_GAME.clone();
        let solution = solve(&game);

        assert_approx_eq!(solution.game_value(), 1.5, 1e-4);
        assert_distribution(solution.strategy(Player::Player1), &[0.75, 0.25]);
        assert_distribution(solution.strategy(Player::Player2), &[0.75, 0.25]);

        // Both rows earn the game value against Player2's fully mixed strategy.
        let gains = calculate_gains(&game, solution.strategy(Player::Player2).inner()).unwrap();
        for gain in gains {
            assert_approx_eq!(gain, solution.game_value(), 1e-4);
        }

        // The caller's matrix is untouched.
        assert_eq!(game, *DIAGONAL_GAME);
    }

    #[test]
    fn asymmetric_game() {
        let solution = solve(&matrix(vec![vec![3.0, -1.0], vec![-2.0, 1.0]]));

        assert_approx_eq!(solution.game_value(), 1.0 / 7.0, 1e-6);
        assert_distribution(solution.strategy(Player::Player1), &[3.0 / 7.0, 4.0 / 7.0]);
        assert_distribution(solution.strategy(Player::Player2), &[2.0 / 7.0, 5.0 / 7.0]);
    }

    #[test]
    fn positive_game_is_not_offset() {
        // Smallest entry is 2, so no shift is applied and nothing may be subtracted.
        let solution = solve(&matrix(vec![vec![3.0, 5.0], vec![6.0, 2.0]]));

        assert_approx_eq!(solution.game_value(), 4.0, 1e-6);
        assert_distribution(solution.strategy(Player::Player1), &[2.0 / 3.0, 1.0 / 3.0]);
        assert_distribution(solution.strategy(Player::Player2), &[0.5, 0.5]);
    }

    #[test]
    fn rock_paper_scissors() {
        let game = matrix(vec![
            vec![0.0, -1.0, 1.0],
            vec![1.0, 0.0, -1.0],
            vec![-1.0, 1.0, 0.0],
        ]);
        let solution = solve(&game);

        assert_approx_eq!(solution.game_value(), 0.0, 1e-6);
        assert_distribution(solution.strategy(Player::Player1), &[1.0 / 3.0; 3]);
        assert_distribution(solution.strategy(Player::Player2), &[1.0 / 3.0; 3]);
    }

    #[test]
    fn saddle_point_game() {
        let solution = solve(&matrix(vec![vec![4.0, 2.0], vec![3.0, 1.0]]));

        assert_approx_eq!(solution.game_value(), 2.0, 1e-6);
        assert_distribution(solution.strategy(Player::Player1), &[1.0, 0.0]);
        assert_distribution(solution.strategy(Player::Player2), &[0.0, 1.0]);
    }

    #[test]
    fn single_row_game() {
        let solution = solve(&matrix(vec![vec![5.0, 3.0, 7.0]]));

        assert_approx_eq!(solution.game_value(), 3.0, 1e-6);
        assert_distribution(solution.strategy(Player::Player1), &[1.0]);
        assert_distribution(solution.strategy(Player::Player2), &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn shifting_payoffs_shifts_value() {
        let game = matrix(vec![vec![3.0, -1.0, 0.5], vec![-2.0, 1.0, 0.0]]);
        let solution = solve(&game);

        for c in [-10.0, -0.5, 2.0, 25.0].iter() {
            let shifted_solution = solve(&game.shifted(*c));
            assert_approx_eq!(shifted_solution.game_value(), solution.game_value() + c, 1e-6);
            for player in [Player::Player1, Player::Player2].iter() {
                assert_distribution(
                    shifted_solution.strategy(*player),
                    solution.strategy(*player).inner(),
                );
            }
        }
    }

    #[test]
    fn random_games_satisfy_best_response_bounds() {
        let mut rng = StdRng::seed_from_u64(2020);
        for (num_rows, num_cols) in [(2, 2), (3, 5), (6, 4), (7, 7)].iter() {
            let game = PayoffMatrix::from_rng(*num_rows, *num_cols, &mut rng).unwrap();
            let solution = solve(&game);
            let value = solution.game_value();

            for distribution in solution.mixed_strategies().iter() {
                assert!(distribution.inner().iter().all(|p| *p >= 0.0));
                assert_approx_eq!(distribution.inner().iter().sum::<f64>(), 1.0, 1e-9);
            }

            let row_gains =
                calculate_gains(&game, solution.strategy(Player::Player2).inner()).unwrap();
            assert!(row_gains.iter().all(|gain| *gain <= value + 1e-6));

            let column_payoffs =
                calculate_column_payoffs(&game, solution.strategy(Player::Player1).inner())
                    .unwrap();
            assert!(column_payoffs.iter().all(|payoff| *payoff >= value - 1e-6));

            // Every action in the support earns exactly the value.
            for row in solution.strategy(Player::Player1).support() {
                assert_approx_eq!(row_gains[row], value, 1e-4);
            }
            assert!(solution.is_equilibrium(&game, 1e-6).unwrap());
        }
    }
}
