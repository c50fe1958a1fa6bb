use std::fs::File;
use std::path::PathBuf;
use structopt::StructOpt;

use itertools::Itertools;
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use matgame::game::{
    calculate_gains, choose_by_random_estimation, find_max_min_strategy, find_min_max_strategy,
    simulate_play, PayoffMatrix, Player,
};
use matgame::solver::MixedStrategySolver;
use matgame::GameError;
use optimizers::{SolverBackend, SolverConfig};

/// Slack allowed when checking the best-response bounds of a solution.
const EQUILIBRIUM_EPSILON: f64 = 1e-6;

#[derive(StructOpt, Debug)]
#[structopt(name = "MatrixGameSolver")]
struct Opt {
    // Payoff matrix file, one row per line. A random game is generated if not provided.
    #[structopt(short = "g", long = "game_file")]
    game_file: Option<PathBuf>,

    // Rows of the random game
    #[structopt(short = "r", long = "rows", default_value = "3")]
    rows: usize,

    // Columns of the random game
    #[structopt(short = "c", long = "cols", default_value = "3")]
    cols: usize,

    // Seed for random games and simulated play
    #[structopt(long = "seed", default_value = "0")]
    seed: u64,

    // Linear program backend
    #[structopt(short = "s", long = "solver", default_value = "minilp")]
    solver: SolverBackend,

    // Rounds of simulated play, none if zero
    #[structopt(short = "n", long = "rounds", default_value = "0")]
    rounds: usize,
}

fn format_vector(v: &[f64]) -> String {
    v.iter().map(|x| format!("{:.6}", x)).join(" ")
}

fn load_matrix(opt: &Opt) -> Result<PayoffMatrix, GameError> {
    match opt.game_file {
        Some(ref path) => PayoffMatrix::read(File::open(path)?),
        None => {
            info!(
                "Generating random {}x{} game with seed {}",
                opt.rows, opt.cols, opt.seed
            );
            let mut rng = StdRng::seed_from_u64(opt.seed);
            PayoffMatrix::from_rng(opt.rows, opt.cols, &mut rng)
        }
    }
}

fn run(opt: &Opt) -> Result<(), GameError> {
    let matrix = load_matrix(opt)?;
    println!("Payoff matrix:");
    print!("{}", matrix);

    let max_min = find_max_min_strategy(&matrix);
    println!("Max min value = {}", max_min.value);
    println!("Max min strategy = {}", max_min.strategy);
    let min_max = find_min_max_strategy(&matrix);
    println!("Min max value = {}", min_max.value);
    println!("Min max strategy = {}", min_max.strategy);

    if max_min.value == min_max.value {
        println!(
            "The optimal pure strategy is: {} - {}",
            max_min.strategy, min_max.strategy
        );
        println!("The value of game is {}", min_max.value);
        return Ok(());
    }
    println!("The optimal pure strategy doesn't exist");

    let solver_config = SolverConfig {
        backend: opt.solver,
    };
    let solver = MixedStrategySolver::new(solver_config.build());
    let solution = solver.find_mixed_strategies(&matrix)?;

    println!("*********************");
    println!("Mixed strategies:");
    println!("First player:");
    println!("{}", format_vector(solution.strategy(Player::Player1).inner()));
    println!("Second player:");
    println!("{}", format_vector(solution.strategy(Player::Player2).inner()));
    println!("Game value is {}", solution.game_value());

    println!("---------------------------");
    let strategy_pl2 = solution.strategy(Player::Player2).inner();
    let gains = calculate_gains(&matrix, strategy_pl2)?;
    println!("Pure gains:");
    println!("{}", format_vector(&gains));
    println!(
        "Best pure response of first player: {}",
        choose_by_random_estimation(&matrix, strategy_pl2)?
    );

    if !solution.is_equilibrium(&matrix, EQUILIBRIUM_EPSILON)? {
        warn!(
            "Solution violates best response bounds by more than {}",
            EQUILIBRIUM_EPSILON
        );
    }

    if opt.rounds > 0 {
        let mut rng = ChaCha8Rng::seed_from_u64(opt.seed);
        let average = simulate_play(&matrix, &solution, opt.rounds, &mut rng)?;
        println!(
            "Average payoff over {} simulated rounds: {}",
            opt.rounds, average
        );
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let opt = Opt::from_args();

    if let Err(err) = run(&opt) {
        error!("{}", err);
        std::process::exit(1);
    }
}
