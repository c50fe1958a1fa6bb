// Linear program solving backends.
//
// Every backend solves programs in the same standard form:
//
//  min  c'x
//  s.t. Ax <= b,
//       x >= 0.
//
// Callers build a `LinearProgram` once and hand it to whichever backend
// `SolverConfig` selects.

mod error;
mod linear_program;
mod minilp_solver;
mod solver;

pub use self::error::LpError;
pub use self::linear_program::LinearProgram;
pub use self::minilp_solver::MinilpSolver;
pub use self::solver::{LinearProgramSolver, SolverBackend, SolverConfig};
