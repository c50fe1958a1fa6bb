use crate::error::LpError;
use crate::linear_program::LinearProgram;
use crate::minilp_solver::MinilpSolver;

use std::fmt;
use std::str::FromStr;

/// Anything that can solve a `LinearProgram` in standard form.
///
/// Implementations must return a vector with exactly one entry per variable,
/// or fail. Partial or unverified solutions are never returned.
pub trait LinearProgramSolver {
    fn name(&self) -> &'static str;
    fn solve(&self, program: &LinearProgram) -> Result<Vec<f64>, LpError>;
}

impl<'a, S: LinearProgramSolver + ?Sized> LinearProgramSolver for &'a S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn solve(&self, program: &LinearProgram) -> Result<Vec<f64>, LpError> {
        (**self).solve(program)
    }
}

impl<S: LinearProgramSolver + ?Sized> LinearProgramSolver for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn solve(&self, program: &LinearProgram) -> Result<Vec<f64>, LpError> {
        (**self).solve(program)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SolverBackend {
    Minilp,
}

impl Default for SolverBackend {
    fn default() -> Self {
        SolverBackend::Minilp
    }
}

impl FromStr for SolverBackend {
    type Err = String;
    fn from_str(backend: &str) -> Result<Self, Self::Err> {
        match backend {
            "minilp" | "Minilp" | "simplex" | "Simplex" => Ok(SolverBackend::Minilp),
            other => Err(format!("unknown solver backend {:?}", other)),
        }
    }
}

impl fmt::Display for SolverBackend {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolverBackend::Minilp => write!(f, "minilp"),
        }
    }
}

#[derive(Debug, Copy, Clone, Default)]
pub struct SolverConfig {
    pub backend: SolverBackend,
}

impl SolverConfig {
    pub fn build(&self) -> Box<dyn LinearProgramSolver> {
        match self.backend {
            SolverBackend::Minilp => Box::new(MinilpSolver::new()),
        }
    }
}
