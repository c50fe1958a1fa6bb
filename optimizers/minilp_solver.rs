use crate::error::LpError;
use crate::linear_program::LinearProgram;
use crate::solver::LinearProgramSolver;

use log::{debug, trace};
use minilp::{ComparisonOp, LinearExpr, OptimizationDirection, Problem, Variable};

/// Coefficients smaller than this are left out of the constraint rows handed to minilp.
const EFFECTIVELY_ZERO: f64 = 1e-15;

/// ===============================================================================================
/// Backend built on the pure Rust `minilp` simplex implementation.
///
/// Variables (columns) are added in the order of the objective vector, each with bounds
/// [0, +inf), so the non-negativity requirement of the standard form is enforced by the variable
/// bounds as well as by any explicit rows the caller includes.
///
/// Constraints (rows) are added in the order of the constraint matrix, all with sense `<=`.
/// A row without any non-zero coefficient is never handed to minilp: it is either trivially
/// satisfied (rhs >= 0) or makes the program infeasible (rhs < 0).
/// ===============================================================================================
#[derive(Debug, Default, Clone, Copy)]
pub struct MinilpSolver {}

impl MinilpSolver {
    pub fn new() -> MinilpSolver {
        MinilpSolver {}
    }

    fn make_variables(problem: &mut Problem, program: &LinearProgram) -> Vec<Variable> {
        program
            .objective()
            .iter()
            .map(|coeff| problem.add_var(*coeff, (0.0, std::f64::INFINITY)))
            .collect()
    }

    fn make_constraints(
        problem: &mut Problem,
        program: &LinearProgram,
        variables: &[Variable],
    ) -> Result<(), LpError> {
        for (row_index, (row, rhs)) in program
            .constraints()
            .iter()
            .zip(program.rhs().iter())
            .enumerate()
        {
            let mut expr = LinearExpr::empty();
            let mut num_nonzeros = 0;
            for (variable, coeff) in variables.iter().zip(row.iter()) {
                if coeff.abs() > EFFECTIVELY_ZERO {
                    expr.add(*variable, *coeff);
                    num_nonzeros += 1;
                }
            }

            if num_nonzeros == 0 {
                if *rhs < 0.0 {
                    debug!("Constraint row {} reads 0 <= {}", row_index, rhs);
                    return Err(LpError::Infeasible);
                }
                continue;
            }

            problem.add_constraint(expr, ComparisonOp::Le, *rhs);
        }
        Ok(())
    }
}

impl LinearProgramSolver for MinilpSolver {
    fn name(&self) -> &'static str {
        "minilp"
    }

    fn solve(&self, program: &LinearProgram) -> Result<Vec<f64>, LpError> {
        trace!(
            "Solving program with {} variables and {} constraints",
            program.num_variables(),
            program.num_constraints()
        );

        let mut problem = Problem::new(OptimizationDirection::Minimize);
        let variables = Self::make_variables(&mut problem, program);
        Self::make_constraints(&mut problem, program, &variables)?;

        let solution = problem.solve().map_err(|err| match err {
            minilp::Error::Infeasible => LpError::Infeasible,
            minilp::Error::Unbounded => LpError::Unbounded,
            #[allow(unreachable_patterns)]
            other => LpError::Backend(other.to_string()),
        })?;

        debug!("minilp objective value: {}", solution.objective());

        // minilp may hand back an unbounded ray as an infinite "solution".
        let x = variables
            .iter()
            .map(|variable| solution[*variable])
            .collect::<Vec<f64>>();
        if !solution.objective().is_finite() || x.iter().any(|xi| !xi.is_finite()) {
            return Err(LpError::Unbounded);
        }
        Ok(x)
    }
}
