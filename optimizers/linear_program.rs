use crate::error::LpError;

/// A linear program in standard form
///
///  min  objective' x
///  s.t. constraints x <= rhs,
///       x >= 0.
///
/// The constraint matrix is stored densely, one inner `Vec` per constraint (row),
/// with one coefficient per variable (column).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearProgram {
    objective: Vec<f64>,
    constraints: Vec<Vec<f64>>,
    rhs: Vec<f64>,
}

impl LinearProgram {
    pub fn new(
        objective: Vec<f64>,
        constraints: Vec<Vec<f64>>,
        rhs: Vec<f64>,
    ) -> Result<LinearProgram, LpError> {
        if objective.is_empty() {
            return Err(LpError::Dimension(String::from(
                "program has no variables",
            )));
        }
        if constraints.len() != rhs.len() {
            return Err(LpError::Dimension(format!(
                "{} constraint rows but {} right hand side entries",
                constraints.len(),
                rhs.len()
            )));
        }
        if let Some((row_index, row)) = constraints
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != objective.len())
        {
            return Err(LpError::Dimension(format!(
                "constraint row {} has {} coefficients, expected {}",
                row_index,
                row.len(),
                objective.len()
            )));
        }

        Ok(LinearProgram {
            objective,
            constraints,
            rhs,
        })
    }

    pub fn num_variables(&self) -> usize {
        self.objective.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    pub fn constraints(&self) -> &[Vec<f64>] {
        &self.constraints
    }

    pub fn rhs(&self) -> &[f64] {
        &self.rhs
    }

    /// Value of the objective at `x`.
    pub fn objective_value(&self, x: &[f64]) -> f64 {
        self.objective.iter().zip(x.iter()).map(|(c, v)| c * v).sum()
    }

    /// Checks whether `x` satisfies every constraint (and non-negativity) up to `tolerance`.
    pub fn is_feasible(&self, x: &[f64], tolerance: f64) -> bool {
        if x.len() != self.num_variables() || x.iter().any(|v| *v < -tolerance) {
            return false;
        }
        self.constraints.iter().zip(self.rhs.iter()).all(|(row, b)| {
            let lhs: f64 = row.iter().zip(x.iter()).map(|(a, v)| a * v).sum();
            lhs <= b + tolerance
        })
    }
}
