use crate::game::PayoffMatrix;
use crate::vector::unity_vector;

use optimizers::{LinearProgram, LpError};

/// ===============================================================================================
/// Both programs assume a strictly positive payoff matrix A (m x n), so that the game value v is
/// positive as well. Writing x = p / v and y = q / v for the mixed strategies p and q, we get
///
///  Player1: min 1'x  s.t.  A'x >= 1,  x >= 0,     v = 1 / (1'x)
///  Player2: max 1'y  s.t.  Ay <= 1,   y >= 0,     v = 1 / (1'y)
///
/// which are duals of each other. Both are brought into the standard form of `LinearProgram`
/// (minimize, `<=` constraints), followed by an explicit non-negativity block -Ix <= 0.
/// ===============================================================================================
///
/// Player1's program has m variables (one per row) and n + m constraints:
///
///  objective:  1 (m times)
///  rows [0, n):    -A'x <= -1
///  rows [n, n+m):  -Ix  <= 0
pub fn player1_program(matrix: &PayoffMatrix) -> Result<LinearProgram, LpError> {
    let num_rows = matrix.num_rows();
    let num_cols = matrix.num_cols();

    let objective = unity_vector(num_rows);

    let mut constraints = Vec::with_capacity(num_cols + num_rows);
    constraints.extend(
        matrix
            .transpose()
            .entries()
            .iter()
            .map(|column| column.iter().map(|x| -x).collect::<Vec<f64>>()),
    );
    constraints.extend(non_negativity_rows(num_rows));

    let mut rhs = vec![-1.0; num_cols];
    rhs.extend(vec![0.0; num_rows]);

    LinearProgram::new(objective, constraints, rhs)
}

/// Player2's program has n variables (one per column) and m + n constraints:
///
///  objective:  -1 (n times)
///  rows [0, m):    Ay  <= 1
///  rows [m, m+n):  -Iy <= 0
pub fn player2_program(matrix: &PayoffMatrix) -> Result<LinearProgram, LpError> {
    let num_rows = matrix.num_rows();
    let num_cols = matrix.num_cols();

    let objective = unity_vector(num_cols)
        .into_iter()
        .map(|x| -x)
        .collect::<Vec<f64>>();

    let mut constraints = Vec::with_capacity(num_rows + num_cols);
    constraints.extend(matrix.entries().iter().cloned());
    constraints.extend(non_negativity_rows(num_cols));

    let mut rhs = unity_vector(num_rows);
    rhs.extend(vec![0.0; num_cols]);

    LinearProgram::new(objective, constraints, rhs)
}

fn non_negativity_rows(num_variables: usize) -> impl Iterator<Item = Vec<f64>> {
    (0..num_variables).map(move |i| {
        (0..num_variables)
            .map(|k| if i == k { -1.0 } else { 0.0 })
            .collect()
    })
}
