use thiserror::Error;

/// Reasons a linear program could not be solved.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LpError {
    #[error("malformed linear program: {0}")]
    Dimension(String),

    #[error("linear program is infeasible")]
    Infeasible,

    #[error("linear program is unbounded")]
    Unbounded,

    #[error("solver backend failed: {0}")]
    Backend(String),
}
