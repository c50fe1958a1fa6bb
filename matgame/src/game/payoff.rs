use crate::error::GameError;

use itertools::Itertools;
use rand::Rng;

use std::fmt;
use std::io::{BufRead, BufReader, Read};

/// Payoffs to `Player1` (the row player). Rows are indexed by Player1's actions, columns by
/// Player2's actions.
///
/// Always non-empty, rectangular and finite. Transformations return a new matrix and never
/// touch `self`.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffMatrix {
    entries: Vec<Vec<f64>>,
}

impl PayoffMatrix {
    pub fn new(entries: Vec<Vec<f64>>) -> Result<PayoffMatrix, GameError> {
        let num_cols = match entries.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => {
                return Err(GameError::InvalidArgument(String::from(
                    "payoff matrix must have at least one row and one column",
                )))
            }
        };
        if let Some(row_index) = entries.iter().position(|row| row.len() != num_cols) {
            return Err(GameError::InvalidArgument(format!(
                "payoff matrix is not rectangular: row {} has {} entries, expected {}",
                row_index,
                entries[row_index].len(),
                num_cols
            )));
        }
        if entries.iter().flatten().any(|x| !x.is_finite()) {
            return Err(GameError::InvalidArgument(String::from(
                "payoff matrix entries must be finite",
            )));
        }
        Ok(PayoffMatrix { entries })
    }

    /// Reads whitespace separated payoffs, one row per line. Blank lines are skipped.
    pub fn read<R: Read>(reader: R) -> Result<PayoffMatrix, GameError> {
        let mut rows = vec![];
        for (line_index, line) in BufReader::new(reader).lines().enumerate() {
            let row = line?
                .split_whitespace()
                .map(|token| {
                    token.parse::<f64>().map_err(|err| {
                        GameError::InvalidArgument(format!(
                            "line {}: cannot parse {:?}: {}",
                            line_index + 1,
                            token,
                            err
                        ))
                    })
                })
                .collect::<Result<Vec<f64>, GameError>>()?;
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Self::new(rows)
    }

    /// Random game with payoffs drawn uniformly from [-1, 1).
    pub fn from_rng<R: Rng>(
        num_rows: usize,
        num_cols: usize,
        rng: &mut R,
    ) -> Result<PayoffMatrix, GameError> {
        let entries: Vec<Vec<f64>> = (0..num_rows)
            .map(|_| {
                (0..num_cols)
                    .map(|_| rng.gen_range(-1.0f64, 1.0f64))
                    .collect::<Vec<f64>>()
            })
            .collect();
        Self::new(entries)
    }

    pub fn num_rows(&self) -> usize {
        self.entries.len()
    }

    pub fn num_cols(&self) -> usize {
        self.entries[0].len()
    }

    pub fn entries(&self) -> &[Vec<f64>] {
        &self.entries
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.entries[row][col]
    }

    /// Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.entries[row]
    }

    /// Panics if `col` is out of range.
    pub fn column(&self, col: usize) -> Vec<f64> {
        self.entries.iter().map(|row| row[col]).collect()
    }

    pub fn min_element(&self) -> f64 {
        self.entries
            .iter()
            .flatten()
            .cloned()
            .fold(std::f64::INFINITY, f64::min)
    }

    pub fn transpose(&self) -> PayoffMatrix {
        PayoffMatrix {
            entries: (0..self.num_cols()).map(|col| self.column(col)).collect(),
        }
    }

    /// Copy of the matrix with `delta` added to every entry.
    pub fn shifted(&self, delta: f64) -> PayoffMatrix {
        self.map(|x| x + delta)
    }

    pub fn negated(&self) -> PayoffMatrix {
        self.map(|x| -x)
    }

    fn map<F: Fn(f64) -> f64>(&self, f: F) -> PayoffMatrix {
        PayoffMatrix {
            entries: self
                .entries
                .iter()
                .map(|row| row.iter().map(|x| f(*x)).collect())
                .collect(),
        }
    }
}

impl fmt::Display for PayoffMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.entries.iter() {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}
