use crate::error::GameError;
use crate::vector::normalize_by_sum;

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use std::ops::Index;

const THRESHOLD_ACCURACY: f64 = 1e-10;

/// Solver noise below zero by at most this much is read as zero.
const NEGATIVE_NOISE: f64 = 1e-9;

/// Actions played with at most this probability are outside the support.
const EFFECTIVELY_ZERO: f64 = 1e-9;

/// `StrategyDistribution` is a probability vector over one player's actions.
///
/// The only way to obtain one is by normalizing non-negative weights (typically the raw
/// output of a linear program), so every instance is non-negative and sums to one.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyDistribution(Vec<f64>);

impl StrategyDistribution {
    /// Divides `weights` by their sum. Entries that are negative by no more than solver noise
    /// are clamped to zero first. Non-finite weights are rejected.
    pub fn normalize(weights: &[f64]) -> Result<StrategyDistribution, GameError> {
        if let Some(index) = weights
            .iter()
            .position(|w| !w.is_finite() || *w < -NEGATIVE_NOISE)
        {
            return Err(GameError::InvalidArgument(format!(
                "weight {} of action {} is not a finite non-negative number",
                weights[index], index
            )));
        }
        let clamped = weights.iter().map(|w| w.max(0.0)).collect::<Vec<f64>>();
        let distribution = StrategyDistribution(normalize_by_sum(&clamped)?);
        distribution.validate()?;
        Ok(distribution)
    }

    fn validate(&self) -> Result<(), GameError> {
        let total_mass = self.0.iter().sum::<f64>();
        match abs_diff_eq!(total_mass, 1.0, epsilon = THRESHOLD_ACCURACY) {
            true => Ok(()),
            false => Err(GameError::InvalidArgument(format!(
                "distribution sums to {}",
                total_mass
            ))),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Actions played with non-negligible probability.
    pub fn support(&self) -> Vec<usize> {
        (0..self.len())
            .filter(|action| self.0[*action] > EFFECTIVELY_ZERO)
            .collect()
    }

    pub fn is_fully_mixed(&self) -> bool {
        self.support().len() == self.len()
    }

    /// Draws an action with the probabilities of this distribution.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        match WeightedIndex::new(&self.0) {
            Ok(weighted_index) => weighted_index.sample(rng),
            // Normalized weights always have a positive total.
            Err(_) => self.support().first().cloned().unwrap_or(0),
        }
    }

    pub fn inner(&self) -> &[f64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Index<usize> for StrategyDistribution {
    type Output = f64;

    fn index(&self, action: usize) -> &f64 {
        &self.0[action]
    }
}
