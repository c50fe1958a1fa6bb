mod distribution;
mod mixed_strategy;

pub use distribution::StrategyDistribution;
pub use mixed_strategy::OptimalMixedStrategy;
