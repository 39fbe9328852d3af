//! Bounded run driver
//!
//! Calls [`Propagation::iterate`] in a loop until the search converges or one
//! of the configured limits is hit.

use crate::error::{PropagationError, PropagationResult};
use crate::propagation::{Propagation, SearchStrategy};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::info;

/// Limits for a bounded run. With no limits the run only ends on convergence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Maximum number of `iterate()` calls made by this run
    pub max_iterations: Option<u64>,
    /// Wall-clock budget in milliseconds
    pub time_limit_ms: Option<u64>,
}

impl RunConfig {
    pub fn with_max_iterations(max_iterations: u64) -> Self {
        Self {
            max_iterations: Some(max_iterations),
            ..Self::default()
        }
    }

    /// Sub-millisecond limits round up to 1 ms; limits past `u64::MAX` ms saturate.
    pub fn with_time_limit(time_limit: Duration) -> Self {
        let millis = time_limit.as_nanos().div_ceil(1_000_000);
        Self {
            time_limit_ms: Some(u64::try_from(millis).unwrap_or(u64::MAX)),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> PropagationResult<Self> {
        let config: RunConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PropagationResult<()> {
        if self.max_iterations == Some(0) {
            return Err(PropagationError::InvalidConfig(
                "max_iterations must be greater than zero".to_string(),
            ));
        }
        if self.time_limit_ms == Some(0) {
            return Err(PropagationError::InvalidConfig(
                "time_limit_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }
}

/// Why a bounded run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    Converged,
    IterationLimit,
    TimeLimit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Iterations performed by this run
    pub iterations: u64,
    pub elapsed: Duration,
    pub stop_reason: StopReason,
}

impl<S: SearchStrategy> Propagation<S> {
    /// Iterate until convergence or a limit in `config` is reached.
    pub fn run(&mut self, config: &RunConfig) -> Result<RunSummary, S::Error> {
        let started = Instant::now();
        let time_limit = config.time_limit();
        let mut iterations = 0u64;

        let stop_reason = loop {
            if self.has_reached_optimal_fitness() {
                break StopReason::Converged;
            }
            if config.max_iterations.is_some_and(|max| iterations >= max) {
                break StopReason::IterationLimit;
            }
            if time_limit.is_some_and(|limit| started.elapsed() >= limit) {
                break StopReason::TimeLimit;
            }
            if !self.iterate()? {
                break StopReason::Converged;
            }
            iterations += 1;
        };

        let elapsed = started.elapsed();
        info!(
            iterations,
            total_iterations = self.iteration(),
            ?stop_reason,
            "Run finished in {:?}",
            elapsed
        );

        Ok(RunSummary {
            iterations,
            elapsed,
            stop_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::Chromosome;
    use crate::fitness::{Fitness, NumberFitness};
    use crate::propagation::SimpleStrategy;

    fn incrementing() -> SimpleStrategy<u32, NumberFitness> {
        SimpleStrategy::new(
            || Ok(Chromosome::new(vec![0])),
            |c: &Chromosome<u32>| Ok(Chromosome::new(vec![c.genes()[0] + 1])),
            |c: &Chromosome<u32>| NumberFitness::new(c.genes()[0] as f64),
        )
    }

    #[test]
    fn test_run_until_converged() {
        let mut propagation = Propagation::new(incrementing()).with_optimal_fitness(NumberFitness::new(10.0));
        let summary = propagation.run(&RunConfig::default()).unwrap();

        assert_eq!(summary.stop_reason, StopReason::Converged);
        assert_eq!(summary.iterations, 11);
        assert_eq!(*propagation.best().unwrap().fitness.value(), 10.0);

        // Already converged: nothing left to do
        let again = propagation.run(&RunConfig::default()).unwrap();
        assert_eq!(again.iterations, 0);
        assert_eq!(again.stop_reason, StopReason::Converged);
    }

    #[test]
    fn test_run_stops_at_iteration_limit() {
        let mut propagation = Propagation::new(incrementing());
        let summary = propagation.run(&RunConfig::with_max_iterations(25)).unwrap();

        assert_eq!(summary.stop_reason, StopReason::IterationLimit);
        assert_eq!(summary.iterations, 25);
        assert_eq!(propagation.iteration(), 25);

        // Limits count per run, not in total
        propagation.run(&RunConfig::with_max_iterations(5)).unwrap();
        assert_eq!(propagation.iteration(), 30);
    }

    #[test]
    fn test_run_stops_at_time_limit() {
        let mut propagation = Propagation::new(incrementing());
        let summary = propagation.run(&RunConfig::with_time_limit(Duration::from_millis(5))).unwrap();

        assert_eq!(summary.stop_reason, StopReason::TimeLimit);
        assert!(summary.elapsed >= Duration::from_millis(5));
        assert_eq!(summary.iterations, propagation.iteration());
    }

    #[test]
    fn test_time_limit_rounds_up_to_whole_millis() {
        let config = RunConfig::with_time_limit(Duration::from_micros(500));
        assert_eq!(config.time_limit_ms, Some(1));
        assert!(config.validate().is_ok());

        let config = RunConfig::with_time_limit(Duration::from_micros(2_001));
        assert_eq!(config.time_limit_ms, Some(3));

        let config = RunConfig::with_time_limit(Duration::MAX);
        assert_eq!(config.time_limit_ms, Some(u64::MAX));

        let mut propagation = Propagation::new(incrementing());
        let summary = propagation
            .run(&RunConfig::with_time_limit(Duration::from_micros(500)))
            .unwrap();
        assert_eq!(summary.stop_reason, StopReason::TimeLimit);
        assert!(summary.iterations > 0);
        assert!(summary.elapsed >= Duration::from_millis(1));
    }

    #[test]
    fn test_config_from_json() {
        let config = RunConfig::from_json(r#"{ "max_iterations": 500 }"#).unwrap();
        assert_eq!(config.max_iterations, Some(500));
        assert_eq!(config.time_limit(), None);

        let config = RunConfig::from_json(r#"{ "time_limit_ms": 250 }"#).unwrap();
        assert_eq!(config.time_limit(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_config_rejects_zero_limits() {
        let result = RunConfig::from_json(r#"{ "max_iterations": 0 }"#);
        assert!(matches!(result, Err(PropagationError::InvalidConfig(_))));

        let result = RunConfig::from_json(r#"{ "time_limit_ms": 0 }"#);
        assert!(matches!(result, Err(PropagationError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        let result = RunConfig::from_json(r#"{ "population_size": 50 }"#);
        assert!(matches!(result, Err(PropagationError::Serialization(_))));
    }
}
