//! Hill-climbing propagation engine

use super::record::PropagationRecord;
use super::strategy::{SearchStrategy, StrategyRecord};
use crate::fitness::Fitness;
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Random-mutation hill climber driven one step at a time.
///
/// Each call to [`iterate`](Propagation::iterate) produces one record. The
/// first record comes from `generate_parent`; later ones mutate the current
/// best. A trial replaces the best when it is not worse, but only a strictly
/// better trial is reported through `on_improvement`.
pub struct Propagation<S: SearchStrategy> {
    strategy: S,
    optimal_fitness: Option<S::Fitness>,
    iteration: u64,
    best: Option<Arc<StrategyRecord<S>>>,
    current: Option<Arc<StrategyRecord<S>>>,
}

impl<S: SearchStrategy> Propagation<S> {
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            optimal_fitness: None,
            iteration: 0,
            best: None,
            current: None,
        }
    }

    /// Stop once the best fitness is no longer less than `optimal_fitness`.
    pub fn with_optimal_fitness(mut self, optimal_fitness: S::Fitness) -> Self {
        self.optimal_fitness = Some(optimal_fitness);
        self
    }

    /// Number of completed iterations (0 before the first call)
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    pub fn best(&self) -> Option<&StrategyRecord<S>> {
        self.best.as_deref()
    }

    /// The most recent record, whether or not it was accepted.
    pub fn current(&self) -> Option<&StrategyRecord<S>> {
        self.current.as_deref()
    }

    pub fn optimal_fitness(&self) -> Option<&S::Fitness> {
        self.optimal_fitness.as_ref()
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn strategy_mut(&mut self) -> &mut S {
        &mut self.strategy
    }

    pub fn into_strategy(self) -> S {
        self.strategy
    }

    pub fn has_reached_optimal_fitness(&self) -> bool {
        match (&self.optimal_fitness, &self.best) {
            (Some(optimal), Some(best)) => !best.fitness.is_less_than(optimal),
            _ => false,
        }
    }

    /// Advance the search by one step.
    ///
    /// Returns `Ok(false)` without doing any work once the optimal fitness
    /// has been reached. A strategy error is returned as-is and leaves the
    /// engine state untouched.
    pub fn iterate(&mut self) -> Result<bool, S::Error> {
        if self.has_reached_optimal_fitness() {
            return Ok(false);
        }

        let best = match &self.best {
            Some(best) => Arc::clone(best),
            None => {
                self.seed()?;
                return Ok(true);
            }
        };

        let iteration = self.iteration + 1;
        let chromosome = self.strategy.mutate(&best.chromosome)?.stamped(iteration);
        let fitness = self.strategy.calculate_fitness(&chromosome)?;
        let current = Arc::new(PropagationRecord::new(chromosome, fitness, iteration));

        self.iteration = iteration;
        self.current = Some(Arc::clone(&current));
        trace!(iteration, fitness = ?current.fitness, "Evaluated trial");
        self.strategy.on_iteration(&current);

        if best.fitness.is_greater_than(&current.fitness) {
            return Ok(true);
        }

        if !current.fitness.is_greater_than(&best.fitness) {
            // Equal fitness: move across the plateau without reporting progress
            debug!(iteration, "Adopted equal-fitness trial");
            self.best = Some(current);
            return Ok(true);
        }

        debug!(iteration, fitness = ?current.fitness, "Improved best fitness");
        self.best = Some(Arc::clone(&current));
        self.strategy.on_improvement(&current);

        if self.has_reached_optimal_fitness() {
            info!(iteration, "Reached optimal fitness");
        }

        Ok(true)
    }

    fn seed(&mut self) -> Result<(), S::Error> {
        let chromosome = self.strategy.generate_parent()?.stamped(1);
        let fitness = self.strategy.calculate_fitness(&chromosome)?;
        let record = Arc::new(PropagationRecord::new(chromosome, fitness, 1));

        self.iteration = 1;
        self.current = Some(Arc::clone(&record));
        trace!(fitness = ?record.fitness, "Generated parent");
        self.strategy.on_iteration(&record);

        self.best = Some(Arc::clone(&record));
        self.strategy.on_improvement(&record);

        if self.has_reached_optimal_fitness() {
            info!("Parent already has optimal fitness");
        }

        Ok(())
    }
}
