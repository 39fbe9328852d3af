//! The capability set the engine calls out to

use super::record::PropagationRecord;
use crate::chromosome::Chromosome;
use crate::error::{PropagationError, PropagationResult};
use crate::fitness::Fitness;

/// Record type produced for a given strategy
pub type StrategyRecord<S> =
    PropagationRecord<<S as SearchStrategy>::Gene, <S as SearchStrategy>::Fitness>;

/// Problem-specific behaviour plugged into a [`Propagation`](super::Propagation).
///
/// The engine never builds gene sets or scores candidates itself. Any error
/// returned here is handed back from `iterate()` untouched.
pub trait SearchStrategy {
    type Gene;
    type Fitness: Fitness;
    type Error;

    /// Produce the initial candidate. Called once, on the first iteration.
    fn generate_parent(&mut self) -> Result<Chromosome<Self::Gene>, Self::Error>;

    /// Derive a trial candidate from the current best.
    fn mutate(&mut self, chromosome: &Chromosome<Self::Gene>) -> Result<Chromosome<Self::Gene>, Self::Error>;

    fn calculate_fitness(&mut self, chromosome: &Chromosome<Self::Gene>) -> Result<Self::Fitness, Self::Error>;

    /// Called with every record produced, before any acceptance decision.
    fn on_iteration(&mut self, _record: &PropagationRecord<Self::Gene, Self::Fitness>) {}

    /// Called when the best record becomes strictly better, including the first record.
    fn on_improvement(&mut self, _record: &PropagationRecord<Self::Gene, Self::Fitness>) {}
}

type ParentFn<G> = Box<dyn FnMut() -> PropagationResult<Chromosome<G>>>;
type MutateFn<G> = Box<dyn FnMut(&Chromosome<G>) -> PropagationResult<Chromosome<G>>>;
type FitnessFn<G, F> = Box<dyn FnMut(&Chromosome<G>) -> F>;
type ObserverFn<G, F> = Box<dyn FnMut(&PropagationRecord<G, F>)>;

/// A strategy defined by closures.
pub struct SimpleStrategy<G, F> {
    generate_parent: ParentFn<G>,
    mutate: MutateFn<G>,
    calculate_fitness: FitnessFn<G, F>,
    on_iteration: Option<ObserverFn<G, F>>,
    on_improvement: Option<ObserverFn<G, F>>,
}

impl<G, F: Fitness> SimpleStrategy<G, F> {
    pub fn new<P, M, C>(generate_parent: P, mutate: M, calculate_fitness: C) -> Self
    where
        P: FnMut() -> PropagationResult<Chromosome<G>> + 'static,
        M: FnMut(&Chromosome<G>) -> PropagationResult<Chromosome<G>> + 'static,
        C: FnMut(&Chromosome<G>) -> F + 'static,
    {
        Self {
            generate_parent: Box::new(generate_parent),
            mutate: Box::new(mutate),
            calculate_fitness: Box::new(calculate_fitness),
            on_iteration: None,
            on_improvement: None,
        }
    }

    /// Observe every produced record
    pub fn observe_iterations(mut self, observer: impl FnMut(&PropagationRecord<G, F>) + 'static) -> Self {
        self.on_iteration = Some(Box::new(observer));
        self
    }

    /// Observe strict improvements
    pub fn observe_improvements(mut self, observer: impl FnMut(&PropagationRecord<G, F>) + 'static) -> Self {
        self.on_improvement = Some(Box::new(observer));
        self
    }
}

impl<G, F: Fitness> SearchStrategy for SimpleStrategy<G, F> {
    type Gene = G;
    type Fitness = F;
    type Error = PropagationError;

    fn generate_parent(&mut self) -> PropagationResult<Chromosome<G>> {
        (self.generate_parent)()
    }

    fn mutate(&mut self, chromosome: &Chromosome<G>) -> PropagationResult<Chromosome<G>> {
        (self.mutate)(chromosome)
    }

    fn calculate_fitness(&mut self, chromosome: &Chromosome<G>) -> PropagationResult<F> {
        Ok((self.calculate_fitness)(chromosome))
    }

    fn on_iteration(&mut self, record: &PropagationRecord<G, F>) {
        if let Some(observer) = self.on_iteration.as_mut() {
            observer(record);
        }
    }

    fn on_improvement(&mut self, record: &PropagationRecord<G, F>) {
        if let Some(observer) = self.on_improvement.as_mut() {
            observer(record);
        }
    }
}
