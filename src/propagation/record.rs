use crate::chromosome::Chromosome;
use serde::{Deserialize, Serialize};

/// One evaluated candidate: the chromosome, its fitness, and the iteration that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropagationRecord<G, F> {
    pub chromosome: Chromosome<G>,
    pub fitness: F,
    pub iteration: u64,
}

impl<G, F> PropagationRecord<G, F> {
    pub fn new(chromosome: Chromosome<G>, fitness: F, iteration: u64) -> Self {
        Self {
            chromosome,
            fitness,
            iteration,
        }
    }
}
