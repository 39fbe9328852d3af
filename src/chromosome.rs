//! Candidate solutions
//!
//! A [`Chromosome`] is an immutable, ordered sequence of genes tagged with the
//! iteration that produced it. Mutation never edits a chromosome in place;
//! every derivation allocates a new one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed-length sequence of genes representing one trial solution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chromosome<G> {
    genes: Vec<G>,
    iteration: u64,
}

impl<G> Chromosome<G> {
    /// Create an unstamped chromosome (iteration 0).
    pub fn new(genes: Vec<G>) -> Self {
        Self { genes, iteration: 0 }
    }

    pub fn with_iteration(genes: Vec<G>, iteration: u64) -> Self {
        Self { genes, iteration }
    }

    /// Re-tag with the iteration that produced this candidate. The genes are moved, not copied.
    pub fn stamped(self, iteration: u64) -> Self {
        Self {
            genes: self.genes,
            iteration,
        }
    }

    pub fn genes(&self) -> &[G] {
        &self.genes
    }

    /// Gene at `index`, or `None` past the end.
    pub fn gene(&self, index: usize) -> Option<&G> {
        self.genes.get(index)
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Iteration at which this chromosome was produced
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    pub fn into_genes(self) -> Vec<G> {
        self.genes
    }
}

impl<G> From<Vec<G>> for Chromosome<G> {
    fn from(genes: Vec<G>) -> Self {
        Chromosome::new(genes)
    }
}

impl<G: fmt::Display> fmt::Display for Chromosome<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for gene in &self.genes {
            write!(f, "{}", gene)?;
        }
        Ok(())
    }
}
