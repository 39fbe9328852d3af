use crate::array_match::ArrayMatch;
use propagate::{random_chromosome, NumberFitness, PropagationRecord, PropagationResult};
use rand::Rng;

/// Builds random match targets over a fixed gene set.
pub struct TargetGenerator<G> {
    gene_set: Vec<G>,
    matcher: ArrayMatch<G>,
}

impl<G: Clone + PartialEq + 'static> TargetGenerator<G> {
    pub fn new(gene_set: Vec<G>) -> Self {
        Self::with_matcher(gene_set, ArrayMatch::new())
    }
}

impl<G: Clone> TargetGenerator<G> {
    pub fn with_matcher(gene_set: Vec<G>, matcher: ArrayMatch<G>) -> Self {
        Self { gene_set, matcher }
    }

    pub fn gene_set(&self) -> &[G] {
        &self.gene_set
    }

    pub fn matcher(&self) -> &ArrayMatch<G> {
        &self.matcher
    }

    /// A random target of `length` genes, each drawn independently, paired
    /// with the fitness a perfect match scores. The record is unstamped.
    pub fn generate_target<R: Rng + ?Sized>(
        &self,
        length: usize,
        rng: &mut R,
    ) -> PropagationResult<PropagationRecord<G, NumberFitness>> {
        let target = random_chromosome(length, &self.gene_set, rng)?;
        let fitness = self.matcher.target_fitness(&target);
        Ok(PropagationRecord::new(target, fitness, 0))
    }
}
