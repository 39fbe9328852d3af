use propagate::{Chromosome, NumberFitness};

type EqualityFn<G> = Box<dyn Fn(&G, &G) -> bool>;

/// Scores a candidate by the number of positions where it matches a target.
pub struct ArrayMatch<G> {
    is_equal: EqualityFn<G>,
}

impl<G: PartialEq + 'static> ArrayMatch<G> {
    /// Compare genes with `PartialEq`
    pub fn new() -> Self {
        Self::with_equality(|a: &G, b: &G| a == b)
    }
}

impl<G: PartialEq + 'static> Default for ArrayMatch<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> ArrayMatch<G> {
    /// Compare genes with a custom equality
    pub fn with_equality(is_equal: impl Fn(&G, &G) -> bool + 'static) -> Self {
        Self {
            is_equal: Box::new(is_equal),
        }
    }

    /// Count of positions whose genes are equal in both chromosomes.
    /// Positions missing from either side never match.
    pub fn fitness(&self, candidate: &Chromosome<G>, target: &Chromosome<G>) -> NumberFitness {
        let matches = candidate
            .genes()
            .iter()
            .zip(target.genes())
            .filter(|(a, b)| (self.is_equal)(a, b))
            .count();
        NumberFitness::new(matches as f64)
    }

    /// Fitness of a perfect match: the target's length
    pub fn target_fitness(&self, target: &Chromosome<G>) -> NumberFitness {
        NumberFitness::new(target.len() as f64)
    }
}
