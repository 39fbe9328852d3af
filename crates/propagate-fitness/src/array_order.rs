use propagate::{Chromosome, Fitness};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Distance between two genes, used to weigh out-of-order neighbours.
pub trait GeneDistance {
    fn distance(&self, other: &Self) -> f64;
}

macro_rules! impl_numeric_distance {
    ($($t:ty),*) => {
        $(
            impl GeneDistance for $t {
                fn distance(&self, other: &Self) -> f64 {
                    (*other as f64 - *self as f64).abs()
                }
            }
        )*
    };
}

impl_numeric_distance!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl GeneDistance for char {
    fn distance(&self, other: &Self) -> f64 {
        (*other as u32 as f64 - *self as u32 as f64).abs()
    }
}

// Text genes are measured by their first character; empty text counts as 0
fn leading_code(text: &str) -> f64 {
    text.chars().next().map_or(0.0, |c| c as u32 as f64)
}

impl GeneDistance for &str {
    fn distance(&self, other: &Self) -> f64 {
        (leading_code(other) - leading_code(self)).abs()
    }
}

impl GeneDistance for String {
    fn distance(&self, other: &Self) -> f64 {
        (leading_code(other) - leading_code(self)).abs()
    }
}

/// Raw order measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderValue {
    /// Genes in order with their predecessor, counting the first gene
    pub ordered: usize,
    /// Summed distance across out-of-order neighbours
    pub gap: f64,
}

/// Lexicographic fitness: more ordered genes win, ties go to the smaller gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrayOrderFitness {
    value: OrderValue,
}

impl ArrayOrderFitness {
    pub fn new(ordered: usize, gap: f64) -> Self {
        Self {
            value: OrderValue { ordered, gap },
        }
    }

    pub fn ordered(&self) -> usize {
        self.value.ordered
    }

    pub fn gap(&self) -> f64 {
        self.value.gap
    }
}

impl Fitness for ArrayOrderFitness {
    type Value = OrderValue;

    fn value(&self) -> &OrderValue {
        &self.value
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.value
            .ordered
            .cmp(&other.value.ordered)
            .then_with(|| other.value.gap.total_cmp(&self.value.gap))
    }
}

type OrderedFn<G> = Box<dyn Fn(&G, &G) -> bool>;
type GapFn<G> = Box<dyn Fn(&G, &G) -> f64>;

/// Scores how close a chromosome is to being ordered.
pub struct ArrayOrder<G> {
    is_ordered: OrderedFn<G>,
    gap: GapFn<G>,
}

impl<G: PartialOrd + GeneDistance + 'static> ArrayOrder<G> {
    /// Ascending order (`next >= previous`) with [`GeneDistance`] gaps
    pub fn new() -> Self {
        Self::with_rules(
            |previous: &G, next: &G| next >= previous,
            |previous: &G, next: &G| previous.distance(next),
        )
    }
}

impl<G: PartialOrd + GeneDistance + 'static> Default for ArrayOrder<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> ArrayOrder<G> {
    pub fn with_rules(
        is_ordered: impl Fn(&G, &G) -> bool + 'static,
        gap: impl Fn(&G, &G) -> f64 + 'static,
    ) -> Self {
        Self {
            is_ordered: Box::new(is_ordered),
            gap: Box::new(gap),
        }
    }

    /// Replace the ordering rule, called as `is_ordered(previous, next)`
    pub fn with_is_ordered(mut self, is_ordered: impl Fn(&G, &G) -> bool + 'static) -> Self {
        self.is_ordered = Box::new(is_ordered);
        self
    }

    /// Replace the gap measure, called as `gap(previous, next)`
    pub fn with_gap(mut self, gap: impl Fn(&G, &G) -> f64 + 'static) -> Self {
        self.gap = Box::new(gap);
        self
    }

    pub fn fitness(&self, chromosome: &Chromosome<G>) -> ArrayOrderFitness {
        if chromosome.is_empty() {
            return ArrayOrderFitness::new(0, 0.0);
        }

        let mut ordered = 1;
        let mut gap = 0.0;
        for pair in chromosome.genes().windows(2) {
            let (previous, next) = (&pair[0], &pair[1]);
            if (self.is_ordered)(previous, next) {
                ordered += 1;
            } else {
                gap += (self.gap)(previous, next);
            }
        }

        ArrayOrderFitness::new(ordered, gap)
    }

    /// Fitness of a fully ordered chromosome of the same length
    pub fn target_fitness(&self, target: &Chromosome<G>) -> ArrayOrderFitness {
        ArrayOrderFitness::new(target.len(), 0.0)
    }
}
