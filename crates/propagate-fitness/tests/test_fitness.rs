use propagate::{
    generate_parent, replace_one_gene, swap_two_genes, Chromosome, Fitness, NumberFitness, Propagation,
    PropagationError, PropagationResult, RunConfig, SearchStrategy, StopReason,
};
use propagate_fitness::{ArrayMatch, ArrayOrder, ArrayOrderFitness, TargetGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;

struct PhraseMatch {
    target: Chromosome<char>,
    gene_set: Vec<char>,
    matcher: ArrayMatch<char>,
    rng: StdRng,
    improvements: usize,
}

impl SearchStrategy for PhraseMatch {
    type Gene = char;
    type Fitness = NumberFitness;
    type Error = PropagationError;

    fn generate_parent(&mut self) -> PropagationResult<Chromosome<char>> {
        generate_parent(self.target.len(), &self.gene_set, &mut self.rng)
    }

    fn mutate(&mut self, chromosome: &Chromosome<char>) -> PropagationResult<Chromosome<char>> {
        replace_one_gene(chromosome, &self.gene_set, &mut self.rng)
    }

    fn calculate_fitness(&mut self, chromosome: &Chromosome<char>) -> PropagationResult<NumberFitness> {
        Ok(self.matcher.fitness(chromosome, &self.target))
    }

    fn on_improvement(&mut self, _record: &propagate::StrategyRecord<Self>) {
        self.improvements += 1;
    }
}

struct SortNumbers {
    numbers: Vec<u32>,
    order: ArrayOrder<u32>,
    rng: StdRng,
}

impl SearchStrategy for SortNumbers {
    type Gene = u32;
    type Fitness = ArrayOrderFitness;
    type Error = PropagationError;

    fn generate_parent(&mut self) -> PropagationResult<Chromosome<u32>> {
        generate_parent(self.numbers.len(), &self.numbers, &mut self.rng)
    }

    fn mutate(&mut self, chromosome: &Chromosome<u32>) -> PropagationResult<Chromosome<u32>> {
        swap_two_genes(chromosome, &mut self.rng)
    }

    fn calculate_fitness(&mut self, chromosome: &Chromosome<u32>) -> PropagationResult<ArrayOrderFitness> {
        Ok(self.order.fitness(chromosome))
    }
}

#[test]
fn test_phrase_match_converges() {
    let target = Chromosome::new("the quick brown fox".chars().collect());
    let matcher = ArrayMatch::new();
    let optimal = matcher.target_fitness(&target);

    let strategy = PhraseMatch {
        target,
        gene_set: " abcdefghijklmnopqrstuvwxyz".chars().collect(),
        matcher,
        rng: StdRng::seed_from_u64(2024),
        improvements: 0,
    };
    let mut propagation = Propagation::new(strategy).with_optimal_fitness(optimal);
    let summary = propagation.run(&RunConfig::with_max_iterations(200_000)).unwrap();

    assert_eq!(summary.stop_reason, StopReason::Converged);
    assert_eq!(propagation.best().unwrap().chromosome.to_string(), "the quick brown fox");

    // The parent counts once, then each strict improvement adds exactly one matching position
    assert!(propagation.strategy().improvements <= 20);
}

#[test]
fn test_sorting_by_swaps_keeps_numbers() {
    let numbers: Vec<u32> = (1..=12).collect();
    let order = ArrayOrder::new();
    let optimal = order.target_fitness(&Chromosome::new(numbers.clone()));

    let strategy = SortNumbers {
        numbers: numbers.clone(),
        order,
        rng: StdRng::seed_from_u64(99),
    };
    let mut propagation = Propagation::new(strategy).with_optimal_fitness(optimal);
    propagation.iterate().unwrap();
    let parent_fitness = propagation.best().unwrap().fitness;

    let summary = propagation.run(&RunConfig::with_max_iterations(20_000)).unwrap();
    assert_eq!(summary.stop_reason, StopReason::Converged);

    let best = propagation.best().unwrap();
    assert!(!best.fitness.is_less_than(&parent_fitness));
    assert!(best.fitness.is_equal_to(&optimal));
    assert_eq!(best.chromosome.genes(), numbers.as_slice());
}

#[test]
fn test_random_target_is_matched() {
    let mut rng = StdRng::seed_from_u64(31);
    let generator = TargetGenerator::new(" abcdefghijklmnopqrstuvwxyz".chars().collect());
    let target = generator.generate_target(25, &mut rng).unwrap();

    let strategy = PhraseMatch {
        target: target.chromosome.clone(),
        gene_set: generator.gene_set().to_vec(),
        matcher: ArrayMatch::new(),
        rng,
        improvements: 0,
    };
    let mut propagation = Propagation::new(strategy).with_optimal_fitness(target.fitness);
    let summary = propagation.run(&RunConfig::with_max_iterations(200_000)).unwrap();

    assert_eq!(summary.stop_reason, StopReason::Converged);
    assert_eq!(propagation.best().unwrap().chromosome.genes(), target.chromosome.genes());
}

#[test]
fn test_best_fitness_never_regresses() {
    let numbers: Vec<u32> = (0..30).collect();
    let strategy = SortNumbers {
        numbers,
        order: ArrayOrder::new(),
        rng: StdRng::seed_from_u64(7),
    };
    let mut propagation = Propagation::new(strategy);

    let mut previous: Option<ArrayOrderFitness> = None;
    for _ in 0..2_000 {
        propagation.iterate().unwrap();
        let best = propagation.best().unwrap().fitness;
        if let Some(previous) = previous {
            assert!(!best.is_less_than(&previous));
        }
        previous = Some(best);
    }
}
