//! Propagate
//!
//! Random-mutation hill climbing over fixed-length gene sequences.
//!
//! # Components
//!
//! - [`Chromosome`]: an immutable sequence of genes
//! - [`Fitness`]: a comparable measurement, with [`NumberFitness`] as the numeric variant
//! - [`generate_parent`]: random initial candidates sampled in shuffled chunks
//! - [`random_chromosome`]: random candidates with every gene drawn independently
//! - [`replace_one_gene`], [`swap_two_genes`], [`swap_genes`]: pure mutation operators
//! - [`Propagation`]: the engine that mutates the best candidate, scores the
//!   trial and keeps it when it is not worse
//! - [`RunConfig`]: limits for driving the engine in a bounded loop
//!
//! ## Example Usage
//!
//! ```rust
//! use propagate::{generate_parent, replace_one_gene, Chromosome, NumberFitness};
//! use propagate::{Propagation, RunConfig, SimpleStrategy};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let target: Vec<char> = "hello world".chars().collect();
//! let gene_set: Vec<char> = " abcdefghijklmnopqrstuvwxyz".chars().collect();
//! let rng = Rc::new(RefCell::new(StdRng::seed_from_u64(42)));
//!
//! let strategy = SimpleStrategy::new(
//!     {
//!         let (rng, gene_set) = (rng.clone(), gene_set.clone());
//!         move || generate_parent(11, &gene_set, &mut *rng.borrow_mut())
//!     },
//!     {
//!         let (rng, gene_set) = (rng.clone(), gene_set.clone());
//!         move |c: &Chromosome<char>| replace_one_gene(c, &gene_set, &mut *rng.borrow_mut())
//!     },
//!     {
//!         let target = target.clone();
//!         move |c: &Chromosome<char>| {
//!             NumberFitness::new(c.genes().iter().zip(&target).filter(|(a, b)| a == b).count() as f64)
//!         }
//!     },
//! );
//!
//! let mut propagation = Propagation::new(strategy).with_optimal_fitness(NumberFitness::new(11.0));
//! propagation.run(&RunConfig::with_max_iterations(100_000)).unwrap();
//!
//! assert!(propagation.has_reached_optimal_fitness());
//! assert_eq!(propagation.best().unwrap().chromosome.to_string(), "hello world");
//! ```

#![warn(clippy::all)]

pub mod chromosome;
pub mod error;
pub mod fitness;
pub mod generation;
pub mod mutation;
pub mod propagation;
pub mod runner;

// Re-export main types for convenience
pub use chromosome::Chromosome;
pub use error::{PropagationError, PropagationResult};
pub use fitness::{Fitness, NumberFitness, Polarity};
pub use generation::{generate_parent, random_chromosome};
pub use mutation::{replace_one_gene, swap_genes, swap_two_genes};
pub use propagation::{Propagation, PropagationRecord, SearchStrategy, SimpleStrategy, StrategyRecord};
pub use runner::{RunConfig, RunSummary, StopReason};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

/// Announce the engine on the active tracing subscriber
pub fn init() {
    tracing::info!("Propagate v{} initialized", VERSION);
}
