//! Mutation operators
//!
//! Every operator is pure: it reads the given chromosome and returns a new,
//! unstamped one. The input is never modified.

use crate::chromosome::Chromosome;
use crate::error::{PropagationError, PropagationResult};
use rand::seq::index;
use rand::Rng;

/// Replace the gene at one random position with a different gene from `gene_set`.
///
/// Two distinct entries of the set are drawn; the first is used unless it
/// equals the current gene, in which case the second is used. Exactly one
/// position changes as long as `gene_set` holds no duplicate genes.
pub fn replace_one_gene<G, R>(
    chromosome: &Chromosome<G>,
    gene_set: &[G],
    rng: &mut R,
) -> PropagationResult<Chromosome<G>>
where
    G: Clone + PartialEq,
    R: Rng + ?Sized,
{
    if chromosome.is_empty() {
        return Err(PropagationError::ChromosomeTooShort { required: 1, actual: 0 });
    }
    if gene_set.len() < 2 {
        return Err(PropagationError::GeneSetTooSmall {
            required: 2,
            actual: gene_set.len(),
        });
    }

    let position = rng.gen_range(0..chromosome.len());
    let picks = index::sample(rng, gene_set.len(), 2);
    let (new_gene, alternate) = (&gene_set[picks.index(0)], &gene_set[picks.index(1)]);

    let mut genes = chromosome.genes().to_vec();
    genes[position] = if genes[position] == *new_gene {
        alternate.clone()
    } else {
        new_gene.clone()
    };

    Ok(Chromosome::new(genes))
}

/// Exchange the genes at two distinct random positions.
///
/// When both positions hold equal genes the result equals the input.
pub fn swap_two_genes<G, R>(chromosome: &Chromosome<G>, rng: &mut R) -> PropagationResult<Chromosome<G>>
where
    G: Clone,
    R: Rng + ?Sized,
{
    swap_genes(chromosome, 1, rng)
}

/// Apply `times` two-position swaps one after another.
///
/// Each swap exchanges two genes of the working copy, so the result is always
/// a permutation of the input.
pub fn swap_genes<G, R>(chromosome: &Chromosome<G>, times: usize, rng: &mut R) -> PropagationResult<Chromosome<G>>
where
    G: Clone,
    R: Rng + ?Sized,
{
    if times > 0 && chromosome.len() < 2 {
        return Err(PropagationError::ChromosomeTooShort {
            required: 2,
            actual: chromosome.len(),
        });
    }

    let mut genes = chromosome.genes().to_vec();
    for _ in 0..times {
        let picks = index::sample(rng, genes.len(), 2);
        genes.swap(picks.index(0), picks.index(1));
    }

    Ok(Chromosome::new(genes))
}
