//! Initial candidate generation

use crate::chromosome::Chromosome;
use crate::error::{PropagationError, PropagationResult};
use rand::seq::index;
use rand::Rng;

/// Build a random chromosome of exactly `length` genes drawn from `gene_set`.
///
/// Genes are sampled in chunks: each chunk takes up to `gene_set.len()`
/// distinct positions of the set in shuffled order, and chunks repeat until
/// the target length is reached. The set may therefore be smaller than
/// `length`, and no gene is favored within a chunk.
pub fn generate_parent<G, R>(
    length: usize,
    gene_set: &[G],
    rng: &mut R,
) -> PropagationResult<Chromosome<G>>
where
    G: Clone,
    R: Rng + ?Sized,
{
    if length > 0 && gene_set.is_empty() {
        return Err(PropagationError::EmptyGeneSet);
    }

    let mut genes = Vec::with_capacity(length);
    while genes.len() < length {
        let chunk = (length - genes.len()).min(gene_set.len());
        genes.extend(
            index::sample(rng, gene_set.len(), chunk)
                .into_iter()
                .map(|i| gene_set[i].clone()),
        );
    }

    Ok(Chromosome::new(genes))
}

/// Build a chromosome of `length` genes, each drawn independently from `gene_set`.
///
/// Unlike [`generate_parent`], every position is sampled with replacement, so
/// a gene may repeat anywhere in the result.
pub fn random_chromosome<G, R>(
    length: usize,
    gene_set: &[G],
    rng: &mut R,
) -> PropagationResult<Chromosome<G>>
where
    G: Clone,
    R: Rng + ?Sized,
{
    if length > 0 && gene_set.is_empty() {
        return Err(PropagationError::EmptyGeneSet);
    }

    let genes = (0..length)
        .map(|_| gene_set[rng.gen_range(0..gene_set.len())].clone())
        .collect();

    Ok(Chromosome::new(genes))
}
