use super::population::PopulationInitializer;
use super::sequence::SequenceGenerator;
use crate::engines::evaluation::AffinityMetric;
use crate::error::{ClonalgError, Result};
use crate::types::{Antibody, ReplacementOrder};
use rand::Rng;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Score every antibody at a random alignment within the antigen space
pub fn evaluate_affinity<M: AffinityMetric, R: Rng>(
    mut population: Vec<Antibody>,
    metric: &M,
    rng: &mut R,
) -> Result<Vec<Antibody>> {
    let antigen_space = metric.sequence_space_size();

    for antibody in population.iter_mut() {
        let length = antibody.sequence().len();
        if antigen_space < length {
            return Err(ClonalgError::Range {
                antigen_space,
                sequence_length: length,
            });
        }

        let offset = rng.gen_range(0..=antigen_space - length);
        let affinity = metric.score(antibody.sequence(), offset, length);
        antibody.set_affinity(affinity);
    }

    Ok(population)
}

/// Number of clones an antibody earns: `round(rate * length)`, halves to even
pub fn clone_count<M: AffinityMetric>(antibody: &Antibody, metric: &M) -> usize {
    let rate = metric.clone_rate(antibody.affinity(), antibody.length());
    (rate * antibody.length() as f64).round_ties_even() as usize
}

/// Proportional cloning. Clones keep the source's stale affinity until rescored.
pub fn clone_population<M: AffinityMetric>(antibodies: &[Antibody], metric: &M) -> Vec<Antibody> {
    let mut clones = Vec::new();

    for antibody in antibodies {
        let count = clone_count(antibody, metric);
        clones.extend(std::iter::repeat_with(|| antibody.clone()).take(count));
    }

    log::debug!("Cloned {} antibodies into {}", antibodies.len(), clones.len());
    clones
}

/// Overwrite `floor(length * rate)` positions of one antibody, drawn with
/// replacement from `[0, length)`. Returns the number of overwrites.
pub fn mutate_antibody<M: AffinityMetric, R: Rng>(
    antibody: &mut Antibody,
    metric: &M,
    generator: &SequenceGenerator,
    rng: &mut R,
) -> usize {
    let length = antibody.length();
    let rate = metric.mutation_rate(antibody.affinity(), length);
    let mutate_amount = (length as f64 * rate).floor() as usize;

    for _ in 0..mutate_amount {
        let position = rng.gen_range(0..length);
        antibody.sequence_mut()[position] = generator.generate(rng);
    }

    mutate_amount
}

/// Hypermutation over a whole population; neither length nor affinity is refreshed
pub fn hypermutate<M: AffinityMetric, R: Rng>(
    mut antibodies: Vec<Antibody>,
    metric: &M,
    generator: &SequenceGenerator,
    rng: &mut R,
) -> Vec<Antibody> {
    let overwrites: usize = antibodies
        .iter_mut()
        .map(|antibody| mutate_antibody(antibody, metric, generator, rng))
        .sum();

    log::debug!("Hypermutation applied {} overwrites", overwrites);
    antibodies
}

/// Top `k` of the metric's best-first ordering
pub fn select<M: AffinityMetric>(population: &[Antibody], k: usize, metric: &M) -> Vec<Antibody> {
    metric
        .order(population)
        .into_iter()
        .take(k)
        .map(|i| population[i].clone())
        .collect()
}

/// Indices of the `inferior_limit` worst antibodies under `order`
fn inferior_indices<M: AffinityMetric>(
    population: &[Antibody],
    inferior_limit: usize,
    order: ReplacementOrder,
    metric: &M,
) -> Vec<usize> {
    match order {
        ReplacementOrder::AscendingAffinity => {
            let mut indices: Vec<usize> = (0..population.len()).collect();
            indices.sort_by(|&a, &b| {
                population[a]
                    .affinity()
                    .partial_cmp(&population[b].affinity())
                    .unwrap_or(Ordering::Equal)
            });
            indices.truncate(inferior_limit);
            indices
        }
        ReplacementOrder::MetricWorst => {
            let ordered = metric.order(population);
            let keep = ordered.len().saturating_sub(inferior_limit);
            ordered[keep..].to_vec()
        }
    }
}

/// Drop the worst antibodies and backfill with fresh random ones
pub fn replace<M: AffinityMetric, R: Rng>(
    population: Vec<Antibody>,
    inferior_limit: usize,
    order: ReplacementOrder,
    metric: &M,
    initializer: &PopulationInitializer,
    rng: &mut R,
) -> Vec<Antibody> {
    if population.is_empty() || inferior_limit == 0 {
        return population;
    }

    let removed: HashSet<usize> = inferior_indices(&population, inferior_limit, order, metric)
        .into_iter()
        .collect();
    let replaced = removed.len();

    let mut survivors: Vec<Antibody> = population
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !removed.contains(i))
        .map(|(_, antibody)| antibody)
        .collect();

    survivors.extend(initializer.initialize(replaced, rng));
    log::debug!("Replaced {} inferior antibodies", replaced);
    survivors
}
