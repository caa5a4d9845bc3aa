use crate::genome::Genome;
use rand::Rng;

/// Fixed mutation step for the positional genes.
pub const MUTATION_STEP_OFFSET: f64 = 0.02;
/// Fixed mutation step for the timing gene.
pub const MUTATION_STEP_TIMING: f64 = 0.003;

/// Offspring emitted per elite pair.
pub const OFFSPRING_PER_PAIR: usize = 6;

/// Draw an initial population of `n` random genomes.
pub fn random_population<R: Rng>(n: usize, rng: &mut R) -> Vec<Genome> {
    (0..n).map(|_| Genome::random(rng)).collect()
}

/// Sort genomes ascending by score (lower is better) and extract the elite.
///
/// The sort is stable, so equal scores keep their insertion order. Returns the
/// sorted genomes, their scores in the same order, and the top third of the
/// sorted genomes with their scores dropped.
pub fn select(genomes: Vec<Genome>, scores: Vec<f64>) -> (Vec<Genome>, Vec<f64>, Vec<Genome>) {
    assert_eq!(
        genomes.len(),
        scores.len(),
        "population and scores out of lock-step"
    );

    let mut paired: Vec<(Genome, f64)> = genomes.into_iter().zip(scores).collect();
    paired.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let elite_len = paired.len() / 3;
    let elite: Vec<Genome> = paired.iter().take(elite_len).map(|(g, _)| *g).collect();

    let (sorted, sorted_scores) = paired.into_iter().unzip();
    (sorted, sorted_scores, elite)
}

/// Rebuild a population from the elite subset.
///
/// Elite genomes are consumed in consecutive non-overlapping pairs `(a, b)`,
/// `a` being the fitter of the two; each pair emits six offspring weighted
/// toward `a`. Output length is `6 * (elite.len() / 2)`; an odd-sized elite
/// drops its unpaired genome rather than reading past the end.
pub fn recombine<R: Rng>(elite: &[Genome], rng: &mut R) -> Vec<Genome> {
    if elite.len() % 2 != 0 {
        log::warn!(
            "elite subset has odd size {}; dropping the unpaired genome",
            elite.len()
        );
    }

    let mut next = Vec::with_capacity(OFFSPRING_PER_PAIR * (elite.len() / 2));
    for pair in elite.chunks_exact(2) {
        let (a, b) = (pair[0], pair[1]);

        next.push(Genome::new(a.offset_x, b.offset_y, coin(a.timing, b.timing, rng)));
        next.push(Genome::new(b.offset_x, a.offset_y, coin(a.timing, b.timing, rng)));
        next.push(Genome::new(-a.offset_x, a.offset_y, coin(a.timing, b.timing, rng)));
        next.push(Genome::new(-a.offset_x, b.offset_y, coin(a.timing, b.timing, rng)));
        next.push(Genome::new(
            (a.offset_x + b.offset_x) / 2.0,
            (a.offset_y + b.offset_y) / 2.0,
            (a.timing + b.timing) / 2.0,
        ));
        next.push(a);
    }
    next
}

fn coin<R: Rng>(x: f64, y: f64, rng: &mut R) -> f64 {
    if rng.gen::<f64>() < 0.5 {
        x
    } else {
        y
    }
}

/// Perturb the population in place with `floor(len * mutation_ratio)`
/// independent events. Each event bumps one random gene of one random genome
/// by a fixed step in a random direction; no clamping afterwards.
pub fn mutate<R: Rng>(population: &mut [Genome], mutation_ratio: f64, rng: &mut R) {
    let events = (population.len() as f64 * mutation_ratio) as usize;
    for _ in 0..events {
        let idx = rng.gen_range(0..population.len());
        let sign = if rng.gen::<f64>() < 0.5 { 1.0 } else { -1.0 };
        let genome = &mut population[idx];
        match rng.gen_range(0..3) {
            0 => genome.offset_x += sign * MUTATION_STEP_OFFSET,
            1 => genome.offset_y += sign * MUTATION_STEP_OFFSET,
            _ => genome.timing += sign * MUTATION_STEP_TIMING,
        }
    }
}
