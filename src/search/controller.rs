use crate::config::SearchConfig;
use crate::error::{KicktunerError, Result};
use crate::genome::Genome;
use crate::search::evaluator::FitnessEvaluator;
use crate::search::operators;
use crate::search::progress::ProgressCallback;
use crate::sim::{ManualMode, Simulator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

/// A generation whose best score falls under this distance has solved the
/// kick; the search stops without recombining.
pub const SUCCESS_THRESHOLD: f64 = 0.05;

/// Result of a finished search, queryable whether or not the threshold was
/// ever met. The genes are directly usable as kick parameters.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SearchOutcome {
    pub best: Genome,
    pub best_score: f64,
    pub success: bool,
    pub generations: usize,
}

/// Orchestrates the generation loop: initialize, evaluate, select, recombine,
/// mutate, until success or the generation budget runs out.
pub struct SearchController {
    config: SearchConfig,
    evaluator: FitnessEvaluator,
    rng: StdRng,
}

impl SearchController {
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let evaluator = FitnessEvaluator::new(config.target_x, config.target_y);
        Ok(Self {
            config,
            evaluator,
            rng,
        })
    }

    /// Run the search against `sim`. The simulator is held in manual mode for
    /// the whole run; automatic stepping is restored on every exit path.
    pub fn run<S, C>(&mut self, sim: &mut S, mut callback: C) -> Result<SearchOutcome>
    where
        S: Simulator,
        C: ProgressCallback,
    {
        let mut sim = ManualMode::acquire(sim);

        let mut genomes = operators::random_population(self.config.population_size, &mut self.rng);
        let mut best: Option<(Genome, f64)> = None;

        for generation in 0..self.config.max_generations {
            callback.on_generation_start(generation);

            let mut scores = Vec::with_capacity(genomes.len());
            for (i, genome) in genomes.iter().enumerate() {
                scores.push(self.evaluator.evaluate(&mut *sim, genome));
                callback.on_trial_evaluated(i + 1, self.config.population_size);
            }

            let (sorted, sorted_scores, elite) = operators::select(genomes, scores);
            let best_score = sorted_scores[0];
            best = Some((sorted[0], best_score));
            callback.on_generation_complete(generation, best_score);

            if best_score < SUCCESS_THRESHOLD {
                log::info!(
                    "target reached in generation {} (score {:.4})",
                    generation + 1,
                    best_score
                );
                return Ok(SearchOutcome {
                    best: sorted[0],
                    best_score,
                    success: true,
                    generations: generation + 1,
                });
            }

            if elite.len() < 2 {
                return Err(KicktunerError::InvalidPopulationState(format!(
                    "population of {} yields an elite of {}, too small to pair",
                    sorted.len(),
                    elite.len()
                )));
            }

            genomes = operators::recombine(&elite, &mut self.rng);
            operators::mutate(&mut genomes, self.config.mutation_ratio, &mut self.rng);
            log::debug!(
                "generation {} done, best {:.4}, next population {}",
                generation + 1,
                best_score,
                genomes.len()
            );
        }

        let (best, best_score) =
            best.expect("at least one generation ran; max_generations is validated > 0");
        Ok(SearchOutcome {
            best,
            best_score,
            success: false,
            generations: self.config.max_generations,
        })
    }
}
