use kicktuner::search::evaluator::TIMEOUT_SCORE;
use kicktuner::search::{ChannelProgress, ProgressMessage};
use kicktuner::sim::BallisticSim;
use kicktuner::{SearchConfig, SearchController, Simulator, StepResult, Verdict};

/// Scripted trial outcome: a verdict resolved on the first step, with the
/// ball placed `distance` away from an origin target.
#[derive(Debug, Clone, Copy)]
struct Trial {
    verdict: Verdict,
    post_hit: bool,
    distance: f64,
}

impl Trial {
    fn goal(distance: f64) -> Self {
        Self {
            verdict: Verdict::Goal,
            post_hit: false,
            distance,
        }
    }

    fn miss(distance: f64) -> Self {
        Self {
            verdict: Verdict::Miss,
            post_hit: false,
            distance,
        }
    }
}

/// Deterministic stub collaborator. Trials are served in kick order, cycling
/// through the script each generation.
struct ScriptedSim {
    script: Vec<Trial>,
    kicks: Vec<(f64, f64, f64)>,
    resets: usize,
    auto_simulation: bool,
    stepped_while_auto: bool,
}

impl ScriptedSim {
    fn new(script: Vec<Trial>) -> Self {
        Self {
            script,
            kicks: Vec::new(),
            resets: 0,
            auto_simulation: true,
            stepped_while_auto: false,
        }
    }

    fn current_trial(&self) -> Trial {
        self.script[(self.kicks.len() - 1) % self.script.len()]
    }
}

impl Simulator for ScriptedSim {
    fn reset_to_baseline(&mut self) {
        self.resets += 1;
    }

    fn apply_impulse(&mut self, offset_x: f64, offset_y: f64, timing: f64) {
        self.kicks.push((offset_x, offset_y, timing));
    }

    fn advance_step(&mut self, _dt: f64) -> StepResult {
        if self.auto_simulation {
            self.stepped_while_auto = true;
        }
        let trial = self.current_trial();
        StepResult {
            verdict: trial.verdict,
            post_hit: trial.post_hit,
        }
    }

    fn current_position(&self) -> [f64; 3] {
        [self.current_trial().distance, 0.0, 0.0]
    }

    fn set_auto_simulation(&mut self, enabled: bool) {
        self.auto_simulation = enabled;
    }
}

fn config(population_size: usize, max_generations: usize) -> SearchConfig {
    SearchConfig {
        population_size,
        max_generations,
        mutation_ratio: 0.5,
        target_x: 0.0,
        target_y: 0.0,
        seed: Some(42),
    }
}

#[test]
fn goal_scenario_succeeds_in_the_first_generation() {
    let mut sim = ScriptedSim::new(vec![
        Trial::goal(0.01),
        Trial::goal(0.3),
        Trial::goal(0.5),
        Trial::goal(0.2),
        Trial::goal(0.9),
        Trial::goal(0.05),
    ]);

    let mut controller = SearchController::new(config(6, 1)).unwrap();
    let outcome = controller.run(&mut sim, ()).unwrap();

    assert!(outcome.success);
    assert_eq!(outcome.best_score, 0.01);
    assert_eq!(outcome.generations, 1);

    // The winning genome is the one that produced distance 0.01: trial 0.
    let (x, y, t) = sim.kicks[0];
    assert_eq!((outcome.best.offset_x, outcome.best.offset_y, outcome.best.timing), (x, y, t));
}

#[test]
fn all_miss_scenario_exhausts_the_budget() {
    let mut sim = ScriptedSim::new(vec![Trial::miss(1.0); 6]);

    let mut controller = SearchController::new(config(6, 1)).unwrap();
    let outcome = controller.run(&mut sim, ()).unwrap();

    assert!(!outcome.success);
    assert_eq!(outcome.best_score, 20.0);
    assert_eq!(outcome.generations, 1);
    assert_eq!(sim.resets, 6);
}

#[test]
fn population_size_is_preserved_across_generations() {
    let mut sim = ScriptedSim::new(vec![Trial::miss(1.0); 6]);

    let mut controller = SearchController::new(config(6, 3)).unwrap();
    let outcome = controller.run(&mut sim, ()).unwrap();

    assert!(!outcome.success);
    assert_eq!(outcome.generations, 3);
    // One reset per trial: three full generations of six.
    assert_eq!(sim.resets, 18);
}

#[test]
fn success_stops_before_recombination() {
    let mut sim = ScriptedSim::new(vec![Trial::goal(0.01); 6]);

    let mut controller = SearchController::new(config(6, 5)).unwrap();
    let outcome = controller.run(&mut sim, ()).unwrap();

    assert!(outcome.success);
    assert_eq!(outcome.generations, 1);
    // Only the first generation was ever evaluated.
    assert_eq!(sim.resets, 6);
}

#[test]
fn post_hits_rank_between_goals_and_misses() {
    let mut sim = ScriptedSim::new(vec![
        Trial::miss(1.0),
        Trial {
            verdict: Verdict::Undecided,
            post_hit: true,
            distance: 1.0,
        },
        Trial::goal(1.0),
        Trial::miss(1.0),
        Trial::miss(1.0),
        Trial::miss(1.0),
    ]);

    let mut controller = SearchController::new(config(6, 1)).unwrap();
    let outcome = controller.run(&mut sim, ()).unwrap();

    // Best is the goal at raw distance 1.0, ahead of the 5.0 post hit.
    assert_eq!(outcome.best_score, 1.0);
    let (x, y, t) = sim.kicks[2];
    assert_eq!((outcome.best.offset_x, outcome.best.offset_y, outcome.best.timing), (x, y, t));
}

#[test]
fn manual_mode_is_restored_after_success() {
    let mut sim = ScriptedSim::new(vec![Trial::goal(0.01); 6]);
    let mut controller = SearchController::new(config(6, 5)).unwrap();
    controller.run(&mut sim, ()).unwrap();

    assert!(sim.auto_simulation);
    assert!(!sim.stepped_while_auto);
}

#[test]
fn manual_mode_is_restored_after_budget_exhaustion() {
    let mut sim = ScriptedSim::new(vec![Trial::miss(1.0); 6]);
    let mut controller = SearchController::new(config(6, 2)).unwrap();
    controller.run(&mut sim, ()).unwrap();

    assert!(sim.auto_simulation);
    assert!(!sim.stepped_while_auto);
}

#[test]
fn unresolved_trials_score_the_timeout_sentinel() {
    let mut sim = ScriptedSim::new(vec![
        Trial {
            verdict: Verdict::Undecided,
            post_hit: false,
            distance: 123.0,
        };
        6
    ]);

    let mut controller = SearchController::new(config(6, 1)).unwrap();
    let outcome = controller.run(&mut sim, ()).unwrap();

    assert!(!outcome.success);
    assert_eq!(outcome.best_score, TIMEOUT_SCORE);
}

#[test]
fn fixed_seed_reproduces_the_search() {
    let run = || {
        let mut sim = ScriptedSim::new(vec![Trial::miss(1.0); 6]);
        let mut controller = SearchController::new(SearchConfig {
            seed: Some(99),
            ..config(6, 4)
        })
        .unwrap();
        let outcome = controller.run(&mut sim, ()).unwrap();
        (outcome.best, sim.kicks)
    };

    let (best_a, kicks_a) = run();
    let (best_b, kicks_b) = run();
    assert_eq!(best_a, best_b);
    assert_eq!(kicks_a, kicks_b);
}

#[test]
fn invalid_configuration_never_starts_a_search() {
    let bad = SearchConfig {
        population_size: 10,
        ..SearchConfig::default()
    };
    assert!(SearchController::new(bad).is_err());
}

#[test]
fn channel_progress_reports_each_generation() {
    let (tx, rx) = std::sync::mpsc::channel();

    let mut sim = ScriptedSim::new(vec![Trial::miss(1.0); 6]);
    let mut controller = SearchController::new(config(6, 2)).unwrap();
    controller.run(&mut sim, ChannelProgress::new(tx)).unwrap();

    let messages: Vec<ProgressMessage> = rx.try_iter().collect();
    assert_eq!(messages[0], ProgressMessage::GenerationStart(0));
    let trials = messages
        .iter()
        .filter(|m| matches!(m, ProgressMessage::TrialEvaluated { .. }))
        .count();
    assert_eq!(trials, 12);
    assert!(messages.contains(&ProgressMessage::GenerationComplete {
        generation: 1,
        best_score: 20.0,
    }));
}

#[test]
fn search_runs_end_to_end_against_the_ballistic_sim() {
    let config = SearchConfig {
        population_size: 24,
        max_generations: 50,
        mutation_ratio: 0.5,
        target_x: 0.3,
        target_y: 0.4,
        seed: Some(7),
    };

    let mut sim = BallisticSim::default();
    let mut controller = SearchController::new(config).unwrap();
    let outcome = controller.run(&mut sim, ()).unwrap();

    // A goal-class result is expected well before the budget runs out; any
    // goal scores under 5.0 against this target.
    assert!(outcome.best_score < 5.0);
    assert!(outcome.generations <= 50);
    assert!(sim.auto_simulation());
}
