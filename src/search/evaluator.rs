use crate::genome::Genome;
use crate::sim::{Simulator, Verdict};

/// Fixed simulation step, in simulated seconds.
pub const FIXED_TIME_STEP: f64 = 0.04;
/// Per-trial step budget.
pub const MAX_STEPS: usize = 75;
/// Score for a trial that never resolves within the step budget. Worse than
/// any realizable goal, post or miss score.
pub const TIMEOUT_SCORE: f64 = 1000.0;

/// Goal extents the normalized target coordinates scale against: 3.4 m right
/// of center, 2.15 m up (just under the bar).
pub const TARGET_SCALE_X: f64 = 3.4;
pub const TARGET_SCALE_Y: f64 = 2.15;

const GOAL_MULTIPLIER: f64 = 1.0;
const POST_HIT_MULTIPLIER: f64 = 5.0;
const MISS_MULTIPLIER: f64 = 20.0;

/// Runs one full simulated trial per genome and reduces the terminal outcome
/// to a scalar score. Lower is better; a goal scores its raw distance to the
/// target, a post hit 5x, a miss 20x.
pub struct FitnessEvaluator {
    target: [f64; 3],
}

impl FitnessEvaluator {
    /// `target_x` and `target_y` are normalized; they scale against the goal
    /// extents to give the target point on the goal plane.
    pub fn new(target_x: f64, target_y: f64) -> Self {
        Self {
            target: [target_x * TARGET_SCALE_X, target_y * TARGET_SCALE_Y, 0.0],
        }
    }

    pub fn target(&self) -> [f64; 3] {
        self.target
    }

    /// Run one trial from the shared baseline and score it.
    ///
    /// The reset also clears the simulator's post-hit latch, so a stale signal
    /// from the previous trial cannot leak into this one.
    pub fn evaluate<S: Simulator>(&self, sim: &mut S, genome: &Genome) -> f64 {
        sim.reset_to_baseline();
        sim.apply_impulse(genome.offset_x, genome.offset_y, genome.timing);

        for _ in 0..MAX_STEPS {
            let step = sim.advance_step(FIXED_TIME_STEP);
            if step.verdict != Verdict::Undecided || step.post_hit {
                let distance = self.distance_to_target(sim.current_position());
                return match step.verdict {
                    Verdict::Goal => distance * GOAL_MULTIPLIER,
                    _ if step.post_hit => distance * POST_HIT_MULTIPLIER,
                    _ => distance * MISS_MULTIPLIER,
                };
            }
        }

        TIMEOUT_SCORE
    }

    fn distance_to_target(&self, pos: [f64; 3]) -> f64 {
        let dx = pos[0] - self.target[0];
        let dy = pos[1] - self.target[1];
        let dz = pos[2] - self.target[2];
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}
