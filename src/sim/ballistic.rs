use super::{Simulator, StepResult, Verdict};

/// Goal mouth extents: 7.32 m wide, crossbar at 2.44 m.
const GOAL_HALF_WIDTH: f64 = 3.66;
const CROSSBAR_HEIGHT: f64 = 2.44;
/// Half-thickness of the post/crossbar collision band.
const POST_BAND: f64 = 0.1;

const GRAVITY: f64 = 9.81;
const DRIVE_SPEED: f64 = 22.0;
const SWERVE_GAIN: f64 = 30.0;
const LIFT_GAIN: f64 = 20.0;
const LOFT_GAIN: f64 = 40.0;
const POST_RESTITUTION: f64 = 0.4;

/// Minimal built-in free-kick simulator: a point ball under gravity driven at
/// the goal plane, with the mouth and post bands of a regulation goal. Enough
/// motion for the search loop to run end to end; not a physics engine.
///
/// The ball starts at `baseline` (z negative, goal plane at z = 0), and the
/// kick parameters bend, lift and loft the initial velocity.
pub struct BallisticSim {
    baseline: [f64; 3],
    pos: [f64; 3],
    vel: [f64; 3],
    live: bool,
    verdict: Verdict,
    post_hit: bool,
    auto_simulation: bool,
}

impl BallisticSim {
    pub fn new(baseline: [f64; 3]) -> Self {
        Self {
            baseline,
            pos: baseline,
            vel: [0.0; 3],
            live: false,
            verdict: Verdict::Undecided,
            post_hit: false,
            auto_simulation: true,
        }
    }

    pub fn auto_simulation(&self) -> bool {
        self.auto_simulation
    }

    fn classify_crossing(&mut self, cross: [f64; 3]) {
        let x = cross[0].abs();
        let y = cross[1];

        let hits_post = (GOAL_HALF_WIDTH - POST_BAND..=GOAL_HALF_WIDTH + POST_BAND).contains(&x)
            && y > 0.0
            && y <= CROSSBAR_HEIGHT + POST_BAND;
        let hits_bar = (CROSSBAR_HEIGHT - POST_BAND..=CROSSBAR_HEIGHT + POST_BAND).contains(&y)
            && x <= GOAL_HALF_WIDTH + POST_BAND;

        self.pos = cross;
        if hits_post || hits_bar {
            self.post_hit = true;
            self.vel[2] = -self.vel[2] * POST_RESTITUTION;
        } else if x < GOAL_HALF_WIDTH - POST_BAND && y > 0.0 && y < CROSSBAR_HEIGHT - POST_BAND {
            self.verdict = Verdict::Goal;
        } else {
            self.verdict = Verdict::Miss;
        }
    }
}

impl Default for BallisticSim {
    /// Ball spotted 11 m out, centered on the goal.
    fn default() -> Self {
        Self::new([0.0, 0.11, -11.0])
    }
}

impl Simulator for BallisticSim {
    fn reset_to_baseline(&mut self) {
        self.pos = self.baseline;
        self.vel = [0.0; 3];
        self.live = false;
        self.verdict = Verdict::Undecided;
        self.post_hit = false;
    }

    fn apply_impulse(&mut self, offset_x: f64, offset_y: f64, timing: f64) {
        self.vel = [
            offset_x * SWERVE_GAIN,
            offset_y * LIFT_GAIN + timing * LOFT_GAIN,
            DRIVE_SPEED,
        ];
        self.live = true;
    }

    fn advance_step(&mut self, dt: f64) -> StepResult {
        if !self.live || self.verdict != Verdict::Undecided {
            return StepResult {
                verdict: self.verdict,
                post_hit: self.post_hit,
            };
        }

        let prev = self.pos;
        for i in 0..3 {
            self.pos[i] += self.vel[i] * dt;
        }
        self.vel[1] -= GRAVITY * dt;

        if prev[2] < 0.0 && self.pos[2] >= 0.0 {
            // Interpolate back to the goal plane so the crossing point, not
            // the overshoot, is classified.
            let s = -prev[2] / (self.pos[2] - prev[2]);
            let cross = [
                prev[0] + s * (self.pos[0] - prev[0]),
                prev[1] + s * (self.pos[1] - prev[1]),
                0.0,
            ];
            self.classify_crossing(cross);
        } else if self.pos[1] < 0.0 {
            self.verdict = Verdict::Miss;
        }

        StepResult {
            verdict: self.verdict,
            post_hit: self.post_hit,
        }
    }

    fn current_position(&self) -> [f64; 3] {
        self.pos
    }

    fn set_auto_simulation(&mut self, enabled: bool) {
        self.auto_simulation = enabled;
    }
}
