pub mod ballistic;

pub use ballistic::BallisticSim;

/// Terminal classification of a trial as reported by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Undecided,
    Goal,
    Miss,
}

/// Result of advancing the simulation by one fixed step. `post_hit` is
/// latched from the moment the ball clips a post until the next reset, so a
/// caller polling step by step cannot miss it.
#[derive(Debug, Clone, Copy)]
pub struct StepResult {
    pub verdict: Verdict,
    pub post_hit: bool,
}

/// The external physics collaborator. Holds one mutable world state; trials
/// must run to completion (reset, impulse, step until terminal) one at a time.
pub trait Simulator {
    /// Force the world back to the fixed baseline. Clears the post-hit latch.
    fn reset_to_baseline(&mut self);

    /// Launch the ball under the given kick parameters.
    fn apply_impulse(&mut self, offset_x: f64, offset_y: f64, timing: f64);

    /// Advance the world by one fixed time step.
    fn advance_step(&mut self, dt: f64) -> StepResult;

    fn current_position(&self) -> [f64; 3];

    /// Toggle the engine's automatic stepping. Use [`ManualMode`] instead of
    /// calling this directly.
    fn set_auto_simulation(&mut self, enabled: bool);
}

/// Scoped manual-simulation mode: automatic stepping is disabled while the
/// guard is alive and restored when it drops, on every exit path.
pub struct ManualMode<'a, S: Simulator> {
    sim: &'a mut S,
}

impl<'a, S: Simulator> ManualMode<'a, S> {
    pub fn acquire(sim: &'a mut S) -> Self {
        sim.set_auto_simulation(false);
        Self { sim }
    }
}

impl<S: Simulator> std::ops::Deref for ManualMode<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.sim
    }
}

impl<S: Simulator> std::ops::DerefMut for ManualMode<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.sim
    }
}

impl<S: Simulator> Drop for ManualMode<'_, S> {
    fn drop(&mut self) {
        self.sim.set_auto_simulation(true);
    }
}
