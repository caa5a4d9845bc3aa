use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Initial gene bounds. Experimentally tuned for the free-kick scenario;
/// mutation may drift genes outside of them.
pub const OFFSET_X_MIN: f64 = -0.2;
pub const OFFSET_X_MAX: f64 = 0.2;
pub const OFFSET_Y_MIN: f64 = 0.0;
pub const OFFSET_Y_MAX: f64 = 0.4;
pub const TIMING_MIN: f64 = 0.05;
pub const TIMING_MAX: f64 = 0.2;

/// A candidate launch vector: two positional offsets applied to the kick
/// impulse and a timing value. The genes carry no validation of their own;
/// ranges are enforced by the generator and the mutation step only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Genome {
    pub offset_x: f64,
    pub offset_y: f64,
    pub timing: f64,
}

impl Genome {
    pub fn new(offset_x: f64, offset_y: f64, timing: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            timing,
        }
    }

    /// Draw a genome uniformly within the initial gene bounds.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            offset_x: rng.gen_range(OFFSET_X_MIN..OFFSET_X_MAX),
            offset_y: rng.gen_range(OFFSET_Y_MIN..OFFSET_Y_MAX),
            timing: rng.gen_range(TIMING_MIN..TIMING_MAX),
        }
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.offset_x, self.offset_y, self.timing)
    }
}
