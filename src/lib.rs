pub mod config;
pub mod error;
pub mod genome;
pub mod search;
pub mod sim;

pub use config::SearchConfig;
pub use error::{KicktunerError, Result};
pub use genome::Genome;
pub use search::{SearchController, SearchOutcome};
pub use sim::{BallisticSim, ManualMode, Simulator, StepResult, Verdict};
