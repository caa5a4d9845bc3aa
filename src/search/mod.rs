pub mod controller;
pub mod evaluator;
pub mod operators;
pub mod progress;

pub use controller::{SearchController, SearchOutcome, SUCCESS_THRESHOLD};
pub use evaluator::FitnessEvaluator;
pub use progress::{ChannelProgress, ConsoleProgress, ProgressCallback, ProgressMessage};
