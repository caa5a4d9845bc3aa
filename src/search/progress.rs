/// Observer for search progress.
pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, best_score: f64);
    fn on_trial_evaluated(&mut self, trial: usize, total: usize);
}

/// No-op observer for embedding the search without reporting.
impl ProgressCallback for () {
    fn on_generation_start(&mut self, _generation: usize) {}
    fn on_generation_complete(&mut self, _generation: usize, _best_score: f64) {}
    fn on_trial_evaluated(&mut self, _trial: usize, _total: usize) {}
}

pub struct ConsoleProgress;

impl ProgressCallback for ConsoleProgress {
    fn on_generation_start(&mut self, generation: usize) {
        println!("Generation {} starting...", generation + 1);
    }

    fn on_generation_complete(&mut self, generation: usize, best_score: f64) {
        println!(
            "Generation {} complete. Best score: {:.4}",
            generation + 1,
            best_score
        );
    }

    fn on_trial_evaluated(&mut self, trial: usize, total: usize) {
        if trial % 10 == 0 || trial == total {
            println!("  Evaluated {}/{} trials", trial, total);
        }
    }
}

// For drivers that poll progress from another thread, e.g. a game loop.
pub struct ChannelProgress {
    sender: std::sync::mpsc::Sender<ProgressMessage>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressMessage {
    GenerationStart(usize),
    GenerationComplete { generation: usize, best_score: f64 },
    TrialEvaluated { trial: usize, total: usize },
}

impl ChannelProgress {
    pub fn new(sender: std::sync::mpsc::Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgress {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_generation_complete(&mut self, generation: usize, best_score: f64) {
        let _ = self.sender.send(ProgressMessage::GenerationComplete {
            generation,
            best_score,
        });
    }

    fn on_trial_evaluated(&mut self, trial: usize, total: usize) {
        let _ = self
            .sender
            .send(ProgressMessage::TrialEvaluated { trial, total });
    }
}
