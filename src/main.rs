use anyhow::Context;
use kicktuner::search::ConsoleProgress;
use kicktuner::sim::BallisticSim;
use kicktuner::{SearchConfig, SearchController};
use std::env;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1).map(|s| s.as_str()) {
        Some(path) if path.ends_with(".toml") => {
            SearchConfig::load_from_file(path).with_context(|| format!("loading {}", path))?
        }
        // The legacy format is five plain lines: population size, max
        // generations, mutation ratio, target x, target y.
        Some(path) => {
            SearchConfig::load_legacy_file(path).with_context(|| format!("loading {}", path))?
        }
        None => SearchConfig::default(),
    };

    println!("Configuration:");
    println!("  Population size: {}", config.population_size);
    println!("  Max generations: {}", config.max_generations);
    println!("  Mutation ratio: {}", config.mutation_ratio);
    println!(
        "  Target (normalized): ({}, {})",
        config.target_x, config.target_y
    );
    if let Some(seed) = config.seed {
        println!("  Seed: {}", seed);
    }
    println!();

    let mut sim = BallisticSim::default();
    let mut controller = SearchController::new(config)?;
    let outcome = controller.run(&mut sim, ConsoleProgress)?;

    if outcome.success {
        println!("\nTarget reached in {} generation(s).", outcome.generations);
    } else {
        println!(
            "\nBudget of {} generation(s) exhausted; best kick so far:",
            outcome.generations
        );
    }
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}
