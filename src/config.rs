use crate::error::{KicktunerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Search parameters, loaded once before a run. All-or-nothing: a config that
/// fails validation never reaches the controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub population_size: usize,
    pub max_generations: usize,
    pub mutation_ratio: f64,
    /// Normalized target coordinates; scaled by the goal extents at evaluation.
    pub target_x: f64,
    pub target_y: f64,
    /// Fixed seed for reproducible runs; entropy-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            population_size: 24,
            max_generations: 50,
            mutation_ratio: 0.5,
            target_x: 0.0,
            target_y: 0.5,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(KicktunerError::Configuration(
                "Population size must be greater than 0".to_string(),
            ));
        }
        // Elite fraction is a third and every elite pair emits six offspring;
        // only multiples of 6 keep the population size stable across generations.
        if self.population_size % 6 != 0 {
            return Err(KicktunerError::Configuration(format!(
                "Population size must be divisible by 6, got {}",
                self.population_size
            )));
        }
        if self.max_generations == 0 {
            return Err(KicktunerError::Configuration(
                "Max generations must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_ratio) {
            return Err(KicktunerError::Configuration(
                "Mutation ratio must be between 0 and 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: SearchConfig = toml::from_str(contents)
            .map_err(|e| KicktunerError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| KicktunerError::Configuration(format!("Failed to read config: {}", e)))?;
        Self::from_toml_str(&contents)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| KicktunerError::Configuration(format!("Failed to serialize: {}", e)))?;
        std::fs::write(path, toml_str)
            .map_err(|e| KicktunerError::Configuration(format!("Failed to write config: {}", e)))?;
        Ok(())
    }

    /// Parse the legacy plain-text format: one value per line, in order
    /// population size, max generations, mutation ratio, target x, target y.
    pub fn from_legacy_lines(contents: &str) -> Result<Self> {
        let mut lines = contents.lines().filter(|l| !l.trim().is_empty());

        fn next_field<'a, I, T>(lines: &mut I, name: &str) -> Result<T>
        where
            I: Iterator<Item = &'a str>,
            T: std::str::FromStr,
            T::Err: std::fmt::Display,
        {
            let line = lines.next().ok_or_else(|| {
                KicktunerError::Configuration(format!("Missing config field: {}", name))
            })?;
            line.trim().parse().map_err(|e| {
                KicktunerError::Configuration(format!("Failed to parse {}: {}", name, e))
            })
        }

        let config = Self {
            population_size: next_field(&mut lines, "population size")?,
            max_generations: next_field(&mut lines, "max generations")?,
            mutation_ratio: next_field(&mut lines, "mutation ratio")?,
            target_x: next_field(&mut lines, "target x")?,
            target_y: next_field(&mut lines, "target y")?,
            seed: None,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn load_legacy_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| KicktunerError::Configuration(format!("Failed to read config: {}", e)))?;
        Self::from_legacy_lines(&contents)
    }
}
