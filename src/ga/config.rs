//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.

use crate::error::ConfigError;

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_jobshop::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 200);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_jobshop::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(60)
///     .with_generations(50)
///     .with_mutation_rate(0.2)
///     .with_seed(123);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals kept after each generation.
    ///
    /// Must be even: selection pairs the whole population.
    pub population_size: usize,

    /// Number of generations to run.
    pub generations: usize,

    /// Probability that a tournament winner takes part in crossover (0.0–1.0).
    pub crossover_rate: f64,

    /// Probability of mutating each offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Whether to evaluate offspring in parallel using rayon.
    ///
    /// Has no effect without the `parallel` feature. Results are identical
    /// either way because evaluation is pure.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed; the seed used is reported in the result.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked between generations, so a run may exceed the limit by one
    /// generation's worth of work. `None` disables it (the default).
    pub time_limit_ms: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 200,
            crossover_rate: 0.8,
            mutation_rate: 0.15,
            parallel: true,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Preset for quick runs: population 50, 100 generations, 10s limit.
    pub fn fast() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            time_limit_ms: Some(10_000),
            ..Self::default()
        }
    }

    /// Preset for moderate runs: population 100, 300 generations, 30s limit.
    pub fn balanced() -> Self {
        Self {
            population_size: 100,
            generations: 300,
            time_limit_ms: Some(30_000),
            ..Self::default()
        }
    }

    /// Preset for thorough runs: population 150, 500 generations, 60s limit.
    pub fn quality() -> Self {
        Self {
            population_size: 150,
            generations: 500,
            time_limit_ms: Some(60_000),
            ..Self::default()
        }
    }

    /// Picks a preset from the number of operations in the instance.
    ///
    /// - `< 50` → [`fast()`](Self::fast)
    /// - `50..200` → [`balanced()`](Self::balanced)
    /// - `≥ 200` → [`quality()`](Self::quality)
    pub fn auto_select(operation_count: usize) -> Self {
        if operation_count < 50 {
            Self::fast()
        } else if operation_count < 200 {
            Self::balanced()
        } else {
            Self::quality()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.population_size % 2 != 0 {
            return Err(ConfigError::OddPopulation(self.population_size));
        }
        if self.generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        if self.time_limit_ms == Some(0) {
            return Err(ConfigError::ZeroTimeLimit);
        }
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RateOutOfRange { name, value })
    }
}
