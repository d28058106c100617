//! Job-shop GA problem and optimizer entry points.

use super::chromosome::Chromosome;
use super::operators::{job_point_crossover, reassign_mutation, MIN_CROSSOVER_JOBS};
use crate::error::ConfigError;
use crate::ga::{GaConfig, GaProblem, GaRunner};
use crate::instance::ProblemInstance;
use crate::schedule::{self, ScheduleTrace};
use rand::Rng;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Machine-assignment search over a fixed [`ProblemInstance`].
///
/// Fitness is the makespan of the forward simulation in [`crate::schedule`].
#[derive(Debug, Clone, Copy)]
pub struct JobShopProblem<'a> {
    instance: &'a ProblemInstance,
}

impl<'a> JobShopProblem<'a> {
    /// Creates a problem over `instance`.
    pub fn new(instance: &'a ProblemInstance) -> Self {
        Self { instance }
    }

    /// The instance being scheduled.
    pub fn instance(&self) -> &'a ProblemInstance {
        self.instance
    }
}

impl GaProblem for JobShopProblem<'_> {
    type Individual = Chromosome;

    fn validate_config(&self, _config: &GaConfig) -> Result<(), ConfigError> {
        let jobs = self.instance.job_count();
        if jobs < MIN_CROSSOVER_JOBS {
            return Err(ConfigError::TooFewJobs {
                jobs,
                required: MIN_CROSSOVER_JOBS,
            });
        }
        Ok(())
    }

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Chromosome {
        Chromosome::random(self.instance, rng)
    }

    fn evaluate(&self, individual: &Chromosome) -> f64 {
        schedule::makespan(self.instance, &individual.assignments)
    }

    fn crossover<R: Rng>(&self, p1: &Chromosome, p2: &Chromosome, rng: &mut R) -> Vec<Chromosome> {
        let (c1, c2) = job_point_crossover(p1, p2, rng);
        vec![c1, c2]
    }

    fn mutate<R: Rng>(&self, individual: &mut Chromosome, rng: &mut R) {
        reassign_mutation(individual, self.instance, rng);
    }
}

/// Everything the reporting side needs from one optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizationResult {
    /// Best chromosome of the final population.
    pub best_chromosome: Chromosome,
    /// Its makespan.
    pub best_makespan: f64,
    /// Its full timing trace.
    pub best_trace: ScheduleTrace,
    /// Best makespan after each generation.
    pub best_history: Vec<f64>,
    /// Worst surviving makespan after each generation.
    pub worst_history: Vec<f64>,
    /// Generations actually run.
    pub generations: usize,
    /// Seed the run was started with.
    pub seed: u64,
}

/// Runs the GA over `instance` with `config`.
///
/// # Examples
///
/// ```
/// use u_jobshop::ga::GaConfig;
/// use u_jobshop::instance::reference_instance;
/// use u_jobshop::jobshop::optimize;
///
/// let instance = reference_instance();
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(10)
///     .with_seed(123);
/// let result = optimize(&instance, &config).unwrap();
///
/// assert_eq!(result.best_history.len(), 10);
/// assert_eq!(result.best_trace.makespan, result.best_makespan);
/// ```
pub fn optimize(
    instance: &ProblemInstance,
    config: &GaConfig,
) -> Result<OptimizationResult, ConfigError> {
    optimize_with_cancel(instance, config, None)
}

/// [`optimize`] with a cancellation flag checked between generations.
pub fn optimize_with_cancel(
    instance: &ProblemInstance,
    config: &GaConfig,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<OptimizationResult, ConfigError> {
    let problem = JobShopProblem::new(instance);
    let result = GaRunner::run_with_cancel(&problem, config, cancel)?;

    // The runner keeps the ranked head of the final population, so this is
    // the trace of the true best rather than of the last chromosome evaluated.
    let best_trace = schedule::evaluate(instance, &result.best.assignments)
        .unwrap_or_else(|e| panic!("GA produced a malformed chromosome: {e}"));

    Ok(OptimizationResult {
        best_makespan: result.best_fitness,
        best_chromosome: result.best,
        best_trace,
        best_history: result.best_history,
        worst_history: result.worst_history,
        generations: result.generations,
        seed: result.seed,
    })
}

/// Runs the GA with explicit parameters.
///
/// Shorthand for [`optimize`] with a config built from the arguments;
/// `seed = None` draws a fresh seed.
pub fn run(
    instance: &ProblemInstance,
    population_size: usize,
    generations: usize,
    mutation_rate: f64,
    crossover_rate: f64,
    seed: Option<u64>,
) -> Result<OptimizationResult, ConfigError> {
    let config = GaConfig {
        population_size,
        generations,
        mutation_rate,
        crossover_rate,
        seed,
        ..GaConfig::default()
    };
    optimize(instance, &config)
}
