//! GA generational loop.
//!
//! [`GaRunner`] drives the search:
//! initialize → (select → recombine → mutate → merge → rank → truncate) × G.
//!
//! Replacement is elitist truncation: parents and offspring compete in one
//! pool and the best `population_size` survive, so the best fitness can
//! never get worse from one generation to the next.

use super::config::GaConfig;
use super::operators::{mutate_offspring, recombine};
use super::selection::pairwise_tournament;
use super::types::{Fitness, GaProblem, Individual};
use crate::error::ConfigError;
use crate::random::{create_rng, resolve_seed};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual of the final population.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run was stopped by the cancellation flag.
    pub cancelled: bool,

    /// Whether the run was stopped by the time limit.
    pub timed_out: bool,

    /// Seed the run was started with.
    pub seed: u64,

    /// Best fitness after each generation.
    pub best_history: Vec<f64>,

    /// Worst surviving fitness after each generation.
    pub worst_history: Vec<f64>,
}

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// Returns an error, before any work is done, if the configuration is
    /// invalid for the GA or for the problem.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual>, ConfigError> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// The flag is checked between generations; once set, the run stops and
    /// returns the best individual found so far.
    pub fn run_with_cancel<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<P::Individual>, ConfigError> {
        config.validate()?;
        problem.validate_config(config)?;

        let seed = resolve_seed(config.seed);
        let mut rng = create_rng(seed);
        let deadline = config
            .time_limit_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms));

        info!(
            seed,
            population_size = config.population_size,
            generations = config.generations,
            crossover_rate = config.crossover_rate,
            mutation_rate = config.mutation_rate,
            "starting GA run"
        );

        // 1. Initialize and rank population
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();
        evaluate_population(problem, &mut population, config.parallel);
        rank(&mut population);

        let mut best_history = Vec::with_capacity(config.generations);
        let mut worst_history = Vec::with_capacity(config.generations);
        let mut cancelled = false;
        let mut timed_out = false;

        // 2. Generational loop
        for gen in 0..config.generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                timed_out = true;
                break;
            }

            let winners = pairwise_tournament(&population, &mut rng);
            let mut offspring =
                recombine(problem, &population, &winners, config.crossover_rate, &mut rng);
            mutate_offspring(problem, &mut offspring, config.mutation_rate, &mut rng);
            evaluate_population(problem, &mut offspring, config.parallel);

            let offspring_count = offspring.len();
            population.extend(offspring);
            rank(&mut population);
            population.truncate(config.population_size);

            let best = population[0].fitness();
            let worst = population[population.len() - 1].fitness();
            best_history.push(best.to_f64());
            worst_history.push(worst.to_f64());

            problem.on_generation(gen + 1, best);
            debug!(
                generation = gen + 1,
                best = best.to_f64(),
                worst = worst.to_f64(),
                offspring = offspring_count,
                "generation complete"
            );
        }

        let generations = best_history.len();
        if cancelled || timed_out {
            warn!(generations, cancelled, timed_out, "GA run stopped early");
        }

        let best = population.swap_remove(0);
        info!(
            seed,
            generations,
            best_fitness = best.fitness().to_f64(),
            "GA run finished"
        );

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations,
            cancelled,
            timed_out,
            seed,
            best_history,
            worst_history,
        })
    }
}

/// Evaluate all individuals and cache their fitness.
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    parallel: bool,
) {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            population.par_iter_mut().for_each(|ind| {
                let f = problem.evaluate(ind);
                ind.set_fitness(f);
            });
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

/// Stable sort by fitness, best first.
///
/// Stability keeps incumbents ahead of equally fit newcomers.
fn rank<I: Individual>(population: &mut [I]) {
    population.sort_by(|a, b| {
        a.fitness()
            .partial_cmp(&b.fitness())
            .unwrap_or(CmpOrdering::Equal)
    });
}

// ============================================================================
// Tests
// ============================================================================
