//! Genetic Algorithm engine.
//!
//! A generic generational GA built on trait-based abstractions. A problem
//! plugs in by implementing [`GaProblem`], which specifies how to create,
//! evaluate, recombine, and mutate individuals.
//!
//! # Generation
//!
//! 1. Pairwise tournament over the whole population → `n / 2` winners
//! 2. Each winner, with probability `crossover_rate`, recombines with a
//!    random winner → offspring
//! 3. Each offspring, with probability `mutation_rate`, is mutated
//! 4. Parents and offspring are ranked together; the best `n` survive
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with associated fitness type
//! - [`GaProblem`]: Problem definition: initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, presets)
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Final result with best/worst history
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use selection::pairwise_tournament;
pub use types::{Fitness, GaProblem, Individual};
