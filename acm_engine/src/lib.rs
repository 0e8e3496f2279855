#![forbid(unsafe_code)]

/// Engine v1. Bump when a solver's result for the same case can change.
pub const ENGINE_VERSION: u32 = 1;

pub mod arithmetic;
pub mod domain;
pub mod transitions;
pub mod permutations;
pub mod permutation_solver;
pub mod recursive_solver;
pub mod invariants;
pub mod hashing;
pub mod engine;

pub use domain::{Case, MachineOffer, OwnershipState, SearchStats, Solution};
pub use engine::{compute_maximum_profit, ProfitEngine, SolverConfig, SolverKind};
