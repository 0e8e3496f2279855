/// ACM Engine: Engine
///
/// Front door for callers. Picks a solver from the configuration and
/// hands back one maximum per case. Holds no state between solves.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Case, MachineOffer, Solution};
use crate::permutation_solver::PermutationSolver;
use crate::recursive_solver::RecursiveSolver;

/// Which search backs the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverKind {
    /// Length-bounded permutation enumeration with prefix memoization.
    #[default]
    Permutation,
    /// Unbounded depth-first search. Small inputs only.
    Recursive,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    pub kind: SolverKind,
    /// Longest acquisition sequence the permutation solver tries.
    /// `None` or out of range means `ceil(horizon / 2)`.
    pub max_sequence_length: Option<i64>,
}

/// Stateless engine wrapping the two solvers.
#[derive(Debug, Clone, Default)]
pub struct ProfitEngine {
    config: SolverConfig,
}

impl ProfitEngine {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Maximum cash reachable by the end of the horizon.
    pub fn solve(&self, case: &Case, machines: &[MachineOffer]) -> Solution {
        let solution = match self.config.kind {
            SolverKind::Permutation => {
                PermutationSolver::new().solve(case, machines, self.config.max_sequence_length)
            }
            SolverKind::Recursive => RecursiveSolver::new().solve(case, machines),
        };

        debug!(
            solver = ?self.config.kind,
            offers = machines.len(),
            starting_cash = case.starting_cash,
            horizon_days = case.horizon_days,
            maximum_profit = solution.maximum_profit,
            stats = ?solution.stats,
            "case solved"
        );

        solution
    }
}

/// Maximum profit for one case given as raw `(day, price, resell, profit)`
/// tuples, using the permutation solver.
pub fn compute_maximum_profit(
    starting_cash: i64,
    horizon_days: i64,
    machines: &[(i64, i64, i64, i64)],
    max_sequence_length: Option<i64>,
) -> i64 {
    let offers: Vec<MachineOffer> = machines.iter().copied().map(MachineOffer::from_tuple).collect();
    let engine = ProfitEngine::new(SolverConfig {
        kind: SolverKind::Permutation,
        max_sequence_length,
    });
    engine
        .solve(&Case::new(starting_cash, horizon_days), &offers)
        .maximum_profit
}
