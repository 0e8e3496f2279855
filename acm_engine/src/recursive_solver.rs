/// ACM Engine: Depth-First Solver
///
/// Alternative to the permutation solver with no sequence-length cap.
/// Meant for small inputs and for cross-checking; the search is still
/// exponential in the number of offers.
///
/// Runs on an explicit work stack. Moves are pushed in reverse so states
/// are visited in the same pre-order a recursive descent would use.

use tracing::trace;

use crate::arithmetic::{checked_add, checked_mul, checked_sub};
use crate::domain::{Case, MachineOffer, OwnershipState, SearchStats, Solution};
use crate::transitions::terminal_value;

#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveSolver;

impl RecursiveSolver {
    pub fn new() -> Self {
        Self
    }

    pub fn solve(&self, case: &Case, machines: &[MachineOffer]) -> Solution {
        let mut offers: Vec<MachineOffer> = machines
            .iter()
            .copied()
            .filter(|m| m.available_day <= case.horizon_days)
            .collect();
        offers.sort_by_key(|m| m.available_day);

        // Day -1 so that a day-1 offer already satisfies the one-day gap.
        let start = OwnershipState {
            day: -1,
            cash_on_hand: case.starting_cash,
            resell_value: 0,
            daily_profit: 0,
        };

        let mut stats = SearchStats::default();
        let mut best = case.starting_cash;
        let mut stack = vec![start];

        while let Some(state) = stack.pop() {
            stats.states_visited += 1;
            best = best.max(terminal_value(&state, case.horizon_days));

            let first_move = stack.len();
            stack.extend(offers.iter().filter_map(|offer| next_state(&state, offer)));
            stack[first_move..].reverse();
        }

        trace!(states = stats.states_visited, best, "depth-first search done");

        Solution {
            maximum_profit: best,
            stats,
        }
    }
}

/// The state after switching to `offer`, if the move is allowed.
///
/// Affordability is judged on cash plus accrued profit only; resale of the
/// held machine is credited after the move is accepted.
fn next_state(state: &OwnershipState, offer: &MachineOffer) -> Option<OwnershipState> {
    let gap = checked_sub(checked_sub(offer.available_day, state.day), 1);
    if gap <= 0 {
        return None;
    }

    let accrued = checked_mul(gap, state.daily_profit);
    let budget = checked_add(state.cash_on_hand, accrued);
    if budget < offer.price {
        return None;
    }

    Some(OwnershipState {
        day: offer.available_day,
        cash_on_hand: checked_add(checked_sub(budget, offer.price), state.resell_value),
        resell_value: offer.resell_value,
        daily_profit: offer.daily_profit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_offers() -> Vec<MachineOffer> {
        [
            (6, 12, 1, 3),
            (1, 9, 1, 2),
            (3, 2, 1, 2),
            (8, 20, 5, 4),
            (4, 11, 7, 4),
            (2, 10, 9, 1),
        ]
        .into_iter()
        .map(MachineOffer::from_tuple)
        .collect()
    }

    #[test]
    fn reference_case_reaches_44() {
        let solution = RecursiveSolver::new().solve(&Case::new(10, 20), &reference_offers());
        assert_eq!(solution.maximum_profit, 44);
    }

    #[test]
    fn day_one_offer_is_reachable_from_start() {
        let offers = vec![MachineOffer::new(1, 5, 5, 1)];
        let solution = RecursiveSolver::new().solve(&Case::new(5, 10), &offers);
        // bought on day 1, earns days 2..=10, resold at 5
        assert_eq!(solution.maximum_profit, 5 + 9);
        assert_eq!(solution.stats.states_visited, 2);
    }

    #[test]
    fn adjacent_day_switch_is_not_a_move() {
        let held = OwnershipState {
            day: 3,
            cash_on_hand: 100,
            resell_value: 0,
            daily_profit: 0,
        };
        assert_eq!(next_state(&held, &MachineOffer::new(4, 1, 0, 0)), None);
        assert!(next_state(&held, &MachineOffer::new(5, 1, 0, 0)).is_some());
    }

    #[test]
    fn resale_does_not_count_towards_affordability() {
        let held = OwnershipState {
            day: 1,
            cash_on_hand: 0,
            resell_value: 50,
            daily_profit: 0,
        };
        assert_eq!(next_state(&held, &MachineOffer::new(5, 10, 0, 0)), None);
    }

    #[test]
    fn move_credits_resale_and_accrued_profit() {
        let held = OwnershipState {
            day: 2,
            cash_on_hand: 3,
            resell_value: 9,
            daily_profit: 1,
        };
        let next = next_state(&held, &MachineOffer::new(6, 5, 1, 3)).unwrap();
        assert_eq!(next.cash_on_hand, 3 + 3 - 5 + 9);
        assert_eq!(next.day, 6);
    }

    #[test]
    fn empty_offer_list_returns_starting_cash() {
        let solution = RecursiveSolver::new().solve(&Case::new(12, 30), &[]);
        assert_eq!(solution.maximum_profit, 12);
        assert_eq!(solution.stats.states_visited, 1);
    }
}
