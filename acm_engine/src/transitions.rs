/// ACM Engine: State Transition Rule
///
/// The only place cash moves. Shared by both solvers.
/// All math is checked i64.

use serde::{Deserialize, Serialize};

use crate::arithmetic::{checked_add, checked_mul, checked_sub};
use crate::domain::{MachineOffer, OwnershipState};

/// An acquisition that would leave ACM with negative cash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Infeasible {
    pub day: i64,
    pub shortfall: i64,
}

/// Days the current machine keeps producing before `offer` becomes available.
/// The acquisition day itself produces nothing.
fn idle_days(state: &OwnershipState, offer: &MachineOffer) -> i64 {
    checked_sub(checked_sub(offer.available_day, state.day), 1).max(0)
}

/// Sell the current machine and buy `offer` on its availability day.
pub fn try_acquire(
    state: &OwnershipState,
    offer: &MachineOffer,
) -> Result<OwnershipState, Infeasible> {
    let accrued_profit = checked_mul(idle_days(state, offer), state.daily_profit);
    let cash_after = checked_add(
        checked_sub(checked_add(state.cash_on_hand, state.resell_value), offer.price),
        accrued_profit,
    );

    if cash_after < 0 {
        return Err(Infeasible {
            day: offer.available_day,
            shortfall: -cash_after,
        });
    }

    Ok(OwnershipState {
        day: offer.available_day,
        cash_on_hand: cash_after,
        resell_value: offer.resell_value,
        daily_profit: offer.daily_profit,
    })
}

/// Cash held at the end of the horizon if the current machine is kept
/// and sold on the last day.
pub fn terminal_value(state: &OwnershipState, horizon_days: i64) -> i64 {
    let remaining = checked_sub(horizon_days, state.day);
    checked_add(
        checked_add(state.cash_on_hand, state.resell_value),
        checked_mul(remaining, state.daily_profit),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Case;

    #[test]
    fn first_acquisition_from_nothing() {
        let start = OwnershipState::initial(&Case::new(10, 20));
        let next = try_acquire(&start, &MachineOffer::new(3, 2, 1, 2)).unwrap();
        assert_eq!(
            next,
            OwnershipState {
                day: 3,
                cash_on_hand: 8,
                resell_value: 1,
                daily_profit: 2,
            }
        );
    }

    #[test]
    fn switch_accrues_profit_and_resale() {
        let held = OwnershipState {
            day: 3,
            cash_on_hand: 8,
            resell_value: 1,
            daily_profit: 2,
        };
        // idle days 4..=5 earn 2 each, resale adds 1
        let next = try_acquire(&held, &MachineOffer::new(6, 12, 1, 3)).unwrap();
        assert_eq!(next.cash_on_hand, 8 + 1 - 12 + 4);
        assert_eq!(next.day, 6);
        assert_eq!(next.daily_profit, 3);
    }

    #[test]
    fn same_day_switch_accrues_nothing() {
        let held = OwnershipState {
            day: 4,
            cash_on_hand: 5,
            resell_value: 7,
            daily_profit: 100,
        };
        let next = try_acquire(&held, &MachineOffer::new(4, 12, 0, 1)).unwrap();
        assert_eq!(next.cash_on_hand, 0);
    }

    #[test]
    fn unaffordable_acquisition_is_infeasible() {
        let start = OwnershipState::initial(&Case::new(10, 20));
        let err = try_acquire(&start, &MachineOffer::new(8, 20, 5, 4)).unwrap_err();
        assert_eq!(err, Infeasible { day: 8, shortfall: 10 });
    }

    #[test]
    fn exact_budget_is_feasible() {
        let start = OwnershipState::initial(&Case::new(9, 20));
        let next = try_acquire(&start, &MachineOffer::new(1, 9, 1, 2)).unwrap();
        assert_eq!(next.cash_on_hand, 0);
    }

    #[test]
    fn terminal_value_of_nothing_is_cash() {
        let start = OwnershipState::initial(&Case::new(10, 20));
        assert_eq!(terminal_value(&start, 20), 10);
    }

    #[test]
    fn terminal_value_sells_on_last_day() {
        let held = OwnershipState {
            day: 6,
            cash_on_hand: 1,
            resell_value: 1,
            daily_profit: 3,
        };
        assert_eq!(terminal_value(&held, 20), 1 + 1 + 14 * 3);
    }
}
