/// ACM Engine: Invariant Checks
///
/// Input checks are non-panicking: the solvers never call them and must
/// cope with inputs that fail them. Callers validate upstream.

use crate::domain::{Case, MachineOffer, OwnershipState};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Check a case and its offers. Returns `Err(message)` on the first failure.
pub fn try_validate_case(case: &Case, machines: &[MachineOffer]) -> Result<(), String> {
    try_check_case_fields(case)?;
    for (index, offer) in machines.iter().enumerate() {
        try_check_offer_fields(index, offer)?;
        try_check_offer_within_horizon(index, offer, case)?;
    }
    Ok(())
}

/// A stored live state never holds negative cash.
pub fn validate_state(state: &OwnershipState) {
    debug_assert!(
        state.cash_on_hand >= 0,
        "Invariant violation: [INVARIANT:live_state_cash] \
         live state on day {} holds negative cash {}",
        state.day,
        state.cash_on_hand
    );
}

// ---------------------------------------------------------------------------
// Individual checks (private)
// ---------------------------------------------------------------------------

fn try_check_case_fields(case: &Case) -> Result<(), String> {
    if case.starting_cash < 0 {
        return Err(format!(
            "[INVARIANT:case_fields] starting cash {} is negative",
            case.starting_cash
        ));
    }
    if case.horizon_days < 0 {
        return Err(format!(
            "[INVARIANT:case_fields] horizon {} is negative",
            case.horizon_days
        ));
    }
    Ok(())
}

fn try_check_offer_fields(index: usize, offer: &MachineOffer) -> Result<(), String> {
    if offer.available_day < 1 {
        return Err(format!(
            "[INVARIANT:offer_fields] offer #{} is available on day {}, before day 1",
            index, offer.available_day
        ));
    }
    if offer.price < 0 || offer.resell_value < 0 || offer.daily_profit < 0 {
        return Err(format!(
            "[INVARIANT:offer_fields] offer #{} has a negative amount: {:?}",
            index, offer
        ));
    }
    Ok(())
}

fn try_check_offer_within_horizon(
    index: usize,
    offer: &MachineOffer,
    case: &Case,
) -> Result<(), String> {
    if offer.available_day > case.horizon_days {
        return Err(format!(
            "[INVARIANT:offer_within_horizon] offer #{} is available on day {}, after the {}-day horizon",
            index, offer.available_day, case.horizon_days
        ));
    }
    Ok(())
}
