/// ACM Engine: Core Domain Types
///
/// Pure data. No search logic.
/// All numeric values: i64 (days and currency units).

use serde::{Deserialize, Serialize};

// ── Core Domain Types ──────────────────────────────────────────────

/// One problem instance: what ACM starts with and how long it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Case {
    pub starting_cash: i64,
    pub horizon_days: i64,
}

impl Case {
    pub fn new(starting_cash: i64, horizon_days: i64) -> Self {
        Self {
            starting_cash,
            horizon_days,
        }
    }
}

/// A machine that can be bought on `available_day` and sold back later.
///
/// Ordering is lexicographic over the fields in declaration order, which
/// puts offers in availability order first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(deny_unknown_fields)]
pub struct MachineOffer {
    pub available_day: i64,
    pub price: i64,
    pub resell_value: i64,
    pub daily_profit: i64,
}

impl MachineOffer {
    pub fn new(available_day: i64, price: i64, resell_value: i64, daily_profit: i64) -> Self {
        Self {
            available_day,
            price,
            resell_value,
            daily_profit,
        }
    }

    /// Build from the external `(day, price, resell, profit)` shape.
    pub fn from_tuple((available_day, price, resell_value, daily_profit): (i64, i64, i64, i64)) -> Self {
        Self::new(available_day, price, resell_value, daily_profit)
    }
}

/// ACM's financial position while holding one machine (or none).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OwnershipState {
    pub day: i64,
    pub cash_on_hand: i64,
    pub resell_value: i64,
    pub daily_profit: i64,
}

impl OwnershipState {
    /// The "own nothing" state at day 0.
    pub fn initial(case: &Case) -> Self {
        Self {
            day: 0,
            cash_on_hand: case.starting_cash,
            resell_value: 0,
            daily_profit: 0,
        }
    }
}

/// Per-solve counters. Informational only, never part of the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub sequences_enumerated: u64,
    pub sequences_evaluated: u64,
    pub memo_hits: u64,
    pub dead_ends: u64,
    pub peak_memo_entries: u64,
    pub states_visited: u64,
}

/// Outcome of one solve call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub maximum_profit: i64,
    pub stats: SearchStats,
}
