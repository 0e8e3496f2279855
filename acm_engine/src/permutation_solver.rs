/// ACM Engine: Permutation-Enumeration Solver
///
/// Enumerates ordered acquisition sequences by increasing length and
/// memoizes the end state of every evaluated sequence, so a sequence of
/// length r only replays its last step when its length r-1 prefix is known.
///
/// Runtime is exponential in the sequence length. Callers cap it with
/// `max_sequence_length`.

use std::collections::HashMap;

use tracing::trace;

use crate::arithmetic::half_horizon;
use crate::domain::{Case, MachineOffer, OwnershipState, SearchStats, Solution};
use crate::invariants::validate_state;
use crate::permutations::Permutations;
use crate::transitions::{terminal_value, try_acquire};

/// What the memo knows about one acquisition sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoEntry {
    /// Some step of the sequence cannot be paid for.
    Dead,
    /// State after the last acquisition of the sequence.
    Live(OwnershipState),
}

type Memo = HashMap<Vec<MachineOffer>, MemoEntry>;

/// Resolve the sequence-length cap: anything absent or outside
/// `[0, ceil(horizon / 2)]` falls back to `ceil(horizon / 2)`.
pub fn effective_sequence_length(horizon_days: i64, requested: Option<i64>) -> usize {
    let ceiling = half_horizon(horizon_days);
    let length = match requested {
        Some(n) if (0..=ceiling).contains(&n) => n,
        _ => ceiling,
    };
    usize::try_from(length).unwrap_or(usize::MAX)
}

/// Consecutive acquisitions may share a day but never go back in time.
fn in_order(earlier: &MachineOffer, later: &MachineOffer) -> bool {
    earlier.available_day < later.available_day + 1
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PermutationSolver;

impl PermutationSolver {
    pub fn new() -> Self {
        Self
    }

    pub fn solve(
        &self,
        case: &Case,
        machines: &[MachineOffer],
        max_sequence_length: Option<i64>,
    ) -> Solution {
        let offers: Vec<MachineOffer> = machines
            .iter()
            .copied()
            .filter(|m| m.available_day <= case.horizon_days)
            .collect();

        // Lengths past the offer count have no permutations.
        let depth = effective_sequence_length(case.horizon_days, max_sequence_length)
            .min(offers.len());

        let initial = OwnershipState::initial(case);
        let mut stats = SearchStats::default();
        let mut memo: Memo = HashMap::new();
        let mut sequence: Vec<MachineOffer> = Vec::with_capacity(depth);
        let mut best = case.starting_cash;

        for length in 1..=depth {
            // Only length-1 prefixes are looked up from here on.
            memo.retain(|key, _| key.len() + 2 > length);

            let mut perms = Permutations::new(offers.len(), length);
            while let Some(indices) = perms.advance() {
                stats.sequences_enumerated += 1;
                sequence.clear();
                sequence.extend(indices.iter().map(|&i| offers[i]));

                if let Some(end) = evaluate(&sequence, &initial, &mut memo, &mut stats) {
                    best = best.max(terminal_value(&end, case.horizon_days));
                }
            }

            stats.peak_memo_entries = stats.peak_memo_entries.max(memo.len() as u64);
            trace!(length, memo_entries = memo.len(), best, "length class done");
        }

        Solution {
            maximum_profit: best,
            stats,
        }
    }
}

/// End state of `sequence`, or `None` when it is out of order or unaffordable.
fn evaluate(
    sequence: &[MachineOffer],
    initial: &OwnershipState,
    memo: &mut Memo,
    stats: &mut SearchStats,
) -> Option<OwnershipState> {
    let length = sequence.len();
    if length < 2 {
        return replay(*initial, sequence, sequence, memo, stats);
    }

    // Cheap check on the last pair before anything else.
    if !in_order(&sequence[length - 2], &sequence[length - 1]) {
        return None;
    }

    let (prefix, last) = sequence.split_at(length - 1);
    match memo.get(prefix).copied() {
        Some(MemoEntry::Dead) => {
            stats.memo_hits += 1;
            memo.insert(sequence.to_vec(), MemoEntry::Dead);
            None
        }
        Some(MemoEntry::Live(state)) => {
            stats.memo_hits += 1;
            replay(state, last, sequence, memo, stats)
        }
        None => {
            if !sequence.windows(2).all(|pair| in_order(&pair[0], &pair[1])) {
                return None;
            }
            replay(*initial, sequence, sequence, memo, stats)
        }
    }
}

/// Apply `steps` from `from` and record the outcome under `sequence`.
fn replay(
    from: OwnershipState,
    steps: &[MachineOffer],
    sequence: &[MachineOffer],
    memo: &mut Memo,
    stats: &mut SearchStats,
) -> Option<OwnershipState> {
    stats.sequences_evaluated += 1;

    let mut state = from;
    for offer in steps {
        match try_acquire(&state, offer) {
            Ok(next) => state = next,
            Err(infeasible) => {
                trace!(
                    length = sequence.len(),
                    day = infeasible.day,
                    shortfall = infeasible.shortfall,
                    "dead end"
                );
                stats.dead_ends += 1;
                memo.insert(sequence.to_vec(), MemoEntry::Dead);
                return None;
            }
        }
    }

    validate_state(&state);
    memo.insert(sequence.to_vec(), MemoEntry::Live(state));
    Some(state)
}
