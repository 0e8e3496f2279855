//! Batch solving: turn a stream of parsed cases into numbered outcomes.
//!
//! Cases are numbered from 1 in input order. Malformed cases take a number
//! too, so output lines always line up with the cases in the file.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use acm_engine::hashing::canonical_hash;
use acm_engine::invariants::try_validate_case;
use acm_engine::ProfitEngine;

use crate::config::HandlerConfig;
use crate::crosscheck::compare_solvers;
use crate::error::CaseError;
use crate::input::{CaseInput, CaseReader};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseOutcome {
    Solved {
        case_number: usize,
        fingerprint: String,
        maximum_profit: i64,
    },
    Malformed {
        case_number: usize,
        error: CaseError,
    },
}

impl CaseOutcome {
    pub fn case_number(&self) -> usize {
        match self {
            CaseOutcome::Solved { case_number, .. } | CaseOutcome::Malformed { case_number, .. } => {
                *case_number
            }
        }
    }

    pub fn maximum_profit(&self) -> Option<i64> {
        match self {
            CaseOutcome::Solved { maximum_profit, .. } => Some(*maximum_profit),
            CaseOutcome::Malformed { .. } => None,
        }
    }
}

impl fmt::Display for CaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseOutcome::Solved {
                case_number,
                maximum_profit,
                ..
            } => write!(f, "Case {}: {}", case_number, maximum_profit),
            CaseOutcome::Malformed { case_number, error } => {
                write!(f, "Case {}: {}", case_number, error)
            }
        }
    }
}

/// Solve every case of `records` in order.
pub fn solve_all<I>(records: I, config: &HandlerConfig) -> Vec<CaseOutcome>
where
    I: IntoIterator<Item = Result<CaseInput, CaseError>>,
{
    let engine = ProfitEngine::new(config.solver);
    let mut solved: HashMap<String, i64> = HashMap::new();
    let mut outcomes = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        let case_number = index + 1;
        let outcome = match record.and_then(validated) {
            Ok(input) => {
                let fingerprint = canonical_hash(&input.case, &input.machines);
                let cached = solved
                    .get(&fingerprint)
                    .copied()
                    .filter(|_| config.deduplicate);
                let maximum_profit = match cached {
                    Some(cached) => {
                        debug!(case_number, %fingerprint, "duplicate case, reusing result");
                        cached
                    }
                    None => {
                        let result = engine.solve(&input.case, &input.machines).maximum_profit;
                        solved.insert(fingerprint.clone(), result);
                        result
                    }
                };

                if config.cross_check {
                    let drift = compare_solvers(
                        &input.case,
                        &input.machines,
                        config.solver.max_sequence_length,
                    );
                    if !drift.agrees() {
                        warn!(
                            case_number,
                            permutation = drift.permutation,
                            recursive = drift.recursive,
                            delta = drift.delta,
                            "solvers disagree"
                        );
                    }
                }

                CaseOutcome::Solved {
                    case_number,
                    fingerprint,
                    maximum_profit,
                }
            }
            Err(error) => {
                warn!(case_number, %error, "skipping malformed case");
                CaseOutcome::Malformed { case_number, error }
            }
        };
        outcomes.push(outcome);
    }

    outcomes
}

/// Parse and solve a whole text body.
pub fn solve_text(text: &str, config: &HandlerConfig) -> Vec<CaseOutcome> {
    solve_all(CaseReader::new(text), config)
}

fn validated(input: CaseInput) -> Result<CaseInput, CaseError> {
    match try_validate_case(&input.case, &input.machines) {
        Ok(()) => Ok(input),
        Err(reason) => Err(CaseError::Rejected {
            line: input.line,
            reason,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "6 10 20\n6 12 1 3\n1 9 1 2\n3 2 1 2\n8 20 5 4\n4 11 7 4\n2 10 9 1\n0 10 20\n0 0 0\n";

    #[test]
    fn example_input_prints_two_cases() {
        let outcomes = solve_text(EXAMPLE, &HandlerConfig::default());
        let lines: Vec<String> = outcomes.iter().map(|o| o.to_string()).collect();
        assert_eq!(lines, vec!["Case 1: 44", "Case 2: 10"]);
    }

    #[test]
    fn malformed_case_keeps_its_number() {
        let text = "1 5 x\n0 10 20\n0 0 0\n";
        let outcomes = solve_text(text, &HandlerConfig::default());
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].maximum_profit(), None);
        assert_eq!(outcomes[1].case_number(), 2);
        assert_eq!(outcomes[1].maximum_profit(), Some(10));
        assert!(outcomes[0].to_string().starts_with("Case 1: Error in the case"));
    }

    #[test]
    fn day_zero_machine_rejects_case() {
        let outcomes = solve_text("1 5 10\n0 1 1 1\n0 0 0\n", &HandlerConfig::default());
        match &outcomes[0] {
            CaseOutcome::Malformed {
                error: CaseError::Rejected { line, reason },
                ..
            } => {
                assert_eq!(*line, 1);
                assert!(reason.contains("before day 1"));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_cases_share_a_fingerprint() {
        let text = "2 10 20\n1 9 1 2\n3 2 1 2\n2 10 20\n3 2 1 2\n1 9 1 2\n0 0 0\n";
        let outcomes = solve_text(text, &HandlerConfig::default());
        match (&outcomes[0], &outcomes[1]) {
            (
                CaseOutcome::Solved { fingerprint: a, maximum_profit: x, .. },
                CaseOutcome::Solved { fingerprint: b, maximum_profit: y, .. },
            ) => {
                assert_eq!(a, b);
                assert_eq!(x, y);
            }
            other => panic!("expected two solved cases, got {:?}", other),
        }
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let outcome = CaseOutcome::Malformed {
            case_number: 3,
            error: CaseError::InvalidContext { line: 9 },
        };
        assert_eq!(
            serde_json::to_string(&outcome).unwrap(),
            r#"{"status":"malformed","case_number":3,"error":{"kind":"invalid_context","line":9}}"#
        );
    }
}
