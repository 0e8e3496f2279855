//! Case input: line parsing and case extraction from a text body.
//!
//! Format, one case after another:
//!   N C D          context: machine count, starting cash, horizon days
//!   D P R G        N machine lines: day, price, resale, daily profit
//!   ...
//!   0 0 0          end of input (end of text also ends it)
//!
//! A bad context line costs one line; a bad machine line costs the whole
//! declared block. Machines available after day D are dropped silently.
//! `0 0 0` followed by spaces is not the terminator: it parses as an empty
//! case with no cash and no days.
//!
//! The reader only checks shape. A case that parses but holds a machine on
//! day 0 is rejected later by `batch::solve_all` (`CaseError::Rejected`)
//! and is never solved.

use acm_engine::{Case, MachineOffer};

use crate::error::CaseError;

const END_OF_INPUT: &str = "0 0 0";

/// Parse one line into 3 (context) or 4 (machine) non-negative integers.
///
/// Any `-` rejects the line outright, as do non-numeric tokens and any
/// other token count.
pub fn parse_line(line: &str) -> Option<Vec<i64>> {
    if line.contains('-') {
        return None;
    }
    let values: Vec<i64> = line
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;
    matches!(values.len(), 3 | 4).then_some(values)
}

/// `0 0 0` exactly. Only a carriage return may follow it.
fn is_end_of_input(line: &str) -> bool {
    line.strip_suffix('\r').unwrap_or(line) == END_OF_INPUT
}

/// One well-formed case, ready for the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseInput {
    /// 1-based line of the context line.
    pub line: usize,
    pub declared_machines: usize,
    pub case: Case,
    pub machines: Vec<MachineOffer>,
}

/// Walks a text body case by case.
pub struct CaseReader<'a> {
    lines: Vec<&'a str>,
    cursor: usize,
    finished: bool,
}

impl<'a> CaseReader<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            cursor: 0,
            finished: false,
        }
    }

    /// 1-based line the next case starts on.
    pub fn next_line(&self) -> usize {
        self.cursor + 1
    }

    fn read_case(&mut self, context_line: &str) -> Result<CaseInput, CaseError> {
        let start = self.cursor;

        let context = match parse_line(context_line) {
            Some(values) if values.len() == 3 => values,
            _ => {
                self.cursor += 1;
                return Err(CaseError::InvalidContext { line: start + 1 });
            }
        };

        let declared = usize::try_from(context[0]).unwrap_or(usize::MAX);
        let case = Case::new(context[1], context[2]);
        let block_end = start.saturating_add(declared).saturating_add(1);

        let mut machines = Vec::new();
        for index in start + 1..block_end {
            let parsed = self.lines.get(index).and_then(|l| parse_line(l));
            match parsed {
                Some(v) if v.len() == 4 => {
                    let offer = MachineOffer::new(v[0], v[1], v[2], v[3]);
                    if offer.available_day <= case.horizon_days {
                        machines.push(offer);
                    }
                }
                _ => {
                    self.cursor = block_end;
                    return Err(CaseError::InvalidMachine {
                        line: index + 1,
                        case_line: start + 1,
                    });
                }
            }
        }

        self.cursor = block_end;
        Ok(CaseInput {
            line: start + 1,
            declared_machines: declared,
            case,
            machines,
        })
    }
}

impl Iterator for CaseReader<'_> {
    type Item = Result<CaseInput, CaseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let context_line = match self.lines.get(self.cursor) {
            Some(line) if !is_end_of_input(line) => *line,
            _ => {
                self.finished = true;
                return None;
            }
        };
        Some(self.read_case(context_line))
    }
}
