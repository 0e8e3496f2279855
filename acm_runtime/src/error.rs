//! Runtime error types

use serde::Serialize;
use thiserror::Error;

/// Failures that stop a whole run.
#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Input file must be a .txt file: {path}")]
    NotATextFile { path: String },

    #[error("Input file not found: {path}")]
    FileNotFound { path: String },

    #[error("Input file is empty: {path}")]
    EmptyFile { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// A single case that could not be solved. The run carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CaseError {
    #[error("Error in the case found while parsing the context of the case (line {line})")]
    InvalidContext { line: usize },

    #[error("Error in the case found while parsing the machine descriptions (line {line}, case at line {case_line})")]
    InvalidMachine { line: usize, case_line: usize },

    #[error("Case at line {line} rejected: {reason}")]
    Rejected { line: usize, reason: String },
}
