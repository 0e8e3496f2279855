//! Case handler: checks an input file, then solves every case in it.
//!
//! Check order:
//!   1. filename ends in `.txt`
//!   2. file exists
//!   3. file is non-empty
//! The first failing check aborts the run before anything is solved.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::batch::{self, CaseOutcome};
use crate::config::HandlerConfig;
use crate::error::{RuntimeError, RuntimeResult};

/// True when `path` names a `.txt` file.
pub fn check_filename(path: &Path) -> bool {
    let ok = path.extension().is_some_and(|ext| ext == "txt");
    debug!(path = %path.display(), ok, "filename check");
    ok
}

/// True when `path` is a `.txt` file that exists.
pub fn check_file_exists(path: &Path) -> bool {
    if !check_filename(path) {
        return false;
    }
    let ok = path.is_file();
    debug!(path = %path.display(), ok, "existence check");
    ok
}

/// True when `path` is a `.txt` file with at least one byte.
pub fn check_file_nonempty(path: &Path) -> bool {
    if !check_filename(path) {
        return false;
    }
    let ok = fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false);
    debug!(path = %path.display(), ok, "non-empty check");
    ok
}

pub struct CaseHandler {
    path: PathBuf,
    config: HandlerConfig,
}

impl CaseHandler {
    pub fn new(path: impl Into<PathBuf>, config: HandlerConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    /// Check the input file, then solve every case in it.
    pub fn run(&self) -> RuntimeResult<Vec<CaseOutcome>> {
        let path_text = self.path.display().to_string();
        if !check_filename(&self.path) {
            return Err(RuntimeError::NotATextFile { path: path_text });
        }
        if !check_file_exists(&self.path) {
            return Err(RuntimeError::FileNotFound { path: path_text });
        }
        if !check_file_nonempty(&self.path) {
            return Err(RuntimeError::EmptyFile { path: path_text });
        }

        let text = fs::read_to_string(&self.path)?;
        let outcomes = batch::solve_text(&text, &self.config);

        let malformed = outcomes.iter().filter(|o| o.maximum_profit().is_none()).count();
        info!(
            path = %path_text,
            cases = outcomes.len(),
            malformed,
            solver = ?self.config.solver.kind,
            "input processed"
        );

        Ok(outcomes)
    }
}
