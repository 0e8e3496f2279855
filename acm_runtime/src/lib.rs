#![forbid(unsafe_code)]

//! ACM Runtime
//!
//! Reads case files, feeds each case to the engine and reports one
//! maximum per case.
//!
//! No search logic lives here. All of it is delegated to `acm_engine`.

pub mod error;
pub mod config;
pub mod input;
pub mod batch;
pub mod crosscheck;
pub mod handler;
pub mod logging;

pub use batch::CaseOutcome;
pub use config::HandlerConfig;
pub use error::{CaseError, RuntimeError, RuntimeResult};
pub use handler::CaseHandler;
