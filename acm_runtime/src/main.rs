//! `acm`: maximum cash per case for an ACM restructuring input file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::error;

use acm_engine::{SolverConfig, SolverKind};
use acm_runtime::{logging, CaseHandler, HandlerConfig, RuntimeResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SolverArg {
    Permutation,
    Recursive,
}

impl From<SolverArg> for SolverKind {
    fn from(arg: SolverArg) -> Self {
        match arg {
            SolverArg::Permutation => SolverKind::Permutation,
            SolverArg::Recursive => SolverKind::Recursive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Maximum cash ACM can hold at the end of each restructuring case
#[derive(Parser, Debug)]
#[command(name = "acm")]
#[command(about = "Solves every case of an ACM input file and prints one line per case")]
struct Args {
    /// Input file (.txt)
    input: PathBuf,

    /// Longest acquisition sequence to try (defaults to half the horizon)
    #[arg(long, allow_negative_numbers = true)]
    max_acquisitions: Option<i64>,

    /// Search used for every case
    #[arg(long, value_enum, default_value = "permutation")]
    solver: SolverArg,

    /// Also run the other solver and warn when the two disagree
    #[arg(long)]
    cross_check: bool,

    /// Solve repeated cases again instead of reusing their result
    #[arg(long)]
    no_dedup: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn handler_config(&self) -> HandlerConfig {
        HandlerConfig {
            solver: SolverConfig {
                kind: self.solver.into(),
                max_sequence_length: self.max_acquisitions,
            },
            deduplicate: !self.no_dedup,
            cross_check: self.cross_check,
        }
    }
}

fn run(args: &Args) -> RuntimeResult<()> {
    let handler = CaseHandler::new(&args.input, args.handler_config());
    for outcome in handler.run()? {
        match args.format {
            OutputFormat::Text => println!("{}", outcome),
            OutputFormat::Json => println!("{}", serde_json::to_string(&outcome)?),
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_tracing(&args.log_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "run failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_map_to_default_handler_config() {
        let args = Args::try_parse_from(["acm", "input.txt"]).unwrap();
        assert_eq!(args.handler_config(), HandlerConfig::default());
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn flags_reach_the_config() {
        let args = Args::try_parse_from([
            "acm",
            "input.txt",
            "--max-acquisitions",
            "3",
            "--solver",
            "recursive",
            "--cross-check",
            "--no-dedup",
        ])
        .unwrap();
        let config = args.handler_config();
        assert_eq!(config.solver.kind, SolverKind::Recursive);
        assert_eq!(config.solver.max_sequence_length, Some(3));
        assert!(config.cross_check);
        assert!(!config.deduplicate);
    }

    #[test]
    fn negative_cap_is_accepted_and_left_to_the_engine() {
        let args = Args::try_parse_from(["acm", "input.txt", "--max-acquisitions", "-1"]).unwrap();
        assert_eq!(args.max_acquisitions, Some(-1));
    }

    #[test]
    fn input_is_required() {
        assert!(Args::try_parse_from(["acm"]).is_err());
    }
}
