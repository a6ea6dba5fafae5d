//! Command-line diagonal sudoku solver.
//!
//! Reads an 81-character puzzle (argument or stdin), solves it, and prints
//! the completed grid. Exit codes: 0 solved, 1 unsolvable, 2 malformed
//! input or I/O failure.

use std::{
    io::{self, Read as _},
    process::ExitCode,
};

use clap::Parser;
use diagoku_solver::{SolveError, solve_text};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// 81-character puzzle in row-major order; `.` marks an unknown cell.
    /// Read from standard input when omitted.
    puzzle: Option<String>,

    /// Replay every recorded assignment snapshot after the solution.
    #[arg(long)]
    trace: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let puzzle = match args.puzzle {
        Some(puzzle) => puzzle,
        None => {
            let mut buf = String::new();
            if let Err(err) = io::stdin().read_to_string(&mut buf) {
                eprintln!("failed to read puzzle from stdin: {err}");
                return ExitCode::from(2);
            }
            buf
        }
    };

    match solve_text(&puzzle) {
        Ok(solution) => {
            log::debug!("{} assignments recorded", solution.trace().len());
            println!("{}", solution.board());
            println!();
            println!("{}", solution.board().to_line());
            if args.trace {
                println!();
                println!("Trace ({} assignments):", solution.trace().len());
                for snapshot in solution.trace() {
                    println!("  {}", snapshot.to_line());
                }
            }
            ExitCode::SUCCESS
        }
        Err(err @ SolveError::Unsolvable) => {
            eprintln!("{err}");
            ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(2)
        }
    }
}
