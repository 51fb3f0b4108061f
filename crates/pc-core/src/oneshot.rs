//! Non-interactive one-shot mode.
//!
//! The pipe-friendly equivalent of the REPL: take one idea from the
//! command line or stdin, evaluate it, print the raw markdown to stdout,
//! and exit. Progress goes to stderr so the output stays clean.

use std::io::{self, IsTerminal};

use pc_backend::ChatModel;
use tokio::runtime::Runtime;

use crate::evaluator::{evaluate_idea, EMPTY_PROMPT_MESSAGE};
use crate::report::ProgressReporter;

/// Evaluate one idea and print the result. Returns the exit code.
pub fn run_once<M: ChatModel + Sync>(model: &M, runtime: &Runtime, idea: &str) -> i32 {
    if idea.trim().is_empty() {
        println!("{EMPTY_PROMPT_MESSAGE}");
        return 0;
    }

    let is_tty = io::stderr().is_terminal();
    let mut reporter = ProgressReporter::new(io::stderr(), is_tty, idea);
    reporter.emit_start();

    let result = runtime.block_on(evaluate_idea(model, idea, |stage| {
        reporter.emit_stage(stage)
    }));

    reporter.emit_done();

    println!("{result}");
    0
}
