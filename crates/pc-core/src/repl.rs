//! Interactive REPL for the idea evaluator.
//!
//! Line-based: a plain text line is evaluated immediately, and slash
//! commands stand in for the buttons of a graphical front end (submit,
//! clear, example loading).

use std::io::{self, BufRead, IsTerminal, Write};

use pc_backend::ChatModel;
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::evaluator::{evaluate_idea, EMPTY_PROMPT_MESSAGE};
use crate::render::render_markdown;
use crate::report::ProgressReporter;
use crate::style::Style;

/// One parsed line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    ListExamples,
    /// Load the example with this 0-based index into the draft.
    LoadExample(usize),
    Clear,
    Send,
    Quit,
    Idea(String),
    Empty,
    Unknown(String),
}

/// Parse one line of input. Examples are numbered from 1 in the UI.
pub fn parse_command(line: &str) -> ReplCommand {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ReplCommand::Empty;
    }

    if let Some(rest) = trimmed.strip_prefix('/') {
        let mut parts = rest.split_whitespace();
        return match parts.next() {
            Some("help") => ReplCommand::Help,
            Some("examples") => ReplCommand::ListExamples,
            Some("example") => match parts.next().and_then(|n| n.parse::<usize>().ok()) {
                Some(n) if n >= 1 => ReplCommand::LoadExample(n - 1),
                _ => ReplCommand::Unknown(trimmed.to_string()),
            },
            Some("clear") => ReplCommand::Clear,
            Some("send") => ReplCommand::Send,
            Some("quit") | Some("exit") => ReplCommand::Quit,
            _ => ReplCommand::Unknown(trimmed.to_string()),
        };
    }

    ReplCommand::Idea(trimmed.to_string())
}

/// The two fields of the form: the idea draft and the last response.
#[derive(Debug, Default)]
pub struct FormState {
    pub draft: String,
    pub response: String,
}

/// Reset both form fields.
pub fn clear_inputs() -> (String, String) {
    (String::new(), String::new())
}

/// Load an example idea into the input field, unchanged.
pub fn load_example(example: &str) -> String {
    example.to_string()
}

fn print_help() {
    println!("commands:");
    println!("  /examples     list example ideas");
    println!("  /example N    load example N into the draft");
    println!("  /send         submit the current draft (bare enter works too)");
    println!("  /clear        clear the draft and the last response");
    println!("  /quit         exit");
    println!("anything else is evaluated as your startup idea");
}

/// Submit the current draft: progress to stderr, rendered markdown to
/// stdout. A blank draft short-circuits to the prompt-for-input message.
fn submit<M: ChatModel + Sync>(model: &M, runtime: &Runtime, form: &mut FormState, style: &Style) {
    if form.draft.trim().is_empty() {
        println!("{EMPTY_PROMPT_MESSAGE}");
        return;
    }

    let is_tty = io::stderr().is_terminal();
    let mut reporter = ProgressReporter::new(io::stderr(), is_tty, &form.draft);
    reporter.emit_start();

    let response = runtime.block_on(evaluate_idea(model, &form.draft, |stage| {
        reporter.emit_stage(stage)
    }));

    reporter.emit_done();

    form.response = response;
    println!();
    print!("{}", render_markdown(&form.response, style));
    println!();
}

/// Run the interactive REPL until EOF or /quit.
pub fn run_repl<M: ChatModel + Sync>(
    config: &Config,
    model: &M,
    runtime: &Runtime,
    style: Style,
) -> io::Result<()> {
    let mut form = FormState::default();

    println!("pitchcheck — startup idea evaluator");
    println!("Type your idea and press enter. /help lists commands.");

    let stdin = io::stdin();
    loop {
        print!("idea> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match parse_command(&line) {
            ReplCommand::Help => print_help(),
            ReplCommand::ListExamples => {
                for (i, example) in config.ui.examples.iter().enumerate() {
                    println!("  {}. {example}", i + 1);
                }
            }
            ReplCommand::LoadExample(index) => match config.ui.examples.get(index) {
                Some(example) => {
                    form.draft = load_example(example);
                    println!("loaded: {}", form.draft);
                    println!("press enter (or /send) to submit");
                }
                None => println!("no such example (see /examples)"),
            },
            ReplCommand::Clear => {
                (form.draft, form.response) = clear_inputs();
                println!("cleared");
            }
            ReplCommand::Send | ReplCommand::Empty => {
                submit(model, runtime, &mut form, &style);
            }
            ReplCommand::Quit => break,
            ReplCommand::Idea(text) => {
                form.draft = text;
                submit(model, runtime, &mut form, &style);
            }
            ReplCommand::Unknown(cmd) => {
                println!("unknown command: {cmd} (/help lists commands)");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_text_is_idea() {
        assert_eq!(
            parse_command("an app for dog walkers\n"),
            ReplCommand::Idea("an app for dog walkers".to_string())
        );
    }

    #[test]
    fn parse_blank_line_is_empty() {
        assert_eq!(parse_command(""), ReplCommand::Empty);
        assert_eq!(parse_command("   \n"), ReplCommand::Empty);
    }

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("/help"), ReplCommand::Help);
        assert_eq!(parse_command("/examples"), ReplCommand::ListExamples);
        assert_eq!(parse_command("/clear"), ReplCommand::Clear);
        assert_eq!(parse_command("/send"), ReplCommand::Send);
        assert_eq!(parse_command("/quit"), ReplCommand::Quit);
        assert_eq!(parse_command("/exit"), ReplCommand::Quit);
    }

    #[test]
    fn parse_command_trims_whitespace() {
        assert_eq!(parse_command("  /quit  \n"), ReplCommand::Quit);
    }

    #[test]
    fn parse_example_is_one_based() {
        assert_eq!(parse_command("/example 1"), ReplCommand::LoadExample(0));
        assert_eq!(parse_command("/example 3"), ReplCommand::LoadExample(2));
    }

    #[test]
    fn parse_example_rejects_bad_numbers() {
        assert!(matches!(
            parse_command("/example 0"),
            ReplCommand::Unknown(_)
        ));
        assert!(matches!(
            parse_command("/example abc"),
            ReplCommand::Unknown(_)
        ));
        assert!(matches!(parse_command("/example"), ReplCommand::Unknown(_)));
    }

    #[test]
    fn parse_unknown_command() {
        assert_eq!(
            parse_command("/frobnicate"),
            ReplCommand::Unknown("/frobnicate".to_string())
        );
    }

    #[test]
    fn clear_inputs_returns_empty_pair() {
        assert_eq!(clear_inputs(), (String::new(), String::new()));
    }

    #[test]
    fn load_example_is_identity() {
        let example = "An AI tool that matches pet owners with ideal pets.";
        assert_eq!(load_example(example), example);
    }

    #[test]
    fn form_starts_empty() {
        let form = FormState::default();
        assert!(form.draft.is_empty());
        assert!(form.response.is_empty());
    }

    #[test]
    fn clear_resets_form() {
        let mut form = FormState {
            draft: "idea".to_string(),
            response: "verdict".to_string(),
        };
        (form.draft, form.response) = clear_inputs();
        assert!(form.draft.is_empty());
        assert!(form.response.is_empty());
    }
}
